use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("malformed document: {0}")]
    Markup(#[from] quick_xml::Error),

    #[error("document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("json codec error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary codec error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("input path is required")]
    EmptyInput,

    #[error("cannot determine corpus name from {0:?}")]
    InvalidRoot(PathBuf),

    #[error("format {0:?} not supported")]
    UnsupportedFormat(String),

    #[error("no document key for {path:?}: {root:?} does not appear in its components")]
    KeyDerivation { root: String, path: PathBuf },

    #[error("{file} not found. index your corpus first")]
    IndexNotFound { file: String },
}
