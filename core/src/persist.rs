use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::index::TermFreqIndex;

/// An interchangeable on-disk encoding for the index. Both codecs must
/// round-trip the full mapping losslessly.
trait Codec {
    fn encode(&self, index: &TermFreqIndex) -> Result<Vec<u8>>;
    fn decode(&self, bytes: &[u8]) -> Result<TermFreqIndex>;
}

struct JsonCodec;

impl Codec for JsonCodec {
    fn encode(&self, index: &TermFreqIndex) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(index)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<TermFreqIndex> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

struct BinaryCodec;

impl Codec for BinaryCodec {
    fn encode(&self, index: &TermFreqIndex) -> Result<Vec<u8>> {
        Ok(bincode::serialize(index)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<TermFreqIndex> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Binary,
}

impl Format {
    pub fn file_name(self) -> &'static str {
        match self {
            Format::Json => "index.json",
            Format::Binary => "index.bin",
        }
    }

    fn codec(self) -> &'static dyn Codec {
        match self {
            Format::Json => &JsonCodec,
            Format::Binary => &BinaryCodec,
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "json" => Ok(Format::Json),
            "bin" => Ok(Format::Binary),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Write the full index to `index.<format>` under `dir`, returning the path.
pub fn save(index: &TermFreqIndex, format: Format, dir: &Path) -> Result<PathBuf> {
    let bytes = format.codec().encode(index)?;
    let path = dir.join(format.file_name());
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Load the full index back from `index.<format>` under `dir`. A missing
/// file is reported as its own error so the operator learns to index first
/// instead of seeing a bare I/O failure.
pub fn load(format: Format, dir: &Path) -> Result<TermFreqIndex> {
    let path = dir.join(format.file_name());
    let bytes = fs::read(&path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            Error::IndexNotFound {
                file: format.file_name().to_string(),
            }
        } else {
            Error::Io(err)
        }
    })?;
    format.codec().decode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_parse() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("bin".parse::<Format>().unwrap(), Format::Binary);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = "msgpack".parse::<Format>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(name) if name == "msgpack"));
    }

    #[test]
    fn missing_index_file_has_a_helpful_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Format::Json, dir.path()).unwrap_err();
        assert!(matches!(err, Error::IndexNotFound { file } if file == "index.json"));
    }
}
