use std::fs;
use std::path::Path;

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::document;
use crate::error::{Error, Result};
use crate::index::{TermFreq, TermFreqIndex};

/// The outcome of one indexing run: the complete index plus the number of
/// entries that were passed over (unsupported extension or a per-file
/// failure). Hidden entries and directories are not counted.
pub struct CorpusIndex {
    pub index: TermFreqIndex,
    pub skipped: usize,
}

const INDEXABLE_EXTENSIONS: &[&str] = &["xml", "xhtml"];

/// Walk `input` (a directory or a single file) and build the full index.
///
/// The input is anchored at the process working directory, so relative
/// invocations resolve the same way regardless of where the binary lives.
/// Walk errors are fatal; anything that goes wrong with a single file is
/// logged and skipped so one bad document cannot sink the run.
pub fn index_corpus(input: &str, report_skipped: bool) -> Result<CorpusIndex> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let root = std::env::current_dir()?.join(input);
    let root_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidRoot(root.clone()))?;

    let mut index = TermFreqIndex::new();
    let mut skipped = 0usize;

    for entry in WalkDir::new(&root) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if !has_indexable_extension(entry.path()) {
            skipped += 1;
            if report_skipped {
                info!(path = %entry.path().display(), "skipping unsupported file");
            }
            continue;
        }

        let tf = match index_file(entry.path()) {
            Ok(tf) => tf,
            Err(err) => {
                warn!(path = %entry.path().display(), %err, "failed to index file");
                skipped += 1;
                continue;
            }
        };

        match derive_doc_key(entry.path(), &root_name) {
            Ok(key) => {
                index.insert(key, tf);
            }
            Err(err) => {
                warn!(path = %entry.path().display(), %err, "rejecting entry");
                skipped += 1;
            }
        }
    }

    Ok(CorpusIndex { index, skipped })
}

fn has_indexable_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            INDEXABLE_EXTENSIONS
                .iter()
                .any(|ok| ext.eq_ignore_ascii_case(ok))
        })
}

fn index_file(path: &Path) -> Result<TermFreq> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes)?;
    document::term_frequencies(&content)
}

/// Reduce a walked absolute path to its stable document key: the suffix of
/// components starting at the one matching the corpus root's own name,
/// rejoined with `/`. A path that never revisits the root name cannot be
/// keyed and is rejected rather than silently producing an empty key.
fn derive_doc_key(path: &Path, root_name: &str) -> Result<String> {
    let root_lower = root_name.to_lowercase();
    let components: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    let start = components
        .iter()
        .position(|c| c.to_lowercase() == root_lower)
        .ok_or_else(|| Error::KeyDerivation {
            root: root_name.to_string(),
            path: path.to_path_buf(),
        })?;

    Ok(components[start..].join("/"))
}
