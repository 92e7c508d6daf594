//! Path normalization for index keys and manifest references.
//!
//! Index keys are library-relative, `/`-separated, NFC-normalized strings.
//! Manifest references go through the same normalization before lookup so
//! that the two sides always agree.

use crate::error::CuratorError;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Normalize a library-relative path for use as an index key: forward
/// slashes, no leading `./`, Unicode NFC.
pub fn normalize_rel(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    let mut trimmed = slashed.as_str();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    trimmed.nfc().collect()
}

/// Canonicalize the library root for display and joining. Uses `dunce` so
/// Windows paths come back without UNC prefixes.
pub fn canonicalize_root(root: &Path) -> Result<PathBuf, CuratorError> {
    dunce::canonicalize(root).map_err(|e| CuratorError::io(root.to_path_buf(), e))
}

/// The final component of a `/`-separated relative path.
pub fn file_name(rel: &str) -> &str {
    rel.rsplit('/').next().unwrap_or(rel)
}
