use std::fs;
use std::path::Path;

use encoding_rs::UTF_8;

use crate::error::{GenerateError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Reads a UTF-8 text file and trims surrounding whitespace.
///
/// The file must exist; callers that tolerate absence go through
/// [`read_text_or`].
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| GenerateError::io(path, e))?;

    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);

    let text = UTF_8
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| GenerateError::Decode {
            path: path.to_path_buf(),
        })?;

    Ok(text.trim().to_string())
}

/// Like [`read_text`], but a missing file yields `default`.
///
/// Only "not found" maps to the default; any other stat failure is fatal.
pub fn read_text_or(path: &Path, default: &str) -> Result<String> {
    let exists = path.try_exists().map_err(|e| GenerateError::io(path, e))?;
    if !exists {
        tracing::debug!(path = %path.display(), "metadata file missing, using default");
        return Ok(default.to_string());
    }
    read_text(path)
}
