//! Shared file reading utilities for the command-line front end
//!
//! Reads SCSS sources with a configurable size limit and parses human
//! file-size strings for `--max-file-size`.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, ScssDocError};

/// Default maximum file size for extraction (1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_000_000;

/// Extensions of files picked up when walking directories.
pub const SCSS_EXTENSIONS: &[&str] = &["scss"];

/// Global configurable max file size. Set via `set_max_file_size()`.
static MAX_FILE_SIZE: AtomicU64 = AtomicU64::new(DEFAULT_MAX_FILE_SIZE);

/// Set the maximum file size for extraction.
/// This affects all subsequent calls to `read_source_file`.
pub fn set_max_file_size(size: u64) {
    MAX_FILE_SIZE.store(size, Ordering::SeqCst);
}

/// Get the current maximum file size setting.
pub fn get_max_file_size() -> u64 {
    MAX_FILE_SIZE.load(Ordering::SeqCst)
}

/// Returns true if the path has an SCSS extension (case-insensitive).
pub fn is_scss_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SCSS_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Read a source file if it is within the size limit.
pub fn read_source_file(path: &Path) -> Result<String> {
    let read_error = |source| ScssDocError::Read {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(read_error)?.len();
    let limit = get_max_file_size();
    if size > limit {
        return Err(ScssDocError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }

    fs::read_to_string(path).map_err(read_error)
}

/// Read all of standard input.
pub fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
pub fn parse_file_size(s: &str) -> Result<u64> {
    let upper = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = upper.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = upper.strip_suffix('K') {
        (n, 1024)
    } else {
        (upper.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| ScssDocError::InvalidSize {
            value: s.to_string(),
            reason: format!("invalid number: {}", num_str.trim()),
        })?;

    num.checked_mul(multiplier)
        .ok_or_else(|| ScssDocError::InvalidSize {
            value: s.to_string(),
            reason: "size is too large".to_string(),
        })
}
