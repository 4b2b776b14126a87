//! scssdoc - extract documented variables and mixins from SCSS sources

pub mod comments;
pub mod docblock;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod file_utils;
pub mod output;
pub mod scanner;
pub mod string_utils;
pub mod types;
pub mod walker;

pub use docblock::{Construct, DocBlock, Param};
pub use docs::{DocExtractor, parse};
pub use error::{Result, ScssDocError};
pub use output::{OutputConfig, TextFormatter, print_json, print_text};
pub use types::{ValueType, infer_type};
pub use walker::{FileDocs, ScanConfig, collect_files, extract_file, extract_files};
