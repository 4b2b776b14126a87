//! Output configuration types

const DEFAULT_WRAP_WIDTH: usize = 100;

/// Configuration for text output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print the whole comment beneath each record instead of its first line.
    pub full_comment: bool,
    pub wrap_width: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            full_comment: false,
            wrap_width: Some(DEFAULT_WRAP_WIDTH),
        }
    }
}
