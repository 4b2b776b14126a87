//! Doc block formatting
//!
//! - `text` - console output with colors
//! - `json` - JSON output for the documentation model builder
//! - `utils` - comment cleanup, signatures and text wrapping

mod config;
mod json;
mod text;
mod utils;

pub use config::OutputConfig;
pub use json::{print_json, write_json};
pub use text::TextFormatter;
pub use utils::{comment_lines, signature, wrap_text};

use std::io;

use termcolor::{ColorChoice, StandardStream};

use crate::walker::FileDocs;

/// Print files as text to stdout.
pub fn print_text(files: &[FileDocs], config: OutputConfig) -> io::Result<()> {
    let choice = if config.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut formatter = TextFormatter::new(config, StandardStream::stdout(choice));
    formatter.write_files(files)
}
