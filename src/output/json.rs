//! JSON output formatting

use std::io::Write;

use crate::error::Result;
use crate::walker::FileDocs;

/// Write the extracted files as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, files: &[FileDocs]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, files)?;
    writeln!(out)?;
    Ok(())
}

/// Print the extracted files as pretty-printed JSON to stdout.
pub fn print_json(files: &[FileDocs]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_json(&mut lock, files)
}
