//! Console output
//!
//! One header line per file, then one line per doc block:
//!
//! ```text
//! src/_vars.scss
//!      1  css_var    $foo: 10em  number  My variable
//!      4  css_mixin  foo($alpha, $beta: 2px)  My mixin
//! ```

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::docblock::{Construct, DocBlock};
use crate::walker::FileDocs;

use super::config::OutputConfig;
use super::utils::{comment_lines, signature, wrap_text};

/// Width reserved for the line number column.
const LINENR_WIDTH: usize = 6;
/// Width of the tagname column (`css_mixin` plus padding).
const TAG_WIDTH: usize = 11;

/// Writes doc blocks to any color-capable writer.
pub struct TextFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Take back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_files(&mut self, files: &[FileDocs]) -> io::Result<()> {
        for file in files {
            self.write_file(file)?;
        }
        Ok(())
    }

    pub fn write_file(&mut self, file: &FileDocs) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.out, "{}", file.path.display())?;
        self.out.reset()?;
        writeln!(self.out)?;

        if file.docs.is_empty() {
            self.out.set_color(ColorSpec::new().set_dimmed(true))?;
            writeln!(self.out, "{:>width$}  (no doc comments)", "", width = LINENR_WIDTH)?;
            self.out.reset()?;
        }
        for block in &file.docs {
            self.write_block(block)?;
        }
        Ok(())
    }

    fn write_block(&mut self, block: &DocBlock) -> io::Result<()> {
        write!(self.out, "{:>width$}  ", block.linenr, width = LINENR_WIDTH)?;

        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(self.out, "{:<width$}", block.code.tagname(), width = TAG_WIDTH)?;
        self.out.reset()?;

        let signature = signature(&block.code);
        if !signature.is_empty() {
            self.out.set_color(ColorSpec::new().set_bold(true))?;
            write!(self.out, "{}", signature)?;
            self.out.reset()?;
            write!(self.out, "  ")?;
        }

        if let Construct::CssVar { value_type, .. } = &block.code {
            self.out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
            match value_type {
                Some(t) => write!(self.out, "{}  ", t)?,
                None => write!(self.out, "null  ")?,
            }
            self.out.reset()?;
        }

        let lines = comment_lines(&block.comment);
        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        if let Some(first) = lines.first() {
            write!(self.out, "{}", first)?;
        }
        self.out.reset()?;
        writeln!(self.out)?;

        if self.config.full_comment && lines.len() > 1 {
            self.write_full_comment(&lines[1..])?;
        }
        Ok(())
    }

    fn write_full_comment(&mut self, lines: &[&str]) -> io::Result<()> {
        let indent = " ".repeat(LINENR_WIDTH + 2 + TAG_WIDTH);
        let width = self
            .config
            .wrap_width
            .map(|w| w.saturating_sub(indent.len()))
            .filter(|&w| w > 10)
            .unwrap_or(0);

        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        for line in lines {
            for wrapped in wrap_text(line, width) {
                writeln!(self.out, "{}{}", indent, wrapped)?;
            }
        }
        self.out.reset()
    }
}
