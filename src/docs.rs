//! Doc comment extraction
//!
//! [`DocExtractor`] walks the [`Scanner`] output and pairs every doc comment
//! with the statement that follows it:
//!
//! ```text
//! ExpectComment ─doc comment─▶ InDocComment ─▶ ExpectConstruct ─text─▶ InConstruct
//!       ▲                                                                 │
//!       └──────────────────── ; { } / next doc comment / EOF ◀────────────┘
//! ```
//!
//! Only the head of the statement is consumed (up to its first top-level
//! `;`, `{` or `}`). A mixin or rule body is therefore scanned like any other
//! text, and doc comments inside it come out as records of their own.

use std::iter::Peekable;

use tracing::trace;

use crate::docblock::DocBlock;
use crate::extractors::{Statement, Terminator, parse_construct};
use crate::scanner::{Chunk, Scanner, Span};
use crate::string_utils::{DepthTracker, Nesting};

/// Extract every documented construct from SCSS source, in source order.
///
/// # Example
///
/// ```
/// use scssdoc::{parse, Construct};
///
/// let docs = parse("/** My variable */\n$foo: 10em !default;");
/// assert_eq!(docs.len(), 1);
/// assert_eq!(docs[0].comment, "/** My variable */");
/// assert_eq!(docs[0].code.tagname(), "css_var");
/// assert_eq!(docs[0].code.name(), Some("$foo"));
/// ```
pub fn parse(source: &str) -> Vec<DocBlock> {
    DocExtractor::new(source).collect()
}

#[derive(Debug)]
enum State<'a> {
    ExpectComment,
    InDocComment(Span<'a>),
    ExpectConstruct(Span<'a>),
    InConstruct(Span<'a>, HeadBuilder),
}

/// Lazy iterator over the [`DocBlock`]s of a source string.
pub struct DocExtractor<'a> {
    source: &'a str,
    chunks: Peekable<Scanner<'a>>,
    lines: LineCounter,
}

impl<'a> DocExtractor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chunks: Scanner::new(source).peekable(),
            lines: LineCounter::default(),
        }
    }

    fn emit(&mut self, comment: Span<'a>, statement: Statement) -> DocBlock {
        let linenr = self.lines.line_at(self.source, comment.offset);
        let code = parse_construct(&statement);
        trace!(linenr, tagname = code.tagname(), "paired doc comment");
        DocBlock {
            comment: comment.text.to_string(),
            linenr,
            code,
        }
    }
}

impl Iterator for DocExtractor<'_> {
    type Item = DocBlock;

    fn next(&mut self) -> Option<Self::Item> {
        let mut state = State::ExpectComment;

        loop {
            state = match state {
                State::ExpectComment => match self.chunks.next()? {
                    chunk if chunk.is_doc_comment() => State::InDocComment(chunk.span()),
                    _ => State::ExpectComment,
                },

                State::InDocComment(comment) => State::ExpectConstruct(comment),

                State::ExpectConstruct(comment) => match self.chunks.peek().copied() {
                    None => return Some(self.emit(comment, Statement::default())),
                    Some(chunk) if chunk.is_doc_comment() => {
                        return Some(self.emit(comment, Statement::default()));
                    }
                    Some(Chunk::Comment { .. }) => {
                        self.chunks.next();
                        State::ExpectConstruct(comment)
                    }
                    Some(Chunk::Statement(span)) if span.text.trim().is_empty() => {
                        self.chunks.next();
                        State::ExpectConstruct(comment)
                    }
                    Some(Chunk::Statement(_)) => State::InConstruct(comment, HeadBuilder::new()),
                },

                State::InConstruct(comment, mut head) => match self.chunks.peek().copied() {
                    None => return Some(self.emit(comment, head.finish(None))),
                    Some(chunk) if chunk.is_doc_comment() => {
                        return Some(self.emit(comment, head.finish(None)));
                    }
                    Some(Chunk::Comment { .. }) => {
                        self.chunks.next();
                        head.break_word();
                        State::InConstruct(comment, head)
                    }
                    Some(Chunk::Statement(span)) => {
                        self.chunks.next();
                        match head.feed(span.text) {
                            Some(terminator) => {
                                return Some(self.emit(comment, head.finish(Some(terminator))));
                            }
                            None => State::InConstruct(comment, head),
                        }
                    }
                },
            };
        }
    }
}

/// Accumulates a statement head across statement chunks, tracking nesting
/// so only a top-level terminator ends it.
#[derive(Debug)]
struct HeadBuilder {
    head: String,
    tracker: DepthTracker,
    pending_space: bool,
}

impl HeadBuilder {
    fn new() -> Self {
        Self {
            head: String::new(),
            tracker: DepthTracker::new(Nesting::ALL),
            pending_space: false,
        }
    }

    /// Append `text` up to the first top-level terminator, if any.
    fn feed(&mut self, text: &str) -> Option<Terminator> {
        for c in text.chars() {
            if self.tracker.step(c) {
                if let Some(terminator) = Terminator::from_char(c) {
                    return Some(terminator);
                }
            }
            if self.pending_space {
                self.head.push(' ');
                self.pending_space = false;
            }
            self.head.push(c);
        }
        None
    }

    /// A skipped comment separates the text on either side of it.
    fn break_word(&mut self) {
        self.pending_space = !self.head.is_empty();
    }

    fn finish(self, terminator: Option<Terminator>) -> Statement {
        Statement::new(self.head.trim_start(), terminator)
    }
}

/// Converts byte offsets to line numbers for offsets given in
/// non-decreasing order, scanning each byte of the source once.
#[derive(Debug, Default)]
struct LineCounter {
    pos: usize,
    newlines: usize,
}

impl LineCounter {
    fn line_at(&mut self, source: &str, offset: usize) -> usize {
        if offset > self.pos {
            self.newlines += source.as_bytes()[self.pos..offset]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.pos = offset;
        }
        self.newlines + 1
    }
}
