//! Splits SCSS source into comment and statement chunks
//!
//! The scanner is the only place that decides where comments start and end.
//! Everything between two comments (or between a comment and either end of
//! the input) is one statement chunk, even if it spans several declarations;
//! the orchestrator in [`crate::docs`] decides how much of it a doc comment
//! documents.

use crate::comments::CommentKind;

/// A slice of the source with its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub offset: usize,
}

/// One scanned chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'a> {
    Comment { span: Span<'a>, kind: CommentKind },
    Statement(Span<'a>),
}

impl<'a> Chunk<'a> {
    pub fn span(&self) -> Span<'a> {
        match self {
            Chunk::Comment { span, .. } | Chunk::Statement(span) => *span,
        }
    }

    pub fn is_doc_comment(&self) -> bool {
        matches!(
            self,
            Chunk::Comment {
                kind: CommentKind::Doc,
                ..
            }
        )
    }
}

/// Lazy iterator over the chunks of a source string.
///
/// Concatenating the text of every chunk reproduces the input exactly.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.source[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let offset = self.pos;
        let is_comment = rest.starts_with("//") || rest.starts_with("/*");
        let len = if rest.starts_with("//") {
            rest.find('\n').unwrap_or(rest.len())
        } else if rest.starts_with("/*") {
            // An unterminated block comment runs to the end of the input
            rest[2..].find("*/").map_or(rest.len(), |end| end + 4)
        } else {
            statement_len(rest)
        };
        self.pos += len;

        let span = Span {
            text: &rest[..len],
            offset,
        };
        Some(if is_comment {
            Chunk::Comment {
                span,
                kind: CommentKind::classify(span.text),
            }
        } else {
            Chunk::Statement(span)
        })
    }
}

/// Length of the statement at the start of `rest`, up to the next comment
/// opener outside quotes and unquoted `url(...)` bodies.
fn statement_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' {
                    i += 2;
                    continue;
                }
                if b == q || b == b'\n' {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'/' if matches!(bytes.get(i + 1), Some(b'/' | b'*')) => return i,
                b'u' | b'U' if starts_unquoted_url(bytes, i) => {
                    i = skip_url(bytes, i);
                    continue;
                }
                _ => {}
            },
        }
        i += 1;
    }

    bytes.len()
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

fn starts_unquoted_url(bytes: &[u8], i: usize) -> bool {
    let opens_url = bytes
        .get(i..i + 4)
        .is_some_and(|s| s.eq_ignore_ascii_case(b"url("));
    if !opens_url || (i > 0 && is_ident_byte(bytes[i - 1])) {
        return false;
    }
    let first_arg = bytes[i + 4..].iter().find(|b| !b.is_ascii_whitespace());
    !matches!(first_arg, Some(b'"' | b'\''))
}

/// Index just past the closing `)` of an unquoted url, or the end of the
/// line if it never closes.
fn skip_url(bytes: &[u8], i: usize) -> usize {
    let body = i + 4;
    bytes[body..]
        .iter()
        .position(|&b| b == b')' || b == b'\n')
        .map_or(bytes.len(), |p| {
            if bytes[body + p] == b')' {
                body + p + 1
            } else {
                body + p
            }
        })
}
