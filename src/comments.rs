//! Comment classification
//!
//! SCSS has two comment syntaxes. Only block comments opening with exactly
//! two asterisks carry documentation:
//!
//! - `/** ... */` - doc comment, paired with the construct that follows
//! - `/*! ... */` - loud comment, kept in compiled CSS, not documentation
//! - `/* ... */`  - plain block comment
//! - `// ...`     - line comment
//!
//! A `/***` banner is a plain block comment; the empty `/**/` is an empty
//! doc comment.

/// The kind of a scanned comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    Doc,
    Loud,
    Block,
    Line,
}

impl CommentKind {
    /// Classify raw comment text, delimiters included.
    pub fn classify(text: &str) -> Self {
        if text.starts_with("//") {
            return Self::Line;
        }
        match text.strip_prefix("/*") {
            Some(body) if body.starts_with('!') => Self::Loud,
            Some(body) => match body.strip_prefix('*') {
                Some(rest) if !rest.starts_with('*') => Self::Doc,
                _ => Self::Block,
            },
            None => Self::Block,
        }
    }
}

/// Returns true if `text` is a doc comment.
///
/// # Example
///
/// ```
/// use scssdoc::comments::is_doc_comment;
///
/// assert!(is_doc_comment("/** Primary color */"));
/// assert!(!is_doc_comment("/* plain */"));
/// assert!(!is_doc_comment("/*! loud */"));
/// assert!(!is_doc_comment("// line"));
/// ```
pub fn is_doc_comment(text: &str) -> bool {
    CommentKind::classify(text) == CommentKind::Doc
}
