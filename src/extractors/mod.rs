//! Construct parsers
//!
//! A doc comment documents the statement that follows it. The orchestrator
//! hands each statement's head (the text before its terminating `;`, `{` or
//! `}`) to [`parse_construct`], which classifies the head by shape and runs
//! the matching parser.
//!
//! # Dispatch
//!
//! Shapes are checked in order, first match wins:
//!
//! 1. head starts with `$` → [`VariableParser`]
//! 2. head starts with `@mixin` → [`MixinParser`]
//! 3. anything else → [`GenericParser`]
//!
//! A parser may decline a statement it cannot make sense of (for example
//! `$foo;` with no value). Declined statements fall back to the generic
//! parser, so every statement yields a construct.

pub mod generic;
pub mod mixin;
pub mod variable;

pub use generic::GenericParser;
pub use mixin::MixinParser;
pub use variable::VariableParser;

use tracing::debug;

use crate::docblock::Construct;

/// The character that ended a statement head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// `;` ends a declaration.
    Semicolon,
    /// `{` opens a block body.
    OpenBrace,
    /// `}` closes the enclosing block.
    CloseBrace,
}

impl Terminator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ';' => Some(Self::Semicolon),
            '{' => Some(Self::OpenBrace),
            '}' => Some(Self::CloseBrace),
            _ => None,
        }
    }
}

/// A statement head as gathered after a doc comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    /// Text before the terminator, leading whitespace removed.
    pub head: String,
    /// `None` if the input or the next doc comment came first.
    pub terminator: Option<Terminator>,
}

impl Statement {
    pub fn new(head: impl Into<String>, terminator: Option<Terminator>) -> Self {
        Self {
            head: head.into(),
            terminator,
        }
    }
}

/// Shape of a statement, decided from its head alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Variable,
    Mixin,
    Other,
}

impl Shape {
    pub fn classify(head: &str) -> Self {
        let head = head.trim_start();
        if head.starts_with('$') {
            return Shape::Variable;
        }
        if head
            .strip_prefix("@mixin")
            .is_some_and(|rest| rest.starts_with(char::is_whitespace))
        {
            return Shape::Mixin;
        }
        Shape::Other
    }
}

/// Common interface for construct parsers.
pub trait ConstructParser {
    /// Parse a statement, or return `None` to decline it.
    fn parse(&self, statement: &Statement) -> Option<Construct>;

    /// Get a descriptive name for this parser (e.g., "variable").
    fn name(&self) -> &'static str;
}

/// Turn a statement into a construct. Never fails.
pub fn parse_construct(statement: &Statement) -> Construct {
    let shape = Shape::classify(&statement.head);
    let parsed = match shape {
        Shape::Variable => VariableParser.parse(statement),
        Shape::Mixin => MixinParser.parse(statement),
        Shape::Other => None,
    };
    parsed.unwrap_or_else(|| {
        if shape != Shape::Other {
            debug!(?shape, head = %statement.head, "statement declined, using generic record");
        }
        GenericParser.construct(statement)
    })
}
