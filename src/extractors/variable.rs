//! Variable declarations: `$name: value [!default] [!global];`

use std::sync::LazyLock;

use regex::Regex;

use super::{ConstructParser, Statement, Terminator};
use crate::docblock::Construct;
use crate::string_utils::strip_any_suffix;
use crate::types::infer_type;

static VARIABLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(\$[\w-]+)\s*:(.*)$").expect("VARIABLE_PATTERN regex is invalid")
});

/// Assignment flags that are not part of the value.
const FLAGS: &[&str] = &["!default", "!global"];

/// Parses `$name: value` heads into [`Construct::CssVar`].
pub struct VariableParser;

impl ConstructParser for VariableParser {
    fn parse(&self, statement: &Statement) -> Option<Construct> {
        if statement.terminator == Some(Terminator::OpenBrace) {
            return None;
        }

        let caps = VARIABLE_PATTERN.captures(statement.head.trim())?;
        let name = caps.get(1)?.as_str();
        let value = strip_any_suffix(caps.get(2)?.as_str(), FLAGS).trim();
        if value.is_empty() {
            return None;
        }

        Some(Construct::CssVar {
            name: name.to_string(),
            default: Some(value.to_string()),
            value_type: infer_type(value),
        })
    }

    fn name(&self) -> &'static str {
        "variable"
    }
}
