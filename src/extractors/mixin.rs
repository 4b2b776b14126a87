//! Mixin declarations: `@mixin name($param, $other: default) { ... }`

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{ConstructParser, Statement, Terminator};
use crate::docblock::{Construct, Param};
use crate::string_utils::{Nesting, Separator, TopLevelSplitter};
use crate::types::infer_type;

/// Group 1 is the name, group 2 the text between the outermost parentheses.
static MIXIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^@mixin\s+([\w-]+)\s*(?:\((.*)\))?\s*$")
        .expect("MIXIN_PATTERN regex is invalid")
});

/// `$name`, `$name...` or `$name: default`.
static PARAM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(\$[\w-]+(?:\.\.\.)?)\s*(?::(.*))?$").expect("PARAM_PATTERN regex is invalid")
});

const PARAM_SPLITTER: TopLevelSplitter = TopLevelSplitter::new(Separator::Char(','), Nesting::ALL);

/// Parses `@mixin` heads into [`Construct::CssMixin`].
pub struct MixinParser;

impl ConstructParser for MixinParser {
    fn parse(&self, statement: &Statement) -> Option<Construct> {
        if statement.terminator == Some(Terminator::Semicolon) {
            return None;
        }

        let caps = MIXIN_PATTERN.captures(statement.head.trim())?;
        let name = caps.get(1)?.as_str().to_string();
        let params = caps
            .get(2)
            .map(|list| parse_params(list.as_str()))
            .unwrap_or_default();

        Some(Construct::CssMixin { name, params })
    }

    fn name(&self) -> &'static str {
        "mixin"
    }
}

/// Parse a parameter list (without its parentheses), preserving order.
pub fn parse_params(list: &str) -> Vec<Param> {
    PARAM_SPLITTER
        .split(list)
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| {
            let param = parse_param(piece);
            if param.is_none() {
                debug!(piece, "skipping unrecognized mixin parameter");
            }
            param
        })
        .collect()
}

fn parse_param(piece: &str) -> Option<Param> {
    let caps = PARAM_PATTERN.captures(piece)?;
    let name = caps.get(1)?.as_str().to_string();
    let default = caps
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string);
    let value_type = default.as_deref().and_then(infer_type);

    Some(Param {
        name,
        default,
        value_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueType;

    fn parse(head: &str) -> Option<Construct> {
        MixinParser.parse(&Statement::new(head, Some(Terminator::OpenBrace)))
    }

    fn param(name: &str, default: Option<&str>, value_type: Option<ValueType>) -> Param {
        Param {
            name: name.to_string(),
            default: default.map(str::to_string),
            value_type,
        }
    }

    #[test]
    fn test_mixin_with_params() {
        assert_eq!(
            parse("@mixin foo($alpha, $beta: 2px) "),
            Some(Construct::CssMixin {
                name: "foo".to_string(),
                params: vec![
                    param("$alpha", None, None),
                    param("$beta", Some("2px"), Some(ValueType::Number)),
                ],
            })
        );
    }

    #[test]
    fn test_mixin_without_params() {
        assert_eq!(
            parse("@mixin goul "),
            Some(Construct::CssMixin {
                name: "goul".to_string(),
                params: Vec::new(),
            })
        );
        assert_eq!(
            parse("@mixin goul()"),
            Some(Construct::CssMixin {
                name: "goul".to_string(),
                params: Vec::new(),
            })
        );
    }

    #[test]
    fn test_function_call_default_is_not_split() {
        let params = parse_params("$color: rgba(0, 0, 0, 0.5), $size: 2px");
        assert_eq!(
            params,
            vec![
                param("$color", Some("rgba(0, 0, 0, 0.5)"), Some(ValueType::Color)),
                param("$size", Some("2px"), Some(ValueType::Number)),
            ]
        );
    }

    #[test]
    fn test_null_default_differs_from_no_default() {
        let params = parse_params("$a, $b: null");
        assert_eq!(params[0], param("$a", None, None));
        assert_eq!(params[1], param("$b", Some("null"), None));
    }

    #[test]
    fn test_multiline_params_and_trailing_comma() {
        let params = parse_params("\n    $a: 1px,\n    $b: 'x, y',\n");
        assert_eq!(
            params,
            vec![
                param("$a", Some("1px"), Some(ValueType::Number)),
                param("$b", Some("'x, y'"), Some(ValueType::String)),
            ]
        );
    }

    #[test]
    fn test_variadic_param() {
        let params = parse_params("$first, $rest...");
        assert_eq!(params[1], param("$rest...", None, None));
    }

    #[test]
    fn test_unrecognized_param_is_skipped() {
        let params = parse_params("$a, garbage, $b");
        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["$a", "$b"]);
    }

    #[test]
    fn test_list_default() {
        let params = parse_params("$margin: 2px 4px");
        assert_eq!(
            params[0],
            param("$margin", Some("2px 4px"), Some(ValueType::List))
        );
    }

    #[test]
    fn test_declines_semicolon_terminated() {
        let statement = Statement::new("@mixin foo", Some(Terminator::Semicolon));
        assert_eq!(MixinParser.parse(&statement), None);
    }

    #[test]
    fn test_declines_unclosed_param_list() {
        assert_eq!(parse("@mixin foo($a"), None);
    }

    #[test]
    fn test_name() {
        assert_eq!(MixinParser.name(), "mixin");
    }
}
