//! Shared helpers for rendering doc blocks as text

use crate::docblock::{Construct, Param};

/// The prose of a doc comment: delimiters and leading `*` gutters removed,
/// blank lines dropped.
pub fn comment_lines(comment: &str) -> Vec<&str> {
    let body = comment.strip_suffix("*/").unwrap_or(comment);
    let body = body
        .strip_prefix("/**")
        .or_else(|| body.strip_prefix("/*"))
        .unwrap_or(body);
    body.lines()
        .map(|l| l.trim().trim_start_matches('*').trim())
        .filter(|l| !l.is_empty())
        .collect()
}

/// One-line signature of a construct, e.g. `$foo: 10em` or
/// `button($size: 2px)`. Empty for generic records.
pub fn signature(code: &Construct) -> String {
    match code {
        Construct::CssVar { name, default, .. } => match default {
            Some(value) => format!("{}: {}", name, collapse_whitespace(value)),
            None => name.clone(),
        },
        Construct::CssMixin { name, params } => {
            let params: Vec<String> = params.iter().map(param_signature).collect();
            format!("{}({})", name, params.join(", "))
        }
        Construct::Property => String::new(),
    }
}

fn param_signature(param: &Param) -> String {
    match &param.default {
        Some(value) => format!("{}: {}", param.name, collapse_whitespace(value)),
        None => param.name.clone(),
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Word-wrap text to `max_width` characters. Words longer than the width
/// are split. A width of 0 disables wrapping.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        if current_len > 0 && current_len + 1 + word.len() > max_width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        while word.len() > max_width {
            let rest = word.split_off(max_width);
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.into_iter().collect());
            current_len = 0;
            word = rest;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueType;

    #[test]
    fn test_comment_lines_single_line() {
        assert_eq!(comment_lines("/** My variable */"), vec!["My variable"]);
    }

    #[test]
    fn test_comment_lines_multi_line() {
        let comment = "/**\n * Primary brand color.\n *\n * Used for links.\n */";
        assert_eq!(
            comment_lines(comment),
            vec!["Primary brand color.", "Used for links."]
        );
    }

    #[test]
    fn test_comment_lines_empty_and_unterminated() {
        assert!(comment_lines("/** */").is_empty());
        assert!(comment_lines("/**/").is_empty());
        assert_eq!(comment_lines("/** open"), vec!["open"]);
    }

    #[test]
    fn test_signature_variable() {
        let code = Construct::CssVar {
            name: "$stack".to_string(),
            default: Some("Helvetica,\n    sans-serif".to_string()),
            value_type: Some(ValueType::List),
        };
        assert_eq!(signature(&code), "$stack: Helvetica, sans-serif");
    }

    #[test]
    fn test_signature_mixin() {
        let code = Construct::CssMixin {
            name: "foo".to_string(),
            params: vec![
                Param {
                    name: "$alpha".to_string(),
                    default: None,
                    value_type: None,
                },
                Param {
                    name: "$beta".to_string(),
                    default: Some("2px".to_string()),
                    value_type: Some(ValueType::Number),
                },
            ],
        };
        assert_eq!(signature(&code), "foo($alpha, $beta: 2px)");
    }

    #[test]
    fn test_signature_property() {
        assert_eq!(signature(&Construct::Property), "");
    }

    #[test]
    fn test_wrap_text_preserves_word_boundaries() {
        assert_eq!(
            wrap_text("hello world foo bar", 10),
            vec!["hello", "world foo", "bar"]
        );
    }

    #[test]
    fn test_wrap_text_long_word() {
        assert_eq!(wrap_text("verylongword", 5), vec!["veryl", "ongwo", "rd"]);
        assert_eq!(wrap_text("a verylongword", 5), vec!["a", "veryl", "ongwo", "rd"]);
    }

    #[test]
    fn test_wrap_text_empty_and_disabled() {
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("hello world", 0), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multibyte() {
        assert_eq!(wrap_text("你好世界", 2), vec!["你好", "世界"]);
    }
}
