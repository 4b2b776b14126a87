//! Documentation records produced by the extractor
//!
//! Records serialize to the shape the documentation model builder consumes:
//!
//! ```json
//! {
//!   "comment": "/** My variable */",
//!   "linenr": 1,
//!   "code": { "tagname": "css_var", "name": "$foo", "default": "10em", "type": "number" }
//! }
//! ```

use serde::Serialize;

use crate::types::ValueType;

/// A doc comment paired with the construct it documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocBlock {
    /// The comment exactly as written, delimiters included.
    pub comment: String,
    /// Line on which the comment starts (1-indexed).
    pub linenr: usize,
    pub code: Construct,
}

/// The documented construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tagname", rename_all = "snake_case")]
pub enum Construct {
    /// `$name: value;`
    CssVar {
        name: String,
        default: Option<String>,
        #[serde(rename = "type")]
        value_type: Option<ValueType>,
    },
    /// `@mixin name($params...) { ... }`
    CssMixin { name: String, params: Vec<Param> },
    /// Any other rule or at-rule.
    Property,
}

impl Construct {
    /// The tag used for this construct in serialized output.
    pub fn tagname(&self) -> &'static str {
        match self {
            Construct::CssVar { .. } => "css_var",
            Construct::CssMixin { .. } => "css_mixin",
            Construct::Property => "property",
        }
    }

    /// Name of the construct, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Construct::CssVar { name, .. } | Construct::CssMixin { name, .. } => Some(name),
            Construct::Property => None,
        }
    }
}

/// A mixin parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    /// Name including the `$` sigil.
    pub name: String,
    /// `None` when the parameter has no default. A default of `null` is
    /// `Some("null")`.
    pub default: Option<String>,
    /// Only ever set when `default` is set.
    #[serde(rename = "type")]
    pub value_type: Option<ValueType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_var_serialization() {
        let block = DocBlock {
            comment: "/** My variable */".to_string(),
            linenr: 1,
            code: Construct::CssVar {
                name: "$foo".to_string(),
                default: Some("10em".to_string()),
                value_type: Some(ValueType::Number),
            },
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "comment": "/** My variable */",
                "linenr": 1,
                "code": {
                    "tagname": "css_var",
                    "name": "$foo",
                    "default": "10em",
                    "type": "number"
                }
            })
        );
    }

    #[test]
    fn test_css_mixin_serialization() {
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
        let json = serde_json::to_value(&code).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tagname": "css_mixin",
                "name": "foo",
                "params": [
                    { "name": "$alpha", "default": null, "type": null },
                    { "name": "$beta", "default": "2px", "type": "number" }
                ]
            })
        );
    }

    #[test]
    fn test_property_serialization() {
        let json = serde_json::to_value(Construct::Property).unwrap();
        assert_eq!(json, serde_json::json!({ "tagname": "property" }));
    }

    #[test]
    fn test_null_default_has_no_type() {
        let code = Construct::CssVar {
            name: "$x".to_string(),
            default: Some("null".to_string()),
            value_type: None,
        };
        let json = serde_json::to_value(&code).unwrap();
        assert_eq!(json["default"], "null");
        assert!(json["type"].is_null());
    }

    #[test]
    fn test_tagname_and_name() {
        assert_eq!(Construct::Property.tagname(), "property");
        assert_eq!(Construct::Property.name(), None);
        let mixin = Construct::CssMixin {
            name: "m".to_string(),
            params: Vec::new(),
        };
        assert_eq!(mixin.tagname(), "css_mixin");
        assert_eq!(mixin.name(), Some("m"));
    }
}
