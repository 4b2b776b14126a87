//! Value type inference
//!
//! SCSS values are not parsed into an expression tree. Instead the raw text
//! of a default value is classified with an ordered list of guards; the
//! first guard that matches wins:
//!
//! 1. `true` / `false` → [`ValueType::Boolean`]
//! 2. `null` / `none` → no type
//! 3. number with optional unit or `%` → [`ValueType::Number`]
//! 4. hex color, color function call, or color keyword → [`ValueType::Color`]
//! 5. top-level comma or two or more top-level words → [`ValueType::List`]
//! 6. anything else → [`ValueType::String`]

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::string_utils::{DepthTracker, Nesting, Separator, TopLevelSplitter};

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:[a-zA-Z]+|%)?$")
        .expect("NUMBER_PATTERN regex is invalid")
});

static HEX_COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("HEX_COLOR_PATTERN regex is invalid")
});

/// Function name directly followed by its opening parenthesis.
static CALL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z_-][a-zA-Z0-9_-]*)\(").expect("CALL_PATTERN regex is invalid")
});

const COMMAS: TopLevelSplitter = TopLevelSplitter::new(Separator::Char(','), Nesting::ALL);
const WORDS: TopLevelSplitter = TopLevelSplitter::new(Separator::Whitespace, Nesting::ALL);

/// Built-in functions that return a color.
const COLOR_FUNCTIONS: &[&str] = &[
    "rgb",
    "rgba",
    "hsl",
    "hsla",
    "mix",
    "adjust-hue",
    "lighten",
    "darken",
    "saturate",
    "desaturate",
    "grayscale",
    "complement",
    "invert",
    "opacify",
    "fade-in",
    "transparentize",
    "fade-out",
    "adjust-color",
    "scale-color",
    "change-color",
];

/// CSS named colors, plus `transparent`.
const COLOR_KEYWORDS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "transparent", "turquoise", "violet", "wheat", "white",
    "whitesmoke", "yellow", "yellowgreen",
];

/// Semantic type of a value expression.
///
/// The null literal has no type; [`infer_type`] returns `None` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Number,
    String,
    Color,
    Boolean,
    List,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Color => "color",
            Self::Boolean => "boolean",
            Self::List => "list",
        };
        write!(f, "{}", s)
    }
}

/// Infer the type of a raw value expression.
///
/// Surrounding whitespace is ignored. Returns `None` for `null` and `none`.
///
/// # Examples
///
/// ```
/// use scssdoc::types::{infer_type, ValueType};
///
/// assert_eq!(infer_type("10em"), Some(ValueType::Number));
/// assert_eq!(infer_type("rgba(255, 0, 0, 0.5)"), Some(ValueType::Color));
/// assert_eq!(infer_type("2px 4px"), Some(ValueType::List));
/// assert_eq!(infer_type("null"), None);
/// ```
pub fn infer_type(expr: &str) -> Option<ValueType> {
    let expr = expr.trim();

    if expr == "true" || expr == "false" {
        return Some(ValueType::Boolean);
    }
    if expr == "null" || expr == "none" {
        return None;
    }
    if NUMBER_PATTERN.is_match(expr) {
        return Some(ValueType::Number);
    }
    if is_color(expr) {
        return Some(ValueType::Color);
    }
    if COMMAS.split(expr).len() > 1 || WORDS.split(expr).len() > 1 {
        return Some(ValueType::List);
    }
    Some(ValueType::String)
}

fn is_color(expr: &str) -> bool {
    if HEX_COLOR_PATTERN.is_match(expr) {
        return true;
    }
    if let Some(caps) = CALL_PATTERN.captures(expr) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        return COLOR_FUNCTIONS.contains(&name.to_ascii_lowercase().as_str())
            && is_single_call(expr);
    }
    let lower = expr.to_ascii_lowercase();
    COLOR_KEYWORDS.contains(&lower.as_str())
}

/// True if the call's opening parenthesis is closed by the last character,
/// i.e. nothing follows the call.
fn is_single_call(expr: &str) -> bool {
    let Some(open) = expr.find('(') else {
        return false;
    };
    let mut tracker = DepthTracker::new(Nesting::PARENS);
    for (idx, c) in expr[open..].char_indices() {
        tracker.step(c);
        if tracker.is_top_level() {
            return open + idx + c.len_utf8() == expr.len();
        }
    }
    false
}
