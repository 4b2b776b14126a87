//! Nesting-aware string utilities shared by the parsers.
//!
//! SCSS values are loosely structured: a comma inside `rgba(0, 0, 0, 0.5)` or
//! a space inside `"Helvetica Neue"` does not separate anything. Everything
//! here walks text one character at a time through a [`DepthTracker`], which
//! knows whether the current character sits at the top level (outside any
//! parentheses, brackets, `#{}` interpolation, or quoted string).

/// Which delimiter pairs open a nested region.
///
/// Quoted strings are always opaque; the pairs and interpolation are
/// configurable per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nesting {
    pub pairs: &'static [(char, char)],
    /// Treat `#{ ... }` as a nested region.
    pub interpolation: bool,
}

impl Nesting {
    /// Parentheses only.
    pub const PARENS: Nesting = Nesting {
        pairs: &[('(', ')')],
        interpolation: false,
    };

    /// Parentheses, brackets and interpolation.
    pub const ALL: Nesting = Nesting {
        pairs: &[('(', ')'), ('[', ']')],
        interpolation: true,
    };
}

/// Single-pass tracker of nesting depth and quote state.
///
/// Feed characters in order with [`DepthTracker::step`]. Unbalanced closers
/// at depth zero are treated as ordinary top-level characters, and an
/// unterminated quote ends at the next newline.
#[derive(Debug, Clone)]
pub struct DepthTracker {
    nesting: Nesting,
    closers: Vec<char>,
    quote: Option<char>,
    escaped: bool,
    prev: Option<char>,
}

impl DepthTracker {
    pub fn new(nesting: Nesting) -> Self {
        Self {
            nesting,
            closers: Vec::new(),
            quote: None,
            escaped: false,
            prev: None,
        }
    }

    /// Returns true if no nested region or string is currently open.
    pub fn is_top_level(&self) -> bool {
        self.closers.is_empty() && self.quote.is_none()
    }

    /// Advance over `c`, returning true if `c` itself is at the top level.
    ///
    /// Delimiters and quote characters are never top level.
    pub fn step(&mut self, c: char) -> bool {
        let prev = self.prev.replace(c);

        if let Some(quote) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == quote || c == '\n' {
                self.quote = None;
            }
            return false;
        }

        if c == '"' || c == '\'' {
            self.quote = Some(c);
            return false;
        }

        if self.nesting.interpolation && c == '{' && prev == Some('#') {
            self.closers.push('}');
            return false;
        }

        if let Some(&(_, close)) = self.nesting.pairs.iter().find(|(open, _)| *open == c) {
            self.closers.push(close);
            return false;
        }

        if self.closers.last() == Some(&c) {
            self.closers.pop();
            return false;
        }

        self.closers.is_empty()
    }
}

/// What a [`TopLevelSplitter`] splits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// A single character, such as `,`. Pieces are trimmed and empty
    /// pieces are kept, so `"a,"` yields `["a", ""]`.
    Char(char),
    /// Any run of whitespace. Empty pieces are dropped.
    Whitespace,
}

/// Splits text on a separator that occurs at the top level only.
#[derive(Debug, Clone, Copy)]
pub struct TopLevelSplitter {
    separator: Separator,
    nesting: Nesting,
}

impl TopLevelSplitter {
    pub const fn new(separator: Separator, nesting: Nesting) -> Self {
        Self { separator, nesting }
    }

    /// Split `text` into top-level pieces.
    ///
    /// # Example
    ///
    /// ```
    /// use scssdoc::string_utils::{Nesting, Separator, TopLevelSplitter};
    ///
    /// let commas = TopLevelSplitter::new(Separator::Char(','), Nesting::PARENS);
    /// assert_eq!(
    ///     commas.split("$a, $b: rgba(0, 0, 0, 0.5)"),
    ///     vec!["$a", "$b: rgba(0, 0, 0, 0.5)"]
    /// );
    /// ```
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut tracker = DepthTracker::new(self.nesting);
        let mut pieces = Vec::new();
        let mut start = 0;

        for (idx, c) in text.char_indices() {
            if tracker.step(c) && self.is_separator(c) {
                pieces.push(&text[start..idx]);
                start = idx + c.len_utf8();
            }
        }
        pieces.push(&text[start..]);

        match self.separator {
            Separator::Char(_) => pieces.iter().map(|p| p.trim()).collect(),
            Separator::Whitespace => pieces.into_iter().filter(|p| !p.is_empty()).collect(),
        }
    }

    fn is_separator(&self, c: char) -> bool {
        match self.separator {
            Separator::Char(sep) => c == sep,
            Separator::Whitespace => c.is_whitespace(),
        }
    }
}

/// Repeatedly strip any of the given suffixes (and the whitespace before
/// them) from the end of a string.
///
/// # Example
///
/// ```
/// use scssdoc::string_utils::strip_any_suffix;
///
/// const FLAGS: &[&str] = &["!default", "!global"];
/// assert_eq!(strip_any_suffix("10em !default", FLAGS), "10em");
/// assert_eq!(strip_any_suffix("1px !default !global", FLAGS), "1px");
/// assert_eq!(strip_any_suffix("bold", FLAGS), "bold");
/// ```
pub fn strip_any_suffix<'a>(s: &'a str, suffixes: &[&str]) -> &'a str {
    let mut rest = s.trim_end();
    while let Some(stripped) = suffixes.iter().find_map(|suffix| rest.strip_suffix(suffix)) {
        rest = stripped.trim_end();
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMAS: TopLevelSplitter = TopLevelSplitter::new(Separator::Char(','), Nesting::PARENS);
    const SPACES: TopLevelSplitter = TopLevelSplitter::new(Separator::Whitespace, Nesting::ALL);

    #[test]
    fn test_split_commas_respects_parens() {
        assert_eq!(
            COMMAS.split("$color: rgba(0, 0, 0, 0.5), $size: 2px"),
            vec!["$color: rgba(0, 0, 0, 0.5)", "$size: 2px"]
        );
    }

    #[test]
    fn test_split_commas_respects_quotes() {
        assert_eq!(COMMAS.split("'a, b', c"), vec!["'a, b'", "c"]);
    }

    #[test]
    fn test_split_commas_keeps_empty_trailing_piece() {
        assert_eq!(COMMAS.split("a,"), vec!["a", ""]);
        assert_eq!(COMMAS.split(""), vec![""]);
    }

    #[test]
    fn test_split_whitespace_collapses_runs() {
        assert_eq!(
            SPACES.split("  2px   4px\n2px\t4px "),
            vec!["2px", "4px", "2px", "4px"]
        );
        assert!(SPACES.split("   ").is_empty());
    }

    #[test]
    fn test_split_whitespace_quoted_string_is_atomic() {
        assert_eq!(SPACES.split("\"blah blah\""), vec!["\"blah blah\""]);
        assert_eq!(SPACES.split("'it\\'s here' x"), vec!["'it\\'s here'", "x"]);
    }

    #[test]
    fn test_split_whitespace_respects_brackets_and_interpolation() {
        assert_eq!(SPACES.split("[a b] c"), vec!["[a b]", "c"]);
        assert_eq!(SPACES.split("#{$a + $b}px"), vec!["#{$a + $b}px"]);
    }

    #[test]
    fn test_parens_nesting_ignores_brackets() {
        let splitter = TopLevelSplitter::new(Separator::Char(','), Nesting::PARENS);
        assert_eq!(splitter.split("[a, b]"), vec!["[a", "b]"]);
    }

    #[test]
    fn test_unbalanced_closer_is_top_level() {
        assert_eq!(COMMAS.split("a), b"), vec!["a)", "b"]);
    }

    #[test]
    fn test_unterminated_quote_ends_at_newline() {
        let mut tracker = DepthTracker::new(Nesting::ALL);
        for c in "'open\n".chars() {
            tracker.step(c);
        }
        assert!(tracker.is_top_level());
        assert!(tracker.step(';'));
    }

    #[test]
    fn test_nested_parens_depth() {
        let mut tracker = DepthTracker::new(Nesting::PARENS);
        let top: Vec<bool> = "f(g(x)),y".chars().map(|c| tracker.step(c)).collect();
        assert_eq!(
            top,
            vec![true, false, false, false, false, false, false, true, true]
        );
    }

    #[test]
    fn test_strip_any_suffix_flags() {
        const FLAGS: &[&str] = &["!default", "!global"];
        assert_eq!(strip_any_suffix("10em !default", FLAGS), "10em");
        assert_eq!(strip_any_suffix("a, b !global !default", FLAGS), "a, b");
        assert_eq!(strip_any_suffix("10em!default", FLAGS), "10em");
        assert_eq!(strip_any_suffix("!default", FLAGS), "");
    }

    #[test]
    fn test_strip_any_suffix_no_match() {
        const FLAGS: &[&str] = &["!default"];
        assert_eq!(strip_any_suffix("red !important", FLAGS), "red !important");
    }
}
