//! Fallback parser for rules and at-rules without extracted detail

use super::{ConstructParser, Statement};
use crate::docblock::Construct;

/// Produces [`Construct::Property`] for any statement.
pub struct GenericParser;

impl GenericParser {
    pub fn construct(&self, _statement: &Statement) -> Construct {
        Construct::Property
    }
}

impl ConstructParser for GenericParser {
    fn parse(&self, statement: &Statement) -> Option<Construct> {
        Some(self.construct(statement))
    }

    fn name(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::Terminator;

    #[test]
    fn test_generic_accepts_anything() {
        for head in [".some-class a:href", "@include foo", "", "color: red"] {
            let statement = Statement::new(head, Some(Terminator::Semicolon));
            assert_eq!(GenericParser.parse(&statement), Some(Construct::Property));
        }
    }

    #[test]
    fn test_name() {
        assert_eq!(GenericParser.name(), "generic");
    }
}
