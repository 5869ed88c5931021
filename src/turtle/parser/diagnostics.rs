//! Diagnostic sink for parse failures
//!
//! The parser records failures here instead of panicking or printing. Rendering
//! resolves byte offsets against the source so each message gets a `line:column`.

use super::error::ParseError;
use crate::turtle::ast::SourceLocation;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    errors: Vec<ParseError>,
}

impl Diagnostics {
    pub fn push(&mut self, error: impl Into<ParseError>) {
        self.errors.push(error.into());
    }

    /// Whether any failure has been recorded
    pub fn has_failed(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// One `error: <message> at <line>:<column>` line per failure
    pub fn render(&self, source: &str) -> String {
        let location = SourceLocation::new(source);
        self.errors
            .iter()
            .map(|error| match error.span() {
                Some(span) => format!(
                    "error: {} at {}",
                    error,
                    location.byte_to_position(span.start)
                ),
                None => format!("error: {}", error),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Extend<ParseError> for Diagnostics {
    fn extend<T: IntoIterator<Item = ParseError>>(&mut self, iter: T) {
        self.errors.extend(iter);
    }
}
