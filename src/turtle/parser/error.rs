//! Error types for parsing
//!
//! Every grammar rule reports failure through [`ParseError`]. Errors carry the
//! byte range of the offending token so diagnostics can point at it.

use crate::turtle::lexer::{LexError, TokenKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tokenizer could not classify part of the input
    #[error(transparent)]
    Lexical(#[from] LexError),

    /// A required token kind was not found at the cursor
    #[error("expected {expected}, got {found}")]
    Syntax {
        expected: TokenKind,
        found: TokenKind,
        span: logos::Span,
    },

    /// Blocks were opened past the parser's nesting limit
    #[error("blocks nested deeper than {limit} levels")]
    TooDeep { limit: usize, span: logos::Span },

    /// The context stack did not reduce to the root scope
    #[error("unbalanced parse tree: {open} unclosed block(s)")]
    Unbalanced { open: usize },

    /// A recognised construct that has no parsing rule yet
    #[error("{feature}: not implemented")]
    Unsupported {
        feature: &'static str,
        span: logos::Span,
    },

    /// A broken parser invariant
    #[error("internal parser fault: {0}")]
    Internal(String),
}

impl ParseError {
    /// Byte range the error refers to, if it refers to one
    pub fn span(&self) -> Option<&logos::Span> {
        match self {
            ParseError::Lexical(error) => Some(&error.span),
            ParseError::Syntax { span, .. }
            | ParseError::TooDeep { span, .. }
            | ParseError::Unsupported { span, .. } => Some(span),
            ParseError::Unbalanced { .. } | ParseError::Internal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_names_both_kinds() {
        let error = ParseError::Syntax {
            expected: TokenKind::Number,
            found: TokenKind::OpenBrace,
            span: 7..8,
        };
        assert_eq!(error.to_string(), "expected Number, got OpenBrace");
        assert_eq!(error.span(), Some(&(7..8)));
    }

    #[test]
    fn test_lexical_error_is_transparent() {
        let error = ParseError::from(LexError::new(3..4, "@"));
        assert_eq!(error.to_string(), "unrecognised input \"@\"");
        assert_eq!(error.span(), Some(&(3..4)));
    }

    #[test]
    fn test_nesting_limit_points_at_the_block() {
        let error = ParseError::TooDeep {
            limit: 4,
            span: 20..21,
        };
        assert_eq!(error.to_string(), "blocks nested deeper than 4 levels");
        assert_eq!(error.span(), Some(&(20..21)));
    }

    #[test]
    fn test_structural_errors_have_no_span() {
        let error = ParseError::Unbalanced { open: 1 };
        assert_eq!(error.to_string(), "unbalanced parse tree: 1 unclosed block(s)");
        assert!(error.span().is_none());
    }
}
