//! Implementation of the turtle lexer
//!
//! Classification is handled entirely by logos. This module walks the logos
//! lexer, pairs every kind with its span and collects anything logos could not
//! classify as a [`LexError`].

use crate::turtle::lexer::tokens::{Token, TokenKind};
use logos::Logos;
use thiserror::Error;
use tracing::{debug, warn};

/// A run of source text that matches no token kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised input {text:?}")]
pub struct LexError {
    pub span: logos::Span,
    pub text: String,
}

impl LexError {
    pub fn new(span: logos::Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }
}

/// Everything the tokenizer produced for one source buffer.
///
/// Whitespace tokens are kept; dropping them is up to the consumer.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl TokenStream {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Whether any part of the input could not be tokenized
    pub fn has_failed(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Kinds of all tokens, in order
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    fn record_error(&mut self, span: logos::Span, source: &str) {
        // Adjacent unrecognised characters are reported as one run
        if let Some(last) = self.errors.last_mut() {
            if last.span.end == span.start {
                last.span.end = span.end;
                last.text = source.get(last.span.clone()).unwrap_or_default().to_string();
                return;
            }
        }
        let text = source.get(span.clone()).unwrap_or_default();
        self.errors.push(LexError::new(span, text));
    }
}

/// Tokenize a string, keeping spans and collecting lexical errors
pub fn tokenize(source: &str) -> TokenStream {
    let mut lexer = TokenKind::lexer(source);
    let mut stream = TokenStream::default();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => stream.tokens.push(Token::new(kind, span)),
            Err(()) => stream.record_error(span, source),
        }
    }

    for error in &stream.errors {
        warn!(start = error.span.start, text = %error.text, "unrecognised input");
    }
    debug!(
        tokens = stream.tokens.len(),
        errors = stream.errors.len(),
        "tokenized source"
    );

    stream
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    #[test]
    fn test_simple_tokenization() {
        let stream = tokenize("pendown");
        assert_eq!(stream.kinds(), vec![PenDown]);
        assert!(!stream.has_failed());
    }

    #[test]
    fn test_repeat_block_tokenization() {
        let stream = tokenize("repeat 4 { move 10 }");
        assert_eq!(
            stream.kinds(),
            vec![
                Repeat, WhiteSpace, Number, WhiteSpace, OpenBrace, WhiteSpace, Move, WhiteSpace,
                Number, WhiteSpace, CloseBrace
            ]
        );
    }

    #[test]
    fn test_spans_cover_source() {
        let source = "rotate 90";
        let stream = tokenize(source);
        let texts: Vec<&str> = stream.tokens().iter().map(|t| t.text(source)).collect();
        assert_eq!(texts, vec!["rotate", " ", "90"]);
        assert_eq!(stream.tokens()[2].span, 7..9);
    }

    #[test]
    fn test_function_tokenization() {
        let stream = tokenize("function f(a,b)");
        assert_eq!(
            stream.kinds(),
            vec![Function, WhiteSpace, Identifier, OpenParen, Identifier, Comma, Identifier, CloseParen]
        );
    }

    #[test]
    fn test_empty_source() {
        let stream = tokenize("");
        assert!(stream.tokens().is_empty());
        assert!(!stream.has_failed());
    }

    #[test]
    fn test_unrecognised_input_is_recorded_with_position() {
        let stream = tokenize("move 10 @@ penup");
        assert!(stream.has_failed());
        assert_eq!(stream.errors(), &[LexError::new(8..10, "@@")]);
        // Scanning carries on past the bad run
        assert_eq!(stream.kinds().last(), Some(&PenUp));
    }

    #[test]
    fn test_separate_error_runs() {
        let stream = tokenize("# move $");
        assert_eq!(stream.errors().len(), 2);
        assert_eq!(stream.errors()[0].span, 0..1);
        assert_eq!(stream.errors()[1].span, 7..8);
    }
}
