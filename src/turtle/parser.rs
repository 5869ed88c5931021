//! Parser module for the turtle language
//!
//! This module contains the recursive-descent parser, its error type and the
//! diagnostic sink failures are collected in.
//!
//! ## Testing
//!
//! Parser tests use the fluent assertions from the [testing module](crate::turtle::testing).

pub mod diagnostics;
pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;

pub use crate::turtle::ast::AstNode;
pub use diagnostics::Diagnostics;
pub use error::ParseError;
pub use parser::{Parser, MAX_NESTING_DEPTH};

use crate::turtle::lexer::tokenize;

/// Main parser function that takes source text and returns the program root.
///
/// Lexical failures stop before parsing starts; all of them are reported.
pub fn parse(source: &str) -> Result<AstNode, Diagnostics> {
    let stream = tokenize(source);
    if stream.has_failed() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.extend(stream.errors().iter().cloned().map(ParseError::from));
        return Err(diagnostics);
    }

    let mut parser = Parser::from_stream(&stream);
    if !parser.run() {
        return Err(parser.into_diagnostics());
    }

    match parser.root() {
        Ok(root) => Ok(root),
        Err(error) => {
            let mut diagnostics = parser.into_diagnostics();
            diagnostics.push(error);
            Err(diagnostics)
        }
    }
}
