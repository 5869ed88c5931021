//! # turtle
//!
//! Front end for a small turtle-graphics command language: a logos-based tokenizer and a
//! recursive-descent parser that builds an AST of drawing commands.
//!
//! ## Testing
//!
//! Parser tests use the fluent assertions in the [testing module](crate::turtle::testing).

pub mod turtle;

pub use crate::turtle::lexer::{tokenize, Token, TokenKind, TokenStream};
pub use crate::turtle::parser::{parse, AstNode, Parser};
