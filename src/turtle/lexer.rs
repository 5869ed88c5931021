//! Lexer module for the turtle language
//!
//! This module contains the tokenization logic for turtle scripts,
//! including token definitions and the lexer implementation.
//!
//! The lexer keeps whitespace tokens in its output so that token spans tile the
//! source. The parser drops them when it takes ownership of the token list.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, LexError, TokenStream};
pub use tokens::{Token, TokenKind};

