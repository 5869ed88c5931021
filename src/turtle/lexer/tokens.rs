//! Token definitions for the turtle language
//!
//! This module defines all the token kinds that can be produced by the turtle lexer.
//! The kinds are defined using the logos derive macro for efficient tokenization.
//! A handful of kinds (`Start`, `End`, `StatementBlock`, `ArgList`) never come out of
//! the lexer: the parser uses them to tag grouping nodes and the end of input.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All token kinds in the turtle language
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    // Commands
    #[token("pendown")]
    PenDown,
    #[token("penup")]
    PenUp,
    #[token("repeat")]
    Repeat,
    #[token("rotate")]
    Rotate,
    #[token("move")]
    Move,
    #[token("quit")]
    Quit,
    #[token("function")]
    Function,
    #[token("delta")]
    Delta,

    // Color keywords (only red is wired to a command)
    #[token("red")]
    Red,
    #[token("green")]
    Green,
    #[token("blue")]
    Blue,

    // Literals
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    // Punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,

    #[regex(r"[ \t\r\n]+")]
    WhiteSpace,

    // Synthetic kinds
    Start,
    End,
    StatementBlock,
    ArgList,
}

impl TokenKind {
    /// Check if this kind is whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::WhiteSpace)
    }

    /// Lowercase tag name used by the serializers
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::PenDown => "pendown",
            TokenKind::PenUp => "penup",
            TokenKind::Repeat => "repeat",
            TokenKind::Rotate => "rotate",
            TokenKind::Move => "move",
            TokenKind::Quit => "quit",
            TokenKind::Function => "function",
            TokenKind::Delta => "delta",
            TokenKind::Red => "red",
            TokenKind::Green => "green",
            TokenKind::Blue => "blue",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenParen => "open-paren",
            TokenKind::CloseParen => "close-paren",
            TokenKind::OpenBrace => "open-brace",
            TokenKind::CloseBrace => "close-brace",
            TokenKind::Comma => "comma",
            TokenKind::WhiteSpace => "ws",
            TokenKind::Start => "program",
            TokenKind::End => "end",
            TokenKind::StatementBlock => "block",
            TokenKind::ArgList => "args",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A classified token together with the byte range it covers in the source.
///
/// Equality only looks at the kind: the grammar dispatches on kinds, never on the
/// exact source text.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: logos::Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: logos::Span) -> Self {
        Self { kind, span }
    }

    /// The slice of `source` this token was scanned from
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.span.clone()).unwrap_or("")
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Token {}
