//! AST node type definition
//!
//! The turtle grammar is a fixed menu of statements, so a single node type with a
//! kind discriminant covers every construct. Grouping nodes (`Repeat`, `Function`,
//! `ArgList`, `StatementBlock`, the `Start` root) carry no payload; literal leaves
//! (`Number`, `Identifier`, color keywords) carry the token they were built from.
//!
//! Equality is structural: payload tokens compare by kind only, so trees parsed from
//! differently formatted sources compare equal.

use crate::turtle::lexer::{Token, TokenKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstNode {
    kind: TokenKind,
    payload: Option<Token>,
    children: Vec<AstNode>,
}

impl AstNode {
    /// A payload-less container node
    pub fn from_kind(kind: TokenKind) -> Self {
        Self {
            kind,
            payload: None,
            children: Vec::new(),
        }
    }

    /// A node carrying `token` as its payload
    pub fn from_token(token: Token) -> Self {
        Self {
            kind: token.kind,
            payload: Some(token),
            children: Vec::new(),
        }
    }

    /// Append a child; order is preserved
    pub fn add_child(&mut self, child: AstNode) {
        self.children.push(child);
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn payload(&self) -> Option<&Token> {
        self.payload.as_ref()
    }

    pub fn children(&self) -> &[AstNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&AstNode> {
        self.children.get(index)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Source text of the payload, empty for container nodes
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.payload.as_ref().map_or("", |t| t.text(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kind_has_no_payload() {
        let node = AstNode::from_kind(TokenKind::Repeat);
        assert_eq!(node.kind(), TokenKind::Repeat);
        assert!(node.payload().is_none());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_from_token_keeps_payload() {
        let node = AstNode::from_token(Token::new(TokenKind::Number, 3..5));
        assert_eq!(node.kind(), TokenKind::Number);
        assert_eq!(node.payload().map(|t| t.span.clone()), Some(3..5));
        assert_eq!(node.text("abc42"), "42");
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut args = AstNode::from_kind(TokenKind::ArgList);
        args.add_child(AstNode::from_token(Token::new(TokenKind::Identifier, 0..1)));
        args.add_child(AstNode::from_token(Token::new(TokenKind::Identifier, 2..3)));
        let texts: Vec<&str> = args.children().iter().map(|c| c.text("a,b")).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_equality_ignores_spans() {
        let a = AstNode::from_token(Token::new(TokenKind::Number, 0..1));
        let b = AstNode::from_token(Token::new(TokenKind::Number, 10..12));
        assert_eq!(a, b);
        assert_ne!(a, AstNode::from_kind(TokenKind::Number));
    }
}
