//! Fluent assertion API for AST nodes

use crate::turtle::ast::AstNode;
use crate::turtle::lexer::TokenKind;

/// Create an assertion builder for a tree parsed from `source`
pub fn assert_ast<'a>(node: &'a AstNode, source: &'a str) -> NodeAssertion<'a> {
    NodeAssertion {
        node,
        source,
        context: "root".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a AstNode,
    source: &'a str,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert the node kind
    pub fn kind(self, expected: TokenKind) -> Self {
        assert_eq!(
            self.node.kind(),
            expected,
            "{}: expected {} node, found {}",
            self.context,
            expected,
            self.node.kind()
        );
        self
    }

    /// Assert the payload text
    pub fn text(self, expected: &str) -> Self {
        assert!(
            self.node.payload().is_some(),
            "{}: expected payload {:?}, node has none",
            self.context,
            expected
        );
        assert_eq!(
            self.node.text(self.source),
            expected,
            "{}: payload text mismatch",
            self.context
        );
        self
    }

    /// Assert the node carries no payload
    pub fn no_payload(self) -> Self {
        assert!(
            self.node.payload().is_none(),
            "{}: expected no payload, found {:?}",
            self.context,
            self.node.text(self.source)
        );
        self
    }

    /// Assert a childless node of `kind` whose payload reads `text`
    pub fn leaf(self, kind: TokenKind, text: &str) -> Self {
        self.kind(kind).text(text).child_count(0)
    }

    /// Assert the number of children
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.node.children())
        );
        self
    }

    /// Assert the kinds of all children, in order
    pub fn child_kinds(self, expected: &[TokenKind]) -> Self {
        let actual: Vec<TokenKind> = self.node.children().iter().map(AstNode::kind).collect();
        assert_eq!(actual, expected, "{}: child kinds mismatch", self.context);
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node: &'a AstNode = self.node;
        let child = node.child(index).unwrap_or_else(|| {
            panic!(
                "{}: child index {} out of bounds ({} children)",
                self.context,
                index,
                node.children().len()
            )
        });
        assertion(NodeAssertion {
            node: child,
            source: self.source,
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}

fn summarize(children: &[AstNode]) -> String {
    children
        .iter()
        .map(|c| c.kind().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
