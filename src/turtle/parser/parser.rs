//! Recursive-descent parser for turtle scripts
//!
//! Every rule dispatches on the kind of the token under the cursor. There is no
//! lookahead beyond the next token and no backtracking: the cursor only moves
//! forward, and a failed rule leaves it where the failure was found.
//!
//! Rules return `Ok(true)` when they matched and consumed input, `Ok(false)` when
//! the current token does not start them (nothing consumed), and `Err` when they
//! started but could not finish. Errors propagate straight up; nodes that were
//! already attached stay attached, so a failed parse must be discarded.
//!
//! Context Stack
//!
//!     Nodes live in an arena owned by the parser and refer to their children by
//!     slot index. The context stack holds the slots of the currently open scopes.
//!     Entering a node attaches it to the current top and pushes it; leaving pops.
//!     The stack starts with the `Start` root scope and must hold exactly that one
//!     entry again when the root is requested. [`Parser::root`] turns the arena into
//!     an owned [`AstNode`] tree.
//!
//!     Rules recurse once per open scope, so the stack is capped at
//!     [`MAX_NESTING_DEPTH`] scopes below the root. Going past it is a parse failure.

use super::diagnostics::Diagnostics;
use super::error::ParseError;
use crate::turtle::ast::AstNode;
use crate::turtle::lexer::{Token, TokenKind, TokenStream};
use tracing::{debug, trace, warn};

type NodeId = usize;

/// Deepest run of open scopes (blocks, argument lists, commands) below the root
pub const MAX_NESTING_DEPTH: usize = 256;

/// Result of a grammar rule that may or may not match the current token
type RuleResult = Result<bool, ParseError>;

#[derive(Debug)]
struct NodeSlot {
    kind: TokenKind,
    payload: Option<Token>,
    children: Vec<NodeId>,
}

impl NodeSlot {
    fn from_kind(kind: TokenKind) -> Self {
        Self {
            kind,
            payload: None,
            children: Vec::new(),
        }
    }

    fn from_token(token: Token) -> Self {
        Self {
            kind: token.kind,
            payload: Some(token),
            children: Vec::new(),
        }
    }
}

pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    arena: Vec<NodeSlot>,
    context: Vec<NodeId>,
    diagnostics: Diagnostics,
}

impl Parser {
    /// Create a parser over `tokens`, dropping whitespace and opening the root scope
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut parser = Self {
            tokens: tokens
                .into_iter()
                .filter(|token| !token.kind.is_whitespace())
                .collect(),
            cursor: 0,
            arena: Vec::new(),
            context: Vec::new(),
            diagnostics: Diagnostics::default(),
        };
        let root = parser.alloc(NodeSlot::from_kind(TokenKind::Start));
        parser.context.push(root);
        parser
    }

    pub fn from_stream(stream: &TokenStream) -> Self {
        Self::new(stream.tokens().iter().cloned())
    }

    /// Parse the whole token list as a program.
    ///
    /// Any failure, including a broken internal invariant, ends up in
    /// [`Parser::diagnostics`]; this never panics on bad input.
    pub fn run(&mut self) -> bool {
        debug!(tokens = self.tokens.len(), "parsing program");
        if let Err(error) = self.parse_program() {
            warn!(%error, cursor = self.cursor, "parse failed");
            self.diagnostics.push(error);
        }
        !self.diagnostics.has_failed()
    }

    /// The finished tree.
    ///
    /// Fails when blocks were left open, which is what an interrupted parse of a
    /// nested construct looks like.
    pub fn root(&self) -> Result<AstNode, ParseError> {
        match self.context.as_slice() {
            [root] => Ok(self.build(*root)),
            open => Err(ParseError::Unbalanced {
                open: open.len().saturating_sub(1),
            }),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// The whitespace-free tokens the grammar runs over
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of open scopes, including the root
    pub fn depth(&self) -> usize {
        self.context.len()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Standalone color names have no grammar yet; this always fails.
    pub fn parse_color_name(&mut self) -> Result<bool, ParseError> {
        Err(ParseError::Unsupported {
            feature: "color names",
            span: self.current_span(),
        })
    }

    // ------------------------------------------------------------------
    // Grammar rules
    // ------------------------------------------------------------------

    /// Statements up to the first token that starts none. Whatever follows it is
    /// left unread.
    fn parse_program(&mut self) -> Result<(), ParseError> {
        self.parse_statements()?;
        if let Some(token) = self.current() {
            debug!(
                kind = ?token.kind,
                remaining = self.tokens.len() - self.cursor,
                "program ends before the last token"
            );
        }
        Ok(())
    }

    fn parse_statements(&mut self) -> Result<(), ParseError> {
        while self.parse_statement()? {}
        Ok(())
    }

    fn parse_statement(&mut self) -> RuleResult {
        let Some(kind) = self.current_kind() else {
            return Ok(false);
        };
        trace!(?kind, cursor = self.cursor, "statement");

        match kind {
            TokenKind::PenDown | TokenKind::PenUp | TokenKind::Quit | TokenKind::Number => {
                self.add_leaf()
            }
            TokenKind::Repeat => self.parse_repeat(),
            TokenKind::Rotate | TokenKind::Move => self.parse_parameterised_command(kind),
            TokenKind::Function => self.parse_function(),
            TokenKind::Delta => self.parse_delta(),
            _ => Ok(false),
        }
    }

    /// `repeat` Number StatementBlock
    fn parse_repeat(&mut self) -> RuleResult {
        self.bump()?;
        let count = self.expect(TokenKind::Number)?;

        self.enter_node(NodeSlot::from_kind(TokenKind::Repeat))?;
        self.attach(NodeSlot::from_token(count))?;
        self.parse_statement_block()?;
        self.leave_node()?;
        Ok(true)
    }

    /// `{` Statement* `}`
    fn parse_statement_block(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::OpenBrace)?;
        self.parse_statements()?;
        self.expect(TokenKind::CloseBrace)?;
        Ok(())
    }

    /// `function` Identifier ArgList StatementBlock
    fn parse_function(&mut self) -> RuleResult {
        self.bump()?;
        let name = self.expect(TokenKind::Identifier)?;

        self.enter_node(NodeSlot::from_kind(TokenKind::Function))?;
        self.attach(NodeSlot::from_token(name))?;
        self.parse_arg_list()?;

        self.enter_node(NodeSlot::from_kind(TokenKind::StatementBlock))?;
        self.parse_statement_block()?;
        self.leave_node()?;

        self.leave_node()?;
        Ok(true)
    }

    /// `(` (Identifier (`,` Identifier)*)? `)`
    fn parse_arg_list(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::OpenParen)?;
        self.enter_node(NodeSlot::from_kind(TokenKind::ArgList))?;

        while self.current_kind() == Some(TokenKind::Identifier) {
            let arg = self.bump()?;
            self.attach(NodeSlot::from_token(arg))?;
            if self.current_kind() != Some(TokenKind::Comma) {
                break;
            }
            self.bump()?;
        }

        self.expect(TokenKind::CloseParen)?;
        self.leave_node()
    }

    /// `delta` ColorKeyword Number, where only `red` is wired
    fn parse_delta(&mut self) -> RuleResult {
        if self.peek_kind(1) != Some(TokenKind::Red) {
            return Ok(false);
        }
        self.bump()?;
        let color = self.bump()?;
        let amount = self.expect(TokenKind::Number)?;

        self.enter_node(NodeSlot::from_kind(TokenKind::Delta))?;
        self.attach(NodeSlot::from_token(color))?;
        self.attach(NodeSlot::from_token(amount))?;
        self.leave_node()?;
        Ok(true)
    }

    /// Keyword Number, for `rotate` and `move`
    fn parse_parameterised_command(&mut self, kind: TokenKind) -> RuleResult {
        self.bump()?;
        let amount = self.expect(TokenKind::Number)?;

        self.enter_node(NodeSlot::from_kind(kind))?;
        self.attach(NodeSlot::from_token(amount))?;
        self.leave_node()?;
        Ok(true)
    }

    fn add_leaf(&mut self) -> RuleResult {
        let token = self.bump()?;
        self.attach(NodeSlot::from_token(token))?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Token cursor
    // ------------------------------------------------------------------

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    fn peek_kind(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.cursor + offset).map(|token| token.kind)
    }

    /// Span of the current token, or an empty span just past the last one
    fn current_span(&self) -> logos::Span {
        match self.current() {
            Some(token) => token.span.clone(),
            None => {
                let end = self.tokens.last().map_or(0, |token| token.span.end);
                end..end
            }
        }
    }

    /// Consume the current token, whatever it is
    fn bump(&mut self) -> Result<Token, ParseError> {
        let token = self
            .current()
            .cloned()
            .ok_or_else(|| ParseError::Internal("token expected past end of input".into()))?;
        self.cursor += 1;
        Ok(token)
    }

    /// Consume the current token if it has the given kind
    fn expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        match self.current_kind() {
            Some(kind) if kind == expected => self.bump(),
            found => Err(ParseError::Syntax {
                expected,
                found: found.unwrap_or(TokenKind::End),
                span: self.current_span(),
            }),
        }
    }

    // ------------------------------------------------------------------
    // Context stack
    // ------------------------------------------------------------------

    fn alloc(&mut self, slot: NodeSlot) -> NodeId {
        self.arena.push(slot);
        self.arena.len() - 1
    }

    /// Attach a new node to the current scope and make it the current scope
    fn enter_node(&mut self, slot: NodeSlot) -> Result<(), ParseError> {
        if self.context.len() > MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING_DEPTH,
                span: self.current_span(),
            });
        }
        let kind = slot.kind;
        self.attach(slot)?;
        self.context.push(self.arena.len() - 1);
        trace!(?kind, depth = self.context.len(), "enter node");
        Ok(())
    }

    fn leave_node(&mut self) -> Result<(), ParseError> {
        let id = self
            .context
            .pop()
            .ok_or_else(|| ParseError::Internal("leave_node on an empty context stack".into()))?;
        trace!(kind = ?self.arena[id].kind, depth = self.context.len(), "leave node");
        Ok(())
    }

    /// Attach a node to the current scope without opening it
    fn attach(&mut self, slot: NodeSlot) -> Result<(), ParseError> {
        let top = *self
            .context
            .last()
            .ok_or_else(|| ParseError::Internal("no open scope to attach to".into()))?;
        let id = self.alloc(slot);
        self.arena[top].children.push(id);
        Ok(())
    }

    fn build(&self, id: NodeId) -> AstNode {
        let slot = &self.arena[id];
        let mut node = match &slot.payload {
            Some(token) => AstNode::from_token(token.clone()),
            None => AstNode::from_kind(slot.kind),
        };
        for &child in &slot.children {
            node.add_child(self.build(child));
        }
        node
    }
}
