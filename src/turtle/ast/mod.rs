//! AST definitions and utilities for the turtle language
//!
//! ## Modules
//!
//! - `node` - the tree node type produced by the parser
//! - `position` - line/column lookup for byte offsets, used by diagnostics

pub mod node;
pub mod position;

pub use node::AstNode;
pub use position::{Position, SourceLocation};
