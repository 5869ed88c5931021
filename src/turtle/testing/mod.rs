//! Testing utilities for AST assertions
//!
//! This module provides a fluent API for asserting on parsed trees,
//! making parser tests more readable and maintainable.
//!
//! # Example
//!
//! ```rust
//! let source = "repeat 4 { move 10 }";
//! let root = parse(source).unwrap();
//!
//! assert_ast(&root, source)
//!     .child_count(1)
//!     .child(0, |repeat| {
//!         repeat.kind(TokenKind::Repeat).child(0, |count| {
//!             count.leaf(TokenKind::Number, "4");
//!         });
//!     });
//! ```

mod assertions;

pub use assertions::{assert_ast, NodeAssertion};
