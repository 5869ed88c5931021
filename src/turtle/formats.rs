//! Serializers for parsed trees
//!
//! - `tag` - XML-like nested tags
//! - `treeviz` - box-drawing tree, one node per line
//! - `to_json` - serde JSON of the tree

pub mod tag;
pub mod treeviz;

pub use tag::serialize_ast_tag;
pub use treeviz::to_treeviz_str;

use crate::turtle::ast::AstNode;

/// Pretty JSON of the tree (`kind`, `payload`, `children`)
pub fn to_json(root: &AstNode) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(root)
}
