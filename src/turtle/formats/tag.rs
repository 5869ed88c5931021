//! XML-like AST tag serialization
//!
//! Serializes the tree to a tag format that directly reflects its structure.
//!
//! ## Format
//!
//! - Node kind → tag name
//! - Payload text → element content
//! - Children → nested elements, one per line
//!
//! ## Example
//!
//! ```text
//! <program>
//!   <repeat>
//!     <number>4</number>
//!     <move>
//!       <number>10</number>
//!     </move>
//!   </repeat>
//! </program>
//! ```

use crate::turtle::ast::AstNode;

/// Serialize a tree to AST tag format, indenting each level with `indent`
pub fn serialize_ast_tag(root: &AstNode, source: &str, indent: &str) -> String {
    let mut result = String::new();
    serialize_node(root, source, indent, 0, &mut result);
    result
}

fn serialize_node(node: &AstNode, source: &str, indent: &str, level: usize, output: &mut String) {
    let pad = indent.repeat(level);
    let tag = node.kind().tag();

    if node.is_leaf() {
        match node.payload() {
            Some(token) if !token.span.is_empty() => output.push_str(&format!(
                "{}<{}>{}</{}>\n",
                pad,
                tag,
                escape_xml(node.text(source)),
                tag
            )),
            _ => output.push_str(&format!("{}<{}/>\n", pad, tag)),
        }
        return;
    }

    output.push_str(&format!("{}<{}>\n", pad, tag));
    for child in node.children() {
        serialize_node(child, source, indent, level + 1, output);
    }
    output.push_str(&format!("{}</{}>\n", pad, tag));
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
