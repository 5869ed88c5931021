//! Treeviz formatter for AST nodes

use crate::turtle::ast::AstNode;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Render the children of `root` as a tree; labels longer than `label_width` are cut
pub fn to_treeviz_str(root: &AstNode, source: &str, label_width: usize) -> String {
    let mut result = String::new();
    append_children(&mut result, root.children(), source, "", label_width);
    result
}

fn append_node(
    result: &mut String,
    node: &AstNode,
    source: &str,
    prefix: &str,
    is_last: bool,
    label_width: usize,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(node.text(source), label_width);

    if label.is_empty() {
        result.push_str(&format!("{}{} {}\n", prefix, connector, node.kind()));
    } else {
        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector,
            node.kind(),
            label
        ));
    }

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node.children(), source, &new_prefix, label_width);
}

fn append_children(
    result: &mut String,
    children: &[AstNode],
    source: &str,
    prefix: &str,
    label_width: usize,
) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, source, prefix, is_last, label_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turtle::parser::parse;

    #[test]
    fn test_function_tree() {
        let source = "function f(a,b) { penup } quit";
        let root = parse(source).unwrap();
        insta::assert_snapshot!(to_treeviz_str(&root, source, 30), @r"
        ├─ Function
        │ ├─ Identifier: f
        │ ├─ ArgList
        │ │ ├─ Identifier: a
        │ │ └─ Identifier: b
        │ └─ StatementBlock
        │   └─ PenUp: penup
        └─ Quit: quit
        ");
    }

    #[test]
    fn test_empty_program() {
        let root = parse("  ").unwrap();
        assert_eq!(to_treeviz_str(&root, "  ", 30), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
