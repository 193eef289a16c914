use tree_sitter::Node;

/// Extract the source text covered by a node
pub fn node_text<'a>(node: Node<'a>, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Iterator over every node of a tree in source order, including `node`
/// itself. Depth-first, so nested definitions follow their parent.
pub fn descendants<'a>(node: Node<'a>) -> impl Iterator<Item = Node<'a>> + 'a {
    let mut stack = vec![node];
    std::iter::from_fn(move || {
        let node = stack.pop()?;
        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
        Some(node)
    })
}
