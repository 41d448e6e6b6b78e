//! Pre-order traversal of a route tree, for diagnostics.

use crate::node::Node;

/// One node visited by [`Walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<'a> {
    /// Distance from the root; the root itself is at depth 0.
    pub depth: usize,
    /// The node's literal segment (`"/"` for the root).
    pub segment: &'a str,
    /// Methods with a handler at this node, in lexical order.
    pub methods: Vec<&'a str>,
}

/// Lazy pre-order iterator over a route tree.
///
/// Children are visited in lexical order of their segment, so the output
/// is stable for a given set of registrations.
///
/// # Example
///
/// ```
/// use qhttp_router::RouteTreeBuilder;
///
/// let mut builder = RouteTreeBuilder::new();
/// builder.register("GET", "/a/b", ()).unwrap();
/// builder.register("GET", "/a/c", ()).unwrap();
/// let tree = builder.build();
///
/// let outline: Vec<_> = tree
///     .walk()
///     .map(|entry| (entry.depth, entry.segment))
///     .collect();
/// assert_eq!(outline, [(0, "/"), (1, "a"), (2, "b"), (2, "c")]);
/// ```
pub struct Walk<'a, H> {
    stack: Vec<(usize, &'a Node<H>)>,
}

impl<'a, H> Walk<'a, H> {
    pub(crate) fn new(root: &'a Node<H>) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl<'a, H> Iterator for Walk<'a, H> {
    type Item = RouteEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().rev().map(|child| (depth + 1, child)));
        Some(RouteEntry {
            depth,
            segment: node.segment(),
            methods: node.methods().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::RouteTreeBuilder;

    #[test]
    fn test_empty_tree_yields_root() {
        let tree = RouteTreeBuilder::<()>::new().build();
        let entries: Vec<_> = tree.walk().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].segment, "/");
        assert!(entries[0].methods.is_empty());
    }

    #[test]
    fn test_preorder_with_methods() {
        let mut builder = RouteTreeBuilder::new();
        builder.register("POST", "/items/1", ()).unwrap();
        builder.register("GET", "/items/1", ()).unwrap();
        builder.register("GET", "/", ()).unwrap();
        builder.register("GET", "/about", ()).unwrap();
        let tree = builder.build();

        let entries: Vec<_> = tree
            .walk()
            .map(|e| (e.depth, e.segment, e.methods))
            .collect();
        assert_eq!(
            entries,
            [
                (0, "/", vec!["GET"]),
                (1, "about", vec!["GET"]),
                (1, "items", vec![]),
                (2, "1", vec!["GET", "POST"]),
            ]
        );
    }
}
