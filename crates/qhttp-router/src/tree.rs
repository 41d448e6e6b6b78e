//! The route tree.
//!
//! Routing happens in two phases. A [`RouteTreeBuilder`] collects
//! registrations during startup; [`RouteTreeBuilder::build`] freezes it
//! into a [`RouteTree`], which only supports lookups and can be shared
//! between any number of concurrent readers.

use tracing::debug;

use crate::error::{Result, RouterError};
use crate::node::Node;
use crate::path::{validate_method, RoutePath};
use crate::walk::Walk;

/// Display name of the root node.
pub const ROOT_SEGMENT: &str = "/";

/// Mutable registration phase of a route tree.
#[derive(Debug, Clone)]
pub struct RouteTreeBuilder<H> {
    root: Node<H>,
    routes: usize,
}

impl<H> Default for RouteTreeBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTreeBuilder<H> {
    /// Creates a builder holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Node::new(ROOT_SEGMENT),
            routes: 0,
        }
    }

    /// Binds `handler` to `method` at `path`.
    ///
    /// Missing nodes along the path are created and existing prefixes are
    /// reused. Registering the same method and path again replaces the
    /// earlier handler.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPath`] or
    /// [`RouterError::InvalidMethod`] for malformed input. The tree is left
    /// untouched in that case.
    pub fn register(&mut self, method: &str, path: &str, handler: H) -> Result<()> {
        validate_method(method)?;
        let route_path = RoutePath::parse(path)?;

        let node = route_path
            .segments()
            .fold(&mut self.root, |node, segment| node.child_or_insert(segment));

        if node.insert_handler(method, handler).is_some() {
            debug!(method, path, "replaced route handler");
        } else {
            self.routes += 1;
            debug!(method, path, "registered route");
        }
        Ok(())
    }

    /// Returns the number of distinct `(method, path)` pairs registered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.routes
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.routes == 0
    }

    /// Freezes the builder into a read-only tree.
    #[must_use]
    pub fn build(self) -> RouteTree<H> {
        RouteTree {
            root: self.root,
            routes: self.routes,
        }
    }
}

/// Read-only route tree.
///
/// Lookups take `&self` and never mutate, so a `RouteTree` behind an
/// `Arc` can serve concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct RouteTree<H> {
    root: Node<H>,
    routes: usize,
}

impl<H> RouteTree<H> {
    /// Finds the handler registered for `method` at `path`.
    ///
    /// Segments are matched literally and case-sensitively, one at a time,
    /// with no backtracking.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::NotFound`] when a segment has no matching
    /// child or the final node has no handler for `method`. Malformed input
    /// yields [`RouterError::InvalidPath`] or [`RouterError::InvalidMethod`].
    ///
    /// # Example
    ///
    /// ```
    /// use qhttp_router::RouteTreeBuilder;
    ///
    /// let mut builder = RouteTreeBuilder::new();
    /// builder.register("GET", "/status", "H1").unwrap();
    /// builder.register("GET", "/status/check", "H2").unwrap();
    /// let tree = builder.build();
    ///
    /// assert_eq!(tree.resolve("GET", "/status"), Ok(&"H1"));
    /// assert_eq!(tree.resolve("GET", "/status/check"), Ok(&"H2"));
    /// assert!(tree.resolve("GET", "/status/other").is_err());
    /// assert!(tree.resolve("POST", "/status").is_err());
    /// ```
    pub fn resolve(&self, method: &str, path: &str) -> Result<&H> {
        validate_method(method)?;
        let route_path = RoutePath::parse(path)?;

        let mut node = &self.root;
        for segment in route_path.segments() {
            node = node
                .child(segment)
                .ok_or_else(|| not_found(method, path))?;
        }
        node.handler(method).ok_or_else(|| not_found(method, path))
    }

    /// Returns the number of distinct `(method, path)` pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.routes
    }

    /// Returns `true` if the tree has no routes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.routes == 0
    }

    /// Walks the tree in pre-order. See [`Walk`].
    #[must_use]
    pub fn walk(&self) -> Walk<'_, H> {
        Walk::new(&self.root)
    }
}

fn not_found(method: &str, path: &str) -> RouterError {
    RouterError::NotFound {
        method: method.to_string(),
        path: path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(routes: &[(&str, &str, u32)]) -> RouteTree<u32> {
        let mut builder = RouteTreeBuilder::new();
        for &(method, path, handler) in routes {
            builder.register(method, path, handler).unwrap();
        }
        builder.build()
    }

    #[test]
    fn test_root_route() {
        let tree = tree(&[("GET", "/", 1)]);
        assert_eq!(tree.resolve("GET", "/"), Ok(&1));
        assert!(tree.resolve("GET", "//").unwrap_err().is_not_found());
    }

    #[test]
    fn test_shared_prefix_does_not_leak() {
        let tree = tree(&[("GET", "/a/b", 1), ("GET", "/a/c", 2)]);
        assert_eq!(tree.resolve("GET", "/a/b"), Ok(&1));
        assert_eq!(tree.resolve("GET", "/a/c"), Ok(&2));
        assert!(tree.resolve("GET", "/a").unwrap_err().is_not_found());
    }

    #[test]
    fn test_reregistration_replaces() {
        let tree = tree(&[("GET", "/x", 1), ("GET", "/x", 2)]);
        assert_eq!(tree.resolve("GET", "/x"), Ok(&2));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_method_is_case_sensitive() {
        let tree = tree(&[("GET", "/x", 1)]);
        assert!(tree.resolve("get", "/x").unwrap_err().is_not_found());
    }

    #[test]
    fn test_not_found_carries_request() {
        let tree = tree(&[("GET", "/x", 1)]);
        assert_eq!(
            tree.resolve("DELETE", "/x/y"),
            Err(RouterError::NotFound {
                method: "DELETE".to_string(),
                path: "/x/y".to_string(),
            })
        );
    }

    #[test]
    fn test_invalid_registration_leaves_tree_untouched() {
        let mut builder: RouteTreeBuilder<u32> = RouteTreeBuilder::new();
        assert!(matches!(
            builder.register("GET", "x/y", 1),
            Err(RouterError::InvalidPath { .. })
        ));
        assert!(matches!(
            builder.register("", "/x", 1),
            Err(RouterError::InvalidMethod(_))
        ));
        assert!(builder.is_empty());
        assert_eq!(builder.build().walk().count(), 1);
    }

    #[test]
    fn test_resolve_rejects_malformed_path() {
        let tree = tree(&[("GET", "/x", 1)]);
        assert!(matches!(
            tree.resolve("GET", "x"),
            Err(RouterError::InvalidPath { .. })
        ));
    }
}
