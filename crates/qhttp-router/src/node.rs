//! Route tree vertices.

use std::collections::BTreeMap;

/// One vertex of the route tree.
///
/// A node stands for a single path prefix. It holds the handlers
/// registered at exactly that prefix, keyed by method, and owns one child
/// per distinct next segment.
#[derive(Debug, Clone)]
pub(crate) struct Node<H> {
    segment: String,
    handlers: BTreeMap<String, H>,
    children: BTreeMap<String, Node<H>>,
}

impl<H> Node<H> {
    pub(crate) fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            handlers: BTreeMap::new(),
            children: BTreeMap::new(),
        }
    }

    pub(crate) fn segment(&self) -> &str {
        &self.segment
    }

    pub(crate) fn child(&self, segment: &str) -> Option<&Self> {
        self.children.get(segment)
    }

    /// Returns the child for `segment`, creating an empty one if needed.
    pub(crate) fn child_or_insert(&mut self, segment: &str) -> &mut Self {
        self.children
            .entry(segment.to_string())
            .or_insert_with(|| Self::new(segment))
    }

    pub(crate) fn children(&self) -> impl DoubleEndedIterator<Item = &Self> {
        self.children.values()
    }

    pub(crate) fn handler(&self, method: &str) -> Option<&H> {
        self.handlers.get(method)
    }

    /// Stores `handler` under `method`, returning the handler it replaced.
    pub(crate) fn insert_handler(&mut self, method: &str, handler: H) -> Option<H> {
        self.handlers.insert(method.to_string(), handler)
    }

    pub(crate) fn methods(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}
