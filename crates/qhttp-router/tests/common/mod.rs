#![allow(dead_code)]

use qhttp_router::{Request, Response, RouteTree, RouteTreeBuilder, Router};

/// Builds a tree whose handlers are plain labels.
pub fn tree(routes: &[(&str, &str, &'static str)]) -> RouteTree<&'static str> {
    let mut builder = RouteTreeBuilder::new();
    for &(method, path, label) in routes {
        builder
            .register(method, path, label)
            .unwrap_or_else(|e| panic!("Failed to register {method} {path}: {e}"));
    }
    builder.build()
}

pub fn resolve(tree: &RouteTree<&'static str>, method: &str, path: &str) -> &'static str {
    tree.resolve(method, path)
        .copied()
        .unwrap_or_else(|e| panic!("Expected {method} {path} to resolve, got {e}"))
}

pub fn assert_not_found(tree: &RouteTree<&'static str>, method: &str, path: &str) {
    match tree.resolve(method, path) {
        Err(e) if e.is_not_found() => {}
        other => panic!("Expected {method} {path} to be not found, got {other:?}"),
    }
}

/// Registers a GET handler on `router` that answers with `label`.
pub fn labelled(router: Router, path: &str, label: &'static str) -> Router {
    router
        .get(path, move |_req: Request| async move { Response::text(label) })
        .unwrap_or_else(|e| panic!("Failed to register GET {path}: {e}"))
}
