//! # qhttp-router
//!
//! HTTP request routing over a tree of literal path segments.
//!
//! Each edge of the tree is one `/`-delimited path segment. A request is
//! matched by walking one edge per segment of its path and then looking up
//! its method at the node reached. Matching is exact and case-sensitive:
//! there are no parameters, no wildcards and no trailing-slash folding,
//! so `/users` and `/users/` are different routes.
//!
//! ## Quick Start
//!
//! ```
//! use qhttp_router::{Request, Response, Router};
//!
//! async fn status(_req: Request) -> Response {
//!     Response::text("up")
//! }
//!
//! async fn check(_req: Request) -> Response {
//!     Response::json(&serde_json::json!({"db": "ok"}))
//! }
//!
//! # fn main() -> qhttp_router::Result<()> {
//! let dispatcher = Router::new()
//!     .get("/status", status)?
//!     .get("/status/check", check)?
//!     .build();
//!
//! assert!(dispatcher.resolve("GET", "/status").is_ok());
//! assert!(dispatcher.resolve("POST", "/status").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Two phases
//!
//! Routes are registered on a [`Router`] (or a bare [`RouteTreeBuilder`])
//! while the program starts. [`Router::build`] turns it into a
//! [`Dispatcher`], which has no registration methods at all, so routes
//! cannot change while requests are being served. A `Dispatcher` is cheap
//! to clone and safe to use from many tasks at once.
//!
//! ## Dispatch
//!
//! [`Dispatcher::dispatch`] is the per-request entry point for the HTTP
//! server: a matched handler is awaited with the original request, an
//! unmatched request gets a 404 with the body `No matching route found`,
//! and a request whose path does not start with `/` gets a 400.
//!
//! ## Inspecting routes
//!
//! ```
//! use qhttp_router::RouteTreeBuilder;
//!
//! let mut builder = RouteTreeBuilder::new();
//! builder.register("GET", "/items/1", "show").unwrap();
//! builder.register("POST", "/items/1", "update").unwrap();
//!
//! for entry in builder.build().walk() {
//!     println!("{:indent$}{} {:?}", "", entry.segment, entry.methods, indent = entry.depth * 2);
//! }
//! ```

mod error;
mod node;
mod path;
mod request;
mod response;
mod router;
mod tree;
mod walk;

pub use error::{Result, RouterError};
pub use path::{validate_method, RoutePath};
pub use request::{method, Request};
pub use response::{Response, NOT_FOUND_BODY};
pub use router::{Dispatcher, Handler, Router};
pub use tree::{RouteTree, RouteTreeBuilder, ROOT_SEGMENT};
pub use walk::{RouteEntry, Walk};
