//! Front-facing router and request dispatch.

use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, warn};

use crate::error::{Result, RouterError};
use crate::request::{method, Request};
use crate::response::Response;
use crate::tree::{RouteTree, RouteTreeBuilder};
use crate::walk::Walk;

/// A boxed async handler function.
pub type Handler = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

fn boxed_handler<F, Fut>(handler: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |req| handler(req).boxed())
}

/// Collects routes during startup.
///
/// Call [`Router::build`] once every route is registered to get the
/// [`Dispatcher`] that serves requests.
#[derive(Default)]
pub struct Router {
    tree: RouteTreeBuilder<Handler>,
}

impl Router {
    /// Creates a router with no routes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for `method` at `path`.
    ///
    /// A later registration for the same method and path replaces this one.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPath`] or [`RouterError::InvalidMethod`]
    /// for malformed input.
    pub fn register<F, Fut>(&mut self, method: &str, path: &str, handler: F) -> Result<()>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.tree.register(method, path, boxed_handler(handler))
    }

    /// Adds a route with any method.
    ///
    /// # Errors
    ///
    /// See [`Router::register`].
    pub fn route<F, Fut>(mut self, method: &str, path: &str, handler: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.register(method, path, handler)?;
        Ok(self)
    }

    /// Adds a GET route.
    ///
    /// # Errors
    ///
    /// See [`Router::register`].
    pub fn get<F, Fut>(self, path: &str, handler: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(method::GET, path, handler)
    }

    /// Adds a POST route.
    ///
    /// # Errors
    ///
    /// See [`Router::register`].
    pub fn post<F, Fut>(self, path: &str, handler: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(method::POST, path, handler)
    }

    /// Adds a PUT route.
    ///
    /// # Errors
    ///
    /// See [`Router::register`].
    pub fn put<F, Fut>(self, path: &str, handler: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(method::PUT, path, handler)
    }

    /// Adds a PATCH route.
    ///
    /// # Errors
    ///
    /// See [`Router::register`].
    pub fn patch<F, Fut>(self, path: &str, handler: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(method::PATCH, path, handler)
    }

    /// Adds a DELETE route.
    ///
    /// # Errors
    ///
    /// See [`Router::register`].
    pub fn delete<F, Fut>(self, path: &str, handler: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(method::DELETE, path, handler)
    }

    /// Returns the number of registered `(method, path)` pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if no route is registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Ends the registration phase.
    #[must_use]
    pub fn build(self) -> Dispatcher {
        Dispatcher {
            tree: Arc::new(self.tree.build()),
        }
    }
}

/// Serves requests against a frozen set of routes.
///
/// Cloning is cheap; clones share the same tree, so one clone per
/// connection task is the intended use.
#[derive(Clone)]
pub struct Dispatcher {
    tree: Arc<RouteTree<Handler>>,
}

impl Dispatcher {
    /// Finds the handler for `method` at `path`.
    ///
    /// # Errors
    ///
    /// See [`RouteTree::resolve`].
    pub fn resolve(&self, method: &str, path: &str) -> Result<&Handler> {
        self.tree.resolve(method, path)
    }

    /// Walks the registered routes. See [`Walk`].
    #[must_use]
    pub fn routes(&self) -> Walk<'_, Handler> {
        self.tree.walk()
    }

    /// Returns the number of registered `(method, path)` pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if no route is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Handles one request.
    ///
    /// The matched handler receives `request` untouched. Unmatched requests
    /// get [`Response::not_found`] and malformed ones
    /// [`Response::bad_request`]; no handler runs for either.
    pub async fn dispatch(&self, request: Request) -> Response {
        let handler = match self.tree.resolve(&request.method, &request.path) {
            Ok(handler) => Arc::clone(handler),
            Err(err @ RouterError::NotFound { .. }) => {
                debug!(%err, "no matching route");
                return Response::not_found();
            }
            Err(err) => {
                warn!(%err, "rejected malformed request");
                return Response::bad_request();
            }
        };
        handler(request).await
    }
}
