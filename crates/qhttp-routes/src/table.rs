//! Loading route tables from JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use qhttp_router::{Request, Response, Router, RouterError};

/// Errors raised while loading a route table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The table file could not be read.
    #[error("Failed to read route table '{path}': {source}")]
    Io {
        /// Path of the table file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The table is not valid JSON or has the wrong shape.
    #[error("Invalid route table: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry was rejected by the router.
    #[error("Route #{index} ({method} {path}): {source}")]
    Route {
        /// Zero-based position of the entry in the table.
        index: usize,
        /// Method of the rejected entry.
        method: String,
        /// Path of the rejected entry.
        path: String,
        /// Why the router rejected it.
        source: RouterError,
    },
}

/// One canned route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedRoute {
    /// Method, matched case-sensitively.
    pub method: String,
    /// Literal path starting with `/`.
    pub path: String,
    /// Response status.
    #[serde(default = "default_status")]
    pub status: u16,
    /// Response body.
    #[serde(default)]
    pub body: String,
    /// Optional `Content-Type` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

const fn default_status() -> u16 {
    200
}

impl CannedRoute {
    /// Builds the response this route answers with.
    #[must_use]
    pub fn response(&self) -> Response {
        let res = Response::new(self.status).body(self.body.as_str());
        match &self.content_type {
            Some(content_type) => res.header("Content-Type", content_type.as_str()),
            None => res,
        }
    }
}

/// An ordered list of canned routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    /// Entries in registration order.
    pub routes: Vec<CannedRoute>,
}

impl RouteTable {
    /// Reads a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Io`] if the file cannot be read and
    /// [`TableError::Parse`] if it is not a valid table.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let raw = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&raw)?;
        debug!(path = %path.display(), routes = table.routes.len(), "loaded route table");
        Ok(table)
    }

    /// Parses a table from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Parse`] if `json` is not a valid table.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Registers every entry on a new [`Router`].
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Route`] for the first entry with a malformed
    /// method or path.
    pub fn into_router(self) -> Result<Router, TableError> {
        let mut router = Router::new();
        for (index, route) in self.routes.into_iter().enumerate() {
            let response = route.response();
            router
                .register(&route.method, &route.path, move |_req: Request| {
                    let response = response.clone();
                    async move { response }
                })
                .map_err(|source| TableError::Route {
                    index,
                    method: route.method.clone(),
                    path: route.path.clone(),
                    source,
                })?;
        }
        Ok(router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let table =
            RouteTable::from_json(r#"{"routes": [{"method": "GET", "path": "/"}]}"#).unwrap();
        let route = &table.routes[0];
        assert_eq!(route.status, 200);
        assert_eq!(route.body, "");
        assert_eq!(route.content_type, None);
    }

    #[test]
    fn test_spec_response() {
        let route = CannedRoute {
            method: "GET".to_string(),
            path: "/teapot".to_string(),
            status: 418,
            body: "short and stout".to_string(),
            content_type: Some("text/plain".to_string()),
        };
        let res = route.response();
        assert_eq!(res.status, 418);
        assert_eq!(res.body_string().as_deref(), Some("short and stout"));
        assert_eq!(
            res.headers.get("Content-Type").map(String::as_str),
            Some("text/plain")
        );
    }

    #[test]
    fn test_bad_entry_reports_index() {
        let table = RouteTable::from_json(
            r#"{"routes": [
                {"method": "GET", "path": "/ok"},
                {"method": "GET", "path": "missing-slash"}
            ]}"#,
        )
        .unwrap();

        match table.into_router() {
            Err(TableError::Route { index, path, source, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(path, "missing-slash");
                assert!(matches!(source, RouterError::InvalidPath { .. }));
            }
            Err(other) => panic!("Expected route error, got {other}"),
            Ok(_) => panic!("Expected route error, got a router"),
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            RouteTable::from_json(r#"{"routes": [{"path": "/"}]}"#),
            Err(TableError::Parse(_))
        ));
    }
}
