//! Route path validation and segment splitting.

use crate::error::{Result, RouterError};

/// A validated route path.
///
/// A route path is compared literally, one `/`-delimited segment at a
/// time. Exactly one leading slash is stripped before splitting, so `/`
/// has no segments and `/users/` ends with an empty segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePath<'a> {
    raw: &'a str,
}

impl<'a> RoutePath<'a> {
    /// Validates a path.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPath`] if `path` is empty or does not
    /// start with `/`.
    ///
    /// # Example
    ///
    /// ```
    /// use qhttp_router::RoutePath;
    ///
    /// let path = RoutePath::parse("/posts/42/comments").unwrap();
    /// let segments: Vec<_> = path.segments().collect();
    /// assert_eq!(segments, ["posts", "42", "comments"]);
    /// assert!(RoutePath::parse("posts").is_err());
    /// ```
    pub fn parse(path: &'a str) -> Result<Self> {
        if path.is_empty() {
            return Err(RouterError::InvalidPath {
                path: String::new(),
                reason: "path is empty",
            });
        }
        if !path.starts_with('/') {
            return Err(RouterError::InvalidPath {
                path: path.to_string(),
                reason: "path must start with '/'",
            });
        }
        Ok(Self { raw: path })
    }

    /// Returns the literal segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        let raw = self.raw;
        let rest = &raw[1..];
        (!rest.is_empty())
            .then(|| rest.split('/'))
            .into_iter()
            .flatten()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Returns the original path string.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }
}

/// Checks that a method is a non-empty token.
///
/// The method is otherwise opaque: `GET` and `get` are different methods.
///
/// # Errors
///
/// Returns [`RouterError::InvalidMethod`] for an empty method or one
/// containing whitespace or control characters.
pub fn validate_method(method: &str) -> Result<()> {
    if method.is_empty()
        || method
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(RouterError::InvalidMethod(method.to_string()));
    }
    Ok(())
}
