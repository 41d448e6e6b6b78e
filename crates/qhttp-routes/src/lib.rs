//! Route tables for the `qhttp-routes` tool.
//!
//! A route table is a JSON file listing canned responses:
//!
//! ```json
//! {
//!   "routes": [
//!     { "method": "GET", "path": "/status", "body": "up" },
//!     { "method": "GET", "path": "/status/check", "status": 204 }
//!   ]
//! }
//! ```
//!
//! [`table::RouteTable::into_router`] registers every entry on a
//! [`qhttp_router::Router`], in file order, so a later entry for the same
//! method and path wins.

pub mod table;

pub use table::{CannedRoute, RouteTable, TableError};
