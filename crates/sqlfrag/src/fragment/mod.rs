//! Composable parameterized SQL fragments.
//!
//! A [`Fragment`] stores literal SQL text and bound values separately and
//! renders placeholder markers on demand, so sub-clauses compose without
//! string concatenation or manual index bookkeeping:
//!
//! ```
//! use sqlfrag::frag;
//!
//! let status = frag!("status = " {"active"} "");
//! let query = frag!("SELECT * FROM users WHERE " (status) " ORDER BY id");
//! assert_eq!(query.text(), "SELECT * FROM users WHERE status = $1 ORDER BY id");
//! ```
//!
//! Splicing a fragment into another merges literal text at both seams
//! without inserting a marker, so whitespace and operator adjacency in the
//! literals is preserved exactly as written.

mod builder;

#[cfg(test)]
mod tests;

pub use builder::{Fragment, Inspection, raw};
