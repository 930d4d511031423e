//! # sqlfrag
//!
//! Composable parameterized SQL fragments for Rust.
//!
//! ## Features
//!
//! - **No index bookkeeping**: fragments store literal text and bound values
//!   separately; placeholder numbers are assigned at render time
//! - **Nesting without cost**: a fragment spliced into another is flattened
//!   on construction, so rendering never recurses
//! - **Three placeholder styles**: bare `?` ([`Fragment::sql`]), `:1`
//!   ([`Fragment::statement`]), and `$1` ([`Fragment::text`])
//! - **Driver-ready values**: bound values are `ToSql` trait objects,
//!   exposed for `tokio-postgres` style drivers via [`Fragment::params_ref`]
//!
//! ## Example
//!
//! ```
//! use sqlfrag::{bind, frag, join_wrapped};
//!
//! let ids = join_wrapped([bind(1_i64), bind(2_i64), bind(3_i64)], ", ", "(", ")")?;
//! let query = frag!("SELECT id, username FROM users WHERE id IN " (ids) " AND status = " {"active"} "");
//! assert_eq!(
//!     query.text(),
//!     "SELECT id, username FROM users WHERE id IN ($1, $2, $3) AND status = $4",
//! );
//! assert_eq!(query.values().len(), 4);
//! # Ok::<(), sqlfrag::FragError>(())
//! ```

pub mod bulk;
pub mod error;
pub mod fragment;
pub mod item;
pub mod join;
mod macros;
pub mod value;

pub use bulk::{bulk, bulk_wrapped};
pub use error::{FragError, FragResult};
pub use fragment::{Fragment, Inspection, raw};
pub use item::{Item, bind};
pub use join::{join, join_wrapped};
pub use value::Value;
