//! Leaf value storage using Arc for clone-friendly fragments.

use std::fmt;
use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A clone-friendly bound value wrapper using Arc.
///
/// Fragments store their bound values as `Value`s so that a fragment can be
/// cloned and spliced into other fragments repeatedly without copying the
/// underlying data.
#[derive(Clone)]
pub struct Value(pub(crate) Arc<dyn ToSql + Send + Sync>);

impl Value {
    /// Create a new value from anything the driver can bind.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Value(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        // Arc<dyn ToSql + Send + Sync> -> &(dyn ToSql + Sync)
        // This is safe because we're just removing Send from the trait bounds
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
