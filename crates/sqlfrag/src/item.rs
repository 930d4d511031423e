//! Leaf-vs-fragment dispatch at construction boundaries.

use crate::fragment::Fragment;
use crate::value::Value;
use tokio_postgres::types::ToSql;

/// A single interpolated input: either a bound leaf value or a nested
/// fragment to splice in place.
///
/// The distinction is made here, at the boundary where inputs are accepted,
/// so the merge in [`Fragment`] never has to type-test what it consumes.
#[derive(Clone, Debug)]
pub enum Item {
    /// A leaf value, bound positionally.
    Value(Value),
    /// A nested fragment, flattened into the parent.
    Fragment(Fragment),
}

impl Item {
    /// Bind a leaf value.
    pub fn bind<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Item::Value(Value::new(value))
    }
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        Item::Value(value)
    }
}

impl From<Fragment> for Item {
    fn from(fragment: Fragment) -> Self {
        Item::Fragment(fragment)
    }
}

impl From<&Fragment> for Item {
    fn from(fragment: &Fragment) -> Self {
        Item::Fragment(fragment.clone())
    }
}

/// Bind a leaf value (shorthand for [`Item::bind`]).
///
/// # Example
/// ```
/// use sqlfrag::{bind, join};
///
/// let ids = join([bind(1_i64), bind(2_i64)], ", ")?;
/// assert_eq!(ids.sql(), "?, ?");
/// # Ok::<(), sqlfrag::FragError>(())
/// ```
pub fn bind<T: ToSql + Send + Sync + 'static>(value: T) -> Item {
    Item::bind(value)
}
