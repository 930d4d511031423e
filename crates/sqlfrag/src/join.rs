//! Joining values and fragments into delimited lists.

use crate::error::{FragError, FragResult};
use crate::fragment::Fragment;
use crate::item::Item;

/// Join items with a separator: `item[0]<sep>item[1]<sep>…`.
///
/// Items may be bound leaf values or nested fragments. Fails with
/// [`FragError::EmptyJoin`] on an empty list; joining nothing is almost
/// always a caller bug, not a case to paper over.
///
/// # Example
/// ```
/// use sqlfrag::{bind, join};
///
/// let ids = join([bind(1), bind(2), bind(3)], ",")?;
/// assert_eq!(ids.sql(), "?,?,?");
/// # Ok::<(), sqlfrag::FragError>(())
/// ```
pub fn join(
    items: impl IntoIterator<Item = impl Into<Item>>,
    separator: &str,
) -> FragResult<Fragment> {
    join_wrapped(items, separator, "", "")
}

/// Join items with a separator and wrap the whole list in `prefix` and
/// `suffix`: `prefix item[0]<sep>…<sep>item[n] suffix`.
///
/// # Example
/// ```
/// use sqlfrag::{bind, join_wrapped};
///
/// let in_list = join_wrapped([bind(1), bind(2)], ", ", "(", ")")?;
/// assert_eq!(in_list.text(), "($1, $2)");
/// # Ok::<(), sqlfrag::FragError>(())
/// ```
pub fn join_wrapped(
    items: impl IntoIterator<Item = impl Into<Item>>,
    separator: &str,
    prefix: &str,
    suffix: &str,
) -> FragResult<Fragment> {
    let items: Vec<Item> = items.into_iter().map(Into::into).collect();
    if items.is_empty() {
        return Err(FragError::EmptyJoin);
    }

    let mut segments = Vec::with_capacity(items.len() + 1);
    segments.push(prefix.to_string());
    for _ in 1..items.len() {
        segments.push(separator.to_string());
    }
    segments.push(suffix.to_string());

    Ok(Fragment::from_parts(segments, items))
}
