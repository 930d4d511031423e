//! Grouped row-tuple lists for multi-row operations.

use crate::error::{FragError, FragResult};
use crate::fragment::Fragment;
use crate::item::Item;
use crate::join::join_wrapped;

/// Build a grouped list of row tuples: `(r0c0<sep>r0c1),(r1c0<sep>r1c1)…`.
///
/// Each row is wrapped in parentheses with its columns joined by
/// `separator`, and the rows themselves are joined by `separator` as well.
/// All rows must have the first row's length. Fails with
/// [`FragError::EmptyBulk`] when there are no rows or the first row has no
/// columns, and with [`FragError::RaggedRow`] naming the offending row when
/// a later row's length differs.
///
/// # Example
/// ```
/// use sqlfrag::{bind, bulk};
///
/// let rows = bulk([[bind(1), bind(2)], [bind(3), bind(4)]], ",")?;
/// assert_eq!(rows.sql(), "(?,?),(?,?)");
/// # Ok::<(), sqlfrag::FragError>(())
/// ```
pub fn bulk(
    rows: impl IntoIterator<Item = impl IntoIterator<Item = impl Into<Item>>>,
    separator: &str,
) -> FragResult<Fragment> {
    bulk_wrapped(rows, separator, "", "")
}

/// [`bulk`] with the whole list wrapped in `prefix` and `suffix`.
///
/// # Example
/// ```
/// use sqlfrag::{bind, bulk_wrapped};
///
/// let insert = bulk_wrapped(
///     [[bind("alice"), bind(true)], [bind("bob"), bind(false)]],
///     ", ",
///     "VALUES ",
///     "",
/// )?;
/// assert_eq!(insert.text(), "VALUES ($1, $2), ($3, $4)");
/// # Ok::<(), sqlfrag::FragError>(())
/// ```
pub fn bulk_wrapped(
    rows: impl IntoIterator<Item = impl IntoIterator<Item = impl Into<Item>>>,
    separator: &str,
    prefix: &str,
    suffix: &str,
) -> FragResult<Fragment> {
    let rows: Vec<Vec<Item>> = rows
        .into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect();

    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(FragError::EmptyBulk);
    }

    let mut tuples = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        if row.len() != width {
            return Err(FragError::RaggedRow {
                index,
                expected: width,
                got: row.len(),
            });
        }

        let mut segments = Vec::with_capacity(row.len() + 1);
        segments.push("(".to_string());
        for _ in 1..row.len() {
            segments.push(separator.to_string());
        }
        segments.push(")".to_string());
        tuples.push(Item::from(Fragment::from_parts(segments, row)));
    }

    // At least one row exists here, so the outer join cannot fail.
    join_wrapped(tuples, separator, prefix, suffix)
}
