//! Interpolated fragment construction.

/// Build a [`Fragment`](crate::Fragment) from alternating literal text and
/// interpolated inputs.
///
/// The invocation starts and ends with a string literal (write `""`
/// explicitly when an input sits at either edge). `{expr}` binds a leaf
/// value; `(expr)` splices a nested fragment in place, merging literal text
/// at both seams without inserting a marker.
///
/// Because the macro shape forces literals and inputs to interleave, the
/// resulting fragment is well-formed by construction and no `Result` is
/// involved.
///
/// # Example
/// ```
/// use sqlfrag::frag;
///
/// let cond = frag!("id = " {42_i64} "");
/// let query = frag!("SELECT * FROM users WHERE " (cond) " LIMIT 1");
/// assert_eq!(query.sql(), "SELECT * FROM users WHERE id = ? LIMIT 1");
/// assert_eq!(query.values().len(), 1);
/// ```
#[macro_export]
macro_rules! frag {
    () => {
        $crate::Fragment::empty()
    };
    ($first:literal $( $item:tt $lit:literal )*) => {
        $crate::Fragment::from_parts(
            ::std::vec![
                ::std::string::String::from($first)
                $(, ::std::string::String::from($lit) )*
            ],
            ::std::vec![ $( $crate::__frag_item!($item) ),* ],
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __frag_item {
    ({ $value:expr }) => {
        $crate::Item::bind($value)
    };
    (( $fragment:expr )) => {
        $crate::Item::from($fragment)
    };
}
