use crate::error::{FragError, FragResult};
use crate::item::Item;
use crate::value::Value;
use tokio_postgres::types::ToSql;

/// A flat, immutable piece of parameterized SQL.
///
/// `Fragment` stores literal text segments and bound values separately:
/// concatenating `segments[0], marker(1), segments[1], …, marker(n),
/// segments[n]` reproduces the query text, with `values[i]` bound to marker
/// `i + 1`. Placeholder numbers are assigned at render time, so fragments
/// compose without any index bookkeeping.
///
/// Nested fragments are absorbed when the parent is constructed, so a
/// `Fragment` is always already flat and `segments.len() == values.len() + 1`
/// always holds. Rendering never recurses.
#[must_use]
#[derive(Clone, Debug)]
pub struct Fragment {
    segments: Vec<String>,
    values: Vec<Value>,
}

/// Placeholder style used by [`Fragment::render`].
#[derive(Clone, Copy)]
enum Marker {
    /// Bare `?`, no index.
    Bare,
    /// 1-based `:1, :2, …`
    Colon,
    /// 1-based `$1, $2, …`
    Dollar,
}

impl Fragment {
    /// Construct a fragment from interleaved literal segments and inputs.
    ///
    /// `segments` must contain exactly one more element than `items`: the
    /// first segment is the leading literal, and every item carries the
    /// literal that follows it. Nested fragments among `items` are flattened
    /// in place, merging literal text at both splice seams.
    ///
    /// # Example
    /// ```
    /// use sqlfrag::{Fragment, Item};
    ///
    /// let f = Fragment::new(
    ///     ["WHERE id = ", " AND org = ", ""],
    ///     [Item::bind(7_i64), Item::bind(3_i64)],
    /// )?;
    /// assert_eq!(f.text(), "WHERE id = $1 AND org = $2");
    /// # Ok::<(), sqlfrag::FragError>(())
    /// ```
    pub fn new<S: Into<String>>(
        segments: impl IntoIterator<Item = S>,
        items: impl IntoIterator<Item = Item>,
    ) -> FragResult<Fragment> {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        let items: Vec<Item> = items.into_iter().collect();

        if segments.len() != items.len() + 1 {
            if segments.is_empty() {
                return Err(FragError::NoSegments);
            }
            return Err(FragError::SegmentMismatch {
                segments: segments.len(),
                values: items.len(),
            });
        }
        Ok(Self::merge(segments, items))
    }

    /// Construction path for callers whose shape already guarantees
    /// `segments.len() == items.len() + 1` (the `frag!` macro and the
    /// join/bulk builders).
    #[doc(hidden)]
    pub fn from_parts(segments: Vec<String>, items: Vec<Item>) -> Fragment {
        Self::merge(segments, items)
    }

    /// An empty fragment, usable as a neutral default when composing.
    pub fn empty() -> Fragment {
        raw("")
    }

    /// Flatten `items` into a single segment/value sequence.
    ///
    /// One left-to-right pass, O(total placeholder count). Every nested
    /// fragment was itself flattened at its own construction time, so this
    /// never recurses. A child's leading literal merges into the current
    /// tail segment and the parent's trailing literal merges after the
    /// child's last segment; no marker is introduced at either seam.
    fn merge(segments: Vec<String>, items: Vec<Item>) -> Fragment {
        let total: usize = items
            .iter()
            .map(|item| match item {
                Item::Value(_) => 1,
                Item::Fragment(child) => child.values.len(),
            })
            .sum();

        let mut out_segments: Vec<String> = Vec::with_capacity(total + 1);
        let mut out_values: Vec<Value> = Vec::with_capacity(total);

        let mut trailing = segments.into_iter();
        out_segments.push(trailing.next().unwrap_or_default());

        for item in items {
            let segment = trailing.next().unwrap_or_default();
            match item {
                Item::Value(value) => {
                    out_values.push(value);
                    out_segments.push(segment);
                }
                Item::Fragment(child) => {
                    let mut child_segments = child.segments.into_iter();
                    if let Some(lead) = child_segments.next() {
                        if let Some(tail) = out_segments.last_mut() {
                            tail.push_str(&lead);
                        }
                    }
                    for (value, seg) in child.values.into_iter().zip(child_segments) {
                        out_values.push(value);
                        out_segments.push(seg);
                    }
                    if let Some(tail) = out_segments.last_mut() {
                        tail.push_str(&segment);
                    }
                }
            }
        }

        Fragment {
            segments: out_segments,
            values: out_values,
        }
    }

    /// Render with bare `?` placeholders.
    ///
    /// The consumer must bind [`values`](Self::values) strictly in order.
    pub fn sql(&self) -> String {
        self.render(Marker::Bare)
    }

    /// Render with 1-based `:1, :2, …` placeholders.
    pub fn statement(&self) -> String {
        self.render(Marker::Colon)
    }

    /// Render with 1-based `$1, $2, …` placeholders.
    pub fn text(&self) -> String {
        self.render(Marker::Dollar)
    }

    fn render(&self, marker: Marker) -> String {
        // Pre-size to avoid repeated reallocations (hot path).
        let mut cap: usize = 0;
        for segment in &self.segments {
            cap += segment.len();
        }
        match marker {
            Marker::Bare => cap += self.values.len(),
            Marker::Colon | Marker::Dollar => {
                for idx in 1..=self.values.len() {
                    cap += 1 /* sigil */ + decimal_digits(idx);
                }
            }
        }

        let mut out = String::with_capacity(cap);
        let mut segments = self.segments.iter();
        if let Some(first) = segments.next() {
            out.push_str(first);
        }
        let mut idx = 0;
        for segment in segments {
            idx += 1;
            match marker {
                Marker::Bare => out.push('?'),
                Marker::Colon => {
                    out.push(':');
                    push_usize(&mut out, idx);
                }
                Marker::Dollar => {
                    out.push('$');
                    push_usize(&mut out, idx);
                }
            }
            out.push_str(segment);
        }
        out
    }

    /// The flat literal segments. Always one longer than
    /// [`values`](Self::values).
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The flat bound values, in marker order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values.iter().map(|v| v.as_ref()).collect()
    }

    /// Render all three placeholder styles plus the bound values.
    ///
    /// # Example
    /// ```
    /// use sqlfrag::frag;
    ///
    /// let f = frag!("a" {1} "b");
    /// let report = f.inspect();
    /// assert_eq!(report.sql, "a?b");
    /// assert_eq!(report.text, "a$1b");
    /// ```
    pub fn inspect(&self) -> Inspection<'_> {
        Inspection {
            sql: self.sql(),
            statement: self.statement(),
            text: self.text(),
            values: &self.values,
        }
    }

    /// Emit a `tracing` debug event with the rendered query and value count.
    #[cfg(feature = "tracing")]
    pub fn trace(&self, tag: &str) {
        tracing::debug!(tag, sql = %self.sql(), values = self.values.len(), "fragment rendered");
    }
}

/// A snapshot of every rendered form of a fragment, for debugging and
/// logging.
#[derive(Debug)]
pub struct Inspection<'a> {
    /// Rendering with bare `?` placeholders.
    pub sql: String,
    /// Rendering with `:1, :2, …` placeholders.
    pub statement: String,
    /// Rendering with `$1, $2, …` placeholders.
    pub text: String,
    /// The flat bound values, in marker order.
    pub values: &'a [Value],
}

/// Wrap literal SQL text as a fragment with zero placeholders.
///
/// # Example
/// ```
/// use sqlfrag::raw;
///
/// let f = raw("NOW()");
/// assert_eq!(f.sql(), "NOW()");
/// assert!(f.values().is_empty());
/// ```
pub fn raw(text: impl Into<String>) -> Fragment {
    Fragment {
        segments: vec![text.into()],
        values: Vec::new(),
    }
}

// Fast integer digit count (avoids division loop for common cases).
#[inline]
fn decimal_digits(n: usize) -> usize {
    if n < 10 {
        1
    } else if n < 100 {
        2
    } else if n < 1000 {
        3
    } else if n < 10000 {
        4
    } else {
        // Fallback for very large placeholder counts (unlikely in practice).
        (n.ilog10() as usize) + 1
    }
}

// Write a usize as decimal digits into `out` without going through fmt.
#[inline]
fn push_usize(out: &mut String, mut n: usize) {
    if n < 10 {
        out.push((b'0' + n as u8) as char);
        return;
    }
    // Stack buffer for up to 20 digits (u64::MAX).
    let mut buf = [0u8; 20];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    // SAFETY: buf[pos..] only contains ASCII digits.
    out.push_str(unsafe { std::str::from_utf8_unchecked(&buf[pos..]) });
}
