//! Bracketed text rendering of a container, for test output and logs.
//!
//! ```
//! use nexus_linear::{Render, Vector};
//!
//! let v: Vector<u32> = (1..=5).collect();
//! assert_eq!(Render::new(&v).to_string(), "[1, 2, 3, 4, 5]");
//! assert_eq!(Render::new(&v).limit(3).size().to_string(), "[1, 2, 3, ...] (n: 5)");
//! assert_eq!(v.render().to_string(), "[1, 2, 3, 4, 5] (n: 5) (m: 8)");
//! ```
//!
//! The format is for people, not for parsing back.

use core::fmt;

use crate::linear::LinearList;

/// Elements shown before truncating, unless overridden.
pub const DEFAULT_LIMIT: usize = 32;

/// `Display` adapter rendering a [`LinearList`] as `[e1, e2, ...]`.
pub struct Render<'a, L> {
    list: &'a L,
    limit: Option<usize>,
    size: bool,
    capacity: Option<usize>,
}

impl<'a, L: LinearList> Render<'a, L> {
    /// Renders `list` with at most [`DEFAULT_LIMIT`] elements and no suffix.
    pub fn new(list: &'a L) -> Self {
        Self {
            list,
            limit: Some(DEFAULT_LIMIT),
            size: false,
            capacity: None,
        }
    }

    /// Shows at most `limit` elements, then `...`.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Shows every element.
    pub fn unlimited(mut self) -> Self {
        self.limit = None;
        self
    }

    /// Appends ` (n: len)`.
    pub fn size(mut self) -> Self {
        self.size = true;
        self
    }

    /// Appends ` (m: capacity)`.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

impl<L> fmt::Display for Render<'_, L>
where
    L: LinearList,
    L::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.list.len();
        let shown = self.limit.map_or(len, |limit| limit.min(len));

        f.write_str("[")?;
        let end = self.list.end();
        let mut pos = self.list.begin();
        for i in 0..shown {
            if pos == end {
                break;
            }
            let item = self.list.get(pos).map_err(|_| fmt::Error)?;
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
            pos = self.list.succ(pos).map_err(|_| fmt::Error)?;
        }
        if shown < len {
            f.write_str(if shown == 0 { "..." } else { ", ..." })?;
        }
        f.write_str("]")?;

        if self.size {
            write!(f, " (n: {len})")?;
        }
        if let Some(capacity) = self.capacity {
            write!(f, " (m: {capacity})")?;
        }
        Ok(())
    }
}
