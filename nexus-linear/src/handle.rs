//! Generational node handles.
//!
//! A [`NodeRef`] names a slot in an [`Arena`](crate::Arena) together with the
//! generation the slot had when the node was created. Releasing a slot bumps
//! its generation, so a handle kept past an erase no longer resolves and is
//! reported as [`Error::InvalidPosition`](crate::Error::InvalidPosition)
//! instead of reading a recycled node.

/// Handle to a node in an [`Arena`](crate::Arena).
///
/// # Example
///
/// ```
/// use nexus_linear::NodeRef;
///
/// assert!(NodeRef::NONE.is_none());
/// assert!(!NodeRef::NONE.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    index: u32,
    generation: u32,
}

impl NodeRef {
    /// Sentinel value representing "no node".
    ///
    /// Used for empty links. Never resolves in any arena.
    pub const NONE: Self = Self {
        index: u32::MAX,
        generation: 0,
    };

    #[inline]
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the slot index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index as usize
    }

    /// Returns the slot generation this handle was issued for.
    #[inline]
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.index == u32::MAX
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        !self.is_none()
    }
}

impl Default for NodeRef {
    fn default() -> Self {
        Self::NONE
    }
}
