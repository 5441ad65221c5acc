//! Error types shared by every container in the crate.

use thiserror::Error;

/// Failure modes of container operations.
///
/// Expected failures (a bad position, an empty container) are reported
/// through this type. Corruption of internal invariants, such as releasing a
/// free-list slot twice, panics instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The position is not a live position of this container.
    ///
    /// Covers sentinel positions used where an element is required (erasing
    /// `end()`), handles whose node was already erased, and vector ranks past
    /// the current length.
    #[error("invalid position")]
    InvalidPosition,

    /// `front`, `back` or a `pop_*` was called on an empty container.
    #[error("access to an empty container")]
    EmptyContainer,

    /// The container cannot structurally provide this operation.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// A capacity policy returned a capacity that cannot hold the elements.
    #[error("capacity policy returned {returned}, at least {required} required")]
    CapacityPolicyViolation {
        /// Minimum capacity the container needed.
        required: usize,
        /// Capacity the policy produced.
        returned: usize,
    },

    /// A capacity policy was constructed with unusable parameters.
    #[error("invalid capacity policy: {0}")]
    InvalidPolicy(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
