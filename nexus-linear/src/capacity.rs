//! Capacity growth and shrink policies for contiguous storage.
//!
//! A policy is a pure function from `(capacity, size)` to a new capacity.
//! When `size >= capacity` the container is about to overflow and the policy
//! answers with a larger capacity (the grow path). Otherwise the policy may
//! answer with a smaller capacity (the shrink path) or leave it unchanged.
//!
//! ```
//! use nexus_linear::{CapacityPolicy, Geometric};
//!
//! let policy = Geometric::doubling();
//! assert_eq!(policy.apply(0, 0), 1);
//! assert_eq!(policy.apply(4, 4), 8);
//! assert_eq!(policy.apply(8, 5), 8); // never shrinks by default
//! ```
//!
//! Only geometric growth gives `push_back` its amortized O(1) bound.
//! [`Arithmetic`] is provided for memory-constrained callers that accept
//! O(n) amortized appends.

use crate::{Error, Result};

/// Maps a `(capacity, size)` pair to the capacity the container should have.
///
/// # Contract
///
/// - Grow path (`size >= capacity`): the result must be strictly greater
///   than `size`. Containers report anything else as
///   [`Error::CapacityPolicyViolation`].
/// - Shrink path (`size < capacity`): the result must lie in
///   `size..=capacity`.
/// - Shrinking must never produce a capacity that the grow path would
///   immediately enlarge again for the same size.
pub trait CapacityPolicy {
    /// Returns the new capacity for a container holding `size` elements in
    /// `capacity` slots.
    fn apply(&self, capacity: usize, size: usize) -> usize;
}

/// Grows by a constant number of slots. Never shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arithmetic {
    step: usize,
}

impl Arithmetic {
    /// Creates a policy growing by `step` slots at a time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPolicy`] if `step` is zero.
    pub fn new(step: usize) -> Result<Self> {
        if step == 0 {
            return Err(Error::InvalidPolicy("arithmetic step must be > 0"));
        }
        Ok(Self { step })
    }

    /// Returns the growth step.
    #[inline]
    pub const fn step(&self) -> usize {
        self.step
    }
}

impl CapacityPolicy for Arithmetic {
    #[inline]
    fn apply(&self, capacity: usize, size: usize) -> usize {
        if size >= capacity {
            capacity.saturating_add(self.step)
        } else {
            capacity
        }
    }
}

/// Shrink parameters of a [`Geometric`] policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shrink {
    /// Capacity is divided by this on shrink.
    pub ratio: usize,
    /// Shrink happens once `size < capacity / threshold`.
    pub threshold: usize,
    /// Shrinking never goes below this capacity.
    pub min_capacity: usize,
}

/// Grows by a rational ratio `num / den > 1`, optionally shrinking.
///
/// Growth yields `max(capacity * num / den, capacity + 1)`, so small and
/// zero capacities still make progress.
///
/// ```
/// use nexus_linear::{CapacityPolicy, Geometric};
///
/// // Grow by 3/2, halve once less than a quarter is in use.
/// let policy = Geometric::new(3, 2).unwrap().with_shrink(2, 4).unwrap();
/// assert_eq!(policy.apply(8, 8), 12);
/// assert_eq!(policy.apply(64, 15), 32);
/// assert_eq!(policy.apply(64, 16), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometric {
    num: usize,
    den: usize,
    shrink: Option<Shrink>,
}

impl Geometric {
    /// Floor applied by the shrink path unless overridden.
    pub const DEFAULT_MIN_CAPACITY: usize = 4;

    /// Ratio 2, no shrinking. This is the default policy.
    pub const fn doubling() -> Self {
        Self {
            num: 2,
            den: 1,
            shrink: None,
        }
    }

    /// Creates a growth-only policy with ratio `num / den`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPolicy`] if `den` is zero or the ratio is
    /// not greater than 1.
    pub fn new(num: usize, den: usize) -> Result<Self> {
        if den == 0 {
            return Err(Error::InvalidPolicy("expand ratio denominator is zero"));
        }
        if num <= den {
            return Err(Error::InvalidPolicy("expand ratio must be greater than 1"));
        }
        Ok(Self {
            num,
            den,
            shrink: None,
        })
    }

    /// Enables shrinking: capacity is divided by `ratio` once
    /// `size < capacity / threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPolicy`] unless `threshold` exceeds the expand
    /// ratio and `1 < ratio <= threshold`. Those bounds keep a shrink from
    /// ever being undone by the next insert at the same size.
    pub fn with_shrink(self, ratio: usize, threshold: usize) -> Result<Self> {
        // threshold > num / den, kept in integers
        if threshold.saturating_mul(self.den) <= self.num {
            return Err(Error::InvalidPolicy(
                "shrink threshold must exceed the expand ratio",
            ));
        }
        if ratio <= 1 {
            return Err(Error::InvalidPolicy("shrink ratio must be greater than 1"));
        }
        if ratio > threshold {
            return Err(Error::InvalidPolicy(
                "shrink ratio must not exceed the shrink threshold",
            ));
        }
        Ok(Self {
            shrink: Some(Shrink {
                ratio,
                threshold,
                min_capacity: Self::DEFAULT_MIN_CAPACITY,
            }),
            ..self
        })
    }

    /// Overrides the shrink floor. Has no effect on growth-only policies.
    pub fn min_capacity(mut self, min_capacity: usize) -> Self {
        if let Some(shrink) = self.shrink.as_mut() {
            shrink.min_capacity = min_capacity;
        }
        self
    }

    /// Returns the expand ratio as `(num, den)`.
    #[inline]
    pub const fn expand_ratio(&self) -> (usize, usize) {
        (self.num, self.den)
    }

    /// Returns the shrink parameters, if shrinking is enabled.
    #[inline]
    pub const fn shrink(&self) -> Option<Shrink> {
        self.shrink
    }
}

impl Default for Geometric {
    fn default() -> Self {
        Self::doubling()
    }
}

impl CapacityPolicy for Geometric {
    #[inline]
    fn apply(&self, capacity: usize, size: usize) -> usize {
        if size >= capacity {
            let scaled = capacity.saturating_mul(self.num) / self.den;
            return scaled.max(capacity.saturating_add(1));
        }

        match self.shrink {
            Some(shrink) if size < capacity / shrink.threshold => (capacity / shrink.ratio)
                .max(shrink.min_capacity)
                .max(size)
                .min(capacity),
            _ => capacity,
        }
    }
}
