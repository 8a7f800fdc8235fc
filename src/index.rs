//! Compatibility contract for external one-dimensional range indexes.
//!
//! The core does not implement interval indexing itself. Instead,
//! [`Interval`] and [`Link`] expose the minimal surface an external index
//! (an augmented interval tree, a [`rust-lapper`]-style scan list, ...)
//! needs to store and query them along the reference dimension: low/high
//! bounds, an overlap predicate, and a stable identity key.
//!
//! [`rust-lapper`]: https://docs.rs/rust-lapper

use crate::chain::Link;
use crate::interval::Interval;
use xxhash_rust::xxh3::xxh3_64;

/// Operations an external range index needs from an indexable item.
///
/// Bounds are half-open along the reference dimension. A [`Link`] forwards
/// to its reference-side interval, so links and bare intervals can be mixed
/// in one index.
pub trait RangeIndexed {
    /// Low coordinate along the reference dimension (inclusive).
    fn low_bound(&self) -> u64;

    /// High coordinate along the reference dimension (exclusive).
    fn high_bound(&self) -> u64;

    /// True iff the two half-open ranges share at least one position.
    ///
    /// Touching ranges (`self.high == other.low`) do not overlap; zero-size
    /// ranges overlap nothing.
    fn overlaps(&self, other: &dyn RangeIndexed) -> bool {
        self.low_bound().max(other.low_bound()) < self.high_bound().min(other.high_bound())
    }

    /// Stable identity key for index bookkeeping.
    ///
    /// Derived deterministically from the item's formatted coordinates, so
    /// it is stable across calls and across runs. Collisions are unlikely
    /// but an index must not assume global uniqueness.
    fn identity(&self) -> u64;
}

impl RangeIndexed for Interval {
    fn low_bound(&self) -> u64 {
        self.start
    }

    fn high_bound(&self) -> u64 {
        self.end
    }

    fn identity(&self) -> u64 {
        xxh3_64(self.to_string().as_bytes())
    }
}

impl RangeIndexed for Link {
    fn low_bound(&self) -> u64 {
        self.reference.low_bound()
    }

    fn high_bound(&self) -> u64 {
        self.reference.high_bound()
    }

    fn identity(&self) -> u64 {
        xxh3_64(self.to_string().as_bytes())
    }
}
