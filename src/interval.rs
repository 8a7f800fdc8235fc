//! Half-open coordinate intervals on named sequences.
//!
//! # Coordinate System
//!
//! All intervals are **0-based, half-open** `[start, end)`, the UCSC chain
//! file convention. An interval's `inverted` flag records whether it lies on
//! the strand opposite to its chain's reference strand; the numeric
//! coordinates are always forward-strand coordinates regardless.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open coordinate range on a named sequence.
///
/// Immutable once constructed: intervals are created when a chain block is
/// parsed or when an overlap is projected, and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Sequence (contig) name, lowercase-folded on ingestion.
    pub contig: String,
    /// Start position (0-based, inclusive).
    pub start: u64,
    /// End position (0-based, exclusive).
    pub end: u64,
    /// True if this interval lies on the strand opposite to the chain's
    /// reference strand.
    pub inverted: bool,
}

impl Interval {
    /// Create a new forward-orientation interval.
    pub fn new(contig: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            contig: contig.into(),
            start,
            end,
            inverted: false,
        }
    }

    /// Create a new interval with an explicit orientation flag.
    pub fn with_orientation(
        contig: impl Into<String>,
        start: u64,
        end: u64,
        inverted: bool,
    ) -> Self {
        Self {
            contig: contig.into(),
            start,
            end,
            inverted,
        }
    }

    /// Number of positions covered: `end - start`.
    pub fn size(&self) -> u64 {
        self.end - self.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.contig, self.start, self.end)
    }
}
