// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-chain: UCSC chain file parsing and pairwise liftover primitives
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! This crate parses the UCSC "chain" alignment format and builds an
//! immutable in-memory model that supports coordinate translation
//! ("liftover") and interval-overlap queries between the target and query
//! coordinate spaces. Indexing many chains is left to an external range
//! index, which plugs in through the [`RangeIndexed`] contract.
//!
//! # Example
//!
//! ```
//! use ferro_chain::{ChainReader, Interval};
//!
//! let text = "chain 100 chr1 1000000 + 500 700 chr2 2000000 + 300 500\n200\n";
//! let chain = ChainReader::new(text.as_bytes()).next().unwrap().unwrap();
//!
//! let link = &chain.links[0];
//! assert_eq!(link.reference.to_string(), "chr1:500-700");
//! assert_eq!(link.query.to_string(), "chr2:300-500");
//!
//! // Project a target-side region onto the query assembly.
//! let region = Interval::new("chr1", 550, 650);
//! let lifted = link.project(&region).unwrap();
//! assert_eq!(lifted.to_string(), "chr2:350-450");
//! ```

pub mod chain;
pub mod error;
pub mod index;
pub mod interval;
pub mod strand;

// Re-export commonly used types
pub use chain::{open_chain_file, Chain, ChainReader, Link};
pub use error::ChainError;
pub use index::RangeIndexed;
pub use interval::Interval;
pub use strand::Strand;

/// Result type alias for ferro-chain operations
pub type Result<T> = std::result::Result<T, ChainError>;
