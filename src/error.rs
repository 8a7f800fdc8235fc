//! Error types for ferro-chain
//!
//! All parse-time errors are fatal to the chain currently being parsed:
//! a malformed chain cannot be completed correctly and partial data would
//! silently corrupt downstream coordinate math. Errors are surfaced to the
//! caller as explicit results, never recovered inline.

use thiserror::Error;

/// Errors produced while parsing chain data or projecting regions.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The `chain` header line has the wrong token count or an unparsable
    /// numeric field.
    #[error("malformed chain header: {msg}")]
    MalformedHeader {
        /// Details about the failure.
        msg: String,
    },

    /// A block line has neither 1 nor 3 numeric tokens, or a token failed
    /// integer parsing.
    #[error("malformed block line: {msg}")]
    MalformedBlockLine {
        /// Details about the failure.
        msg: String,
    },

    /// The input ended before the terminal single-value block line.
    #[error("unexpected end of chain: {msg}")]
    UnexpectedEndOfChain {
        /// Details about the failure.
        msg: String,
    },

    /// A projection was requested for a region that does not overlap the
    /// link's reference interval.
    #[error("region out of range: {msg}")]
    OutOfRange {
        /// Details about the failure.
        msg: String,
    },

    /// Reading from the underlying line source failed.
    #[error("I/O error: {msg}")]
    Io {
        /// Details about the failure.
        msg: String,
    },
}
