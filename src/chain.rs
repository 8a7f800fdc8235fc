//! UCSC chain file parsing.
//!
//! A chain describes one pairwise alignment between a region of a target
//! ("reference") sequence and a region of a query sequence:
//!
//! ```text
//! chain <score> <tName> <tSize> <tStrand> <tStart> <tEnd> <qName> <qSize> <qStrand> <qStart> <qEnd> [<id>]
//! <size> <dt> <dq>
//! ...
//! <size>
//! ```
//!
//! Each data line is one ungapped aligned block (`size` bases on both sides)
//! followed by the gap advanced on the target (`dt`) and query (`dq`) before
//! the next block; the final line carries only `size` and terminates the
//! chain. Blank lines separate chains in a multi-chain file.
//!
//! # Coordinate System
//!
//! | Field | Basis | Notes |
//! |-------|-------|-------|
//! | `t_start`, `t_end` | 0-based, half-open | Forward strand |
//! | `q_start`, `q_end` | 0-based, half-open | Reverse-strand coordinates when `q_strand` is `-` |
//! | [`Link`] intervals | 0-based, half-open | Always forward-strand coordinates |
//!
//! When the strands differ, the parser walks the query sequence from its high
//! end downwards, so every materialized [`Interval`] is expressed in forward
//! coordinates with its `inverted` flag set.

use crate::error::ChainError;
use crate::interval::Interval;
use crate::strand::Strand;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One ungapped aligned block within a chain.
///
/// A link pairs a reference-side interval with a query-side interval of the
/// same size, plus the raw gap numbers from the source line so the original
/// record can be reproduced. Links are immutable after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Reference (target) side of the aligned block.
    pub reference: Interval,
    /// Query side of the aligned block, in forward-strand coordinates.
    pub query: Interval,
    /// Size of the aligned block.
    pub size: u64,
    /// Gap advanced on the reference before the next block.
    pub dt: u64,
    /// Gap advanced on the query before the next block.
    pub dq: u64,
}

impl Link {
    /// Reproduce the original chain file data line for this link.
    ///
    /// The terminal link of a chain (both gaps zero) serializes as the bare
    /// block size.
    pub fn gap_line(&self) -> String {
        if self.dt == 0 && self.dq == 0 {
            format!("{}", self.size)
        } else {
            format!("{} {} {}", self.size, self.dt, self.dq)
        }
    }

    /// Project a reference-side region onto the query side of this link.
    ///
    /// Returns `None` when the region's contig does not match the link's
    /// reference contig (compared case-insensitively; parsed names are
    /// already lowercase).
    ///
    /// # Precondition
    ///
    /// The region must overlap `self.reference`. This is not validated:
    /// callers are expected to select overlapping links first (typically via
    /// an external range index over [`RangeIndexed`] bounds), and calling
    /// this on a non-overlapping link yields a degenerate, possibly empty
    /// interval. Use [`Link::project_checked`] to get an error instead.
    ///
    /// [`RangeIndexed`]: crate::index::RangeIndexed
    pub fn project(&self, region: &Interval) -> Option<Interval> {
        if !region.contig.eq_ignore_ascii_case(&self.reference.contig) {
            return None;
        }

        // How much of the block lies outside the requested region on each
        // side.
        let start_offset = region.start.saturating_sub(self.reference.start);
        let end_offset = self.reference.end.saturating_sub(region.end);

        Some(Interval::with_orientation(
            self.query.contig.clone(),
            self.query.start + start_offset,
            self.query.end.saturating_sub(end_offset),
            self.query.inverted,
        ))
    }

    /// Like [`Link::project`], but validates the precondition.
    ///
    /// Returns [`ChainError::OutOfRange`] when the region does not overlap
    /// this link's reference interval (including contig mismatch).
    pub fn project_checked(&self, region: &Interval) -> Result<Interval, ChainError> {
        let overlapping = region.contig.eq_ignore_ascii_case(&self.reference.contig)
            && region.start < self.reference.end
            && self.reference.start < region.end;
        if !overlapping {
            return Err(ChainError::OutOfRange {
                msg: format!("region {} does not overlap block {}", region, self.reference),
            });
        }
        // Precondition established above, so projection cannot degenerate.
        Ok(self
            .project(region)
            .unwrap_or_else(|| unreachable!("contig equality checked")))
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.reference, self.query)
    }
}

/// One pairwise alignment chain: a header plus its ordered aligned blocks.
///
/// Links are stored in increasing order of `reference.start`; together with
/// the inter-block gaps they span exactly `[t_start, t_end)` on the
/// reference sequence. A chain is immutable once parsed and owns its links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    /// Alignment score.
    pub score: u64,
    /// Target (reference) sequence name, lowercase-folded.
    pub t_name: String,
    /// Target sequence size.
    pub t_size: u64,
    /// Target strand.
    pub t_strand: Strand,
    /// Alignment start on the target (0-based).
    pub t_start: u64,
    /// Alignment end on the target (0-based, exclusive).
    pub t_end: u64,
    /// Query sequence name, lowercase-folded.
    pub q_name: String,
    /// Query sequence size.
    pub q_size: u64,
    /// Query strand.
    pub q_strand: Strand,
    /// Alignment start on the query, in `q_strand` coordinates.
    pub q_start: u64,
    /// Alignment end on the query, in `q_strand` coordinates.
    pub q_end: u64,
    /// Chain ID, absent when the header line has no id token.
    pub id: Option<u64>,
    /// Aligned blocks, in parse order (increasing `reference.start`).
    pub links: Vec<Link>,
}

impl Chain {
    /// True when the target and query strands differ, i.e. the query runs
    /// opposite to the reference walk.
    pub fn inverted(&self) -> bool {
        self.t_strand != self.q_strand
    }

    /// Parse a `chain` header line.
    ///
    /// The line must carry the `chain` marker plus 11 or 12 fields (the
    /// trailing id is optional). Sequence names are folded to lowercase;
    /// chain files are matched case-insensitively downstream.
    pub fn parse_header(line: &str) -> Result<Self, ChainError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.first() != Some(&"chain") {
            return Err(ChainError::MalformedHeader {
                msg: format!("missing 'chain' marker in line '{}'", line.trim()),
            });
        }
        if parts.len() < 12 || parts.len() > 13 {
            return Err(ChainError::MalformedHeader {
                msg: format!(
                    "expected 11 or 12 fields after 'chain', got {}",
                    parts.len() - 1
                ),
            });
        }

        let id = match parts.get(12) {
            Some(tok) => Some(parse_field(tok, "id")?),
            None => None,
        };

        Ok(Chain {
            score: parse_field(parts[1], "score")?,
            t_name: parts[2].to_lowercase(),
            t_size: parse_field(parts[3], "tSize")?,
            t_strand: parts[4].parse()?,
            t_start: parse_field(parts[5], "tStart")?,
            t_end: parse_field(parts[6], "tEnd")?,
            q_name: parts[7].to_lowercase(),
            q_size: parse_field(parts[8], "qSize")?,
            q_strand: parts[9].parse()?,
            q_start: parse_field(parts[10], "qStart")?,
            q_end: parse_field(parts[11], "qEnd")?,
            id,
            links: Vec::new(),
        })
    }

    /// Read the next chain from a line source.
    ///
    /// Skips blank and `#` comment lines, then parses one header line and
    /// the block lines that follow it, up to and including the terminal
    /// single-value line. Returns `Ok(None)` at end of input.
    pub fn read<R: BufRead>(reader: &mut R) -> Result<Option<Self>, ChainError> {
        let header = loop {
            match read_line(reader)? {
                None => return Ok(None),
                Some(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }
                    break Self::parse_header(trimmed)?;
                }
            }
        };

        let mut chain = header;
        chain.read_blocks(reader)?;
        log::debug!(
            "parsed chain {:?}: {} -> {}, {} links",
            chain.id,
            chain.t_name,
            chain.q_name,
            chain.links.len()
        );
        Ok(Some(chain))
    }

    /// Consume block lines and materialize one [`Link`] per line.
    ///
    /// The reference side always walks forward from `t_start`, advancing by
    /// `size + dt` per block. The query side walks forward from `q_start`
    /// when the strands agree; when they differ it walks *down* from
    /// `q_size - q_start`, modeling alignment to the reverse-complement
    /// strand, and each block's query interval is `[q_from - size, q_from)`
    /// in forward coordinates.
    fn read_blocks<R: BufRead>(&mut self, reader: &mut R) -> Result<(), ChainError> {
        let inverted = self.inverted();
        let mut t_from = self.t_start;
        let mut q_from = if inverted {
            self.q_size.checked_sub(self.q_start).ok_or_else(|| {
                ChainError::MalformedHeader {
                    msg: format!(
                        "qStart {} exceeds qSize {} for {}",
                        self.q_start, self.q_size, self.q_name
                    ),
                }
            })?
        } else {
            self.q_start
        };

        loop {
            let line = match read_line(reader)? {
                Some(line) => line,
                None => {
                    return Err(ChainError::UnexpectedEndOfChain {
                        msg: format!(
                            "input ended before the terminal block line of chain {} -> {}",
                            self.t_name, self.q_name
                        ),
                    })
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("chain") {
                return Err(ChainError::UnexpectedEndOfChain {
                    msg: format!(
                        "chain {} -> {} ended before its terminal block line",
                        self.t_name, self.q_name
                    ),
                });
            }

            let cols: Vec<&str> = trimmed.split_whitespace().collect();
            match cols.len() {
                3 => {
                    let size = parse_block_field(cols[0], trimmed)?;
                    let dt = parse_block_field(cols[1], trimmed)?;
                    let dq = parse_block_field(cols[2], trimmed)?;
                    self.push_link(size, dt, dq, t_from, q_from, inverted, trimmed)?;
                    t_from += size + dt;
                    if inverted {
                        q_from = q_from.checked_sub(size + dq).ok_or_else(|| {
                            ChainError::MalformedBlockLine {
                                msg: format!(
                                    "block '{}' extends past the start of {}",
                                    trimmed, self.q_name
                                ),
                            }
                        })?;
                    } else {
                        q_from += size + dq;
                    }
                }
                1 => {
                    let size = parse_block_field(cols[0], trimmed)?;
                    self.push_link(size, 0, 0, t_from, q_from, inverted, trimmed)?;
                    t_from += size;
                    if t_from != self.t_end {
                        log::warn!(
                            "chain {} -> {}: blocks cover [{}, {}) but header declares tEnd {}",
                            self.t_name,
                            self.q_name,
                            self.t_start,
                            t_from,
                            self.t_end
                        );
                    }
                    return Ok(());
                }
                n => {
                    return Err(ChainError::MalformedBlockLine {
                        msg: format!("expected 1 or 3 fields, got {} in line '{}'", n, trimmed),
                    })
                }
            }
        }
    }

    /// Append one parsed block as a link.
    fn push_link(
        &mut self,
        size: u64,
        dt: u64,
        dq: u64,
        t_from: u64,
        q_from: u64,
        inverted: bool,
        line: &str,
    ) -> Result<(), ChainError> {
        let reference =
            Interval::with_orientation(self.t_name.clone(), t_from, t_from + size, inverted);
        let query = if inverted {
            let start = q_from.checked_sub(size).ok_or_else(|| {
                ChainError::MalformedBlockLine {
                    msg: format!("block '{}' extends past the start of {}", line, self.q_name),
                }
            })?;
            Interval::with_orientation(self.q_name.clone(), start, q_from, inverted)
        } else {
            Interval::with_orientation(self.q_name.clone(), q_from, q_from + size, inverted)
        };

        self.links.push(Link {
            reference,
            query,
            size,
            dt,
            dq,
        });
        Ok(())
    }

    /// Reproduce the original header line, token for token.
    ///
    /// The id token is emitted only when it was present in the input.
    pub fn header_line(&self) -> String {
        let mut line = format!(
            "chain {} {} {} {} {} {} {} {} {} {} {}",
            self.score,
            self.t_name,
            self.t_size,
            self.t_strand,
            self.t_start,
            self.t_end,
            self.q_name,
            self.q_size,
            self.q_strand,
            self.q_start,
            self.q_end,
        );
        if let Some(id) = self.id {
            line.push(' ');
            line.push_str(&id.to_string());
        }
        line
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}{}{} to {}:{}{}{}",
            self.t_name,
            self.t_start,
            self.t_strand,
            self.t_end,
            self.q_name,
            self.q_start,
            self.q_strand,
            self.q_end
        )?;
        for link in &self.links {
            write!(f, "\n> {}", link)?;
        }
        Ok(())
    }
}

/// Iterator over the chains in a multi-chain stream.
///
/// ```
/// use ferro_chain::ChainReader;
///
/// let text = "chain 100 chr1 1000000 + 500 700 chr2 2000000 + 300 500\n200\n";
/// let chains: Vec<_> = ChainReader::new(text.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(chains.len(), 1);
/// ```
pub struct ChainReader<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> ChainReader<R> {
    /// Create a reader over a buffered line source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for ChainReader<R> {
    type Item = Result<Chain, ChainError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match Chain::read(&mut self.reader) {
            Ok(Some(chain)) => Some(Ok(chain)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                // A parse error is fatal to the stream; no partial recovery.
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Open a chain file for sequential reading (supports `.chain` and
/// `.chain.gz`).
pub fn open_chain_file<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>, ChainError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ChainError::Io {
        msg: format!("failed to open chain file {}: {}", path.display(), e),
    })?;

    if path.to_string_lossy().ends_with(".gz") {
        let decoder = flate2::read::GzDecoder::new(file);
        Ok(Box::new(BufReader::new(decoder)))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, ChainError> {
    let mut buf = String::new();
    let n = reader.read_line(&mut buf).map_err(|e| ChainError::Io {
        msg: format!("failed to read line: {}", e),
    })?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(buf))
    }
}

fn parse_field(token: &str, field: &str) -> Result<u64, ChainError> {
    token.parse::<u64>().map_err(|_| ChainError::MalformedHeader {
        msg: format!("invalid {} '{}'", field, token),
    })
}

fn parse_block_field(token: &str, line: &str) -> Result<u64, ChainError> {
    token
        .parse::<u64>()
        .map_err(|_| ChainError::MalformedBlockLine {
            msg: format!("invalid value '{}' in line '{}'", token, line),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_block_chain() -> Chain {
        let text = "chain 100 chr1 1000000 + 500 700 chr2 2000000 + 300 500\n200\n";
        Chain::read(&mut text.as_bytes()).unwrap().unwrap()
    }

    #[test]
    fn test_parse_header() {
        let chain = Chain::parse_header(
            "chain 4900 chrY 58368225 + 25985403 25985638 chr5 151006098 - 43257292 43257528 1",
        )
        .unwrap();
        assert_eq!(chain.score, 4900);
        assert_eq!(chain.t_name, "chry");
        assert_eq!(chain.t_size, 58368225);
        assert_eq!(chain.t_strand, Strand::Plus);
        assert_eq!(chain.t_start, 25985403);
        assert_eq!(chain.t_end, 25985638);
        assert_eq!(chain.q_name, "chr5");
        assert_eq!(chain.q_size, 151006098);
        assert_eq!(chain.q_strand, Strand::Minus);
        assert_eq!(chain.q_start, 43257292);
        assert_eq!(chain.q_end, 43257528);
        assert_eq!(chain.id, Some(1));
        assert!(chain.inverted());
    }

    #[test]
    fn test_parse_header_without_id() {
        let chain =
            Chain::parse_header("chain 100 chr1 1000000 + 500 700 chr2 2000000 + 300 500").unwrap();
        assert_eq!(chain.id, None);
        assert!(!chain.inverted());
    }

    #[test]
    fn test_parse_header_errors() {
        // Wrong marker.
        assert!(matches!(
            Chain::parse_header("chian 100 chr1 1000000 + 500 700 chr2 2000000 + 300 500"),
            Err(ChainError::MalformedHeader { .. })
        ));
        // Too few fields.
        assert!(matches!(
            Chain::parse_header("chain 100 chr1 1000000 + 500 700 chr2 2000000 + 300"),
            Err(ChainError::MalformedHeader { .. })
        ));
        // Unparsable score.
        assert!(matches!(
            Chain::parse_header("chain abc chr1 1000000 + 500 700 chr2 2000000 + 300 500"),
            Err(ChainError::MalformedHeader { .. })
        ));
        // Bad strand.
        assert!(matches!(
            Chain::parse_header("chain 100 chr1 1000000 * 500 700 chr2 2000000 + 300 500"),
            Err(ChainError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_single_terminal_block() {
        let chain = single_block_chain();
        assert_eq!(chain.links.len(), 1);
        let link = &chain.links[0];
        assert_eq!(link.reference, Interval::new("chr1", 500, 700));
        assert_eq!(link.query, Interval::new("chr2", 300, 500));
        assert_eq!(link.size, 200);
        assert_eq!((link.dt, link.dq), (0, 0));
    }

    #[test]
    fn test_forward_block_walk() {
        let text = "chain 1000 chr1 1000 + 0 315 chr1 1100 + 0 325\n\
                    100 10 20\n\
                    200 5 5\n\
                    0\n";
        let chain = Chain::read(&mut text.as_bytes()).unwrap().unwrap();
        assert_eq!(chain.links.len(), 3);

        assert_eq!(chain.links[0].reference, Interval::new("chr1", 0, 100));
        assert_eq!(chain.links[0].query, Interval::new("chr1", 0, 100));
        assert_eq!(chain.links[1].reference, Interval::new("chr1", 110, 310));
        assert_eq!(chain.links[1].query, Interval::new("chr1", 120, 320));
        assert_eq!(chain.links[2].reference, Interval::new("chr1", 315, 315));

        // Non-inverted query monotonicity.
        for pair in chain.links.windows(2) {
            assert_eq!(pair[1].query.start, pair[0].query.end + pair[0].dq);
        }
    }

    #[test]
    fn test_inverted_block_walk() {
        let text = "chain 4900 chr1 5000000 + 1000 1200 chr2 2000000 - 300 495 7\n\
                    100 10 5\n\
                    90\n";
        let chain = Chain::read(&mut text.as_bytes()).unwrap().unwrap();
        assert!(chain.inverted());
        assert_eq!(chain.links.len(), 2);

        // q_from starts at q_size - q_start = 1999700 and walks downwards.
        let first = &chain.links[0];
        assert_eq!(first.reference, Interval::with_orientation("chr1", 1000, 1100, true));
        assert_eq!(first.query, Interval::with_orientation("chr2", 1999600, 1999700, true));
        assert!(first.query.inverted);

        let last = &chain.links[1];
        assert_eq!(last.reference, Interval::with_orientation("chr1", 1110, 1200, true));
        assert_eq!(last.query, Interval::with_orientation("chr2", 1999505, 1999595, true));
        assert_eq!((last.dt, last.dq), (0, 0));
    }

    #[test]
    fn test_link_sizes_match() {
        let text = "chain 4900 chr1 5000000 + 1000 1200 chr2 2000000 - 300 495\n\
                    100 10 5\n\
                    90\n";
        let chain = Chain::read(&mut text.as_bytes()).unwrap().unwrap();
        for link in &chain.links {
            assert_eq!(link.reference.size(), link.size);
            assert_eq!(link.query.size(), link.size);
        }
    }

    #[test]
    fn test_reference_span_coverage() {
        let text = "chain 1000 chr1 1000 + 0 315 chr1 1100 + 0 325\n\
                    100 10 20\n\
                    200 5 5\n\
                    0\n";
        let chain = Chain::read(&mut text.as_bytes()).unwrap().unwrap();
        let covered: u64 = chain.links.iter().map(|l| l.size + l.dt).sum();
        assert_eq!(chain.t_start + covered, chain.t_end);
    }

    #[test]
    fn test_unexpected_end_of_chain() {
        let text = "chain 1000 chr1 1000 + 0 315 chr1 1100 + 0 325\n100 10 20\n";
        assert!(matches!(
            Chain::read(&mut text.as_bytes()),
            Err(ChainError::UnexpectedEndOfChain { .. })
        ));
    }

    #[test]
    fn test_blank_line_before_terminal_block() {
        let text = "chain 1000 chr1 1000 + 0 315 chr1 1100 + 0 325\n100 10 20\n\n";
        assert!(matches!(
            Chain::read(&mut text.as_bytes()),
            Err(ChainError::UnexpectedEndOfChain { .. })
        ));
    }

    #[test]
    fn test_malformed_block_line() {
        let text = "chain 1000 chr1 1000 + 0 315 chr1 1100 + 0 325\n100 10\n";
        assert!(matches!(
            Chain::read(&mut text.as_bytes()),
            Err(ChainError::MalformedBlockLine { .. })
        ));

        let text = "chain 1000 chr1 1000 + 0 315 chr1 1100 + 0 325\n100 x 20\n";
        assert!(matches!(
            Chain::read(&mut text.as_bytes()),
            Err(ChainError::MalformedBlockLine { .. })
        ));
    }

    #[test]
    fn test_inverted_q_start_exceeds_q_size() {
        // The downward query walk starts at q_size - q_start; a header
        // declaring q_start beyond q_size must fail, not underflow.
        let text = "chain 1 chr1 100 + 0 5 chr2 10 - 20 25\n5\n";
        assert!(matches!(
            Chain::read(&mut text.as_bytes()),
            Err(ChainError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_header_roundtrip() {
        let line = "chain 4900 chry 58368225 + 25985403 25985638 chr5 151006098 - 43257292 43257528 1";
        let chain = Chain::parse_header(line).unwrap();
        assert_eq!(chain.header_line(), line);

        let line = "chain 100 chr1 1000000 + 500 700 chr2 2000000 + 300 500";
        let chain = Chain::parse_header(line).unwrap();
        assert_eq!(chain.header_line(), line);
    }

    #[test]
    fn test_gap_line_roundtrip() {
        let text = "chain 1000 chr1 1000 + 0 315 chr1 1100 + 0 325\n\
                    100 10 20\n\
                    200 5 5\n\
                    0\n";
        let chain = Chain::read(&mut text.as_bytes()).unwrap().unwrap();
        let lines: Vec<String> = chain.links.iter().map(Link::gap_line).collect();
        assert_eq!(lines, vec!["100 10 20", "200 5 5", "0"]);
    }

    #[test]
    fn test_project_full_region() {
        let chain = single_block_chain();
        let link = &chain.links[0];
        let projected = link.project(&link.reference).unwrap();
        assert_eq!(projected, link.query);
    }

    #[test]
    fn test_project_partial_region() {
        let chain = single_block_chain();
        let link = &chain.links[0];
        let projected = link.project(&Interval::new("chr1", 550, 650)).unwrap();
        assert_eq!(projected, Interval::new("chr2", 350, 450));
    }

    #[test]
    fn test_project_contig_mismatch() {
        let chain = single_block_chain();
        let link = &chain.links[0];
        assert!(link.project(&Interval::new("chr9", 550, 650)).is_none());
        assert!(link.project(&Interval::new("chr9", 0, 0)).is_none());
    }

    #[test]
    fn test_project_checked_out_of_range() {
        let chain = single_block_chain();
        let link = &chain.links[0];
        assert!(matches!(
            link.project_checked(&Interval::new("chr1", 700, 800)),
            Err(ChainError::OutOfRange { .. })
        ));
        assert!(matches!(
            link.project_checked(&Interval::new("chr9", 550, 650)),
            Err(ChainError::OutOfRange { .. })
        ));
        let projected = link
            .project_checked(&Interval::new("chr1", 550, 650))
            .unwrap();
        assert_eq!(projected, Interval::new("chr2", 350, 450));
    }

    #[test]
    fn test_display() {
        let chain = single_block_chain();
        let rendered = chain.to_string();
        assert!(rendered.starts_with("chr1:500+700 to chr2:300+500"));
        assert!(rendered.contains("> chr1:500-700 <-> chr2:300-500"));
    }

    #[test]
    fn test_multi_chain_stream() {
        let text = "chain 100 chr1 1000 + 0 500 chr1 1000 + 0 500 1\n\
                    500\n\
                    \n\
                    chain 200 chr2 1000 + 0 800 chr2 1000 + 0 800 2\n\
                    800\n\
                    \n";
        let chains: Vec<Chain> = ChainReader::new(text.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].id, Some(1));
        assert_eq!(chains[1].id, Some(2));
    }

    #[test]
    fn test_reader_stops_after_error() {
        let text = "chain 100 chr1 1000 + 0 500 chr1 1000 + 0 500 1\n100 5\n";
        let mut reader = ChainReader::new(text.as_bytes());
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
    }
}
