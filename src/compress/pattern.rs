//! Best-match search over the prefix chain
//!
//! Walks the chain nearest-first and keeps the longest run, so among equal
//! lengths the smallest distance wins.

use super::index::MatchIndex;
use crate::common::{MAX_DISTANCE, MAX_LENGTH, MIN_MATCH_LENGTH};

/// Result of pattern matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Backward distance to the match (0 if no match)
    pub distance: usize,
    /// Length of the found match (0 if no match)
    pub length: usize,
}

impl MatchResult {
    /// Create a new match result
    pub fn new(distance: usize, length: usize) -> Self {
        Self { distance, length }
    }

    /// Create a "no match" result
    pub fn no_match() -> Self {
        Self {
            distance: 0,
            length: 0,
        }
    }

    /// Whether the match is long enough to be emitted as a reference
    pub fn is_match(&self) -> bool {
        self.length >= MIN_MATCH_LENGTH
    }
}

/// Length of the common run at `candidate` and `pos`, capped at `MAX_LENGTH`
/// and at the end of `data`
///
/// The source run may overlap `pos`.
pub fn match_length(data: &[u8], candidate: usize, pos: usize) -> usize {
    data[candidate..]
        .iter()
        .zip(&data[pos..])
        .take(MAX_LENGTH)
        .take_while(|(a, b)| a == b)
        .count()
}

impl MatchIndex {
    /// Find the longest match for `pos` within `MAX_DISTANCE`
    ///
    /// Returns `MatchResult::no_match()` when `pos` heads its chain.
    pub fn best_match(&self, data: &[u8], pos: usize) -> MatchResult {
        let mut best = MatchResult::no_match();
        let mut walked = 0usize;

        for candidate in self.chain(pos) {
            walked += 1;
            let distance = pos - candidate;
            if distance > MAX_DISTANCE {
                break;
            }

            let length = match_length(data, candidate, pos);
            if length > best.length {
                best = MatchResult::new(distance, length);
                if length == MAX_LENGTH {
                    break;
                }
            }
        }

        if walked > 0 {
            log::trace!(
                "pos {}: walked {} candidates, best length {} at distance {}",
                pos,
                walked,
                best.length,
                best.distance
            );
        }
        best
    }
}
