//! Match index over 2-byte prefixes
//!
//! Every position is linked to the previous position sharing its first two
//! bytes. The links are stored as backward distances in a single offset array,
//! which doubles as the chain: subtracting `offsets[i]` from `i` moves to the
//! next older candidate, and 0 ends the chain.

/// Number of distinct 2-byte prefixes
pub const PREFIX_TABLE_SIZE: usize = 256 * 256;

/// Key of the prefix starting with `first`, `second`
pub const fn prefix_key(first: u8, second: u8) -> usize {
    (first as usize) * 256 + (second as usize)
}

/// Offset array linking each position to its previous same-prefix position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchIndex {
    offsets: Vec<usize>,
}

impl MatchIndex {
    /// Build the index for `data` in one left-to-right pass
    ///
    /// The prefix table is local to this call. The last position has no
    /// 2-byte prefix and always keeps offset 0.
    pub fn build(data: &[u8]) -> Self {
        let mut offsets = vec![0usize; data.len()];
        let mut prefix_table: Vec<Option<usize>> = vec![None; PREFIX_TABLE_SIZE];

        for (pos, pair) in data.windows(2).enumerate() {
            let key = prefix_key(pair[0], pair[1]);
            if let Some(prev) = prefix_table[key] {
                offsets[pos] = pos - prev;
            }
            prefix_table[key] = Some(pos);
        }

        Self { offsets }
    }

    /// Backward distance from `pos` to the previous same-prefix position, 0 if none
    pub fn offset(&self, pos: usize) -> usize {
        self.offsets[pos]
    }

    /// The raw offset array
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of indexed positions
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the index covers no positions
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Walk the earlier positions sharing the prefix at `pos`, nearest first
    pub fn chain(&self, pos: usize) -> Chain<'_> {
        Chain {
            offsets: &self.offsets,
            pos,
        }
    }
}

/// Iterator over a prefix chain, strictly decreasing in position
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    offsets: &'a [usize],
    pos: usize,
}

impl Iterator for Chain<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self.offsets.get(self.pos).copied() {
            None | Some(0) => None,
            Some(offset) => {
                self.pos -= offset;
                Some(self.pos)
            }
        }
    }
}
