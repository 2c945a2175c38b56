//! Separating-set store keyed by canonical unordered node pairs.

use std::collections::BTreeMap;

use serde::Serialize;

/// An unordered node pair in canonical (ascending) order.
///
/// Using an explicit canonical type, rather than deduplicating ordered
/// tuples through a hash set, keeps pair identity independent of the
/// direction a pair was visited in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodePair {
    lo: usize,
    hi: usize,
}

impl NodePair {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn lo(self) -> usize {
        self.lo
    }

    pub fn hi(self) -> usize {
        self.hi
    }
}

/// One row of the exported separating-set table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SepsetEntry {
    pub x: usize,
    pub y: usize,
    pub sets: Vec<Vec<usize>>,
}

/// All separating sets recorded during skeleton discovery.
///
/// A pair may accumulate more than one set: both visit directions of a
/// pair can find separators within one depth pass. Sets are kept sorted
/// and deduplicated, so the store's contents do not depend on the order
/// pairs were visited in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SepsetStore {
    entries: BTreeMap<NodePair, Vec<Vec<usize>>>,
}

impl SepsetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a separating set for the pair. The set is stored ascending;
    /// recording the same set twice collapses to one entry.
    pub fn record(&mut self, pair: NodePair, mut set: Vec<usize>) {
        set.sort_unstable();
        let sets = self.entries.entry(pair).or_default();
        if let Err(pos) = sets.binary_search(&set) {
            sets.insert(pos, set);
        }
    }

    /// All sets recorded for the pair, empty if none.
    pub fn sets(&self, pair: NodePair) -> &[Vec<usize>] {
        self.entries.get(&pair).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Serializable table, one entry per separated pair, ascending.
    pub fn table(&self) -> Vec<SepsetEntry> {
        self.entries
            .iter()
            .map(|(pair, sets)| SepsetEntry {
                x: pair.lo,
                y: pair.hi,
                sets: sets.clone(),
            })
            .collect()
    }
}
