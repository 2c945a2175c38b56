//! Deterministic lookup oracle: p-values come from an explicit table
//! instead of a statistic. Drives the scenario tests and any run where
//! the independence facts are known up front.

use std::collections::HashMap;

use meeker_core::IndependenceOracle;

use crate::graph::NodePair;

/// Lookup oracle keyed by the unordered pair and the sorted
/// conditioning set; unknown queries fall back to a default p-value.
pub struct TableOracle {
    vars: usize,
    default_p: f64,
    entries: HashMap<(NodePair, Vec<usize>), f64>,
}

impl TableOracle {
    /// Oracle where every unlisted query returns `default_p`. A default
    /// of 0.0 means "dependent unless stated otherwise".
    pub fn new(vars: usize, default_p: f64) -> Self {
        Self {
            vars,
            default_p,
            entries: HashMap::new(),
        }
    }

    /// Record the p-value for `(x, y)` given `s` (both directions).
    pub fn set(&mut self, x: usize, y: usize, s: &[usize], p: f64) {
        let mut set = s.to_vec();
        set.sort_unstable();
        self.entries.insert((NodePair::new(x, y), set), p);
    }

    /// Builder-style `set`.
    pub fn with(mut self, x: usize, y: usize, s: &[usize], p: f64) -> Self {
        self.set(x, y, s, p);
        self
    }
}

impl IndependenceOracle for TableOracle {
    fn p_value(&self, x: usize, y: usize, s: &[usize]) -> f64 {
        let mut set = s.to_vec();
        set.sort_unstable();
        self.entries
            .get(&(NodePair::new(x, y), set))
            .copied()
            .unwrap_or(self.default_p)
    }

    fn variable_count(&self) -> usize {
        self.vars
    }
}
