//! Depth-increasing conditional-independence pruning of an initially
//! complete skeleton.
//!
//! At depth `d`, every still-adjacent ordered pair `(x, y)` is tested
//! against each size-`d` subset of `neighbors(x) \ {y}` until one
//! renders the pair independent; the first such subset is recorded as a
//! separating set and the edge is marked for removal. Stable mode
//! defers all removals to the end of the depth pass, which makes the
//! result independent of the order pairs are visited in.

mod combinations;

use std::collections::BTreeSet;

use meeker_core::{DiscoveryConfig, IndependenceOracle, MeekerError, MeekerResult};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::graph::{CausalGraph, NodePair};

use combinations::Combinations;

/// Result of a skeleton search.
#[derive(Debug, Clone)]
pub struct SkeletonOutcome {
    /// The pruned skeleton with its separating-set store.
    pub graph: CausalGraph,
    /// Deepest conditioning-set size that was actually scanned.
    pub depth_reached: usize,
    /// Total independence-test invocations.
    pub tests_performed: usize,
}

/// Outcome of scanning one ordered pair at a fixed depth.
struct PairScan {
    removal: Option<(NodePair, Vec<usize>)>,
    tests: usize,
}

/// The skeleton search over a fixed oracle and configuration.
pub struct SkeletonDiscovery<'a> {
    oracle: &'a dyn IndependenceOracle,
    config: DiscoveryConfig,
}

impl<'a> SkeletonDiscovery<'a> {
    pub fn new(oracle: &'a dyn IndependenceOracle, config: DiscoveryConfig) -> Self {
        Self { oracle, config }
    }

    /// Run the search with the default visit order: all ordered pairs of
    /// distinct ids, lexicographic.
    pub fn discover(&self) -> MeekerResult<SkeletonOutcome> {
        let order = default_pair_order(self.oracle.variable_count());
        self.discover_ordered(&order)
    }

    /// Run the search visiting pairs in the given order.
    ///
    /// In stable mode the result does not depend on this order; the
    /// parameter exists so that property holds under test rather than by
    /// assertion. In unstable mode the order is allowed to matter.
    pub fn discover_ordered(&self, pairs: &[(usize, usize)]) -> MeekerResult<SkeletonOutcome> {
        self.config.validate()?;
        let n = self.oracle.variable_count();
        if n < 2 {
            return Err(MeekerError::TooFewVariables { cols: n });
        }
        for &(x, y) in pairs {
            let node = x.max(y);
            if node >= n {
                return Err(MeekerError::NodeOutOfRange { node, nodes: n });
            }
        }

        let mut graph = CausalGraph::complete(n);
        let mut tests_performed = 0;
        let mut depth = 0;

        // Continue while some node still has more neighbors than the
        // current depth can condition on; depth is bounded by the
        // largest remaining degree, so the loop terminates.
        while graph.max_degree() > depth {
            let removed = if !self.config.stable {
                self.depth_pass_unstable(&mut graph, pairs, depth, &mut tests_performed)?
            } else if self.config.parallel {
                self.depth_pass_parallel(&mut graph, pairs, depth, &mut tests_performed)?
            } else {
                self.depth_pass_stable(&mut graph, pairs, depth, &mut tests_performed)?
            };
            info!(
                depth,
                removed,
                edges = graph.edge_count(),
                "depth pass complete"
            );
            depth += 1;
        }

        Ok(SkeletonOutcome {
            graph,
            depth_reached: depth.saturating_sub(1),
            tests_performed,
        })
    }

    /// Scan one pair against a frozen graph. Returns the first
    /// separating subset found, if any, without mutating anything.
    fn scan_pair(
        &self,
        graph: &CausalGraph,
        x: usize,
        y: usize,
        depth: usize,
    ) -> MeekerResult<PairScan> {
        let mut scan = PairScan {
            removal: None,
            tests: 0,
        };
        if !graph.is_adjacent(x, y) {
            return Ok(scan);
        }
        let mut candidates = graph.neighbors(x);
        candidates.retain(|&v| v != y);
        if candidates.len() < depth {
            return Ok(scan);
        }

        for set in Combinations::new(&candidates, depth) {
            let p = self.oracle.p_value(x, y, &set);
            scan.tests += 1;
            validate_p(x, y, &set, p)?;
            if p > self.config.alpha {
                scan.removal = Some((NodePair::new(x, y), set));
                break;
            }
        }
        Ok(scan)
    }

    /// Stable pass: the graph's marks are frozen for the whole depth;
    /// removals collect into a deduplicated pending set and apply at the
    /// end.
    fn depth_pass_stable(
        &self,
        graph: &mut CausalGraph,
        pairs: &[(usize, usize)],
        depth: usize,
        tests: &mut usize,
    ) -> MeekerResult<usize> {
        let mut pending = BTreeSet::new();
        for &(x, y) in pairs {
            let scan = self.scan_pair(graph, x, y, depth)?;
            *tests += scan.tests;
            if let Some((pair, set)) = scan.removal {
                debug!(x, y, sepset = ?set, "independent, removal deferred");
                graph.record_sepset(x, y, set);
                pending.insert(pair);
            }
        }

        let removed = pending.len();
        for pair in pending {
            graph.remove_edge(pair.lo(), pair.hi());
        }
        Ok(removed)
    }

    /// Stable pass with pair scans fanned out across threads. The graph
    /// stays frozen during the scans, so this is observably identical to
    /// the sequential stable pass; sepsets and removals apply afterwards
    /// in visit order.
    fn depth_pass_parallel(
        &self,
        graph: &mut CausalGraph,
        pairs: &[(usize, usize)],
        depth: usize,
        tests: &mut usize,
    ) -> MeekerResult<usize> {
        let frozen: &CausalGraph = graph;
        let scans: Vec<MeekerResult<(usize, usize, PairScan)>> = pairs
            .par_iter()
            .map(|&(x, y)| self.scan_pair(frozen, x, y, depth).map(|s| (x, y, s)))
            .collect();

        let mut pending = BTreeSet::new();
        for result in scans {
            let (x, y, scan) = result?;
            *tests += scan.tests;
            if let Some((pair, set)) = scan.removal {
                debug!(x, y, sepset = ?set, "independent, removal deferred");
                graph.record_sepset(x, y, set);
                pending.insert(pair);
            }
        }

        let removed = pending.len();
        for pair in pending {
            graph.remove_edge(pair.lo(), pair.hi());
        }
        Ok(removed)
    }

    /// Unstable pass: each removal applies immediately, so later pairs in
    /// the same depth see the shrunk neighbor sets. Order-dependent.
    fn depth_pass_unstable(
        &self,
        graph: &mut CausalGraph,
        pairs: &[(usize, usize)],
        depth: usize,
        tests: &mut usize,
    ) -> MeekerResult<usize> {
        let mut removed = 0;
        for &(x, y) in pairs {
            if !graph.is_adjacent(x, y) {
                continue;
            }
            let mut candidates = graph.neighbors(x);
            candidates.retain(|&v| v != y);
            if candidates.len() < depth {
                continue;
            }

            for set in Combinations::new(&candidates, depth) {
                let p = self.oracle.p_value(x, y, &set);
                *tests += 1;
                validate_p(x, y, &set, p)?;
                if p > self.config.alpha {
                    debug!(x, y, sepset = ?set, "independent, removed immediately");
                    graph.record_sepset(x, y, set);
                    graph.remove_edge(x, y);
                    removed += 1;
                    break;
                }
            }
        }
        Ok(removed)
    }
}

/// Default visit order: all ordered pairs of distinct ids, lexicographic.
pub fn default_pair_order(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)));
    for x in 0..n {
        for y in 0..n {
            if x != y {
                pairs.push((x, y));
            }
        }
    }
    pairs
}

/// An oracle p-value outside [0, 1] (NaN included) is a fatal oracle
/// failure, never an independence decision.
fn validate_p(x: usize, y: usize, set: &[usize], p: f64) -> MeekerResult<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(MeekerError::OracleFailure {
            x,
            y,
            sepset: set.to_vec(),
            p,
        });
    }
    Ok(())
}
