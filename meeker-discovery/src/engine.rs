//! Pipeline facade: dataset → oracle → skeleton → colliders → Meek.

use meeker_core::{Dataset, DiscoveryConfig, IndependenceOracle, MeekerResult};
use tracing::info;

use crate::graph::CausalGraph;
use crate::oracle;
use crate::orient;
use crate::skeleton::SkeletonDiscovery;

/// Result of a full discovery run. The pruned skeleton and the oriented
/// pattern are separately owned, so callers can compare pre- and
/// post-orientation states without aliasing.
#[derive(Debug, Clone)]
pub struct DiscoveryOutcome {
    /// The skeleton as it left discovery: undirected, with sepsets.
    pub skeleton: CausalGraph,
    /// The collider-marked, Meek-propagated pattern (CPDAG).
    pub pattern: CausalGraph,
    /// Deepest conditioning-set size scanned.
    pub depth_reached: usize,
    /// Total independence-test invocations.
    pub tests_performed: usize,
}

/// The full discovery pipeline under one configuration.
pub struct DiscoveryEngine {
    config: DiscoveryConfig,
}

impl DiscoveryEngine {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Discover the pattern for a dataset, building the oracle the
    /// configuration asks for.
    pub fn discover(&self, data: &Dataset) -> MeekerResult<DiscoveryOutcome> {
        self.config.validate()?;
        let oracle = oracle::build_oracle(self.config.test, data)?;
        self.discover_with_oracle(oracle.as_ref())
    }

    /// Discover against a caller-supplied oracle (a lookup table, a
    /// cached oracle from a previous run, ...).
    pub fn discover_with_oracle(
        &self,
        oracle: &dyn IndependenceOracle,
    ) -> MeekerResult<DiscoveryOutcome> {
        let discovery = SkeletonDiscovery::new(oracle, self.config.clone());
        let skeleton = discovery.discover()?;
        info!(
            edges = skeleton.graph.edge_count(),
            depth = skeleton.depth_reached,
            tests = skeleton.tests_performed,
            "skeleton discovery finished"
        );

        let marked = orient::orient_colliders(&skeleton.graph)?;
        let pattern = orient::meek(&marked)?;
        info!(
            directed = pattern.directed_edges().len(),
            undirected = pattern.undirected_edges().len(),
            "orientation finished"
        );

        Ok(DiscoveryOutcome {
            skeleton: skeleton.graph,
            pattern,
            depth_reached: skeleton.depth_reached,
            tests_performed: skeleton.tests_performed,
        })
    }
}

impl Default for DiscoveryEngine {
    fn default() -> Self {
        Self::new(DiscoveryConfig::default())
    }
}
