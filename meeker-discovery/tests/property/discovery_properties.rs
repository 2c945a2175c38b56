//! Property tests: order independence of stable discovery, monotone
//! shrinkage, and monotonicity of the orientation engine.

use proptest::prelude::*;

use meeker_core::DiscoveryConfig;
use meeker_discovery::graph::CausalGraph;
use meeker_discovery::oracle::TableOracle;
use meeker_discovery::orient::meek;
use meeker_discovery::skeleton::{default_pair_order, SkeletonDiscovery};

const VARS: usize = 5;

/// Oracle where the listed pairs test independent marginally or given
/// one conditioning node; everything else tests dependent.
fn random_oracle(
    marginal: &[(usize, usize)],
    conditional: &[(usize, usize, usize)],
) -> TableOracle {
    let mut oracle = TableOracle::new(VARS, 0.0);
    for &(a, b) in marginal {
        if a != b {
            oracle.set(a, b, &[], 0.9);
        }
    }
    for &(x, y, z) in conditional {
        if x != y && z != x && z != y {
            oracle.set(x, y, &[z], 0.9);
        }
    }
    oracle
}

/// Graph over VARS nodes from per-pair flags; arrows ascend by id, so
/// the directed part is acyclic by construction.
fn random_marked_graph(flags: &[(bool, bool)]) -> CausalGraph {
    let mut g = CausalGraph::complete(VARS);
    let mut idx = 0;
    for i in 0..VARS {
        for j in (i + 1)..VARS {
            let (present, directed) = flags[idx];
            idx += 1;
            if !present {
                g.remove_edge(i, j);
            } else if directed {
                g.orient(i, j);
            }
        }
    }
    g
}

fn independence_strategy() -> impl Strategy<
    Value = (
        Vec<(usize, usize)>,
        Vec<(usize, usize, usize)>,
    ),
> {
    (
        prop::collection::vec((0..VARS, 0..VARS), 0..6),
        prop::collection::vec((0..VARS, 0..VARS, 0..VARS), 0..6),
    )
}

// =============================================================================
// Stable discovery does not depend on the pair visit order
// =============================================================================
proptest! {
    #[test]
    fn stable_discovery_is_order_independent(
        (marginal, conditional) in independence_strategy(),
        order in Just(default_pair_order(VARS)).prop_shuffle(),
    ) {
        let oracle = random_oracle(&marginal, &conditional);
        let discovery = SkeletonDiscovery::new(&oracle, DiscoveryConfig::default());

        let default_order = discovery.discover().unwrap();
        let shuffled = discovery.discover_ordered(&order).unwrap();

        prop_assert_eq!(default_order.graph, shuffled.graph);
        prop_assert_eq!(default_order.tests_performed, shuffled.tests_performed);
    }
}

// =============================================================================
// Parallel stable mode is observably identical to sequential
// =============================================================================
proptest! {
    #[test]
    fn parallel_stable_matches_sequential(
        (marginal, conditional) in independence_strategy(),
    ) {
        let oracle = random_oracle(&marginal, &conditional);

        let sequential = SkeletonDiscovery::new(&oracle, DiscoveryConfig::default())
            .discover()
            .unwrap();
        let parallel_config = DiscoveryConfig { parallel: true, ..Default::default() };
        let parallel = SkeletonDiscovery::new(&oracle, parallel_config)
            .discover()
            .unwrap();

        prop_assert_eq!(sequential.graph, parallel.graph);
        prop_assert_eq!(sequential.tests_performed, parallel.tests_performed);
    }
}

// =============================================================================
// Shrinkage and sepset shape
// =============================================================================
proptest! {
    #[test]
    fn skeleton_shrinks_and_sepsets_are_well_formed(
        (marginal, conditional) in independence_strategy(),
    ) {
        let oracle = random_oracle(&marginal, &conditional);
        let outcome = SkeletonDiscovery::new(&oracle, DiscoveryConfig::default())
            .discover()
            .unwrap();
        let graph = &outcome.graph;

        prop_assert!(graph.edge_count() <= VARS * (VARS - 1) / 2);

        for entry in graph.sepset_table() {
            prop_assert!(!graph.is_adjacent(entry.x, entry.y), "separated pair still adjacent");
            for set in &entry.sets {
                prop_assert!(!set.contains(&entry.x));
                prop_assert!(!set.contains(&entry.y));
                prop_assert!(set.iter().all(|&v| v < VARS));
            }
        }
    }
}

// =============================================================================
// Orientation never drops an edge or reverses an arrow
// =============================================================================
proptest! {
    #[test]
    fn meek_is_monotone(
        flags in prop::collection::vec((any::<bool>(), any::<bool>()), VARS * (VARS - 1) / 2),
    ) {
        let g = random_marked_graph(&flags);
        let once = meek(&g).unwrap();

        for i in 0..VARS {
            for j in 0..VARS {
                if i == j {
                    continue;
                }
                prop_assert_eq!(g.is_adjacent(i, j), once.is_adjacent(i, j));
                if g.is_fully_directed(i, j) {
                    prop_assert!(once.is_fully_directed(i, j));
                }
            }
        }
    }
}
