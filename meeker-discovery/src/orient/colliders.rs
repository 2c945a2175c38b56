//! V-structure orientation from recorded separating sets.

use meeker_core::MeekerResult;
use tracing::debug;

use crate::graph::{shapes, CausalGraph};

use super::require_acyclic;

/// Orient every unshielded collider `i → j ← k` in an owned copy of the
/// skeleton.
///
/// The middle node of an unshielded triple is a collider iff it appears
/// in no recorded separating set of the endpoints. Only edges that are
/// still undirected are touched, so a triple processed later never
/// overwrites an arrow placed by an earlier one.
pub fn orient_colliders(graph: &CausalGraph) -> MeekerResult<CausalGraph> {
    require_acyclic(graph)?;
    let mut oriented = graph.clone();

    for (i, j, k) in shapes::unshielded_triples(graph) {
        if !shapes::is_collider(graph, i, j, k) {
            continue;
        }
        if oriented.is_undirected(i, j) {
            oriented.orient(i, j);
            debug!(i, j, "collider arrowhead");
        }
        if oriented.is_undirected(k, j) {
            oriented.orient(k, j);
            debug!(k, j, "collider arrowhead");
        }
    }

    Ok(oriented)
}
