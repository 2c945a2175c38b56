//! Standard Meek rules over a collider-marked skeleton.

use meeker_core::MeekerResult;
use tracing::debug;

use crate::graph::{shapes, CausalGraph};

use super::require_acyclic;

/// Apply the standard Meek rules to a fixpoint on an owned copy of the
/// input.
///
/// All three shape lists are derived once from the marks at entry, not
/// recomputed inside the loop; every rule re-checks the current marks
/// when it fires. A kite completed by arrows the fixpoint itself adds is
/// therefore never acted on:
/// - R1 (no new collider): unshielded `(i, j, k)` with `i→j` directed
///   and `j–k` undirected orients `j→k`;
/// - R2 (no cycle): triangle `(i, j, k)` with `i→j`, `j→k` directed and
///   `i–k` undirected orients `i→k`;
/// - R3/R4 (kite): `(i, j, k, l)` with `i–j`, `i–k`, `i–l` undirected
///   and `j→l`, `k→l` directed orients `i→l`.
pub fn meek(graph: &CausalGraph) -> MeekerResult<CausalGraph> {
    require_acyclic(graph)?;
    let mut oriented = graph.clone();

    let triples = shapes::unshielded_triples(&oriented);
    let triangles = shapes::triangles(&oriented);
    let kites = shapes::kites(&oriented);

    let mut changed = true;
    while changed {
        changed = false;

        for &(i, j, k) in &triples {
            if oriented.is_fully_directed(i, j) && oriented.is_undirected(j, k) {
                oriented.orient(j, k);
                debug!(j, k, "R1");
                changed = true;
            }
        }

        for &(i, j, k) in &triangles {
            if oriented.is_fully_directed(i, j)
                && oriented.is_fully_directed(j, k)
                && oriented.is_undirected(i, k)
            {
                oriented.orient(i, k);
                debug!(i, k, "R2");
                changed = true;
            }
        }

        for &(i, j, k, l) in &kites {
            if oriented.is_undirected(i, j)
                && oriented.is_undirected(i, k)
                && oriented.is_fully_directed(j, l)
                && oriented.is_fully_directed(k, l)
                && oriented.is_undirected(i, l)
            {
                oriented.orient(i, l);
                debug!(i, l, "kite");
                changed = true;
            }
        }
    }

    Ok(oriented)
}
