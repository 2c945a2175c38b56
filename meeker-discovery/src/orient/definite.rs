//! Conservative Meek variant driven by definite collider facts.

use std::collections::BTreeSet;

use meeker_core::MeekerResult;
use tracing::debug;

use crate::graph::{shapes, CausalGraph};

use super::require_acyclic;

/// Externally certified collider facts about unshielded triples, e.g.
/// from background knowledge. Consumed as supplied, never computed or
/// validated here. A fact about `(i, j, k)` also covers the mirrored
/// ordering `(k, j, i)`.
#[derive(Debug, Clone, Default)]
pub struct DefiniteTriples {
    /// Triples certified as unshielded colliders `i → j ← k`.
    pub colliders: BTreeSet<(usize, usize, usize)>,
    /// Triples certified as definite non-colliders.
    pub non_colliders: BTreeSet<(usize, usize, usize)>,
}

impl DefiniteTriples {
    pub fn is_collider(&self, i: usize, j: usize, k: usize) -> bool {
        self.colliders.contains(&(i, j, k)) || self.colliders.contains(&(k, j, i))
    }

    pub fn is_non_collider(&self, i: usize, j: usize, k: usize) -> bool {
        self.non_colliders.contains(&(i, j, k)) || self.non_colliders.contains(&(k, j, i))
    }
}

/// Apply the definite Meek rules to a fixpoint on an owned copy of the
/// input.
///
/// Sound when only the supplied triple classifications are trustworthy:
/// - R1 runs over the definite non-colliders instead of all unshielded
///   triples, and in both directions, since a non-collider fact about an
///   unordered triple privileges neither endpoint;
/// - R2 is the standard rule over triangles;
/// - the kite fires only when the shoulder triple through `l` is a
///   definite collider and the one through `i` a definite non-collider,
///   so no orientation rests on a triple of unresolved status.
pub fn definite_meek(graph: &CausalGraph, facts: &DefiniteTriples) -> MeekerResult<CausalGraph> {
    require_acyclic(graph)?;
    let mut oriented = graph.clone();

    let triangles = shapes::triangles(&oriented);
    let kites = shapes::kites(&oriented);

    let mut changed = true;
    while changed {
        changed = false;

        for &(i, j, k) in &facts.non_colliders {
            if oriented.is_fully_directed(i, j) && oriented.is_undirected(j, k) {
                oriented.orient(j, k);
                debug!(j, k, "definite R1");
                changed = true;
            } else if oriented.is_fully_directed(k, j) && oriented.is_undirected(j, i) {
                oriented.orient(j, i);
                debug!(j, i, "definite R1 mirrored");
                changed = true;
            }
        }

        for &(i, j, k) in &triangles {
            if oriented.is_fully_directed(i, j)
                && oriented.is_fully_directed(j, k)
                && oriented.is_undirected(i, k)
            {
                oriented.orient(i, k);
                debug!(i, k, "definite R2");
                changed = true;
            }
        }

        for &(i, j, k, l) in &kites {
            if facts.is_collider(j, l, k)
                && facts.is_non_collider(j, i, k)
                && oriented.is_undirected(i, l)
            {
                oriented.orient(i, l);
                debug!(i, l, "definite kite");
                changed = true;
            }
        }
    }

    Ok(oriented)
}
