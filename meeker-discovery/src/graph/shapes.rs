//! Pure, read-only shape derivation from the current marks: unshielded
//! triples, triangles, and kite quadrilaterals, plus the collider test
//! against recorded separating sets.
//!
//! Every ordering a rule can consume is emitted: an unordered shape
//! yields one tuple per assignment of its nodes to rule roles.
//! Enumeration order is ascending in the loop nest and reproducible.

use super::causal_graph::CausalGraph;

/// All ordered unshielded triples `(i, j, k)`: `i–j` and `j–k` adjacent,
/// `i` and `k` not adjacent. Both `(i, j, k)` and `(k, j, i)` appear.
pub fn unshielded_triples(graph: &CausalGraph) -> Vec<(usize, usize, usize)> {
    let n = graph.node_count();
    let mut triples = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if j == i || !graph.is_adjacent(i, j) {
                continue;
            }
            for k in 0..n {
                if k == i || k == j {
                    continue;
                }
                if graph.is_adjacent(j, k) && !graph.is_adjacent(i, k) {
                    triples.push((i, j, k));
                }
            }
        }
    }
    triples
}

/// All ordered triangles `(i, j, k)`: every pair adjacent. Each
/// unordered triangle yields all six role assignments.
pub fn triangles(graph: &CausalGraph) -> Vec<(usize, usize, usize)> {
    let n = graph.node_count();
    let mut result = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if j == i || !graph.is_adjacent(i, j) {
                continue;
            }
            for k in 0..n {
                if k == i || k == j {
                    continue;
                }
                if graph.is_adjacent(j, k) && graph.is_adjacent(i, k) {
                    result.push((i, j, k));
                }
            }
        }
    }
    result
}

/// All ordered kites `(i, j, k, l)`: `i–j` and `i–k` undirected, `j` and
/// `k` non-adjacent, `j→l` and `k→l` fully directed, `i–l` undirected.
pub fn kites(graph: &CausalGraph) -> Vec<(usize, usize, usize, usize)> {
    let n = graph.node_count();
    let mut result = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if j == i || !graph.is_undirected(i, j) {
                continue;
            }
            for k in 0..n {
                if k == i || k == j {
                    continue;
                }
                if !graph.is_undirected(i, k) || graph.is_adjacent(j, k) {
                    continue;
                }
                for l in 0..n {
                    if l == i || l == j || l == k {
                        continue;
                    }
                    if graph.is_fully_directed(j, l)
                        && graph.is_fully_directed(k, l)
                        && graph.is_undirected(i, l)
                    {
                        result.push((i, j, k, l));
                    }
                }
            }
        }
    }
    result
}

/// Collider status of an unshielded triple `i – j – k`: `j` is a
/// collider iff it appears in no recorded separating set of `{i, k}`.
pub fn is_collider(graph: &CausalGraph, i: usize, j: usize, k: usize) -> bool {
    !graph.sepsets(i, k).iter().any(|set| set.contains(&j))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Path 0 – 1 – 2.
    fn path_graph() -> CausalGraph {
        let mut g = CausalGraph::complete(3);
        g.remove_edge(0, 2);
        g
    }

    #[test]
    fn path_yields_both_triple_orderings() {
        let triples = unshielded_triples(&path_graph());
        assert_eq!(triples, vec![(0, 1, 2), (2, 1, 0)]);
    }

    #[test]
    fn complete_three_is_all_triangles_no_triples() {
        let g = CausalGraph::complete(3);
        assert!(unshielded_triples(&g).is_empty());
        assert_eq!(triangles(&g).len(), 6);
    }

    #[test]
    fn kite_shape_is_found() {
        // 0–1, 0–2 undirected, 1 and 2 non-adjacent, 1→3, 2→3, 0–3 undirected.
        let mut g = CausalGraph::complete(4);
        g.remove_edge(1, 2);
        g.orient(1, 3);
        g.orient(2, 3);
        let kites = kites(&g);
        assert!(kites.contains(&(0, 1, 2, 3)));
        assert!(kites.contains(&(0, 2, 1, 3)));
        assert_eq!(kites.len(), 2);
    }

    #[test]
    fn collider_status_follows_sepsets() {
        let mut g = path_graph();
        assert!(is_collider(&g, 0, 1, 2), "no sepset recorded yet");
        g.record_sepset(0, 2, vec![1]);
        assert!(!is_collider(&g, 0, 1, 2));
    }
}
