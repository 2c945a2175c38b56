//! Cycle detection over the fully directed part of a graph using
//! Tarjan's SCC. Orientation refuses to run on a skeleton whose arrows
//! already form a cycle.

use petgraph::algo::tarjan_scc;
use petgraph::graph::DiGraph;

use super::causal_graph::CausalGraph;

/// Cycles among the fully directed edges, as node-id lists.
/// Returns SCCs with more than one node; empty means acyclic.
/// Undirected edges never contribute to a cycle here.
pub fn find_directed_cycles(graph: &CausalGraph) -> Vec<Vec<usize>> {
    let mut digraph = DiGraph::<usize, ()>::new();
    let indices: Vec<_> = (0..graph.node_count())
        .map(|id| digraph.add_node(id))
        .collect();
    for (i, j) in graph.directed_edges() {
        digraph.add_edge(indices[i], indices[j], ());
    }

    tarjan_scc(&digraph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| scc.into_iter().map(|idx| digraph[idx]).collect())
        .collect()
}
