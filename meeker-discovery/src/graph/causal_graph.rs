//! Mutable edge-mark matrix over integer node ids.
//!
//! Each ordered pair `(i, j)` carries an independent "present" flag:
//! no edge when both flags of a pair are clear, an undirected edge when
//! both are set, and a directed arrow `i → j` when `(i, j)` is set and
//! `(j, i)` is clear. Skeleton pruning clears both flags of a pair;
//! orientation turns a both-set pair into a one-set pair.

use super::sepsets::{NodePair, SepsetEntry, SepsetStore};

/// The graph under construction, owned by one pipeline phase at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct CausalGraph {
    nodes: usize,
    marks: Vec<bool>,
    sepsets: SepsetStore,
}

impl CausalGraph {
    /// Complete undirected skeleton: every distinct pair double-marked.
    pub fn complete(nodes: usize) -> Self {
        let mut marks = vec![true; nodes * nodes];
        for i in 0..nodes {
            marks[i * nodes + i] = false;
        }
        Self {
            nodes,
            marks,
            sepsets: SepsetStore::new(),
        }
    }

    /// Graph with no edges at all.
    pub fn empty(nodes: usize) -> Self {
        Self {
            nodes,
            marks: vec![false; nodes * nodes],
            sepsets: SepsetStore::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    fn mark(&self, i: usize, j: usize) -> bool {
        self.marks[i * self.nodes + j]
    }

    fn set_mark(&mut self, i: usize, j: usize, value: bool) {
        self.marks[i * self.nodes + j] = value;
    }

    /// Some edge (directed or undirected) connects `i` and `j`.
    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        i != j && (self.mark(i, j) || self.mark(j, i))
    }

    /// Undirected edge `i – j`: both flags present.
    pub fn is_undirected(&self, i: usize, j: usize) -> bool {
        i != j && self.mark(i, j) && self.mark(j, i)
    }

    /// Directed arrow `i → j`: forward flag present, reverse absent.
    pub fn is_fully_directed(&self, i: usize, j: usize) -> bool {
        i != j && self.mark(i, j) && !self.mark(j, i)
    }

    /// Nodes adjacent to `x` under the current marks, ascending, self excluded.
    pub fn neighbors(&self, x: usize) -> Vec<usize> {
        (0..self.nodes).filter(|&v| self.is_adjacent(x, v)).collect()
    }

    pub fn degree(&self, x: usize) -> usize {
        (0..self.nodes).filter(|&v| self.is_adjacent(x, v)).count()
    }

    /// Largest degree over all nodes; 0 for an edgeless or empty graph.
    pub fn max_degree(&self) -> usize {
        (0..self.nodes).map(|x| self.degree(x)).max().unwrap_or(0)
    }

    /// Number of unordered adjacent pairs.
    pub fn edge_count(&self) -> usize {
        let mut count = 0;
        for i in 0..self.nodes {
            for j in (i + 1)..self.nodes {
                if self.is_adjacent(i, j) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Clear both flags of the pair. Idempotent.
    pub fn remove_edge(&mut self, x: usize, y: usize) {
        self.set_mark(x, y, false);
        self.set_mark(y, x, false);
    }

    /// Direct the pair as `i → j`: set the forward flag, clear the reverse.
    ///
    /// The minimal orientation primitive. Under the double-flag encoding
    /// an undirected edge holds both flags, so the undirected → directed
    /// transition must drop the reverse mark; callers only invoke this on
    /// pairs that are still undirected, which is what keeps orientation
    /// from ever reversing an existing arrow.
    pub fn orient(&mut self, i: usize, j: usize) {
        self.set_mark(i, j, true);
        self.set_mark(j, i, false);
    }

    /// All fully directed arrows `(i, j)`.
    pub fn directed_edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for i in 0..self.nodes {
            for j in 0..self.nodes {
                if self.is_fully_directed(i, j) {
                    edges.push((i, j));
                }
            }
        }
        edges
    }

    /// All undirected edges as canonical pairs.
    pub fn undirected_edges(&self) -> Vec<NodePair> {
        let mut edges = Vec::new();
        for i in 0..self.nodes {
            for j in (i + 1)..self.nodes {
                if self.is_undirected(i, j) {
                    edges.push(NodePair::new(i, j));
                }
            }
        }
        edges
    }

    /// Record a separating set for the unordered pair `{x, y}`.
    pub fn record_sepset(&mut self, x: usize, y: usize, set: Vec<usize>) {
        self.sepsets.record(NodePair::new(x, y), set);
    }

    /// All separating sets recorded for `{x, y}`, empty if none.
    pub fn sepsets(&self, x: usize, y: usize) -> &[Vec<usize>] {
        self.sepsets.sets(NodePair::new(x, y))
    }

    /// Serializable separating-set table, ascending by pair.
    pub fn sepset_table(&self) -> Vec<SepsetEntry> {
        self.sepsets.table()
    }

    /// Export the marks as a square matrix: `-1` where the pair has no
    /// edge (and on the diagonal), otherwise `1` where this direction's
    /// flag is present and `0` where it is absent.
    pub fn to_matrix(&self) -> Vec<Vec<i8>> {
        let mut matrix = vec![vec![-1i8; self.nodes]; self.nodes];
        for i in 0..self.nodes {
            for j in 0..self.nodes {
                if self.is_adjacent(i, j) {
                    matrix[i][j] = i8::from(self.mark(i, j));
                }
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_graph_marks() {
        let g = CausalGraph::complete(4);
        assert_eq!(g.max_degree(), 3);
        assert_eq!(g.edge_count(), 6);
        assert!(g.is_undirected(0, 3));
        assert!(!g.is_adjacent(2, 2));
    }

    #[test]
    fn remove_then_neighbors_shrink() {
        let mut g = CausalGraph::complete(3);
        g.remove_edge(0, 2);
        assert_eq!(g.neighbors(0), vec![1]);
        assert_eq!(g.neighbors(2), vec![1]);
        assert!(!g.is_adjacent(0, 2));
    }

    #[test]
    fn orient_makes_fully_directed() {
        let mut g = CausalGraph::complete(2);
        g.orient(0, 1);
        assert!(g.is_fully_directed(0, 1));
        assert!(!g.is_fully_directed(1, 0));
        assert!(!g.is_undirected(0, 1));
        assert!(g.is_adjacent(0, 1));
    }

    #[test]
    fn matrix_export_encoding() {
        let mut g = CausalGraph::complete(3);
        g.remove_edge(1, 2);
        g.orient(0, 1);
        let m = g.to_matrix();
        assert_eq!(m[0][1], 1);
        assert_eq!(m[1][0], 0);
        assert_eq!(m[1][2], -1);
        assert_eq!(m[2][1], -1);
        assert_eq!(m[0][2], 1);
        assert_eq!(m[1][1], -1);
    }
}
