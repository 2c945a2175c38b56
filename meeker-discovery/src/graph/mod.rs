//! The graph under construction: edge-mark matrix, separating-set store,
//! shape enumeration, and the pre-orientation acyclicity check.

pub mod acyclicity;
pub mod causal_graph;
pub mod sepsets;
pub mod shapes;

pub use causal_graph::CausalGraph;
pub use sepsets::{NodePair, SepsetEntry, SepsetStore};
