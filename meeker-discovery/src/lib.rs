//! # meeker-discovery
//!
//! Constraint-based causal structure discovery.
//!
//! The pipeline prunes a complete skeleton by conditional-independence
//! search, marks colliders from the recorded separating sets, and
//! propagates orientations to a fixpoint with the Meek rules, producing
//! a partially directed graph (a CPDAG) that represents the Markov
//! equivalence class of the data-generating DAG.

pub mod engine;
pub mod graph;
pub mod oracle;
pub mod orient;
pub mod skeleton;

pub use engine::{DiscoveryEngine, DiscoveryOutcome};
pub use graph::causal_graph::CausalGraph;
pub use skeleton::SkeletonDiscovery;
