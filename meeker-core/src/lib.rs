//! # meeker-core
//!
//! Foundation crate for the Meeker causal discovery engine.
//! Defines the dataset container, configuration, errors, and the
//! independence-oracle trait seam. The discovery crate depends on this.

pub mod config;
pub mod dataset;
pub mod errors;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{DiscoveryConfig, TestKind};
pub use dataset::Dataset;
pub use errors::{MeekerError, MeekerResult};
pub use traits::IndependenceOracle;
