//! Configuration for a discovery run.

mod defaults;
mod discovery_config;

pub use discovery_config::{DiscoveryConfig, TestKind};
