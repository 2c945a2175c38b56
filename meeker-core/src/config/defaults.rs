//! Default values backing `DiscoveryConfig::default()`.

/// Default significance level for independence tests.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Stable (order-independent) skeleton discovery by default.
pub const DEFAULT_STABLE: bool = true;

/// Sequential pair evaluation by default.
pub const DEFAULT_PARALLEL: bool = false;
