use serde::{Deserialize, Serialize};

use crate::errors::{MeekerError, MeekerResult};

use super::defaults;

/// Which conditional-independence test the oracle runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestKind {
    /// Fisher's Z test on partial correlations (continuous data).
    FisherZ,
    /// Chi-squared test on stratified contingency tables (discrete data).
    ChiSq,
    /// G-squared (likelihood-ratio) test on stratified contingency tables.
    GSq,
}

/// Discovery run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Significance level, strictly inside (0, 1). An independence test
    /// with p > alpha removes the edge under scrutiny.
    pub alpha: f64,
    /// Independence test kind.
    pub test: TestKind,
    /// Defer edge removals to the end of each depth pass, making the
    /// result independent of pair visit order.
    pub stable: bool,
    /// Evaluate pairs within a depth pass concurrently. Only meaningful
    /// in stable mode; ignored otherwise.
    pub parallel: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            alpha: defaults::DEFAULT_ALPHA,
            test: TestKind::FisherZ,
            stable: defaults::DEFAULT_STABLE,
            parallel: defaults::DEFAULT_PARALLEL,
        }
    }
}

impl DiscoveryConfig {
    /// Reject out-of-contract settings before any search begins.
    pub fn validate(&self) -> MeekerResult<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(MeekerError::InvalidAlpha { alpha: self.alpha });
        }
        Ok(())
    }
}
