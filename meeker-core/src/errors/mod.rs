//! Error types shared across the workspace.

/// Convenience alias used by every fallible operation in the workspace.
pub type MeekerResult<T> = Result<T, MeekerError>;

/// Discovery-engine errors.
#[derive(Debug, thiserror::Error)]
pub enum MeekerError {
    #[error("significance level must lie strictly inside (0, 1), got {alpha}")]
    InvalidAlpha { alpha: f64 },

    #[error("invalid dataset: {reason}")]
    InvalidDataset { reason: String },

    #[error("discovery needs at least 2 variables, dataset has {cols}")]
    TooFewVariables { cols: usize },

    #[error("independence oracle returned p = {p} for ({x}, {y}) given {sepset:?}")]
    OracleFailure {
        x: usize,
        y: usize,
        sepset: Vec<usize>,
        p: f64,
    },

    #[error("directed part of the skeleton contains a cycle: {cycle:?}")]
    CyclicSkeleton { cycle: Vec<usize> },

    #[error("node {node} out of range for a graph over {nodes} nodes")]
    NodeOutOfRange { node: usize, nodes: usize },
}
