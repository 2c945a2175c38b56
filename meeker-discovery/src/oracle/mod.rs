//! Conditional-independence oracles: the concrete tests behind the
//! `IndependenceOracle` seam, plus a lookup oracle for deterministic
//! runs.

pub mod discrete;
pub mod fisher_z;
pub mod special;
pub mod table;

use meeker_core::{Dataset, IndependenceOracle, MeekerResult, TestKind};

pub use discrete::{ChiSquared, GSquared};
pub use fisher_z::FisherZ;
pub use table::TableOracle;

/// Build the oracle for a test kind over a dataset. Precomputation
/// (correlation matrix, integer recoding) happens here, once per run.
pub fn build_oracle(kind: TestKind, data: &Dataset) -> MeekerResult<Box<dyn IndependenceOracle>> {
    Ok(match kind {
        TestKind::FisherZ => Box::new(FisherZ::new(data)),
        TestKind::ChiSq => Box::new(ChiSquared::new(data)),
        TestKind::GSq => Box::new(GSquared::new(data)),
    })
}
