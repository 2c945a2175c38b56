//! Trait seams between the engine and its collaborators.

mod independence;

pub use independence::IndependenceOracle;
