//! Orientation: collider marking plus Meek-rule fixpoint propagation.
//!
//! Every entry point clones the input graph and returns a new one; the
//! caller's skeleton is never mutated. Rules only ever turn undirected
//! edges into arrows, so each fixpoint loop is monotone over a finite
//! flag space and terminates.

mod colliders;
mod definite;
mod meek;

use meeker_core::{MeekerError, MeekerResult};

use crate::graph::acyclicity;
use crate::graph::CausalGraph;

pub use colliders::orient_colliders;
pub use definite::{definite_meek, DefiniteTriples};
pub use meek::meek;

/// Orientation assumes the directed part of its input is acyclic;
/// a cycle means the skeleton handed over is structurally inconsistent.
fn require_acyclic(graph: &CausalGraph) -> MeekerResult<()> {
    match acyclicity::find_directed_cycles(graph).into_iter().next() {
        Some(cycle) => Err(MeekerError::CyclicSkeleton { cycle }),
        None => Ok(()),
    }
}
