//! Feature: collective glue for the distributed run
//!
//! Thin wrappers over the two collectives the run needs. The manual
//! send/receive gather that these replace is a real alternative, but
//! the built-in reduction keeps the commutative-sum semantics without
//! point-to-point bookkeeping.
#![cfg(feature = "mpi")]
use mpi::collective::{Root, SystemOperation};
use mpi::environment::Universe;
use mpi::topology::Communicator;
use mpi::traits::Equivalence;
use num_traits::Zero;

/// The coordinator: validates input, broadcasts parameters, reports
/// the total
pub const ROOT_RANK: i32 = 0;

/// Broadcast scalar value from the root to all processes. Every rank
/// blocks until delivery, so partition arithmetic downstream never
/// reads a stale value.
pub fn broadcast_scalar<T: Zero + Equivalence>(universe: &Universe, data: &mut T) {
    let world = universe.world();
    let root_process = world.process_at_rank(ROOT_RANK);
    root_process.broadcast_into(data);
}

/// Sum a scalar over all processes into `total` on the root. The
/// summation order is up to the MPI implementation; only the
/// mathematical sum is specified, not its bits. `total` is left
/// untouched on non-root ranks.
pub fn reduce_sum_root<T: Zero + Equivalence>(universe: &Universe, data: &T, total: &mut T) {
    let world = universe.world();
    let root_process = world.process_at_rank(ROOT_RANK);
    if world.rank() == ROOT_RANK {
        root_process.reduce_into_root(data, total, SystemOperation::sum());
    } else {
        root_process.reduce_into(data, SystemOperation::sum());
    }
}
