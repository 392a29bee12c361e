//! Distributed trapezoidal-rule quadrature
//!
//! Approximates a definite integral with the composite trapezoidal
//! rule, the trapezoids split across a fixed group of MPI ranks. Each
//! rank integrates a contiguous block of the domain and the partials
//! are summed onto rank 0 with a collective reduction.
//!
//! The numeric core (domain decomposition and the local trapezoid sum)
//! is plain Rust and unit-tested without MPI; only the collective
//! wrappers and the `trap` binary sit behind the `mpi` feature.
//!
//! Run the binary with
//!
//! cargo mpirun --np 4 --features mpi --bin trap -- 0.0 1.0 1024
#![warn(missing_docs)]
pub mod mpi;
pub mod params;
pub mod partition;
pub mod trapezoid;
pub mod types;

pub use params::{IntegrationParams, ParamsError};
pub use partition::{local_range, LocalRange};
pub use trapezoid::{exact_cubic, square, trapezoid, trapezoid_over};
pub use types::FloatNum;
