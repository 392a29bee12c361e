//! Parallel trapezoidal rule, one rank per process
//!
//! Rank 0 reads `<a> <b> <n>` from the command line (defaults
//! a = 0, b = 1, n = 1024), validates once, and broadcasts. Every
//! rank integrates its block of the domain; the partials are reduced
//! onto rank 0, which prints the estimate next to the closed-form
//! value of the fixed integrand x^2.
//!
//! Run with
//!
//! cargo mpirun --np 4 --features mpi --bin trap -- 0.0 1.0 1024
use mpi::topology::Communicator;
use partrap::mpi::{broadcast_scalar, reduce_sum_root, ROOT_RANK};
use partrap::params::IntegrationParams;
use partrap::partition::local_range;
use partrap::trapezoid::{exact_cubic, square, trapezoid_over};

fn main() {
    let universe = mpi::initialize().expect("mpi initialization failed");
    let world = universe.world();
    let rank = world.rank();
    let size = world.size();

    let mut a = 0.0f64;
    let mut b = 0.0f64;
    let mut n = 0u64;

    // Input is validated once, here, before anything is shared. A bad
    // n takes the whole group down, not just the coordinator.
    if rank == ROOT_RANK {
        let args: Vec<String> = std::env::args().skip(1).collect();
        match IntegrationParams::from_args(&args) {
            Ok(params) => {
                a = params.a;
                b = params.b;
                n = params.n;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                world.abort(1);
            }
        }
    }

    broadcast_scalar(&universe, &mut a);
    broadcast_scalar(&universe, &mut b);
    broadcast_scalar(&universe, &mut n);

    let range = local_range(a, b, n, size as u64, rank as u64);
    let integral = trapezoid_over(square, &range);

    println!(
        "Process {}: {} trapezoids from {} to {}",
        rank, range.local_n, range.local_a, range.local_b
    );

    let mut total = 0.0f64;
    reduce_sum_root(&universe, &integral, &mut total);

    if rank == ROOT_RANK {
        println!("With n = {} trapezoids, our estimate of the integral", n);
        println!("from {} to {} = {}", a, b, total);
        println!("True value: {}", exact_cubic(a, b));
    }
}
