//! Static decomposition of the integration domain
//!
//! The n trapezoids are split across the ranks as contiguous blocks.
//! When size does not divide n, the first `n % size` ranks take one
//! extra trapezoid each. This tie-break (lowest ranks get the
//! remainder) is a fixed policy: runs with the same (n, size) must
//! produce the same decomposition.
use crate::types::FloatNum;

/// One rank's share of the domain, a half-open block of `local_n`
/// trapezoids starting at `local_a`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalRange<A> {
    /// Left endpoint of this rank's block
    pub local_a: A,
    /// Right endpoint of this rank's block
    pub local_b: A,
    /// Number of trapezoids in this rank's block
    pub local_n: u64,
    /// Global trapezoid base length, identical on every rank
    pub h: A,
}

/// Compute `rank`'s share of the `n` trapezoids over `[a, b]`.
///
/// The blocks of all ranks are contiguous, non-overlapping, and cover
/// `[a, b]`: the block sizes sum to `n`, and rank r+1's `local_a`
/// meets rank r's `local_b` up to floating point rounding of the
/// offset arithmetic. With more ranks than trapezoids the surplus
/// ranks receive an empty block with `local_a == local_b`.
///
/// `n >= 1` must have been validated centrally before any rank calls
/// this; it is only debug-asserted here.
pub fn local_range<A: FloatNum>(a: A, b: A, n: u64, size: u64, rank: u64) -> LocalRange<A> {
    debug_assert!(n >= 1);
    debug_assert!(size >= 1);
    debug_assert!(rank < size);

    // h must come out bit-identical on every rank, so it is derived
    // from the broadcast values only.
    let h = (b - a) / A::from_u64(n).unwrap();

    let base = n / size;
    let residual = n % size;

    let (local_n, offset) = if rank < residual {
        (base + 1, rank * (base + 1))
    } else {
        (base, residual * (base + 1) + (rank - residual) * base)
    };

    let local_a = a + h * A::from_u64(offset).unwrap();
    let local_b = local_a + h * A::from_u64(local_n).unwrap();

    LocalRange {
        local_a,
        local_b,
        local_n,
        h,
    }
}
