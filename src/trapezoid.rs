//! Composite trapezoidal rule over one rank's block
use crate::partition::LocalRange;
use crate::types::FloatNum;

/// Trapezoidal estimate of the integral of `f` over
/// `[local_a, local_b]` with `local_n` trapezoids of base `h`.
///
/// The interior nodes are summed in index order, so repeated calls
/// with the same inputs give the same bits. An empty block
/// (`local_n == 0`, surplus rank) contributes exactly zero.
pub fn trapezoid<A, F>(f: F, local_a: A, local_b: A, local_n: u64, h: A) -> A
where
    A: FloatNum,
    F: Fn(A) -> A,
{
    if local_n == 0 {
        return A::zero();
    }
    let two = A::from_f64(2.).unwrap();
    let mut integral = (f(local_a) + f(local_b)) / two;
    let mut x = local_a;
    for _ in 1..local_n {
        x = x + h;
        integral = integral + f(x);
    }
    integral * h
}

/// Trapezoidal estimate over a decomposed block
pub fn trapezoid_over<A, F>(f: F, range: &LocalRange<A>) -> A
where
    A: FloatNum,
    F: Fn(A) -> A,
{
    trapezoid(f, range.local_a, range.local_b, range.local_n, range.h)
}

/// The integrand, f(x) = x^2
pub fn square<A: FloatNum>(x: A) -> A {
    x * x
}

/// Closed form of the integral of x^2 over `[a, b]`, for validating
/// the estimate
pub fn exact_cubic<A: FloatNum>(a: A, b: A) -> A {
    let three = A::from_f64(3.).unwrap();
    (b.powi(3) - a.powi(3)) / three
}
