//! Real number types
use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// Generic floating point number, implemented
/// for f32 and f64
pub trait FloatNum:
    Copy + Float + FromPrimitive + Debug + Send + Sync + std::fmt::Display + 'static
{
}

impl FloatNum for f32 {}
impl FloatNum for f64 {}
