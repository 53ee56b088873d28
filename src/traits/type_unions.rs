// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Type Unions
//!
//! Marker and bound traits that define the crate's scalar type universe.

use std::fmt::Debug;

use num_traits::{Num, NumCast, ToPrimitive};

use crate::impl_scalar;

/// Marker for types that count as a single, indivisible scalar.
///
/// The shape dispatch in [`Call`](crate::traits::call::Call) uses this to tell
/// a scalar argument apart from a sequence argument at compile time. Slices,
/// vectors and arrays never implement it.
///
/// Opt your own value types in with [`impl_scalar!`](crate::impl_scalar):
///
/// ```rust
/// use minbroadcast::impl_scalar;
///
/// #[derive(Clone, Copy)]
/// struct Celsius(f64);
///
/// impl_scalar!(Celsius);
/// ```
pub trait Scalar {}

impl_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String
);
impl<'a> Scalar for &'a str {}

/// Trait for types valid as numerical.
///
/// Useful when specifying `my_fn::<T: Numeric>() {}`.
///
/// Extends and constrains the *num-traits* `Num` implementation to fit the crate's type universe.
pub trait Numeric:
    Scalar + Num + NumCast + Copy + Default + ToPrimitive + PartialEq + PartialOrd + Debug + 'static
{
}
impl Numeric for f32 {}
impl Numeric for f64 {}
impl Numeric for i8 {}
impl Numeric for i16 {}
impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for i128 {}
impl Numeric for isize {}
impl Numeric for u8 {}
impl Numeric for u16 {}
impl Numeric for u32 {}
impl Numeric for u64 {}
impl Numeric for u128 {}
impl Numeric for usize {}
