// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Arithmetic Kernels
//!
//! Ready-made scalar operations over [`Numeric`] types.
//!
//! | Operation | Binary | Unary |
//! |-----------|--------|-------|
//! | [`Add`] | `a + b` | - |
//! | [`Sub`] | `a - b` | `-a` (signed types) |
//! | [`Mul`] | `a * b` | - |
//! | [`Div`] | `a / b` | - |
//! | [`Rem`] | `a % b` | - |
//! | [`Min`] / [`Max`] | smaller / larger operand | - |
//! | [`Negate`] | - | `-a` (signed types) |
//! | [`Abs`] | - | `abs(a)` (signed types) |
//!
//! Integer division by zero and integer overflow behave exactly as the
//! underlying operator does. Use [`checked`](crate::kernels::checked) for
//! recoverable variants.
//!
//! Each operation also comes as a ready broadcaster constant:
//!
//! ```rust
//! use minbroadcast::Call;
//! use minbroadcast::kernels::arithmetic::{ADD, SUB};
//!
//! assert_eq!(ADD.call((10, &[1, 2, 3])).as_slice(), &[11, 12, 13]);
//! assert_eq!(SUB.call(&[1.5, -2.0]).as_slice(), &[-1.5, 2.0]);
//! ```

use num_traits::Signed;

use crate::structs::broadcaster::Broadcaster;
use crate::traits::operation::{BinaryOp, UnaryOp};
use crate::traits::type_unions::Numeric;

macro_rules! impl_binary_arith {
    ($(#[$meta:meta])* $name:ident, $konst:ident, $op:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<T: Numeric> BinaryOp<T> for $name {
            type Output = T;

            #[inline(always)]
            fn apply_binary(&self, lhs: &T, rhs: &T) -> T {
                *lhs $op *rhs
            }
        }

        pub const $konst: Broadcaster<$name> = Broadcaster::new($name);
    };
}

impl_binary_arith!(
    /// Addition.
    Add, ADD, +
);
impl_binary_arith!(
    /// Subtraction. The unary form negates.
    Sub, SUB, -
);
impl_binary_arith!(
    /// Multiplication.
    Mul, MUL, *
);
impl_binary_arith!(
    /// Division.
    Div, DIV, /
);
impl_binary_arith!(
    /// Remainder.
    Rem, REM, %
);

impl<T: Numeric + Signed> UnaryOp<T> for Sub {
    type Output = T;

    #[inline(always)]
    fn apply_unary(&self, value: &T) -> T {
        -*value
    }
}

/// Smaller of the two operands. Ties and unordered pairs, e.g., `NaN`,
/// return the left operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Min;

/// Larger of the two operands. Ties and unordered pairs, e.g., `NaN`,
/// return the left operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Max;

impl<T: Numeric> BinaryOp<T> for Min {
    type Output = T;

    #[inline(always)]
    fn apply_binary(&self, lhs: &T, rhs: &T) -> T {
        if rhs < lhs { *rhs } else { *lhs }
    }
}

impl<T: Numeric> BinaryOp<T> for Max {
    type Output = T;

    #[inline(always)]
    fn apply_binary(&self, lhs: &T, rhs: &T) -> T {
        if rhs > lhs { *rhs } else { *lhs }
    }
}

pub const MIN: Broadcaster<Min> = Broadcaster::new(Min);
pub const MAX: Broadcaster<Max> = Broadcaster::new(Max);

/// Arithmetic negation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Negate;

/// Absolute value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Abs;

impl<T: Numeric + Signed> UnaryOp<T> for Negate {
    type Output = T;

    #[inline(always)]
    fn apply_unary(&self, value: &T) -> T {
        -*value
    }
}

impl<T: Numeric + Signed> UnaryOp<T> for Abs {
    type Output = T;

    #[inline(always)]
    fn apply_unary(&self, value: &T) -> T {
        value.abs()
    }
}

pub const NEGATE: Broadcaster<Negate> = Broadcaster::new(Negate);
pub const ABS: Broadcaster<Abs> = Broadcaster::new(Abs);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::call::Call;
    use vec64::Vec64;

    #[test]
    fn test_add_forms() {
        assert_eq!(ADD.call((2i32, 5i32)), 7);
        assert_eq!(ADD.call((10i64, &[1i64, 2, 3])).as_slice(), &[11, 12, 13]);
        assert_eq!(ADD.call((&[1u8, 2, 3], 10u8)).as_slice(), &[11, 12, 13]);
    }

    #[test]
    fn test_sub_binary_and_unary() {
        assert_eq!(SUB.call((&[10i32, 20], &[1i32, 2, 3])).as_slice(), &[9, 18]);
        assert_eq!(SUB.call(&[1i32, -2, 3]).as_slice(), &[-1, 2, -3]);
        assert_eq!(SUB.call(4.0f64), -4.0);
    }

    #[test]
    fn test_mul_div_rem() {
        let v: Vec<f64> = vec![1.0, 2.0, 4.0];
        assert_eq!(MUL.call((&v, 0.5)).as_slice(), &[0.5, 1.0, 2.0]);
        assert_eq!(DIV.call((8.0, &v)).as_slice(), &[8.0, 4.0, 2.0]);
        assert_eq!(REM.call((&[7u32, 8, 9], 4u32)).as_slice(), &[3, 0, 1]);
    }

    #[test]
    fn test_min_max() {
        let a: Vec64<i32> = Vec64::from_slice(&[1, 5, 3]);
        let b: Vec64<i32> = Vec64::from_slice(&[4, 2, 3]);
        assert_eq!(MIN.call((&a, &b)).as_slice(), &[1, 2, 3]);
        assert_eq!(MAX.call((&a, &b)).as_slice(), &[4, 5, 3]);
    }

    #[test]
    fn test_min_keeps_left_on_nan() {
        let out = MIN.call((f64::NAN, 1.0));
        assert!(out.is_nan());
    }

    #[test]
    fn test_negate_abs() {
        assert_eq!(NEGATE.call(&[1i16, -2]).as_slice(), &[-1, 2]);
        assert_eq!(ABS.call(&[-1.5f32, 2.5]).as_slice(), &[1.5, 2.5]);
        assert_eq!(ABS.call(-7i64), 7);
    }

    #[test]
    fn test_explicit_methods() {
        assert_eq!(ADD.seq_seq(&[1i32, 2], &[10, 20, 30]).as_slice(), &[11, 22]);
        assert_eq!(SUB.unary(&3i32), -3);
    }
}
