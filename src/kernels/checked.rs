// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Checked Arithmetic Kernels
//!
//! Integer arithmetic that reports overflow and division by zero as
//! [`BroadcastError`] values instead of panicking or wrapping.
//!
//! Each operation yields `Result<T, BroadcastError>`, so it pairs with the
//! fallible `try_*` forms on [`Broadcaster`], which stop at the first failing
//! element:
//!
//! ```rust
//! use minbroadcast::BroadcastError;
//! use minbroadcast::kernels::checked::CHECKED_ADD;
//!
//! let ok = CHECKED_ADD.try_seq_scalar(&[1i8, 2], &3).unwrap();
//! assert_eq!(ok.as_slice(), &[4, 5]);
//!
//! let err = CHECKED_ADD.try_seq_scalar(&[1i8, 127], &3).err();
//! assert!(matches!(err, Some(BroadcastError::Overflow { .. })));
//! ```

use num_traits::{
    CheckedAdd as NumCheckedAdd, CheckedDiv as NumCheckedDiv, CheckedMul as NumCheckedMul,
    CheckedSub as NumCheckedSub, PrimInt,
};

use crate::enums::error::BroadcastError;
use crate::structs::broadcaster::Broadcaster;
use crate::traits::operation::BinaryOp;
use crate::traits::type_unions::Numeric;

macro_rules! impl_checked_arith {
    ($(#[$meta:meta])* $name:ident, $konst:ident, $bound:ident, $method:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<T: Numeric + PrimInt + $bound> BinaryOp<T> for $name {
            type Output = Result<T, BroadcastError>;

            #[inline]
            fn apply_binary(&self, lhs: &T, rhs: &T) -> Self::Output {
                lhs.$method(rhs).ok_or_else(|| BroadcastError::Overflow {
                    op: $symbol,
                    lhs: format!("{:?}", lhs),
                    rhs: format!("{:?}", rhs),
                })
            }
        }

        pub const $konst: Broadcaster<$name> = Broadcaster::new($name);
    };
}

impl_checked_arith!(
    /// Addition that fails on overflow.
    CheckedAdd, CHECKED_ADD, NumCheckedAdd, checked_add, "+"
);
impl_checked_arith!(
    /// Subtraction that fails on overflow.
    CheckedSub, CHECKED_SUB, NumCheckedSub, checked_sub, "-"
);
impl_checked_arith!(
    /// Multiplication that fails on overflow.
    CheckedMul, CHECKED_MUL, NumCheckedMul, checked_mul, "*"
);

/// Division that fails on a zero divisor or on overflow, e.g., `i32::MIN / -1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CheckedDiv;

impl<T: Numeric + PrimInt + NumCheckedDiv> BinaryOp<T> for CheckedDiv {
    type Output = Result<T, BroadcastError>;

    #[inline]
    fn apply_binary(&self, lhs: &T, rhs: &T) -> Self::Output {
        if rhs.is_zero() {
            return Err(BroadcastError::DivideByZero {
                lhs: format!("{:?}", lhs),
            });
        }
        lhs.checked_div(rhs).ok_or_else(|| BroadcastError::Overflow {
            op: "/",
            lhs: format!("{:?}", lhs),
            rhs: format!("{:?}", rhs),
        })
    }
}

pub const CHECKED_DIV: Broadcaster<CheckedDiv> = Broadcaster::new(CheckedDiv);
