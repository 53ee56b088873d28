// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Comparison Kernels
//!
//! Binary predicates producing `bool` for any `PartialEq` / `PartialOrd`
//! scalar, so broadcasting them yields a boolean mask.

use crate::structs::broadcaster::Broadcaster;
use crate::traits::operation::BinaryOp;

macro_rules! impl_comparison {
    ($(#[$meta:meta])* $name:ident, $konst:ident, $bound:ident, $op:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<T: $bound> BinaryOp<T> for $name {
            type Output = bool;

            #[inline(always)]
            fn apply_binary(&self, lhs: &T, rhs: &T) -> bool {
                lhs $op rhs
            }
        }

        pub const $konst: Broadcaster<$name> = Broadcaster::new($name);
    };
}

impl_comparison!(
    /// `lhs == rhs`
    Equal, EQUAL, PartialEq, ==
);
impl_comparison!(
    /// `lhs != rhs`
    NotEqual, NOT_EQUAL, PartialEq, !=
);
impl_comparison!(
    /// `lhs < rhs`
    Less, LESS, PartialOrd, <
);
impl_comparison!(
    /// `lhs <= rhs`
    LessEqual, LESS_EQUAL, PartialOrd, <=
);
impl_comparison!(
    /// `lhs > rhs`
    Greater, GREATER, PartialOrd, >
);
impl_comparison!(
    /// `lhs >= rhs`
    GreaterEqual, GREATER_EQUAL, PartialOrd, >=
);
