// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operation Traits
//!
//! The capability contract a scalar operation implements to be wrapped by a
//! [`Broadcaster`](crate::Broadcaster).
//!
//! An operation only ever sees scalars. It may implement [`UnaryOp`],
//! [`BinaryOp`], or both, and the broadcaster only exposes the call forms
//! backed by an implementation. Calling a form the operation does not support
//! fails to compile.
//!
//! Both traits take their arguments by reference so that non-`Copy` scalars,
//! e.g., `String`, can be shared across every element of a sequence without
//! cloning.

/// Scalar semantics for one operand.
pub trait UnaryOp<T> {
    type Output;

    fn apply_unary(&self, value: &T) -> Self::Output;
}

/// Scalar semantics for two operands of the same type.
pub trait BinaryOp<T> {
    type Output;

    fn apply_binary(&self, lhs: &T, rhs: &T) -> Self::Output;
}

impl<T, Op: UnaryOp<T> + ?Sized> UnaryOp<T> for &Op {
    type Output = Op::Output;

    #[inline(always)]
    fn apply_unary(&self, value: &T) -> Self::Output {
        (**self).apply_unary(value)
    }
}

impl<T, Op: BinaryOp<T> + ?Sized> BinaryOp<T> for &Op {
    type Output = Op::Output;

    #[inline(always)]
    fn apply_binary(&self, lhs: &T, rhs: &T) -> Self::Output {
        (**self).apply_binary(lhs, rhs)
    }
}
