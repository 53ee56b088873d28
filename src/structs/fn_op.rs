// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Closure Operations
//!
//! Adapters that turn plain closures into scalar operations, so a
//! [`Broadcaster`] can be built without declaring an operation type.

use crate::structs::broadcaster::Broadcaster;
use crate::traits::operation::{BinaryOp, UnaryOp};

/// Wraps `F: Fn(&T) -> R` as a [`UnaryOp`].
#[derive(Debug, Clone, Copy)]
pub struct UnaryFn<F>(pub F);

/// Wraps `F: Fn(&T, &T) -> R` as a [`BinaryOp`].
#[derive(Debug, Clone, Copy)]
pub struct BinaryFn<F>(pub F);

/// Pairs a unary and a binary operation into one operation that supports
/// every call form.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lifted<U, B> {
    pub unary: U,
    pub binary: B,
}

impl<T, R, F> UnaryOp<T> for UnaryFn<F>
where
    F: Fn(&T) -> R,
{
    type Output = R;

    #[inline(always)]
    fn apply_unary(&self, value: &T) -> R {
        (self.0)(value)
    }
}

impl<T, R, F> BinaryOp<T> for BinaryFn<F>
where
    F: Fn(&T, &T) -> R,
{
    type Output = R;

    #[inline(always)]
    fn apply_binary(&self, lhs: &T, rhs: &T) -> R {
        (self.0)(lhs, rhs)
    }
}

impl<T, U: UnaryOp<T>, B> UnaryOp<T> for Lifted<U, B> {
    type Output = U::Output;

    #[inline(always)]
    fn apply_unary(&self, value: &T) -> Self::Output {
        self.unary.apply_unary(value)
    }
}

impl<T, U, B: BinaryOp<T>> BinaryOp<T> for Lifted<U, B> {
    type Output = B::Output;

    #[inline(always)]
    fn apply_binary(&self, lhs: &T, rhs: &T) -> Self::Output {
        self.binary.apply_binary(lhs, rhs)
    }
}

impl<F> Broadcaster<UnaryFn<F>> {
    /// Broadcast a one-argument closure.
    pub fn from_unary_fn(f: F) -> Self {
        Broadcaster::new(UnaryFn(f))
    }
}

impl<F> Broadcaster<BinaryFn<F>> {
    /// Broadcast a two-argument closure.
    pub fn from_binary_fn(f: F) -> Self {
        Broadcaster::new(BinaryFn(f))
    }
}

impl<F, G> Broadcaster<Lifted<UnaryFn<F>, BinaryFn<G>>> {
    /// Broadcast a closure pair, `unary` for one operand and `binary` for two.
    pub fn from_fns(unary: F, binary: G) -> Self {
        Broadcaster::new(Lifted {
            unary: UnaryFn(unary),
            binary: BinaryFn(binary),
        })
    }
}
