// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Broadcaster Module
//!
//! Contains [`Broadcaster`], the adapter that lifts a scalar operation over
//! sequences.
//!
//! ## Call forms
//! | Form | Method | Result |
//! |------|--------|--------|
//! | scalar | [`unary`](Broadcaster::unary) | `Op::apply_unary(a)` |
//! | sequence | [`unary_seq`](Broadcaster::unary_seq) | one element per `a[i]` |
//! | (scalar, scalar) | [`binary`](Broadcaster::binary) | `Op::apply_binary(a, b)` |
//! | (scalar, sequence) | [`scalar_seq`](Broadcaster::scalar_seq) | length of `b` |
//! | (sequence, scalar) | [`seq_scalar`](Broadcaster::seq_scalar) | length of `a` |
//! | (sequence, sequence) | [`seq_seq`](Broadcaster::seq_seq) | length of `a`, requires `a.len() <= b.len()` |
//!
//! Every sequence form makes one index-ascending pass into a `Vec64`
//! preallocated to the final length. The same forms are reachable through a
//! single overloaded `call` via [`Call`](crate::Call).

use vec64::Vec64;

use crate::enums::error::BroadcastError;
use crate::traits::operation::{BinaryOp, UnaryOp};
use crate::utils::{check_seq_seq_len, collect_exact, try_collect_exact, validate_seq_seq_len};

/// # Broadcaster
///
/// Wraps a scalar operation `Op` and applies it to any combination of
/// scalar and sequence operands.
///
/// ## Description
/// - Holds no state beyond `Op`, which is only ever borrowed.
/// - The call shape is fixed by the argument types, so dispatch is resolved
///   at compile time and monomorphised per `Op`.
/// - Forms that `Op` does not support (e.g., unary calls on an operation
///   that only implements [`BinaryOp`]) do not compile.
///
/// ## Example
/// ```rust
/// use minbroadcast::{Broadcaster, BinaryOp, UnaryOp};
///
/// struct Plus;
///
/// impl UnaryOp<i32> for Plus {
///     type Output = i32;
///     fn apply_unary(&self, value: &i32) -> i32 { -value }
/// }
///
/// impl BinaryOp<i32> for Plus {
///     type Output = i32;
///     fn apply_binary(&self, lhs: &i32, rhs: &i32) -> i32 { lhs + rhs }
/// }
///
/// let plus = Broadcaster::new(Plus);
/// assert_eq!(plus.unary(&3), -3);
/// assert_eq!(plus.scalar_seq(&10, &[1, 2, 3]).as_slice(), &[11, 12, 13]);
/// assert_eq!(plus.seq_seq(&[1, 2], &[10, 20, 30]).as_slice(), &[11, 22]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Broadcaster<Op> {
    op: Op,
}

impl<Op> Broadcaster<Op> {
    #[inline]
    pub const fn new(op: Op) -> Self {
        Self { op }
    }

    /// Borrow the wrapped operation.
    #[inline]
    pub fn op(&self) -> &Op {
        &self.op
    }

    #[inline]
    pub fn into_inner(self) -> Op {
        self.op
    }

    /// scalar -> scalar
    #[inline]
    pub fn unary<T>(&self, value: &T) -> <Op as UnaryOp<T>>::Output
    where
        Op: UnaryOp<T>,
    {
        self.op.apply_unary(value)
    }

    /// sequence -> sequence
    ///
    /// The result always has the same length as `values`.
    pub fn unary_seq<T>(&self, values: &[T]) -> Vec64<<Op as UnaryOp<T>>::Output>
    where
        Op: UnaryOp<T>,
    {
        collect_exact(values.iter().map(|v| self.op.apply_unary(v)))
    }

    /// (scalar, scalar) -> scalar
    #[inline]
    pub fn binary<T>(&self, lhs: &T, rhs: &T) -> <Op as BinaryOp<T>>::Output
    where
        Op: BinaryOp<T>,
    {
        self.op.apply_binary(lhs, rhs)
    }

    /// (scalar, sequence) -> sequence
    ///
    /// `lhs` is paired with every element of `rhs`.
    pub fn scalar_seq<T>(&self, lhs: &T, rhs: &[T]) -> Vec64<<Op as BinaryOp<T>>::Output>
    where
        Op: BinaryOp<T>,
    {
        collect_exact(rhs.iter().map(|r| self.op.apply_binary(lhs, r)))
    }

    /// (sequence, scalar) -> sequence
    ///
    /// Every element of `lhs` is paired with `rhs`.
    pub fn seq_scalar<T>(&self, lhs: &[T], rhs: &T) -> Vec64<<Op as BinaryOp<T>>::Output>
    where
        Op: BinaryOp<T>,
    {
        collect_exact(lhs.iter().map(|l| self.op.apply_binary(l, rhs)))
    }

    /// (sequence, sequence) -> sequence
    ///
    /// The result has the length of `lhs`. Elements of `rhs` past
    /// `lhs.len()` never participate.
    ///
    /// # Panics
    /// If `lhs` is longer than `rhs`. The check runs before any element is
    /// evaluated. Use [`checked_seq_seq`](Self::checked_seq_seq) to get an
    /// error instead, or [`seq_seq_min`](Self::seq_seq_min) to truncate to
    /// the shorter side.
    pub fn seq_seq<T>(&self, lhs: &[T], rhs: &[T]) -> Vec64<<Op as BinaryOp<T>>::Output>
    where
        Op: BinaryOp<T>,
    {
        validate_seq_seq_len(lhs.len(), rhs.len());
        self.zip_apply(lhs, rhs)
    }

    /// As [`seq_seq`](Self::seq_seq), returning
    /// [`BroadcastError::LengthMismatch`] in place of the panic.
    pub fn checked_seq_seq<T>(
        &self,
        lhs: &[T],
        rhs: &[T],
    ) -> Result<Vec64<<Op as BinaryOp<T>>::Output>, BroadcastError>
    where
        Op: BinaryOp<T>,
    {
        check_seq_seq_len(lhs.len(), rhs.len())?;
        Ok(self.zip_apply(lhs, rhs))
    }

    /// (sequence, sequence) -> sequence, truncated to the shorter operand.
    ///
    /// Unlike [`seq_seq`](Self::seq_seq) this never panics and does not care
    /// which side is longer.
    pub fn seq_seq_min<T>(&self, lhs: &[T], rhs: &[T]) -> Vec64<<Op as BinaryOp<T>>::Output>
    where
        Op: BinaryOp<T>,
    {
        self.zip_apply(lhs, rhs)
    }

    /// Fallible sequence -> sequence for operations yielding `Result`.
    ///
    /// Evaluates in index order and returns the first `Err` unchanged.
    pub fn try_unary_seq<T, R, E>(&self, values: &[T]) -> Result<Vec64<R>, E>
    where
        Op: UnaryOp<T, Output = Result<R, E>>,
    {
        try_collect_exact(values.iter().map(|v| self.op.apply_unary(v)))
    }

    /// Fallible (scalar, sequence) -> sequence.
    pub fn try_scalar_seq<T, R, E>(&self, lhs: &T, rhs: &[T]) -> Result<Vec64<R>, E>
    where
        Op: BinaryOp<T, Output = Result<R, E>>,
    {
        try_collect_exact(rhs.iter().map(|r| self.op.apply_binary(lhs, r)))
    }

    /// Fallible (sequence, scalar) -> sequence.
    pub fn try_seq_scalar<T, R, E>(&self, lhs: &[T], rhs: &T) -> Result<Vec64<R>, E>
    where
        Op: BinaryOp<T, Output = Result<R, E>>,
    {
        try_collect_exact(lhs.iter().map(|l| self.op.apply_binary(l, rhs)))
    }

    /// Fallible (sequence, sequence) -> sequence.
    ///
    /// # Panics
    /// On the same length precondition as [`seq_seq`](Self::seq_seq).
    pub fn try_seq_seq<T, R, E>(&self, lhs: &[T], rhs: &[T]) -> Result<Vec64<R>, E>
    where
        Op: BinaryOp<T, Output = Result<R, E>>,
    {
        validate_seq_seq_len(lhs.len(), rhs.len());
        try_collect_exact(lhs.iter().zip(rhs).map(|(l, r)| self.op.apply_binary(l, r)))
    }

    #[inline(always)]
    fn zip_apply<T>(&self, lhs: &[T], rhs: &[T]) -> Vec64<<Op as BinaryOp<T>>::Output>
    where
        Op: BinaryOp<T>,
    {
        collect_exact(lhs.iter().zip(rhs).map(|(l, r)| self.op.apply_binary(l, r)))
    }
}

impl<Op> From<Op> for Broadcaster<Op> {
    fn from(op: Op) -> Self {
        Self::new(op)
    }
}
