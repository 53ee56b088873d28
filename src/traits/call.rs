// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Call Trait Module
//!
//! A single overloaded `call` over every scalar/sequence argument shape.
//!
//! The shape is read off the argument type at compile time:
//! - `T` where `T: Scalar` is a scalar.
//! - `&[T]`, `&[T; N]`, `&Vec<T>` and `&Vec64<T>` are sequences.
//! - A two-tuple selects the binary forms, with each side independently a
//!   scalar or a sequence.
//!
//! ```rust
//! use minbroadcast::{Broadcaster, Call};
//!
//! let plus = Broadcaster::from_fns(|x: &i32| -x, |a: &i32, b: &i32| a + b);
//!
//! assert_eq!(plus.call(3), -3);
//! assert_eq!(plus.call(&[1, 2, 3]).as_slice(), &[-1, -2, -3]);
//! assert_eq!(plus.call((2, 5)), 7);
//! assert_eq!(plus.call((10, &[1, 2, 3])).as_slice(), &[11, 12, 13]);
//! assert_eq!(plus.call((&vec![1, 2, 3], 10)).as_slice(), &[11, 12, 13]);
//! assert_eq!(plus.call((&[1, 2], &[10, 20, 30])).as_slice(), &[11, 22]);
//! ```
//!
//! Calling a form the wrapped operation does not implement is rejected by
//! the compiler:
//!
//! ```compile_fail
//! use minbroadcast::{Broadcaster, Call};
//!
//! let add = Broadcaster::from_binary_fn(|a: &i32, b: &i32| a + b);
//! let _ = add.call(3);
//! ```

use vec64::Vec64;

use crate::structs::broadcaster::Broadcaster;
use crate::traits::operation::{BinaryOp, UnaryOp};
use crate::traits::type_unions::Scalar;

/// Shape-dispatched invocation of a [`Broadcaster`].
pub trait Call<Args> {
    type Output;

    fn call(&self, args: Args) -> Self::Output;
}

// scalar -> scalar
impl<Op, T> Call<T> for Broadcaster<Op>
where
    T: Scalar,
    Op: UnaryOp<T>,
{
    type Output = Op::Output;

    #[inline]
    fn call(&self, args: T) -> Self::Output {
        self.unary(&args)
    }
}

// (scalar, scalar) -> scalar
impl<Op, T> Call<(T, T)> for Broadcaster<Op>
where
    T: Scalar,
    Op: BinaryOp<T>,
{
    type Output = Op::Output;

    #[inline]
    fn call(&self, (lhs, rhs): (T, T)) -> Self::Output {
        self.binary(&lhs, &rhs)
    }
}

/// Implements the unary, (scalar, sequence) and (sequence, scalar) forms for
/// one sequence type. `$as_slice` turns the borrowed sequence into `&[T]`.
macro_rules! impl_seq_call {
    ([$($g:tt)*] $seq:ty, $as_slice:expr) => {
        impl<'a, Op, T, $($g)*> Call<$seq> for Broadcaster<Op>
        where
            T: Scalar,
            Op: UnaryOp<T>,
        {
            type Output = Vec64<Op::Output>;

            #[inline]
            fn call(&self, args: $seq) -> Self::Output {
                self.unary_seq($as_slice(args))
            }
        }

        impl<'a, Op, T, $($g)*> Call<(T, $seq)> for Broadcaster<Op>
        where
            T: Scalar,
            Op: BinaryOp<T>,
        {
            type Output = Vec64<Op::Output>;

            #[inline]
            fn call(&self, (lhs, rhs): (T, $seq)) -> Self::Output {
                self.scalar_seq(&lhs, $as_slice(rhs))
            }
        }

        impl<'a, Op, T, $($g)*> Call<($seq, T)> for Broadcaster<Op>
        where
            T: Scalar,
            Op: BinaryOp<T>,
        {
            type Output = Vec64<Op::Output>;

            #[inline]
            fn call(&self, (lhs, rhs): ($seq, T)) -> Self::Output {
                self.seq_scalar($as_slice(lhs), &rhs)
            }
        }
    };
}

/// Implements the (sequence, sequence) form for one pair of sequence types.
///
/// Panics under the same length precondition as [`Broadcaster::seq_seq`].
macro_rules! impl_seq_seq_call {
    ([$($lg:tt)*] $lhs:ty, $lhs_slice:expr; [$($rg:tt)*] $rhs:ty, $rhs_slice:expr) => {
        impl<'a, 'b, Op, T, $($lg)* $($rg)*> Call<($lhs, $rhs)> for Broadcaster<Op>
        where
            T: Scalar,
            Op: BinaryOp<T>,
        {
            type Output = Vec64<Op::Output>;

            #[inline]
            fn call(&self, (lhs, rhs): ($lhs, $rhs)) -> Self::Output {
                self.seq_seq($lhs_slice(lhs), $rhs_slice(rhs))
            }
        }
    };
}

impl_seq_call!([] &'a [T], slice_id);
impl_seq_call!([const N: usize] &'a [T; N], array_slice);
impl_seq_call!([] &'a Vec<T>, vec_slice);
impl_seq_call!([] &'a Vec64<T>, vec64_slice);

impl_seq_seq_call!([] &'a [T], slice_id; [] &'b [T], slice_id);
impl_seq_seq_call!([] &'a [T], slice_id; [const M: usize,] &'b [T; M], array_slice);
impl_seq_seq_call!([] &'a [T], slice_id; [] &'b Vec<T>, vec_slice);
impl_seq_seq_call!([] &'a [T], slice_id; [] &'b Vec64<T>, vec64_slice);

impl_seq_seq_call!([const N: usize,] &'a [T; N], array_slice; [] &'b [T], slice_id);
impl_seq_seq_call!([const N: usize,] &'a [T; N], array_slice; [const M: usize,] &'b [T; M], array_slice);
impl_seq_seq_call!([const N: usize,] &'a [T; N], array_slice; [] &'b Vec<T>, vec_slice);
impl_seq_seq_call!([const N: usize,] &'a [T; N], array_slice; [] &'b Vec64<T>, vec64_slice);

impl_seq_seq_call!([] &'a Vec<T>, vec_slice; [] &'b [T], slice_id);
impl_seq_seq_call!([] &'a Vec<T>, vec_slice; [const M: usize,] &'b [T; M], array_slice);
impl_seq_seq_call!([] &'a Vec<T>, vec_slice; [] &'b Vec<T>, vec_slice);
impl_seq_seq_call!([] &'a Vec<T>, vec_slice; [] &'b Vec64<T>, vec64_slice);

impl_seq_seq_call!([] &'a Vec64<T>, vec64_slice; [] &'b [T], slice_id);
impl_seq_seq_call!([] &'a Vec64<T>, vec64_slice; [const M: usize,] &'b [T; M], array_slice);
impl_seq_seq_call!([] &'a Vec64<T>, vec64_slice; [] &'b Vec<T>, vec_slice);
impl_seq_seq_call!([] &'a Vec64<T>, vec64_slice; [] &'b Vec64<T>, vec64_slice);

#[inline(always)]
fn slice_id<T>(s: &[T]) -> &[T] {
    s
}

#[inline(always)]
fn array_slice<T, const N: usize>(a: &[T; N]) -> &[T] {
    a.as_slice()
}

#[inline(always)]
fn vec_slice<T>(v: &Vec<T>) -> &[T] {
    v.as_slice()
}

#[inline(always)]
fn vec64_slice<T>(v: &Vec64<T>) -> &[T] {
    v.as_slice()
}
