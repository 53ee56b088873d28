//! Copyright © 2025 Peter Garfield Bower. All rights reserved.
//!
//! # minbroadcast
//!
//! Lifts scalar operations over sequences.
//!
//! Write an operation once against scalars by implementing [`UnaryOp`] and/or
//! [`BinaryOp`], wrap it in a [`Broadcaster`], and call it with any mix of
//! scalars and sequences:
//!
//! ```rust
//! use minbroadcast::{BinaryOp, Broadcaster, Call, UnaryOp};
//!
//! struct Plus;
//!
//! impl UnaryOp<i32> for Plus {
//!     type Output = i32;
//!     fn apply_unary(&self, value: &i32) -> i32 { -value }
//! }
//!
//! impl BinaryOp<i32> for Plus {
//!     type Output = i32;
//!     fn apply_binary(&self, lhs: &i32, rhs: &i32) -> i32 { lhs + rhs }
//! }
//!
//! let plus = Broadcaster::new(Plus);
//!
//! assert_eq!(plus.call(3), -3);
//! assert_eq!(plus.call(&[1, 2, 3]).as_slice(), &[-1, -2, -3]);
//! assert_eq!(plus.call((2, 5)), 7);
//! assert_eq!(plus.call((10, &[1, 2, 3])).as_slice(), &[11, 12, 13]);
//! assert_eq!(plus.call((&[1, 2, 3], 10)).as_slice(), &[11, 12, 13]);
//! assert_eq!(plus.call((&[1, 2], &[10, 20, 30])).as_slice(), &[11, 22]);
//! ```
//!
//! Results are 64-byte aligned [`Vec64`] buffers.
//!
//! ## Sequence-sequence lengths
//! When both operands are sequences the left one sets the result length and
//! must not be longer than the right one. A longer left operand panics.
//! [`Broadcaster::checked_seq_seq`] reports it as a [`BroadcastError`] and
//! [`Broadcaster::seq_seq_min`] truncates to the shorter side instead.
//!
//! ## Features
//! - `arithmetic` *(default)*: ready-made arithmetic, checked arithmetic and
//!   comparison operations under [`kernels`].

pub mod enums {
    pub mod error;
}

pub mod structs {
    pub mod broadcaster;
    pub mod fn_op;
}

pub mod traits {
    pub mod call;
    pub mod operation;
    pub mod type_unions;
}

#[cfg(feature = "arithmetic")]
pub mod kernels {
    pub mod arithmetic;
    pub mod checked;
    pub mod comparison;
}

pub mod macros;
pub(crate) mod utils;

pub use enums::error::BroadcastError;
pub use structs::broadcaster::Broadcaster;
pub use structs::fn_op::{BinaryFn, Lifted, UnaryFn};
pub use traits::call::Call;
pub use traits::operation::{BinaryOp, UnaryOp};
pub use traits::type_unions::{Numeric, Scalar};
pub use vec64::Vec64;
