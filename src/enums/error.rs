// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Error Module - Custom *minbroadcast* Error Type
//!
//! Defines the unified error type for recoverable broadcasting failures.
//!
//! ## Features
//! - Covers sequence length mismatches for the checked sequence-sequence form,
//! plus overflow and division by zero raised by the checked arithmetic kernels.
//! - Implements `Display` for readable output and `Error` for integration
//! with standard Rust error handling.
//!
//! Contract violations on the unchecked call forms are not represented here.
//! They panic, as they indicate a programming error rather than bad data.

use std::error::Error;
use std::fmt;

/// Catch all error type for `minbroadcast`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BroadcastError {
    /// The left sequence of a sequence-sequence call was longer than the right.
    LengthMismatch { lhs: usize, rhs: usize },
    Overflow {
        op: &'static str,
        lhs: String,
        rhs: String,
    },
    DivideByZero { lhs: String },
}

impl fmt::Display for BroadcastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BroadcastError::LengthMismatch { lhs, rhs } => {
                write!(
                    f,
                    "Length mismatch: left sequence has {} elements but right sequence has only {}.",
                    lhs, rhs
                )
            }
            BroadcastError::Overflow { op, lhs, rhs } => {
                write!(f, "Overflow: '{}' {} '{}' cannot be represented in the scalar type.", lhs, op, rhs)
            }
            BroadcastError::DivideByZero { lhs } => {
                write!(f, "Divide by zero: '{}' / 0.", lhs)
            }
        }
    }
}

impl Error for BroadcastError {}
