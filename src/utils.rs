// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Utilities - *Internal Helper Utilities*
//!
//! Output buffer construction and length validation shared by the
//! sequence-producing call forms.

use vec64::Vec64;

use crate::enums::error::BroadcastError;

/// Drains an exact-size iterator into a `Vec64` allocated once at the final length.
#[inline(always)]
pub(crate) fn collect_exact<I>(iter: I) -> Vec64<I::Item>
where
    I: ExactSizeIterator,
{
    let mut out = Vec64::with_capacity(iter.len());
    for item in iter {
        out.push(item);
    }
    out
}

/// As `collect_exact`, but stops at the first `Err` and returns it.
///
/// Elements after the failing index are never evaluated.
#[inline(always)]
pub(crate) fn try_collect_exact<I, R, E>(iter: I) -> Result<Vec64<R>, E>
where
    I: ExactSizeIterator<Item = Result<R, E>>,
{
    let mut out = Vec64::with_capacity(iter.len());
    for item in iter {
        out.push(item?);
    }
    Ok(out)
}

/// Panics unless the left sequence fits inside the right one.
#[inline(always)]
pub(crate) fn validate_seq_seq_len(lhs: usize, rhs: usize) {
    assert!(
        lhs <= rhs,
        "Broadcast length mismatch: left sequence has {} elements but right sequence has only {}",
        lhs,
        rhs
    );
}

#[inline(always)]
pub(crate) fn check_seq_seq_len(lhs: usize, rhs: usize) -> Result<(), BroadcastError> {
    if lhs > rhs {
        return Err(BroadcastError::LengthMismatch { lhs, rhs });
    }
    Ok(())
}
