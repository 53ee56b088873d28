//! Integration tests for the built-in arithmetic, checked and comparison kernels.

#![cfg(feature = "arithmetic")]

use minbroadcast::kernels::arithmetic::{ABS, ADD, DIV, MAX, MUL, NEGATE, SUB};
use minbroadcast::kernels::checked::{CHECKED_ADD, CHECKED_DIV};
use minbroadcast::kernels::comparison::{GREATER, LESS_EQUAL};
use minbroadcast::{BroadcastError, Call, Vec64};

#[test]
fn test_add_sub_match_scenarios() {
    // Sub negates in its unary form, Add sums in its binary form.
    assert_eq!(SUB.call(3i32), -3);
    assert_eq!(SUB.call(&vec![1i32, 2, 3]).as_slice(), &[-1, -2, -3]);
    assert_eq!(ADD.call((2i32, 5i32)), 7);
    assert_eq!(ADD.call((10i32, &vec![1, 2, 3])).as_slice(), &[11, 12, 13]);
    assert_eq!(ADD.call((&vec![1i32, 2, 3], 10)).as_slice(), &[11, 12, 13]);
    assert_eq!(ADD.call((&vec![1i32, 2], &vec![10, 20, 30])).as_slice(), &[11, 22]);
}

#[test]
#[should_panic(expected = "Broadcast length mismatch")]
fn test_add_left_longer_panics() {
    let _ = ADD.call((&vec![1i32, 2, 3], &vec![10, 20]));
}

#[test]
fn test_float_pipeline() {
    let prices: Vec64<f64> = Vec64::from_slice(&[10.0, 20.0, 40.0]);
    let discounted = MUL.call((&prices, 0.5));
    let per_unit = DIV.call((&discounted, 2.0));
    assert_eq!(per_unit.as_slice(), &[2.5, 5.0, 10.0]);

    let capped = MAX.call((&per_unit, 4.0));
    assert_eq!(capped.as_slice(), &[4.0, 5.0, 10.0]);
}

#[test]
fn test_unary_kernels() {
    assert_eq!(NEGATE.call(&[1.0f32, -2.0]).as_slice(), &[-1.0, 2.0]);
    assert_eq!(ABS.call(&[-3i32, 0, 3]).as_slice(), &[3, 0, 3]);
}

#[test]
fn test_comparison_masks() {
    let v = vec![1i32, 5, 3];
    assert_eq!(GREATER.call((&v, 2)).as_slice(), &[false, true, true]);
    assert_eq!(LESS_EQUAL.call((&v, &vec![1, 4, 3, 0])).as_slice(), &[true, false, true]);
}

#[test]
fn test_checked_kernels_with_fallible_forms() {
    let ok = CHECKED_ADD.try_seq_seq(&[1u8, 2], &[3, 4, 250]).unwrap();
    assert_eq!(ok.as_slice(), &[4, 6]);

    let overflow = CHECKED_ADD.try_scalar_seq(&200u8, &[10, 60, 1]).err();
    assert_eq!(
        overflow,
        Some(BroadcastError::Overflow {
            op: "+",
            lhs: "200".into(),
            rhs: "60".into(),
        })
    );

    let div = CHECKED_DIV.try_seq_scalar(&[10i32, 20], &0).err();
    assert_eq!(div, Some(BroadcastError::DivideByZero { lhs: "10".into() }));
}

#[test]
fn test_pointer_sized_and_wide_integers() {
    let idx: Vec<usize> = vec![0, 1, 2];
    assert_eq!(ADD.call((1usize, &idx)).as_slice(), &[1, 2, 3]);
    assert_eq!(SUB.call(&[5isize, -6]).as_slice(), &[-5, 6]);
    assert_eq!(MUL.call((&[u128::MAX / 2], 2u128)).as_slice(), &[u128::MAX - 1]);
    assert!(CHECKED_ADD.binary(&i128::MAX, &1).is_err());
}
