// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Macros
//!
//! Helper macros for opting types into the scalar universe and for
//! building broadcasters inline.

/// Implements the [`Scalar`](crate::Scalar) marker for one or more types.
#[macro_export]
macro_rules! impl_scalar {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::traits::type_unions::Scalar for $t {}
        )+
    };
}

/// Builds a [`Broadcaster`](crate::Broadcaster) from closures.
///
/// - `lift!(unary: f)` wraps a one-argument closure.
/// - `lift!(binary: g)` wraps a two-argument closure.
/// - `lift!(unary: f, binary: g)` wraps both into one operation.
///
/// ```rust
/// use minbroadcast::{Call, lift};
///
/// let plus = lift!(unary: |x: &i32| -x, binary: |a: &i32, b: &i32| a + b);
/// assert_eq!(plus.call(3), -3);
/// assert_eq!(plus.call((2, 5)), 7);
/// ```
#[macro_export]
macro_rules! lift {
    (unary: $f:expr $(,)?) => {
        $crate::Broadcaster::from_unary_fn($f)
    };
    (binary: $g:expr $(,)?) => {
        $crate::Broadcaster::from_binary_fn($g)
    };
    (unary: $f:expr, binary: $g:expr $(,)?) => {
        $crate::Broadcaster::from_fns($f, $g)
    };
}
