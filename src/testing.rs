//! Testing utilities for code that narrows naries
//!
//! This module provides assertion macros for the common "did this pipeline
//! leave a value behind" checks, and property-based testing support behind
//! the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use nary::{assert_absent, assert_present, Nary};
//!
//! let found = Nary::from_sequence(vec![1, 2, 3]).filter(|v| *v == 2);
//! assert_present!(found);
//!
//! let missing = Nary::from_sequence(vec![1, 2, 3]).filter(|v| *v == 9);
//! assert_absent!(missing);
//! ```

/// Assert that a nary holds exactly one value.
///
/// Panics when the nary is empty, and propagates the excess diagnostic when
/// it proves to hold two or more elements.
///
/// # Example
///
/// ```rust
/// use nary::{assert_present, Nary};
///
/// let one = Nary::of(42);
/// assert_present!(one);
/// ```
#[macro_export]
macro_rules! assert_present {
    ($nary:expr) => {
        if !$crate::Nary::is_present(&$nary) {
            panic!("Expected a present value, got an empty nary");
        }
    };
}

/// Assert that a nary holds no value.
///
/// Panics when a value is present, showing it, and propagates the excess
/// diagnostic when the nary proves to hold two or more elements.
///
/// # Example
///
/// ```rust
/// use nary::{assert_absent, Nary};
///
/// let none: Nary<i32> = Nary::empty();
/// assert_absent!(none);
/// ```
#[macro_export]
macro_rules! assert_absent {
    ($nary:expr) => {
        if let Some(value) = $crate::Nary::value(&$nary) {
            panic!("Expected an empty nary, got a present value: {:?}", value);
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for crate::Nary<T>
where
    T: Arbitrary + 'static,
    T::Parameters: Clone,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            proptest::strategy::LazyJust::new(crate::Nary::empty),
            any_with::<T>(args.clone()).prop_map(crate::Nary::of),
            prop::collection::vec(any_with::<T>(args), 0..8).prop_map(crate::Nary::from_sequence),
        ]
        .boxed()
    }
}
