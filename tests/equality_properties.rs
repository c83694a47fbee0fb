//! Property-based tests for structural equality and hashing.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use nary::Nary;
use proptest::prelude::*;

fn hash_of<T: Hash>(nary: &Nary<T>) -> u64 {
    let mut hasher = DefaultHasher::new();
    nary.hash(&mut hasher);
    hasher.finish()
}

/// Every representation capable of holding `values`, in the same order.
fn representations_of(values: &[i32]) -> Vec<Nary<i32>> {
    let mut shapes = vec![Nary::from_sequence(values.to_vec())];
    match values {
        [] => shapes.push(Nary::empty()),
        [single] => shapes.push(Nary::of(*single)),
        [first, rest @ ..] => shapes.push(Nary::of_many(*first, rest.to_vec())),
    }
    shapes
}

proptest! {
    #[test]
    fn prop_equal_content_is_equal_across_representations(
        values in prop::collection::vec(any::<i32>(), 0..6)
    ) {
        let left = representations_of(&values);
        let right = representations_of(&values);
        for (a, b) in left.into_iter().zip(right) {
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn prop_equal_content_hashes_identically_across_representations(
        values in prop::collection::vec(any::<i32>(), 0..6)
    ) {
        let hashes: Vec<u64> = representations_of(&values)
            .iter()
            .map(hash_of)
            .collect();
        for window in hashes.windows(2) {
            prop_assert_eq!(window[0], window[1]);
        }
    }

    #[test]
    fn prop_differing_lengths_are_never_equal(
        values in prop::collection::vec(any::<i32>(), 1..6)
    ) {
        let shorter = Nary::from_sequence(values[..values.len() - 1].to_vec());
        let longer = Nary::from_sequence(values.clone());
        prop_assert_ne!(shorter, longer);
    }

    #[test]
    fn prop_option_round_trip(value in prop::option::of(any::<i32>())) {
        prop_assert_eq!(Nary::of_option(value).to_option(), value);
    }

    #[test]
    fn prop_vec_round_trip(values in prop::collection::vec(any::<i32>(), 0..8)) {
        let round_tripped = Nary::from_sequence(values.clone()).into_vec();
        prop_assert_eq!(round_tripped, values);
    }

    #[test]
    fn prop_concat_matches_vec_concatenation(
        left in prop::collection::vec(any::<i32>(), 0..5),
        right in prop::collection::vec(any::<i32>(), 0..5),
    ) {
        let expected: Vec<i32> = left.iter().chain(right.iter()).copied().collect();
        let joined = Nary::from_sequence(left).concat(Nary::from_sequence(right));
        prop_assert_eq!(joined.into_vec(), expected);
    }

    #[test]
    fn prop_narrowing_agrees_with_length(
        values in prop::collection::vec(any::<i32>(), 0..5)
    ) {
        let narrowed = Nary::from_sequence(values.clone()).at_most_one().map(|v| v.copied());
        match values.len() {
            0 => prop_assert_eq!(narrowed, Ok(None)),
            1 => prop_assert_eq!(narrowed, Ok(Some(values[0]))),
            _ => {
                let err = narrowed.unwrap_err();
                prop_assert_eq!(err.first(), format!("{:?}", values[0]));
                prop_assert_eq!(err.second(), format!("{:?}", values[1]));
            }
        }
    }
}
