//! Integration tests for the construction façade and the std conversions.

use std::collections::BTreeMap;

use nary::Nary;

#[test]
fn every_entry_point_maps_to_the_expected_cardinality() {
    assert!(Nary::<i32>::empty().is_absent());
    assert!(Nary::of(1).is_present());
    assert!(Nary::of_option(Some(1)).is_present());
    assert!(Nary::of_option(None::<i32>).is_absent());

    // No additional values narrows to exactly-one immediately.
    assert!(Nary::of_many(1, vec![]).is_resolved());
    assert_eq!(Nary::of_many(1, vec![2, 3]).count(), 3);
}

#[test]
fn host_optional_round_trips() {
    let present: Option<i32> = Some(4);
    assert_eq!(Nary::from(present).to_option(), present);

    let absent: Option<i32> = None;
    assert_eq!(Nary::from(absent).to_option(), absent);
}

#[test]
fn collections_come_in_through_their_iterators() {
    assert_eq!(Nary::from(vec![1, 2]).into_vec(), vec![1, 2]);
    assert_eq!(Nary::from([1, 2, 3]).into_vec(), vec![1, 2, 3]);

    let ages = BTreeMap::from([("ada", 36), ("grace", 85)]);
    let oldest = Nary::from_sequence(ages).max_by(|a, b| a.1.cmp(&b.1));
    assert_eq!(oldest.get(), ("grace", 85));
}

#[test]
fn pull_style_sources_bridge_with_unknown_size() {
    let mut remaining = 3;
    let countdown = Nary::from_fn(move || {
        if remaining == 0 {
            None
        } else {
            remaining -= 1;
            Some(remaining)
        }
    });
    assert_eq!(countdown.into_iter().size_hint(), (0, None));

    let mut remaining = 3;
    let countdown = Nary::from_fn(move || {
        if remaining == 0 {
            None
        } else {
            remaining -= 1;
            Some(remaining)
        }
    });
    assert_eq!(countdown.into_vec(), vec![2, 1, 0]);
}

#[test]
fn collect_produces_a_sequence_backed_nary() {
    let collected: Nary<i32> = (1..=4).filter(|v| v % 2 == 0).collect();
    assert!(!collected.is_resolved());
    assert_eq!(collected.into_vec(), vec![2, 4]);
}

#[test]
fn into_iterator_feeds_std_combinators() {
    let doubled: Vec<i32> = Nary::of_many(1, vec![2, 3])
        .into_iter()
        .map(|v| v * 2)
        .collect();
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn default_is_the_empty_representation() {
    let fallback: Nary<String> = Nary::default();
    assert!(fallback.is_resolved());
    assert!(fallback.is_absent());
}
