//! Integration tests for the sequence algebra: laziness, side-effect
//! timing, the three null-handling transforms, and the terminal family.

use std::cell::RefCell;
use std::rc::Rc;

use nary::Nary;

#[test]
fn transforms_compose_across_representations() {
    let total: i32 = Nary::of(1)
        .concat(Nary::from_sequence(vec![2, 3]))
        .map(|v| v * 10)
        .filter(|v| *v >= 20)
        .fold(0, |acc, v| acc + v);
    assert_eq!(total, 50);
}

#[test]
fn the_three_null_handling_transforms_are_distinct() {
    let source = || Nary::from_sequence(vec![1, 2, 3]);
    let halve = |v: i32| (v % 2 == 0).then_some(v / 2);

    // Sequence map: absent results stay in the sequence as elements.
    let kept_as_elements = source().map(halve).into_vec();
    assert_eq!(kept_as_elements, vec![None, Some(1), None]);

    // Explicit null-filtering map: absent results are dropped.
    let filtered_out = source().filter_map(halve).into_vec();
    assert_eq!(filtered_out, vec![1]);

    // Optional map: narrows first, collapsing an absent result to empty.
    let narrowed = Nary::of(2).map_optional(halve);
    assert_eq!(narrowed.get(), 1);
    let collapsed = Nary::of(3).map_optional(halve);
    assert!(collapsed.is_absent());
}

#[test]
fn inspect_fires_at_traversal_time_not_at_wiring_time() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);

    let wired = Nary::from_sequence(vec![1, 2]).inspect(move |v| sink.borrow_mut().push(*v));
    assert!(log.borrow().is_empty());

    assert_eq!(wired.into_vec(), vec![1, 2]);
    assert_eq!(*log.borrow(), vec![1, 2]);
}

#[test]
fn concat_preserves_laziness_on_resolved_receivers() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);

    let joined = Nary::of(1)
        .inspect(move |v| sink.borrow_mut().push(*v))
        .concat(Nary::of_many(2, vec![3]));
    assert!(log.borrow().is_empty());

    assert_eq!(joined.into_vec(), vec![1, 2, 3]);
    assert_eq!(*log.borrow(), vec![1]);
}

#[test]
fn concat_of_empty_receiver_wraps_the_other_side() {
    let joined = Nary::from_sequence(Vec::<i32>::new()).concat(Nary::of(1));
    assert_eq!(joined.into_vec(), vec![1]);

    let joined = Nary::<i32>::empty().concat(Nary::from_sequence(vec![2, 3]));
    assert_eq!(joined.into_vec(), vec![2, 3]);
}

#[test]
fn empty_identities_never_allocate_wrappers() {
    let untouched = Nary::<i32>::empty()
        .map(|v| v)
        .filter(|_| true)
        .filter_map(Some)
        .take(10)
        .skip(2)
        .distinct()
        .sorted()
        .inspect(|_| {});
    // Still the resolved empty representation, not a lazy chain over it.
    assert!(untouched.is_resolved());
    assert!(untouched.is_absent());
}

#[test]
fn shape_operations_on_infinite_sequences_stay_lazy() {
    let firsts = Nary::from_sequence(1..)
        .filter(|v| v % 2 == 0)
        .map(|v| v * v)
        .take(3)
        .into_vec();
    assert_eq!(firsts, vec![4, 16, 36]);
}

#[test]
fn sorted_and_distinct_normalize_a_sequence() {
    let normalized = Nary::from_sequence(vec![3, 1, 3, 2, 1])
        .distinct()
        .sorted()
        .into_vec();
    assert_eq!(normalized, vec![1, 2, 3]);
}

#[test]
fn sorted_by_orders_with_the_comparator() {
    let by_length = Nary::from_sequence(vec!["ccc", "a", "bb"])
        .sorted_by(|a, b| a.len().cmp(&b.len()))
        .into_vec();
    assert_eq!(by_length, vec!["a", "bb", "ccc"]);
}

#[test]
fn terminals_cover_the_aggregation_family() {
    assert_eq!(Nary::from_sequence(vec![1, 2, 3]).find_last().get(), 3);
    assert_eq!(Nary::from_sequence(vec![1, 2, 3]).find_first().get(), 1);
    assert_eq!(Nary::from_sequence(vec![1, 2, 3]).reduce(|a, b| a + b).get(), 6);
    assert_eq!(Nary::from_sequence(vec![3, 1, 2]).min().get(), 1);
    assert_eq!(Nary::from_sequence(vec![3, 1, 2]).max().get(), 3);
    assert_eq!(Nary::from_sequence(vec![1, 2, 3]).count(), 3);
    assert!(Nary::from_sequence(vec![1, 2, 3]).any_match(|v| *v == 2));
    assert!(Nary::from_sequence(vec![1, 2, 3]).all_match(|v| *v < 4));
    assert!(Nary::from_sequence(vec![1, 2, 3]).none_match(|v| *v > 3));
}

#[test]
fn aggregations_degenerate_to_self_on_resolved_representations() {
    let alone = Nary::of(5);
    assert_eq!(alone.find_last().get(), 5);

    let nobody: Nary<i32> = Nary::empty();
    assert!(nobody.reduce(|a, b| a + b).is_absent());
}

#[test]
fn flat_map_widens_and_flattens() {
    let widened = Nary::from_sequence(vec![1, 2])
        .flat_map(|v| Nary::of_many(v, vec![-v]))
        .into_vec();
    assert_eq!(widened, vec![1, -1, 2, -2]);

    let narrowed = Nary::of(5).flat_map(|_| Nary::<i32>::empty());
    assert!(narrowed.is_absent());
}
