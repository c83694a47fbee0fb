//! The sequence view: lazy pipeline operations.
//!
//! Every operation here delegates the actual iteration work to [`std::iter`]
//! adapters and re-wraps the result; nothing is materialized. Dispatch is
//! per representation: the empty nary short-circuits to itself without ever
//! invoking a caller closure, the exactly-one nary resolves eagerly where
//! its known cardinality allows, and the sequence-backed nary boxes a new
//! adapter around its source.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use super::{IntoIter, Kind, Nary};

impl<T: 'static> Nary<T> {
    /// Transform every element.
    ///
    /// Plain sequence semantics: the result of `f` is an element no matter
    /// what it is, so mapping into `Option<U>` keeps the options as
    /// elements. Use [`Nary::filter_map`] to drop `None` results, or
    /// [`Nary::map_optional`] to narrow to at most one first.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let doubled = Nary::from_sequence(vec![1, 2, 3]).map(|v| v * 2);
    /// assert_eq!(doubled.into_vec(), vec![2, 4, 6]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> Nary<U>
    where
        F: FnMut(T) -> U + 'static,
    {
        match self.kind {
            Kind::Empty => Nary::empty(),
            Kind::One(value) => Nary::of(f(value)),
            Kind::Seq(cell) => {
                Nary::sequence_backed(Box::new(cell.into_elements("map").map(f)))
            }
        }
    }

    /// Keep only the elements matching the predicate.
    ///
    /// On an exactly-one nary this either keeps it or degrades it to empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let odd = Nary::from_sequence(vec![1, 2, 3]).filter(|v| v % 2 == 1);
    /// assert_eq!(odd.into_vec(), vec![1, 3]);
    /// ```
    pub fn filter<F>(self, mut predicate: F) -> Nary<T>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        match self.kind {
            Kind::Empty => Nary::empty(),
            Kind::One(value) => {
                if predicate(&value) {
                    Nary::of(value)
                } else {
                    Nary::empty()
                }
            }
            Kind::Seq(cell) => {
                Nary::sequence_backed(Box::new(cell.into_elements("filter").filter(predicate)))
            }
        }
    }

    /// Transform every element, dropping `None` results from the sequence.
    ///
    /// This is the explicit "filter out the nulls" transform: unlike
    /// [`Nary::map`] it removes absent results, and unlike
    /// [`Nary::map_optional`] it never narrows cardinality, so it is safe on
    /// sequences of any length.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let parsed = Nary::from_sequence(vec!["1", "x", "3"])
    ///     .filter_map(|raw| raw.parse::<i32>().ok());
    /// assert_eq!(parsed.into_vec(), vec![1, 3]);
    /// ```
    pub fn filter_map<U, F>(self, mut f: F) -> Nary<U>
    where
        F: FnMut(T) -> Option<U> + 'static,
    {
        match self.kind {
            Kind::Empty => Nary::empty(),
            Kind::One(value) => Nary::of_option(f(value)),
            Kind::Seq(cell) => {
                Nary::sequence_backed(Box::new(cell.into_elements("filter_map").filter_map(f)))
            }
        }
    }

    /// Replace every element with the elements of the nary `f` returns.
    ///
    /// On an exactly-one nary the nested result is spliced in directly,
    /// without an extra wrapping layer.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let repeated = Nary::from_sequence(vec![1, 2])
    ///     .flat_map(|v| Nary::of_many(v, vec![v]));
    /// assert_eq!(repeated.into_vec(), vec![1, 1, 2, 2]);
    /// ```
    pub fn flat_map<U, F>(self, mut f: F) -> Nary<U>
    where
        U: 'static,
        F: FnMut(T) -> Nary<U> + 'static,
    {
        match self.kind {
            Kind::Empty => Nary::empty(),
            Kind::One(value) => f(value),
            Kind::Seq(cell) => {
                Nary::sequence_backed(Box::new(cell.into_elements("flat_map").flat_map(f)))
            }
        }
    }

    /// Run a callback on each element as it flows past, without changing the
    /// sequence.
    ///
    /// The callback fires during traversal, not when `inspect` is called;
    /// on the empty nary it never fires at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let mut seen = Vec::new();
    /// let total: i32 = Nary::from_sequence(vec![1, 2])
    ///     .inspect(move |v| seen.push(*v))
    ///     .fold(0, |acc, v| acc + v);
    /// assert_eq!(total, 3);
    /// ```
    pub fn inspect<F>(self, f: F) -> Nary<T>
    where
        F: FnMut(&T) + 'static,
    {
        match self.kind {
            Kind::Empty => Nary::empty(),
            Kind::One(value) => {
                Nary::sequence_backed(Box::new(std::iter::once(value).inspect(f)))
            }
            Kind::Seq(cell) => {
                Nary::sequence_backed(Box::new(cell.into_elements("inspect").inspect(f)))
            }
        }
    }

    /// Keep at most the first `n` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::from_sequence(1..).take(3).into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn take(self, n: usize) -> Nary<T> {
        match self.kind {
            Kind::Empty => Nary::empty(),
            Kind::One(value) => {
                if n == 0 {
                    Nary::empty()
                } else {
                    Nary::of(value)
                }
            }
            Kind::Seq(cell) => {
                Nary::sequence_backed(Box::new(cell.into_elements("take").take(n)))
            }
        }
    }

    /// Drop the first `n` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::from_sequence(vec![1, 2, 3]).skip(1).into_vec(), vec![2, 3]);
    /// ```
    pub fn skip(self, n: usize) -> Nary<T> {
        match self.kind {
            Kind::Empty => Nary::empty(),
            Kind::One(value) => {
                if n == 0 {
                    Nary::of(value)
                } else {
                    Nary::empty()
                }
            }
            Kind::Seq(cell) => {
                Nary::sequence_backed(Box::new(cell.into_elements("skip").skip(n)))
            }
        }
    }

    /// Drop repeated elements, keeping the first occurrence of each.
    ///
    /// Lazily maintains a set of elements seen so far; the source order of
    /// the survivors is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let unique = Nary::from_sequence(vec![1, 2, 1, 3, 2]).distinct();
    /// assert_eq!(unique.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn distinct(self) -> Nary<T>
    where
        T: Eq + Hash + Clone,
    {
        match self.kind {
            Kind::Empty => Nary::empty(),
            Kind::One(value) => Nary::of(value),
            Kind::Seq(cell) => {
                let mut seen = HashSet::new();
                Nary::sequence_backed(Box::new(
                    cell.into_elements("distinct")
                        .filter(move |element| seen.insert(element.clone())),
                ))
            }
        }
    }

    /// Sort the elements into their natural order.
    ///
    /// The sort is stable and deferred: the sequence is buffered and sorted
    /// on the first pull, not when `sorted` is called. Resolved
    /// representations are returned as-is, being trivially sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let ordered = Nary::from_sequence(vec![3, 1, 2]).sorted();
    /// assert_eq!(ordered.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn sorted(self) -> Nary<T>
    where
        T: Ord,
    {
        self.sorted_by(T::cmp)
    }

    /// Sort the elements with a caller-supplied comparator.
    ///
    /// Stable and deferred like [`Nary::sorted`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let descending = Nary::from_sequence(vec![1, 3, 2]).sorted_by(|a, b| b.cmp(a));
    /// assert_eq!(descending.into_vec(), vec![3, 2, 1]);
    /// ```
    pub fn sorted_by<F>(self, compare: F) -> Nary<T>
    where
        F: FnMut(&T, &T) -> Ordering + 'static,
    {
        match self.kind {
            Kind::Empty => Nary::empty(),
            Kind::One(value) => Nary::of(value),
            Kind::Seq(cell) => Nary::sequence_backed(deferred_sort(
                cell.into_elements("sorted_by"),
                compare,
            )),
        }
    }

    /// Concatenate another nary after this one.
    ///
    /// The result is a lazy wrapper over both element sequences even when
    /// the receiver is already resolved, so `inspect` callbacks keep firing
    /// at traversal time. The one exception is empty-concat-empty, which is
    /// the empty identity. An empty receiver yields a sequence wrapping just
    /// the other side's elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let joined = Nary::from_sequence(Vec::<i32>::new()).concat(Nary::of(1));
    /// assert_eq!(joined.into_vec(), vec![1]);
    /// ```
    pub fn concat(self, other: Nary<T>) -> Nary<T> {
        match (self.kind, other.kind) {
            (Kind::Empty, Kind::Empty) => Nary::empty(),
            (Kind::Empty, kind) => {
                Nary::sequence_backed(Box::new(Nary { kind }.into_elements_for("concat")))
            }
            (kind, other_kind) => Nary::sequence_backed(Box::new(
                Nary { kind }
                    .into_elements_for("concat")
                    .chain(Nary { kind: other_kind }.into_elements_for("concat")),
            )),
        }
    }

    /// Concatenate a single value after this one. Shorthand for
    /// `concat(Nary::of(value))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::of(1).append(2).into_vec(), vec![1, 2]);
    /// ```
    pub fn append(self, value: T) -> Nary<T> {
        self.concat(Nary::of(value))
    }
}

/// Buffer-and-sort adapter that stays lazy: the source is drained and sorted
/// only when the first element is pulled.
fn deferred_sort<T, F>(elements: IntoIter<T>, mut compare: F) -> Box<dyn Iterator<Item = T>>
where
    T: 'static,
    F: FnMut(&T, &T) -> Ordering + 'static,
{
    let mut pending = Some(elements);
    let mut run: Option<std::vec::IntoIter<T>> = None;
    Box::new(std::iter::from_fn(move || {
        let run = run.get_or_insert_with(|| {
            let mut buffer: Vec<T> = pending.take().map(Iterator::collect).unwrap_or_default();
            buffer.sort_by(&mut compare);
            buffer.into_iter()
        });
        run.next()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_map_preserves_cardinality() {
        assert_eq!(Nary::of(5).map(|v| v + 1).get(), 6);
        assert_eq!(
            Nary::from_sequence(vec![1, 2]).map(|v| v * 10).into_vec(),
            vec![10, 20]
        );
    }

    #[test]
    fn test_empty_short_circuits_without_invoking_closures() {
        let untouched: Nary<i32> = Nary::empty();
        let still_empty = untouched
            .map(|_: i32| -> i32 { panic!("map must not run") })
            .filter(|_| panic!("filter must not run"))
            .inspect(|_| panic!("inspect must not run"));
        assert!(still_empty.is_resolved());
        assert!(still_empty.is_absent());
    }

    #[test]
    fn test_empty_identity_for_shape_operations() {
        let none: Nary<i32> = Nary::empty();
        let unchanged = none.take(5).skip(2).distinct().sorted();
        assert!(unchanged.is_resolved());
        assert!(unchanged.is_absent());
    }

    #[test]
    fn test_filter_on_one_keeps_or_degrades() {
        assert_eq!(Nary::of(4).filter(|v| v % 2 == 0).get(), 4);
        assert!(Nary::of(3).filter(|v| *v % 2 == 0).is_absent());
    }

    #[test]
    fn test_map_keeps_option_results_as_elements() {
        let options = Nary::from_sequence(vec![1, 2]).map(|v| (v > 1).then_some(v));
        assert_eq!(options.into_vec(), vec![None, Some(2)]);
    }

    #[test]
    fn test_filter_map_drops_absent_results() {
        let kept = Nary::from_sequence(vec![1, 2, 3]).filter_map(|v| (v > 1).then_some(v));
        assert_eq!(kept.into_vec(), vec![2, 3]);
    }

    #[test]
    fn test_flat_map_splices_on_one() {
        let spliced = Nary::of(1).flat_map(|v| Nary::from_sequence(vec![v, v + 1]));
        assert_eq!(spliced.into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_flat_map_flattens_empties() {
        let flattened = Nary::from_sequence(vec![1, 2, 3])
            .flat_map(|v| if v == 2 { Nary::empty() } else { Nary::of(v) });
        assert_eq!(flattened.into_vec(), vec![1, 3]);
    }

    #[test]
    fn test_take_and_skip_on_one() {
        assert!(Nary::of(1).take(0).is_absent());
        assert_eq!(Nary::of(1).take(9).get(), 1);
        assert_eq!(Nary::of(1).skip(0).get(), 1);
        assert!(Nary::of(1).skip(1).is_absent());
    }

    #[test]
    fn test_take_bounds_an_infinite_sequence() {
        assert_eq!(Nary::from_sequence(1..).take(2).into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_distinct_keeps_first_occurrences() {
        let unique = Nary::from_sequence(vec![2, 1, 2, 3, 1]).distinct();
        assert_eq!(unique.into_vec(), vec![2, 1, 3]);
    }

    #[test]
    fn test_sorted_is_deferred_until_first_pull() {
        let pulls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&pulls);
        let mut values = vec![3, 1, 2].into_iter();
        let ordered = Nary::from_fn(move || {
            *counter.borrow_mut() += 1;
            values.next()
        })
        .sorted();
        assert_eq!(*pulls.borrow(), 0);
        assert_eq!(ordered.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_by_comparator() {
        let descending = Nary::from_sequence(vec![1, 3, 2]).sorted_by(|a, b| b.cmp(a));
        assert_eq!(descending.into_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_concat_empty_with_empty_is_identity() {
        let still_empty = Nary::<i32>::empty().concat(Nary::empty());
        assert!(still_empty.is_resolved());
        assert!(still_empty.is_absent());
    }

    #[test]
    fn test_concat_empty_with_values_wraps_other_side() {
        let joined = Nary::<i32>::empty().concat(Nary::of_many(1, vec![2]));
        assert_eq!(joined.into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_concat_stays_lazy_on_resolved_receivers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let joined = Nary::of(1)
            .inspect(move |v| sink.borrow_mut().push(*v))
            .concat(Nary::of(2));
        // Nothing has flowed yet: concat wraps without traversing.
        assert!(log.borrow().is_empty());
        assert_eq!(joined.into_vec(), vec![1, 2]);
        assert_eq!(*log.borrow(), vec![1]);
    }

    #[test]
    fn test_append_chains_a_value() {
        assert_eq!(
            Nary::from_sequence(vec![1, 2]).append(3).into_vec(),
            vec![1, 2, 3]
        );
    }
}
