//! Consuming terminal operations.
//!
//! Terminals take `self` by value: once a nary has been drained there is
//! nothing left to traverse, and ownership makes that a compile-time fact
//! rather than a runtime one. Aggregations that may or may not produce a
//! value (`reduce`, `min`, `find_first`, ...) return another [`Nary`] so the
//! result can flow straight back into the same narrowing algebra; on the
//! empty and exactly-one representations they are the identity, there being
//! nothing to compare against.

use std::cmp::Ordering;

use super::{Kind, Nary};

impl<T> Nary<T> {
    /// Drain every element into a `Vec`, in traversal order.
    ///
    /// Never returns when the backing sequence is infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::of_many(1, vec![2]).into_vec(), vec![1, 2]);
    /// assert_eq!(Nary::<i32>::empty().into_vec(), Vec::<i32>::new());
    /// ```
    pub fn into_vec(self) -> Vec<T> {
        self.into_elements_for("into_vec").collect()
    }

    /// Count the elements, draining the sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::from_sequence(vec![1, 2, 3]).count(), 3);
    /// ```
    pub fn count(self) -> usize {
        self.into_elements_for("count").count()
    }

    /// Run `f` on every element in traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let mut total = 0;
    /// Nary::from_sequence(vec![1, 2, 3]).for_each(|v| total += v);
    /// assert_eq!(total, 6);
    /// ```
    pub fn for_each<F>(self, f: F)
    where
        F: FnMut(T),
    {
        self.into_elements_for("for_each").for_each(f);
    }

    /// Fold every element into an accumulator, left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let sum = Nary::from_sequence(vec![1, 2, 3]).fold(0, |acc, v| acc + v);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.into_elements_for("fold").fold(init, f)
    }

    /// Combine the elements pairwise, left to right.
    ///
    /// Empty and exactly-one naries are returned unchanged without invoking
    /// `f`; a drained sequence resolves to the combined value or to empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::from_sequence(vec![1, 2, 3]).reduce(|a, b| a + b).get(), 6);
    /// ```
    pub fn reduce<F>(self, f: F) -> Nary<T>
    where
        F: FnMut(T, T) -> T,
    {
        if matches!(self.kind, Kind::Empty | Kind::One(_)) {
            return self;
        }
        Nary::of_option(self.into_elements_for("reduce").reduce(f))
    }

    /// The smallest element in natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::from_sequence(vec![3, 1, 2]).min().get(), 1);
    /// ```
    pub fn min(self) -> Nary<T>
    where
        T: Ord,
    {
        if matches!(self.kind, Kind::Empty | Kind::One(_)) {
            return self;
        }
        Nary::of_option(self.into_elements_for("min").min())
    }

    /// The largest element in natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::from_sequence(vec![3, 1, 2]).max().get(), 3);
    /// ```
    pub fn max(self) -> Nary<T>
    where
        T: Ord,
    {
        if matches!(self.kind, Kind::Empty | Kind::One(_)) {
            return self;
        }
        Nary::of_option(self.into_elements_for("max").max())
    }

    /// The smallest element under a caller-supplied comparator.
    pub fn min_by<F>(self, compare: F) -> Nary<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if matches!(self.kind, Kind::Empty | Kind::One(_)) {
            return self;
        }
        Nary::of_option(self.into_elements_for("min_by").min_by(compare))
    }

    /// The largest element under a caller-supplied comparator.
    pub fn max_by<F>(self, compare: F) -> Nary<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if matches!(self.kind, Kind::Empty | Kind::One(_)) {
            return self;
        }
        Nary::of_option(self.into_elements_for("max_by").max_by(compare))
    }

    /// The first element in traversal order.
    ///
    /// Short-circuits: at most one element is pulled from the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::from_sequence(1..).find_first().get(), 1);
    /// ```
    pub fn find_first(self) -> Nary<T> {
        if matches!(self.kind, Kind::Empty | Kind::One(_)) {
            return self;
        }
        let mut elements = self.into_elements_for("find_first");
        Nary::of_option(elements.next())
    }

    /// The last element in traversal order: a fold that keeps only the most
    /// recent element. Never returns on infinite sequences.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::from_sequence(vec![1, 2, 3]).find_last().get(), 3);
    /// ```
    pub fn find_last(self) -> Nary<T> {
        if matches!(self.kind, Kind::Empty | Kind::One(_)) {
            return self;
        }
        Nary::of_option(self.into_elements_for("find_last").last())
    }

    /// Whether any element matches the predicate. Short-circuits on the
    /// first match; `false` on empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert!(Nary::from_sequence(vec![1, 2]).any_match(|v| *v > 1));
    /// assert!(!Nary::<i32>::empty().any_match(|_| true));
    /// ```
    pub fn any_match<F>(self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.into_elements_for("any_match")
            .any(|element| predicate(&element))
    }

    /// Whether every element matches the predicate. Short-circuits on the
    /// first mismatch; vacuously `true` on empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert!(Nary::from_sequence(vec![2, 4]).all_match(|v| v % 2 == 0));
    /// assert!(Nary::<i32>::empty().all_match(|_| false));
    /// ```
    pub fn all_match<F>(self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.into_elements_for("all_match")
            .all(|element| predicate(&element))
    }

    /// Whether no element matches the predicate. The complement of
    /// [`Nary::any_match`]; vacuously `true` on empty.
    pub fn none_match<F>(self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        !self
            .into_elements_for("none_match")
            .any(|element| predicate(&element))
    }
}
