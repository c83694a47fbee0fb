//! The cardinality-polymorphic container type
//!
//! This module provides [`Nary<T>`], a single container that represents zero,
//! one, or many elements behind one API. It merges the two shapes callers
//! usually juggle separately, "a lazy sequence of elements" and "a container
//! of at most one element", so that a pipeline can be narrowed from unknown
//! cardinality down to at-most-one (or exactly one) without converting
//! between types.
//!
//! Internally a nary is one of three representations:
//!
//! - **empty**: no elements. Identity-preserving transformations return the
//!   empty representation directly, never allocate, and never invoke caller
//!   closures.
//! - **one**: exactly one owned value. Cardinality queries are constant and
//!   can never fail.
//! - **sequence-backed**: wraps an arbitrary, possibly infinite, single-pass
//!   iterator. Cardinality questions are deferred until a query forces
//!   *resolution*: at most two elements are pulled, exactly once per
//!   instance, and the verdict (empty, one, or too-many) is memoized for the
//!   life of the instance.
//!
//! # Examples
//!
//! ```
//! use nary::Nary;
//!
//! // Unknown cardinality at construction: nothing is consumed yet.
//! let found = Nary::from_sequence(vec![2, 4, 6])
//!     .filter(|n| n % 4 == 0);
//!
//! // Narrow to at-most-one; here the filter left exactly one element.
//! assert_eq!(found.get(), 4);
//! ```
//!
//! Narrowing a sequence that still holds two or more elements fails at the
//! moment of the query, not at construction, and the failure names the first
//! two conflicting elements:
//!
//! ```
//! use nary::Nary;
//!
//! let err = Nary::from_sequence(1..100).at_most_one().unwrap_err();
//! assert_eq!(err.first(), "1");
//! assert_eq!(err.second(), "2");
//! ```

use std::cell::{OnceCell, RefCell};
use std::fmt;

use crate::error::ExcessError;

mod cmp;
mod convert;
mod optional;
mod sequence;
#[cfg(feature = "serde")]
mod serde_impl;
mod terminal;

pub use convert::IntoIter;

/// A container of zero, one, or many elements.
///
/// `Nary<T>` exposes three overlapping capability sets:
///
/// - the **sequence view**: lazy, single-pass pipeline operations ([`map`],
///   [`filter`], [`concat`], ...) that delegate to [`std::iter`] and re-wrap
///   the result;
/// - the **at-most-one view**: queries ([`is_present`], [`get`],
///   [`value_or`], ...) that force the container to prove its cardinality is
///   zero or one, failing with an [`ExcessError`] otherwise;
/// - **terminals**: consuming operations ([`into_vec`], [`reduce`],
///   [`find_last`], ...) that drain the elements.
///
/// A sequence-backed nary resolves its cardinality lazily and exactly once;
/// see [`at_most_one`] for the protocol. Element types are owned (`'static`)
/// because the sequence representation erases its source behind a boxed
/// iterator.
///
/// [`map`]: Nary::map
/// [`filter`]: Nary::filter
/// [`concat`]: Nary::concat
/// [`is_present`]: Nary::is_present
/// [`get`]: Nary::get
/// [`value_or`]: Nary::value_or
/// [`into_vec`]: Nary::into_vec
/// [`reduce`]: Nary::reduce
/// [`find_last`]: Nary::find_last
/// [`at_most_one`]: Nary::at_most_one
pub struct Nary<T> {
    kind: Kind<T>,
}

enum Kind<T> {
    Empty,
    One(T),
    Seq(SeqCell<T>),
}

/// The sequence-backed state: a single-pass source plus the memoized
/// resolution verdict. Single-writer by assumption; the `RefCell`/`OnceCell`
/// pair makes the type `!Sync`, which is the documented concurrency model.
struct SeqCell<T> {
    source: RefCell<Source<T>>,
    verdict: OnceCell<Verdict<T>>,
}

enum Source<T> {
    Lazy(Box<dyn Iterator<Item = T>>),
    Drained,
}

enum Verdict<T> {
    Empty,
    One(T),
    Excess(ExcessError),
}

impl<T> Source<T> {
    /// Take the unconsumed iterator out, leaving the drained marker behind.
    ///
    /// Panics when the source was already consumed: single-pass sequences
    /// must not be traversed twice outside the memoized resolution path.
    fn take_lazy(&mut self, operation: &'static str) -> Box<dyn Iterator<Item = T>> {
        match std::mem::replace(self, Source::Drained) {
            Source::Lazy(elements) => elements,
            Source::Drained => panic!(
                "{operation}: the underlying sequence of this nary was already consumed"
            ),
        }
    }

    fn into_lazy(self, operation: &'static str) -> Box<dyn Iterator<Item = T>> {
        match self {
            Source::Lazy(elements) => elements,
            Source::Drained => panic!(
                "{operation}: the underlying sequence of this nary was already consumed"
            ),
        }
    }
}

impl<T> SeqCell<T> {
    fn new(source: Box<dyn Iterator<Item = T>>) -> Self {
        SeqCell {
            source: RefCell::new(Source::Lazy(source)),
            verdict: OnceCell::new(),
        }
    }

    /// Resolve the cardinality verdict, pulling at most two elements from the
    /// source on the first call and answering from the cache afterwards.
    fn resolved(&self, operation: &'static str) -> &Verdict<T>
    where
        T: fmt::Debug,
    {
        self.verdict.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(operation, "resolving cardinality of a sequence-backed nary");
            let mut elements = self.source.borrow_mut().take_lazy(operation);
            match elements.next() {
                None => Verdict::Empty,
                Some(first) => match elements.next() {
                    None => Verdict::One(first),
                    Some(second) => {
                        Verdict::Excess(ExcessError::new(operation, &first, &second))
                    }
                },
            }
        })
    }

    /// Consuming counterpart of [`SeqCell::resolved`]: reuses the cached
    /// verdict when present, otherwise performs the two-element pull on the
    /// owned source. Panics with the excess diagnostic when a second element
    /// is proven.
    fn into_at_most_one(self, operation: &'static str) -> Option<T>
    where
        T: fmt::Debug,
    {
        match self.verdict.into_inner() {
            Some(Verdict::Empty) => None,
            Some(Verdict::One(value)) => Some(value),
            Some(Verdict::Excess(excess)) => panic!("{excess}"),
            None => {
                let mut elements = self.source.into_inner().into_lazy(operation);
                match elements.next() {
                    None => None,
                    Some(first) => match elements.next() {
                        None => Some(first),
                        Some(second) => {
                            panic!("{}", ExcessError::new(operation, &first, &second))
                        }
                    },
                }
            }
        }
    }

    /// Raw element view of the owned state. The cached verdict is the
    /// sanctioned replacement for an exhausted source, so a resolved cell
    /// re-exposes its narrowed content; an excess verdict has lost its
    /// elements and fails like any other reuse of a consumed sequence.
    fn into_elements(self, operation: &'static str) -> IntoIter<T> {
        match self.verdict.into_inner() {
            None => IntoIter::boxed(self.source.into_inner().into_lazy(operation)),
            Some(Verdict::Empty) => IntoIter::empty(),
            Some(Verdict::One(value)) => IntoIter::one(value),
            Some(Verdict::Excess(_)) => panic!(
                "{operation}: the underlying sequence of this nary was already consumed"
            ),
        }
    }
}

impl<T> Nary<T> {
    /// Create a nary holding no elements.
    ///
    /// The empty representation is a zero-sized variant: identity-preserving
    /// operations return it as-is without allocating, and no caller closure
    /// is ever invoked on it.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let none: Nary<i32> = Nary::empty();
    /// assert!(none.is_absent());
    /// ```
    pub fn empty() -> Self {
        Nary { kind: Kind::Empty }
    }

    /// Create a nary holding exactly one value.
    ///
    /// Cardinality queries on the result are constant and can never fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::of(5).map(|v| v + 1).get(), 6);
    /// ```
    pub fn of(value: T) -> Self {
        Nary {
            kind: Kind::One(value),
        }
    }

    /// Create a nary from an optional value: present maps to exactly-one,
    /// absent maps to empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert!(Nary::of_option(Some(1)).is_present());
    /// assert!(Nary::of_option(None::<i32>).is_absent());
    /// ```
    pub fn of_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Nary::of(value),
            None => Nary::empty(),
        }
    }

    /// Create a nary from a first value and any number of additional values.
    ///
    /// With no additional values the result is the exactly-one
    /// representation; otherwise it is a lazy concatenation of all of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::of_many(1, vec![]).get(), 1);
    /// assert_eq!(Nary::of_many(1, vec![2, 3]).into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn of_many(first: T, rest: Vec<T>) -> Self
    where
        T: 'static,
    {
        if rest.is_empty() {
            Nary::of(first)
        } else {
            Nary::sequence_backed(Box::new(std::iter::once(first).chain(rest)))
        }
    }

    /// Create a nary wrapping a lazy sequence of unknown cardinality.
    ///
    /// Nothing is consumed at construction; the source is pulled only when a
    /// terminal operation or an at-most-one query runs. The source is treated
    /// as single-pass, and key-value collections come in through their
    /// natural `IntoIterator` of pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use nary::Nary;
    ///
    /// let scores = BTreeMap::from([("ada", 10), ("grace", 12)]);
    /// let names: Vec<&str> = Nary::from_sequence(scores)
    ///     .map(|(name, _)| name)
    ///     .into_vec();
    /// assert_eq!(names, vec!["ada", "grace"]);
    /// ```
    pub fn from_sequence<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Nary::sequence_backed(Box::new(source.into_iter()))
    }

    /// Create a nary from a pull-style callback, bridging sources that only
    /// expose "give me the next value or nothing" iteration.
    ///
    /// The adapter reports unknown size (`size_hint` of `(0, None)`) and
    /// preserves the order in which the callback produces values.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let mut next = 0;
    /// let firsts = Nary::from_fn(move || {
    ///     next += 1;
    ///     (next <= 3).then_some(next)
    /// });
    /// assert_eq!(firsts.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn from_fn<F>(pull: F) -> Self
    where
        F: FnMut() -> Option<T> + 'static,
    {
        Nary::sequence_backed(Box::new(std::iter::from_fn(pull)))
    }

    pub(crate) fn sequence_backed(source: Box<dyn Iterator<Item = T>>) -> Self {
        Nary {
            kind: Kind::Seq(SeqCell::new(source)),
        }
    }

    /// Whether this nary already knows its own cardinality.
    ///
    /// True for the empty and exactly-one representations, and for a
    /// sequence-backed nary after a query has forced resolution. Useful to
    /// observe that an operation short-circuited instead of building a lazy
    /// wrapper.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert!(Nary::<i32>::empty().is_resolved());
    /// assert!(Nary::of(1).is_resolved());
    ///
    /// let lazy = Nary::from_sequence(vec![1]);
    /// assert!(!lazy.is_resolved());
    /// lazy.is_present();
    /// assert!(lazy.is_resolved());
    /// ```
    pub fn is_resolved(&self) -> bool {
        match &self.kind {
            Kind::Empty | Kind::One(_) => true,
            Kind::Seq(cell) => cell.verdict.get().is_some(),
        }
    }

    /// The at-most-one view shared by every query in the optional family.
    /// Resolution is forced (and memoized) here for sequence-backed
    /// instances.
    pub(crate) fn at_most_one_view(
        &self,
        operation: &'static str,
    ) -> Result<Option<&T>, ExcessError>
    where
        T: fmt::Debug,
    {
        match &self.kind {
            Kind::Empty => Ok(None),
            Kind::One(value) => Ok(Some(value)),
            Kind::Seq(cell) => match cell.resolved(operation) {
                Verdict::Empty => Ok(None),
                Verdict::One(value) => Ok(Some(value)),
                Verdict::Excess(excess) => Err(excess.clone()),
            },
        }
    }

    /// Consuming at-most-one narrowing; panics with the excess diagnostic
    /// when a second element is proven.
    pub(crate) fn into_at_most_one(self, operation: &'static str) -> Option<T>
    where
        T: fmt::Debug,
    {
        match self.kind {
            Kind::Empty => None,
            Kind::One(value) => Some(value),
            Kind::Seq(cell) => cell.into_at_most_one(operation),
        }
    }

    /// The raw sequence view backing `IntoIterator` and the pipeline
    /// operations.
    pub(crate) fn into_elements_for(self, operation: &'static str) -> IntoIter<T> {
        match self.kind {
            Kind::Empty => IntoIter::empty(),
            Kind::One(value) => IntoIter::one(value),
            Kind::Seq(cell) => cell.into_elements(operation),
        }
    }
}
