//! The at-most-one view: presence queries, value extraction, the or-else
//! family, and optional-context transforms.
//!
//! Every operation here forces cardinality resolution on sequence-backed
//! instances (see the module docs of [`crate::nary`]): at most two elements
//! are pulled from the source, exactly once, and the verdict is reused by
//! all later queries. Operations that assume at most one element fail with
//! an excess diagnostic when a second element is proven; the or-else family
//! tolerates absence but is just as strict about excess.

use std::fmt;

use super::Nary;
use crate::error::{AbsenceError, CardinalityError, ExcessError};

impl<T> Nary<T> {
    /// Narrow this nary to at most one element.
    ///
    /// This is the sanctioned coercion: `Ok(None)` proves emptiness,
    /// `Ok(Some(_))` proves exactly one element, and `Err(_)` proves at
    /// least two, reporting the first two in traversal order. For a
    /// sequence-backed nary the verdict is computed once and memoized;
    /// subsequent queries answer from the cache without touching the
    /// exhausted source again.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::<i32>::empty().at_most_one(), Ok(None));
    /// assert_eq!(Nary::of(3).at_most_one(), Ok(Some(&3)));
    /// assert!(Nary::from_sequence(vec![1, 2]).at_most_one().is_err());
    /// ```
    pub fn at_most_one(&self) -> Result<Option<&T>, ExcessError>
    where
        T: fmt::Debug,
    {
        self.at_most_one_view("at_most_one")
    }

    /// Whether exactly one element is present.
    ///
    /// # Panics
    ///
    /// Panics with the excess diagnostic when the sequence proves to hold
    /// two or more elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert!(Nary::of(1).is_present());
    /// assert!(!Nary::<i32>::empty().is_present());
    /// ```
    pub fn is_present(&self) -> bool
    where
        T: fmt::Debug,
    {
        match self.at_most_one_view("is_present") {
            Ok(value) => value.is_some(),
            Err(excess) => panic!("{excess}"),
        }
    }

    /// Whether no element is present. The complement of [`Nary::is_present`].
    ///
    /// # Panics
    ///
    /// Panics with the excess diagnostic when the sequence proves to hold
    /// two or more elements.
    pub fn is_absent(&self) -> bool
    where
        T: fmt::Debug,
    {
        match self.at_most_one_view("is_absent") {
            Ok(value) => value.is_none(),
            Err(excess) => panic!("{excess}"),
        }
    }

    /// Extract the single value.
    ///
    /// # Panics
    ///
    /// Panics with the absence diagnostic when empty, and with the excess
    /// diagnostic when the sequence proves to hold two or more elements.
    /// Use [`Nary::try_get`] or the or-else family to recover instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::of(5).get(), 5);
    /// ```
    ///
    /// ```should_panic
    /// use nary::Nary;
    ///
    /// Nary::<i32>::empty().get(); // panics: nothing to return
    /// ```
    pub fn get(&self) -> T
    where
        T: Clone + fmt::Debug,
    {
        match self.at_most_one_view("get") {
            Ok(Some(value)) => value.clone(),
            Ok(None) => panic!("{}", AbsenceError::new("get")),
            Err(excess) => panic!("{excess}"),
        }
    }

    /// Extract the single value, surfacing both failure kinds as values.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::{CardinalityError, Nary};
    ///
    /// assert_eq!(Nary::of(5).try_get(), Ok(5));
    /// assert!(matches!(
    ///     Nary::<i32>::empty().try_get(),
    ///     Err(CardinalityError::Absent(_))
    /// ));
    /// assert!(matches!(
    ///     Nary::from_sequence(vec![1, 2]).try_get(),
    ///     Err(CardinalityError::Excess(_))
    /// ));
    /// ```
    pub fn try_get(&self) -> Result<T, CardinalityError>
    where
        T: Clone + fmt::Debug,
    {
        match self.at_most_one_view("try_get") {
            Ok(Some(value)) => Ok(value.clone()),
            Ok(None) => Err(AbsenceError::new("try_get").into()),
            Err(excess) => Err(excess.into()),
        }
    }

    /// Borrow the single value, or `None` when empty.
    ///
    /// # Panics
    ///
    /// Panics with the excess diagnostic when the sequence proves to hold
    /// two or more elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::of("x").value(), Some(&"x"));
    /// assert_eq!(Nary::<i32>::empty().value(), None);
    /// ```
    pub fn value(&self) -> Option<&T>
    where
        T: fmt::Debug,
    {
        match self.at_most_one_view("value") {
            Ok(value) => value,
            Err(excess) => panic!("{excess}"),
        }
    }

    /// The single value, or `default` when empty.
    ///
    /// Absence is tolerated; excess is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::<i32>::empty().value_or(7), 7);
    /// assert_eq!(Nary::of(1).value_or(7), 1);
    /// ```
    pub fn value_or(&self, default: T) -> T
    where
        T: Clone + fmt::Debug,
    {
        match self.at_most_one_view("value_or") {
            Ok(Some(value)) => value.clone(),
            Ok(None) => default,
            Err(excess) => panic!("{excess}"),
        }
    }

    /// The single value, or the result of `fallback` when empty.
    ///
    /// `fallback` is invoked only on absence.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::<i32>::empty().value_or_else(|| 7), 7);
    /// assert_eq!(Nary::of(1).value_or_else(|| unreachable!()), 1);
    /// ```
    pub fn value_or_else<F>(&self, fallback: F) -> T
    where
        T: Clone + fmt::Debug,
        F: FnOnce() -> T,
    {
        match self.at_most_one_view("value_or_else") {
            Ok(Some(value)) => value.clone(),
            Ok(None) => fallback(),
            Err(excess) => panic!("{excess}"),
        }
    }

    /// The single value, or the caller-supplied error when empty.
    ///
    /// The error supplier decides what absence means to the caller; excess
    /// still fails with the library diagnostic because it violates the
    /// at-most-one narrowing rather than mere presence.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Boom(&'static str);
    ///
    /// let missing: Nary<i32> = Nary::empty();
    /// assert_eq!(missing.value_or_fail(|| Boom("boom")), Err(Boom("boom")));
    /// assert_eq!(Nary::of(1).value_or_fail(|| Boom("boom")), Ok(1));
    /// ```
    pub fn value_or_fail<E, F>(&self, error: F) -> Result<T, E>
    where
        T: Clone + fmt::Debug,
        F: FnOnce() -> E,
    {
        match self.at_most_one_view("value_or_fail") {
            Ok(Some(value)) => Ok(value.clone()),
            Ok(None) => Err(error()),
            Err(excess) => panic!("{excess}"),
        }
    }

    /// Run `consumer` with the value when one is present; do nothing when
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let mut seen = None;
    /// Nary::of(3).if_present(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(3));
    /// ```
    pub fn if_present<F>(&self, consumer: F)
    where
        T: fmt::Debug,
        F: FnOnce(&T),
    {
        match self.at_most_one_view("if_present") {
            Ok(Some(value)) => consumer(value),
            Ok(None) => {}
            Err(excess) => panic!("{excess}"),
        }
    }

    /// Run `action` when no element is present; do nothing otherwise.
    pub fn if_absent<F>(&self, action: F)
    where
        T: fmt::Debug,
        F: FnOnce(),
    {
        match self.at_most_one_view("if_absent") {
            Ok(None) => action(),
            Ok(Some(_)) => {}
            Err(excess) => panic!("{excess}"),
        }
    }

    /// Convert to the host optional type by cloning the resolved value.
    ///
    /// Round-trips with [`Nary::of_option`]: a present option comes back
    /// present and an absent one comes back absent.
    ///
    /// # Panics
    ///
    /// Panics with the excess diagnostic when the sequence proves to hold
    /// two or more elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::of_option(Some(2)).to_option(), Some(2));
    /// assert_eq!(Nary::of_option(None::<i32>).to_option(), None);
    /// ```
    pub fn to_option(&self) -> Option<T>
    where
        T: Clone + fmt::Debug,
    {
        match self.at_most_one_view("to_option") {
            Ok(value) => value.cloned(),
            Err(excess) => panic!("{excess}"),
        }
    }

    /// Consume this nary into the host optional type.
    ///
    /// # Panics
    ///
    /// Panics with the excess diagnostic when the sequence proves to hold
    /// two or more elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert_eq!(Nary::from_sequence(vec![4]).into_option(), Some(4));
    /// ```
    pub fn into_option(self) -> Option<T>
    where
        T: fmt::Debug,
    {
        self.into_at_most_one("into_option")
    }

    /// Narrow to at most one element, then transform it.
    ///
    /// A `None` result collapses to empty, following optional semantics.
    /// Contrast with [`Nary::map`], where an `Option` result stays an
    /// element, and [`Nary::filter_map`], which drops `None` results in
    /// sequence context without narrowing.
    ///
    /// # Panics
    ///
    /// Panics with the excess diagnostic when the sequence proves to hold
    /// two or more elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let halved = Nary::of(8).map_optional(|v: i32| v.checked_div(2));
    /// assert_eq!(halved.get(), 4);
    ///
    /// let gone = Nary::of(8).map_optional(|v: i32| v.checked_div(0));
    /// assert!(gone.is_absent());
    /// ```
    pub fn map_optional<U, F>(self, f: F) -> Nary<U>
    where
        T: fmt::Debug,
        F: FnOnce(T) -> Option<U>,
    {
        match self.into_at_most_one("map_optional") {
            Some(value) => Nary::of_option(f(value)),
            None => Nary::empty(),
        }
    }

    /// Narrow to at most one element, then keep it only when the predicate
    /// holds.
    ///
    /// # Panics
    ///
    /// Panics with the excess diagnostic when the sequence proves to hold
    /// two or more elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// assert!(Nary::of(3).filter_optional(|v| *v > 2).is_present());
    /// assert!(Nary::of(1).filter_optional(|v| *v > 2).is_absent());
    /// ```
    pub fn filter_optional<F>(self, predicate: F) -> Nary<T>
    where
        T: fmt::Debug,
        F: FnOnce(&T) -> bool,
    {
        match self.into_at_most_one("filter_optional") {
            Some(value) if predicate(&value) => Nary::of(value),
            _ => Nary::empty(),
        }
    }

    /// Narrow to at most one element, then splice in the nary produced by
    /// `f` without an extra wrapping layer.
    ///
    /// # Panics
    ///
    /// Panics with the excess diagnostic when the sequence proves to hold
    /// two or more elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use nary::Nary;
    ///
    /// let widened = Nary::of(1).flat_map_optional(|v| Nary::of_many(v, vec![v + 1]));
    /// assert_eq!(widened.into_vec(), vec![1, 2]);
    /// ```
    pub fn flat_map_optional<U, F>(self, f: F) -> Nary<U>
    where
        T: fmt::Debug,
        F: FnOnce(T) -> Nary<U>,
    {
        match self.into_at_most_one("flat_map_optional") {
            Some(value) => f(value),
            None => Nary::empty(),
        }
    }
}
