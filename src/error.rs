//! Cardinality failure taxonomy
//!
//! This module provides the two failure kinds a [`Nary`](crate::Nary) can
//! produce when a cardinality assumption is violated at the moment of
//! traversal:
//!
//! - [`AbsenceError`]: a value was required but none is present.
//! - [`ExcessError`]: at most one element was assumed, but traversal proved
//!   a second one exists.
//!
//! Both carry a human-readable message naming the requiring operation;
//! [`ExcessError`] additionally embeds the first two conflicting elements in
//! traversal order as a diagnostic payload. The panicking query family on
//! `Nary` panics with exactly the `Display` text of these types, so the same
//! wording is observable whether the caller goes through the panicking or the
//! `Result`-returning entry points.
//!
//! # Examples
//!
//! ```
//! use nary::Nary;
//!
//! let numbers = Nary::from_sequence(vec![1, 2, 3]);
//! let excess = numbers.at_most_one().unwrap_err();
//!
//! assert_eq!(excess.first(), "1");
//! assert_eq!(excess.second(), "2");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Error raised when a value is required but none is present.
///
/// Produced by value-extracting operations invoked on an empty nary, such as
/// `get` or `try_get`. The or-else family never produces this error; it
/// supplies a fallback instead.
///
/// # Examples
///
/// ```
/// use nary::{CardinalityError, Nary};
///
/// let err = Nary::<i32>::empty().try_get().unwrap_err();
/// assert!(matches!(err, CardinalityError::Absent(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsenceError {
    operation: &'static str,
}

impl AbsenceError {
    /// Create an absence error naming the requiring operation.
    pub fn new(operation: &'static str) -> Self {
        AbsenceError { operation }
    }

    /// The operation that required a present value.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl fmt::Display for AbsenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected a present value but this nary is empty",
            self.operation
        )
    }
}

impl StdError for AbsenceError {}

/// Error raised when traversal proves at least two elements exist where at
/// most one was assumed.
///
/// The first two elements encountered in traversal order are rendered into
/// the error at resolution time, regardless of how many elements follow.
/// Elements from further along the sequence are never sampled.
///
/// # Examples
///
/// ```
/// use nary::Nary;
///
/// let err = Nary::from_sequence(vec!["a", "b", "c"]).at_most_one().unwrap_err();
/// assert_eq!(err.operation(), "at_most_one");
/// assert_eq!(err.first(), "\"a\"");
/// assert_eq!(err.second(), "\"b\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcessError {
    operation: &'static str,
    first: String,
    second: String,
}

impl ExcessError {
    /// Create an excess error from the requiring operation and the first two
    /// conflicting elements in traversal order.
    pub fn new(operation: &'static str, first: impl fmt::Debug, second: impl fmt::Debug) -> Self {
        ExcessError {
            operation,
            first: format!("{first:?}"),
            second: format!("{second:?}"),
        }
    }

    /// The operation that assumed at most one element.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// The first conflicting element, rendered with `Debug`.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The second conflicting element, rendered with `Debug`.
    pub fn second(&self) -> &str {
        &self.second
    }
}

impl fmt::Display for ExcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected at most one element but the sequence produced at least two: {}, {}",
            self.operation, self.first, self.second
        )
    }
}

impl StdError for ExcessError {}

/// Either of the two cardinality failure kinds.
///
/// Returned by `Result`-based queries such as [`Nary::try_get`](crate::Nary::try_get),
/// where both absence and excess are recoverable outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardinalityError {
    /// A value was required but none is present.
    Absent(AbsenceError),
    /// More than one element was present when at most one was assumed.
    Excess(ExcessError),
}

impl fmt::Display for CardinalityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardinalityError::Absent(err) => err.fmt(f),
            CardinalityError::Excess(err) => err.fmt(f),
        }
    }
}

impl StdError for CardinalityError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CardinalityError::Absent(err) => Some(err),
            CardinalityError::Excess(err) => Some(err),
        }
    }
}

impl From<AbsenceError> for CardinalityError {
    fn from(err: AbsenceError) -> Self {
        CardinalityError::Absent(err)
    }
}

impl From<ExcessError> for CardinalityError {
    fn from(err: ExcessError) -> Self {
        CardinalityError::Excess(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absence_message_names_operation() {
        let err = AbsenceError::new("get");
        assert_eq!(
            err.to_string(),
            "get: expected a present value but this nary is empty"
        );
        assert_eq!(err.operation(), "get");
    }

    #[test]
    fn test_excess_message_lists_first_two_elements() {
        let err = ExcessError::new("get", 1, 2);
        assert_eq!(
            err.to_string(),
            "get: expected at most one element but the sequence produced at least two: 1, 2"
        );
        assert_eq!(err.first(), "1");
        assert_eq!(err.second(), "2");
    }

    #[test]
    fn test_excess_renders_elements_with_debug() {
        let err = ExcessError::new("value", "a", "b");
        assert_eq!(err.first(), "\"a\"");
        assert_eq!(err.second(), "\"b\"");
    }

    #[test]
    fn test_cardinality_error_delegates_display() {
        let absent: CardinalityError = AbsenceError::new("try_get").into();
        let excess: CardinalityError = ExcessError::new("try_get", 1, 2).into();
        assert!(absent.to_string().contains("empty"));
        assert!(excess.to_string().contains("1, 2"));
    }

    #[test]
    fn test_cardinality_error_exposes_source() {
        use std::error::Error;

        let err: CardinalityError = AbsenceError::new("get").into();
        assert!(err.source().is_some());
    }
}
