//! # Nary
//!
//! > *One type for zero, one, or many*
//!
//! A Rust library for cardinality-polymorphic lazy containers.
//!
//! ## Philosophy
//!
//! Pipelines constantly shuffle between "a sequence of elements" and "a
//! container of at most one element", converting back and forth at every
//! seam. **Nary** merges the two shapes into a single type:
//! - **sequence view** = lazy, single-pass pipeline operations delegating to
//!   [`std::iter`]
//! - **at-most-one view** = optional-style queries, available the moment the
//!   container proves (or is asked to prove) that it holds at most one
//!   element
//!
//! Cardinality is enforced at the moment of traversal, not at construction:
//! a sequence of unknown length can be built, transformed, and passed around
//! freely, and only the query that actually assumes "at most one" pulls the
//! two elements needed to check. The verdict is memoized, so a narrowed
//! sequence behaves like a plain optional from then on.
//!
//! ## Quick Example
//!
//! ```rust
//! use nary::Nary;
//!
//! fn find_admin(names: Vec<&'static str>) -> Nary<&'static str> {
//!     Nary::from_sequence(names).filter(|name| name.starts_with("admin:"))
//! }
//!
//! // Zero matches: absence is tolerated by the or-else family.
//! let nobody = find_admin(vec!["ada", "grace"]);
//! assert_eq!(nobody.value_or("admin:root"), "admin:root");
//!
//! // Exactly one match: narrowing succeeds.
//! let one = find_admin(vec!["ada", "admin:eve"]);
//! assert_eq!(one.get(), "admin:eve");
//!
//! // Two matches: narrowing fails at the query, naming both offenders.
//! let two = find_admin(vec!["admin:eve", "admin:mallory"]);
//! let err = two.at_most_one().unwrap_err();
//! assert_eq!(err.first(), "\"admin:eve\"");
//! assert_eq!(err.second(), "\"admin:mallory\"");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialize a nary as a sequence and deserialize into the
//!   representation matching the observed cardinality
//! - `tracing`: emit trace events when a sequence-backed nary resolves its
//!   cardinality
//! - `proptest`: an [`Arbitrary`](https://docs.rs/proptest) impl generating
//!   all three representations

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod nary;
pub mod testing;

// Re-exports
pub use error::{AbsenceError, CardinalityError, ExcessError};
pub use nary::{IntoIter, Nary};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{AbsenceError, CardinalityError, ExcessError};
    pub use crate::nary::{IntoIter, Nary};
}
