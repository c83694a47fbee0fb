//! Structural comparison, hashing, and debug formatting.
//!
//! Equality and hashing are representation-blind: two naries are equal when
//! they yield equal elements in the same traversal order, and equal logical
//! content hashes identically whether it lives in the empty, exactly-one, or
//! sequence-backed representation. For an unresolved sequence-backed nary
//! this is a terminal traversal: the single-pass source is drained by the
//! comparison, exactly as it would be by any other terminal.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Kind, Nary, Verdict};

/// Read-only element stream over a nary's logical content. Resolved
/// representations are walked as borrowed slices; an unresolved source is
/// taken and drained.
enum Cursor<'a, T> {
    Cached(std::slice::Iter<'a, T>),
    Live(Box<dyn Iterator<Item = T>>),
}

enum Element<'a, T> {
    Borrowed(&'a T),
    Owned(T),
}

impl<T> Element<'_, T> {
    fn value(&self) -> &T {
        match self {
            Element::Borrowed(value) => value,
            Element::Owned(value) => value,
        }
    }
}

impl<'a, T> Cursor<'a, T> {
    fn over(nary: &'a Nary<T>) -> Self {
        match &nary.kind {
            Kind::Empty => Cursor::cached(&[]),
            Kind::One(value) => Cursor::cached(std::slice::from_ref(value)),
            Kind::Seq(cell) => match cell.verdict.get() {
                Some(Verdict::Empty) => Cursor::cached(&[]),
                Some(Verdict::One(value)) => Cursor::cached(std::slice::from_ref(value)),
                Some(Verdict::Excess(_)) => panic!(
                    "structural comparison: the underlying sequence of this nary was already consumed"
                ),
                None => Cursor::Live(
                    cell.source
                        .borrow_mut()
                        .take_lazy("structural comparison"),
                ),
            },
        }
    }

    fn cached(elements: &'a [T]) -> Self {
        Cursor::Cached(elements.iter())
    }

    fn next_element(&mut self) -> Option<Element<'a, T>> {
        match self {
            Cursor::Cached(elements) => elements.next().map(Element::Borrowed),
            Cursor::Live(elements) => elements.next().map(Element::Owned),
        }
    }
}

impl<T: PartialEq> PartialEq for Nary<T> {
    /// Element-by-element comparison in traversal order, short-circuiting
    /// the moment one side runs out of elements before the other.
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        let mut left = Cursor::over(self);
        let mut right = Cursor::over(other);
        loop {
            match (left.next_element(), right.next_element()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a.value() == b.value() => {}
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for Nary<T> {}

impl<T: Hash> Hash for Nary<T> {
    /// Ordered element feed with no length prefix, so that equal logical
    /// content hashes identically across representations and the empty nary
    /// feeds nothing at all.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut elements = Cursor::over(self);
        while let Some(element) = elements.next_element() {
            element.value().hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Nary<T> {
    /// Structural formatting that never traverses an unresolved source.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Empty => f.write_str("Nary::empty"),
            Kind::One(value) => f.debug_tuple("Nary::of").field(value).finish(),
            Kind::Seq(cell) => match cell.verdict.get() {
                None => f.write_str("Nary::from_sequence(<unresolved>)"),
                Some(Verdict::Empty) => f.write_str("Nary::from_sequence(<resolved empty>)"),
                Some(Verdict::One(value)) => {
                    f.debug_tuple("Nary::from_sequence").field(value).finish()
                }
                Some(Verdict::Excess(_)) => {
                    f.write_str("Nary::from_sequence(<more than one element>)")
                }
            },
        }
    }
}
