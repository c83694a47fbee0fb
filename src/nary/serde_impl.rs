//! Serde support for `Nary`.
//!
//! A nary serializes as a sequence of its elements. For an unresolved
//! sequence-backed instance that is a terminal traversal: the single-pass
//! source is drained into the serializer, exactly as `into_vec` would drain
//! it. Deserialization reads a sequence and picks the representation
//! matching the observed cardinality, so a round-trip comes back resolved.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, Serializer};

use super::{Kind, Nary, Source, Verdict};

impl<T: Serialize> Serialize for Nary<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.kind {
            Kind::Empty => serializer.collect_seq(std::iter::empty::<&T>()),
            Kind::One(value) => serializer.collect_seq(std::iter::once(value)),
            Kind::Seq(cell) => match cell.verdict.get() {
                Some(Verdict::Empty) => serializer.collect_seq(std::iter::empty::<&T>()),
                Some(Verdict::One(value)) => serializer.collect_seq(std::iter::once(value)),
                Some(Verdict::Excess(_)) => Err(S::Error::custom(
                    "cannot serialize a nary whose underlying sequence was already consumed",
                )),
                None => {
                    let source =
                        std::mem::replace(&mut *cell.source.borrow_mut(), Source::Drained);
                    match source {
                        Source::Lazy(elements) => serializer.collect_seq(elements),
                        Source::Drained => Err(S::Error::custom(
                            "cannot serialize a nary whose underlying sequence was already consumed",
                        )),
                    }
                }
            },
        }
    }
}

impl<'de, T> Deserialize<'de> for Nary<T>
where
    T: Deserialize<'de> + 'static,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut elements = Vec::<T>::deserialize(deserializer)?;
        Ok(match elements.len() {
            0 => Nary::empty(),
            1 => Nary::of(elements.remove(0)),
            _ => Nary::from_sequence(elements),
        })
    }
}
