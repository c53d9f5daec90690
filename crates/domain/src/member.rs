// crates/domain/src/member.rs
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::registry::Domain;

/// One enumerated member of the domain `D`: a raw value plus its display
/// label. Immutable after construction.
///
/// The phantom parameter ties a member to its owning domain, so a
/// `Member<Hour>` and a `Member<Minute>` with the same value are different
/// types and can never compare equal. Within one domain, equality, ordering
/// and hashing go by `value` alone; labels are derived data.
///
/// There is no public constructor. Members are minted only by the registry
/// build path, so every member of a range domain is guaranteed to come from
/// its declared progression.
pub struct Member<D: Domain> {
    value: i64,
    label: String,
    _owner: PhantomData<fn() -> D>,
}

impl<D: Domain> Member<D> {
    pub(crate) fn new(value: i64, label: String) -> Self {
        Self {
            value,
            label,
            _owner: PhantomData,
        }
    }

    /// Raw discriminator, unique within `D`.
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Human-readable label associated with the value.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<D: Domain> Clone for Member<D> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            label: self.label.clone(),
            _owner: PhantomData,
        }
    }
}

impl<D: Domain> PartialEq for Member<D> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D: Domain> Eq for Member<D> {}

impl<D: Domain> PartialOrd for Member<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Domain> Ord for Member<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<D: Domain> Hash for Member<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<D: Domain> fmt::Debug for Member<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("domain", &D::NAME)
            .field("value", &self.value)
            .field("label", &self.label)
            .finish()
    }
}

impl<D: Domain> fmt::Display for Member<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

// Serialize only. Deserializing would mint members outside the registry
// build path, which the construction restriction forbids.
impl<D: Domain> Serialize for Member<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Member", 2)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("label", &self.label)?;
        state.end()
    }
}
