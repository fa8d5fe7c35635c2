//! The reference-number newtype.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::space::RefTag;

/// A reference number scoped to one definition space.
///
/// Reference numbers identify definition records. Each space is independent:
/// a string reference and a region reference may carry the same numeric value
/// without conflict. The `Tag` parameter keeps the spaces apart at compile
/// time; mixing them up is a type error, not a runtime surprise.
///
/// The maximum representable value is reserved as the *undefined* sentinel,
/// meaning "no definition".
pub struct Reference<Tag> {
    value: u64,
    _space: PhantomData<Tag>,
}

impl<Tag: RefTag> Reference<Tag> {
    /// The reserved sentinel value meaning "no definition".
    pub const UNDEFINED_VALUE: u64 = u64::MAX;

    /// Creates a reference with the given numeric value.
    pub const fn new(value: u64) -> Self {
        Self { value, _space: PhantomData }
    }

    /// Returns the raw numeric value.
    pub const fn get(self) -> u64 {
        self.value
    }

    /// Returns the space's undefined sentinel reference.
    pub const fn undefined() -> Self {
        Self::new(Self::UNDEFINED_VALUE)
    }

    /// Returns whether this reference is the undefined sentinel.
    pub const fn is_undefined(self) -> bool {
        self.value == Self::UNDEFINED_VALUE
    }
}

// The derives would demand bounds on `Tag`; a reference is plain data no
// matter what its tag is, so these are spelled out by hand.

impl<Tag> Clone for Reference<Tag> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Tag> Copy for Reference<Tag> {}

impl<Tag> PartialEq for Reference<Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<Tag> Eq for Reference<Tag> {}

impl<Tag> PartialOrd for Reference<Tag> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Tag> Ord for Reference<Tag> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<Tag> Hash for Reference<Tag> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<Tag: RefTag> fmt::Debug for Reference<Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            write!(f, "{}:undefined", Tag::SPACE)
        } else {
            write!(f, "{}:{}", Tag::SPACE, self.value)
        }
    }
}

impl<Tag: RefTag> fmt::Display for Reference<Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<Tag: RefTag> From<u64> for Reference<Tag> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<Tag: RefTag> Serialize for Reference<Tag> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.value)
    }
}

impl<'de, Tag: RefTag> Deserialize<'de> for Reference<Tag> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::space::{RegionRef, StringRef};

    #[test]
    fn test_value_roundtrip() {
        let reference = StringRef::new(42);
        assert_eq!(reference.get(), 42);
        assert!(!reference.is_undefined());
    }

    #[test]
    fn test_undefined_sentinel() {
        let undefined = StringRef::undefined();
        assert!(undefined.is_undefined());
        assert_eq!(undefined.get(), u64::MAX);
        assert_eq!(undefined, StringRef::new(u64::MAX));
    }

    #[test]
    fn test_ordering() {
        assert!(StringRef::new(3) < StringRef::new(7));
        assert!(StringRef::new(7) < StringRef::undefined());
    }

    #[test]
    fn test_spaces_are_independent_types() {
        // Same numeric value, different spaces; comparing them would not
        // even compile, which is the point.
        let string_ref = StringRef::new(5);
        let region_ref = RegionRef::new(5);
        assert_eq!(string_ref.get(), region_ref.get());
    }

    #[test]
    fn test_debug_names_the_space() {
        assert_eq!(format!("{:?}", StringRef::new(9)), "string:9");
        assert_eq!(format!("{:?}", RegionRef::undefined()), "region:undefined");
    }

    #[test]
    fn test_serde_as_raw_number() {
        let reference = StringRef::new(17);
        let json = serde_json::to_string(&reference).expect("serialize reference");
        assert_eq!(json, "17");

        let back: StringRef = serde_json::from_str(&json).expect("deserialize reference");
        assert_eq!(back, reference);
    }
}
