//! Free reference-number generation for one space.

use std::marker::PhantomData;

use thiserror::Error;

use crate::number::Reference;
use crate::space::RefTag;

/// Error returned when a space has no free reference numbers left.
///
/// Incrementing past the running maximum would land on the undefined
/// sentinel; there is nothing left to hand out and no retry that could help.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("reference space '{space}' is exhausted")]
pub struct AllocatorError {
    /// Name of the exhausted space.
    pub space: &'static str,
}

/// Result alias for allocator operations.
pub type AllocatorResult<T> = std::result::Result<T, AllocatorError>;

/// Anything that carries a reference number in a known space.
///
/// Definition handles implement this. So do records that draw their number
/// from another category's space; their `Tag` is the shared space's tag, which
/// is what routes them to the right allocator.
pub trait Referable {
    /// The space the reference number belongs to.
    type Tag: RefTag;

    /// Returns the reference number.
    fn reference(&self) -> Reference<Self::Tag>;
}

/// Hands out free reference numbers for one space.
///
/// The allocator tracks a single running maximum. It must learn every
/// reference number already in use before it mints new ones: when
/// reconstructing state from an external source, feed each pre-existing
/// definition through [`register`](Self::register) first, then every
/// [`next`](Self::next) is guaranteed collision-free.
///
/// A running maximum is enough because numbers are never reclaimed; gaps stay
/// gaps.
pub struct ReferenceAllocator<Tag> {
    max: Option<u64>,
    _space: PhantomData<Tag>,
}

impl<Tag> Default for ReferenceAllocator<Tag> {
    fn default() -> Self {
        Self { max: None, _space: PhantomData }
    }
}

impl<Tag: RefTag> ReferenceAllocator<Tag> {
    /// Creates an allocator with no registered numbers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `reference` is already in use.
    ///
    /// Keeps the numerically greatest value seen so far; re-registering the
    /// same value is a no-op. The undefined sentinel is ignored — a "no
    /// definition" placeholder occupies nothing.
    pub fn register(&mut self, reference: Reference<Tag>) {
        if reference.is_undefined() {
            return;
        }
        let value = reference.get();
        self.max = Some(match self.max {
            Some(max) => max.max(value),
            None => value,
        });
    }

    /// Returns the next free reference number and advances the maximum.
    ///
    /// The first call on a fresh allocator returns 0. Fails when the
    /// successor would be the undefined sentinel.
    pub fn next(&mut self) -> AllocatorResult<Reference<Tag>> {
        let candidate = match self.max {
            Some(max) => max + 1,
            None => 0,
        };
        if candidate == Reference::<Tag>::UNDEFINED_VALUE {
            return Err(AllocatorError { space: Tag::SPACE });
        }
        self.max = Some(candidate);
        Ok(Reference::new(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{StringRef, StringSpace};

    #[test]
    fn test_fresh_allocator_counts_from_zero() {
        let mut allocator = ReferenceAllocator::<StringSpace>::new();
        for expected in 0..5 {
            assert_eq!(allocator.next().expect("space not exhausted").get(), expected);
        }
    }

    #[test]
    fn test_next_exceeds_every_registered_number() {
        let mut allocator = ReferenceAllocator::<StringSpace>::new();
        allocator.register(StringRef::new(17));
        allocator.register(StringRef::new(3));
        assert_eq!(allocator.next().expect("space not exhausted").get(), 18);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut allocator = ReferenceAllocator::<StringSpace>::new();
        allocator.register(StringRef::new(7));
        allocator.register(StringRef::new(7));
        assert_eq!(allocator.next().expect("space not exhausted").get(), 8);
    }

    #[test]
    fn test_register_after_next_keeps_monotonicity() {
        let mut allocator = ReferenceAllocator::<StringSpace>::new();
        assert_eq!(allocator.next().expect("space not exhausted").get(), 0);
        allocator.register(StringRef::new(2));
        assert_eq!(allocator.next().expect("space not exhausted").get(), 3);
    }

    #[test]
    fn test_registering_undefined_occupies_nothing() {
        let mut allocator = ReferenceAllocator::<StringSpace>::new();
        allocator.register(StringRef::undefined());
        assert_eq!(allocator.next().expect("space not exhausted").get(), 0);
    }

    #[test]
    fn test_exhaustion_at_the_sentinel() {
        let mut allocator = ReferenceAllocator::<StringSpace>::new();
        allocator.register(StringRef::new(u64::MAX - 2));
        assert_eq!(allocator.next().expect("one number left").get(), u64::MAX - 1);
        assert_eq!(allocator.next(), Err(AllocatorError { space: "string" }));
    }
}
