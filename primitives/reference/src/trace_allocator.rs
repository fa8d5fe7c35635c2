//! Reference allocation across every definition space of a trace.

use crate::allocator::{AllocatorResult, Referable, ReferenceAllocator};
use crate::number::Reference;
use crate::space::{
    AttributeSpace, CallingContextSpace, CommSpace, GroupSpace, InterruptGeneratorSpace,
    IoFileSpace, IoHandleSpace, IoParadigmSpace, LocationGroupSpace, LocationSpace, MarkerSpace,
    MetricMemberSpace, MetricSpace, ParameterSpace, RefTag, RegionSpace, SourceCodeLocationSpace,
    StringSpace, SystemTreeNodeSpace,
};

/// Compile-time selection of the allocator responsible for one space.
///
/// The space set is closed; adding a space means adding one field to
/// [`TraceAllocator`] and one impl of this trait, nothing else.
pub trait SpaceAllocator<Tag: RefTag> {
    /// Returns the allocator for `Tag`'s space.
    fn space_mut(&mut self) -> &mut ReferenceAllocator<Tag>;
}

/// Owns one [`ReferenceAllocator`] per definition space.
///
/// Callers register pre-existing definitions and mint fresh numbers without
/// naming the space set; dispatch happens through the definition's tag.
/// Categories that alias another category's numeric space carry that space's
/// tag and therefore land in the shared allocator.
#[derive(Default)]
pub struct TraceAllocator {
    strings: ReferenceAllocator<StringSpace>,
    attributes: ReferenceAllocator<AttributeSpace>,
    locations: ReferenceAllocator<LocationSpace>,
    location_groups: ReferenceAllocator<LocationGroupSpace>,
    system_tree_nodes: ReferenceAllocator<SystemTreeNodeSpace>,
    groups: ReferenceAllocator<GroupSpace>,
    comms: ReferenceAllocator<CommSpace>,
    regions: ReferenceAllocator<RegionSpace>,
    parameters: ReferenceAllocator<ParameterSpace>,
    source_code_locations: ReferenceAllocator<SourceCodeLocationSpace>,
    calling_contexts: ReferenceAllocator<CallingContextSpace>,
    interrupt_generators: ReferenceAllocator<InterruptGeneratorSpace>,
    io_files: ReferenceAllocator<IoFileSpace>,
    io_handles: ReferenceAllocator<IoHandleSpace>,
    io_paradigms: ReferenceAllocator<IoParadigmSpace>,
    metric_members: ReferenceAllocator<MetricMemberSpace>,
    metrics: ReferenceAllocator<MetricSpace>,
    markers: ReferenceAllocator<MarkerSpace>,
}

macro_rules! space_allocators {
    ($($field:ident => $tag:ty),+ $(,)?) => {
        $(
            impl SpaceAllocator<$tag> for TraceAllocator {
                fn space_mut(&mut self) -> &mut ReferenceAllocator<$tag> {
                    &mut self.$field
                }
            }
        )+
    };
}

space_allocators! {
    strings => StringSpace,
    attributes => AttributeSpace,
    locations => LocationSpace,
    location_groups => LocationGroupSpace,
    system_tree_nodes => SystemTreeNodeSpace,
    groups => GroupSpace,
    comms => CommSpace,
    regions => RegionSpace,
    parameters => ParameterSpace,
    source_code_locations => SourceCodeLocationSpace,
    calling_contexts => CallingContextSpace,
    interrupt_generators => InterruptGeneratorSpace,
    io_files => IoFileSpace,
    io_handles => IoHandleSpace,
    io_paradigms => IoParadigmSpace,
    metric_members => MetricMemberSpace,
    metrics => MetricSpace,
    markers => MarkerSpace,
}

impl TraceAllocator {
    /// Creates an aggregate with every space unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `def`'s reference number as used in its space.
    ///
    /// Must be called for every pre-existing definition before minting new
    /// numbers in that space.
    pub fn register_definition<D>(&mut self, def: &D)
    where
        D: Referable,
        Self: SpaceAllocator<D::Tag>,
    {
        SpaceAllocator::<D::Tag>::space_mut(self).register(def.reference());
    }

    /// Records a raw reference number as used in `Tag`'s space.
    pub fn register<Tag>(&mut self, reference: Reference<Tag>)
    where
        Tag: RefTag,
        Self: SpaceAllocator<Tag>,
    {
        SpaceAllocator::<Tag>::space_mut(self).register(reference);
    }

    /// Mints the next free reference number in `Tag`'s space.
    pub fn next<Tag>(&mut self) -> AllocatorResult<Reference<Tag>>
    where
        Tag: RefTag,
        Self: SpaceAllocator<Tag>,
    {
        SpaceAllocator::<Tag>::space_mut(self).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{MetricRef, MetricSpace, StringRef, StringSpace};

    struct Registered(StringRef);

    impl Referable for Registered {
        type Tag = StringSpace;

        fn reference(&self) -> StringRef {
            self.0
        }
    }

    struct SharedSpace(MetricRef);

    impl Referable for SharedSpace {
        type Tag = MetricSpace;

        fn reference(&self) -> MetricRef {
            self.0
        }
    }

    #[test]
    fn test_spaces_allocate_independently() {
        let mut allocator = TraceAllocator::new();
        assert_eq!(allocator.next::<StringSpace>().expect("fresh space").get(), 0);
        assert_eq!(allocator.next::<StringSpace>().expect("fresh space").get(), 1);
        // A different space starts over at zero.
        assert_eq!(allocator.next::<MetricSpace>().expect("fresh space").get(), 0);
    }

    #[test]
    fn test_register_definition_routes_by_tag() {
        let mut allocator = TraceAllocator::new();
        allocator.register_definition(&Registered(StringRef::new(9)));
        assert_eq!(allocator.next::<StringSpace>().expect("fresh space").get(), 10);
    }

    #[test]
    fn test_aliased_kinds_share_one_allocator() {
        // Two logical kinds drawing from the same space must see each
        // other's registrations.
        let mut allocator = TraceAllocator::new();
        allocator.register_definition(&SharedSpace(MetricRef::new(4)));
        allocator.register(MetricRef::new(2));
        assert_eq!(allocator.next::<MetricSpace>().expect("fresh space").get(), 5);
    }
}
