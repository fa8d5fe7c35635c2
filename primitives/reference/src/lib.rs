#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Typed reference numbers for trace definition records.
//!
//! Every definition record in a trace carries a numeric identity that is
//! unique within its own category. This crate provides the pieces that manage
//! those identities:
//!
//! - [`Reference`] — an opaque, strictly-ordered number scoped to one
//!   [space](space) by a zero-sized tag type, with a reserved *undefined*
//!   sentinel meaning "no definition".
//! - [`ReferenceAllocator`] — hands out free numbers for one space, seeded
//!   from any pre-existing definitions so new numbers never collide.
//! - [`TraceAllocator`] — owns one allocator per space and dispatches by tag,
//!   so callers register and mint numbers without naming the space set.

pub mod allocator;
pub mod number;
pub mod space;
pub mod trace_allocator;

pub use allocator::{AllocatorError, AllocatorResult, Referable, ReferenceAllocator};
pub use number::Reference;
pub use space::{
    AttributeRef, CallingContextRef, CommRef, GroupRef, InterruptGeneratorRef, IoFileRef,
    IoHandleRef, IoParadigmRef, LocationGroupRef, LocationRef, MarkerRef, MetricMemberRef,
    MetricRef, ParameterRef, RefTag, RegionRef, SourceCodeLocationRef, StringRef,
    SystemTreeNodeRef,
};
pub use trace_allocator::{SpaceAllocator, TraceAllocator};
