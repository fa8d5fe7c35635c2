//! Reference-number spaces.
//!
//! Each definition category draws its reference numbers from one space. Most
//! categories own a space outright; a few alias a shared one (metric classes
//! and metric instances, regular files and directories, every group kind).
//! Aliased categories use the same tag, so the type system routes them to the
//! same allocator and keeps their numbers collision-free.

use std::fmt::Debug;
use std::hash::Hash;

use crate::number::Reference;

/// Marker trait for reference-number spaces.
///
/// Implementors are uninhabited tag types; they only exist at the type level.
/// `SPACE` names the space in diagnostics.
pub trait RefTag: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Diagnostic name of the space.
    const SPACE: &'static str;
}

macro_rules! spaces {
    ($($(#[$doc:meta])* $tag:ident, $alias:ident => $name:literal;)+) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum $tag {}

            impl RefTag for $tag {
                const SPACE: &'static str = $name;
            }

            #[doc = concat!("Reference number in the `", $name, "` space.")]
            pub type $alias = Reference<$tag>;
        )+
    };
}

spaces! {
    /// Space of string definitions.
    StringSpace, StringRef => "string";
    /// Space of attribute definitions.
    AttributeSpace, AttributeRef => "attribute";
    /// Space of location definitions.
    LocationSpace, LocationRef => "location";
    /// Space of location-group definitions.
    LocationGroupSpace, LocationGroupRef => "location_group";
    /// Space of system-tree-node definitions.
    SystemTreeNodeSpace, SystemTreeNodeRef => "system_tree_node";
    /// Space shared by every group kind.
    GroupSpace, GroupRef => "group";
    /// Space of communicator definitions.
    CommSpace, CommRef => "comm";
    /// Space of region definitions.
    RegionSpace, RegionRef => "region";
    /// Space of parameter definitions.
    ParameterSpace, ParameterRef => "parameter";
    /// Space of source-code-location definitions.
    SourceCodeLocationSpace, SourceCodeLocationRef => "source_code_location";
    /// Space of calling-context definitions.
    CallingContextSpace, CallingContextRef => "calling_context";
    /// Space of interrupt-generator definitions.
    InterruptGeneratorSpace, InterruptGeneratorRef => "interrupt_generator";
    /// Space shared by regular-file and directory definitions.
    IoFileSpace, IoFileRef => "io_file";
    /// Space of I/O handle definitions.
    IoHandleSpace, IoHandleRef => "io_handle";
    /// Space of I/O paradigm definitions.
    IoParadigmSpace, IoParadigmRef => "io_paradigm";
    /// Space of metric-member definitions.
    MetricMemberSpace, MetricMemberRef => "metric_member";
    /// Space shared by metric-class and metric-instance definitions.
    MetricSpace, MetricRef => "metric";
    /// Space of marker definitions.
    MarkerSpace, MarkerRef => "marker";
}
