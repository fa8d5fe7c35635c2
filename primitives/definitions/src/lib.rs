#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Trace definition records and their shared-ownership handles.
//!
//! A definition record describes one named entity of a trace — a string, a
//! source region, a system-tree node, a metric — and carries a reference
//! number that never changes after construction. Records live on the heap and
//! are reached through [`Definition`] handles: cheap to copy, compared by
//! reference number, safely expressing "no definition" without a null
//! pointer.
//!
//! ## Handles
//!
//! - A default-constructed handle is *invalid*: it holds no record, and only
//!   validity checks and equality are allowed on it.
//! - Every kind exposes a process-wide *undefined* singleton whose reference
//!   is the space's sentinel; it is a valid handle and the conventional "no
//!   definition" placeholder.
//! - Payload fields stay mutable behind each record's lock, so an
//!   application can rename a region after the fact and every handle copy
//!   observes the change.
//!
//! ## Kinds
//!
//! The catalogue of definition kinds lives in [`kinds`]; the enum vocabulary
//! they share lives in [`common`].

pub mod common;
pub mod handle;
pub mod kinds;
pub mod record;

pub use handle::{Definition, WeakDefinition};
pub use kinds::{
    AttributeData, AttributeDef, CallingContextData, CallingContextDef, CommData, CommDef,
    GroupData, GroupDef, InterruptGeneratorData, InterruptGeneratorDef, IoDirectoryData,
    IoDirectoryDef, IoFile, IoHandleData, IoHandleDef, IoParadigmData, IoParadigmDef,
    IoPreCreatedHandleState, IoRegularFileData, IoRegularFileDef, LocationData, LocationDef,
    LocationGroupData, LocationGroupDef, MarkerData, MarkerDef, MetricClassData, MetricClassDef,
    MetricInstanceData, MetricInstanceDef, MetricMemberData, MetricMemberDef, ParameterData,
    ParameterDef, RegionData, RegionDef, SourceCodeLocationData, SourceCodeLocationDef,
    StringData, StringDef, SystemTreeNodeData, SystemTreeNodeDef,
};
pub use record::{DefinitionData, Record};
