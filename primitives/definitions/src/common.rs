//! Enum vocabulary shared by the definition kinds.
//!
//! Plain value types; the serde derives exist so tooling can dump definition
//! metadata in a readable form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value type carried by an attribute definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// Unsigned 64-bit integer value.
    #[default]
    Uint64,
    /// Signed 64-bit integer value.
    Int64,
    /// Double-precision floating point value.
    Double,
    /// String value.
    String,
}

/// What kind of execution context a location models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// Nothing known about the location.
    #[default]
    Unknown,
    /// An ordinary CPU thread.
    CpuThread,
    /// An accelerator execution context.
    Accelerator,
    /// A location that only records metric values.
    Metric,
}

/// What kind of container a location group models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationGroupType {
    /// Nothing known about the group.
    #[default]
    Unknown,
    /// An operating-system process.
    Process,
    /// An accelerator device.
    Accelerator,
}

/// The semantic role of a source region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegionRole {
    /// Nothing known about the region.
    #[default]
    Unknown,
    /// An ordinary function.
    Function,
    /// A wrapper around another function.
    Wrapper,
    /// A loop body.
    Loop,
    /// An arbitrary section of code.
    Code,
    /// A parallel construct.
    Parallel,
    /// A barrier.
    Barrier,
    /// A task construct.
    Task,
    /// A memory allocation routine.
    Allocate,
    /// A memory release routine.
    Deallocate,
}

impl RegionRole {
    /// Returns the lowercase name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionRole::Unknown => "unknown",
            RegionRole::Function => "function",
            RegionRole::Wrapper => "wrapper",
            RegionRole::Loop => "loop",
            RegionRole::Code => "code",
            RegionRole::Parallel => "parallel",
            RegionRole::Barrier => "barrier",
            RegionRole::Task => "task",
            RegionRole::Allocate => "allocate",
            RegionRole::Deallocate => "deallocate",
        }
    }
}

impl fmt::Display for RegionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The programming paradigm a definition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Paradigm {
    /// Nothing known about the paradigm.
    #[default]
    Unknown,
    /// User-level instrumentation.
    User,
    /// Compiler instrumentation.
    Compiler,
    /// An OpenMP construct.
    Openmp,
    /// An MPI construct.
    Mpi,
    /// A POSIX threads construct.
    Pthread,
    /// A CUDA construct.
    Cuda,
    /// An OpenCL construct.
    Opencl,
    /// The measurement system itself.
    Measurement,
}

impl Paradigm {
    /// Returns the lowercase name of the paradigm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Paradigm::Unknown => "unknown",
            Paradigm::User => "user",
            Paradigm::Compiler => "compiler",
            Paradigm::Openmp => "openmp",
            Paradigm::Mpi => "mpi",
            Paradigm::Pthread => "pthread",
            Paradigm::Cuda => "cuda",
            Paradigm::Opencl => "opencl",
            Paradigm::Measurement => "measurement",
        }
    }
}

impl fmt::Display for Paradigm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value type carried by a parameter definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    /// String value.
    #[default]
    String,
    /// Signed 64-bit integer value.
    Int64,
    /// Unsigned 64-bit integer value.
    Uint64,
}

/// What a group definition collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    /// Nothing known about the group.
    #[default]
    Unknown,
    /// A set of locations.
    Locations,
    /// A set of regions.
    Regions,
    /// A set of metric members.
    Metrics,
    /// The locations a communication paradigm may address.
    CommLocations,
    /// A communicator's member set.
    CommGroup,
    /// The self-communicator member set.
    CommSelf,
}

/// Where a metric's values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    /// Source not further specified.
    #[default]
    Other,
    /// A PAPI hardware counter.
    PapiCounter,
    /// An rusage counter.
    RusageCounter,
    /// A user-supplied value.
    User,
}

/// How successive values of a metric relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MetricMode {
    /// Values accumulate monotonically.
    #[default]
    Accumulated,
    /// Each value stands on its own.
    Absolute,
    /// Values are deltas against the previous one.
    Relative,
}

/// Numeric representation of a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MetricValueType {
    /// Unsigned 64-bit integer.
    #[default]
    Uint64,
    /// Signed 64-bit integer.
    Int64,
    /// Double-precision floating point.
    Double,
}

/// Base of a scaling exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MetricBase {
    /// Powers of two.
    #[default]
    Binary,
    /// Powers of ten.
    Decimal,
}

/// When values of a metric class are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MetricOccurrence {
    /// At every enter/leave event.
    #[default]
    Strict,
    /// At enter/leave events where the source chooses to.
    Synchronous,
    /// At arbitrary points in time.
    Asynchronous,
}

/// What sort of location records a metric class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecorderKind {
    /// Nothing known about the recorder.
    #[default]
    Unknown,
    /// No concrete recorder; values arrive through instances.
    Abstract,
    /// Recorded by CPU locations.
    Cpu,
    /// Recorded by accelerator locations.
    Gpu,
}

/// How an interrupt generator schedules its interrupts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterruptGeneratorMode {
    /// Interrupts fire per elapsed time.
    #[default]
    Time,
    /// Interrupts fire per event count.
    Count,
}

/// Whether an I/O paradigm is serial or parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IoParadigmClass {
    /// One handle, one context.
    #[default]
    Serial,
    /// Handles shared across a parallel context.
    Parallel,
}

/// Access mode of a pre-created I/O handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IoAccessMode {
    /// Opened for reading only.
    #[default]
    ReadOnly,
    /// Opened for writing only.
    WriteOnly,
    /// Opened for reading and writing.
    ReadWrite,
}

/// Severity attached to a marker definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSeverity {
    /// No severity.
    #[default]
    None,
    /// Low severity.
    Low,
    /// Medium severity.
    Medium,
    /// High severity.
    High,
}
