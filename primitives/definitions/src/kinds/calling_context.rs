//! Calling-context and interrupt-generator definitions.

use reference::space::{CallingContextSpace, InterruptGeneratorSpace};
use reference::{CallingContextRef, InterruptGeneratorRef};

use super::region::{RegionDef, SourceCodeLocationDef};
use super::string::StringDef;
use crate::common::{InterruptGeneratorMode, MetricBase};
use crate::handle::Definition;
use crate::record::definition_data;

/// Payload of a calling-context definition.
#[derive(Debug, Clone)]
pub struct CallingContextData {
    /// Region this context executes.
    pub region: RegionDef,
    /// Precise source position, if known.
    pub source_code_location: SourceCodeLocationDef,
    /// Calling parent; undefined for a root context.
    pub parent: CallingContextDef,
}

definition_data!(
    CallingContextData,
    CallingContextSpace,
    "calling_context",
    Self {
        region: RegionDef::undefined(),
        source_code_location: SourceCodeLocationDef::undefined(),
        parent: CallingContextDef::invalid(),
    }
);

/// Shared handle to a calling-context definition.
pub type CallingContextDef = Definition<CallingContextData>;

impl Definition<CallingContextData> {
    /// Creates a calling-context definition.
    pub fn new(
        reference: CallingContextRef,
        region: RegionDef,
        source_code_location: SourceCodeLocationDef,
        parent: CallingContextDef,
    ) -> Self {
        Self::create(reference, CallingContextData { region, source_code_location, parent })
    }

    /// Returns the region this context executes.
    pub fn region(&self) -> RegionDef {
        self.data().region.clone()
    }

    /// Returns the precise source position.
    pub fn source_code_location(&self) -> SourceCodeLocationDef {
        self.data().source_code_location.clone()
    }

    /// Returns the calling parent (undefined for a root context).
    pub fn parent(&self) -> CallingContextDef {
        self.data().parent.clone()
    }
}

/// Payload of an interrupt-generator definition.
#[derive(Debug, Clone)]
pub struct InterruptGeneratorData {
    /// Name of the generator.
    pub name: StringDef,
    /// How the generator schedules interrupts.
    pub mode: InterruptGeneratorMode,
    /// Base of the period's scaling exponent.
    pub base: MetricBase,
    /// Scaling exponent applied to the period.
    pub exponent: i64,
    /// Interrupt period in scaled units.
    pub period: u64,
}

definition_data!(
    InterruptGeneratorData,
    InterruptGeneratorSpace,
    "interrupt_generator",
    Self {
        name: StringDef::undefined(),
        mode: InterruptGeneratorMode::default(),
        base: MetricBase::default(),
        exponent: 0,
        period: 0,
    }
);

/// Shared handle to an interrupt-generator definition.
pub type InterruptGeneratorDef = Definition<InterruptGeneratorData>;

impl Definition<InterruptGeneratorData> {
    /// Creates an interrupt-generator definition.
    pub fn new(
        reference: InterruptGeneratorRef,
        name: StringDef,
        mode: InterruptGeneratorMode,
        base: MetricBase,
        exponent: i64,
        period: u64,
    ) -> Self {
        Self::create(reference, InterruptGeneratorData { name, mode, base, exponent, period })
    }

    /// Returns the generator's name.
    pub fn name(&self) -> StringDef {
        self.data().name.clone()
    }

    /// Returns how the generator schedules interrupts.
    pub fn mode(&self) -> InterruptGeneratorMode {
        self.data().mode
    }

    /// Returns the base of the period's scaling exponent.
    pub fn period_base(&self) -> MetricBase {
        self.data().base
    }

    /// Returns the scaling exponent applied to the period.
    pub fn period_exponent(&self) -> i64 {
        self.data().exponent
    }

    /// Returns the interrupt period in scaled units.
    pub fn period(&self) -> u64 {
        self.data().period
    }
}
