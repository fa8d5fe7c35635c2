//! Metric definitions.
//!
//! Metric classes and metric instances are distinct kinds sharing the
//! `metric` reference space.

use reference::space::{MetricMemberSpace, MetricSpace};
use reference::{MetricMemberRef, MetricRef};

use super::location::LocationDef;
use super::string::StringDef;
use crate::common::{
    MetricBase, MetricMode, MetricOccurrence, MetricType, MetricValueType, RecorderKind,
};
use crate::handle::Definition;
use crate::record::definition_data;

/// Payload of a metric-member definition.
#[derive(Debug, Clone)]
pub struct MetricMemberData {
    /// Name of the member.
    pub name: StringDef,
    /// Human-readable description.
    pub description: StringDef,
    /// Where the member's values come from.
    pub metric_type: MetricType,
    /// How successive values relate to each other.
    pub mode: MetricMode,
    /// Numeric representation of the values.
    pub value_type: MetricValueType,
    /// Base of the scaling exponent.
    pub base: MetricBase,
    /// Scaling exponent applied to raw values.
    pub exponent: i64,
    /// Unit of the scaled values.
    pub unit: StringDef,
}

definition_data!(
    MetricMemberData,
    MetricMemberSpace,
    "metric_member",
    Self {
        name: StringDef::undefined(),
        description: StringDef::undefined(),
        metric_type: MetricType::default(),
        mode: MetricMode::default(),
        value_type: MetricValueType::default(),
        base: MetricBase::default(),
        exponent: 0,
        unit: StringDef::undefined(),
    }
);

/// Shared handle to a metric-member definition.
pub type MetricMemberDef = Definition<MetricMemberData>;

impl Definition<MetricMemberData> {
    /// Creates a metric-member definition.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reference: MetricMemberRef,
        name: StringDef,
        description: StringDef,
        metric_type: MetricType,
        mode: MetricMode,
        value_type: MetricValueType,
        base: MetricBase,
        exponent: i64,
        unit: StringDef,
    ) -> Self {
        Self::create(
            reference,
            MetricMemberData {
                name,
                description,
                metric_type,
                mode,
                value_type,
                base,
                exponent,
                unit,
            },
        )
    }

    /// Returns the member's name.
    pub fn name(&self) -> StringDef {
        self.data().name.clone()
    }

    /// Returns where the member's values come from.
    pub fn metric_type(&self) -> MetricType {
        self.data().metric_type
    }

    /// Returns how successive values relate to each other.
    pub fn mode(&self) -> MetricMode {
        self.data().mode
    }

    /// Returns the numeric representation of the values.
    pub fn value_type(&self) -> MetricValueType {
        self.data().value_type
    }

    /// Returns the unit of the scaled values.
    pub fn unit(&self) -> StringDef {
        self.data().unit.clone()
    }
}

/// Payload of a metric-class definition.
#[derive(Debug, Clone)]
pub struct MetricClassData {
    /// Members recorded together.
    pub members: Vec<MetricMemberDef>,
    /// When values are recorded.
    pub occurrence: MetricOccurrence,
    /// What sort of location records the class.
    pub recorder_kind: RecorderKind,
}

definition_data!(
    MetricClassData,
    MetricSpace,
    "metric_class",
    Self {
        members: Vec::new(),
        occurrence: MetricOccurrence::default(),
        recorder_kind: RecorderKind::default(),
    }
);

/// Shared handle to a metric-class definition.
pub type MetricClassDef = Definition<MetricClassData>;

impl Definition<MetricClassData> {
    /// Creates a metric-class definition.
    pub fn new(
        reference: MetricRef,
        members: Vec<MetricMemberDef>,
        occurrence: MetricOccurrence,
        recorder_kind: RecorderKind,
    ) -> Self {
        Self::create(reference, MetricClassData { members, occurrence, recorder_kind })
    }

    /// Returns the members recorded together.
    pub fn members(&self) -> Vec<MetricMemberDef> {
        self.data().members.clone()
    }

    /// Appends a member to the class.
    pub fn add_member(&self, member: MetricMemberDef) {
        self.data_mut().members.push(member);
    }

    /// Returns when values are recorded.
    pub fn occurrence(&self) -> MetricOccurrence {
        self.data().occurrence
    }

    /// Returns what sort of location records the class.
    pub fn recorder_kind(&self) -> RecorderKind {
        self.data().recorder_kind
    }
}

/// Payload of a metric-instance definition.
#[derive(Debug, Clone)]
pub struct MetricInstanceData {
    /// The class this instance records values for.
    pub class: MetricClassDef,
    /// Location that records the values.
    pub recorder: LocationDef,
}

definition_data!(
    MetricInstanceData,
    MetricSpace,
    "metric_instance",
    Self { class: MetricClassDef::undefined(), recorder: LocationDef::undefined() }
);

/// Shared handle to a metric-instance definition.
pub type MetricInstanceDef = Definition<MetricInstanceData>;

impl Definition<MetricInstanceData> {
    /// Creates a metric-instance definition.
    pub fn new(reference: MetricRef, class: MetricClassDef, recorder: LocationDef) -> Self {
        Self::create(reference, MetricInstanceData { class, recorder })
    }

    /// Returns the class this instance records values for.
    pub fn class(&self) -> MetricClassDef {
        self.data().class.clone()
    }

    /// Returns the location that records the values.
    pub fn recorder(&self) -> LocationDef {
        self.data().recorder.clone()
    }
}
