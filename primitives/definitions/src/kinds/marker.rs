//! Marker definitions.

use reference::space::MarkerSpace;
use reference::MarkerRef;

use crate::common::MarkerSeverity;
use crate::handle::Definition;
use crate::record::definition_data;

/// Payload of a marker definition.
///
/// Markers annotate a trace for human readers; their group and category are
/// plain strings rather than string definitions.
#[derive(Debug, Clone, Default)]
pub struct MarkerData {
    /// Group the marker belongs to.
    pub group: String,
    /// Category inside the group.
    pub category: String,
    /// Severity of the marker.
    pub severity: MarkerSeverity,
}

definition_data!(MarkerData, MarkerSpace, "marker", Self::default());

/// Shared handle to a marker definition.
pub type MarkerDef = Definition<MarkerData>;

impl Definition<MarkerData> {
    /// Creates a marker definition.
    pub fn new(
        reference: MarkerRef,
        group: impl Into<String>,
        category: impl Into<String>,
        severity: MarkerSeverity,
    ) -> Self {
        Self::create(
            reference,
            MarkerData { group: group.into(), category: category.into(), severity },
        )
    }

    /// Returns the group the marker belongs to.
    pub fn group(&self) -> String {
        self.data().group.clone()
    }

    /// Returns the category inside the group.
    pub fn category(&self) -> String {
        self.data().category.clone()
    }

    /// Returns the severity of the marker.
    pub fn severity(&self) -> MarkerSeverity {
        self.data().severity
    }
}
