//! Location and location-group definitions.

use reference::space::{LocationGroupSpace, LocationSpace};
use reference::{LocationGroupRef, LocationRef};

use super::string::StringDef;
use super::system_tree::SystemTreeNodeDef;
use crate::common::{LocationGroupType, LocationType};
use crate::handle::Definition;
use crate::record::definition_data;

/// Payload of a location-group definition.
#[derive(Debug, Clone)]
pub struct LocationGroupData {
    /// Name of the group.
    pub name: StringDef,
    /// What kind of container the group models.
    pub group_type: LocationGroupType,
    /// System-tree node the group runs on.
    pub parent: SystemTreeNodeDef,
}

definition_data!(
    LocationGroupData,
    LocationGroupSpace,
    "location_group",
    Self {
        name: StringDef::undefined(),
        group_type: LocationGroupType::default(),
        parent: SystemTreeNodeDef::undefined(),
    }
);

/// Shared handle to a location-group definition.
pub type LocationGroupDef = Definition<LocationGroupData>;

impl Definition<LocationGroupData> {
    /// Creates a location-group definition.
    pub fn new(
        reference: LocationGroupRef,
        name: StringDef,
        group_type: LocationGroupType,
        parent: SystemTreeNodeDef,
    ) -> Self {
        Self::create(reference, LocationGroupData { name, group_type, parent })
    }

    /// Returns the group's name.
    pub fn name(&self) -> StringDef {
        self.data().name.clone()
    }

    /// Returns what kind of container the group models.
    pub fn group_type(&self) -> LocationGroupType {
        self.data().group_type
    }

    /// Returns the system-tree node the group runs on.
    pub fn parent(&self) -> SystemTreeNodeDef {
        self.data().parent.clone()
    }
}

/// Payload of a location definition.
#[derive(Debug, Clone)]
pub struct LocationData {
    /// Name of the location.
    pub name: StringDef,
    /// Group the location belongs to.
    pub group: LocationGroupDef,
    /// What kind of execution context the location models.
    pub location_type: LocationType,
    /// Number of events recorded at this location so far.
    pub events: u64,
}

definition_data!(
    LocationData,
    LocationSpace,
    "location",
    Self {
        name: StringDef::undefined(),
        group: LocationGroupDef::undefined(),
        location_type: LocationType::default(),
        events: 0,
    }
);

/// Shared handle to a location definition.
pub type LocationDef = Definition<LocationData>;

impl Definition<LocationData> {
    /// Creates a location definition with an event count of zero.
    pub fn new(
        reference: LocationRef,
        name: StringDef,
        group: LocationGroupDef,
        location_type: LocationType,
    ) -> Self {
        Self::create(reference, LocationData { name, group, location_type, events: 0 })
    }

    /// Returns the location's name.
    pub fn name(&self) -> StringDef {
        self.data().name.clone()
    }

    /// Returns the group the location belongs to.
    pub fn group(&self) -> LocationGroupDef {
        self.data().group.clone()
    }

    /// Returns what kind of execution context the location models.
    pub fn location_type(&self) -> LocationType {
        self.data().location_type
    }

    /// Returns the number of events recorded at this location so far.
    pub fn events(&self) -> u64 {
        self.data().events
    }

    /// Adds `count` to the location's event counter.
    pub fn record_events(&self, count: u64) {
        self.data_mut().events += count;
    }
}
