//! Communicator and group definitions.

use reference::space::{CommSpace, GroupSpace};
use reference::{CommRef, GroupRef};

use super::string::StringDef;
use crate::common::GroupType;
use crate::handle::Definition;
use crate::record::definition_data;

/// Payload of a communicator definition.
#[derive(Debug, Clone)]
pub struct CommData {
    /// Name of the communicator.
    pub name: StringDef,
    /// Parent communicator; undefined for a top-level one.
    pub parent: CommDef,
}

definition_data!(
    CommData,
    CommSpace,
    "comm",
    Self { name: StringDef::undefined(), parent: CommDef::invalid() }
);

/// Shared handle to a communicator definition.
pub type CommDef = Definition<CommData>;

impl Definition<CommData> {
    /// Creates a top-level communicator definition.
    pub fn new(reference: CommRef, name: StringDef) -> Self {
        Self::create(reference, CommData { name, parent: CommDef::undefined() })
    }

    /// Creates a communicator definition below `parent`.
    pub fn with_parent(reference: CommRef, name: StringDef, parent: CommDef) -> Self {
        Self::create(reference, CommData { name, parent })
    }

    /// Returns the communicator's name.
    pub fn name(&self) -> StringDef {
        self.data().name.clone()
    }

    /// Returns the parent communicator (undefined for a top-level one).
    pub fn parent(&self) -> CommDef {
        self.data().parent.clone()
    }
}

/// Payload of a group definition.
///
/// Every group kind shares one reference space; the member space is recorded
/// by [`GroupType`], and members are kept as raw reference numbers into that
/// space.
#[derive(Debug, Clone)]
pub struct GroupData {
    /// Name of the group.
    pub name: StringDef,
    /// What the group collects.
    pub group_type: GroupType,
    /// Member reference numbers, in insertion order.
    pub members: Vec<u64>,
}

definition_data!(
    GroupData,
    GroupSpace,
    "group",
    Self { name: StringDef::undefined(), group_type: GroupType::default(), members: Vec::new() }
);

/// Shared handle to a group definition.
pub type GroupDef = Definition<GroupData>;

impl Definition<GroupData> {
    /// Creates a group definition.
    pub fn new(
        reference: GroupRef,
        name: StringDef,
        group_type: GroupType,
        members: Vec<u64>,
    ) -> Self {
        Self::create(reference, GroupData { name, group_type, members })
    }

    /// Returns the group's name.
    pub fn name(&self) -> StringDef {
        self.data().name.clone()
    }

    /// Returns what the group collects.
    pub fn group_type(&self) -> GroupType {
        self.data().group_type
    }

    /// Returns the member reference numbers, in insertion order.
    pub fn members(&self) -> Vec<u64> {
        self.data().members.clone()
    }

    /// Appends a member reference number.
    pub fn add_member(&self, member: u64) {
        self.data_mut().members.push(member);
    }

    /// Returns the number of members.
    pub fn size(&self) -> usize {
        self.data().members.len()
    }
}
