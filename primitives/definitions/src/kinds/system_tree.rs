//! System-tree-node definitions.

use reference::space::SystemTreeNodeSpace;
use reference::SystemTreeNodeRef;

use super::string::StringDef;
use crate::handle::Definition;
use crate::record::definition_data;

/// Payload of a system-tree-node definition.
///
/// The parent link points upward only, and the root's parent is the undefined
/// placeholder; no cycle of owning handles can form.
#[derive(Debug, Clone)]
pub struct SystemTreeNodeData {
    /// Name of the node.
    pub name: StringDef,
    /// Name of the node's class (e.g. "machine", "node board").
    pub class_name: StringDef,
    /// Parent node; undefined for the root.
    pub parent: SystemTreeNodeDef,
}

definition_data!(
    SystemTreeNodeData,
    SystemTreeNodeSpace,
    "system_tree_node",
    Self {
        name: StringDef::undefined(),
        class_name: StringDef::undefined(),
        parent: SystemTreeNodeDef::invalid(),
    }
);

/// Shared handle to a system-tree-node definition.
pub type SystemTreeNodeDef = Definition<SystemTreeNodeData>;

impl Definition<SystemTreeNodeData> {
    /// Creates a root system-tree node.
    pub fn new(reference: SystemTreeNodeRef, name: StringDef, class_name: StringDef) -> Self {
        Self::with_parent(reference, name, class_name, SystemTreeNodeDef::undefined())
    }

    /// Creates a system-tree node below `parent`.
    pub fn with_parent(
        reference: SystemTreeNodeRef,
        name: StringDef,
        class_name: StringDef,
        parent: SystemTreeNodeDef,
    ) -> Self {
        Self::create(reference, SystemTreeNodeData { name, class_name, parent })
    }

    /// Returns the node's name.
    pub fn name(&self) -> StringDef {
        self.data().name.clone()
    }

    /// Renames the node; every handle copy observes the change.
    pub fn set_name(&self, name: StringDef) {
        self.data_mut().name = name;
    }

    /// Returns the node's class name.
    pub fn class_name(&self) -> StringDef {
        self.data().class_name.clone()
    }

    /// Returns the parent node (undefined for the root).
    pub fn parent(&self) -> SystemTreeNodeDef {
        self.data().parent.clone()
    }
}
