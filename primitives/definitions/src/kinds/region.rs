//! Region and source-code-location definitions.

use reference::space::{RegionSpace, SourceCodeLocationSpace};
use reference::{RegionRef, SourceCodeLocationRef};

use super::string::StringDef;
use crate::common::{Paradigm, RegionRole};
use crate::handle::Definition;
use crate::record::definition_data;

/// Payload of a region definition.
#[derive(Debug, Clone)]
pub struct RegionData {
    /// Display name of the region.
    pub name: StringDef,
    /// Mangled or otherwise canonical name.
    pub canonical_name: StringDef,
    /// Human-readable description.
    pub description: StringDef,
    /// Semantic role of the region.
    pub role: RegionRole,
    /// Paradigm the region belongs to.
    pub paradigm: Paradigm,
    /// Source file the region was defined in.
    pub source_file: StringDef,
    /// First source line of the region.
    pub begin_line: u32,
    /// Last source line of the region.
    pub end_line: u32,
}

definition_data!(
    RegionData,
    RegionSpace,
    "region",
    Self {
        name: StringDef::undefined(),
        canonical_name: StringDef::undefined(),
        description: StringDef::undefined(),
        role: RegionRole::default(),
        paradigm: Paradigm::default(),
        source_file: StringDef::undefined(),
        begin_line: 0,
        end_line: 0,
    }
);

/// Shared handle to a region definition.
pub type RegionDef = Definition<RegionData>;

impl Definition<RegionData> {
    /// Creates a region definition.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reference: RegionRef,
        name: StringDef,
        canonical_name: StringDef,
        description: StringDef,
        role: RegionRole,
        paradigm: Paradigm,
        source_file: StringDef,
        begin_line: u32,
        end_line: u32,
    ) -> Self {
        Self::create(
            reference,
            RegionData {
                name,
                canonical_name,
                description,
                role,
                paradigm,
                source_file,
                begin_line,
                end_line,
            },
        )
    }

    /// Returns the region's display name.
    pub fn name(&self) -> StringDef {
        self.data().name.clone()
    }

    /// Renames the region; every handle copy observes the change.
    pub fn set_name(&self, name: StringDef) {
        self.data_mut().name = name;
    }

    /// Returns the region's canonical name.
    pub fn canonical_name(&self) -> StringDef {
        self.data().canonical_name.clone()
    }

    /// Returns the region's semantic role.
    pub fn role(&self) -> RegionRole {
        self.data().role
    }

    /// Returns the paradigm the region belongs to.
    pub fn paradigm(&self) -> Paradigm {
        self.data().paradigm
    }

    /// Returns the source file together with the line span.
    pub fn source_span(&self) -> (StringDef, u32, u32) {
        let data = self.data();
        (data.source_file.clone(), data.begin_line, data.end_line)
    }
}

/// Payload of a source-code-location definition.
#[derive(Debug, Clone)]
pub struct SourceCodeLocationData {
    /// Source file.
    pub file: StringDef,
    /// Line number inside the file.
    pub line: u32,
}

definition_data!(
    SourceCodeLocationData,
    SourceCodeLocationSpace,
    "source_code_location",
    Self { file: StringDef::undefined(), line: 0 }
);

/// Shared handle to a source-code-location definition.
pub type SourceCodeLocationDef = Definition<SourceCodeLocationData>;

impl Definition<SourceCodeLocationData> {
    /// Creates a source-code-location definition.
    pub fn new(reference: SourceCodeLocationRef, file: StringDef, line: u32) -> Self {
        Self::create(reference, SourceCodeLocationData { file, line })
    }

    /// Returns the source file.
    pub fn file(&self) -> StringDef {
        self.data().file.clone()
    }

    /// Returns the line number inside the file.
    pub fn line(&self) -> u32 {
        self.data().line
    }
}
