//! I/O definitions: files, directories, handles, paradigms, and the state of
//! handles that predate the measurement.

use reference::space::{IoFileSpace, IoHandleSpace, IoParadigmSpace};
use reference::{IoFileRef, IoHandleRef, IoParadigmRef, Referable};

use super::string::StringDef;
use super::system_tree::SystemTreeNodeDef;
use crate::common::{IoAccessMode, IoParadigmClass};
use crate::handle::Definition;
use crate::record::definition_data;

/// Payload of a regular-file definition.
///
/// Regular files and directories are distinct kinds sharing the `io_file`
/// reference space.
#[derive(Debug, Clone)]
pub struct IoRegularFileData {
    /// Path or name of the file.
    pub name: StringDef,
    /// System-tree node the file is local to.
    pub scope: SystemTreeNodeDef,
}

definition_data!(
    IoRegularFileData,
    IoFileSpace,
    "io_regular_file",
    Self { name: StringDef::undefined(), scope: SystemTreeNodeDef::undefined() }
);

/// Shared handle to a regular-file definition.
pub type IoRegularFileDef = Definition<IoRegularFileData>;

impl Definition<IoRegularFileData> {
    /// Creates a regular-file definition.
    pub fn new(reference: IoFileRef, name: StringDef, scope: SystemTreeNodeDef) -> Self {
        Self::create(reference, IoRegularFileData { name, scope })
    }

    /// Returns the file's path or name.
    pub fn name(&self) -> StringDef {
        self.data().name.clone()
    }

    /// Returns the system-tree node the file is local to.
    pub fn scope(&self) -> SystemTreeNodeDef {
        self.data().scope.clone()
    }
}

/// Payload of a directory definition.
#[derive(Debug, Clone)]
pub struct IoDirectoryData {
    /// Path or name of the directory.
    pub name: StringDef,
    /// System-tree node the directory is local to.
    pub scope: SystemTreeNodeDef,
}

definition_data!(
    IoDirectoryData,
    IoFileSpace,
    "io_directory",
    Self { name: StringDef::undefined(), scope: SystemTreeNodeDef::undefined() }
);

/// Shared handle to a directory definition.
pub type IoDirectoryDef = Definition<IoDirectoryData>;

impl Definition<IoDirectoryData> {
    /// Creates a directory definition.
    pub fn new(reference: IoFileRef, name: StringDef, scope: SystemTreeNodeDef) -> Self {
        Self::create(reference, IoDirectoryData { name, scope })
    }

    /// Returns the directory's path or name.
    pub fn name(&self) -> StringDef {
        self.data().name.clone()
    }

    /// Returns the system-tree node the directory is local to.
    pub fn scope(&self) -> SystemTreeNodeDef {
        self.data().scope.clone()
    }
}

/// Either file kind an I/O handle may be opened on.
#[derive(Debug, Clone, PartialEq)]
pub enum IoFile {
    /// A regular file.
    Regular(IoRegularFileDef),
    /// A directory.
    Directory(IoDirectoryDef),
}

impl IoFile {
    /// Returns the "no file" placeholder (the undefined regular file).
    pub fn undefined() -> Self {
        IoFile::Regular(IoRegularFileDef::undefined())
    }

    /// Returns the file's reference number in the shared `io_file` space.
    pub fn reference(&self) -> IoFileRef {
        match self {
            IoFile::Regular(file) => file.reference(),
            IoFile::Directory(directory) => directory.reference(),
        }
    }
}

impl Referable for IoFile {
    type Tag = IoFileSpace;

    fn reference(&self) -> IoFileRef {
        IoFile::reference(self)
    }
}

impl From<IoRegularFileDef> for IoFile {
    fn from(file: IoRegularFileDef) -> Self {
        IoFile::Regular(file)
    }
}

impl From<IoDirectoryDef> for IoFile {
    fn from(directory: IoDirectoryDef) -> Self {
        IoFile::Directory(directory)
    }
}

/// Payload of an I/O paradigm definition.
#[derive(Debug, Clone)]
pub struct IoParadigmData {
    /// Short identification (e.g. "POSIX").
    pub identification: StringDef,
    /// Descriptive name.
    pub name: StringDef,
    /// Whether the paradigm is serial or parallel.
    pub paradigm_class: IoParadigmClass,
}

definition_data!(
    IoParadigmData,
    IoParadigmSpace,
    "io_paradigm",
    Self {
        identification: StringDef::undefined(),
        name: StringDef::undefined(),
        paradigm_class: IoParadigmClass::default(),
    }
);

/// Shared handle to an I/O paradigm definition.
pub type IoParadigmDef = Definition<IoParadigmData>;

impl Definition<IoParadigmData> {
    /// Creates an I/O paradigm definition.
    pub fn new(
        reference: IoParadigmRef,
        identification: StringDef,
        name: StringDef,
        paradigm_class: IoParadigmClass,
    ) -> Self {
        Self::create(reference, IoParadigmData { identification, name, paradigm_class })
    }

    /// Returns the paradigm's short identification.
    pub fn identification(&self) -> StringDef {
        self.data().identification.clone()
    }

    /// Returns the paradigm's descriptive name.
    pub fn name(&self) -> StringDef {
        self.data().name.clone()
    }

    /// Returns whether the paradigm is serial or parallel.
    pub fn paradigm_class(&self) -> IoParadigmClass {
        self.data().paradigm_class
    }
}

/// Payload of an I/O handle definition.
#[derive(Debug, Clone)]
pub struct IoHandleData {
    /// Name of the handle.
    pub name: StringDef,
    /// File the handle was opened on.
    pub file: IoFile,
    /// Paradigm the handle belongs to.
    pub paradigm: IoParadigmDef,
}

definition_data!(
    IoHandleData,
    IoHandleSpace,
    "io_handle",
    Self {
        name: StringDef::undefined(),
        file: IoFile::undefined(),
        paradigm: IoParadigmDef::undefined(),
    }
);

/// Shared handle to an I/O handle definition.
pub type IoHandleDef = Definition<IoHandleData>;

impl Definition<IoHandleData> {
    /// Creates an I/O handle definition.
    pub fn new(
        reference: IoHandleRef,
        name: StringDef,
        file: impl Into<IoFile>,
        paradigm: IoParadigmDef,
    ) -> Self {
        Self::create(reference, IoHandleData { name, file: file.into(), paradigm })
    }

    /// Returns the handle's name.
    pub fn name(&self) -> StringDef {
        self.data().name.clone()
    }

    /// Returns the file the handle was opened on.
    pub fn file(&self) -> IoFile {
        self.data().file.clone()
    }

    /// Returns the paradigm the handle belongs to.
    pub fn paradigm(&self) -> IoParadigmDef {
        self.data().paradigm.clone()
    }
}

/// State of an I/O handle that existed before the measurement started.
///
/// Not a referable kind of its own: its identity is the inner handle's, which
/// is why registering one routes into the `io_handle` space.
#[derive(Debug, Clone)]
pub struct IoPreCreatedHandleState {
    /// The pre-created handle.
    pub handle: IoHandleDef,
    /// Access mode the handle was opened with.
    pub access_mode: IoAccessMode,
}

impl IoPreCreatedHandleState {
    /// Creates a pre-created handle state.
    pub fn new(handle: IoHandleDef, access_mode: IoAccessMode) -> Self {
        Self { handle, access_mode }
    }

    /// Returns the pre-created handle.
    pub fn handle(&self) -> IoHandleDef {
        self.handle.clone()
    }

    /// Returns the access mode the handle was opened with.
    pub fn access_mode(&self) -> IoAccessMode {
        self.access_mode
    }
}

impl Referable for IoPreCreatedHandleState {
    type Tag = IoHandleSpace;

    fn reference(&self) -> IoHandleRef {
        self.handle.reference()
    }
}
