//! Shared-ownership handles to definition records.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{RwLockReadGuard, RwLockWriteGuard};
use reference::{Referable, Reference};

use crate::record::{DefinitionData, Record};

/// Shared-ownership handle to one definition record.
///
/// Handles are cheap to copy; copies share the same record, which is dropped
/// together with its last handle. Two valid handles are equal iff their
/// records carry the same reference number. An invalid handle — the default —
/// holds no record and is never equal to anything, itself included.
///
/// Calling anything other than [`is_valid`](Self::is_valid) or equality on an
/// invalid handle is a contract violation and panics.
pub struct Definition<T: DefinitionData> {
    record: Option<Arc<Record<T>>>,
}

impl<T: DefinitionData> Definition<T> {
    /// Creates a handle owning a fresh record.
    pub fn create(reference: Reference<T::Tag>, data: T) -> Self {
        Self { record: Some(Arc::new(Record::new(reference, data))) }
    }

    /// Returns the handle that holds no record.
    pub fn invalid() -> Self {
        Self { record: None }
    }

    /// Returns whether this handle refers to a record.
    ///
    /// When this returns `false`, the only permitted operations are this
    /// check and equality comparison; everything else panics.
    pub fn is_valid(&self) -> bool {
        self.record.is_some()
    }

    /// Returns the kind's undefined singleton.
    ///
    /// Created once per process on first use; every caller that needs a "no
    /// definition" placeholder shares the same record. Its reference number
    /// is the space's undefined sentinel.
    pub fn undefined() -> Self {
        let record = T::undefined_slot()
            .get_or_init(|| Arc::new(Record::new(Reference::undefined(), T::undefined_data())));
        Self { record: Some(Arc::clone(record)) }
    }

    /// Returns the reference number of the definition.
    ///
    /// # Panics
    /// Panics if the handle is invalid.
    pub fn reference(&self) -> Reference<T::Tag> {
        self.record().reference()
    }

    /// Returns whether the definition carries the undefined sentinel.
    ///
    /// # Panics
    /// Panics if the handle is invalid.
    pub fn is_undefined(&self) -> bool {
        self.record().reference().is_undefined()
    }

    /// Read access to the record payload.
    ///
    /// Prefer the kind-specific accessors; this is the raw escape hatch they
    /// are built on.
    ///
    /// # Panics
    /// Panics if the handle is invalid.
    pub fn data(&self) -> RwLockReadGuard<'_, T> {
        self.record().data()
    }

    /// Write access to the record payload.
    ///
    /// # Panics
    /// Panics if the handle is invalid.
    pub fn data_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.record().data_mut()
    }

    /// Returns a non-owning observer of the record.
    ///
    /// # Panics
    /// Panics if the handle is invalid.
    pub fn downgrade(&self) -> WeakDefinition<T> {
        WeakDefinition { record: Arc::downgrade(self.record()) }
    }

    fn record(&self) -> &Arc<Record<T>> {
        self.record
            .as_ref()
            .unwrap_or_else(|| panic!("operation on an invalid {} definition handle", T::KIND))
    }
}

impl<T: DefinitionData> Clone for Definition<T> {
    fn clone(&self) -> Self {
        Self { record: self.record.clone() }
    }
}

impl<T: DefinitionData> Default for Definition<T> {
    fn default() -> Self {
        Self::invalid()
    }
}

impl<T: DefinitionData> PartialEq for Definition<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.record, &other.record) {
            (Some(a), Some(b)) => a.reference() == b.reference(),
            _ => false,
        }
    }
}

impl<T: DefinitionData> fmt::Debug for Definition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record {
            Some(record) => write!(f, "{} definition {:?}", T::KIND, record.reference()),
            None => write!(f, "invalid {} definition", T::KIND),
        }
    }
}

impl<T: DefinitionData> Referable for Definition<T> {
    type Tag = T::Tag;

    fn reference(&self) -> Reference<T::Tag> {
        Definition::reference(self)
    }
}

/// Non-owning observer of a definition record.
///
/// Obtained via [`Definition::downgrade`]; [`upgrade`](Self::upgrade) yields
/// a live handle again as long as at least one owning handle survives, and
/// the invalid handle afterwards.
pub struct WeakDefinition<T: DefinitionData> {
    record: Weak<Record<T>>,
}

impl<T: DefinitionData> WeakDefinition<T> {
    /// Attempts to reacquire an owning handle.
    ///
    /// Returns the invalid handle if the record is already gone.
    pub fn upgrade(&self) -> Definition<T> {
        Definition { record: self.record.upgrade() }
    }
}

impl<T: DefinitionData> Clone for WeakDefinition<T> {
    fn clone(&self) -> Self {
        Self { record: self.record.clone() }
    }
}

impl<T: DefinitionData> fmt::Debug for WeakDefinition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weak {} definition", T::KIND)
    }
}
