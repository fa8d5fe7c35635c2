//! Heap records behind definition handles.

use std::sync::{Arc, OnceLock};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use reference::{RefTag, Reference};

/// Payload of one definition kind.
///
/// A kind ties a payload type to its reference space, names itself for
/// diagnostics, and backs the process-wide undefined singleton. Two kinds may
/// share a space (their tag is the same type); each still keeps its own
/// payload type, singleton, and canonical store.
pub trait DefinitionData: Sized + Send + Sync + 'static {
    /// The reference space this kind draws its numbers from.
    type Tag: RefTag;

    /// Diagnostic name of the kind.
    const KIND: &'static str;

    /// Payload carried by the kind's undefined singleton.
    fn undefined_data() -> Self;

    /// Storage slot backing the kind's undefined singleton record.
    fn undefined_slot() -> &'static OnceLock<Arc<Record<Self>>>;
}

/// Implements [`DefinitionData`] for a payload type.
///
/// Takes the payload, its space tag, the diagnostic kind name, and the
/// expression producing the undefined singleton's payload.
macro_rules! definition_data {
    ($data:ident, $tag:ty, $kind:literal, $undefined:expr) => {
        impl $crate::record::DefinitionData for $data {
            type Tag = $tag;

            const KIND: &'static str = $kind;

            fn undefined_data() -> Self {
                $undefined
            }

            fn undefined_slot(
            ) -> &'static std::sync::OnceLock<std::sync::Arc<$crate::record::Record<Self>>> {
                static SLOT: std::sync::OnceLock<std::sync::Arc<$crate::record::Record<$data>>> =
                    std::sync::OnceLock::new();
                &SLOT
            }
        }
    };
}

pub(crate) use definition_data;

/// Heap record behind a definition handle.
///
/// The reference number is fixed at construction and never changes; it is the
/// record's identity. The payload stays mutable behind a lock so that every
/// handle copy observes the same fields. The lock makes read-only sharing
/// across threads sound; serializing payload mutation remains the caller's
/// contract.
pub struct Record<T: DefinitionData> {
    reference: Reference<T::Tag>,
    data: RwLock<T>,
}

impl<T: DefinitionData> Record<T> {
    pub(crate) fn new(reference: Reference<T::Tag>, data: T) -> Self {
        Self { reference, data: RwLock::new(data) }
    }

    /// Returns the record's reference number.
    pub fn reference(&self) -> Reference<T::Tag> {
        self.reference
    }

    /// Read access to the payload.
    pub fn data(&self) -> RwLockReadGuard<'_, T> {
        self.data.read()
    }

    /// Write access to the payload.
    pub fn data_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.data.write()
    }
}
