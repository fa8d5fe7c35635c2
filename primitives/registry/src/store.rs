//! The canonical per-category store.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use definitions::{Definition, DefinitionData};
use reference::Reference;

use crate::{RegistryError, RegistryResult};

/// Canonical store of one definition category.
///
/// Maps each reference number to the single shared instance carrying it: at
/// most one live definition per (category, reference number) pair, and the
/// stored handle's own reference number is always its key. Iteration order is
/// by reference number, stable for the lifetime of the store.
pub struct DefinitionStore<T: DefinitionData> {
    entries: BTreeMap<u64, Definition<T>>,
}

impl<T: DefinitionData> Default for DefinitionStore<T> {
    fn default() -> Self {
        Self { entries: BTreeMap::new() }
    }
}

impl<T: DefinitionData> DefinitionStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `def`, keyed by its own reference number.
    ///
    /// Fails with [`RegistryError::DuplicateReference`] if the number is
    /// already taken; the existing entry is left untouched.
    pub fn insert(&mut self, def: Definition<T>) -> RegistryResult<()> {
        let reference = def.reference().get();
        match self.entries.entry(reference) {
            Entry::Occupied(_) => {
                Err(RegistryError::DuplicateReference { kind: T::KIND, reference })
            }
            Entry::Vacant(slot) => {
                slot.insert(def);
                Ok(())
            }
        }
    }

    /// Returns the definition stored under `reference`.
    pub fn get(&self, reference: Reference<T::Tag>) -> RegistryResult<Definition<T>> {
        self.entries.get(&reference.get()).cloned().ok_or(RegistryError::NotFound {
            kind: T::KIND,
            reference: reference.get(),
        })
    }

    /// Returns whether a definition is stored under `reference`.
    pub fn contains(&self, reference: Reference<T::Tag>) -> bool {
        self.entries.contains_key(&reference.get())
    }

    /// Iterates over every stored definition, ordered by reference number.
    pub fn all(&self) -> impl Iterator<Item = &Definition<T>> + '_ {
        self.entries.values()
    }

    /// Returns the number of stored definitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
