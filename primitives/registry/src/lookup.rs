//! Secondary key spaces layered over the canonical store.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::hash::Hash;

use definitions::{Definition, DefinitionData};
use reference::Reference;

use crate::store::DefinitionStore;
use crate::{RegistryError, RegistryResult};

/// Marker for secondary-index key types.
///
/// Any hashable, thread-safe value type works; key types are application
/// defined and orthogonal per category.
pub trait LookupKey: Eq + Hash + Send + Sync + 'static {}

impl<K: Eq + Hash + Send + Sync + 'static> LookupKey for K {}

/// One definition category's canonical store plus its secondary indices.
///
/// Each index maps values of one key type to reference numbers; indices are
/// created lazily on first use, so a category nobody keys stays a plain
/// reference-only store. Index entries are only written after the canonical
/// insert succeeded, which keeps every indexed number resolvable. Several
/// indices may point at the same reference number; aliases are cheap.
pub struct LookupStore<T: DefinitionData> {
    store: DefinitionStore<T>,
    indices: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl<T: DefinitionData> Default for LookupStore<T> {
    fn default() -> Self {
        Self { store: DefinitionStore::new(), indices: HashMap::new() }
    }
}

impl<T: DefinitionData> LookupStore<T> {
    /// Creates a store with no secondary indices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical store.
    pub fn store(&self) -> &DefinitionStore<T> {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut DefinitionStore<T> {
        &mut self.store
    }

    /// Inserts `def` into the canonical store.
    pub(crate) fn insert(&mut self, def: Definition<T>) -> RegistryResult<()> {
        self.store.insert(def)
    }

    fn index<K: LookupKey>(&self) -> Option<&HashMap<K, u64>> {
        self.indices.get(&TypeId::of::<K>())?.downcast_ref()
    }

    fn index_mut<K: LookupKey>(&mut self) -> &mut HashMap<K, u64> {
        self.indices
            .entry(TypeId::of::<K>())
            .or_insert_with(|| Box::new(HashMap::<K, u64>::new()))
            .downcast_mut()
            // The box under a key type's TypeId only ever holds that key
            // type's map.
            .expect("index entry matches its TypeId")
    }

    /// Indexes `reference` under `key`.
    ///
    /// The reference must already be canonical; the registry upholds that by
    /// indexing only after a successful insert.
    pub(crate) fn insert_key<K: LookupKey>(&mut self, key: K, reference: Reference<T::Tag>) {
        self.index_mut::<K>().insert(key, reference.get());
    }

    /// Returns the definition indexed under `key`.
    pub fn get_by_key<K: LookupKey>(&self, key: &K) -> RegistryResult<Definition<T>> {
        let reference = self
            .index::<K>()
            .and_then(|index| index.get(key).copied())
            .ok_or(RegistryError::KeyNotFound { kind: T::KIND })?;
        self.store.get(Reference::new(reference))
    }

    /// Returns whether a definition is indexed under `key`.
    pub fn has_key<K: LookupKey>(&self, key: &K) -> bool {
        self.index::<K>().is_some_and(|index| index.contains_key(key))
    }

    /// Returns the definition stored under `reference`, bypassing every
    /// secondary index.
    pub fn get(&self, reference: Reference<T::Tag>) -> RegistryResult<Definition<T>> {
        self.store.get(reference)
    }

    /// Returns whether a definition is stored under `reference`.
    pub fn contains(&self, reference: Reference<T::Tag>) -> bool {
        self.store.contains(reference)
    }

    /// Iterates over every canonical definition, regardless of which keys
    /// created them.
    pub fn all(&self) -> impl Iterator<Item = &Definition<T>> + '_ {
        self.store.all()
    }

    /// Returns the number of canonical definitions.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns whether the category holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
