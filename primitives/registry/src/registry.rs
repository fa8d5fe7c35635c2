//! The registry aggregate: one lookup store per definition kind.

use definitions::{
    AttributeData, CallingContextData, CommData, Definition, DefinitionData, GroupData,
    InterruptGeneratorData, IoDirectoryData, IoHandleData, IoParadigmData,
    IoPreCreatedHandleState, IoRegularFileData, LocationData, LocationGroupData, MarkerData,
    MetricClassData, MetricInstanceData, MetricMemberData, ParameterData, RegionData,
    SourceCodeLocationData, StringData, SystemTreeNodeData,
};
use reference::{Reference, SpaceAllocator, TraceAllocator};

use crate::lookup::{LookupKey, LookupStore};
use crate::RegistryResult;

/// Compile-time selection of the lookup store responsible for one kind.
///
/// The kind set is closed; adding a kind means adding one field to
/// [`Registry`] and one impl of this trait, nothing else.
pub trait HasStore<T: DefinitionData> {
    /// Returns the kind's lookup store.
    fn store(&self) -> &LookupStore<T>;

    /// Returns the kind's lookup store mutably.
    fn store_mut(&mut self) -> &mut LookupStore<T>;
}

/// Holds every definition of a trace, canonically once per kind, retrievable
/// by reference number or by any key it was indexed under.
///
/// Creation either mints a fresh reference number through the owned
/// [`TraceAllocator`] or accepts an explicit one (the ingest path, e.g. when
/// definitions arrive from a file); explicit numbers are registered with the
/// allocator so later allocation cannot collide. Definitions are never
/// removed; they become unreachable only when the registry is dropped, and
/// surviving handles keep their records alive beyond that.
#[derive(Default)]
pub struct Registry {
    allocator: TraceAllocator,
    strings: LookupStore<StringData>,
    attributes: LookupStore<AttributeData>,
    locations: LookupStore<LocationData>,
    location_groups: LookupStore<LocationGroupData>,
    system_tree_nodes: LookupStore<SystemTreeNodeData>,
    groups: LookupStore<GroupData>,
    comms: LookupStore<CommData>,
    regions: LookupStore<RegionData>,
    parameters: LookupStore<ParameterData>,
    source_code_locations: LookupStore<SourceCodeLocationData>,
    calling_contexts: LookupStore<CallingContextData>,
    interrupt_generators: LookupStore<InterruptGeneratorData>,
    io_regular_files: LookupStore<IoRegularFileData>,
    io_directories: LookupStore<IoDirectoryData>,
    io_handles: LookupStore<IoHandleData>,
    io_paradigms: LookupStore<IoParadigmData>,
    metric_members: LookupStore<MetricMemberData>,
    metric_classes: LookupStore<MetricClassData>,
    metric_instances: LookupStore<MetricInstanceData>,
    markers: LookupStore<MarkerData>,
    io_pre_created_handle_states: Vec<IoPreCreatedHandleState>,
}

macro_rules! has_store {
    ($($field:ident => $data:ty),+ $(,)?) => {
        $(
            impl HasStore<$data> for Registry {
                fn store(&self) -> &LookupStore<$data> {
                    &self.$field
                }

                fn store_mut(&mut self) -> &mut LookupStore<$data> {
                    &mut self.$field
                }
            }
        )+
    };
}

has_store! {
    strings => StringData,
    attributes => AttributeData,
    locations => LocationData,
    location_groups => LocationGroupData,
    system_tree_nodes => SystemTreeNodeData,
    groups => GroupData,
    comms => CommData,
    regions => RegionData,
    parameters => ParameterData,
    source_code_locations => SourceCodeLocationData,
    calling_contexts => CallingContextData,
    interrupt_generators => InterruptGeneratorData,
    io_regular_files => IoRegularFileData,
    io_directories => IoDirectoryData,
    io_handles => IoHandleData,
    io_paradigms => IoParadigmData,
    metric_members => MetricMemberData,
    metric_classes => MetricClassData,
    metric_instances => MetricInstanceData,
    markers => MarkerData,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a definition with a freshly allocated reference number.
    pub fn create<T>(&mut self, data: T) -> RegistryResult<Definition<T>>
    where
        T: DefinitionData,
        Self: HasStore<T>,
        TraceAllocator: SpaceAllocator<T::Tag>,
    {
        let reference = self.allocator.next::<T::Tag>()?;
        let def = Definition::create(reference, data);
        HasStore::<T>::store_mut(self).insert(def.clone())?;
        Ok(def)
    }

    /// Creates a definition with an explicit reference number.
    ///
    /// Used when ingesting pre-existing definitions. The number is registered
    /// with the allocator so later allocation avoids it; if the kind already
    /// stores that number, the call fails and nothing is overwritten.
    pub fn create_at<T>(
        &mut self,
        reference: Reference<T::Tag>,
        data: T,
    ) -> RegistryResult<Definition<T>>
    where
        T: DefinitionData,
        Self: HasStore<T>,
        TraceAllocator: SpaceAllocator<T::Tag>,
    {
        logging::trace("registry", &format!("ingest {} definition {}", T::KIND, reference));
        self.allocator.register(reference);
        let def = Definition::create(reference, data);
        HasStore::<T>::store_mut(self).insert(def.clone())?;
        Ok(def)
    }

    /// Creates a definition under `key`, or returns the one already there.
    ///
    /// Idempotent create-or-fetch: when the key is taken, the existing handle
    /// comes back and `data` is dropped unused.
    pub fn create_keyed<T, K>(&mut self, key: K, data: T) -> RegistryResult<Definition<T>>
    where
        T: DefinitionData,
        K: LookupKey,
        Self: HasStore<T>,
        TraceAllocator: SpaceAllocator<T::Tag>,
    {
        if HasStore::<T>::store(self).has_key(&key) {
            return HasStore::<T>::store(self).get_by_key(&key);
        }
        let def = self.create(data)?;
        HasStore::<T>::store_mut(self).insert_key(key, def.reference());
        Ok(def)
    }

    /// Creates a definition under `key` with an explicit reference number, or
    /// returns the one already indexed there.
    pub fn create_keyed_at<T, K>(
        &mut self,
        key: K,
        reference: Reference<T::Tag>,
        data: T,
    ) -> RegistryResult<Definition<T>>
    where
        T: DefinitionData,
        K: LookupKey,
        Self: HasStore<T>,
        TraceAllocator: SpaceAllocator<T::Tag>,
    {
        if HasStore::<T>::store(self).has_key(&key) {
            return HasStore::<T>::store(self).get_by_key(&key);
        }
        let def = self.create_at(reference, data)?;
        HasStore::<T>::store_mut(self).insert_key(key, def.reference());
        Ok(def)
    }

    /// Inserts a definition constructed elsewhere.
    ///
    /// The definition's reference number is registered with the allocator and
    /// must not collide with canonical content.
    ///
    /// # Panics
    /// Panics if `def` is an invalid handle.
    pub fn register_definition<T>(&mut self, def: Definition<T>) -> RegistryResult<Definition<T>>
    where
        T: DefinitionData,
        Self: HasStore<T>,
        TraceAllocator: SpaceAllocator<T::Tag>,
    {
        logging::trace(
            "registry",
            &format!("register external {} definition {}", T::KIND, def.reference()),
        );
        self.allocator.register(def.reference());
        HasStore::<T>::store_mut(self).insert(def.clone())?;
        Ok(def)
    }

    /// Inserts a definition constructed elsewhere and indexes it under `key`.
    ///
    /// Fails on reference-number collision exactly as
    /// [`register_definition`](Self::register_definition) does, in which case
    /// no index entry is written.
    ///
    /// # Panics
    /// Panics if `def` is an invalid handle.
    pub fn register_definition_keyed<T, K>(
        &mut self,
        key: K,
        def: Definition<T>,
    ) -> RegistryResult<Definition<T>>
    where
        T: DefinitionData,
        K: LookupKey,
        Self: HasStore<T>,
        TraceAllocator: SpaceAllocator<T::Tag>,
    {
        let def = self.register_definition(def)?;
        HasStore::<T>::store_mut(self).insert_key(key, def.reference());
        Ok(def)
    }

    /// Returns the definition stored under `reference`, bypassing every
    /// secondary index.
    pub fn get<T>(&self, reference: Reference<T::Tag>) -> RegistryResult<Definition<T>>
    where
        T: DefinitionData,
        Self: HasStore<T>,
    {
        HasStore::<T>::store(self).get(reference)
    }

    /// Returns the definition indexed under `key`.
    pub fn get_keyed<T, K>(&self, key: &K) -> RegistryResult<Definition<T>>
    where
        T: DefinitionData,
        K: LookupKey,
        Self: HasStore<T>,
    {
        HasStore::<T>::store(self).get_by_key(key)
    }

    /// Returns whether a definition is stored under `reference`.
    pub fn has<T>(&self, reference: Reference<T::Tag>) -> bool
    where
        T: DefinitionData,
        Self: HasStore<T>,
    {
        HasStore::<T>::store(self).contains(reference)
    }

    /// Returns whether a definition is indexed under `key`.
    pub fn has_keyed<T, K>(&self, key: &K) -> bool
    where
        T: DefinitionData,
        K: LookupKey,
        Self: HasStore<T>,
    {
        HasStore::<T>::store(self).has_key(key)
    }

    /// Iterates over every canonical definition of a kind, regardless of
    /// which keys created them.
    pub fn all<T>(&self) -> impl Iterator<Item = &Definition<T>> + '_
    where
        T: DefinitionData,
        Self: HasStore<T>,
    {
        HasStore::<T>::store(self).all()
    }

    /// Returns the number of canonical definitions of a kind.
    pub fn count<T>(&self) -> usize
    where
        T: DefinitionData,
        Self: HasStore<T>,
    {
        HasStore::<T>::store(self).len()
    }

    /// Records the state of an I/O handle that predates the measurement.
    ///
    /// The state has no reference number of its own; its inner handle's
    /// number is registered with the shared `io_handle` space.
    ///
    /// # Panics
    /// Panics if the state's handle is an invalid handle.
    pub fn register_pre_created_handle_state(&mut self, state: IoPreCreatedHandleState) {
        self.allocator.register_definition(&state);
        self.io_pre_created_handle_states.push(state);
    }

    /// Returns every recorded pre-created handle state.
    pub fn pre_created_handle_states(&self) -> &[IoPreCreatedHandleState] {
        &self.io_pre_created_handle_states
    }

    /// Returns the reference allocator.
    pub fn allocator(&self) -> &TraceAllocator {
        &self.allocator
    }

    /// Returns the reference allocator mutably.
    ///
    /// The format layer's reader uses this to seed further spaces before
    /// handing the registry to application code.
    pub fn allocator_mut(&mut self) -> &mut TraceAllocator {
        &mut self.allocator
    }
}
