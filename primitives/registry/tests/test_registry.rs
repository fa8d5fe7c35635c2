use definitions::common::{IoAccessMode, MetricOccurrence, RecorderKind};
use definitions::{
    IoHandleData, IoHandleDef, IoParadigmDef, IoPreCreatedHandleState, IoRegularFileDef,
    MetricClassData, MetricInstanceData, StringData, StringDef, SystemTreeNodeData,
    SystemTreeNodeDef,
};
use reference::space::StringSpace;
use reference::{IoHandleRef, StringRef};
use registry::{Registry, RegistryError};

/// Key space indexing definitions by the CPU they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ByCpu(u32);

/// Key space indexing definitions by process id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ByProcess(u32);

fn string_data(value: &str) -> StringData {
    StringData { value: value.to_string() }
}

#[test]
fn test_first_keyed_create_allocates_reference_zero() {
    let mut reg = Registry::new();

    let def = reg.create_keyed(ByCpu(7), string_data("cpu 7")).expect("fresh registry");
    assert_eq!(def.reference().get(), 0);
    assert_eq!(def.str(), "cpu 7");
}

#[test]
fn test_keyed_create_is_idempotent() {
    let mut reg = Registry::new();

    let first = reg.create_keyed(ByCpu(7), string_data("cpu 7")).expect("fresh registry");
    let second = reg.create_keyed(ByCpu(7), string_data("ignored")).expect("existing key");

    assert_eq!(first, second);
    assert_eq!(second.str(), "cpu 7");
    assert_eq!(reg.count::<StringData>(), 1);
}

#[test]
fn test_distinct_keys_allocate_distinct_references() {
    let mut reg = Registry::new();

    let cpu = reg.create_keyed(ByCpu(7), string_data("cpu 7")).expect("fresh registry");
    let process =
        reg.create_keyed(ByProcess(7435), string_data("process 7435")).expect("fresh key");

    assert_ne!(cpu, process);
    assert_ne!(cpu.reference(), process.reference());
}

#[test]
fn test_explicit_reference_coexists_and_seeds_the_allocator() {
    let mut reg = Registry::new();

    let keyed = reg.create_keyed(ByCpu(7), string_data("cpu 7")).expect("fresh registry");
    assert_eq!(keyed.reference().get(), 0);

    let explicit = reg.create_at(StringRef::new(2), string_data("horst")).expect("free number");
    assert_eq!(explicit.reference().get(), 2);

    // 2 is now the tracked maximum, so the next allocation lands at 3.
    let next = reg.create(string_data("regenbogen")).expect("free number");
    assert_eq!(next.reference().get(), 3);
}

#[test]
fn test_key_lookup_and_raw_lookup_agree() {
    let mut reg = Registry::new();

    let created = reg.create_keyed(ByCpu(7), string_data("cpu 7")).expect("fresh registry");

    let by_key: StringDef = reg.get_keyed(&ByCpu(7)).expect("indexed");
    let by_reference: StringDef = reg.get(StringRef::new(0)).expect("canonical");

    assert_eq!(by_key, created);
    assert_eq!(by_reference, created);
    assert_eq!(by_key.str(), "cpu 7");
}

#[test]
fn test_duplicate_explicit_reference_is_rejected() {
    let mut reg = Registry::new();

    reg.create_at(StringRef::new(2), string_data("horst")).expect("free number");
    let result = reg.create_at(StringRef::new(2), string_data("horst again"));

    assert_eq!(
        result,
        Err(RegistryError::DuplicateReference { kind: "string", reference: 2 })
    );
    assert_eq!(reg.count::<StringData>(), 1);
}

#[test]
fn test_keyed_create_with_explicit_reference() {
    let mut reg = Registry::new();

    let def = reg
        .create_keyed_at(ByProcess(745), StringRef::new(17), string_data("process 745"))
        .expect("free number");
    assert_eq!(def.reference().get(), 17);

    let fetched: StringDef = reg.get_keyed(&ByProcess(745)).expect("indexed");
    assert_eq!(fetched, def);

    // The explicit number seeds the shared allocator.
    let next = reg.create(string_data("after")).expect("free number");
    assert_eq!(next.reference().get(), 18);
}

#[test]
fn test_register_external_definition() {
    let mut reg = Registry::new();

    let alien = StringDef::new(StringRef::new(6), "I'm alien");
    reg.register_definition_keyed(ByProcess(42), alien.clone()).expect("free number");

    assert!(reg.has::<StringData>(StringRef::new(6)));
    assert!(reg.has_keyed::<StringData, _>(&ByProcess(42)));
    let fetched: StringDef = reg.get_keyed(&ByProcess(42)).expect("indexed");
    assert_eq!(fetched, alien);

    // Its number counts as used.
    let next = reg.create(string_data("fresh")).expect("free number");
    assert_eq!(next.reference().get(), 7);
}

#[test]
fn test_probes_never_fail() {
    let mut reg = Registry::new();
    reg.create_keyed(ByCpu(7), string_data("cpu 7")).expect("fresh registry");
    reg.create_at(StringRef::new(6), string_data("six")).expect("free number");

    assert!(reg.has::<StringData>(StringRef::new(6)));
    assert!(!reg.has_keyed::<StringData, _>(&ByCpu(6)));
    assert!(reg.has_keyed::<StringData, _>(&ByCpu(7)));
    assert!(!reg.has_keyed::<StringData, _>(&ByProcess(6)));
}

#[test]
fn test_missing_lookups_surface_errors() {
    let reg = Registry::new();

    assert_eq!(
        reg.get::<StringData>(StringRef::new(0)),
        Err(RegistryError::NotFound { kind: "string", reference: 0 })
    );
    assert_eq!(
        reg.get_keyed::<StringData, _>(&ByCpu(1)),
        Err(RegistryError::KeyNotFound { kind: "string" })
    );
}

#[test]
fn test_all_spans_every_key_space() {
    let mut reg = Registry::new();

    reg.create_keyed(ByCpu(7), string_data("cpu 7")).expect("fresh registry");
    reg.create_keyed(ByProcess(7435), string_data("process 7435")).expect("fresh key");
    reg.create_keyed_at(ByProcess(745), StringRef::new(17), string_data("process 745"))
        .expect("free number");
    reg.create_at(StringRef::new(2), string_data("horst")).expect("free number");
    reg.create(string_data("regenbogen")).expect("free number");

    // Five distinct definitions, no matter which keys created them.
    assert_eq!(reg.count::<StringData>(), 5);
    assert_eq!(reg.all::<StringData>().count(), 5);

    // Iteration is over canonical content, ordered by reference number.
    let references: Vec<u64> = reg.all::<StringData>().map(|def| def.reference().get()).collect();
    assert_eq!(references, vec![0, 1, 2, 17, 18]);
}

#[test]
fn test_categories_do_not_interfere() {
    let mut reg = Registry::new();

    let name = reg.create_keyed(ByCpu(42), string_data("cpu 42")).expect("fresh registry");
    let node = reg
        .create_keyed(
            ByCpu(42),
            SystemTreeNodeData {
                name: name.clone(),
                class_name: StringDef::undefined(),
                parent: SystemTreeNodeDef::undefined(),
            },
        )
        .expect("fresh registry");

    // Same key value, different categories: both resolve independently, and
    // both spaces started counting at zero.
    assert_eq!(node.reference().get(), 0);
    assert_eq!(name.reference().get(), 0);
    let fetched_node: SystemTreeNodeDef = reg.get_keyed(&ByCpu(42)).expect("indexed");
    let fetched_name: StringDef = reg.get_keyed(&ByCpu(42)).expect("indexed");
    assert_eq!(fetched_node, node);
    assert_eq!(fetched_name, name);
}

#[test]
fn test_mutation_through_a_fetched_handle_is_shared() {
    let mut reg = Registry::new();

    let name = reg.create(string_data("old name")).expect("fresh registry");
    let replacement = reg.create(string_data("new name")).expect("fresh registry");
    reg.create_keyed(
        ByCpu(0),
        SystemTreeNodeData {
            name,
            class_name: StringDef::undefined(),
            parent: SystemTreeNodeDef::undefined(),
        },
    )
    .expect("fresh registry");

    let node: SystemTreeNodeDef = reg.get_keyed(&ByCpu(0)).expect("indexed");
    node.set_name(replacement);

    let fetched: SystemTreeNodeDef = reg.get_keyed(&ByCpu(0)).expect("indexed");
    assert_eq!(fetched.name().str(), "new name");
}

#[test]
fn test_undefined_is_never_canonical() {
    let mut reg = Registry::new();
    let created = reg.create(string_data("real")).expect("fresh registry");

    assert_ne!(StringDef::undefined(), created);
    assert!(!reg.has::<StringData>(StringRef::undefined()));
}

#[test]
fn test_handles_outlive_the_registry() {
    let def = {
        let mut reg = Registry::new();
        reg.create(string_data("survivor")).expect("fresh registry")
    };

    // The registry is gone; the surviving handle still owns the record.
    assert!(def.is_valid());
    assert_eq!(def.str(), "survivor");
}

#[test]
fn test_metric_classes_and_instances_share_a_space() {
    let mut reg = Registry::new();

    let class = reg
        .create(MetricClassData {
            members: Vec::new(),
            occurrence: MetricOccurrence::Strict,
            recorder_kind: RecorderKind::Abstract,
        })
        .expect("fresh registry");
    let instance = reg
        .create(MetricInstanceData {
            class: class.clone(),
            recorder: definitions::LocationDef::undefined(),
        })
        .expect("fresh registry");

    // Distinct kinds, one numeric space: the instance continues where the
    // class left off.
    assert_eq!(class.reference().get(), 0);
    assert_eq!(instance.reference().get(), 1);

    // Each kind still keeps its own canonical store.
    assert_eq!(reg.count::<MetricClassData>(), 1);
    assert_eq!(reg.count::<MetricInstanceData>(), 1);
}

#[test]
fn test_pre_created_handle_states_occupy_the_handle_space() {
    let mut reg = Registry::new();

    let handle = IoHandleDef::new(
        IoHandleRef::new(5),
        StringDef::undefined(),
        IoRegularFileDef::undefined(),
        IoParadigmDef::undefined(),
    );
    reg.register_pre_created_handle_state(IoPreCreatedHandleState::new(
        handle,
        IoAccessMode::ReadWrite,
    ));

    assert_eq!(reg.pre_created_handle_states().len(), 1);

    // The state has no number of its own; its handle's number is what counts
    // as used in the io_handle space.
    let next = reg
        .create(IoHandleData {
            name: StringDef::undefined(),
            file: definitions::IoFile::undefined(),
            paradigm: IoParadigmDef::undefined(),
        })
        .expect("fresh registry");
    assert_eq!(next.reference().get(), 6);
}

#[test]
fn test_allocator_access_spans_create_paths() {
    let mut reg = Registry::new();
    reg.create_at(StringRef::new(41), string_data("seeded")).expect("free number");

    let minted = reg.allocator_mut().next::<StringSpace>().expect("free number");
    assert_eq!(minted.get(), 42);

    // The registry's own creation path continues after the externally minted
    // number.
    let next = reg.create(string_data("after")).expect("free number");
    assert_eq!(next.reference().get(), 43);
}
