use definitions::common::{IoAccessMode, IoParadigmClass, LocationGroupType, LocationType};
use definitions::{
    Definition, IoHandleDef, IoParadigmDef, IoPreCreatedHandleState, IoRegularFileDef,
    LocationDef, LocationGroupDef, StringData, StringDef, SystemTreeNodeDef,
};
use reference::{
    IoFileRef, IoHandleRef, IoParadigmRef, LocationGroupRef, LocationRef, Referable, StringRef,
    SystemTreeNodeRef,
};

/// Helper to create a string definition with a given reference number.
fn string(reference: u64, value: &str) -> StringDef {
    StringDef::new(StringRef::new(reference), value)
}

#[test]
fn test_default_handle_is_invalid() {
    let handle = StringDef::default();
    assert!(!handle.is_valid());
}

#[test]
fn test_created_handle_is_valid() {
    let handle = string(0, "hello");
    assert!(handle.is_valid());
    assert_eq!(handle.reference().get(), 0);
    assert_eq!(handle.str(), "hello");
}

#[test]
fn test_equality_is_by_reference_number() {
    let a = string(4, "one");
    let b = string(4, "a completely different payload");
    let c = string(5, "one");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_invalid_handles_are_never_equal() {
    let invalid = StringDef::invalid();
    let other_invalid = StringDef::invalid();
    let valid = string(0, "x");

    assert_ne!(invalid, other_invalid);
    assert_ne!(invalid, valid);
    assert_ne!(valid, invalid);
}

#[test]
fn test_copies_share_the_record() {
    let original = string(7, "before");
    let copy = original.clone();

    copy.set_str("after");
    assert_eq!(original.str(), "after");
    assert_eq!(original, copy);
}

#[test]
fn test_undefined_is_a_singleton() {
    let first = StringDef::undefined();
    let second = StringDef::undefined();

    assert!(first.is_valid());
    assert!(first.is_undefined());
    assert!(first.reference().is_undefined());
    assert_eq!(first, second);
}

#[test]
fn test_undefined_differs_from_created_definitions() {
    let created = string(0, "x");
    assert_ne!(StringDef::undefined(), created);
}

#[test]
fn test_weak_handle_upgrades_while_record_lives() {
    let strong = string(1, "kept alive");
    let weak = strong.downgrade();

    let upgraded = weak.upgrade();
    assert!(upgraded.is_valid());
    assert_eq!(upgraded, strong);
}

#[test]
fn test_weak_handle_expires_with_the_last_owner() {
    let weak = {
        let strong = string(2, "short lived");
        strong.downgrade()
    };

    assert!(!weak.upgrade().is_valid());
}

#[test]
#[should_panic(expected = "invalid string definition handle")]
fn test_operations_on_invalid_handles_fail_fast() {
    let invalid: Definition<StringData> = Definition::invalid();
    let _ = invalid.reference();
}

#[test]
fn test_nested_definitions_read_through_handles() {
    let root = SystemTreeNodeDef::new(
        SystemTreeNodeRef::new(0),
        string(0, "blade"),
        string(1, "machine"),
    );
    let child = SystemTreeNodeDef::with_parent(
        SystemTreeNodeRef::new(1),
        string(2, "node 0"),
        string(3, "node"),
        root.clone(),
    );

    assert!(root.parent().is_undefined());
    assert_eq!(child.parent(), root);
    assert_eq!(child.name().str(), "node 0");

    child.set_name(string(4, "node zero"));
    assert_eq!(child.name().str(), "node zero");
}

#[test]
fn test_location_event_counter_is_shared_payload() {
    let group = LocationGroupDef::new(
        LocationGroupRef::new(0),
        string(0, "rank 0"),
        LocationGroupType::Process,
        SystemTreeNodeDef::undefined(),
    );
    let location = LocationDef::new(
        LocationRef::new(0),
        string(1, "main thread"),
        group,
        LocationType::CpuThread,
    );
    let copy = location.clone();

    location.record_events(3);
    copy.record_events(2);
    assert_eq!(location.events(), 5);
}

#[test]
fn test_io_file_carries_the_shared_space_reference() {
    let file = IoRegularFileDef::new(
        IoFileRef::new(3),
        string(0, "/tmp/out.dat"),
        SystemTreeNodeDef::undefined(),
    );
    let handle = IoHandleDef::new(
        IoHandleRef::new(0),
        string(1, "stdout"),
        file.clone(),
        IoParadigmDef::new(
            IoParadigmRef::new(0),
            string(2, "POSIX"),
            string(3, "POSIX I/O"),
            IoParadigmClass::Serial,
        ),
    );

    assert_eq!(handle.file().reference(), IoFileRef::new(3));
    assert_eq!(handle.file().reference(), file.reference());
}

#[test]
fn test_pre_created_handle_state_uses_the_handle_identity() {
    let handle = IoHandleDef::new(
        IoHandleRef::new(11),
        string(0, "stdin"),
        IoRegularFileDef::undefined(),
        IoParadigmDef::undefined(),
    );
    let state = IoPreCreatedHandleState::new(handle.clone(), IoAccessMode::ReadOnly);

    assert_eq!(Referable::reference(&state), handle.reference());
    assert_eq!(state.access_mode(), IoAccessMode::ReadOnly);
}
