//! Operation Tests
//!
//! Tests for operation construction, command mapping and JSON shape.

use listbatch::protocol::{ErrorPolicy, Field, MethodCommand, Operation, RowId};

#[test]
fn test_field_from_pairs() {
    let f: Field = ("Title", String::from("x")).into();
    assert_eq!(f, Field::new("Title", "x"));
}

#[test]
fn test_create_maps_to_save_new() {
    let op = Operation::create("L", [("a", "1")]);
    assert_eq!(op.command(), MethodCommand::Save);
    assert_eq!(op.row_id(), RowId::New);
    assert_eq!(op.target(), "L");
    assert_eq!(op.fields(), &[Field::new("a", "1")]);
}

#[test]
fn test_update_maps_to_save_id() {
    let op = Operation::update("L", 12, [Field::new("a", "1")]);
    assert_eq!(op.command(), MethodCommand::Save);
    assert_eq!(op.row_id(), RowId::Item(12));
}

#[test]
fn test_delete_maps_to_delete_id() {
    let op = Operation::delete("L", 9);
    assert_eq!(op.command(), MethodCommand::Delete);
    assert_eq!(op.row_id(), RowId::Item(9));
    assert!(op.fields().is_empty());
}

#[test]
fn test_wire_values() {
    assert_eq!(MethodCommand::Save.to_string(), "Save");
    assert_eq!(MethodCommand::Delete.to_string(), "Delete");
    assert_eq!(RowId::New.to_string(), "New");
    assert_eq!(RowId::Item(42).to_string(), "42");
    assert_eq!(ErrorPolicy::StopOnError.wire_value(), "Return");
    assert_eq!(ErrorPolicy::ContinueOnError.wire_value(), "Continue");
    assert_eq!(ErrorPolicy::default(), ErrorPolicy::StopOnError);
}

#[test]
fn test_json_shape() {
    let op = Operation::update("L", 3, [("Title", "t")]);
    let json = serde_json::to_value(&op).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "op": "update",
            "target": "L",
            "id": 3,
            "fields": [{"name": "Title", "value": "t"}]
        })
    );
}
