use crate::IdentityField;

use serde_json::json;

#[test]
fn test_decode_object_with_display_name() {
    let value = json!({"displayName": "Jane Smith", "id": "abc"});

    assert_eq!(
        IdentityField::decode(Some(&value)),
        IdentityField::Object {
            display_name: Some("Jane Smith".to_string())
        }
    );
    assert_eq!(
        IdentityField::decode(Some(&value)).display_name().as_deref(),
        Some("Jane Smith")
    );
}

#[test]
fn test_decode_object_without_display_name() {
    let value = json!({"uniqueName": "jane@example.com"});
    assert_eq!(IdentityField::decode(Some(&value)).display_name(), None);
}

#[test]
fn test_decode_other_shapes() {
    assert_eq!(IdentityField::decode(Some(&json!("Jane"))), IdentityField::Other);
    assert_eq!(IdentityField::decode(Some(&json!(42))), IdentityField::Other);
    assert_eq!(IdentityField::decode(Some(&json!(["Jane"]))), IdentityField::Other);
}

#[test]
fn test_decode_absent_and_null() {
    assert_eq!(IdentityField::decode(None), IdentityField::Absent);
    assert_eq!(IdentityField::decode(Some(&json!(null))), IdentityField::Absent);
}
