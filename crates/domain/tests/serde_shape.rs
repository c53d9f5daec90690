// crates/domain/tests/serde_shape.rs
use codeset_domain::Domain;
use codeset_domain::catalog::{Hour, Sex};
use serde_json::json;

#[test]
fn member_serializes_as_value_and_label() {
    let five = Hour::of(5).expect("exists");
    let encoded = serde_json::to_value(&five).expect("serializes");
    assert_eq!(encoded, json!({ "value": 5, "label": "05" }));
}

#[test]
fn member_lists_serialize_in_order() {
    let members = Sex::values().expect("sex builds");
    let encoded = serde_json::to_value(members.as_ref()).expect("serializes");
    assert_eq!(
        encoded,
        json!([
            { "value": 1, "label": "男性" },
            { "value": 2, "label": "女性" },
        ])
    );
}
