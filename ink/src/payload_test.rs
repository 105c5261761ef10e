use super::*;

use crate::export::encode_capture;
use crate::surface::Surface;

fn capture_at(timestamp_ms: i64) -> Capture {
    let surface = Surface::new(4.0, 4.0, 1.0);
    encode_capture(&surface, timestamp_ms).unwrap()
}

// =============================================================
// Field mapping
// =============================================================

#[test]
fn payload_carries_kind_timestamp_and_image() {
    let capture = capture_at(1_700_000_000_123);
    let payload = DeliveryPayload::new(&capture, None);

    assert_eq!(payload.kind, "signature_saved");
    assert_eq!(payload.timestamp, 1_700_000_000_123);
    assert!(payload.image.starts_with("data:image/png;base64,"));
}

#[test]
fn known_user_fills_identity_fields() {
    let capture = capture_at(1);
    let user = HostUser {
        id: Some(987_654_321),
        username: Some("jdoe".to_owned()),
        display_name: Some("J. Doe".to_owned()),
    };
    let payload = DeliveryPayload::new(&capture, Some(&user));

    assert_eq!(payload.user_id, Value::from(987_654_321));
    assert_eq!(payload.username, "jdoe");
}

#[test]
fn missing_user_defaults_to_unknown() {
    let capture = capture_at(1);
    let payload = DeliveryPayload::new(&capture, None);

    assert_eq!(payload.user_id, Value::from("unknown"));
    assert_eq!(payload.username, "unknown");
}

#[test]
fn partial_identity_defaults_per_field() {
    let capture = capture_at(1);
    let user = HostUser { id: Some(7), username: None, display_name: None };
    let payload = DeliveryPayload::new(&capture, Some(&user));

    assert_eq!(payload.user_id, Value::from(7));
    assert_eq!(payload.username, "unknown");
}

// =============================================================
// JSON wire shape
// =============================================================

#[test]
fn json_uses_the_documented_field_names() {
    let capture = capture_at(55);
    let user = HostUser { id: Some(42), username: Some("ann".to_owned()), display_name: None };
    let json = DeliveryPayload::new(&capture, Some(&user)).to_json();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "signature_saved");
    assert_eq!(value["timestamp"], 55);
    assert_eq!(value["user_id"], 42);
    assert_eq!(value["username"], "ann");
    assert!(value["image"].as_str().unwrap().starts_with("data:image/png;base64,"));
}

#[test]
fn json_user_id_is_a_string_when_unknown() {
    let capture = capture_at(55);
    let json = DeliveryPayload::new(&capture, None).to_json();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["user_id"], "unknown");
}
