//! Outbound delivery payload: the single message handed to the host
//! bridge when a capture is confirmed.
//!
//! The wire shape is fixed by the receiving host bot:
//! `{ "type": "signature_saved", "timestamp": <epoch-ms>,
//!    "image": <PNG data URL>, "user_id": <id or "unknown">,
//!    "username": <handle or "unknown"> }`.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::Serialize;
use serde_json::Value;

use crate::export::Capture;

/// Placeholder for identity fields the host did not provide.
pub const UNKNOWN_USER: &str = "unknown";

/// Message discriminator checked by the receiving host.
pub const PAYLOAD_KIND: &str = "signature_saved";

/// Best-effort user identity read from the host bridge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostUser {
    /// Numeric host user id.
    pub id: Option<i64>,
    /// Host handle, without any `@` prefix.
    pub username: Option<String>,
    /// Display name, unused on the wire but shown in diagnostics.
    pub display_name: Option<String>,
}

/// Wire shape of the confirm message.
///
/// `user_id` serializes as a JSON number when the host supplied an id
/// and as the string `"unknown"` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryPayload {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub timestamp: i64,
    pub image: String,
    pub user_id: Value,
    pub username: String,
}

impl DeliveryPayload {
    /// Build the payload for a confirmed capture.
    #[must_use]
    pub fn new(capture: &Capture, user: Option<&HostUser>) -> Self {
        Self {
            kind: PAYLOAD_KIND,
            timestamp: capture.timestamp_ms(),
            image: capture.to_data_url(),
            user_id: user
                .and_then(|u| u.id)
                .map_or_else(|| Value::from(UNKNOWN_USER), Value::from),
            username: user
                .and_then(|u| u.username.clone())
                .unwrap_or_else(|| UNKNOWN_USER.to_owned()),
        }
    }

    /// Serialize to the JSON string handed to the outbound data channel.
    ///
    /// # Panics
    ///
    /// Never panics in practice; the payload has no non-string keys or
    /// non-finite numbers.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
