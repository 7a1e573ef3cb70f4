//! Shared success envelope for API handlers.
//!
//! Every successful response carries `success`, `status_code` and
//! `status_message` next to its payload fields. Use [`Envelope::ok`] instead
//! of ad-hoc `serde_json::json!` bodies.

use serde::Serialize;

/// `{ "success": true, "status_code": 200, "status_message": "OK", ...T }`.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::ok(Deleted { deleted: id })))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub status_code: u16,
    pub status_message: &'static str,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            status_code: 200,
            status_message: "OK",
            data,
        }
    }
}

/// Payload for responses that carry only the envelope.
#[derive(Debug, Default, Serialize)]
pub struct Empty {}
