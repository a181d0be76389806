//! Response envelope shared by every endpoint.
//!
//! ```json
//! { "success": true, "count": 2, "data": [...], "timestamp": "2024-05-02T09:00:00.120+00:00" }
//! { "success": false, "errors": ["name is required"] }
//! ```
//!
//! Fields that are `None` are left out of the JSON entirely.

use chrono::Utc;
use serde::Serialize;

/// Standard `{ "success": ..., ... }` response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize = ()> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_changes: Option<Vec<&'static str>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T: Serialize> Envelope<T> {
    /// A successful response with no fields set yet.
    pub fn ok() -> Self {
        Envelope {
            success: true,
            message: None,
            count: None,
            data: None,
            applied_changes: None,
            timestamp: None,
            error: None,
            errors: None,
        }
    }

    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn applied_changes(mut self, applied: Vec<&'static str>) -> Self {
        self.applied_changes = Some(applied);
        self
    }

    /// Stamps the response with the current UTC time.
    pub fn timestamp(mut self) -> Self {
        self.timestamp = Some(now_rfc3339());
        self
    }
}

impl Envelope {
    /// A success with a confirmation message and no payload.
    pub fn confirm(message: impl Into<String>) -> Self {
        Envelope::ok().message(message)
    }

    /// A failure carrying one message.
    pub fn failure(error: impl Into<String>) -> Self {
        Envelope {
            success: false,
            error: Some(error.into()),
            ..Envelope::ok()
        }
    }

    /// A failure carrying every validation message.
    pub fn failures(errors: Vec<String>) -> Self {
        Envelope {
            success: false,
            errors: Some(errors),
            ..Envelope::ok()
        }
    }
}

pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}
