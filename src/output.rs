//! What the output panel shows after an operation
//!
//! Every submission ends by replacing the current `Output` with a new one.
//! There is no history: the last writer wins.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub title: String,
    pub payload: Option<Value>,
    pub is_error: bool,
}

impl Output {
    /// Successful outcome. A `Value::Null` payload is treated as absent.
    pub fn success(title: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            title: title.into(),
            payload: payload.filter(|v| !v.is_null()),
            is_error: false,
        }
    }

    /// Failed outcome carrying a human-readable message
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            payload: Some(Value::String(message.into())),
            is_error: true,
        }
    }

    /// Payload as displayed: strings verbatim, everything else pretty-printed JSON
    pub fn payload_text(&self) -> Option<String> {
        self.payload.as_ref().map(|value| match value {
            Value::String(text) => text.clone(),
            other => {
                serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())
            }
        })
    }

    /// Title and payload as one block of text, used for clipboard copies
    pub fn to_plain_text(&self) -> String {
        match self.payload_text() {
            Some(body) => format!("{}\n\n{}", self.title, body),
            None => self.title.clone(),
        }
    }
}
