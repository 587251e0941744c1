use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lambda-style invocation event. `body` is normally the request JSON as a
/// string; an inline object is accepted too.
#[derive(Debug, Deserialize)]
pub struct InvocationEvent {
    #[serde(default)]
    pub body: Option<Value>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: Value,
}

impl InvocationResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status_code: 400,
            body: Value::String(message.into()),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            body: Value::String(message.into()),
        }
    }
}
