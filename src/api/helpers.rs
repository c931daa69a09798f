//! Response builders for the callable protocol.

use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::SummarizeError;

/// Returns a 200 OK response wrapping `result` in the callable envelope.
#[must_use]
pub fn ok_result<T: Serialize>(result: &T) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "result": result }).to_string()
    })
}

/// Returns an error response with the given HTTP code, callable status and
/// message.
#[must_use]
pub fn err_response(status_code: u16, status: &str, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": { "status": status, "message": message } }).to_string()
    })
}

#[must_use]
pub fn summarize_error_response(error: &SummarizeError) -> Value {
    err_response(error.http_status(), error.status(), &error.to_string())
}
