//! Extraction of the callable payload and caller identity from API Gateway
//! proxy events.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::RequestError;

/// Authorizer claim paths tried in order: HTTP API JWT authorizer, REST
/// Cognito authorizer, then a custom Lambda authorizer.
const CALLER_ID_PATHS: &[&[&str]] = &[
    &["requestContext", "authorizer", "jwt", "claims", "sub"],
    &["requestContext", "authorizer", "claims", "sub"],
    &["requestContext", "authorizer", "lambda", "uid"],
];

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Returns the authenticated principal, or `None` for anonymous calls.
#[must_use]
pub fn extract_caller_id(event: &Value) -> Option<String> {
    CALLER_ID_PATHS
        .iter()
        .filter_map(|path| v_str(event, path))
        .map(str::trim)
        .find(|id| !id.is_empty())
        .map(str::to_string)
}

#[must_use]
pub fn request_path(event: &Value) -> Option<&str> {
    v_str(event, &["rawPath"]).or_else(|| v_str(event, &["path"]))
}

#[must_use]
pub fn request_method(event: &Value) -> Option<&str> {
    v_str(event, &["requestContext", "http", "method"])
        .or_else(|| v_str(event, &["httpMethod"]))
}

/// Decodes the request body into JSON.
///
/// Returns `Ok(None)` when the event carries no body at all.
///
/// # Errors
///
/// Fails on invalid base64, non UTF-8 bytes or malformed JSON.
pub fn parse_body(event: &Value) -> Result<Option<Value>, RequestError> {
    let Some(body) = event.get("body") else {
        return Ok(None);
    };

    let raw = match body {
        Value::Null => return Ok(None),
        Value::String(s) => s,
        // Already-decoded bodies (local invocations) pass straight through.
        other => return Ok(Some(other.clone())),
    };

    let is_base64 = event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let decoded = if is_base64 {
        String::from_utf8(STANDARD.decode(raw)?)?
    } else {
        raw.clone()
    };

    if decoded.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(&decoded)?))
}

/// Pulls the call arguments out of a decoded body.
///
/// The callable envelope is `{"data": {...}}`; a bare object is accepted too.
#[must_use]
pub fn call_data(body: &Value) -> &Value {
    body.get("data").unwrap_or(body)
}

/// The `text` argument, if present and a string.
#[must_use]
pub fn entry_text(data: &Value) -> Option<&str> {
    data.get("text").and_then(Value::as_str)
}
