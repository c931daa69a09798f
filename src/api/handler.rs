//! API Lambda handler for the `summarizeEntry` callable.
//!
//! This module handles:
//! - Routing (path and method)
//! - Caller identity from the API Gateway authorizer context
//! - Decoding the callable payload
//! - Rendering the service result in the callable envelope

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, warn};

use super::{helpers, parsing};
use crate::ai::CompletionProvider;
use crate::core::models::SummarizeRequest;
use crate::features::SummarizationService;

pub const OPERATION_NAME: &str = "summarizeEntry";

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails for request-level problems; those become error responses.
/// The `Result` is what `lambda_runtime` expects.
#[tracing::instrument(
    level = "info",
    skip(service, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler<P: CompletionProvider>(
    service: &SummarizationService<P>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_request(service, &event.payload).await)
}

/// Routes and serves one API Gateway proxy event.
pub async fn handle_request<P: CompletionProvider>(
    service: &SummarizationService<P>,
    event: &Value,
) -> Value {
    // ========================================================================
    // Routing
    // ========================================================================

    if let Some(path) = parsing::request_path(event) {
        info!(raw_path = %path, "Request path");
        let operation = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
        if operation != OPERATION_NAME {
            warn!(raw_path = %path, "Unknown operation");
            return helpers::err_response(404, "NOT_FOUND", "Unknown function");
        }
    }

    if let Some(method) = parsing::request_method(event)
        && !method.eq_ignore_ascii_case("POST")
    {
        warn!(method = %method, "Unsupported method");
        return helpers::err_response(405, "INVALID_ARGUMENT", "Request method must be POST");
    }

    // ========================================================================
    // Build the service request
    // ========================================================================

    let caller_id = parsing::extract_caller_id(event);

    // Undecodable bodies are treated as a call without text; the service then
    // reports the missing argument after the authentication check.
    let body = parsing::parse_body(event).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to decode request body");
        None
    });
    let text = body
        .as_ref()
        .map(parsing::call_data)
        .and_then(parsing::entry_text)
        .unwrap_or_default();

    let request = SummarizeRequest::new(text, caller_id);

    match service.summarize(&request).await {
        Ok(response) => helpers::ok_result(&response),
        Err(e) => helpers::summarize_error_response(&e),
    }
}
