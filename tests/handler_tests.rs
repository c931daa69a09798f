mod mocks;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mocks::provider::MockProvider;
use serde_json::{Value, json};
use thoughtcaddy::api::handler::handle_request;
use thoughtcaddy::features::SummarizationService;

fn event(body: &Value, caller: Option<&str>) -> Value {
    let mut request_context = json!({
        "http": { "method": "POST", "path": "/summarizeEntry" }
    });
    if let Some(uid) = caller {
        request_context["authorizer"] = json!({ "jwt": { "claims": { "sub": uid } } });
    }
    json!({
        "rawPath": "/summarizeEntry",
        "headers": { "content-type": "application/json" },
        "requestContext": request_context,
        "body": body.to_string(),
        "isBase64Encoded": false
    })
}

fn body_of(response: &Value) -> Value {
    let raw = response["body"].as_str().expect("body is a JSON string");
    serde_json::from_str(raw).expect("body parses as JSON")
}

#[tokio::test]
async fn test_success_uses_result_envelope() {
    let provider = MockProvider::new("  You had a tough but instructive day. ");
    let service = SummarizationService::new(provider.clone());

    let response = handle_request(
        &service,
        &event(
            &json!({ "data": { "text": "Today was hard but I learned something." } }),
            Some("user-123"),
        ),
    )
    .await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(response["headers"]["Content-Type"], "application/json");
    assert_eq!(
        body_of(&response),
        json!({ "result": { "summary": "You had a tough but instructive day." } })
    );
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_bare_payload_is_accepted() {
    let service = SummarizationService::new(MockProvider::new("Fine."));
    let response = handle_request(
        &service,
        &event(&json!({ "text": "A quiet evening." }), Some("user-123")),
    )
    .await;
    assert_eq!(response["statusCode"], 200);
}

#[tokio::test]
async fn test_base64_body() {
    let service = SummarizationService::new(MockProvider::new("Decoded fine."));
    let mut request = event(&json!({}), Some("user-123"));
    request["body"] = json!(STANDARD.encode(r#"{"data":{"text":"Encoded entry"}}"#));
    request["isBase64Encoded"] = json!(true);

    let response = handle_request(&service, &request).await;
    assert_eq!(response["statusCode"], 200);
    assert_eq!(body_of(&response)["result"]["summary"], "Decoded fine.");
}

#[tokio::test]
async fn test_missing_caller_is_401() {
    let provider = MockProvider::new("unused");
    let service = SummarizationService::new(provider.clone());

    let response = handle_request(
        &service,
        &event(&json!({ "data": { "text": "Entry" } }), None),
    )
    .await;

    assert_eq!(response["statusCode"], 401);
    let body = body_of(&response);
    assert_eq!(body["error"]["status"], "UNAUTHENTICATED");
    assert_eq!(
        body["error"]["message"],
        "User must be authenticated to use this function"
    );
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_auth_checked_before_body_decoding() {
    let service = SummarizationService::new(MockProvider::new("unused"));
    let mut request = event(&json!({}), None);
    request["body"] = json!("{not json");

    let response = handle_request(&service, &request).await;
    assert_eq!(response["statusCode"], 401);
}

#[tokio::test]
async fn test_bad_text_argument_is_400() {
    let provider = MockProvider::new("unused");
    let service = SummarizationService::new(provider.clone());

    let bodies = [
        json!({ "data": { "text": 42 } }),
        json!({ "data": {} }),
        json!({ "data": { "text": "   " } }),
    ];
    for body in &bodies {
        let response = handle_request(&service, &event(body, Some("user-123"))).await;
        assert_eq!(response["statusCode"], 400, "body: {body}");
        assert_eq!(body_of(&response)["error"]["status"], "INVALID_ARGUMENT");
    }

    let mut garbled = event(&json!({}), Some("user-123"));
    garbled["body"] = json!("{not json");
    let response = handle_request(&service, &garbled).await;
    assert_eq!(response["statusCode"], 400);

    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_too_long_is_400() {
    let service = SummarizationService::new(MockProvider::new("unused"));
    let response = handle_request(
        &service,
        &event(
            &json!({ "data": { "text": "x".repeat(8001) } }),
            Some("user-123"),
        ),
    )
    .await;

    assert_eq!(response["statusCode"], 400);
    assert_eq!(
        body_of(&response)["error"]["message"],
        "Journal entry text is too long. Maximum 8000 characters allowed."
    );
}

#[tokio::test]
async fn test_rate_limit_is_429_without_provider_text() {
    let service = SummarizationService::new(MockProvider::with_status(
        429,
        "Rate limit reached for gpt-4o-mini in organization org-secret",
    ));
    let response = handle_request(
        &service,
        &event(&json!({ "data": { "text": "Entry" } }), Some("user-123")),
    )
    .await;

    assert_eq!(response["statusCode"], 429);
    let body = body_of(&response);
    assert_eq!(body["error"]["status"], "RESOURCE_EXHAUSTED");
    assert!(!response["body"].as_str().unwrap().contains("org-secret"));
}

#[tokio::test]
async fn test_provider_failure_is_500() {
    let service = SummarizationService::new(MockProvider::with_status(503, "overloaded"));
    let response = handle_request(
        &service,
        &event(&json!({ "data": { "text": "Entry" } }), Some("user-123")),
    )
    .await;

    assert_eq!(response["statusCode"], 500);
    assert_eq!(body_of(&response)["error"]["status"], "INTERNAL");
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let provider = MockProvider::new("unused");
    let service = SummarizationService::new(provider.clone());
    let mut request = event(&json!({ "data": { "text": "Entry" } }), Some("user-123"));
    request["rawPath"] = json!("/deleteEverything");

    let response = handle_request(&service, &request).await;
    assert_eq!(response["statusCode"], 404);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_stage_prefixed_path_is_routed() {
    let service = SummarizationService::new(MockProvider::new("Ok."));
    let mut request = event(&json!({ "data": { "text": "Entry" } }), Some("user-123"));
    request["rawPath"] = json!("/prod/summarizeEntry/");

    let response = handle_request(&service, &request).await;
    assert_eq!(response["statusCode"], 200);
}

#[tokio::test]
async fn test_non_post_is_405() {
    let service = SummarizationService::new(MockProvider::new("unused"));
    let mut request = event(&json!({ "data": { "text": "Entry" } }), Some("user-123"));
    request["requestContext"]["http"]["method"] = json!("GET");

    let response = handle_request(&service, &request).await;
    assert_eq!(response["statusCode"], 405);
}
