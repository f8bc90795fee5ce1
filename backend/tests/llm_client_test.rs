//! Tests for the OpenAI-compatible advice client against a mock server

use health_advisor_backend::config::LlmConfig;
use health_advisor_backend::llm::{AdviceGenerator, AdvicePrompt, LlmError, OpenAiAdviceClient};
use secrecy::SecretString;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> LlmConfig {
    LlmConfig {
        enabled: true,
        base_url: format!("{}/v1", server.uri()),
        model: "test-model".to_string(),
        timeout_secs: 2,
        ..LlmConfig::default()
    }
}

fn prompt() -> AdvicePrompt {
    AdvicePrompt {
        weight: 70.0,
        height: 175.0,
        age: Some(30),
        bmi: Some(22.9),
        calories_needed: Some(2641),
        ..Default::default()
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_returns_trimmed_first_choice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({"model": "test-model", "max_tokens": 500})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("  Eat more greens.\n")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiAdviceClient::new(&config_for(&server)).unwrap();
    let advice = client.generate(&prompt()).await.unwrap();

    assert_eq!(advice, "Eat more greens.");
}

#[tokio::test]
async fn test_sends_bearer_token_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let config = LlmConfig {
        api_key: Some(SecretString::new("sk-test-key".to_string())),
        ..config_for(&server)
    };
    let client = OpenAiAdviceClient::new(&config).unwrap();

    assert_eq!(client.generate(&prompt()).await.unwrap(), "ok");
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model overloaded"))
        .mount(&server)
        .await;

    let client = OpenAiAdviceClient::new(&config_for(&server)).unwrap();
    let err = client.generate(&prompt()).await.unwrap_err();

    match err {
        LlmError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "model overloaded");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_blank_content_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("   ")))
        .mount(&server)
        .await;

    let client = OpenAiAdviceClient::new(&config_for(&server)).unwrap();
    let err = client.generate(&prompt()).await.unwrap_err();

    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn test_no_choices_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let client = OpenAiAdviceClient::new(&config_for(&server)).unwrap();
    let err = client.generate(&prompt()).await.unwrap_err();

    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn test_slow_server_hits_client_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("late"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = LlmConfig {
        timeout_secs: 1,
        ..config_for(&server)
    };
    let client = OpenAiAdviceClient::new(&config).unwrap();
    let err = client.generate(&prompt()).await.unwrap_err();

    assert!(matches!(err, LlmError::Http(ref e) if e.is_timeout()));
}
