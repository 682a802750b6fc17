//! HTTP-level tests for the direct and proxy backends against a mock server.

use rephrase_core::{Message, Tone};
use rephrase_client::{rephrase, RephraseError, RephraseSettings};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }]
    })
}

fn direct_settings(api_base: String) -> RephraseSettings {
    let mut settings = RephraseSettings::direct("sk-test", Tone::friendly());
    if let rephrase_client::Endpoint::Direct {
        api_base: ref mut base,
        ..
    } = settings.endpoint
    {
        *base = api_base;
    }
    settings
}

#[tokio::test]
async fn direct_request_hits_chat_completions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-3.5-turbo",
            "temperature": 0.5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("Hey there!")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let history = vec![
        Message::other("Hi, I'm looking for a new laptop. Can you recommend one?"),
        Message::me("Of course! What are your requirements and budget for the laptop?"),
    ];
    let answer = rephrase("I recommend the XYZ laptop.", &history, direct_settings(mock_server.uri()))
        .await
        .expect("rephrase");

    assert_eq!(answer, "Hey there!");
}

#[tokio::test]
async fn direct_request_surfaces_api_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"bad key"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = rephrase("hello", &[], direct_settings(mock_server.uri()))
        .await
        .unwrap_err();

    match err {
        RephraseError::Api(message) => assert!(message.contains("401"), "{message}"),
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn oversized_text_never_reaches_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("unused")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut settings = direct_settings(mock_server.uri());
    settings.max_request_tokens = 1;

    let err = rephrase("this text is far too long for a one-token ceiling", &[], settings)
        .await
        .unwrap_err();

    assert!(matches!(err, RephraseError::TokenLimitExceeded { .. }));
}

#[tokio::test]
async fn proxy_request_carries_the_user_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rephrase"))
        .and(header("Authorization", "user-token"))
        .and(body_partial_json(serde_json::json!({
            "text": "hello",
            "tone": { "name": "Friendly Tone" }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "answer": "Hello there! 😊" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let settings = RephraseSettings::proxy("user-token", mock_server.uri(), Tone::friendly());
    let answer = rephrase("hello", &[], settings).await.expect("rephrase");

    assert_eq!(answer, "Hello there! 😊");
}

#[tokio::test]
async fn proxy_request_forwards_the_filtered_history() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rephrase"))
        .and(body_partial_json(serde_json::json!({
            "history": [
                { "role": "other", "text": "ping" },
                { "role": "me", "text": "pong" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "answer": "ok" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let settings = RephraseSettings::proxy("user-token", mock_server.uri(), Tone::neutral());
    let history = vec![Message::other("ping"), Message::me("pong")];
    let answer = rephrase("hello", &history, settings).await.expect("rephrase");

    assert_eq!(answer, "ok");
}
