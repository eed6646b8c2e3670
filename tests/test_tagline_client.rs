//! Integration tests for the chat-completion tagline client, against
//! a wiremock server standing in for the hosted endpoint.

use std::time::Duration;

use briefly::{TaglineClient, TaglineConfig, TaglineError, TaglineGenerator, tagline_or_placeholder};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn test_config(server: &MockServer) -> TaglineConfig {
    TaglineConfig {
        endpoint: server.uri(),
        model: "test-model".to_string(),
        api_token: "test-token".to_string(),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn test_successful_completion_is_trimmed() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "  Acme: Built to last.  "}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TaglineClient::new(test_config(&server))?;
    let tagline = client.generate_tagline("Acme").await?;
    assert_eq!(tagline, "Acme: Built to last.");

    Ok(())
}

#[tokio::test]
async fn test_blank_completion_is_empty_response() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "   "}}
            ]
        })))
        .mount(&server)
        .await;

    let client = TaglineClient::new(test_config(&server))?;
    let result = client.generate_tagline("Acme").await;
    assert!(matches!(result, Err(TaglineError::EmptyResponse)));

    Ok(())
}

#[tokio::test]
async fn test_no_choices_is_empty_response() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = TaglineClient::new(test_config(&server))?;
    let result = client.generate_tagline("Acme").await;
    assert!(matches!(result, Err(TaglineError::EmptyResponse)));

    Ok(())
}

#[tokio::test]
async fn test_auth_failure_is_server_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let client = TaglineClient::new(test_config(&server))?;
    let result = client.generate_tagline("Acme").await;
    match result {
        Err(TaglineError::Server { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid token");
        }
        other => panic!("Expected server error, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_http_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = TaglineClient::new(test_config(&server))?;
    let result = client.generate_tagline("Acme").await;
    assert!(matches!(result, Err(TaglineError::Http(_))));

    Ok(())
}

#[tokio::test]
async fn test_failure_collapses_to_placeholder_string() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
        .mount(&server)
        .await;

    let client = TaglineClient::new(test_config(&server))?;
    let tagline = tagline_or_placeholder(client.generate_tagline("Acme").await);
    assert!(tagline.starts_with("(AI error:"));
    assert!(tagline.contains("500"));
    assert!(tagline.contains("backend down"));

    Ok(())
}
