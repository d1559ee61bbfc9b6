mod common;

use serde_json::json;

use common::setup_test_server;

#[tokio::test]
async fn evaluate_endpoint_returns_comparison_response() -> Result<(), Box<dyn std::error::Error>>
{
    let (base_url, client) = setup_test_server().await?;

    let response = client
        .post(format!("{}/api/reading/evaluate", base_url))
        .json(&json!({
            "target_text": "محمود والد زيد",
            "samples": [0.0, 0.1, 0.2, 0.3],
            "sample_rate_hz": 16000,
            "language": "ar",
            "session_id": "test-session"
        }))
        .send()
        .await?;

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["session_id"], "test-session");
    // Without a speech runtime the transcription is empty, so every
    // reference word is missing and the score bottoms out.
    assert_eq!(body["transcription"], "");
    assert_eq!(body["similarity_percentage"], 0.0);
    assert_eq!(body["common_word_count"], 0);
    assert_eq!(body["missing_word_count"], 3);
    assert_eq!(body["extra_word_count"], 0);
    assert!(body["feedback"].as_str().unwrap().contains("0.00%"));
    assert_eq!(body["diff"].as_array().unwrap().len(), 3);

    Ok(())
}

#[tokio::test]
async fn evaluate_endpoint_rejects_invalid_payloads() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, client) = setup_test_server().await?;

    // Empty sample array fails request validation.
    let response = client
        .post(format!("{}/api/reading/evaluate", base_url))
        .json(&json!({
            "target_text": "محمود والد زيد",
            "samples": [],
            "language": "ar"
        }))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);

    // Unsupported language fails in the usecase.
    let response = client
        .post(format!("{}/api/reading/evaluate", base_url))
        .json(&json!({
            "target_text": "hello",
            "samples": [0.0, 0.1],
            "language": "en"
        }))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn health_endpoint_responds() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, client) = setup_test_server().await?;

    let response = client.get(format!("{}/health", base_url)).send().await?;
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["status"], "ok");

    Ok(())
}
