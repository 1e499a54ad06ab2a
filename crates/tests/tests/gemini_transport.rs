use serde_json::json;
use taskintent_core::{ClassificationSource, Intent, FALLBACK_REASONING};
use taskintent_ml::{
    GeminiClient, GeminiConfig, IntentClassifier, ModelIntentClassifier, TextGenerator,
};
use taskintent_observability::ClassifierMetrics;
use taskintent_tests::{gemini_body, generate_content_path, TEST_API_KEY, TEST_MODEL};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig::new(TEST_API_KEY)
        .with_model(TEST_MODEL)
        .with_api_base(server.uri());
    GeminiClient::new(config).expect("client should build")
}

#[tokio::test]
async fn sends_prompt_with_key_header_and_reads_first_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .and(header("x-goog-api-key", TEST_API_KEY))
        .and(body_string_contains("User message:\\nassign the audit to Meera"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(
            r#"{"intent": "TASK_ASSIGNMENT", "reasoning": "delegates work"}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let clf = ModelIntentClassifier::new(client_for(&server), ClassifierMetrics::shared());
    let prediction = clf.predict("assign the audit to Meera").await;

    assert_eq!(prediction.source, ClassificationSource::Model);
    assert_eq!(prediction.result.intent, Intent::TaskAssignment);
    assert_eq!(prediction.result.reasoning, "delegates work");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate("anything")
        .await
        .expect_err("403 should fail");

    let message = err.to_string();
    assert!(message.contains("403"), "{message}");
    assert!(message.contains("API key not valid"), "{message}");
}

#[tokio::test]
async fn server_error_falls_back_to_rules() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let metrics = ClassifierMetrics::shared();
    let clf = ModelIntentClassifier::new(client_for(&server), metrics.clone());
    let prediction = clf.predict("reopen task 12").await;

    assert_eq!(prediction.result.intent, Intent::UpdateTaskStatus);
    assert_eq!(prediction.result.reasoning, FALLBACK_REASONING);
    assert_eq!(metrics.snapshot().model_failures_total, 1);
}

#[tokio::test]
async fn empty_candidates_fall_back_to_rules() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let clf = ModelIntentClassifier::new(client_for(&server), ClassifierMetrics::shared());
    let prediction = clf.predict("who are the employees under Ravi").await;

    assert_eq!(prediction.source, ClassificationSource::Fallback);
    assert_eq!(prediction.result.intent, Intent::ViewEmployeesUnderManager);
}

#[tokio::test]
async fn refused_connection_error_does_not_expose_the_key() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let config = GeminiConfig::new("SECRET-KEY-123")
        .with_model(TEST_MODEL)
        .with_api_base(format!("http://{addr}"));
    let err = GeminiClient::new(config)
        .expect("client should build")
        .generate("anything")
        .await
        .expect_err("nothing listens on the port");

    let message = format!("{err:#}");
    assert!(message.contains("Gemini request failed"), "{message}");
    assert!(!message.contains("SECRET-KEY-123"), "{message}");
}

#[tokio::test]
async fn key_never_travels_in_the_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(
            r#"{"intent": "ADD_USER", "reasoning": "r"}"#,
        )))
        .mount(&server)
        .await;

    client_for(&server).generate("anything").await.unwrap();

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(
        requests[0]
            .headers
            .get("x-goog-api-key")
            .and_then(|value| value.to_str().ok()),
        Some(TEST_API_KEY)
    );
}
