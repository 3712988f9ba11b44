//! Mock-based integration tests.
//!
//! These use wiremock to simulate the ZAPI server without real HTTP
//! requests, so error scenarios and header handling are deterministic.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zapi_client::{ErrorKind, FileSource, Identity, RateLimitPeriod, ZapiClient};

async fn client_for(server: &MockServer) -> ZapiClient {
    ZapiClient::builder()
        .api_key("test_key")
        .app_id("test_app")
        .base_url(server.uri())
        .build()
        .unwrap()
}

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info/health"))
        .and(header("x-api-key", "test_key"))
        .and(header("x-app-id", "test_app"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.service_info().health().await.unwrap();
    assert_eq!(result["status"], "ok");
}

#[tokio::test]
async fn bearer_token_applies_to_next_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(header("authorization", "Bearer tok_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Ada"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.set_bearer_token("tok_123");
    let profile = client.auth().get_profile().await.unwrap();
    assert_eq!(profile["name"], "Ada");
}

#[tokio::test]
async fn login_then_authenticated_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "user@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt_abc"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(header("authorization", "Bearer jwt_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let login = client
        .auth()
        .login_with_email("user@example.com", "pw", None)
        .await
        .unwrap();
    client.set_bearer_token(login["token"].as_str().unwrap());

    let profile = client.auth().get_profile().await.unwrap();
    assert_eq!(profile["id"], "u1");
}

#[tokio::test]
async fn app_id_option_becomes_header_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/functions"))
        .and(header("x-app-id", "other_app"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .functions()
        .list(Some(&json!({"appId": "other_app", "page": 1})))
        .await
        .unwrap();
}

#[tokio::test]
async fn query_options_are_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logs"))
        .and(query_param("level", "error"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .logs()
        .list(Some(&json!({"level": "error", "limit": 50})))
        .await
        .unwrap();
}

#[tokio::test]
async fn metadata_mutations_wrap_value() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/metadata/user/u1/preferences"))
        .and(body_json(json!({"value": {"theme": "dark"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .metadata()
        .update("user", "u1", "preferences", &json!({"theme": "dark"}))
        .await
        .unwrap();
}

// ============================================================================
// Response handling
// ============================================================================

#[tokio::test]
async fn empty_success_body_is_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.auth().logout().await.unwrap();
    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn malformed_success_body_is_generic_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/system/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.system().status().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generic);
    assert!(err.message().starts_with("malformed response"));
    assert_eq!(err.status(), Some(200));
}

// ============================================================================
// Error mapping
// ============================================================================

#[tokio::test]
async fn status_selects_error_kind() {
    let cases = [
        (400, ErrorKind::Validation),
        (401, ErrorKind::Authentication),
        (429, ErrorKind::RateLimit),
        (500, ErrorKind::Server),
        (404, ErrorKind::Generic),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/system/status"))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({"message": "nope"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.system().status().await.unwrap_err();
        assert_eq!(err.kind(), expected, "status {status}");
        assert_eq!(err.status(), Some(status));
        assert_eq!(err.message(), "nope");
    }
}

#[tokio::test]
async fn rate_limit_exposes_structured_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "message": "too many requests",
            "retry_after": 30,
            "rate_limit_type": "hourly",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .responses()
        .create(&json!({"model": "gpt-4"}))
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert_eq!(err.retry_after(), Some(30));
    assert_eq!(err.rate_limit_period(), Some(RateLimitPeriod::Hourly));
    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn validation_error_carries_field_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "invalid input",
            "errors": {"email": "must be a valid address"},
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .auth()
        .register(&json!({"email": "not-an-email"}))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.field_error("email"), Some("must be a valid address"));
}

#[tokio::test]
async fn connection_failure_is_generic_without_status() {
    // Nothing listens on this port.
    let client = ZapiClient::builder()
        .api_key("k")
        .app_id("a")
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.user().get_profile().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generic);
    assert_eq!(err.code(), 0);
    assert_eq!(err.status(), None);
}

// ============================================================================
// Local preconditions
// ============================================================================

#[tokio::test]
async fn empty_id_fails_without_any_request() {
    let server = MockServer::start().await;
    // No mock mounted: any request would 404 and wiremock would record it.
    let client = client_for(&server).await;

    let err = client.users().get("").await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.status(), None);

    let err = client.plans().get("   ").await.unwrap_err();
    assert!(err.is_validation());

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_embedding_input_fails_locally() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let err = client.embeddings().create("").await.unwrap_err();
    assert!(err.is_validation());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unsupported_export_format_fails_locally() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let err = client.responses().export("resp_1", "csv").await.unwrap_err();
    assert!(err.is_validation());
    assert!(err.message().contains("csv"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn image_edit_is_not_implemented() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let err = client
        .images()
        .edit("/tmp/a.png", "add a hat", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generic);
    assert_eq!(err.code(), 501);
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Uploads
// ============================================================================

#[tokio::test]
async fn upload_sends_multipart_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fileId": "f1"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("note.txt");
    std::fs::write(&file_path, b"hello").unwrap();

    let client = client_for(&server).await;
    let result = client
        .upload()
        .upload(
            FileSource::path(&file_path),
            Some(&json!({"folder": "docs"})),
        )
        .await
        .unwrap();
    assert_eq!(result["fileId"], "f1");

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn upload_missing_file_fails_before_request() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let err = client
        .upload()
        .upload(FileSource::path("/definitely/not/here.bin"), None)
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.message().contains("file not found"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn upload_accepts_in_memory_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fileId": "f2"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client
        .upload()
        .upload(FileSource::bytes(b"raw".to_vec(), "raw.bin"), None)
        .await
        .unwrap();
    assert_eq!(result["fileId"], "f2");
}

// ============================================================================
// Config lifecycle
// ============================================================================

#[tokio::test]
async fn setter_takes_effect_on_next_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/health"))
        .and(header("x-api-key", "key_one"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"n": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/health"))
        .and(header("x-api-key", "key_two"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"n": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ZapiClient::builder()
        .api_key("key_one")
        .app_id("test_app")
        .base_url(server.uri())
        .build()
        .unwrap();

    let first = client.auth().health().await.unwrap();
    assert_eq!(first["n"], 1);

    client.set_api_key("key_two");
    let second = client.auth().health().await.unwrap();
    assert_eq!(second["n"], 2);
}

#[tokio::test]
async fn identity_variants_pick_the_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/forgot-password"))
        .and(body_json(json!({"phone": "5551234"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sent": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .auth()
        .forgot_password(Identity::Phone("5551234"))
        .await
        .unwrap();
}
