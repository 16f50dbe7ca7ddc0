//! Router tests for the claim status API

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use domain_claims::{CompletionPort, SummaryGenerator};
use interface_api::{create_router, AppState, BODY_LIMIT_BYTES};
use proptest::prelude::*;
use serde_json::{json, Value};
use test_utils::*;

fn server_with(generator: SummaryGenerator) -> TestServer {
    let state = AppState::new(StoreFixtures::sample(), generator);
    TestServer::new(create_router(state)).unwrap()
}

fn mock_mode_server() -> TestServer {
    server_with(SummaryGenerator::unconfigured())
}

fn server_with_port(port: Arc<dyn CompletionPort>) -> TestServer {
    server_with(SummaryGenerator::new(port))
}

fn request_id(response: &TestResponse) -> String {
    response
        .headers()
        .get("x-request-id")
        .expect("response carries x-request-id")
        .to_str()
        .unwrap()
        .to_string()
}

// ============================================================================
// Health
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_in_mock_mode() {
        let response = mock_mode_server().get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "claim-status-api");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["dependencies"]["mockData"], json!({"claims": 3, "notes": 2}));
        assert_eq!(body["dependencies"]["azureOpenAI"], "mock_mode");
        assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_health_connected_before_any_summary() {
        let port = ScriptedCompletion::shared(CompletionFixtures::prose(), None);
        let server = server_with_port(port.clone());

        let body: Value = server.get("/health").await.json();

        assert_eq!(body["dependencies"]["azureOpenAI"], "connected");
        assert!(port.requests().is_empty());
    }
}

// ============================================================================
// Claim lookup
// ============================================================================

mod claim_lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_claim_returns_full_record() {
        let response = mock_mode_server().get("/claims/CLM001").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body, serde_json::to_value(ClaimFixtures::theft()).unwrap());
        assert_eq!(body["type"], "theft");
        assert_eq!(body["estimatedAmount"], 1200);
        assert_eq!(body["policyNumber"], "POL-100234");
    }

    #[tokio::test]
    async fn test_get_claim_is_byte_identical_across_calls() {
        let server = mock_mode_server();

        let first = server.get("/claims/CLM002").await.text();
        let second = server.get("/claims/CLM002").await.text();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_claim_is_404() {
        let response = mock_mode_server().get("/claims/CLM999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>(),
            json!({"error": "Claim not found", "claimId": "CLM999"})
        );
    }

    #[tokio::test]
    async fn test_invalid_id_is_400_with_request_id() {
        let response = mock_mode_server().get("/claims/clm001").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(
            body["error"],
            "Invalid claim ID format. Expected CLM### (e.g., CLM001)"
        );
        assert_eq!(body["claimId"], "clm001");
        assert_eq!(body["requestId"], request_id(&response));
    }
}

// ============================================================================
// Summarize
// ============================================================================

mod summarize_tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_mode_summary_mentions_claim() {
        let response = mock_mode_server().post("/claims/CLM001/summarize").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["claimId"], "CLM001");
        let adjuster = body["adjusterSummary"].as_str().unwrap();
        assert_contains_all(adjuster, &["CLM001", "theft", "in-review", "1200"]);
        assert!(body.get("usageTokens").is_none());
        assert!(chrono::DateTime::parse_from_rfc3339(body["generatedAt"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_prose_completion_is_split() {
        let port = ScriptedCompletion::shared(CompletionFixtures::prose(), Some(64));
        let response = server_with_port(port).post("/claims/CLM001/summarize").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["summary"], "Claim looks routine.");
        assert_eq!(body["customerSummary"], "Customer should expect payout soon.");
        assert_eq!(body["adjusterSummary"], "Adjuster: verify VIN.");
        assert_eq!(body["nextStep"], "Next: close within 5 days.");
    }

    #[tokio::test]
    async fn test_network_failure_still_returns_200() {
        let response = server_with_port(FailingCompletion::network())
            .post("/claims/CLM002/summarize")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let failure = domain_claims::SummaryBundle::service_failure();
        assert_eq!(body["summary"], failure.summary);
        assert_eq!(body["customerSummary"], failure.customer_summary);
        assert_eq!(body["adjusterSummary"], failure.adjuster_summary);
        assert_eq!(body["nextStep"], failure.next_step);
    }

    #[tokio::test]
    async fn test_notes_are_joined_into_prompt() {
        let port = ScriptedCompletion::shared(CompletionFixtures::fenced_json(), Some(10));
        server_with_port(port.clone())
            .post("/claims/CLM001/summarize")
            .await
            .assert_status_ok();

        let prompt = port.last_request().unwrap().user;
        assert!(prompt.contains(&StoreFixtures::theft_notes().join(" ")));
    }

    #[tokio::test]
    async fn test_claim_without_notes_is_404() {
        let response = mock_mode_server().post("/claims/CLM003/summarize").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>(),
            json!({"error": "No notes found for claim", "claimId": "CLM003"})
        );
    }

    #[tokio::test]
    async fn test_unknown_claim_is_404_before_generation() {
        let port = ScriptedCompletion::shared(CompletionFixtures::prose(), None);
        let response = server_with_port(port.clone())
            .post("/claims/CLM404/summarize")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["error"], "Claim not found");
        assert!(port.requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_id_is_400() {
        let response = mock_mode_server().post("/claims/CLM1/summarize").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["claimId"], "CLM1");
    }

    #[tokio::test]
    async fn test_generator_panic_is_500_with_request_id() {
        let response = server_with_port(Arc::new(PanickingCompletion))
            .post("/claims/CLM001/summarize")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>(),
            json!({"error": "Failed to generate summary", "requestId": request_id(&response)})
        );
    }
}

// ============================================================================
// Cross-cutting headers
// ============================================================================

mod header_tests {
    use super::*;

    #[tokio::test]
    async fn test_request_id_is_uuid() {
        let response = mock_mode_server().get("/health").await;
        let id = request_id(&response);
        assert_eq!(uuid::Uuid::parse_str(&id).unwrap().get_version_num(), 4);
    }

    #[tokio::test]
    async fn test_request_ids_differ_per_request() {
        let server = mock_mode_server();
        let first = request_id(&server.get("/health").await);
        let second = request_id(&server.get("/health").await);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_inbound_request_id_is_propagated() {
        let response = mock_mode_server()
            .get("/claims/bad-id")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("trace-abc-123"),
            )
            .await;

        assert_eq!(request_id(&response), "trace-abc-123");
        assert_eq!(response.json::<Value>()["requestId"], "trace-abc-123");
    }

    #[tokio::test]
    async fn test_security_headers_on_success_and_error() {
        let server = mock_mode_server();
        for response in [
            server.get("/claims/CLM001").await,
            server.get("/claims/CLM999").await,
            server.get("/no/such/route").await,
        ] {
            let headers = response.headers();
            assert_eq!(headers["x-content-type-options"], "nosniff");
            assert_eq!(headers["x-frame-options"], "DENY");
            assert_eq!(headers["x-xss-protection"], "1; mode=block");
            assert!(headers.contains_key("x-request-id"));
        }
    }
}

// ============================================================================
// Request body limit
// ============================================================================

mod body_limit_tests {
    use super::*;

    fn post_with_body(server: &TestServer, size: usize) -> axum_test::TestRequest {
        server
            .post("/claims/CLM001/summarize")
            .add_header(
                HeaderName::from_static("content-length"),
                HeaderValue::from_str(&size.to_string()).unwrap(),
            )
            .text("x".repeat(size))
    }

    #[tokio::test]
    async fn test_small_body_is_accepted() {
        let server = mock_mode_server();

        let response = post_with_body(&server, 1024).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["claimId"], "CLM001");
    }

    #[tokio::test]
    async fn test_oversized_body_is_413() {
        let port = ScriptedCompletion::shared(CompletionFixtures::prose(), None);
        let server = server_with_port(port.clone());

        let response = post_with_body(&server, BODY_LIMIT_BYTES + 1).await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert!(port.requests().is_empty());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn invalid_ids_always_rejected(id in invalid_claim_id_strategy()) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let port = ScriptedCompletion::shared(CompletionFixtures::prose(), None);
            let server = server_with_port(port.clone());

            let lookup = server.get(&format!("/claims/{}", id)).await;
            let summarize = server.post(&format!("/claims/{}/summarize", id)).await;

            assert_eq!(lookup.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(summarize.status_code(), StatusCode::BAD_REQUEST);
            assert!(port.requests().is_empty());
        });
    }

    #[test]
    fn unknown_valid_ids_are_404(id in valid_claim_id_strategy()) {
        prop_assume!(!["CLM001", "CLM002", "CLM003"].contains(&id.as_str()));
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let server = mock_mode_server();

            let lookup = server.get(&format!("/claims/{}", id)).await;
            let summarize = server.post(&format!("/claims/{}/summarize", id)).await;

            assert_eq!(lookup.status_code(), StatusCode::NOT_FOUND);
            assert_eq!(summarize.status_code(), StatusCode::NOT_FOUND);
        });
    }
}
