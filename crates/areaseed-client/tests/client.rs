//! Integration tests for `DeliveryAreaClient` using wiremock HTTP mocks.

use areaseed_client::{ClientError, CreateOutcome, DeliveryAreaClient};
use areaseed_core::DeliveryAreaPayload;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> DeliveryAreaClient {
    DeliveryAreaClient::new(
        &format!("{base_url}/api/delivery-areas"),
        "test-token",
        Some(5),
        "areaseed-test/0.1",
    )
    .expect("client construction should not fail")
}

fn alger_payload() -> DeliveryAreaPayload {
    DeliveryAreaPayload {
        wilaya: "Alger".to_string(),
        delivery_company: "zr-Express".to_string(),
        store: "AB-Zone".to_string(),
        price_home: 600,
        price_desk: 450,
        is_active: true,
    }
}

#[tokio::test]
async fn create_sends_json_body_with_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/delivery-areas"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "wilaya": "Alger",
            "deliveryCompany": "zr-Express",
            "store": "AB-Zone",
            "priceHome": 600,
            "priceDesk": 450,
            "isActive": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "_id": "abc" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client
        .create_delivery_area(&alger_payload())
        .await
        .expect("request should reach the mock");

    assert_eq!(outcome, CreateOutcome::Created);
}

#[tokio::test]
async fn non_created_status_is_rejected_with_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/delivery-areas"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"message":"This wilaya already exists"}"#),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client.create_delivery_area(&alger_payload()).await.unwrap();

    assert_eq!(
        outcome,
        CreateOutcome::Rejected {
            status: 400,
            body: r#"{"message":"This wilaya already exists"}"#.to_string(),
        }
    );
}

#[tokio::test]
async fn ok_status_is_not_treated_as_created() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client.create_delivery_area(&alger_payload()).await.unwrap();

    assert!(matches!(outcome, CreateOutcome::Rejected { status: 200, .. }));
}

#[tokio::test]
async fn server_error_is_rejected_not_raised() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client.create_delivery_area(&alger_payload()).await.unwrap();

    assert_eq!(
        outcome,
        CreateOutcome::Rejected {
            status: 500,
            body: "boom".to_string(),
        }
    );
}

#[tokio::test]
async fn connection_refused_is_http_error() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = test_client(&format!("http://127.0.0.1:{port}"));
    let result = client.create_delivery_area(&alger_payload()).await;

    assert!(
        matches!(result, Err(ClientError::Http(_))),
        "expected ClientError::Http, got: {result:?}"
    );
}
