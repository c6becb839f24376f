// Integration tests for the Lunch Money client against a mock server.
// Run with: cargo test --test client

use asset_report::{
    build_report, generate_report, AccountSource, AssetCategory, FetchError, LunchMoneyClient,
    ProviderAccountType, ReportLine,
};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer, token: &str) -> LunchMoneyClient {
    LunchMoneyClient::with_base_url(token.to_string(), server.url("/v1")).unwrap()
}

#[tokio::test]
async fn fetches_manual_assets_with_bearer_token() {
    let server = MockServer::start_async().await;

    let assets_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/assets")
                .header("authorization", "Bearer test_token");
            then.status(200).json_body(json!({
                "assets": [
                    {
                        "id": 1,
                        "type_name": "cash",
                        "subtype_name": "physical cash",
                        "name": "Wallet",
                        "display_name": null,
                        "balance": "40.2500",
                        "balance_as_of": "2024-03-01T12:00:00.000Z",
                        "currency": "usd",
                        "institution_name": null,
                        "closed_on": null,
                        "created_at": "2023-01-01T00:00:00.000Z"
                    },
                    {
                        "id": 2,
                        "type_name": "employee compensation",
                        "name": "RSUs",
                        "balance": "12000",
                        "currency": "usd"
                    }
                ]
            }));
        })
        .await;

    let client = client_for(&server, "test_token");
    let assets = client.fetch_manual_assets().await.unwrap();

    assets_mock.assert_async().await;
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].name, "Wallet");
    assert_eq!(assets[0].balance, "40.2500");
    assert_eq!(assets[1].type_name, AssetCategory::EmployeeCompensation);
}

#[tokio::test]
async fn fetches_linked_accounts() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/plaid_accounts");
            then.status(200).json_body(json!({
                "plaid_accounts": [
                    {
                        "id": 7,
                        "date_linked": "2023-05-01",
                        "name": "Everyday Checking",
                        "display_name": "Checking",
                        "type": "depository",
                        "subtype": "checking",
                        "mask": "1234",
                        "institution_name": "Big Bank",
                        "status": "active",
                        "balance": "2999.99",
                        "currency": "usd",
                        "balance_last_update": "2024-03-01T08:00:00.000Z",
                        "limit": null
                    },
                    {
                        "id": 8,
                        "name": "Annuity",
                        "type": "other",
                        "balance": "10",
                        "currency": "usd"
                    }
                ]
            }));
        })
        .await;

    let client = client_for(&server, "t");
    let accounts = client.fetch_linked_accounts().await.unwrap();

    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].account_type, ProviderAccountType::Depository);
    assert_eq!(accounts[0].display_name.as_deref(), Some("Checking"));
    assert_eq!(accounts[0].mask.as_deref(), Some("1234"));
    assert_eq!(accounts[1].account_type, ProviderAccountType::Other("other".to_string()));
}

#[tokio::test]
async fn unauthorized_is_a_status_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/assets");
            then.status(401).json_body(json!({
                "error": "Access token does not exist."
            }));
        })
        .await;

    let client = client_for(&server, "bad_token");
    let err = client.fetch_manual_assets().await.unwrap_err();

    assert!(err.is_auth());
    match err {
        FetchError::Status { status, body, .. } => {
            assert_eq!(status, 401);
            assert!(body.contains("Access token does not exist"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_payload_is_a_decode_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/plaid_accounts");
            then.status(200).body("{\"plaid_accounts\": 42}");
        })
        .await;

    let client = client_for(&server, "t");
    let err = client.fetch_linked_accounts().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }), "got {:?}", err);
}

#[tokio::test]
async fn full_report_from_mock_server() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/assets");
            then.status(200).json_body(json!({
                "assets": [
                    { "id": 1, "type_name": "investment", "name": "Vanguard", "balance": "100.5", "currency": "usd" },
                    { "id": 2, "type_name": "cash", "name": "Checking", "balance": "1500.40", "currency": "usd" }
                ]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/plaid_accounts");
            then.status(200).json_body(json!({
                "plaid_accounts": [
                    { "id": 1, "type": "brokerage", "name": "Schwab", "balance": "-3.5", "currency": "usd" },
                    { "id": 2, "type": "depository", "name": "Savings", "balance": "2999.99", "currency": "eur" }
                ]
            }));
        })
        .await;

    let client = client_for(&server, "t");
    let lines = generate_report(&client).await.unwrap();
    let text: Vec<String> = lines.iter().map(ReportLine::plain).collect();

    assert_eq!(
        text,
        vec![
            "--- CASH ---",
            "  Checking: 1500 USD",
            "  Savings: 3000 EUR",
            "",
            "--- INVESTMENT ---",
            "  Schwab: -4 USD",
            "  Vanguard: 101 USD",
        ]
    );
}

#[tokio::test]
async fn one_failing_endpoint_fails_the_report() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/assets");
            then.status(200).json_body(json!({ "assets": [] }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/plaid_accounts");
            then.status(503).body("maintenance");
        })
        .await;

    let client = client_for(&server, "t");
    let err = generate_report(&client).await.unwrap_err();

    let fetch_err = err.downcast_ref::<FetchError>().unwrap();
    assert!(matches!(fetch_err, FetchError::Status { status: 503, .. }));
}

#[test]
fn empty_sources_render_nothing() {
    assert!(build_report(Vec::new(), Vec::new()).is_empty());
}
