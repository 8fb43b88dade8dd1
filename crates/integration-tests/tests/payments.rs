//! Integration tests for Mercado Pago preference creation.
//!
//! These tests require:
//! - The API server running (cargo run -p choperia-api)
//! - Optionally `MERCADO_PAGO_ACCESS_TOKEN` set on the server; the
//!   passthrough test adapts to whether the server has one
//!
//! Run with: cargo test -p choperia-integration-tests -- --ignored

use choperia_integration_tests::{base_url, client};
use reqwest::StatusCode;
use serde_json::{Value, json};

/// Preference payload in the shape the storefront sends at checkout.
fn preference_payload() -> Value {
    json!({
        "items": [{
            "title": "Chopp Pilsen 500ml",
            "quantity": 2,
            "currency_id": "BRL",
            "unit_price": 12.9
        }],
        "back_urls": {
            "success": "http://localhost:8080/?payment=success",
            "failure": "http://localhost:8080/?payment=failure",
            "pending": "http://localhost:8080/?payment=pending"
        },
        "auto_return": "approved"
    })
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_create_preference_passthrough() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/mp/create_preference/"))
        .json(&preference_payload())
        .send()
        .await
        .expect("Failed to send preference request");

    let status = resp.status();
    let body: Value = resp.json().await.expect("Failed to parse response");

    match status {
        // Token configured and accepted: the provider response is relayed
        // unchanged, including the redirect URL the storefront needs
        StatusCode::OK => {
            assert!(
                body.get("init_point").is_some() || body.get("sandbox_init_point").is_some(),
                "provider response missing init_point: {body}"
            );
        }
        // No token on the server
        StatusCode::INTERNAL_SERVER_ERROR => {
            assert_eq!(
                body["detail"],
                "MERCADO_PAGO_ACCESS_TOKEN not configured on the server"
            );
        }
        // Token present but rejected by the provider (e.g. test credentials)
        StatusCode::BAD_GATEWAY => {
            let detail = body["detail"].as_str().expect("detail is a string");
            assert!(
                detail.starts_with("Mercado Pago error:")
                    || detail.starts_with("Erro ao conectar ao Mercado Pago:"),
                "unexpected 502 detail: {detail}"
            );
        }
        other => panic!("unexpected status {other}: {body}"),
    }
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_create_preference_requires_items_field() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/mp/create_preference/"))
        .json(&json!({ "back_urls": {} }))
        .send()
        .await
        .expect("Failed to send preference request");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
