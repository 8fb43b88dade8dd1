//! Integration tests for the produto catalog.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p choperia-api)
//!
//! Run with: cargo test -p choperia-integration-tests -- --ignored

use choperia_integration_tests::{base_url, client};
use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

/// Test helper: produto payload with a unique ID so reruns never collide.
///
/// The price is sent as a string so the API stores it with the exact scale
/// asserted below.
fn unique_produto(price: &str) -> Value {
    json!({
        "id": format!("it-{}", Uuid::new_v4()),
        "name": "Chopp de Teste 500ml",
        "description": "Produto criado pelos testes de integração",
        "price": price,
        "image": "🍺",
        "category": "beer"
    })
}

// ============================================================================
// CRUD Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_produto_create_and_fetch_round_trip() {
    let client = client();
    let base_url = base_url();

    let produto = unique_produto("12.90");
    let produto_id = produto["id"].as_str().expect("payload has id").to_string();

    let resp = client
        .post(format!("{base_url}/produtos/"))
        .json(&produto)
        .send()
        .await
        .expect("Failed to create produto");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(created["id"], produto_id.as_str());
    assert_eq!(created["price"], "12.90");
    assert_eq!(created["category"], "beer");

    let resp = client
        .get(format!("{base_url}/produtos/{produto_id}"))
        .send()
        .await
        .expect("Failed to fetch produto");

    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_produto_duplicate_id_rejected() {
    let client = client();
    let base_url = base_url();

    let produto = unique_produto("9.50");
    let produto_id = produto["id"].as_str().expect("payload has id").to_string();

    let resp = client
        .post(format!("{base_url}/produtos/"))
        .json(&produto)
        .send()
        .await
        .expect("Failed to create produto");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.expect("Failed to parse response");

    // Same ID again must be rejected without touching the first record
    let mut duplicate = produto.clone();
    duplicate["name"] = json!("Impostor");
    let resp = client
        .post(format!("{base_url}/produtos/"))
        .json(&duplicate)
        .send()
        .await
        .expect("Failed to send duplicate produto");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Produto ID already registered");

    let resp = client
        .get(format!("{base_url}/produtos/{produto_id}"))
        .send()
        .await
        .expect("Failed to refetch produto");
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_produto_unknown_id_not_found() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/produtos/nao-existe-{}", Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to fetch produto");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Produto not found");
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_produto_invalid_category_rejected() {
    let client = client();
    let base_url = base_url();

    let mut produto = unique_produto("5.00");
    produto["category"] = json!("sobremesa");

    let resp = client
        .post(format!("{base_url}/produtos/"))
        .json(&produto)
        .send()
        .await
        .expect("Failed to send produto");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================================
// List & Pagination Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_produto_list_contains_created() {
    let client = client();
    let base_url = base_url();

    let produto = unique_produto("7.00");
    let produto_id = produto["id"].as_str().expect("payload has id").to_string();

    let resp = client
        .post(format!("{base_url}/produtos/"))
        .json(&produto)
        .send()
        .await
        .expect("Failed to create produto");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .get(format!("{base_url}/produtos/?limit=1000"))
        .send()
        .await
        .expect("Failed to list produtos");

    assert_eq!(resp.status(), StatusCode::OK);
    let produtos: Vec<Value> = resp.json().await.expect("Failed to parse response");
    assert!(
        produtos.iter().any(|p| p["id"] == produto_id.as_str()),
        "created produto missing from listing"
    );
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_produto_list_is_stable_for_same_window() {
    let client = client();
    let base_url = base_url();

    // Numeric seeded IDs sort before the test-generated `it-` ones, so this
    // window is unaffected by tests running in parallel
    let resp = client
        .post(format!("{base_url}/initialize_produtos/"))
        .send()
        .await
        .expect("Failed to initialize produtos");
    assert_eq!(resp.status(), StatusCode::OK);

    let mut pages = Vec::new();
    for _ in 0..2 {
        let resp = client
            .get(format!("{base_url}/produtos/?skip=0&limit=3"))
            .send()
            .await
            .expect("Failed to list produtos");
        assert_eq!(resp.status(), StatusCode::OK);
        let page: Vec<Value> = resp.json().await.expect("Failed to parse response");
        assert_eq!(page.len(), 3);
        pages.push(page);
    }

    assert_eq!(pages[0], pages[1]);
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_produto_list_skip_past_end_is_empty() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/produtos/?skip=1000000&limit=10"))
        .send()
        .await
        .expect("Failed to list produtos");

    assert_eq!(resp.status(), StatusCode::OK);
    let produtos: Vec<Value> = resp.json().await.expect("Failed to parse response");
    assert!(produtos.is_empty());
}

// ============================================================================
// Seeding Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_initialize_produtos_is_idempotent() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/initialize_produtos/"))
        .send()
        .await
        .expect("Failed to initialize produtos");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());

    // Second run must report that everything was already registered
    let resp = client
        .post(format!("{base_url}/initialize_produtos/"))
        .send()
        .await
        .expect("Failed to re-initialize produtos");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "Todos os produtos iniciais já estavam cadastrados."
    );

    // The seeded menu is reachable by its fixed IDs
    let resp = client
        .get(format!("{base_url}/produtos/1"))
        .send()
        .await
        .expect("Failed to fetch seeded produto");
    assert_eq!(resp.status(), StatusCode::OK);
    let produto: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(produto["name"], "Chopp Pilsen 500ml");
}
