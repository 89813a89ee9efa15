mod common;

use axum_test::TestServer;
use common::seeded_app;
use http::StatusCode;
use serde_json::{json, Value};

fn send_payload(amount: &str) -> Value {
    json!({
        "userId": 1,
        "type": "send",
        "amount": amount,
        "recipient": "손자 김민수",
        "recipientAccount": "****5678",
        "description": "용돈"
    })
}

async fn balance_of_user_1(server: &TestServer) -> String {
    let body: Value = server.get("/api/user/1").await.json();
    body["balance"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn send_debits_balance_decimal_exact() {
    let server = TestServer::new(seeded_app()).unwrap();
    assert_eq!(balance_of_user_1(&server).await, "2847500");

    let response = server
        .post("/api/transactions")
        .json(&send_payload("100000"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["type"], "send");
    assert_eq!(body["amount"], "100000");
    assert_eq!(body["status"], "completed");
    assert!(body["createdAt"].is_string());

    assert_eq!(balance_of_user_1(&server).await, "2747500");
}

#[tokio::test]
async fn fractional_debit_has_no_float_drift() {
    let server = TestServer::new(seeded_app()).unwrap();

    server
        .post("/api/transactions")
        .json(&send_payload("0.10"))
        .await
        .assert_status(StatusCode::CREATED);

    // 2847500 - 0.10, not 2847499.8999...
    assert_eq!(balance_of_user_1(&server).await, "2847499.90");
}

#[tokio::test]
async fn receive_payment_and_deposit_leave_balance_untouched() {
    let server = TestServer::new(seeded_app()).unwrap();

    for kind in ["receive", "payment", "deposit"] {
        server
            .post("/api/transactions")
            .json(&json!({
                "userId": 1,
                "type": kind,
                "amount": "50000"
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(balance_of_user_1(&server).await, "2847500");
}

#[tokio::test]
async fn transactions_list_is_newest_first() {
    let server = TestServer::new(seeded_app()).unwrap();

    server
        .post("/api/transactions")
        .json(&send_payload("1000"))
        .await
        .assert_status(StatusCode::CREATED);

    let rows: Value = server.get("/api/transactions/1").await.json();
    let rows = rows.as_array().unwrap();

    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|t| t["userId"] == 1));
    // Most recent first: the fresh send leads, the seeded yesterday entry trails.
    assert_eq!(rows[0]["id"], 4);
    assert_eq!(rows[3]["id"], 2);
    let timestamps: Vec<chrono::DateTime<chrono::Utc>> = rows
        .iter()
        .map(|t| t["createdAt"].as_str().unwrap().parse().unwrap())
        .collect();
    for pair in timestamps.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn client_supplied_id_and_timestamp_are_ignored() {
    let server = TestServer::new(seeded_app()).unwrap();

    let mut payload = send_payload("1000");
    payload["id"] = json!(999);
    payload["createdAt"] = json!("1999-01-01T00:00:00Z");

    let response = server.post("/api/transactions").json(&payload).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    // Server-assigned: next id after the three seeded rows.
    assert_eq!(body["id"], 4);
    assert_ne!(body["createdAt"], "1999-01-01T00:00:00Z");
}

#[tokio::test]
async fn non_numeric_amount_creates_nothing() {
    let server = TestServer::new(seeded_app()).unwrap();

    let response = server
        .post("/api/transactions")
        .json(&send_payload("십만원"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let rows: Value = server.get("/api/transactions/1").await.json();
    assert_eq!(rows.as_array().unwrap().len(), 3);
    assert_eq!(balance_of_user_1(&server).await, "2847500");
}

#[tokio::test]
async fn missing_amount_creates_nothing() {
    let server = TestServer::new(seeded_app()).unwrap();

    let response = server
        .post("/api/transactions")
        .json(&json!({
            "userId": 1,
            "type": "send"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let rows: Value = server.get("/api/transactions/1").await.json();
    assert_eq!(rows.as_array().unwrap().len(), 3);
    assert_eq!(balance_of_user_1(&server).await, "2847500");
}

#[tokio::test]
async fn zero_or_negative_amount_rejected() {
    let server = TestServer::new(seeded_app()).unwrap();

    for amount in ["0", "-100"] {
        server
            .post("/api/transactions")
            .json(&send_payload(amount))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    assert_eq!(balance_of_user_1(&server).await, "2847500");
}

#[tokio::test]
async fn unknown_owner_is_404_and_nothing_is_written() {
    let server = TestServer::new(seeded_app()).unwrap();

    let response = server
        .post("/api/transactions")
        .json(&json!({
            "userId": 999,
            "type": "send",
            "amount": "1000"
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let rows: Value = server.get("/api/transactions/999").await.json();
    assert!(rows.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_transaction_type_rejected() {
    let server = TestServer::new(seeded_app()).unwrap();

    let response = server
        .post("/api/transactions")
        .json(&json!({
            "userId": 1,
            "type": "wire",
            "amount": "1000"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
