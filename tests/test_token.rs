mod common;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};

fn payload(token: &str) -> Value {
    let encoded = token.split('.').nth(1).expect("token has a payload segment");
    let bytes = URL_SAFE_NO_PAD.decode(encoded).expect("payload is base64url");
    serde_json::from_slice(&bytes).expect("payload is JSON")
}

#[tokio::test]
async fn test_issued_token_carries_claims() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let response = server
        .post("/jwt")
        .json(&json!({"email": "admin@example.com", "role": "admin"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    let token = body["token"].as_str().unwrap();

    let claims = payload(token);
    assert_eq!(claims["email"], "admin@example.com");
    assert_eq!(claims["role"], "admin");
    let iat = claims["iat"].as_i64().unwrap();
    let exp = claims["exp"].as_i64().unwrap();
    assert_eq!(exp - iat, 3600);
}

#[tokio::test]
async fn test_issued_token_opens_protected_routes() {
    let env = common::TestEnv::start().await;
    let server = env.server();
    let token = env.token(&server).await;

    server
        .post("/blogs")
        .authorization_bearer(&token)
        .json(&json!({"title": "t", "content": "c"}))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_client_supplied_expiry_is_rejected() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    server
        .post("/jwt")
        .json(&json!({"role": "admin", "exp": 9999999999u64}))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_malformed_authorization_headers() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    for header in ["", "Bearer", "Bearer not.a.token", "Basic YWRtaW46YWRtaW4="] {
        let response = server
            .get("/contacts")
            .add_header(
                axum::http::header::AUTHORIZATION,
                axum::http::HeaderValue::from_str(header).unwrap(),
            )
            .await;
        response.assert_status_unauthorized();
        let body: Value = response.json();
        assert_eq!(body, json!({"success": false, "message": "forbidden access"}));
    }
}

#[tokio::test]
async fn test_status_route() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let response = server.get("/").await;
    response.assert_status_ok();
    response.assert_text("Portfolio server is running on 5000");
}
