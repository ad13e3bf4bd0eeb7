#![allow(dead_code)]

use paystack::PaystackClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const SECRET: &str = "sk_test_5f0c8a91";

pub async fn setup() -> (MockServer, PaystackClient) {
    let server = MockServer::start().await;
    let client = PaystackClient::builder(SECRET)
        .base_url(server.uri())
        .build()
        .expect("client builds against mock server");
    (server, client)
}

pub fn bearer() -> String {
    format!("Bearer {SECRET}")
}

pub fn envelope(message: &str, data: Value) -> Value {
    json!({ "status": true, "message": message, "data": data })
}

pub fn paged(message: &str, data: Value, meta: Value) -> Value {
    json!({ "status": true, "message": message, "data": data, "meta": meta })
}
