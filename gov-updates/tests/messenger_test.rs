mod common;

use common::init_tracing;
use gov_updates::config::api_base;
use gov_updates::{FetchConfig, Messenger, ParseMode, TelegramMessenger, UpdateError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_telegram_send_message_html() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_json(json!({
            "chat_id": -1001234,
            "text": "<b>hello</b>",
            "parse_mode": "HTML"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let messenger =
        TelegramMessenger::new(&FetchConfig::default(), api_base(&server.uri()).unwrap(), "123:abc").unwrap();
    messenger.send_message(-1001234, "<b>hello</b>", ParseMode::Html).await.unwrap();
}

#[tokio::test]
async fn test_telegram_plain_text_and_rejection() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_json(json!({ "chat_id": 99, "text": "plain" })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let messenger =
        TelegramMessenger::new(&FetchConfig::default(), api_base(&server.uri()).unwrap(), "123:abc").unwrap();

    match messenger.send_message(99, "plain", ParseMode::Plain).await {
        Err(UpdateError::Delivery { chat_id, reason }) => {
            assert_eq!(chat_id, 99);
            assert_eq!(reason, "Bad Request: chat not found");
        }
        other => panic!("expected a delivery error, got {:?}", other),
    }
}
