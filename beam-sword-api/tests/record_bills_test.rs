mod common;

use actix_web::test::{self, TestRequest};
use actix_web::App;
use beam_sword_api::handlers;
use beam_sword_llm_sdk::error::LlmError;
use beam_sword_llm_sdk::types::Message;
use common::{get_current_date_call, mock_batch, mock_token, setup_test_state, BILLS};
use mockito::Matcher;
use serde_json::json;

#[actix_rt::test]
async fn test_bills_are_written_to_table() {
    let mut server = mockito::Server::new_async().await;
    let token = mock_token(&mut server, 1).await;
    let batch = server
        .mock("POST", common::BATCH_PATH)
        .match_header("authorization", "Bearer t-abc")
        .match_body(Matcher::Json(json!({
            "records": [{"fields": {
                "事件": "点外卖",
                "类型": "支出",
                "金额": -20.0,
                "分类": "餐饮",
                "日期": 1_717_718_400_000_i64
            }}]
        })))
        .with_status(200)
        .with_body(r#"{"code": 0, "msg": "success"}"#)
        .create_async()
        .await;

    let state = setup_test_state(
        vec![Ok(Message::assistant(format!("```json\n{}\n```", BILLS)))],
        server.url(),
    );
    let app = test::init_service(
        App::new()
            .app_data(state.agent.clone())
            .app_data(state.lark.clone())
            .configure(handlers::configure),
    )
    .await;

    let req = TestRequest::post()
        .uri("/bs")
        .set_json(json!({"userContent": "我今天点外卖花了20块钱"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert!(body.is_empty());

    assert_eq!(state.llm.get_call_count(), 1);
    token.assert_async().await;
    batch.assert_async().await;
}

#[actix_rt::test]
async fn test_tool_call_round_trip_before_write() {
    let mut server = mockito::Server::new_async().await;
    let token = mock_token(&mut server, 1).await;
    let batch = mock_batch(&mut server, 1).await;

    let state = setup_test_state(
        vec![Ok(get_current_date_call()), Ok(Message::assistant(BILLS))],
        server.url(),
    );
    let app = test::init_service(
        App::new()
            .app_data(state.agent.clone())
            .app_data(state.lark.clone())
            .configure(handlers::configure),
    )
    .await;

    let req = TestRequest::post()
        .uri("/bs")
        .set_json(json!({"userContent": "我今天点外卖花了20块钱"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(state.llm.get_call_count(), 2);
    token.assert_async().await;
    batch.assert_async().await;
}

#[actix_rt::test]
async fn test_llm_failure_still_answers_ok() {
    let mut server = mockito::Server::new_async().await;
    let token = mock_token(&mut server, 0).await;
    let batch = mock_batch(&mut server, 0).await;

    let state = setup_test_state(
        vec![Err(LlmError::authentication("Invalid API-key provided."))],
        server.url(),
    );
    let app = test::init_service(
        App::new()
            .app_data(state.agent.clone())
            .app_data(state.lark.clone())
            .configure(handlers::configure),
    )
    .await;

    let req = TestRequest::post()
        .uri("/bs")
        .set_json(json!({"userContent": "我今天点外卖花了20块钱"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(state.llm.get_call_count(), 1);
    token.assert_async().await;
    batch.assert_async().await;
}

#[actix_rt::test]
async fn test_unparsable_bills_skip_table_write() {
    let mut server = mockito::Server::new_async().await;
    let token = mock_token(&mut server, 0).await;
    let batch = mock_batch(&mut server, 0).await;

    let state = setup_test_state(
        vec![Ok(Message::assistant("抱歉，我没有理解你的账单。"))],
        server.url(),
    );
    let app = test::init_service(
        App::new()
            .app_data(state.agent.clone())
            .app_data(state.lark.clone())
            .configure(handlers::configure),
    )
    .await;

    let req = TestRequest::post()
        .uri("/bs")
        .set_json(json!({"userContent": "嗯"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    token.assert_async().await;
    batch.assert_async().await;
}

#[actix_rt::test]
async fn test_table_failure_still_answers_ok() {
    let mut server = mockito::Server::new_async().await;
    let _token = server
        .mock("POST", common::TOKEN_PATH)
        .with_status(200)
        .with_body(r#"{"code": 10014, "msg": "app secret invalid"}"#)
        .create_async()
        .await;
    let batch = mock_batch(&mut server, 0).await;

    let state = setup_test_state(vec![Ok(Message::assistant(BILLS))], server.url());
    let app = test::init_service(
        App::new()
            .app_data(state.agent.clone())
            .app_data(state.lark.clone())
            .configure(handlers::configure),
    )
    .await;

    let req = TestRequest::post()
        .uri("/bs")
        .set_json(json!({"userContent": "我今天点外卖花了20块钱"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    batch.assert_async().await;
}

#[actix_rt::test]
async fn test_malformed_body_makes_no_upstream_calls() {
    let mut server = mockito::Server::new_async().await;
    let token = mock_token(&mut server, 0).await;

    let state = setup_test_state(vec![], server.url());
    let app = test::init_service(
        App::new()
            .app_data(state.agent.clone())
            .app_data(state.lark.clone())
            .configure(handlers::configure),
    )
    .await;

    for body in ["not json", r#"{"content": "missing field"}"#] {
        let req = TestRequest::post()
            .uri("/bs")
            .insert_header(("content-type", "application/json"))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    assert_eq!(state.llm.get_call_count(), 0);
    token.assert_async().await;
}

#[actix_rt::test]
async fn test_health() {
    let server = mockito::Server::new_async().await;
    let state = setup_test_state(vec![], server.url());
    let app = test::init_service(
        App::new()
            .app_data(state.agent.clone())
            .app_data(state.lark.clone())
            .configure(handlers::configure),
    )
    .await;

    let req = TestRequest::get().uri("/health").to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp, json!({"status": "healthy"}));
}
