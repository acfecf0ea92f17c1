use actix_web::web;
use beam_sword_agents::clock::FixedClock;
use beam_sword_agents::{Agent, BookkeepingAgent};
use beam_sword_lark::{LarkClient, LarkCredentials};
use beam_sword_llm_sdk::client::LlmClient;
use beam_sword_llm_sdk::error::LlmError;
use beam_sword_llm_sdk::tools::ToolCall;
use beam_sword_llm_sdk::types::{CompletionRequest, CompletionResponse, Message, Usage};
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const BILLS: &str =
    r#"[{"event":"点外卖","type":"支出","amount":-20,"tag":"餐饮","date":"2024/06/07"}]"#;
pub const TOKEN_PATH: &str = "/open-apis/auth/v3/tenant_access_token/internal";
pub const BATCH_PATH: &str =
    "/open-apis/bitable/v1/apps/bascnAppToken/tables/tblBills/records/batch_create";

pub struct MockLlmClient {
    pub responses: Mutex<VecDeque<Result<Message, LlmError>>>,
    pub call_count: Mutex<usize>,
}

impl MockLlmClient {
    pub fn with_responses(responses: Vec<Result<Message, LlmError>>) -> Self {
        MockLlmClient {
            responses: Mutex::new(responses.into()),
            call_count: Mutex::new(0),
        }
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        let message = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Message::assistant("[]")))?;

        Ok(CompletionResponse {
            message,
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
            },
            finish_reason: Some("stop".to_string()),
        })
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub fn get_current_date_call() -> Message {
    Message::assistant("").with_tool_calls(vec![ToolCall::new("", "GetCurrentDate", "{}")])
}

pub struct TestState {
    pub agent: web::Data<Arc<dyn Agent>>,
    pub lark: web::Data<LarkClient>,
    pub llm: Arc<MockLlmClient>,
}

pub fn setup_test_state(
    responses: Vec<Result<Message, LlmError>>,
    lark_url: String,
) -> TestState {
    let llm = Arc::new(MockLlmClient::with_responses(responses));
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
    let agent: Arc<dyn Agent> =
        Arc::new(BookkeepingAgent::new(llm.clone()).with_clock(Arc::new(clock)));

    let lark = LarkClient::new(LarkCredentials {
        app_id: "cli_test".to_string(),
        app_secret: "secret".to_string(),
        app_token: "bascnAppToken".to_string(),
        table_id: "tblBills".to_string(),
    })
    .unwrap()
    .with_base_url(lark_url);

    TestState {
        agent: web::Data::new(agent),
        lark: web::Data::new(lark),
        llm,
    }
}

pub async fn mock_token(server: &mut mockito::Server, expect: usize) -> mockito::Mock {
    server
        .mock("POST", TOKEN_PATH)
        .with_status(200)
        .with_body(r#"{"code": 0, "msg": "ok", "tenant_access_token": "t-abc", "expire": 7200}"#)
        .expect(expect)
        .create_async()
        .await
}

pub async fn mock_batch(server: &mut mockito::Server, expect: usize) -> mockito::Mock {
    server
        .mock("POST", BATCH_PATH)
        .match_header("authorization", "Bearer t-abc")
        .with_status(200)
        .with_body(r#"{"code": 0, "msg": "success", "data": {}}"#)
        .expect(expect)
        .create_async()
        .await
}
