use crate::config::{LarkConfig, LlmConfig};
use beam_sword_agents::{Agent, BookkeepingAgent};
use beam_sword_lark::{LarkClient, LarkCredentials};
use beam_sword_llm_sdk::client::LlmClient;
use beam_sword_llm_sdk::qwen::QwenClient;
use std::sync::Arc;

pub fn create_llm_client(config: &LlmConfig) -> anyhow::Result<Arc<dyn LlmClient>> {
    let client = QwenClient::new(config.api_key.clone())?
        .with_base_url(&config.base_url)
        .with_model(&config.model);

    Ok(Arc::new(client))
}

pub fn create_bookkeeping_agent(config: &LlmConfig) -> anyhow::Result<Arc<dyn Agent>> {
    let client = create_llm_client(config)?;
    Ok(Arc::new(BookkeepingAgent::new(client)))
}

pub fn create_lark_client(config: &LarkConfig) -> anyhow::Result<LarkClient> {
    let client = LarkClient::new(LarkCredentials {
        app_id: config.app_id.clone(),
        app_secret: config.app_secret.clone(),
        app_token: config.app_token.clone(),
        table_id: config.table_id.clone(),
    })?
    .with_base_url(&config.base_url);

    Ok(client)
}
