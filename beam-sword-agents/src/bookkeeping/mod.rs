mod prompt;

use crate::clock::{self, Clock, SystemClock};
use crate::response::trim_response;
use crate::{Agent, AgentTool};
use anyhow::Context;
use async_trait::async_trait;
use beam_sword_llm_sdk::client::LlmClient;
use beam_sword_llm_sdk::tools::ToolCall;
use beam_sword_llm_sdk::types::{CompletionRequest, Message};
use std::sync::Arc;

pub use prompt::SYSTEM_PROMPT;

/// What the model asked for in one turn
#[derive(Debug, Clone, PartialEq)]
pub enum AgentStep {
    /// Final answer text, untrimmed
    Content(String),
    /// Assistant message carrying one or more tool calls
    ToolRequest(Message),
}

impl AgentStep {
    pub fn from_message(message: Message) -> Self {
        if message.has_tool_calls() {
            AgentStep::ToolRequest(message)
        } else {
            AgentStep::Content(message.content)
        }
    }
}

/// Turns a free-text expense description into a JSON array of bills.
///
/// One request to the model, plus exactly one replay when the model asks for
/// a tool. The replayed answer is final even if it asks for tools again.
pub struct BookkeepingAgent {
    client: Arc<dyn LlmClient>,
    clock: Arc<dyn Clock>,
}

impl BookkeepingAgent {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// System instruction plus the user turn prefixed with today's date
    pub fn initial_messages(&self, user_content: &str) -> Vec<Message> {
        let today = clock::format_today(self.clock.today());
        vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(format!("{}，{}", today, user_content)),
        ]
    }

    fn tool_definitions(&self) -> Vec<beam_sword_llm_sdk::tools::Tool> {
        self.tools()
            .into_iter()
            .map(|tool| tool.to_tool_definition())
            .collect()
    }

    async fn send(&self, messages: &[Message]) -> anyhow::Result<Message> {
        let request =
            CompletionRequest::new(messages.to_vec()).with_tools(self.tool_definitions());

        let response = self
            .client
            .complete(request)
            .await
            .with_context(|| format!("{} request failed", self.client.provider_name()))?;

        tracing::debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            finish_reason = ?response.finish_reason,
            "LLM turn completed"
        );

        Ok(response.message)
    }

    fn run_tool_call(&self, call: &ToolCall) -> Message {
        let content = match AgentTool::from_name(call.name()) {
            Some(tool) => {
                let output = tool.execute(self.clock.as_ref());
                tracing::debug!(tool_name = call.name(), tool_id = call.id(), output = %output, "Tool executed");
                output
            }
            None => {
                tracing::warn!(tool_name = call.name(), "Model requested an unknown tool");
                String::new()
            }
        };

        Message::tool_result(call.name(), content)
    }

    /// Run the conversation for one utterance and return the trimmed bill JSON
    pub async fn record(&self, user_content: &str) -> anyhow::Result<String> {
        let mut messages = self.initial_messages(user_content);

        let first = self.send(&messages).await?;
        match AgentStep::from_message(first) {
            AgentStep::Content(content) => Ok(trim_response(&content)),
            AgentStep::ToolRequest(message) => {
                tracing::info!(
                    tool_calls = message.tool_calls.len(),
                    "Model requested tools, replaying conversation once"
                );

                let results: Vec<Message> = message
                    .tool_calls
                    .iter()
                    .map(|call| self.run_tool_call(call))
                    .collect();
                messages.push(message);
                messages.extend(results);

                let second = self.send(&messages).await?;
                if second.has_tool_calls() {
                    tracing::warn!(
                        tool_calls = second.tool_calls.len(),
                        "Model requested tools again, using its content as final"
                    );
                }

                Ok(trim_response(&second.content))
            }
        }
    }
}

#[async_trait]
impl Agent for BookkeepingAgent {
    fn objective(&self) -> &str {
        "Structure free-text expense descriptions into bill records"
    }

    fn system_prompt(&self) -> &str {
        SYSTEM_PROMPT
    }

    fn tools(&self) -> Vec<AgentTool> {
        vec![AgentTool::GetCurrentDate]
    }

    async fn execute(&self, user_prompt: &str) -> anyhow::Result<String> {
        self.record(user_prompt).await
    }
}
