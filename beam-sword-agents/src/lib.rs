pub mod bookkeeping;
pub mod clock;
pub mod response;

use async_trait::async_trait;
use clock::Clock;
use schemars::JsonSchema;
use serde::Deserialize;

pub use bookkeeping::{AgentStep, BookkeepingAgent};

/// Arguments of `GetCurrentDate`. The function takes none.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCurrentDateArgs {}

/// Represents the types of tools available to agents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentTool {
    GetCurrentDate,
}

impl AgentTool {
    /// Returns the tool name as declared to the LLM
    pub fn name(&self) -> &'static str {
        match self {
            AgentTool::GetCurrentDate => "GetCurrentDate",
        }
    }

    /// Look a tool up by the name the LLM used. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GetCurrentDate" => Some(AgentTool::GetCurrentDate),
            _ => None,
        }
    }

    /// Convert AgentTool to an SDK Tool definition for the LLM
    pub fn to_tool_definition(&self) -> beam_sword_llm_sdk::tools::Tool {
        match self {
            AgentTool::GetCurrentDate => {
                beam_sword_llm_sdk::tools::Tool::from_type::<GetCurrentDateArgs>()
                    .name(self.name())
                    .description(
                        "当你想知道今天的日期时非常有用，如果你需要我告诉你今天的日期，请你调用这个函数。",
                    )
                    .build()
            }
        }
    }

    /// Run the tool and return the text sent back to the LLM
    pub fn execute(&self, clock: &dyn Clock) -> String {
        match self {
            AgentTool::GetCurrentDate => clock::format_today(clock.today()),
        }
    }
}

/// Trait defining the structure and behavior of an AI agent
#[async_trait]
pub trait Agent: Send + Sync {
    /// Returns the agent's clear objective
    fn objective(&self) -> &str;

    /// Returns the system prompt for the agent
    fn system_prompt(&self) -> &str;

    /// Returns the list of tools available to this agent
    fn tools(&self) -> Vec<AgentTool>;

    /// Execute the agent with the given user prompt
    async fn execute(&self, user_prompt: &str) -> anyhow::Result<String>;
}
