use crate::tools::{Tool, ToolCall};
use schemars::schema::RootSchema;
use serde::{Deserialize, Serialize};

/// DashScope text-generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QwenGenerationRequest {
    /// The model to use for generation
    pub model: String,
    pub input: QwenInput,
    pub parameters: QwenParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QwenInput {
    pub messages: Vec<QwenMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QwenParameters {
    /// Always "message" so the output carries role/content/tool_calls
    pub result_format: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<QwenTool>,
}

impl Default for QwenParameters {
    fn default() -> Self {
        Self {
            result_format: "message".to_string(),
            tools: Vec::new(),
        }
    }
}

/// A message in the DashScope conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QwenMessage {
    pub role: QwenRole,
    /// DashScope sends `null` or omits content on some tool-call turns
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QwenRole {
    System,
    User,
    Assistant,
    Tool,
}

/// Function tool declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QwenTool {
    pub r#type: String,
    pub function: QwenFunction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QwenFunction {
    pub name: String,
    pub description: String,
    pub parameters: RootSchema,
}

impl From<&Tool> for QwenTool {
    fn from(tool: &Tool) -> Self {
        Self {
            r#type: "function".to_string(),
            function: QwenFunction {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters().clone(),
            },
        }
    }
}

/// DashScope text-generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QwenGenerationResponse {
    pub output: QwenOutput,
    #[serde(default)]
    pub usage: Option<QwenUsage>,
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QwenOutput {
    #[serde(default)]
    pub choices: Vec<QwenChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QwenChoice {
    #[serde(default)]
    pub finish_reason: Option<String>,
    pub message: QwenMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QwenUsage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
    #[serde(default)]
    pub total_tokens: Option<u32>,
}

/// DashScope error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QwenErrorResponse {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}

impl QwenMessage {
    /// Create a new text message
    pub fn new<S: Into<String>>(role: QwenRole, content: S) -> Self {
        Self {
            role,
            content: Some(content.into()),
            name: None,
            tool_calls: None,
        }
    }

    pub fn system<S: Into<String>>(content: S) -> Self {
        Self::new(QwenRole::System, content)
    }

    pub fn user<S: Into<String>>(content: S) -> Self {
        Self::new(QwenRole::User, content)
    }

    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self::new(QwenRole::Assistant, content)
    }
}

impl From<crate::types::Role> for QwenRole {
    fn from(role: crate::types::Role) -> Self {
        match role {
            crate::types::Role::System => QwenRole::System,
            crate::types::Role::User => QwenRole::User,
            crate::types::Role::Assistant => QwenRole::Assistant,
            crate::types::Role::Tool => QwenRole::Tool,
        }
    }
}

impl From<QwenRole> for crate::types::Role {
    fn from(role: QwenRole) -> Self {
        match role {
            QwenRole::System => crate::types::Role::System,
            QwenRole::User => crate::types::Role::User,
            QwenRole::Assistant => crate::types::Role::Assistant,
            QwenRole::Tool => crate::types::Role::Tool,
        }
    }
}

impl From<crate::types::Message> for QwenMessage {
    fn from(message: crate::types::Message) -> Self {
        Self {
            role: message.role.into(),
            content: Some(message.content),
            name: message.name,
            tool_calls: if message.tool_calls.is_empty() {
                None
            } else {
                Some(message.tool_calls)
            },
        }
    }
}

impl From<QwenMessage> for crate::types::Message {
    fn from(message: QwenMessage) -> Self {
        Self {
            role: message.role.into(),
            content: message.content.unwrap_or_default(),
            name: message.name,
            tool_calls: message.tool_calls.unwrap_or_default(),
        }
    }
}
