use crate::{
    error::LlmError,
    qwen::{
        client::QwenClient,
        types::{
            QwenGenerationRequest, QwenGenerationResponse, QwenInput, QwenMessage, QwenParameters,
            QwenRole, QwenTool,
        },
    },
    tools::Tool,
};

/// Builder for DashScope generation requests
pub struct QwenMessageBuilder<'a> {
    client: &'a QwenClient,
    model: Option<String>,
    messages: Vec<QwenMessage>,
    tools: Vec<QwenTool>,
}

impl<'a> QwenMessageBuilder<'a> {
    /// Create a new message builder
    pub fn new(client: &'a QwenClient) -> Self {
        Self {
            client,
            model: None,
            messages: Vec::new(),
            tools: Vec::new(),
        }
    }

    /// Set the model to use
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Add a message to the conversation
    ///
    /// Valid roles: "system", "user", "assistant"
    /// Invalid roles will be treated as "user" by default.
    pub fn message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        let role_str = role.into();
        let role = match role_str.as_str() {
            "system" => QwenRole::System,
            "user" => QwenRole::User,
            "assistant" => QwenRole::Assistant,
            _ => {
                tracing::warn!("Invalid role '{}', defaulting to 'user'", role_str);
                QwenRole::User
            }
        };

        self.messages.push(QwenMessage::new(role, content));
        self
    }

    pub fn system_message(self, content: impl Into<String>) -> Self {
        self.message("system", content)
    }

    pub fn user_message(self, content: impl Into<String>) -> Self {
        self.message("user", content)
    }

    pub fn assistant_message(self, content: impl Into<String>) -> Self {
        self.message("assistant", content)
    }

    /// Add a tool to the request
    pub fn tool(mut self, tool: &Tool) -> Self {
        self.tools.push(QwenTool::from(tool));
        self
    }

    /// Send the request and get the raw DashScope response
    pub async fn send(self) -> Result<QwenGenerationResponse, LlmError> {
        if self.messages.is_empty() {
            return Err(LlmError::invalid_request("At least one message is required"));
        }

        let request = QwenGenerationRequest {
            model: self
                .model
                .unwrap_or_else(|| crate::qwen::client::DEFAULT_MODEL.to_string()),
            input: QwenInput {
                messages: self.messages,
            },
            parameters: QwenParameters {
                tools: self.tools,
                ..Default::default()
            },
        };

        self.client.create_generation(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use schemars::JsonSchema;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, JsonSchema)]
    struct Empty {}

    #[tokio::test]
    async fn test_builder_sends_tools_and_messages() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/services/aigc/text-generation/generation")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({
                    "model": "qwen-turbo",
                    "parameters": {"result_format": "message"}
                })),
                Matcher::Regex(r#""name":"Now","description":"current time""#.to_string()),
                Matcher::Regex(r#"\{"role":"user","content":"hello"\}"#.to_string()),
            ]))
            .with_status(200)
            .with_body(r#"{"output": {"choices": [{"finish_reason": "stop", "message": {"role": "assistant", "content": "ok"}}]}}"#)
            .create_async()
            .await;

        let client = QwenClient::new("test-key")
            .unwrap()
            .with_base_url(server.url());
        let tool = Tool::from_type::<Empty>()
            .name("Now")
            .description("current time")
            .build();

        let response = client
            .message_builder()
            .model("qwen-turbo")
            .system_message("be brief")
            .message("narrator", "hello")
            .tool(&tool)
            .send()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            response.output.choices[0].message.content.as_deref(),
            Some("ok")
        );
    }

    #[tokio::test]
    async fn test_builder_requires_messages() {
        let client = QwenClient::new("test-key").unwrap();
        let result = client.message_builder().send().await;

        assert!(matches!(result, Err(LlmError::InvalidRequest { .. })));
    }
}
