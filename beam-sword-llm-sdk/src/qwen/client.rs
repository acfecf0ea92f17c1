use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::{
    client::LlmClient,
    error::LlmError,
    qwen::{
        builder::QwenMessageBuilder,
        types::{
            QwenErrorResponse, QwenGenerationRequest, QwenGenerationResponse, QwenInput,
            QwenMessage, QwenParameters, QwenTool,
        },
    },
    types::{CompletionRequest, CompletionResponse, Message, Usage},
};

pub const DEFAULT_BASE_URL: &str = "https://dashscope.aliyuncs.com";
pub const DEFAULT_MODEL: &str = "qwen-max";
const GENERATION_PATH: &str = "/api/v1/services/aigc/text-generation/generation";

/// Client for the DashScope text-generation API (Qwen models)
pub struct QwenClient {
    api_key: String,
    base_url: String,
    model: String,
    http_client: reqwest::Client,
}

impl QwenClient {
    /// Create a new Qwen client with the given API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::authentication("API key cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300)) // 5 minute timeout
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            http_client,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the default model used by [`LlmClient::complete`]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Start building a generation request
    pub fn message_builder(&self) -> QwenMessageBuilder<'_> {
        QwenMessageBuilder::new(self)
    }

    /// Call the DashScope generation endpoint
    pub async fn create_generation(
        &self,
        request: QwenGenerationRequest,
    ) -> Result<QwenGenerationResponse, LlmError> {
        let url = format!("{}{}", self.base_url, GENERATION_PATH);

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| LlmError::authentication("Invalid API key format"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        tracing::debug!(
            model = %request.model,
            messages = request.input.messages.len(),
            tools = request.parameters.tools.len(),
            "Sending DashScope generation request"
        );

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| LlmError::Network { source: e })?;
        tracing::debug!(status = status.as_u16(), body = %body, "DashScope response");

        if status.is_success() {
            serde_json::from_str::<QwenGenerationResponse>(&body).map_err(|e| {
                LlmError::malformed(format!("Failed to parse generation response: {}", e))
            })
        } else {
            let message = serde_json::from_str::<QwenErrorResponse>(&body)
                .map(|err| match err.code {
                    Some(code) => format!("{}: {}", code, err.message),
                    None => err.message,
                })
                .unwrap_or(body);

            match status {
                reqwest::StatusCode::BAD_REQUEST => Err(LlmError::invalid_request(message)),
                reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                    Err(LlmError::authentication(message))
                }
                reqwest::StatusCode::TOO_MANY_REQUESTS => Err(LlmError::rate_limit(message)),
                _ => Err(LlmError::api_error(status.as_u16(), message)),
            }
        }
    }
}

#[async_trait]
impl LlmClient for QwenClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let qwen_request = QwenGenerationRequest {
            model: request.model.unwrap_or_else(|| self.model.clone()),
            input: QwenInput {
                messages: request.messages.into_iter().map(QwenMessage::from).collect(),
            },
            parameters: QwenParameters {
                tools: request.tools.iter().map(QwenTool::from).collect(),
                ..Default::default()
            },
        };

        let qwen_response = self.create_generation(qwen_request).await?;

        let usage = qwen_response
            .usage
            .map(|u| Usage {
                input_tokens: u.input_tokens,
                output_tokens: u.output_tokens,
            })
            .unwrap_or_default();

        let choice = qwen_response
            .output
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::malformed("No completion choices returned"))?;

        Ok(CompletionResponse {
            message: Message::from(choice.message),
            usage,
            finish_reason: choice.finish_reason,
        })
    }

    fn provider_name(&self) -> &str {
        "dashscope"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
