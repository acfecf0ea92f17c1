use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use crate::{
    error::LarkError,
    records::{parse_bills, BatchCreateRequest},
    types::{TenantAccessTokenRequest, TenantAccessTokenResponse},
};

pub const DEFAULT_BASE_URL: &str = "https://open.feishu.cn";
const TENANT_ACCESS_TOKEN_PATH: &str = "/open-apis/auth/v3/tenant_access_token/internal";

/// App credentials and the target table
#[derive(Debug, Clone)]
pub struct LarkCredentials {
    pub app_id: String,
    pub app_secret: String,
    /// Bitable app token (the base, not the auth token)
    pub app_token: String,
    pub table_id: String,
}

/// Client for the Lark Open API Bitable endpoints
pub struct LarkClient {
    credentials: LarkCredentials,
    base_url: String,
    http_client: reqwest::Client,
}

impl LarkClient {
    pub fn new(credentials: LarkCredentials) -> Result<Self, LarkError> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn batch_create_url(&self) -> String {
        format!(
            "{}/open-apis/bitable/v1/apps/{}/tables/{}/records/batch_create",
            self.base_url, self.credentials.app_token, self.credentials.table_id
        )
    }

    /// Exchange the app id/secret for a short-lived tenant access token
    pub async fn tenant_access_token(&self) -> Result<String, LarkError> {
        let url = format!("{}{}", self.base_url, TENANT_ACCESS_TOKEN_PATH);
        let body = TenantAccessTokenRequest {
            app_id: &self.credentials.app_id,
            app_secret: &self.credentials.app_secret,
        };

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(status = status.as_u16(), body = %text, "Tenant access token response");

        let token_response: TenantAccessTokenResponse = serde_json::from_str(&text)?;
        match token_response.tenant_access_token {
            Some(token) if !token.is_empty() => {
                tracing::debug!(expire = ?token_response.expire, "Obtained tenant access token");
                Ok(token)
            }
            _ => Err(LarkError::Authentication {
                code: token_response.code,
                message: if token_response.msg.is_empty() {
                    format!("empty tenant access token (status {})", status.as_u16())
                } else {
                    token_response.msg
                },
            }),
        }
    }

    /// Post a batch-create request. The response body is logged and
    /// returned as-is; per-record results are not inspected.
    pub async fn batch_create(&self, request: &BatchCreateRequest) -> Result<Value, LarkError> {
        let body = serde_json::to_vec(request)?;
        let token = self.tenant_access_token().await?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                LarkError::Authentication {
                    code: 0,
                    message: "tenant access token is not a valid header value".to_string(),
                }
            })?,
        );
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );

        let response = self
            .http_client
            .post(self.batch_create_url())
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::info!(
            status = status.as_u16(),
            records = request.records.len(),
            body = %text,
            "Bitable batch create response"
        );

        if !status.is_success() {
            return Err(LarkError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    /// Parse the LLM's bill JSON and write every bill to the table
    pub async fn create_records(&self, bills: &str) -> Result<Value, LarkError> {
        let records = parse_bills(bills)?;
        let request = BatchCreateRequest::from_records(records);
        self.batch_create(&request).await
    }
}
