use serde::{Deserialize, Serialize};

/// Body of `auth/v3/tenant_access_token/internal`
#[derive(Debug, Clone, Serialize)]
pub struct TenantAccessTokenRequest<'a> {
    pub app_id: &'a str,
    pub app_secret: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TenantAccessTokenResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub tenant_access_token: Option<String>,
    /// Seconds until the token expires
    #[serde(default)]
    pub expire: Option<u64>,
}
