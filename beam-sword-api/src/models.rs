use serde::{Deserialize, Serialize};

/// Body of `POST /bs`
#[derive(Debug, Deserialize, Serialize)]
pub struct RecordBillsRequest {
    #[serde(rename = "userContent")]
    pub user_content: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
