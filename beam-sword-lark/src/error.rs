use thiserror::Error;

#[derive(Error, Debug)]
pub enum LarkError {
    /// Network or connection error
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// JSON parsing or serialization error
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// The LLM output could not be read as a list of bills
    #[error("Invalid bills: {message}")]
    InvalidBills { message: String },

    /// A bill date did not match YYYY/MM/DD
    #[error("Invalid bill date '{date}': {source}")]
    InvalidDate {
        date: String,
        source: chrono::ParseError,
    },

    /// Tenant access token could not be obtained
    #[error("Authentication failed (code {code}): {message}")]
    Authentication { code: i64, message: String },

    /// Non-success HTTP status from the Open API
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl LarkError {
    pub fn invalid_bills<S: Into<String>>(message: S) -> Self {
        Self::InvalidBills {
            message: message.into(),
        }
    }
}
