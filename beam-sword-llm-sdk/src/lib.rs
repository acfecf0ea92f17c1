//! # beam-sword LLM SDK
//!
//! Provider-agnostic conversation types, tool-calling primitives and the
//! DashScope (Qwen) client used by the bookkeeping agent.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_sword_llm_sdk::client::LlmClient;
//! use beam_sword_llm_sdk::qwen::QwenClient;
//! use beam_sword_llm_sdk::types::{CompletionRequest, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QwenClient::new("your-dashscope-api-key")?;
//!     let response = client
//!         .complete(CompletionRequest::new(vec![Message::user("你好")]))
//!         .await?;
//!
//!     println!("Response: {}", response.message.content);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod qwen;
pub mod tools;
pub mod types;
