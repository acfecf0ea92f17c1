//! Writes bill records into a Lark (Feishu) Bitable table.
//!
//! The LLM's JSON answer is parsed into [`records::BillRecord`]s, wrapped into
//! a batch-create request and posted with a freshly issued tenant access
//! token.

pub mod client;
pub mod error;
pub mod records;
pub mod types;

pub use client::{LarkClient, LarkCredentials};
pub use error::LarkError;
pub use records::{parse_bills, BatchCreateRequest, BillRecord, BillType};
