use crate::error::LarkError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Day-precision date format used in the LLM output
pub const BILL_DATE_FORMAT: &str = "%Y/%m/%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillType {
    #[serde(rename = "收入", alias = "income")]
    Income,
    #[serde(rename = "支出", alias = "expense")]
    Expense,
}

/// One bill as the LLM writes it
#[derive(Debug, Clone, Deserialize)]
struct LlmBill {
    event: String,
    #[serde(rename = "type")]
    bill_type: BillType,
    amount: f64,
    tag: String,
    date: String,
}

/// One row of the bill table. Serializes to the table's column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillRecord {
    #[serde(rename = "事件")]
    pub event: String,
    #[serde(rename = "类型")]
    pub bill_type: BillType,
    /// Negative for expenses by convention; not enforced
    #[serde(rename = "金额")]
    pub amount: f64,
    #[serde(rename = "分类")]
    pub tag: String,
    /// Epoch millis of UTC midnight of the bill's day
    #[serde(rename = "日期")]
    pub date: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub fields: BillRecord,
}

/// Body of `records/batch_create`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchCreateRequest {
    pub records: Vec<Record>,
}

impl BatchCreateRequest {
    pub fn from_records(records: Vec<BillRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|fields| Record { fields })
                .collect(),
        }
    }
}

/// Convert `YYYY/MM/DD` to the epoch millis of that day's UTC midnight
pub fn parse_bill_date(date: &str) -> Result<i64, LarkError> {
    let day = NaiveDate::parse_from_str(date.trim(), BILL_DATE_FORMAT).map_err(|source| {
        LarkError::InvalidDate {
            date: date.to_string(),
            source,
        }
    })?;

    Ok(day.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

/// Parse the LLM's JSON array of bills, keeping input order
pub fn parse_bills(text: &str) -> Result<Vec<BillRecord>, LarkError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| LarkError::invalid_bills(format!("not valid JSON: {}", e)))?;

    let Value::Array(items) = value else {
        return Err(LarkError::invalid_bills("expected a JSON array of bills"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let bill: LlmBill = serde_json::from_value(item)
                .map_err(|e| LarkError::invalid_bills(format!("bill #{}: {}", index, e)))?;

            Ok(BillRecord {
                date: parse_bill_date(&bill.date)?,
                event: bill.event,
                bill_type: bill.bill_type,
                amount: bill.amount,
                tag: bill.tag,
            })
        })
        .collect()
}
