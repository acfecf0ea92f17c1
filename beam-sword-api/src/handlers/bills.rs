use crate::models::RecordBillsRequest;
use actix_web::{post, web, HttpResponse, Responder};
use beam_sword_agents::Agent;
use beam_sword_lark::LarkClient;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Structure the utterance with the LLM, then write the bills to the table.
///
/// Always answers 200 with an empty body; outcomes only go to the log.
#[post("/bs")]
pub async fn record_bills(
    body: web::Bytes,
    agent: web::Data<Arc<dyn Agent>>,
    lark: web::Data<LarkClient>,
) -> impl Responder {
    let request: RecordBillsRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Ignoring malformed /bs request body");
            return HttpResponse::Ok().finish();
        }
    };

    info!(user_content = %request.user_content, "Recording bills");

    let bills = match agent.execute(&request.user_content).await {
        Ok(bills) => bills,
        Err(e) => {
            error!("Bookkeeping agent failed: {:#}", e);
            return HttpResponse::Ok().finish();
        }
    };

    info!(bills = %bills, "Agent produced bills");

    match lark.create_records(&bills).await {
        Ok(response) => info!(response = %response, "Bills written to table"),
        Err(e) => error!(error = %e, "Failed to write bills to table"),
    }

    HttpResponse::Ok().finish()
}
