pub mod bills;
pub mod health;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(bills::record_bills).service(health::health);
}
