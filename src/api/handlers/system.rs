// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};
use chrono::Utc;

use crate::api::types::StatusResponse;

/// Get service status
#[utoipa::path(
    get,
    path = "/system/status",
    tag = "System",
    responses(
        (status = 200, description = "Current service status", body = StatusResponse)
    )
)]
pub async fn get_status() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        success: true,
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        server_time: Utc::now(),
    })
}
