// src/api/handlers/strength.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{CheckStrengthRequest, StrengthCheckResponse};
use crate::meter;

/// Check password strength
///
/// Scores the submitted password against the rule set and returns
/// improvement tips for every failed check.
#[utoipa::path(
    post,
    path = "/strength/check",
    tag = "Strength",
    request_body = CheckStrengthRequest,
    responses(
        (status = 200, description = "Password strength report", body = StrengthCheckResponse)
    )
)]
pub async fn check_strength(check_req: web::Json<CheckStrengthRequest>) -> impl Responder {
    // The evaluator is total: any string input yields a report.
    let report = meter::evaluate(&check_req.password);

    HttpResponse::Ok().json(StrengthCheckResponse {
        success: true,
        score: Some(report.score),
        label: Some(report.label),
        tips: report.tips,
        error: None,
    })
}
