// src/api/handlers/generator.rs
use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::api::types::{GeneratePasswordRequest, GeneratePasswordResponse};
use crate::core::config::Config;
use crate::generators;
use crate::meter;

/// Generate a strong password
///
/// Draws a random password of the requested length from the fixed alphabet
/// and scores it with the evaluator.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = GeneratePasswordRequest,
    responses(
        (status = 200, description = "Generated password", body = GeneratePasswordResponse),
        (status = 400, description = "Invalid length", body = GeneratePasswordResponse),
        (status = 500, description = "Randomness source unavailable", body = GeneratePasswordResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<GeneratePasswordRequest>,
) -> impl Responder {
    let length = generation_req
        .length
        .unwrap_or(config.default_password_length);

    if length < 1 {
        return HttpResponse::BadRequest().json(GeneratePasswordResponse {
            success: false,
            password: None,
            score: None,
            label: None,
            error: Some("Password length must be at least 1 character".to_string()),
        });
    }

    if length > config.max_password_length {
        return HttpResponse::BadRequest().json(GeneratePasswordResponse {
            success: false,
            password: None,
            score: None,
            label: None,
            error: Some(format!(
                "Password length must be at most {} characters",
                config.max_password_length
            )),
        });
    }

    let password = match generators::generate(length) {
        Ok(pwd) => pwd,
        Err(e) => {
            error!("Failed to generate password: {}", e);
            return HttpResponse::InternalServerError().json(GeneratePasswordResponse {
                success: false,
                password: None,
                score: None,
                label: None,
                error: Some(format!("Failed to generate password: {}", e)),
            });
        }
    };

    // Score the fresh password so the UI can show both at once.
    let report = meter::evaluate(&password);

    HttpResponse::Ok().json(GeneratePasswordResponse {
        success: true,
        password: Some(password),
        score: Some(report.score),
        label: Some(report.label),
        error: None,
    })
}
