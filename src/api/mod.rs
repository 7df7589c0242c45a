// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;

// This holds our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Strength endpoints
        crate::api::handlers::strength::check_strength,

        // Generator endpoints
        crate::api::handlers::generator::generate_password,

        // System endpoints
        crate::api::handlers::system::get_status,
    ),
    components(
        schemas(
            crate::api::types::CheckStrengthRequest,
            crate::api::types::StrengthCheckResponse,
            crate::api::types::GeneratePasswordRequest,
            crate::api::types::GeneratePasswordResponse,
            crate::api::types::StatusResponse,
            crate::models::StrengthLabel,
        )
    ),
    tags(
        (name = "Strength", description = "Password strength evaluation endpoints"),
        (name = "Generator", description = "Password generation endpoints"),
        (name = "System", description = "Service status endpoints")
    ),
    info(
        title = "PassMeter API",
        version = "0.1.0",
        description = "Password Strength Meter & Generator API",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    log::info!(
        "Starting PassMeter API server on {}:{}",
        config.web_address,
        config.web_port
    );

    let bind_addr = (config.web_address.clone(), config.web_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure the regular API routes
            .configure(routes::configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}

pub mod handlers;
pub mod routes;
pub mod types;
