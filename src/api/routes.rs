// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Form page (the UI shell)
    cfg.route("/", web::get().to(handlers::ui::index));

    // Strength evaluation
    cfg.service(
        web::scope("/strength")
            .route("/check", web::post().to(handlers::strength::check_strength)),
    );

    // Password generator
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password)),
    );

    // Service status
    cfg.service(
        web::scope("/system").route("/status", web::get().to(handlers::system::get_status)),
    );
}
