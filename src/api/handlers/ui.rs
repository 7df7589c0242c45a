// src/api/handlers/ui.rs
use actix_web::{http::header::ContentType, HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Serve the form page. All interaction goes through the JSON API; this
/// just hands the browser the shell.
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
