//! HTTP surface of the server.
//!
//! - `recipes`: the JSON/multipart CRUD API under `/api/recipes`.
//! - `uploads`: uploaded images under `/uploads`.
//! - `frontend`: the embedded single-page client for every other path.

pub mod frontend;
pub mod recipes;
pub mod uploads;

use actix_web::web;
use std::path::Path;

/// Registers every route on an `App`. Shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig, upload_dir: &Path) {
    cfg.app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
        .service(recipes::configure_routes())
        .service(uploads::configure_routes(upload_dir))
        .default_service(web::route().to(frontend::serve_embedded));
}
