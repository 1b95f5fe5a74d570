//! Serves the compiled browser client embedded at build time (`build.rs`
//! copies `frontend/dist` into `static/dist`). Unknown paths fall back to
//! `index.html` so client-side routes survive a reload; unknown `/api` paths
//! stay a 404.

use actix_web::{HttpRequest, HttpResponse};
use common::requests::MessageResponse;
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    if path == "api" || path.starts_with("api/") {
        return HttpResponse::NotFound().json(MessageResponse {
            msg: "Not Found".to_string(),
        });
    }
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Frontend not built"),
        },
    }
}
