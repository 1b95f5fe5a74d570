//! Static Asset Server: uploaded images are served read-only from the upload
//! directory under `/uploads/<filename>`. No listing, no access control.

use actix_files::Files;
use std::path::Path;

pub const UPLOADS_PATH: &str = "/uploads";

pub fn configure_routes(upload_dir: &Path) -> Files {
    Files::new(UPLOADS_PATH, upload_dir)
}

pub fn public_path(filename: &str) -> String {
    format!("{UPLOADS_PATH}/{filename}")
}
