//! Shared application state handed to every request handler.
//!
//! `AppState` is built once in `main.rs` from the loaded `Config` and the opened
//! `RecipeStore`, and registered as `web::Data`. Cloning is cheap: the store is
//! a shared handle and the upload settings are plain values.

use crate::config::Config;
use crate::store::RecipeStore;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub store: RecipeStore,
    pub uploads: UploadSettings,
}

#[derive(Clone, Debug)]
pub struct UploadSettings {
    /// Directory uploaded images are written to and served from.
    pub dir: PathBuf,
    /// Image URL stored on recipes created without an image part.
    pub placeholder_image: String,
}

impl AppState {
    pub fn new(store: RecipeStore, config: &Config) -> Self {
        Self {
            store,
            uploads: UploadSettings {
                dir: config.upload_dir.clone(),
                placeholder_image: config.placeholder_image.clone(),
            },
        }
    }
}
