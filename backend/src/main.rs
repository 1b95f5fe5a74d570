mod config;
mod error;
mod services;
mod state;
mod store;

use crate::config::Config;
use crate::state::AppState;
use crate::store::RecipeStore;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::{fs, io};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(io::Error::other)?;
    fs::create_dir_all(&config.upload_dir)?;
    info!("Serving uploads from {}", config.upload_dir.display());

    let store = RecipeStore::open(config.database_path()).map_err(io::Error::other)?;
    info!("Recipe store opened at {}", config.database_path());

    let state = AppState::new(store.clone(), &config);
    let upload_dir = config.upload_dir.clone();
    let url = format!("http://{}:{}", config.host, config.port);
    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(|cfg| services::configure(cfg, &upload_dir))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await?;

    match store.close() {
        Ok(true) => info!("Recipe store closed"),
        Ok(false) => warn!("Recipe store still referenced at shutdown; closing on drop"),
        Err(e) => warn!("Failed to close recipe store: {}", e),
    }
    Ok(())
}
