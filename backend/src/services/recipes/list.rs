use super::blocking;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// `GET /api/recipes`: every recipe, newest first.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let recipes = blocking(&state.store, |store| store.list())
        .await
        .map_err(ApiError::server)?;
    Ok(HttpResponse::Ok().json(recipes))
}
