use super::blocking;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// `GET /api/recipes/{id}`. Unknown and malformed ids are both a 404.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let recipe = blocking(&state.store, move |store| store.get(&id))
        .await
        .map_err(ApiError::server)?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(recipe))
}
