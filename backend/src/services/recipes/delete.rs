use super::blocking;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::MessageResponse;

/// `DELETE /api/recipes/{id}`. The document is removed for good; its image
/// file stays in the upload directory.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let removed = blocking(&state.store, move |store| store.delete(&id))
        .await
        .map_err(ApiError::server)?;

    if !removed {
        return Err(ApiError::NotFound);
    }
    Ok(HttpResponse::Ok().json(MessageResponse {
        msg: "Recipe removed".to_string(),
    }))
}
