use super::blocking;
use super::payload::{read_multipart, release_image_on_error, RecipeSubmission};
use crate::error::{ApiError, WriteAction};
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::model::recipe::Recipe;
use serde_json::Value;

/// `POST /api/recipes` with a multipart body.
pub async fn process(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let submission = read_multipart(payload, &state.uploads.dir)
        .await
        .map_err(|e| ApiError::write(WriteAction::Create, e))?;
    let recipe = create_recipe(&state, submission).await?;
    Ok(HttpResponse::Created().json(recipe))
}

/// `POST /api/recipes` with a JSON body. Always gets the placeholder image.
pub async fn process_json(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let submission = RecipeSubmission::from_json(body.into_inner())
        .map_err(|e| ApiError::write(WriteAction::Create, e))?;
    let recipe = create_recipe(&state, submission).await?;
    Ok(HttpResponse::Created().json(recipe))
}

async fn create_recipe(
    state: &AppState,
    mut submission: RecipeSubmission,
) -> Result<Recipe, ApiError> {
    let image = submission.take_image();
    let image_path = image
        .as_ref()
        .map_or_else(|| state.uploads.placeholder_image.clone(), |image| image.public_path.clone());

    let created = insert(state, submission, image_path).await;
    release_image_on_error(created, image).await
}

async fn insert(
    state: &AppState,
    submission: RecipeSubmission,
    image: String,
) -> Result<Recipe, ApiError> {
    let fields = submission
        .into_fields()
        .map_err(|e| ApiError::write(WriteAction::Create, e))?;

    blocking(&state.store, move |store| store.insert(fields, image))
        .await
        .map_err(|e| ApiError::write(WriteAction::Create, e))
}
