use super::blocking;
use super::payload::{read_multipart, release_image_on_error, RecipeSubmission};
use crate::error::{ApiError, WriteAction};
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::model::recipe::Recipe;
use serde_json::Value;

/// `PUT /api/recipes/{id}` with a multipart body.
///
/// Every editable field is replaced by what was submitted, so omitted optional
/// fields are cleared. The image is only replaced when a new file part is sent.
/// Unknown and malformed ids are answered before the body is read, so nothing
/// is uploaded for them.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    ensure_exists(&state, &id).await?;

    let submission = read_multipart(payload, &state.uploads.dir)
        .await
        .map_err(|e| ApiError::write(WriteAction::Update, e))?;
    let recipe = update_recipe(&state, id, submission).await?;
    Ok(HttpResponse::Ok().json(recipe))
}

/// `PUT /api/recipes/{id}` with a JSON body. The image is left untouched.
pub async fn process_json(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let submission = RecipeSubmission::from_json(body.into_inner())
        .map_err(|e| ApiError::write(WriteAction::Update, e))?;
    let recipe = update_recipe(&state, id.into_inner(), submission).await?;
    Ok(HttpResponse::Ok().json(recipe))
}

async fn update_recipe(
    state: &AppState,
    id: String,
    mut submission: RecipeSubmission,
) -> Result<Recipe, ApiError> {
    let image = submission.take_image();
    let image_path = image.as_ref().map(|image| image.public_path.clone());

    let updated = replace(state, id, submission, image_path).await;
    release_image_on_error(updated, image).await
}

async fn replace(
    state: &AppState,
    id: String,
    submission: RecipeSubmission,
    image: Option<String>,
) -> Result<Recipe, ApiError> {
    // A missing document is a 404 even when the submission is also invalid.
    ensure_exists(state, &id).await?;
    let fields = submission
        .into_fields()
        .map_err(|e| ApiError::write(WriteAction::Update, e))?;

    blocking(&state.store, move |store| store.update(&id, fields, image))
        .await
        .map_err(|e| ApiError::write(WriteAction::Update, e))?
        .ok_or(ApiError::NotFound)
}

async fn ensure_exists(state: &AppState, id: &str) -> Result<(), ApiError> {
    let id = id.to_string();
    let found = blocking(&state.store, move |store| store.exists(&id))
        .await
        .map_err(|e| ApiError::write(WriteAction::Update, e))?;

    if found {
        Ok(())
    } else {
        Err(ApiError::NotFound)
    }
}
