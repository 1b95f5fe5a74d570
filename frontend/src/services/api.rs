//! Thin async wrappers over the `/api/recipes` endpoints.
//!
//! Every call resolves to `Result<_, ClientError>`; callers decide which toast
//! to raise. Non-2xx responses carry the server's message when one can be
//! read from the body (`msg`, then `error`/`details`, then the raw text).

use common::form::RecipeDraft;
use common::model::recipe::Recipe;
use common::requests;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::{File, FormData};

const RECIPES_URL: &str = "/api/recipes";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not build request body: {0}")]
    Encoding(String),
}

fn recipe_url(id: &str) -> String {
    format!("{RECIPES_URL}/{id}")
}

pub async fn list_recipes() -> Result<Vec<Recipe>, ClientError> {
    let response = Request::get(RECIPES_URL).send().await?;
    read_json(response).await
}

pub async fn get_recipe(id: &str) -> Result<Recipe, ClientError> {
    let response = Request::get(&recipe_url(id)).send().await?;
    read_json(response).await
}

pub async fn create_recipe(form: FormData) -> Result<Recipe, ClientError> {
    let response = Request::post(RECIPES_URL).body(form)?.send().await?;
    read_json(response).await
}

pub async fn update_recipe(id: &str, form: FormData) -> Result<Recipe, ClientError> {
    let response = Request::put(&recipe_url(id)).body(form)?.send().await?;
    read_json(response).await
}

pub async fn delete_recipe(id: &str) -> Result<(), ClientError> {
    let response = Request::delete(&recipe_url(id)).send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}

/// Builds the multipart body for create and update. The browser picks the
/// boundary, so no content type is set by hand.
pub fn recipe_form_data(draft: &RecipeDraft, image: Option<&File>) -> Result<FormData, ClientError> {
    let encoding = |err: wasm_bindgen::JsValue| ClientError::Encoding(format!("{err:?}"));

    let form = FormData::new().map_err(encoding)?;
    for (name, value) in draft.form_fields() {
        form.append_with_str(name, &value).map_err(encoding)?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename(requests::IMAGE, file, &file.name())
            .map_err(encoding)?;
    }
    Ok(form)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

async fn status_error(response: Response) -> ClientError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ClientError::Status {
        status,
        message: error_message(&body),
    }
}

fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };
    let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

    if let Some(msg) = text("msg") {
        return msg;
    }
    match (text("error"), text("details")) {
        (Some(error), Some(details)) => format!("{error}: {details}"),
        (Some(error), None) => error,
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_prefers_msg_field() {
        assert_eq!(error_message(r#"{"msg":"Recipe not found"}"#), "Recipe not found");
    }

    #[test]
    fn write_errors_join_error_and_details() {
        let body = r#"{"error":"Server error while creating recipe","details":"title is required"}"#;
        assert_eq!(
            error_message(body),
            "Server error while creating recipe: title is required"
        );
    }

    #[test]
    fn plain_text_bodies_pass_through() {
        assert_eq!(error_message("Server Error\n"), "Server Error");
    }
}
