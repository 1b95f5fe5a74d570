//! Decoding of create/update submissions.
//!
//! Both write endpoints accept the same shape, either as `multipart/form-data`
//! (the browser form, optionally carrying an `image` file part) or as an
//! `application/json` object. Whatever arrives is first collected into a
//! `RecipeSubmission` of raw strings and `StructuredField`s, and only then
//! validated into `RecipeFields` by `into_fields`.
//!
//! Structured fields (`ingredients`, `instructions`, `tags`) may be JSON text
//! or an already parsed JSON value; a JSON string holding JSON is unwrapped
//! once more. Absent structured fields become empty lists.

use crate::services::uploads;
use crate::store::RecipeFields;
use actix_multipart::{Field, Multipart};
use chrono::Utc;
use common::requests;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("could not read multipart body: {0}")]
    Multipart(String),
    #[error("field `{0}` is not valid UTF-8")]
    NotUtf8(String),
    #[error("field `{field}` is not valid JSON: {source}")]
    Json {
        field: &'static str,
        source: serde_json::Error,
    },
    #[error("`{0}` is required")]
    MissingField(&'static str),
    #[error("`{field}` is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("could not store uploaded image: {0}")]
    Io(#[from] std::io::Error),
}

/// A structured field as received, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredField {
    /// JSON text, as sent in a multipart text part.
    Encoded(String),
    /// A value that arrived already parsed inside a JSON body.
    Parsed(Value),
}

impl StructuredField {
    pub fn decode<T: DeserializeOwned>(self, field: &'static str) -> Result<T, PayloadError> {
        let json_err = |source| PayloadError::Json { field, source };

        let value = match self {
            StructuredField::Encoded(text) => serde_json::from_str(&text).map_err(json_err)?,
            StructuredField::Parsed(value) => value,
        };
        let value = match value {
            Value::String(inner) => serde_json::from_str(&inner).map_err(json_err)?,
            other => other,
        };
        serde_json::from_value(value).map_err(json_err)
    }
}

/// An image part written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    /// Location on disk, inside the upload directory.
    pub path: PathBuf,
    pub public_path: String,
}

impl SavedImage {
    /// Removes the file from the upload directory. A file that is already
    /// gone is not an error.
    pub async fn discard(self) {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => log::info!("Discarded unused upload {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not remove upload {}: {}", self.path.display(), e),
        }
    }
}

/// Passes `result` through, discarding `image` when the write it was
/// uploaded for failed.
pub async fn release_image_on_error<T, E>(
    result: Result<T, E>,
    image: Option<SavedImage>,
) -> Result<T, E> {
    if result.is_err() {
        if let Some(image) = image {
            image.discard().await;
        }
    }
    result
}

#[derive(Debug, Default)]
pub struct RecipeSubmission {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
    servings: Option<String>,
    cooking_time: Option<String>,
    ingredients: Option<StructuredField>,
    instructions: Option<StructuredField>,
    tags: Option<StructuredField>,
    image: Option<SavedImage>,
}

impl RecipeSubmission {
    /// Records a text part. Unknown names are ignored.
    pub fn set_text(&mut self, name: &str, value: String) {
        match name {
            requests::TITLE => self.title = Some(value),
            requests::DESCRIPTION => self.description = Some(value),
            requests::CATEGORY => self.category = Some(value),
            requests::DIFFICULTY => self.difficulty = Some(value),
            requests::SERVINGS => self.servings = Some(value),
            requests::COOKING_TIME => self.cooking_time = Some(value),
            requests::INGREDIENTS => self.ingredients = Some(StructuredField::Encoded(value)),
            requests::INSTRUCTIONS => self.instructions = Some(StructuredField::Encoded(value)),
            requests::TAGS => self.tags = Some(StructuredField::Encoded(value)),
            _ => {}
        }
    }

    pub fn from_json(body: Value) -> Result<Self, PayloadError> {
        let Value::Object(map) = body else {
            return Err(PayloadError::NotAnObject);
        };

        let mut submission = Self::default();
        for (name, value) in map {
            match name.as_str() {
                requests::INGREDIENTS => submission.ingredients = Some(StructuredField::Parsed(value)),
                requests::INSTRUCTIONS => {
                    submission.instructions = Some(StructuredField::Parsed(value))
                }
                requests::TAGS => submission.tags = Some(StructuredField::Parsed(value)),
                _ => match value {
                    Value::String(text) => submission.set_text(&name, text),
                    Value::Number(number) => submission.set_text(&name, number.to_string()),
                    _ => {}
                },
            }
        }
        Ok(submission)
    }

    /// Detaches the uploaded image so the caller decides whether it is kept.
    pub fn take_image(&mut self) -> Option<SavedImage> {
        self.image.take()
    }

    pub fn into_fields(self) -> Result<RecipeFields, PayloadError> {
        let title = self
            .title
            .filter(|title| !title.trim().is_empty())
            .ok_or(PayloadError::MissingField(requests::TITLE))?;
        let difficulty = self
            .difficulty
            .ok_or(PayloadError::MissingField(requests::DIFFICULTY))?
            .parse()
            .map_err(|e: common::model::recipe::UnknownDifficulty| PayloadError::InvalidField {
                field: requests::DIFFICULTY,
                reason: e.to_string(),
            })?;

        Ok(RecipeFields {
            title,
            description: non_empty(self.description),
            category: non_empty(self.category),
            difficulty,
            servings: positive(requests::SERVINGS, self.servings)?,
            cooking_time: positive(requests::COOKING_TIME, self.cooking_time)?,
            ingredients: decode_or_empty(self.ingredients, requests::INGREDIENTS)?,
            instructions: decode_or_empty(self.instructions, requests::INSTRUCTIONS)?,
            tags: decode_or_empty(self.tags, requests::TAGS)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn positive(field: &'static str, value: Option<String>) -> Result<u32, PayloadError> {
    let raw = value.ok_or(PayloadError::MissingField(field))?;
    let number: u32 = raw.trim().parse().map_err(|_| PayloadError::InvalidField {
        field,
        reason: format!("`{raw}` is not a positive integer"),
    })?;
    if number == 0 {
        return Err(PayloadError::InvalidField {
            field,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(number)
}

fn decode_or_empty<T: DeserializeOwned>(
    value: Option<StructuredField>,
    field: &'static str,
) -> Result<Vec<T>, PayloadError> {
    match value {
        Some(value) => value.decode(field),
        None => Ok(Vec::new()),
    }
}

/// Reads a multipart body, writing the `image` part (if any) into `upload_dir`.
/// A body that fails midway leaves nothing behind in `upload_dir`.
pub async fn read_multipart(
    payload: Multipart,
    upload_dir: &Path,
) -> Result<RecipeSubmission, PayloadError> {
    let mut submission = RecipeSubmission::default();

    match read_parts(payload, upload_dir, &mut submission).await {
        Ok(()) => Ok(submission),
        Err(e) => {
            if let Some(image) = submission.take_image() {
                image.discard().await;
            }
            Err(e)
        }
    }
}

async fn read_parts(
    mut payload: Multipart,
    upload_dir: &Path,
    submission: &mut RecipeSubmission,
) -> Result<(), PayloadError> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| PayloadError::Multipart(e.to_string()))?;
        let (name, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(str::to_string),
                cd.get_filename().map(str::to_string),
            ),
            None => (None, None),
        };

        match (name.as_deref(), filename) {
            (Some(requests::IMAGE), Some(filename)) if !filename.is_empty() => {
                let saved = save_image(&mut field, upload_dir, &filename).await?;
                // Only the last image part is kept.
                if let Some(previous) = submission.image.replace(saved) {
                    previous.discard().await;
                }
            }
            (Some(name), _) => {
                let bytes = read_bytes(&mut field).await?;
                let text =
                    String::from_utf8(bytes).map_err(|_| PayloadError::NotUtf8(name.to_string()))?;
                submission.set_text(name, text);
            }
            (None, _) => {
                read_bytes(&mut field).await?;
            }
        }
    }

    Ok(())
}

async fn read_bytes(field: &mut Field) -> Result<Vec<u8>, PayloadError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| PayloadError::Multipart(e.to_string()))?;
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

/// Streams an uploaded file to `<upload_dir>/<unix-millis><ext>`.
/// Two uploads in the same millisecond with the same extension share a name.
async fn save_image(
    field: &mut Field,
    upload_dir: &Path,
    original_name: &str,
) -> Result<SavedImage, PayloadError> {
    let filename = format!(
        "{}{}",
        Utc::now().timestamp_millis(),
        extension_of(original_name)
    );
    let saved = SavedImage {
        path: upload_dir.join(&filename),
        public_path: uploads::public_path(&filename),
    };

    let written = write_field(field, &saved.path).await;
    release_image_on_error(written, Some(saved.clone())).await?;
    Ok(saved)
}

async fn write_field(field: &mut Field, path: &Path) -> Result<(), PayloadError> {
    let mut file = tokio::fs::File::create(path).await?;
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| PayloadError::Multipart(e.to_string()))?;
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    Ok(())
}

/// `"dish.final.PNG"` -> `".PNG"`, `"noext"` -> `""`.
fn extension_of(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}
