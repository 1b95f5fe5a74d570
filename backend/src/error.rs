use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::{MessageResponse, WriteErrorResponse};
use std::fmt::Display;

/// Errors surfaced by the recipe endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Recipe not found")]
    NotFound,

    /// Read or delete failure. The cause is logged, never sent.
    #[error("Server Error")]
    Server(String),

    /// Create or update failure, including payload validation.
    #[error("{}", .action.message())]
    Write { action: WriteAction, details: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Create,
    Update,
}

impl WriteAction {
    pub fn message(&self) -> &'static str {
        match self {
            WriteAction::Create => "Server error while creating recipe",
            WriteAction::Update => "Server error while updating recipe",
        }
    }
}

impl ApiError {
    pub fn server(cause: impl Display) -> Self {
        log::error!("Storage failure: {cause}");
        ApiError::Server(cause.to_string())
    }

    pub fn write(action: WriteAction, cause: impl Display) -> Self {
        log::error!("{}: {cause}", action.message());
        ApiError::Write {
            action,
            details: cause.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Server(_) | ApiError::Write { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound => HttpResponse::NotFound().json(MessageResponse {
                msg: self.to_string(),
            }),
            ApiError::Server(_) => HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(self.to_string()),
            ApiError::Write { details, .. } => {
                HttpResponse::InternalServerError().json(WriteErrorResponse {
                    error: self.to_string(),
                    details: details.clone(),
                })
            }
        }
    }
}
