use core::fmt;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::validation::FieldError;
use crate::web::pages;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Corrupt(String),
    NotFound(String),
    Validation(Vec<FieldError>),
    Config(String),
    Pattern(regex::Error),
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Pattern(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing the contact file: {}", e)
            }
            AppError::Corrupt(msg) => {
                write!(f, "Contact file is corrupt: {}", msg)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Validation(errors) => {
                let messages: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation failed: {}", messages.join(", "))
            }
            AppError::Config(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            AppError::Pattern(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(item) => {
                tracing::debug!("{} not found", item);
                pages::not_found().into_response()
            }
            AppError::Validation(errors) => {
                let body = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join("\n");
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            err => {
                tracing::error!("request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(pages::server_error()),
                )
                    .into_response()
            }
        }
    }
}
