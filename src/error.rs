//! Error types and their HTTP rendering.

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::avatar::AvatarError;

/// Failures talking to the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (connect, TLS, body read).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("{status}: {message}")]
    Upstream { status: u16, message: String },

    /// The store answered successfully but the payload was unusable.
    #[error("{0}")]
    Malformed(String),
}

/// Every way a request can fail, mapped onto the response taxonomy.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    MethodNotAllowed(&'static str),

    #[error("Error de configuración del servidor. Faltan variables de entorno.")]
    Misconfigured,

    #[error("Error interno del servidor: {0}")]
    Internal(String),

    /// The request body could not be buffered (too large, aborted).
    #[error("{}", .0.body_text())]
    Body(#[from] BytesRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Misconfigured | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Body(rejection) => rejection.status(),
        }
    }
}

impl From<AvatarError> for ApiError {
    fn from(err: AvatarError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Failure envelope shared by both endpoints.
#[derive(Debug, Serialize)]
struct Failure {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Failure {
            success: false,
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
