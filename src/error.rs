use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::gizi::render::error_block;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Formulir tidak valid: {0}")]
    BadForm(String),
    #[error("Permintaan sebelumnya masih diproses.")]
    Busy,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::BadForm(_) => StatusCode::BAD_REQUEST,
            AppError::Busy => StatusCode::TOO_MANY_REQUESTS,
        };
        (status, Html(error_block(&self.to_string()))).into_response()
    }
}
