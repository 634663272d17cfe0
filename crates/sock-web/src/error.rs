//! Error types and axum `IntoResponse` implementation.
//!
//! Store failures never reach this type; handlers turn them into inline
//! messages. What is left is the renderer failing, which is a server bug.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("render error: {0}")]
  Render(#[from] std::io::Error),
  #[error("rendered html is not utf-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    tracing::error!(error = %self, "failed to render response");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
  }
}
