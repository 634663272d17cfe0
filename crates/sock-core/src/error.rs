//! Error types for `sock-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("sock not found: {0}")]
  NotFound(i64),

  #[error("invalid date stamp: {0:?}")]
  InvalidDate(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
