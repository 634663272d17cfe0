//! Error type for `sock-store-sqlite`.

use sock_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] sock_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("cannot create data directory: {0}")]
  Io(#[from] std::io::Error),
}

impl StoreError for Error {
  fn is_not_found(&self) -> bool {
    matches!(self, Error::Core(sock_core::Error::NotFound(_)))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
