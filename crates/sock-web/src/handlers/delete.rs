//! `POST /delete/{id}` — hard-delete a sock and return the refreshed list.

use axum::{
  extract::{Path, State},
  http::HeaderMap,
  response::Response,
};
use sock_core::store::{SockStore, StoreError as _};

use crate::{
  AppState,
  error::Result,
  handlers::{current_list, reply},
  render::{self, Tone},
};

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  headers: HeaderMap,
) -> Result<Response>
where
  S: SockStore + Clone + Send + Sync + 'static,
{
  match state.store.delete(id).await {
    Ok(()) => {
      tracing::info!(id, "sock deleted");
      reply(&headers, current_list(&state).await?)
    }
    Err(e) if e.is_not_found() => {
      tracing::warn!(id, "delete of missing sock");
      let list = current_list(&state).await?;
      reply(&headers, render::with_message(Tone::Plain, "Sock not found.", &list)?)
    }
    Err(e) => {
      tracing::error!(id, error = %e, "error deleting sock");
      reply(
        &headers,
        render::message(Tone::Error, "Error deleting sock. Please try again.")?,
      )
    }
  }
}
