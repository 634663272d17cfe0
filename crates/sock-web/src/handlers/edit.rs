//! `GET /edit/{id}` and `POST /edit/{id}` — show and submit the edit form.

use axum::{
  Form,
  extract::{Path, State},
  http::HeaderMap,
  response::Response,
};
use sock_core::{
  sock::today,
  store::{SockStore, StoreError as _},
  validate::SockInput,
};

use crate::{
  AppState,
  error::Result,
  handlers::{current_list, reply},
  html::Fragment,
  render::{self, Tone},
};

const NOT_FOUND: &str = "Sock not found.";
const FETCH_FAILED: &str = "Error fetching sock. Please try again.";
const UPDATE_FAILED: &str = "Error updating sock. Please try again.";

/// `GET /edit/{id}` — the form prefilled with the stored values.
pub async fn form<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  headers: HeaderMap,
) -> Result<Response>
where
  S: SockStore + Clone + Send + Sync + 'static,
{
  let body = match state.store.get(id).await {
    Ok(Some(sock)) => render::sock_form(Some(&sock))?,
    Ok(None) => render::message(Tone::Plain, NOT_FOUND)?,
    Err(e) => {
      tracing::error!(id, error = %e, "error fetching sock for edit");
      render::message(Tone::Plain, FETCH_FAILED)?
    }
  };
  reply(&headers, body)
}

/// `POST /edit/{id}` — validate, then overwrite the row and restamp it.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  headers: HeaderMap,
  Form(input): Form<SockInput>,
) -> Result<Response>
where
  S: SockStore + Clone + Send + Sync + 'static,
{
  tracing::info!(id, ?input, "received sock edit");

  let fields = match input.into_fields() {
    Ok(fields) => fields,
    Err(invalid) => {
      let body = prefilled_with_error(&state, id, &invalid.to_string()).await?;
      return reply(&headers, body);
    }
  };

  match state.store.update(id, fields, today()).await {
    Ok(sock) => {
      tracing::info!(id = sock.id, "sock updated");
      let list = current_list(&state).await?;
      let body =
        render::with_message(Tone::Success, "Sock updated successfully!", &list)?;
      reply(&headers, body)
    }
    Err(e) if e.is_not_found() => {
      tracing::warn!(id, "edit of missing sock");
      reply(&headers, render::message(Tone::Plain, NOT_FOUND)?)
    }
    Err(e) => {
      tracing::error!(id, error = %e, "error updating sock");
      let body = prefilled_with_error(&state, id, UPDATE_FAILED).await?;
      reply(&headers, body)
    }
  }
}

/// `error` above the form for the stored sock. Falls back to a bare message
/// when the sock is gone or cannot be read.
async fn prefilled_with_error<S>(
  state: &AppState<S>,
  id: i64,
  error: &str,
) -> Result<Fragment>
where
  S: SockStore + Clone + Send + Sync + 'static,
{
  match state.store.get(id).await {
    Ok(Some(sock)) => {
      render::with_message(Tone::Error, error, &render::sock_form(Some(&sock))?)
    }
    Ok(None) => render::message(Tone::Plain, NOT_FOUND),
    Err(e) => {
      tracing::error!(id, error = %e, "error fetching sock for edit");
      render::message(Tone::Error, error)
    }
  }
}
