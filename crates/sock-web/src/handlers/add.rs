//! `POST /add_sock` — validate and insert a new sock.

use axum::{
  Form,
  extract::State,
  http::HeaderMap,
  response::Response,
};
use sock_core::{sock::today, store::SockStore, validate::SockInput};

use crate::{
  AppState,
  error::Result,
  handlers::{current_list, reply},
  render::{self, Tone},
};

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Form(input): Form<SockInput>,
) -> Result<Response>
where
  S: SockStore + Clone + Send + Sync + 'static,
{
  tracing::info!(?input, "received new sock");

  let fields = match input.into_fields() {
    Ok(fields) => fields,
    Err(invalid) => {
      let form = render::sock_form(None)?;
      let body = render::with_message(Tone::Error, &invalid.to_string(), &form)?;
      return reply(&headers, body);
    }
  };

  match state.store.insert(fields, today()).await {
    Ok(sock) => {
      tracing::info!(id = sock.id, "sock added");
      let list = current_list(&state).await?;
      let body =
        render::with_message(Tone::Success, "Sock added successfully!", &list)?;
      reply(&headers, body)
    }
    Err(e) => {
      tracing::error!(error = %e, "error adding sock");
      let form = render::sock_form(None)?;
      let body = render::with_message(
        Tone::Error,
        "Error adding sock. Please try again.",
        &form,
      )?;
      reply(&headers, body)
    }
  }
}
