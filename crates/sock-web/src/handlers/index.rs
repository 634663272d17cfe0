//! `GET /` — the home page.

use axum::{
  extract::State,
  response::{IntoResponse, Response},
};
use sock_core::store::SockStore;

use crate::{
  AppState,
  error::Result,
  handlers::current_list,
  render::{self, PAGE_TITLE},
};

pub async fn handler<S>(State(state): State<AppState<S>>) -> Result<Response>
where
  S: SockStore + Clone + Send + Sync + 'static,
{
  let form = render::sock_form(None)?;
  let list = current_list(&state).await?;
  let body = render::home(&form, &list)?;
  Ok(render::page(PAGE_TITLE, &body)?.into_response())
}
