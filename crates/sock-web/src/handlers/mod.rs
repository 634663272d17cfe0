pub mod add;
pub mod care_tips;
pub mod delete;
pub mod edit;
pub mod index;

use axum::{
  http::HeaderMap,
  response::{IntoResponse, Response},
};
use sock_core::store::{SockQuery, SockStore};

use crate::{
  AppState,
  error::Result,
  html::Fragment,
  render::{self, PAGE_TITLE, Tone},
};

/// Request header htmx sets on every request it issues.
pub(super) const HX_REQUEST: &str = "hx-request";

/// Send `body` bare to htmx, wrapped in a full page to everyone else.
pub(super) fn reply(headers: &HeaderMap, body: Fragment) -> Result<Response> {
  if headers.contains_key(HX_REQUEST) {
    Ok(body.into_response())
  } else {
    Ok(render::page(PAGE_TITLE, &body)?.into_response())
  }
}

/// The current list, or an inline error if the store cannot be read.
pub(super) async fn current_list<S>(state: &AppState<S>) -> Result<Fragment>
where
  S: SockStore + Clone + Send + Sync + 'static,
{
  match state.store.query(&SockQuery::default()).await {
    Ok(socks) => render::sock_list(&socks),
    Err(e) => {
      tracing::error!(error = %e, "error fetching sock list");
      render::message(Tone::Error, "Error fetching sock list. Please try again.")
    }
  }
}
