//! HTML front end for the sock drawer.
//!
//! Exposes an axum [`Router`] backed by any [`SockStore`]. Pages are rendered
//! on the server; write routes answer with fragments that htmx can swap in
//! place, or with a full page for plain form posts.

pub mod error;
pub mod handlers;
pub mod html;
pub mod render;
pub mod settings;

pub use error::Error;
pub use settings::ServerConfig;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use sock_core::store::SockStore;
use tower_http::trace::TraceLayer;

use handlers::{add, care_tips, delete, edit, index};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: SockStore> {
  pub store: Arc<S>,
}

impl<S: SockStore> AppState<S> {
  pub fn new(store: S) -> Self {
    Self {
      store: Arc::new(store),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the sock drawer.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: SockStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/",             get(index::handler::<S>))
    .route("/add_sock",     post(add::handler::<S>))
    .route("/edit/{id}",    get(edit::form::<S>).post(edit::submit::<S>))
    .route("/delete/{id}",  post(delete::handler::<S>))
    .route("/care_tips",    get(care_tips::handler))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use chrono::NaiveDate;
  use sock_core::{
    sock::{Sock, SockFields, today},
    store::{SockQuery, StoreError},
  };
  use sock_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn make_state() -> AppState<SqliteStore> {
    AppState::new(SqliteStore::open_in_memory().await.unwrap())
  }

  async fn send<S>(
    state:  AppState<S>,
    method: &str,
    uri:    &str,
    form:   Option<&str>,
    htmx:   bool,
  ) -> (StatusCode, String)
  where
    S: SockStore + Clone + Send + Sync + 'static,
  {
    let mut builder = Request::builder().method(method).uri(uri);
    if form.is_some() {
      builder = builder
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    }
    if htmx {
      builder = builder.header("HX-Request", "true");
    }
    let req = builder
      .body(Body::from(form.unwrap_or_default().to_string()))
      .unwrap();
    let resp = router(state).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
  }

  async fn post_form<S>(
    state: AppState<S>,
    uri:   &str,
    form:  &str,
  ) -> (StatusCode, String)
  where
    S: SockStore + Clone + Send + Sync + 'static,
  {
    send(state, "POST", uri, Some(form), true).await
  }

  async fn all_socks(state: &AppState<SqliteStore>) -> Vec<Sock> {
    state.store.query(&SockQuery::default()).await.unwrap()
  }

  const CREW_NAVY: &str =
    "style=Crew&hue=Navy&size=M&mood=Cozy&superhero_rating=7";

  fn crew_navy() -> SockFields {
    SockFields {
      style:            "Crew".into(),
      hue:              "Navy".into(),
      size:             "M".into(),
      mood:             "Cozy".into(),
      superhero_rating: 7,
    }
  }

  // ── Home / static pages ─────────────────────────────────────────────────────

  #[tokio::test]
  async fn home_page_shows_form_and_empty_drawer() {
    let (status, body) = send(make_state().await, "GET", "/", None, false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Sock Tracker</title>"), "{body}");
    assert!(body.contains(r#"id="sock-form""#));
    assert!(body.contains(r#"action="/add_sock""#));
    assert!(body.contains(r#"id="sock-list""#));
    assert!(body.contains("Your sock drawer is empty."));
  }

  #[tokio::test]
  async fn care_tips_page_is_static() {
    let (status, body) =
      send(make_state().await, "GET", "/care_tips", None, false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sock Care Tips"));
    assert!(body.contains("Back to Sock Tracker"));
  }

  // ── Add ─────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn add_valid_sock_persists_and_lists_it() {
    let state = make_state().await;
    let (status, body) = post_form(state.clone(), "/add_sock", CREW_NAVY).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sock added successfully!"), "{body}");

    let socks = all_socks(&state).await;
    assert_eq!(socks.len(), 1);
    assert_eq!(socks[0].fields, crew_navy());
    assert_eq!(socks[0].last_adventure, today());

    for needle in ["Crew", "Navy", "M", "Cozy", "7"] {
      assert!(body.contains(needle), "missing {needle}: {body}");
    }
    assert_eq!(body.matches("<li>").count(), 1);
  }

  #[tokio::test]
  async fn add_with_empty_mood_is_rejected() {
    let state = make_state().await;
    let (status, body) = post_form(
      state.clone(),
      "/add_sock",
      "style=Crew&hue=Navy&size=M&mood=&superhero_rating=7",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("All fields are required."), "{body}");
    assert!(body.contains(r#"action="/add_sock""#));
    assert!(all_socks(&state).await.is_empty());
  }

  #[tokio::test]
  async fn add_with_missing_rating_is_rejected() {
    let state = make_state().await;
    let (_, body) = post_form(
      state.clone(),
      "/add_sock",
      "style=Crew&hue=Navy&size=M&mood=Cozy",
    )
    .await;
    assert!(body.contains("All fields are required."), "{body}");
    assert!(all_socks(&state).await.is_empty());
  }

  #[tokio::test]
  async fn add_with_blank_rating_is_rejected() {
    let state = make_state().await;
    let (status, body) = post_form(
      state.clone(),
      "/add_sock",
      "style=Crew&hue=Navy&size=M&mood=Cozy&superhero_rating=",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("All fields are required."), "{body}");
    assert!(all_socks(&state).await.is_empty());
  }

  #[tokio::test]
  async fn add_with_unknown_hue_is_rejected() {
    let state = make_state().await;
    let (_, body) = post_form(
      state.clone(),
      "/add_sock",
      "style=Crew&hue=Chartreuse&size=M&mood=Cozy&superhero_rating=7",
    )
    .await;
    assert!(body.contains("Invalid sock hue selected."), "{body}");
    assert!(all_socks(&state).await.is_empty());
  }

  #[tokio::test]
  async fn add_with_out_of_range_rating_is_rejected() {
    let state = make_state().await;
    let (_, body) = post_form(
      state.clone(),
      "/add_sock",
      "style=Crew&hue=Navy&size=M&mood=Cozy&superhero_rating=11",
    )
    .await;
    assert!(body.contains("Invalid superhero rating selected."), "{body}");
    assert!(all_socks(&state).await.is_empty());
  }

  #[tokio::test]
  async fn add_with_non_numeric_rating_is_a_client_error() {
    let state = make_state().await;
    let (status, _) = post_form(
      state.clone(),
      "/add_sock",
      "style=Crew&hue=Navy&size=M&mood=Cozy&superhero_rating=lots",
    )
    .await;
    assert!(status.is_client_error(), "status: {status}");
    assert!(all_socks(&state).await.is_empty());
  }

  #[tokio::test]
  async fn htmx_gets_fragment_and_plain_post_gets_page() {
    let state = make_state().await;
    let (_, fragment) =
      send(state.clone(), "POST", "/add_sock", Some(CREW_NAVY), true).await;
    assert!(!fragment.contains("<!DOCTYPE html>"), "{fragment}");

    let (_, page) =
      send(state, "POST", "/add_sock", Some(CREW_NAVY), false).await;
    assert!(page.starts_with("<!DOCTYPE html>"), "{page}");
    assert!(page.contains("Sock added successfully!"));
  }

  // ── Edit ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn edit_form_is_prefilled() {
    let state = make_state().await;
    let sock = state.store.insert(crew_navy(), today()).await.unwrap();

    let (status, body) = send(
      state,
      "GET",
      &format!("/edit/{}", sock.id),
      None,
      true,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(&format!(r#"action="/edit/{}""#, sock.id)), "{body}");
    assert!(body.contains(r#"<option value="Navy" selected="">"#), "{body}");
  }

  #[tokio::test]
  async fn edit_form_for_missing_sock() {
    let (_, body) = send(make_state().await, "GET", "/edit/99", None, true).await;
    assert!(body.contains("Sock not found."), "{body}");
  }

  #[tokio::test]
  async fn edit_rating_updates_row_and_restamps() {
    let state = make_state().await;
    let old_day = today().pred_opt().unwrap();
    let sock = state.store.insert(crew_navy(), old_day).await.unwrap();

    let (_, body) = post_form(
      state.clone(),
      &format!("/edit/{}", sock.id),
      "style=Crew&hue=Navy&size=M&mood=Cozy&superhero_rating=10",
    )
    .await;
    assert!(body.contains("Sock updated successfully!"), "{body}");

    let stored = state.store.get(sock.id).await.unwrap().unwrap();
    assert_eq!(stored.fields.superhero_rating, 10);
    assert_eq!(stored.fields.style, "Crew");
    assert_eq!(stored.last_adventure, today());
  }

  #[tokio::test]
  async fn edit_with_invalid_input_keeps_row_and_shows_form() {
    let state = make_state().await;
    let sock = state.store.insert(crew_navy(), today()).await.unwrap();

    let (_, body) = post_form(
      state.clone(),
      &format!("/edit/{}", sock.id),
      "style=Sandal&hue=Navy&size=M&mood=Cozy&superhero_rating=10",
    )
    .await;
    assert!(body.contains("Invalid sock style selected."), "{body}");
    assert!(body.contains(&format!(r#"action="/edit/{}""#, sock.id)));

    let stored = state.store.get(sock.id).await.unwrap().unwrap();
    assert_eq!(stored.fields, crew_navy());
  }

  #[tokio::test]
  async fn edit_missing_sock_reports_not_found() {
    let state = make_state().await;
    let (_, body) = post_form(state.clone(), "/edit/41", CREW_NAVY).await;
    assert!(body.contains("Sock not found."), "{body}");
    assert!(all_socks(&state).await.is_empty());
  }

  // ── Delete ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_removes_sock_and_returns_list() {
    let state = make_state().await;
    let sock = state.store.insert(crew_navy(), today()).await.unwrap();

    let (status, body) =
      post_form(state.clone(), &format!("/delete/{}", sock.id), "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Your sock drawer is empty."), "{body}");
    assert!(state.store.get(sock.id).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn deleting_twice_is_handled() {
    let state = make_state().await;
    let sock = state.store.insert(crew_navy(), today()).await.unwrap();
    let uri = format!("/delete/{}", sock.id);

    post_form(state.clone(), &uri, "").await;
    let (status, body) = post_form(state, &uri, "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sock not found."), "{body}");
  }

  // ── Storage failures ────────────────────────────────────────────────────────

  /// A store whose every operation fails with a non-not-found error.
  #[derive(Clone)]
  struct BrokenStore;

  #[derive(Debug, thiserror::Error)]
  #[error("database is locked")]
  struct Locked;

  impl StoreError for Locked {
    fn is_not_found(&self) -> bool { false }
  }

  impl SockStore for BrokenStore {
    type Error = Locked;

    async fn insert(&self, _: SockFields, _: NaiveDate) -> Result<Sock, Locked> {
      Err(Locked)
    }

    async fn get(&self, _: i64) -> Result<Option<Sock>, Locked> { Err(Locked) }

    async fn query(&self, _: &SockQuery) -> Result<Vec<Sock>, Locked> {
      Err(Locked)
    }

    async fn update(
      &self,
      _: i64,
      _: SockFields,
      _: NaiveDate,
    ) -> Result<Sock, Locked> {
      Err(Locked)
    }

    async fn delete(&self, _: i64) -> Result<(), Locked> { Err(Locked) }
  }

  fn broken() -> AppState<BrokenStore> { AppState::new(BrokenStore) }

  #[tokio::test]
  async fn home_page_survives_unreadable_list() {
    let (status, body) = send(broken(), "GET", "/", None, false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error fetching sock list. Please try again."), "{body}");
    assert!(body.contains(r#"action="/add_sock""#));
  }

  #[tokio::test]
  async fn add_failure_shows_generic_error_and_form() {
    let (status, body) = post_form(broken(), "/add_sock", CREW_NAVY).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error adding sock. Please try again."), "{body}");
    assert!(body.contains(r#"action="/add_sock""#));
    assert!(!body.contains("database is locked"));
  }

  #[tokio::test]
  async fn edit_form_fetch_failure_shows_generic_error() {
    let (status, body) = send(broken(), "GET", "/edit/3", None, true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error fetching sock. Please try again."), "{body}");
  }

  #[tokio::test]
  async fn edit_submit_failure_shows_generic_error() {
    let (status, body) = post_form(broken(), "/edit/3", CREW_NAVY).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error updating sock. Please try again."), "{body}");
    assert!(!body.contains("Sock not found."));
  }

  #[tokio::test]
  async fn delete_failure_shows_generic_error() {
    let (status, body) = post_form(broken(), "/delete/3", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error deleting sock. Please try again."), "{body}");
  }
}
