//! `GET /care_tips` — static advice, no store access.

use axum::response::{IntoResponse, Response};

use crate::{error::Result, render};

pub async fn handler() -> Result<Response> {
  Ok(render::care_tips()?.into_response())
}
