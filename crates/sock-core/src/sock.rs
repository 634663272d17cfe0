//! The sock record — the only entity the drawer tracks.
//!
//! A [`Sock`] is a stored row; [`SockFields`] is the user-editable part of it.
//! The `id` and `last_adventure` stamp are always assigned by the system.

use chrono::{Local, NaiveDate};

use crate::{Error, Result};

/// Format of the `last_adventure` stamp, both on disk and on screen.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The editable attributes of a sock pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SockFields {
  pub style:            String,
  pub hue:              String,
  pub size:             String,
  pub mood:             String,
  pub superhero_rating: i64,
}

/// A persisted sock pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sock {
  pub id:             i64,
  /// Date of the last create or edit.
  pub last_adventure: NaiveDate,
  pub fields:         SockFields,
}

/// The current local calendar date, used to stamp every write.
pub fn today() -> NaiveDate { Local::now().date_naive() }

/// Render a date stamp as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date stamp.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|_| Error::InvalidDate(s.to_owned()))
}
