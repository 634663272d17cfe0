//! Conversion between `socks` rows and [`Sock`] values.
//!
//! Dates are stored as `YYYY-MM-DD` text; everything else maps directly.

use sock_core::sock::{Sock, SockFields, parse_date};

use crate::Result;

/// Column list shared by every `SELECT` so [`RawSock::from_row`] can read by
/// position.
pub const COLUMNS: &str =
  "id, style, hue, size, last_adventure, mood, superhero_rating";

/// Raw values read directly from a `socks` row.
pub struct RawSock {
  pub id:               i64,
  pub style:            String,
  pub hue:              String,
  pub size:             String,
  pub last_adventure:   String,
  pub mood:             String,
  pub superhero_rating: i64,
}

impl RawSock {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:               row.get(0)?,
      style:            row.get(1)?,
      hue:              row.get(2)?,
      size:             row.get(3)?,
      last_adventure:   row.get(4)?,
      mood:             row.get(5)?,
      superhero_rating: row.get(6)?,
    })
  }

  pub fn into_sock(self) -> Result<Sock> {
    Ok(Sock {
      id:             self.id,
      last_adventure: parse_date(&self.last_adventure)?,
      fields:         SockFields {
        style:            self.style,
        hue:              self.hue,
        size:             self.size,
        mood:             self.mood,
        superhero_rating: self.superhero_rating,
      },
    })
  }
}
