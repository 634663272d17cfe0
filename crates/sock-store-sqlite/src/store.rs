//! [`SqliteStore`] — the SQLite implementation of [`SockStore`].

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::OptionalExtension as _;

use sock_core::{
  sock::{Sock, SockFields, format_date},
  store::{SockQuery, SockStore},
};

use crate::{
  Error, Result,
  encode::{COLUMNS, RawSock},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A sock drawer backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// Missing parent directories are created first.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SockStore impl ──────────────────────────────────────────────────────────

impl SockStore for SqliteStore {
  type Error = Error;

  async fn insert(
    &self,
    fields: SockFields,
    last_adventure: NaiveDate,
  ) -> Result<Sock> {
    let row = fields.clone();
    let date_str = format_date(last_adventure);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO socks (
             style, hue, size, last_adventure, mood, superhero_rating
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            row.style,
            row.hue,
            row.size,
            date_str,
            row.mood,
            row.superhero_rating,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Sock { id, last_adventure, fields })
  }

  async fn get(&self, id: i64) -> Result<Option<Sock>> {
    let raw: Option<RawSock> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLUMNS} FROM socks WHERE id = ?1"),
              rusqlite::params![id],
              RawSock::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSock::into_sock).transpose()
  }

  async fn query(&self, query: &SockQuery) -> Result<Vec<Sock>> {
    let q = query.clone();

    let raws: Vec<RawSock> = self
      .conn
      .call(move |conn| {
        // A NULL parameter disables its filter.
        let mut stmt = conn.prepare(&format!(
          "SELECT {COLUMNS} FROM socks
           WHERE (?1 IS NULL OR id = ?1)
             AND (?2 IS NULL OR style = ?2)
             AND (?3 IS NULL OR hue = ?3)
             AND (?4 IS NULL OR size = ?4)
             AND (?5 IS NULL OR mood = ?5)
             AND (?6 IS NULL OR superhero_rating = ?6)
           ORDER BY id ASC"
        ))?;
        let rows = stmt
          .query_map(
            rusqlite::params![
              q.id,
              q.style,
              q.hue,
              q.size,
              q.mood,
              q.superhero_rating,
            ],
            RawSock::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSock::into_sock).collect()
  }

  async fn update(
    &self,
    id: i64,
    fields: SockFields,
    last_adventure: NaiveDate,
  ) -> Result<Sock> {
    let row = fields.clone();
    let date_str = format_date(last_adventure);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE socks
           SET style = ?2, hue = ?3, size = ?4, last_adventure = ?5,
               mood = ?6, superhero_rating = ?7
           WHERE id = ?1",
          rusqlite::params![
            id,
            row.style,
            row.hue,
            row.size,
            date_str,
            row.mood,
            row.superhero_rating,
          ],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::Core(sock_core::Error::NotFound(id)));
    }
    Ok(Sock { id, last_adventure, fields })
  }

  async fn delete(&self, id: i64) -> Result<()> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM socks WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::Core(sock_core::Error::NotFound(id)));
    }
    Ok(())
  }
}
