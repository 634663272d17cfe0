//! The `SockStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `sock-store-sqlite`).
//! The web layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use chrono::NaiveDate;

use crate::sock::{Sock, SockFields};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Equality filters for [`SockStore::query`]. `None` matches anything; the
/// default query returns every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SockQuery {
  pub id:               Option<i64>,
  pub style:            Option<String>,
  pub hue:              Option<String>,
  pub size:             Option<String>,
  pub mood:             Option<String>,
  pub superhero_rating: Option<i64>,
}

impl SockQuery {
  /// Match a single row by primary key.
  pub fn by_id(id: i64) -> Self { Self { id: Some(id), ..Self::default() } }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Backend errors must say whether they mean "no such row", so the web layer
/// can tell a missing sock from a broken database.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn is_not_found(&self) -> bool;
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Single-row operations over the `socks` table, keyed by `id`.
///
/// Every write persists immediately. Implementations do not retry.
pub trait SockStore: Send + Sync {
  type Error: StoreError;

  /// Persist a new sock stamped with `last_adventure`; the store assigns the
  /// `id`. Ids are never reused, even after deletion.
  fn insert(
    &self,
    fields: SockFields,
    last_adventure: NaiveDate,
  ) -> impl Future<Output = Result<Sock, Self::Error>> + Send + '_;

  /// Fetch one sock. Returns `None` if the id does not exist.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Sock>, Self::Error>> + Send + '_;

  /// All socks matching `query`, in ascending `id` order.
  fn query<'a>(
    &'a self,
    query: &'a SockQuery,
  ) -> impl Future<Output = Result<Vec<Sock>, Self::Error>> + Send + 'a;

  /// Overwrite every editable field and the `last_adventure` stamp.
  ///
  /// Fails with a not-found error if the id does not exist.
  fn update(
    &self,
    id: i64,
    fields: SockFields,
    last_adventure: NaiveDate,
  ) -> impl Future<Output = Result<Sock, Self::Error>> + Send + '_;

  /// Hard-delete a sock. Fails with a not-found error if the id does not
  /// exist.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
