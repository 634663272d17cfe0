//! SQL schema for the sock drawer store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS socks (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    style            TEXT    NOT NULL,
    hue              TEXT    NOT NULL,
    size             TEXT    NOT NULL,
    last_adventure   TEXT    NOT NULL,   -- YYYY-MM-DD
    mood             TEXT    NOT NULL,
    superhero_rating INTEGER NOT NULL
);
";
