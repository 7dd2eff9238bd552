//! SQLite access for the CMS.
//!
//! Every request opens its own connection against the single database file;
//! there is no pool and no shared state between handlers. All persistence
//! helpers in the service modules take `&Connection` so tests can run them
//! against `Connection::open_in_memory()`.
//!
//! Scalar sections are stored generically: one row per kind with the full
//! entity as a JSON payload. Properties, child items and social links have
//! their own tables; all deletable tables carry a `deleted` flag instead of
//! ever removing rows (soft delete), and aggregate reads filter on it.

use rusqlite::Connection;

pub const DB_PATH: &str = "villa_cms.sqlite";

/// Opens the database file and makes sure the schema exists.
pub fn open() -> Result<Connection, String> {
    let conn = Connection::open(DB_PATH).map_err(|e| e.to_string())?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS site (
             id TEXT PRIMARY KEY
         );
         CREATE TABLE IF NOT EXISTS users (
             id TEXT PRIMARY KEY,
             username TEXT NOT NULL UNIQUE,
             password_md5 TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS sections (
             kind TEXT PRIMARY KEY,
             id TEXT NOT NULL,
             data TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS items (
             id TEXT PRIMARY KEY,
             kind TEXT NOT NULL,
             section_id TEXT NOT NULL,
             data TEXT NOT NULL,
             deleted INTEGER NOT NULL DEFAULT 0
         );
         CREATE TABLE IF NOT EXISTS properties (
             id TEXT PRIMARY KEY,
             name TEXT NOT NULL,
             address TEXT NOT NULL,
             type TEXT NOT NULL,
             room INTEGER NOT NULL,
             bath INTEGER NOT NULL,
             sqft INTEGER NOT NULL,
             price INTEGER NOT NULL,
             rating REAL NOT NULL,
             description TEXT NOT NULL,
             features TEXT NOT NULL,
             images TEXT NOT NULL,
             pdf TEXT NOT NULL,
             is_available INTEGER NOT NULL,
             deleted INTEGER NOT NULL DEFAULT 0
         );
         CREATE TABLE IF NOT EXISTS social_links (
             id TEXT PRIMARY KEY,
             icon TEXT NOT NULL,
             label TEXT NOT NULL,
             url TEXT NOT NULL,
             deleted INTEGER NOT NULL DEFAULT 0
         );",
    )
    .map_err(|e| e.to_string())
}

#[cfg(test)]
pub fn open_test() -> Connection {
    let conn = Connection::open_in_memory().expect("in-memory database");
    init_schema(&conn).expect("schema");
    conn
}
