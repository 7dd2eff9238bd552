use log::info;
use rusqlite::{params, Connection, OptionalExtension};

/// Password of the seeded admin account; meant to be changed on first login.
const DEFAULT_ADMIN_PASSWORD: &str = "villa-admin";

/// Returns the root record id, creating the root and the default admin user
/// if the database is empty. Calling this repeatedly is a no-op after the
/// first run.
pub fn ensure_seeded(conn: &Connection) -> Result<String, String> {
    let existing: Option<String> = conn
        .query_row("SELECT id FROM site LIMIT 1", [], |row| row.get(0))
        .optional()
        .map_err(|e| e.to_string())?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let id = uuid::Uuid::new_v4().to_string();
    conn.execute("INSERT INTO site (id) VALUES (?1)", params![id])
        .map_err(|e| e.to_string())?;
    seed_admin_user(conn)?;
    info!("Seeded empty site root {}", id);

    Ok(id)
}

fn seed_admin_user(conn: &Connection) -> Result<(), String> {
    let user_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .map_err(|e| e.to_string())?;
    if user_count > 0 {
        return Ok(());
    }

    conn.execute(
        "INSERT INTO users (id, username, password_md5) VALUES (?1, ?2, ?3)",
        params![
            uuid::Uuid::new_v4().to_string(),
            "admin",
            format!("{:x}", md5::compute(DEFAULT_ADMIN_PASSWORD)),
        ],
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn seeding_is_idempotent() {
        let conn = db::open_test();
        let first = ensure_seeded(&conn).unwrap();
        let second = ensure_seeded(&conn).unwrap();
        assert_eq!(first, second);

        let roots: i64 = conn
            .query_row("SELECT COUNT(*) FROM site", [], |row| row.get(0))
            .unwrap();
        assert_eq!(roots, 1);
    }

    #[test]
    fn seed_creates_single_admin_user() {
        let conn = db::open_test();
        ensure_seeded(&conn).unwrap();
        ensure_seeded(&conn).unwrap();

        let users: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(users, 1);

        let username: String = conn
            .query_row("SELECT username FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(username, "admin");
    }
}
