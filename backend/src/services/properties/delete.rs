use actix_web::{web, HttpResponse, Responder};
use common::requests::DeleteRequest;
use rusqlite::{params, Connection};

pub async fn process(payload: web::Json<DeleteRequest>) -> impl Responder {
    let deleted = crate::db::open().and_then(|conn| soft_delete_property(&conn, &payload.id));
    match deleted {
        Ok(true) => HttpResponse::Ok().body("Properti dihapus"),
        Ok(false) => HttpResponse::NotFound().body("Properti tidak ditemukan"),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Gagal menghapus properti: {}", e))
        }
    }
}

pub fn soft_delete_property(conn: &Connection, id: &str) -> Result<bool, String> {
    let changed = conn
        .execute(
            "UPDATE properties SET deleted = 1 WHERE id = ?1 AND deleted = 0",
            params![id],
        )
        .map_err(|e| e.to_string())?;

    Ok(changed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::services::properties::save::{tests::complete_draft, upsert_property};
    use crate::services::site;

    #[test]
    fn deleted_property_vanishes_from_aggregate() {
        let conn = db::open_test();
        let saved = upsert_property(&conn, complete_draft("Villa Dago")).unwrap();
        upsert_property(&conn, complete_draft("Rumah Sleman")).unwrap();

        assert!(soft_delete_property(&conn, &saved.id).unwrap());

        let doc = site::get::load_site(&conn).unwrap();
        assert_eq!(doc.properties.len(), 1);
        assert_eq!(doc.properties[0].name, "Rumah Sleman");

        // The row is kept for recovery, only flagged.
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM properties", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 2);
    }

    #[test]
    fn deleting_twice_reports_not_found() {
        let conn = db::open_test();
        let saved = upsert_property(&conn, complete_draft("Villa Dago")).unwrap();
        assert!(soft_delete_property(&conn, &saved.id).unwrap());
        assert!(!soft_delete_property(&conn, &saved.id).unwrap());
    }
}
