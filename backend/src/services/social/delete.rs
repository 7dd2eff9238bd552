use actix_web::{web, HttpResponse, Responder};
use common::requests::DeleteRequest;
use rusqlite::{params, Connection};

pub async fn process(payload: web::Json<DeleteRequest>) -> impl Responder {
    let deleted = crate::db::open().and_then(|conn| soft_delete_social_link(&conn, &payload.id));
    match deleted {
        Ok(true) => HttpResponse::Ok().body("Tautan dihapus"),
        Ok(false) => HttpResponse::NotFound().body("Tautan tidak ditemukan"),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Gagal menghapus tautan: {}", e))
        }
    }
}

pub fn soft_delete_social_link(conn: &Connection, id: &str) -> Result<bool, String> {
    let changed = conn
        .execute(
            "UPDATE social_links SET deleted = 1 WHERE id = ?1 AND deleted = 0",
            params![id],
        )
        .map_err(|e| e.to_string())?;

    Ok(changed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::services::site;
    use crate::services::social::save::{tests::link, upsert_social_link};

    #[test]
    fn deleted_link_vanishes_from_aggregate() {
        let conn = db::open_test();
        let saved = upsert_social_link(&conn, link("villajogja")).unwrap();
        assert!(soft_delete_social_link(&conn, saved.id.as_deref().unwrap()).unwrap());

        let doc = site::get::load_site(&conn).unwrap();
        assert!(doc.social_links.is_empty());
    }
}
