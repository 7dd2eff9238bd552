use actix_web::{web, HttpResponse, Responder};
use common::model::kind::ItemKind;
use common::requests::DeleteRequest;
use rusqlite::{params, Connection};

pub async fn process(kind: web::Path<String>, payload: web::Json<DeleteRequest>) -> impl Responder {
    let Some(kind) = ItemKind::parse(&kind) else {
        return HttpResponse::NotFound().body(format!("Jenis item tidak dikenal: {}", kind));
    };

    let deleted = crate::db::open().and_then(|conn| soft_delete_item(&conn, kind, &payload.id));
    match deleted {
        Ok(true) => HttpResponse::Ok().body("Item dihapus"),
        Ok(false) => HttpResponse::NotFound().body("Item tidak ditemukan"),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Gagal menghapus item: {}", e)),
    }
}

/// Marks the row as deleted; returns whether a live row was found. The row
/// itself is kept so the delete is recoverable at the database level.
pub fn soft_delete_item(conn: &Connection, kind: ItemKind, id: &str) -> Result<bool, String> {
    let changed = conn
        .execute(
            "UPDATE items SET deleted = 1 WHERE id = ?1 AND kind = ?2 AND deleted = 0",
            params![id, kind.as_str()],
        )
        .map_err(|e| e.to_string())?;

    Ok(changed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::services::items::save::upsert_item;
    use crate::services::site;
    use common::model::testimonials::Testimonial;
    use serde_json::json;

    #[test]
    fn deleting_the_only_item_leaves_the_section_alone() {
        let conn = db::open_test();
        crate::services::sections::save::upsert_section(
            &conn,
            common::model::kind::SectionKind::Testimonials,
            json!({ "title": "Kata Mereka", "subtitle": "Testimoni tamu kami" }),
        )
        .unwrap();

        let item = upsert_item::<Testimonial>(
            &conn,
            json!({
                "testimonials_id": "ts-1",
                "name": "Budi",
                "role": "Tamu",
                "image": "",
                "rating": 5.0,
                "content": "Villa bersih dan nyaman.",
                "url_video": "",
            }),
        )
        .unwrap();
        let id = item["id"].as_str().unwrap();

        assert!(soft_delete_item(&conn, ItemKind::Testimonial, id).unwrap());

        let doc = site::get::load_site(&conn).unwrap();
        assert!(doc.testimonial_items.is_empty());
        // The parent section is still there, just with no items.
        assert_eq!(doc.testimonials.as_ref().unwrap().title, "Kata Mereka");
    }

    #[test]
    fn deleting_missing_or_wrong_kind_reports_not_found() {
        let conn = db::open_test();
        assert!(!soft_delete_item(&conn, ItemKind::Service, "nope").unwrap());

        let item = upsert_item::<Testimonial>(
            &conn,
            json!({
                "testimonials_id": "ts-1",
                "name": "Sari",
                "role": "Tamu",
                "image": "",
                "rating": 4.5,
                "content": "",
                "url_video": "",
            }),
        )
        .unwrap();
        let id = item["id"].as_str().unwrap();

        // Same id under a different kind does not match.
        assert!(!soft_delete_item(&conn, ItemKind::Service, id).unwrap());
        assert!(soft_delete_item(&conn, ItemKind::Testimonial, id).unwrap());
        // Already deleted: gone from the live set.
        assert!(!soft_delete_item(&conn, ItemKind::Testimonial, id).unwrap());
    }
}
