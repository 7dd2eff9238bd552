use actix_web::{web, HttpResponse, Responder};
use common::model::about::AboutStat;
use common::model::kind::{ItemKind, SectionItem};
use common::model::services::Service;
use common::model::testimonials::Testimonial;
use common::model::why::WhyReason;
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub async fn process(kind: web::Path<String>, payload: web::Json<Value>) -> impl Responder {
    let Some(kind) = ItemKind::parse(&kind) else {
        return HttpResponse::NotFound().body(format!("Jenis item tidak dikenal: {}", kind));
    };

    let saved = crate::db::open().and_then(|conn| {
        let value = payload.into_inner();
        match kind {
            ItemKind::AboutStat => upsert_item::<AboutStat>(&conn, value),
            ItemKind::WhyReason => upsert_item::<WhyReason>(&conn, value),
            ItemKind::Service => upsert_item::<Service>(&conn, value),
            ItemKind::Testimonial => upsert_item::<Testimonial>(&conn, value),
        }
    });

    match saved {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e) => HttpResponse::BadRequest().body(format!("Gagal menyimpan item: {}", e)),
    }
}

/// Generic upsert: deserialize into the typed item, require the parent
/// section key, assign an id when creating, store the full payload.
pub fn upsert_item<T>(conn: &Connection, value: Value) -> Result<Value, String>
where
    T: SectionItem + Serialize + DeserializeOwned,
{
    let mut item: T =
        serde_json::from_value(value).map_err(|e| format!("Payload tidak valid: {}", e))?;

    if item.parent_id().trim().is_empty() {
        return Err("Simpan bagian induk terlebih dahulu".to_string());
    }

    let id = match item.id() {
        Some(existing) if !existing.is_empty() => existing.to_string(),
        _ => uuid::Uuid::new_v4().to_string(),
    };
    item.set_id(id.clone());

    let data = serde_json::to_string(&item).map_err(|e| e.to_string())?;
    conn.execute(
        "INSERT OR REPLACE INTO items (id, kind, section_id, data, deleted) \
         VALUES (?1, ?2, ?3, ?4, 0)",
        params![id, T::KIND.as_str(), item.parent_id(), data],
    )
    .map_err(|e| e.to_string())?;

    serde_json::to_value(&item).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::services::site;
    use serde_json::json;

    #[test]
    fn item_requires_saved_parent_section() {
        let conn = db::open_test();
        let payload = json!({
            "about_id": "",
            "label": "Properti Terjual",
            "value": "20+",
        });
        let err = upsert_item::<AboutStat>(&conn, payload).unwrap_err();
        assert!(err.contains("bagian induk"));
    }

    #[test]
    fn upsert_then_update_keeps_one_row() {
        let conn = db::open_test();
        let created = upsert_item::<WhyReason>(
            &conn,
            json!({
                "why_id": "why-1",
                "icon": "🏠",
                "title": "Lokasi Strategis",
                "description": "Dekat pusat kota",
            }),
        )
        .unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        let updated = upsert_item::<WhyReason>(
            &conn,
            json!({
                "id": id,
                "why_id": "why-1",
                "icon": "🏠",
                "title": "Lokasi Sangat Strategis",
                "description": "Dekat pusat kota",
            }),
        )
        .unwrap();
        assert_eq!(updated["id"].as_str().unwrap(), id);

        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn saved_items_appear_in_aggregate_in_insertion_order() {
        let conn = db::open_test();
        for title in ["Kolam Renang", "Antar Jemput"] {
            upsert_item::<Service>(
                &conn,
                json!({
                    "services_id": "svc-1",
                    "icon": "🏘️",
                    "title": title,
                    "description": "",
                }),
            )
            .unwrap();
        }

        let doc = site::get::load_site(&conn).unwrap();
        let titles: Vec<&str> = doc.service_items.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Kolam Renang", "Antar Jemput"]);
    }
}
