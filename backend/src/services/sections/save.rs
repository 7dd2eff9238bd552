use actix_web::{web, HttpResponse, Responder};
use common::model::about::About;
use common::model::contact::Contact;
use common::model::copyright::Copyright;
use common::model::cta::Cta;
use common::model::final_cta::FinalCta;
use common::model::hero::Hero;
use common::model::kind::SectionKind;
use common::model::logo::Logo;
use common::model::property_page::{PropertyPage, RelatedSection};
use common::model::property_section::PropertySection;
use common::model::services::Services;
use common::model::testimonials::Testimonials;
use common::model::why::Why;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub async fn process(kind: web::Path<String>, payload: web::Json<Value>) -> impl Responder {
    let Some(kind) = SectionKind::parse(&kind) else {
        return HttpResponse::NotFound().body(format!("Jenis bagian tidak dikenal: {}", kind));
    };

    if let Err(e) = validate_shape(kind, &payload) {
        return HttpResponse::BadRequest().body(e);
    }

    let saved = crate::db::open().and_then(|conn| upsert_section(&conn, kind, payload.into_inner()));
    match saved {
        Ok(section) => HttpResponse::Ok().json(section),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Gagal menyimpan bagian: {}", e))
        }
    }
}

/// Upserts the singleton row of `kind`. The row's id wins over the payload
/// id so that the section keeps a stable identity no matter what the client
/// sends; a brand-new section gets a fresh uuid.
pub fn upsert_section(
    conn: &Connection,
    kind: SectionKind,
    mut value: Value,
) -> Result<Value, String> {
    let existing: Option<String> = conn
        .query_row(
            "SELECT id FROM sections WHERE kind = ?1",
            params![kind.as_str()],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| e.to_string())?;

    let id = existing
        .or_else(|| {
            value
                .get("id")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    value["id"] = Value::String(id.clone());
    conn.execute(
        "INSERT OR REPLACE INTO sections (kind, id, data) VALUES (?1, ?2, ?3)",
        params![kind.as_str(), id, value.to_string()],
    )
    .map_err(|e| e.to_string())?;

    Ok(value)
}

/// Rejects payloads that do not deserialize into the kind's typed model, so
/// a typo'd field name fails loudly instead of being stored and silently
/// dropped on the next aggregate read.
fn validate_shape(kind: SectionKind, value: &Value) -> Result<(), String> {
    fn check<T: DeserializeOwned>(value: &Value) -> Result<(), String> {
        serde_json::from_value::<T>(value.clone())
            .map(|_| ())
            .map_err(|e| format!("Payload tidak valid: {}", e))
    }

    match kind {
        SectionKind::Hero => check::<Hero>(value),
        SectionKind::About => check::<About>(value),
        SectionKind::Property => check::<PropertySection>(value),
        SectionKind::Why => check::<Why>(value),
        SectionKind::Cta => check::<Cta>(value),
        SectionKind::Services => check::<Services>(value),
        SectionKind::Testimonials => check::<Testimonials>(value),
        SectionKind::Related => check::<RelatedSection>(value),
        SectionKind::FinalCta => check::<FinalCta>(value),
        SectionKind::PropertyPage => check::<PropertyPage>(value),
        SectionKind::Logo => check::<Logo>(value),
        SectionKind::Contact => check::<Contact>(value),
        SectionKind::Copyright => check::<Copyright>(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::services::site::seed::ensure_seeded;
    use serde_json::json;

    #[test]
    fn create_assigns_id_and_update_keeps_it() {
        let conn = db::open_test();
        ensure_seeded(&conn).unwrap();

        let payload = json!({
            "title": "Sewa Villa di Jogja",
            "subtitle": "Liburan nyaman bersama keluarga",
            "button_text": "Lihat Properti",
            "image": "/uploads/hero.jpg",
        });
        let created = upsert_section(&conn, SectionKind::Hero, payload).unwrap();
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        // Update with a different title and no id: the stored id wins.
        let update = json!({
            "title": "Villa Premium Jogja",
            "subtitle": "Liburan nyaman bersama keluarga",
            "button_text": "Lihat Properti",
            "image": "/uploads/hero.jpg",
        });
        let updated = upsert_section(&conn, SectionKind::Hero, update).unwrap();
        assert_eq!(updated["id"].as_str().unwrap(), id);
        assert_eq!(updated["title"], "Villa Premium Jogja");

        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM sections", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn saved_section_appears_in_aggregate() {
        let conn = db::open_test();
        let payload = json!({
            "title": "Hubungi Kami",
            "subtitle": "Kami siap membantu",
            "button_text": "Kontak",
        });
        upsert_section(&conn, SectionKind::Cta, payload).unwrap();

        let doc = crate::services::site::get::load_site(&conn).unwrap();
        assert_eq!(doc.cta.as_ref().unwrap().title, "Hubungi Kami");
        assert!(doc.hero.is_none());
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let payload = json!({ "title": 42 });
        assert!(validate_shape(SectionKind::Hero, &payload).is_err());

        let payload = json!({
            "title": "ok",
            "subtitle": "ok",
            "button_text": "ok",
            "image": "",
        });
        assert!(validate_shape(SectionKind::Hero, &payload).is_ok());
    }
}
