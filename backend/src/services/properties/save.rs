use actix_web::{web, HttpResponse, Responder};
use common::model::property::{Property, PropertyDraft};
use rusqlite::{params, Connection};

pub async fn process(payload: web::Json<PropertyDraft>) -> impl Responder {
    let draft = payload.into_inner();
    let missing = draft.missing_required();
    if !missing.is_empty() {
        return HttpResponse::BadRequest().body(format!(
            "Lengkapi data properti: {}",
            missing.join(", ")
        ));
    }

    let saved = crate::db::open().and_then(|conn| upsert_property(&conn, draft));
    match saved {
        Ok(property) => HttpResponse::Ok().json(property),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Gagal menyimpan properti: {}", e))
        }
    }
}

/// Full-replace upsert of one listing. The draft must be complete; a fresh
/// uuid is assigned when it carries no id.
pub fn upsert_property(conn: &Connection, draft: PropertyDraft) -> Result<Property, String> {
    let id = draft
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let property = draft
        .into_property(id)
        .map_err(|missing| format!("Lengkapi data properti: {}", missing.join(", ")))?;

    let features = serde_json::to_string(&property.features).map_err(|e| e.to_string())?;
    let images = serde_json::to_string(&property.images).map_err(|e| e.to_string())?;
    conn.execute(
        "INSERT OR REPLACE INTO properties \
         (id, name, address, type, room, bath, sqft, price, rating, description, \
          features, images, pdf, is_available, deleted) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, 0)",
        params![
            property.id,
            property.name,
            property.address,
            property.kind.as_str(),
            property.room,
            property.bath,
            property.sqft,
            property.price as i64,
            property.rating as f64,
            property.description,
            features,
            images,
            property.pdf,
            property.is_available as i64,
        ],
    )
    .map_err(|e| e.to_string())?;

    Ok(property)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db;
    use crate::services::site;
    use common::model::property::PropertyType;

    pub(crate) fn complete_draft(name: &str) -> PropertyDraft {
        PropertyDraft {
            name: name.to_string(),
            address: "Jl. Kaliurang Km 7, Yogyakarta".to_string(),
            kind: PropertyType::Villa,
            room: Some(3),
            bath: Some(2),
            sqft: Some(120),
            price: Some(1_500_000),
            rating: Some(4.8),
            description: "Villa dengan pemandangan Merapi.".to_string(),
            features: vec!["Kolam Renang".to_string(), "WiFi".to_string()],
            images: vec!["/uploads/a.jpg".to_string()],
            pdf: "/uploads/katalog.pdf".to_string(),
            ..PropertyDraft::new()
        }
    }

    #[test]
    fn upsert_assigns_id_and_round_trips_through_aggregate() {
        let conn = db::open_test();
        let saved = upsert_property(&conn, complete_draft("Villa Dago")).unwrap();
        assert!(!saved.id.is_empty());

        let doc = site::get::load_site(&conn).unwrap();
        assert_eq!(doc.properties.len(), 1);
        let loaded = &doc.properties[0];
        assert_eq!(loaded, &saved);
    }

    #[test]
    fn full_replace_overwrites_every_field() {
        let conn = db::open_test();
        let saved = upsert_property(&conn, complete_draft("Villa Dago")).unwrap();

        let mut edit = PropertyDraft::from_property(&saved);
        edit.is_available = false;
        edit.features.clear();
        let replaced = upsert_property(&conn, edit).unwrap();
        assert_eq!(replaced.id, saved.id);

        let doc = site::get::load_site(&conn).unwrap();
        assert_eq!(doc.properties.len(), 1);
        assert!(!doc.properties[0].is_available);
        assert!(doc.properties[0].features.is_empty());
    }

    #[test]
    fn incomplete_draft_is_refused() {
        let conn = db::open_test();
        let mut draft = complete_draft("Villa Dago");
        draft.images.clear();
        draft.pdf.clear();
        let err = upsert_property(&conn, draft).unwrap_err();
        assert!(err.contains("katalog PDF"));
        assert!(err.contains("gambar"));

        let doc = site::get::load_site(&conn).unwrap();
        assert!(doc.properties.is_empty());
    }
}
