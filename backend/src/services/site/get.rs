//! Assembly of the `SiteDocument` aggregate for `GET /api/site`.
//!
//! Sections are stored as JSON payloads keyed by kind and parsed back into
//! their typed form here; child items, properties and social links are read
//! from their own tables with soft-deleted rows filtered out and insertion
//! order preserved (`ORDER BY rowid`).

use actix_web::HttpResponse;
use common::model::kind::{ItemKind, SectionKind};
use common::model::property::{Property, PropertyType};
use common::model::site::SiteDocument;
use common::model::social::{SocialIcon, SocialLink};
use log::warn;
use rusqlite::Connection;
use serde::de::DeserializeOwned;

/// Browsers and edges may cache the aggregate briefly; any successful write
/// from the dashboard triggers a client-side re-fetch regardless.
const CACHE_CONTROL: &str = "public, max-age=60, s-maxage=300, stale-while-revalidate=300";

pub async fn process() -> impl actix_web::Responder {
    let loaded = crate::db::open().and_then(|conn| load_site(&conn));
    match loaded {
        Ok(doc) => HttpResponse::Ok()
            .insert_header(("Cache-Control", CACHE_CONTROL))
            .json(doc),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Gagal memuat konten situs: {}", e)),
    }
}

/// Loads the full aggregate, seeding the root first if the database is empty.
pub fn load_site(conn: &Connection) -> Result<SiteDocument, String> {
    let root_id = super::seed::ensure_seeded(conn)?;
    let mut doc = SiteDocument {
        id: root_id,
        ..SiteDocument::default()
    };

    load_sections(conn, &mut doc)?;
    load_items(conn, &mut doc)?;
    doc.properties = load_properties(conn)?;
    doc.social_links = load_social_links(conn)?;

    Ok(doc)
}

fn parse_json<T: DeserializeOwned>(data: &str) -> Result<T, String> {
    serde_json::from_str(data).map_err(|e| e.to_string())
}

fn load_sections(conn: &Connection, doc: &mut SiteDocument) -> Result<(), String> {
    let mut stmt = conn
        .prepare("SELECT kind, data FROM sections")
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| e.to_string())?;

    for row in rows {
        let (kind, data) = row.map_err(|e| e.to_string())?;
        match SectionKind::parse(&kind) {
            Some(SectionKind::Hero) => doc.hero = Some(parse_json(&data)?),
            Some(SectionKind::About) => doc.about = Some(parse_json(&data)?),
            Some(SectionKind::Property) => doc.property_section = Some(parse_json(&data)?),
            Some(SectionKind::Why) => doc.why = Some(parse_json(&data)?),
            Some(SectionKind::Cta) => doc.cta = Some(parse_json(&data)?),
            Some(SectionKind::Services) => doc.services = Some(parse_json(&data)?),
            Some(SectionKind::Testimonials) => doc.testimonials = Some(parse_json(&data)?),
            Some(SectionKind::Related) => doc.related = Some(parse_json(&data)?),
            Some(SectionKind::FinalCta) => doc.final_cta = Some(parse_json(&data)?),
            Some(SectionKind::PropertyPage) => doc.property_page = Some(parse_json(&data)?),
            Some(SectionKind::Logo) => doc.logo = Some(parse_json(&data)?),
            Some(SectionKind::Contact) => doc.contact = Some(parse_json(&data)?),
            Some(SectionKind::Copyright) => doc.copyright = Some(parse_json(&data)?),
            None => warn!("Skipping unknown section kind {:?} in database", kind),
        }
    }

    Ok(())
}

fn load_items(conn: &Connection, doc: &mut SiteDocument) -> Result<(), String> {
    let mut stmt = conn
        .prepare("SELECT kind, data FROM items WHERE deleted = 0 ORDER BY rowid")
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| e.to_string())?;

    for row in rows {
        let (kind, data) = row.map_err(|e| e.to_string())?;
        match ItemKind::parse(&kind) {
            Some(ItemKind::AboutStat) => doc.about_stats.push(parse_json(&data)?),
            Some(ItemKind::WhyReason) => doc.why_reasons.push(parse_json(&data)?),
            Some(ItemKind::Service) => doc.service_items.push(parse_json(&data)?),
            Some(ItemKind::Testimonial) => doc.testimonial_items.push(parse_json(&data)?),
            None => warn!("Skipping unknown item kind {:?} in database", kind),
        }
    }

    Ok(())
}

struct PropertyRow {
    id: String,
    name: String,
    address: String,
    kind: String,
    room: i64,
    bath: i64,
    sqft: i64,
    price: i64,
    rating: f64,
    description: String,
    features: String,
    images: String,
    pdf: String,
    is_available: bool,
}

fn load_properties(conn: &Connection) -> Result<Vec<Property>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, address, type, room, bath, sqft, price, rating, description, \
             features, images, pdf, is_available \
             FROM properties WHERE deleted = 0 ORDER BY rowid",
        )
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], |row| {
            Ok(PropertyRow {
                id: row.get(0)?,
                name: row.get(1)?,
                address: row.get(2)?,
                kind: row.get(3)?,
                room: row.get(4)?,
                bath: row.get(5)?,
                sqft: row.get(6)?,
                price: row.get(7)?,
                rating: row.get(8)?,
                description: row.get(9)?,
                features: row.get(10)?,
                images: row.get(11)?,
                pdf: row.get(12)?,
                is_available: row.get::<_, i64>(13)? != 0,
            })
        })
        .map_err(|e| e.to_string())?;

    let mut properties = Vec::new();
    for row in rows {
        let row = row.map_err(|e| e.to_string())?;
        let kind = PropertyType::parse(&row.kind)
            .ok_or_else(|| format!("tipe properti tidak dikenal: {}", row.kind))?;
        properties.push(Property {
            id: row.id,
            name: row.name,
            address: row.address,
            kind,
            room: row.room as u32,
            bath: row.bath as u32,
            sqft: row.sqft as u32,
            price: row.price as u64,
            rating: row.rating as f32,
            description: row.description,
            features: parse_json(&row.features)?,
            images: parse_json(&row.images)?,
            pdf: row.pdf,
            is_available: row.is_available,
        });
    }

    Ok(properties)
}

fn load_social_links(conn: &Connection) -> Result<Vec<SocialLink>, String> {
    let mut stmt = conn
        .prepare("SELECT id, icon, label, url FROM social_links WHERE deleted = 0 ORDER BY rowid")
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })
        .map_err(|e| e.to_string())?;

    let mut links = Vec::new();
    for row in rows {
        let (id, icon, label, url) = row.map_err(|e| e.to_string())?;
        let icon = SocialIcon::parse(&icon)
            .ok_or_else(|| format!("ikon media sosial tidak dikenal: {}", icon))?;
        links.push(SocialLink {
            id: Some(id),
            icon,
            label,
            url,
        });
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use rusqlite::params;

    #[test]
    fn empty_database_yields_seeded_empty_document() {
        let conn = db::open_test();
        let doc = load_site(&conn).unwrap();
        assert!(!doc.id.is_empty());
        assert!(doc.hero.is_none());
        assert!(doc.about_stats.is_empty());
        assert!(doc.properties.is_empty());
        assert!(doc.social_links.is_empty());

        // A second read returns the same root, not a new one.
        let again = load_site(&conn).unwrap();
        assert_eq!(doc.id, again.id);
    }

    #[test]
    fn unknown_section_rows_are_skipped() {
        let conn = db::open_test();
        conn.execute(
            "INSERT INTO sections (kind, id, data) VALUES (?1, ?2, ?3)",
            params!["weather", "w-1", "{}"],
        )
        .unwrap();

        let doc = load_site(&conn).unwrap();
        assert!(doc.hero.is_none());
    }
}
