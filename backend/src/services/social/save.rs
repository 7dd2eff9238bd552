use actix_web::{web, HttpResponse, Responder};
use common::model::social::SocialLink;
use rusqlite::{params, Connection};

pub async fn process(payload: web::Json<SocialLink>) -> impl Responder {
    let saved = crate::db::open().and_then(|conn| upsert_social_link(&conn, payload.into_inner()));
    match saved {
        Ok(link) => HttpResponse::Ok().json(link),
        Err(e) => HttpResponse::BadRequest().body(format!("Gagal menyimpan tautan: {}", e)),
    }
}

pub fn upsert_social_link(conn: &Connection, mut link: SocialLink) -> Result<SocialLink, String> {
    if link.label.trim().is_empty() {
        return Err("Label tidak boleh kosong".to_string());
    }
    if link.url.trim().is_empty() {
        return Err("URL tidak boleh kosong".to_string());
    }

    let id = link
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    link.id = Some(id.clone());

    conn.execute(
        "INSERT OR REPLACE INTO social_links (id, icon, label, url, deleted) \
         VALUES (?1, ?2, ?3, ?4, 0)",
        params![id, link.icon.as_str(), link.label, link.url],
    )
    .map_err(|e| e.to_string())?;

    Ok(link)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db;
    use crate::services::site;
    use common::model::social::SocialIcon;

    pub(crate) fn link(label: &str) -> SocialLink {
        SocialLink {
            id: None,
            icon: SocialIcon::Instagram,
            label: label.to_string(),
            url: format!("https://instagram.com/{}", label),
        }
    }

    #[test]
    fn upsert_and_read_back() {
        let conn = db::open_test();
        let saved = upsert_social_link(&conn, link("villajogja")).unwrap();
        assert!(saved.id.is_some());

        let doc = site::get::load_site(&conn).unwrap();
        assert_eq!(doc.social_links.len(), 1);
        assert_eq!(doc.social_links[0].icon, SocialIcon::Instagram);
    }

    #[test]
    fn empty_label_or_url_is_refused() {
        let conn = db::open_test();
        let mut bad = link("villajogja");
        bad.label = "  ".to_string();
        assert!(upsert_social_link(&conn, bad).is_err());

        let mut bad = link("villajogja");
        bad.url = String::new();
        assert!(upsert_social_link(&conn, bad).is_err());
    }
}
