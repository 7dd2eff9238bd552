use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder};
use futures_util::StreamExt;
use std::fs::File;
use std::io::{BufWriter, Write};

pub const UPLOADS_DIR: &str = "uploads";

/// Extensions the dashboard is allowed to upload: gallery images plus the
/// property catalog PDF.
const ALLOWED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "pdf"];

pub async fn process(payload: Multipart) -> impl Responder {
    match save_upload(payload).await {
        Ok(url) => HttpResponse::Ok().json(serde_json::json!({ "url": url })),
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Streams the `file` part to disk under a fresh uuid name and returns the
/// public URL. The original filename only contributes its extension.
async fn save_upload(mut payload: Multipart) -> Result<String, Box<dyn std::error::Error>> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if name.as_deref() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(format!(
                "Jenis file tidak didukung: {:?} (hanya {})",
                filename,
                ALLOWED_EXTENSIONS.join(", ")
            )
            .into());
        }

        let stored_name = format!("{}.{}", uuid::Uuid::new_v4(), extension);
        let path = format!("{}/{}", UPLOADS_DIR, stored_name);
        let mut writer = BufWriter::new(File::create(&path)?);
        while let Some(chunk) = field.next().await {
            writer.write_all(&chunk?)?;
        }
        writer.flush()?;

        return Ok(format!("/{}/{}", UPLOADS_DIR, stored_name));
    }

    Err("Missing file".into())
}
