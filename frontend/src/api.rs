//! HTTP plumbing between the dashboard and the backend endpoints.
//!
//! Every mutation is a single independent request; no retries, no queueing.
//! Non-success responses are surfaced as the response body text so the
//! dialogs can show the server's own message.

use common::model::site::SiteDocument;
use common::requests::DeleteRequest;
use gloo_net::http::Request;
use serde::Serialize;

/// Fetches the full site aggregate.
pub async fn fetch_site() -> Result<SiteDocument, String> {
    let response = Request::get("/api/site")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(response
            .text()
            .await
            .unwrap_or_else(|_| format!("HTTP {}", response.status())));
    }
    response
        .json::<SiteDocument>()
        .await
        .map_err(|e| e.to_string())
}

/// Posts a full entity payload to its upsert endpoint.
pub async fn save_entity<T: Serialize>(endpoint: &str, payload: &T) -> Result<(), String> {
    let request = Request::post(endpoint)
        .json(payload)
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(response
            .text()
            .await
            .unwrap_or_else(|_| format!("HTTP {}", response.status())))
    }
}

/// Issues the soft-delete `PATCH` carrying only the entity id.
pub async fn delete_entity(endpoint: &str, id: String) -> Result<(), String> {
    let request = Request::patch(endpoint)
        .json(&DeleteRequest { id })
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(response
            .text()
            .await
            .unwrap_or_else(|_| format!("HTTP {}", response.status())))
    }
}

/// Uploads one file and returns the public URL reference to store.
pub async fn upload_file(file: web_sys::File) -> Result<String, String> {
    let form = web_sys::FormData::new().map_err(|_| "FormData tidak tersedia".to_string())?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|_| "Gagal menyiapkan unggahan".to_string())?;

    let request = Request::post("/api/assets/upload")
        .body(form)
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(response
            .text()
            .await
            .unwrap_or_else(|_| format!("HTTP {}", response.status())));
    }

    let value: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
    value
        .get("url")
        .and_then(|u| u.as_str())
        .map(String::from)
        .ok_or_else(|| "Respons unggahan tidak valid".to_string())
}
