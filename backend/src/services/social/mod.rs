//! # Social Link Service
//!
//! Upsert and soft-delete for the footer's social media links.
//!
//! ## Registered Routes
//!
//! *   **`POST /api/admin/social`** — `save::process`
//! *   **`PATCH /api/admin/social`** — `delete::process`

pub(crate) mod delete;
pub(crate) mod save;

use actix_web::web::{patch, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/admin/social";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(save::process))
        .route("", patch().to(delete::process))
}
