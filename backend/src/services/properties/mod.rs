//! # Property Service
//!
//! Write endpoints for property listings. Listings are replaced wholesale on
//! every save — the editor always submits the entire record, including
//! availability toggles from the list view — and are only ever soft-deleted.
//!
//! ## Registered Routes
//!
//! *   **`POST /api/admin/properties`** — `save::process`: upsert one
//!     listing from an editor draft. Required fields are validated before
//!     anything is written; the persisted `Property` is returned.
//! *   **`PATCH /api/admin/properties`** — `delete::process`: soft-delete
//!     by id.

pub(crate) mod delete;
pub(crate) mod save;

use actix_web::web::{patch, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/admin/properties";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(save::process))
        .route("", patch().to(delete::process))
}
