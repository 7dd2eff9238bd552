//! # Section Item Service
//!
//! Write endpoints for the child entities owned by a section (about stats,
//! why reasons, services, testimonials). Upsert and soft-delete are generic
//! over the item kind named in the path; the typed models in `common` do the
//! per-kind validation.
//!
//! ## Registered Routes
//!
//! *   **`POST /api/admin/items/{kind}`** — `save::process`: create or
//!     update one item. The payload must carry the owning section's id.
//! *   **`PATCH /api/admin/items/{kind}`** — `delete::process`: soft-delete
//!     by id. The row stays in the database with its `deleted` flag set and
//!     disappears from the next aggregate read. Deleting the last item of a
//!     section leaves the section itself untouched.

pub(crate) mod delete;
pub(crate) mod save;

use actix_web::web::{patch, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/admin/items";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{kind}", post().to(save::process))
        .route("/{kind}", patch().to(delete::process))
}
