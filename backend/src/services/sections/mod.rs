//! # Section Upsert Service
//!
//! One generic endpoint covers every scalar content section instead of a
//! copy-pasted handler per kind: the path parameter names the kind, the
//! payload carries the full section. Each kind still gets its own URL, so
//! the dashboard's editor table maps one-to-one onto routes.
//!
//! ## Registered Routes
//!
//! *   **`POST /api/admin/sections/{kind}`**:
//!     - **Handler**: `save::process`
//!     - **Description**: Creates or updates the single row of the given
//!       section kind. The payload is validated against the kind's typed
//!       model before anything is written; the persisted entity (with its
//!       final id) is echoed back as JSON.

pub(crate) mod save;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/admin/sections";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{kind}", post().to(save::process))
}
