//! # Asset Upload Service
//!
//! Accepts image and document uploads from the admin dashboard and hands
//! back the public URL the content entities store as an opaque reference.
//! Files live under [`UPLOADS_DIR`] and are served by `actix-files` from
//! `/uploads/` (wired in `main.rs`).

pub(crate) mod upload;

pub use upload::UPLOADS_DIR;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/assets";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/upload", post().to(upload::process))
}
