//! # Site Aggregate Service
//!
//! Serves the single `SiteDocument` that the public pages and the admin
//! dashboard both render from. The aggregate bundles every section, child
//! item, property and social link into one JSON response so the client only
//! issues one read per page load.
//!
//! ## Registered Routes
//!
//! *   **`GET /api/site`**:
//!     - **Handler**: `get::process`
//!     - **Description**: Returns the full aggregate. If no root record
//!       exists yet (cold start, empty database), one is seeded together
//!       with the default admin user before the first response, so the
//!       endpoint is idempotent from the very first request. Responses carry
//!       short-lived cache headers to keep the marketing pages cheap.

pub(crate) mod get;
pub(crate) mod seed;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/site";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}
