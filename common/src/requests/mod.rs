use serde::{Deserialize, Serialize};

/// Payload of every soft-delete `PATCH` endpoint: only the entity id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: String,
}
