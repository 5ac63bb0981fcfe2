// src/api/schemas.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Group not found")]
    pub detail: String,

    /// Error code for programmatic handling
    #[schema(example = "GROUP_NOT_FOUND")]
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Logged out successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Confirmation for single and bulk deletes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "Group deleted successfully")]
    pub message: String,

    #[schema(example = 1)]
    pub deleted_count: u64,
}

impl DeleteResponse {
    pub fn new(message: impl Into<String>, deleted_count: u64) -> Self {
        Self {
            message: message.into(),
            deleted_count,
        }
    }
}

/// Query flag shared by membership listings
#[derive(Debug, Default, Deserialize, ToSchema, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IncludeDeletedQuery {
    /// Include soft-deleted memberships
    #[serde(default)]
    pub include_deleted: bool,
}
