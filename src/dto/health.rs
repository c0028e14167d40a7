use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: String,
}

impl HealthResponse {
    /// Create a health response indicating the player store answers.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    /// Create a health response indicating the player store does not answer.
    pub fn degraded() -> Self {
        Self {
            status: "degraded".to_string(),
        }
    }
}

/// Liveness message returned by `/api/test`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServerStatusResponse {
    pub message: String,
}

impl ServerStatusResponse {
    /// Fixed reply of the `/api/test` route.
    pub fn working() -> Self {
        Self {
            message: "Server is working!".to_string(),
        }
    }
}
