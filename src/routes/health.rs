use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::health::{HealthResponse, ServerStatusResponse},
    services::health_service,
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
/// Return the current health status of the backend and ping the player store.
pub async fn healthcheck(State(state): State<SharedState>) -> Json<HealthResponse> {
    let status = health_service::health_status(&state).await;
    Json(status)
}

#[utoipa::path(
    get,
    path = "/api/test",
    tag = "health",
    responses((status = 200, description = "Server answers", body = ServerStatusResponse))
)]
/// Liveness check that never touches the database.
pub async fn server_test() -> Json<ServerStatusResponse> {
    Json(ServerStatusResponse::working())
}

/// Configure the health routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/healthcheck", get(healthcheck))
        .route("/api/test", get(server_test))
}
