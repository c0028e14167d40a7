use axum::Router;
use tower_http::services::ServeDir;

use crate::state::SharedState;

pub mod docs;
pub mod health;
pub mod players;

/// Compose all route trees, wiring in shared state, documentation and the static client.
pub fn router(state: SharedState) -> Router<()> {
    let static_files = ServeDir::new(&state.config().static_dir);

    health::router()
        .merge(players::router())
        .merge(docs::router())
        .fallback_service(static_files)
        .with_state(state)
}
