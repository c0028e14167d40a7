use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::get,
};
use validator::Validate;

use crate::{
    dto::player::{
        ChangesResponse, CreatePlayerRequest, CreatePlayerResponse, PlayerDetail, PlayerMap,
        UpdatePlayerRequest,
    },
    error::AppError,
    services::player_service,
    state::SharedState,
};

/// Player catalog CRUD, keyed by player name.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/players", get(list_players).post(create_player))
        .route(
            "/api/players/{name}",
            get(get_player).put(update_player).delete(delete_player),
        )
}

/// Retrieve every player as a map keyed by name, in name order.
#[utoipa::path(
    get,
    path = "/api/players",
    tag = "players",
    responses(
        (status = 200, description = "Players keyed by name", body = std::collections::BTreeMap<String, crate::dto::player::PlayerCardDto>),
        (status = 500, description = "Database error")
    )
)]
pub async fn list_players(State(state): State<SharedState>) -> Result<Json<PlayerMap>, AppError> {
    Ok(Json(player_service::list_players(&state).await?))
}

/// Retrieve a single player by name.
#[utoipa::path(
    get,
    path = "/api/players/{name}",
    tag = "players",
    params(("name" = String, Path, description = "Exact player name")),
    responses(
        (status = 200, description = "Player", body = PlayerDetail),
        (status = 404, description = "Player not found")
    )
)]
pub async fn get_player(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<PlayerDetail>, AppError> {
    Ok(Json(player_service::get_player(&state, name).await?))
}

/// Add a player to the catalog.
#[utoipa::path(
    post,
    path = "/api/players",
    tag = "players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 200, description = "Player added", body = CreatePlayerResponse),
        (status = 400, description = "Invalid body or name already taken")
    )
)]
pub async fn create_player(
    State(state): State<SharedState>,
    payload: Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> Result<Json<CreatePlayerResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;
    Ok(Json(player_service::create_player(&state, payload).await?))
}

/// Replace a player's data, optionally renaming it through `newName`.
#[utoipa::path(
    put,
    path = "/api/players/{name}",
    tag = "players",
    params(("name" = String, Path, description = "Current player name")),
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "Player updated", body = ChangesResponse),
        (status = 400, description = "Invalid body or new name already taken"),
        (status = 404, description = "Player not found")
    )
)]
pub async fn update_player(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    payload: Result<Json<UpdatePlayerRequest>, JsonRejection>,
) -> Result<Json<ChangesResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;
    Ok(Json(
        player_service::update_player(&state, name, payload).await?,
    ))
}

/// Remove a player from the catalog.
#[utoipa::path(
    delete,
    path = "/api/players/{name}",
    tag = "players",
    params(("name" = String, Path, description = "Player name")),
    responses(
        (status = 200, description = "Player deleted", body = ChangesResponse),
        (status = 404, description = "Player not found")
    )
)]
pub async fn delete_player(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<ChangesResponse>, AppError> {
    Ok(Json(player_service::delete_player(&state, name).await?))
}
