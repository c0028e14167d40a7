//! Business logic behind the `/api/players` routes.

use tracing::{debug, info, warn};

use crate::{
    dao::models::{NewPlayerEntity, PlayerUpdateEntity},
    dto::player::{
        ChangesResponse, CreatePlayerRequest, CreatePlayerResponse, PLAYER_ADDED, PLAYER_DELETED,
        PLAYER_UPDATED, PlayerCardDto, PlayerDetail, PlayerMap, UpdatePlayerRequest,
    },
    error::ServiceError,
    game::story_mismatches,
    state::SharedState,
};

const PLAYER_NOT_FOUND: &str = "Player not found";

fn not_found() -> ServiceError {
    ServiceError::NotFound(PLAYER_NOT_FOUND.into())
}

/// Stories that skip a team break segment lookup for it; keep the row but say so.
fn warn_on_story_mismatch(name: &str, teams: &[String], story: &str) {
    let missing = story_mismatches(story, teams);
    if !missing.is_empty() {
        warn!(player = %name, teams = ?missing, "story does not mention every team in order");
    }
}

/// Every player keyed by name, in name order.
pub async fn list_players(state: &SharedState) -> Result<PlayerMap, ServiceError> {
    let players = state.store().list_players().await?;
    debug!(count = players.len(), "listed players");
    Ok(players
        .into_iter()
        .map(|player| (player.name.clone(), PlayerCardDto::from(player)))
        .collect())
}

/// Load one player by exact name; a miss is "Player not found".
pub async fn get_player(state: &SharedState, name: String) -> Result<PlayerDetail, ServiceError> {
    state
        .store()
        .find_player(name)
        .await?
        .map(PlayerDetail::from)
        .ok_or_else(not_found)
}

/// Insert a player; an existing name is reported as a conflict.
pub async fn create_player(
    state: &SharedState,
    request: CreatePlayerRequest,
) -> Result<CreatePlayerResponse, ServiceError> {
    let player = NewPlayerEntity::from(request);
    warn_on_story_mismatch(&player.name, &player.teams, &player.story);

    let name = player.name.clone();
    let id = state.store().insert_player(player).await?;
    info!(player = %name, id, "player added");

    Ok(CreatePlayerResponse {
        id,
        message: PLAYER_ADDED.into(),
    })
}

/// Replace the player named `name`, renaming it when `newName` is set.
pub async fn update_player(
    state: &SharedState,
    name: String,
    request: UpdatePlayerRequest,
) -> Result<ChangesResponse, ServiceError> {
    let update = PlayerUpdateEntity::from(request);
    let target = update.target_name(&name).to_owned();
    warn_on_story_mismatch(&target, &update.teams, &update.story);

    let changes = state.store().update_player(name.clone(), update).await?;
    if changes == 0 {
        return Err(not_found());
    }
    info!(player = %name, renamed_to = %target, "player updated");

    Ok(ChangesResponse {
        message: PLAYER_UPDATED.into(),
        changes,
    })
}

/// Delete a player by name and report the number of removed rows.
pub async fn delete_player(
    state: &SharedState,
    name: String,
) -> Result<ChangesResponse, ServiceError> {
    let changes = state.store().delete_player(name.clone()).await?;
    if changes == 0 {
        return Err(not_found());
    }
    info!(player = %name, "player deleted");

    Ok(ChangesResponse {
        message: PLAYER_DELETED.into(),
        changes,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{config::AppConfig, dao::player_store::memory::MemoryPlayerStore, state::AppState};

    fn state() -> SharedState {
        AppState::new(Arc::new(MemoryPlayerStore::new()), AppConfig::default())
    }

    fn request(name: &str) -> CreatePlayerRequest {
        CreatePlayerRequest {
            name: name.into(),
            key_word: "Fish".into(),
            teams: vec!["DET".into(), "WAS".into()],
            story: "A (DET) line. The (WAS) monument.".into(),
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let state = state();
        let created = create_player(&state, request("Ish Smith")).await.unwrap();
        assert_eq!(created.message, "Player added successfully");

        let detail = get_player(&state, "Ish Smith".into()).await.unwrap();
        assert_eq!(detail.teams, vec!["DET", "WAS"]);
    }

    #[tokio::test]
    async fn duplicate_create_is_a_conflict() {
        let state = state();
        create_player(&state, request("Ish Smith")).await.unwrap();
        let err = create_player(&state, request("Ish Smith")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn unknown_names_are_not_found() {
        let state = state();
        assert!(matches!(
            get_player(&state, "Nobody".into()).await,
            Err(ServiceError::NotFound(message)) if message == "Player not found"
        ));
        assert!(matches!(
            delete_player(&state, "Nobody".into()).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn story_mismatch_is_stored_anyway() {
        let state = state();
        let mut player = request("Ish Smith");
        player.story = "No codes at all.".into();
        create_player(&state, player).await.unwrap();
        assert!(get_player(&state, "Ish Smith".into()).await.is_ok());
    }
}
