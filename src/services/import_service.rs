//! Built-in player data: the bulk import roster and the first-start sample.

use tracing::{info, warn};

use crate::{
    dao::{models::NewPlayerEntity, player_store::PlayerStore, storage::StorageError},
    dto::player::{PlayerCardDto, PlayerMap},
    error::ServiceError,
};

const ROSTER_JSON: &str = include_str!("roster.json");
const SAMPLE_PLAYER_JSON: &str = include_str!("sample_player.json");

/// Players inserted by the `import-players` binary.
pub fn roster() -> Result<PlayerMap, serde_json::Error> {
    serde_json::from_str(ROSTER_JSON)
}

/// Player inserted on first start when the database is empty.
pub fn sample_player() -> Result<PlayerMap, serde_json::Error> {
    serde_json::from_str(SAMPLE_PLAYER_JSON)
}

/// Outcome of a bulk import, by player name.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: Vec<String>,
    /// Names already present in the store.
    pub skipped: Vec<String>,
    /// Names whose insert failed, with the error message.
    pub failed: Vec<(String, String)>,
}

fn new_player(name: String, card: PlayerCardDto) -> NewPlayerEntity {
    NewPlayerEntity {
        name,
        key_word: card.key_word,
        teams: card.teams,
        story: card.story,
    }
}

/// Insert each player in order, skipping names that already exist.
///
/// A failure on one player is recorded and the import moves on.
pub async fn import_players(store: &dyn PlayerStore, players: PlayerMap) -> ImportReport {
    let mut report = ImportReport::default();

    for (name, card) in players {
        match store.find_player(name.clone()).await {
            Ok(Some(_)) => {
                info!(player = %name, "skipping player, already exists");
                report.skipped.push(name);
                continue;
            }
            Ok(None) => {}
            Err(err) => {
                warn!(player = %name, error = %err, "failed to check player");
                report.failed.push((name, err.to_string()));
                continue;
            }
        }

        let team_count = card.teams.len();
        match store.insert_player(new_player(name.clone(), card)).await {
            Ok(id) => {
                info!(player = %name, id, teams = team_count, "imported player");
                report.imported.push(name);
            }
            Err(StorageError::Conflict { .. }) => {
                info!(player = %name, "skipping player, already exists");
                report.skipped.push(name);
            }
            Err(err) => {
                warn!(player = %name, error = %err, "failed to import player");
                report.failed.push((name, err.to_string()));
            }
        }
    }

    report
}

/// Insert the sample player when the store holds no player yet; returns whether it did.
pub async fn seed_sample_if_empty(store: &dyn PlayerStore) -> Result<bool, ServiceError> {
    if store.count_players().await? > 0 {
        return Ok(false);
    }

    let sample = sample_player().map_err(|err| {
        ServiceError::InvalidInput(format!("built-in sample player is malformed: {err}"))
    })?;
    for (name, card) in sample {
        store.insert_player(new_player(name.clone(), card)).await?;
        info!(player = %name, "seeded sample player");
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dao::player_store::memory::MemoryPlayerStore, game::story_mismatches};

    #[test]
    fn built_in_players_respect_story_order() {
        let roster = roster().unwrap();
        assert_eq!(roster.len(), 9);
        let sample = sample_player().unwrap();
        assert!(sample.contains_key("Jamal Crawford"));

        for (name, card) in roster.iter().chain(sample.iter()) {
            assert!(
                story_mismatches(&card.story, &card.teams).is_empty(),
                "{name} story skips a team"
            );
        }
    }

    #[tokio::test]
    async fn second_import_skips_everyone() {
        let store = MemoryPlayerStore::new();
        let first = import_players(&store, roster().unwrap()).await;
        assert_eq!(first.imported.len(), 9);
        assert!(first.skipped.is_empty() && first.failed.is_empty());

        let second = import_players(&store, roster().unwrap()).await;
        assert!(second.imported.is_empty());
        assert_eq!(second.skipped.len(), 9);
        assert_eq!(store.count_players().await.unwrap(), 9);
    }

    #[tokio::test]
    async fn seeding_only_happens_on_empty_store() {
        let store = MemoryPlayerStore::new();
        assert!(seed_sample_if_empty(&store).await.unwrap());
        assert!(!seed_sample_if_empty(&store).await.unwrap());
        assert_eq!(store.count_players().await.unwrap(), 1);
    }
}
