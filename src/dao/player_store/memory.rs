//! Process-local player store, used by tests and builds without SQLite.

use std::{collections::BTreeMap, sync::Arc};

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::dao::{
    models::{NewPlayerEntity, PlayerEntity, PlayerUpdateEntity},
    player_store::PlayerStore,
    storage::{StorageError, StorageResult},
};

/// Player store kept in process memory, ordered by name.
#[derive(Clone, Default)]
pub struct MemoryPlayerStore {
    inner: Arc<RwLock<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    // Keyed by name so iteration matches `ORDER BY name`.
    players: BTreeMap<String, PlayerEntity>,
}

impl MemoryPlayerStore {
    /// Empty store whose ids start at 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerStore for MemoryPlayerStore {
    fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let guard = store.inner.read().await;
            Ok(guard.players.values().cloned().collect())
        })
    }

    fn find_player(&self, name: String) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let guard = store.inner.read().await;
            Ok(guard.players.get(&name).cloned())
        })
    }

    fn insert_player(&self, player: NewPlayerEntity) -> BoxFuture<'static, StorageResult<i64>> {
        let store = self.clone();
        Box::pin(async move {
            let mut guard = store.inner.write().await;
            if guard.players.contains_key(&player.name) {
                return Err(StorageError::Conflict { name: player.name });
            }

            guard.last_id += 1;
            let id = guard.last_id;
            guard.players.insert(player.name.clone(), player.with_id(id));
            Ok(id)
        })
    }

    fn update_player(
        &self,
        name: String,
        update: PlayerUpdateEntity,
    ) -> BoxFuture<'static, StorageResult<usize>> {
        let store = self.clone();
        Box::pin(async move {
            let mut guard = store.inner.write().await;
            if !guard.players.contains_key(&name) {
                return Ok(0);
            }

            let target = update.target_name(&name).to_owned();
            if target != name && guard.players.contains_key(&target) {
                return Err(StorageError::Conflict { name: target });
            }

            let Some(existing) = guard.players.remove(&name) else {
                return Ok(0);
            };

            let replacement = PlayerEntity {
                id: existing.id,
                name: target.clone(),
                key_word: update.key_word,
                teams: update.teams,
                story: update.story,
            };
            guard.players.insert(target, replacement);
            Ok(1)
        })
    }

    fn delete_player(&self, name: String) -> BoxFuture<'static, StorageResult<usize>> {
        let store = self.clone();
        Box::pin(async move {
            let mut guard = store.inner.write().await;
            Ok(usize::from(guard.players.remove(&name).is_some()))
        })
    }

    fn count_players(&self) -> BoxFuture<'static, StorageResult<usize>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.inner.read().await.players.len()) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
