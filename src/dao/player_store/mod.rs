pub mod memory;
#[cfg(feature = "sqlite-store")]
pub mod sqlite;

use futures::future::BoxFuture;

use crate::dao::{
    models::{NewPlayerEntity, PlayerEntity, PlayerUpdateEntity},
    storage::StorageResult,
};

/// Abstraction over the persistence layer for the player catalog.
///
/// Every operation is an independent call; backends never hold a transaction
/// across two of them, so concurrent edits resolve as last write wins.
pub trait PlayerStore: Send + Sync {
    /// All players ordered by name.
    fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>>;
    fn find_player(&self, name: String) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>>;
    /// Insert a player and return its row id; duplicate names yield [`StorageError::Conflict`].
    ///
    /// [`StorageError::Conflict`]: crate::dao::storage::StorageError::Conflict
    fn insert_player(&self, player: NewPlayerEntity) -> BoxFuture<'static, StorageResult<i64>>;
    /// Replace the player named `name`, returning the number of rows changed.
    fn update_player(
        &self,
        name: String,
        update: PlayerUpdateEntity,
    ) -> BoxFuture<'static, StorageResult<usize>>;
    /// Remove the player named `name`, returning the number of rows deleted.
    fn delete_player(&self, name: String) -> BoxFuture<'static, StorageResult<usize>>;
    fn count_players(&self) -> BoxFuture<'static, StorageResult<usize>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
