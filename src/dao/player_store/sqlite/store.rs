use std::time::Duration;

use diesel::{
    connection::SimpleConnection,
    prelude::*,
    r2d2::{ConnectionManager, CustomizeConnection, Error as R2d2Error, Pool},
    result::{DatabaseErrorKind, Error as DieselError},
};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use futures::future::BoxFuture;
use tokio::task::spawn_blocking;
use tracing::{debug, info};

use super::{
    config::SqliteConfig,
    error::{SqliteDaoError, SqliteResult},
    models::{NewPlayerRow, PlayerChangeset, PlayerRow},
    schema::players,
};
use crate::dao::{
    models::{NewPlayerEntity, PlayerEntity, PlayerUpdateEntity},
    player_store::PlayerStore,
    storage::StorageResult,
};

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Pragmas run on every connection the pool opens.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration,
    write_ahead_log: bool,
}

impl CustomizeConnection<SqliteConnection, R2d2Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), R2d2Error> {
        // Writers queue on the lock instead of failing with "database is locked".
        let mut pragmas = format!("PRAGMA busy_timeout = {};", self.busy_timeout.as_millis());
        if self.write_ahead_log {
            pragmas.push_str(" PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
        }
        conn.batch_execute(&pragmas).map_err(R2d2Error::QueryError)
    }
}

/// Player store backed by a pooled SQLite database.
#[derive(Clone)]
pub struct SqlitePlayerStore {
    pool: DbPool,
}

impl SqlitePlayerStore {
    /// Open the database, creating its directory if needed, and apply pending migrations.
    pub async fn connect(config: SqliteConfig) -> SqliteResult<Self> {
        if let Some(path) = config.parent_directory() {
            std::fs::create_dir_all(&path)
                .map_err(|source| SqliteDaoError::CreateDirectory { path, source })?;
        }

        let database_url = config.database_url.clone();
        let mut builder = DbPool::builder()
            .max_size(config.max_pool_size)
            .connection_customizer(Box::new(ConnectionOptions {
                busy_timeout: config.busy_timeout,
                write_ahead_log: !config.is_in_memory(),
            }));
        if config.is_in_memory() {
            // Dropping the only connection would drop the database with it.
            builder = builder.idle_timeout(None).max_lifetime(None);
        }

        let pool = spawn_blocking(move || {
            builder
                .build(ConnectionManager::<SqliteConnection>::new(&database_url))
                .map_err(|source| SqliteDaoError::PoolBuild {
                    database_url,
                    source,
                })
        })
        .await
        .map_err(|source| SqliteDaoError::Join { source })??;

        let store = Self { pool };
        store.run_migrations().await?;
        info!(database = %config.database_url, "SQLite player store ready");
        Ok(store)
    }

    async fn run_migrations(&self) -> SqliteResult<()> {
        self.with_connection(|conn| {
            let applied = conn
                .run_pending_migrations(MIGRATIONS)
                .map_err(|source| SqliteDaoError::Migrations { source })?;
            debug!(count = applied.len(), "applied SQLite migrations");
            Ok(())
        })
        .await
    }

    /// Run blocking diesel work on a pooled connection off the async runtime.
    async fn with_connection<T, F>(&self, work: F) -> SqliteResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> SqliteResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        spawn_blocking(move || {
            let mut conn = pool.get().map_err(|source| SqliteDaoError::Pool { source })?;
            work(&mut conn)
        })
        .await
        .map_err(|source| SqliteDaoError::Join { source })?
    }
}

/// Classify a failed write, surfacing UNIQUE violations on `name` as duplicates.
fn write_error(operation: &'static str, name: &str, source: DieselError) -> SqliteDaoError {
    let duplicate = matches!(
        &source,
        DieselError::DatabaseError(kind, info)
            if matches!(kind, DatabaseErrorKind::UniqueViolation)
                || info.message().contains("UNIQUE constraint failed")
    );

    if duplicate {
        SqliteDaoError::DuplicateName {
            name: name.to_owned(),
        }
    } else {
        SqliteDaoError::Query { operation, source }
    }
}

impl PlayerStore for SqlitePlayerStore {
    fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .with_connection(|conn| {
                    let rows = players::table
                        .order(players::name.asc())
                        .select(PlayerRow::as_select())
                        .load::<PlayerRow>(conn)
                        .map_err(|source| SqliteDaoError::Query {
                            operation: "list players",
                            source,
                        })?;
                    rows.into_iter().map(PlayerRow::into_entity).collect()
                })
                .await
                .map_err(Into::into)
        })
    }

    fn find_player(&self, name: String) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .with_connection(move |conn| {
                    let row = players::table
                        .filter(players::name.eq(&name))
                        .select(PlayerRow::as_select())
                        .first::<PlayerRow>(conn)
                        .optional()
                        .map_err(|source| SqliteDaoError::Query {
                            operation: "load player",
                            source,
                        })?;
                    row.map(PlayerRow::into_entity).transpose()
                })
                .await
                .map_err(Into::into)
        })
    }

    fn insert_player(&self, player: NewPlayerEntity) -> BoxFuture<'static, StorageResult<i64>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .with_connection(move |conn| {
                    let row = NewPlayerRow::from_entity(&player)?;
                    conn.immediate_transaction::<_, DieselError, _>(|conn| {
                        diesel::insert_into(players::table)
                            .values(&row)
                            .execute(conn)?;
                        players::table
                            .filter(players::name.eq(&player.name))
                            .select(players::id)
                            .first::<i32>(conn)
                    })
                    .map(i64::from)
                    .map_err(|source| write_error("insert player", &player.name, source))
                })
                .await
                .map_err(Into::into)
        })
    }

    fn update_player(
        &self,
        name: String,
        update: PlayerUpdateEntity,
    ) -> BoxFuture<'static, StorageResult<usize>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .with_connection(move |conn| {
                    let changeset = PlayerChangeset::from_update(&name, &update)?;
                    diesel::update(players::table.filter(players::name.eq(&name)))
                        .set(&changeset)
                        .execute(conn)
                        .map_err(|source| write_error("update player", changeset.name, source))
                })
                .await
                .map_err(Into::into)
        })
    }

    fn delete_player(&self, name: String) -> BoxFuture<'static, StorageResult<usize>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .with_connection(move |conn| {
                    diesel::delete(players::table.filter(players::name.eq(&name)))
                        .execute(conn)
                        .map_err(|source| SqliteDaoError::Query {
                            operation: "delete player",
                            source,
                        })
                })
                .await
                .map_err(Into::into)
        })
    }

    fn count_players(&self) -> BoxFuture<'static, StorageResult<usize>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .with_connection(|conn| {
                    players::table
                        .count()
                        .get_result::<i64>(conn)
                        .map(|count| usize::try_from(count).unwrap_or_default())
                        .map_err(|source| SqliteDaoError::Query {
                            operation: "count players",
                            source,
                        })
                })
                .await
                .map_err(Into::into)
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .with_connection(|conn| {
                    diesel::sql_query("SELECT 1")
                        .execute(conn)
                        .map(|_| ())
                        .map_err(|source| SqliteDaoError::Query {
                            operation: "ping database",
                            source,
                        })
                })
                .await
                .map_err(Into::into)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;
    use crate::dao::storage::StorageError;

    fn temp_database(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir()
            .join(format!("hoop-story-{label}-{}-{nanos}", std::process::id()))
            .join("players.db")
    }

    async fn store() -> SqlitePlayerStore {
        SqlitePlayerStore::connect(SqliteConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    fn hassan() -> NewPlayerEntity {
        NewPlayerEntity {
            name: "Hassan Whiteside".into(),
            key_word: "White Eyes".into(),
            teams: vec!["SAC".into(), "MIA".into(), "POR".into(), "UTA".into()],
            story: "A (SAC) king. Intense (MIA) heat, (POR) blazing a trail. (UTA) jazz.".into(),
        }
    }

    #[tokio::test]
    async fn insert_then_find_round_trips_teams() {
        let store = store().await;
        let id = store.insert_player(hassan()).await.unwrap();

        let found = store
            .find_player("Hassan Whiteside".into())
            .await
            .unwrap()
            .expect("player stored");
        assert_eq!(found.id, id);
        assert_eq!(found.key_word, "White Eyes");
        assert_eq!(found.teams, vec!["SAC", "MIA", "POR", "UTA"]);
    }

    #[tokio::test]
    async fn duplicate_name_maps_to_conflict() {
        let store = store().await;
        store.insert_player(hassan()).await.unwrap();

        let err = store.insert_player(hassan()).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict { name } if name == "Hassan Whiteside"));
    }

    #[tokio::test]
    async fn list_is_ordered_by_name() {
        let store = store().await;
        for name in ["Garrett Temple", "Earl Boykins", "Chucky Brown"] {
            let mut player = hassan();
            player.name = name.into();
            store.insert_player(player).await.unwrap();
        }

        let names: Vec<String> = store
            .list_players()
            .await
            .unwrap()
            .into_iter()
            .map(|player| player.name)
            .collect();
        assert_eq!(names, vec!["Chucky Brown", "Earl Boykins", "Garrett Temple"]);
        assert_eq!(store.count_players().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn update_and_delete_report_changes() {
        let store = store().await;
        store.insert_player(hassan()).await.unwrap();

        let update = PlayerUpdateEntity {
            new_name: Some("Hassan W.".into()),
            key_word: "White Eyes".into(),
            teams: vec!["SAC".into()],
            story: "A (SAC) king.".into(),
        };
        assert_eq!(
            store.update_player("Hassan Whiteside".into(), update.clone()).await.unwrap(),
            1
        );
        assert_eq!(store.update_player("Nobody".into(), update).await.unwrap(), 0);

        let renamed = store.find_player("Hassan W.".into()).await.unwrap().unwrap();
        assert_eq!(renamed.teams, vec!["SAC"]);

        assert_eq!(store.delete_player("Hassan W.".into()).await.unwrap(), 1);
        assert_eq!(store.delete_player("Hassan W.".into()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn rename_onto_existing_name_is_a_conflict() {
        let store = store().await;
        store.insert_player(hassan()).await.unwrap();
        let mut temple = hassan();
        temple.name = "Garrett Temple".into();
        store.insert_player(temple).await.unwrap();

        let update = PlayerUpdateEntity {
            new_name: Some("Hassan Whiteside".into()),
            key_word: "Temple Run".into(),
            teams: vec!["SAC".into()],
            story: "A (SAC) king.".into(),
        };
        let err = store
            .update_player("Garrett Temple".into(), update)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict { name } if name == "Hassan Whiteside"));

        let untouched = store.find_player("Garrett Temple".into()).await.unwrap().unwrap();
        assert_eq!(untouched.teams, vec!["SAC", "MIA", "POR", "UTA"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_on_a_file_database_all_succeed() {
        let path = temp_database("concurrent");
        let store = SqlitePlayerStore::connect(SqliteConfig::new(path.to_string_lossy()))
            .await
            .unwrap();

        let tasks: Vec<_> = (0..64)
            .map(|index| {
                let store = store.clone();
                tokio::spawn(async move {
                    let mut player = hassan();
                    player.name = format!("Player {index:02}");
                    store.insert_player(player).await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(store.count_players().await.unwrap(), 64);

        drop(store);
        if let Some(directory) = path.parent() {
            let _ = std::fs::remove_dir_all(directory);
        }
    }

    #[tokio::test]
    async fn corrupt_teams_column_is_a_query_error() {
        let store = store().await;
        store
            .with_connection(|conn| {
                diesel::sql_query(
                    "INSERT INTO players (name, keyWord, teams, story) VALUES ('Broken', 'x', 'CHI', 'y')",
                )
                .execute(conn)
                .map(|_| ())
                .map_err(|source| SqliteDaoError::Query {
                    operation: "seed corrupt row",
                    source,
                })
            })
            .await
            .unwrap();

        let err = store.find_player("Broken".into()).await.unwrap_err();
        assert!(matches!(err, StorageError::Query { .. }));
    }

    #[tokio::test]
    async fn health_check_succeeds_on_open_database() {
        let store = store().await;
        store.health_check().await.unwrap();
    }
}
