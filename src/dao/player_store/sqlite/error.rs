//! Error types shared by the SQLite storage implementation.

use std::{error::Error, path::PathBuf};

use diesel::r2d2::PoolError;
use thiserror::Error;

/// Convenient result alias returning [`SqliteDaoError`] failures.
pub type SqliteResult<T> = Result<T, SqliteDaoError>;

/// Failures that can occur while interacting with SQLite.
#[derive(Debug, Error)]
pub enum SqliteDaoError {
    /// The directory holding the database file could not be created.
    #[error("failed to create database directory `{}`", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The connection pool could not be built.
    #[error("failed to open SQLite database `{database_url}`")]
    PoolBuild {
        database_url: String,
        #[source]
        source: PoolError,
    },
    /// No pooled connection could be checked out.
    #[error("failed to acquire a SQLite connection")]
    Pool {
        #[source]
        source: PoolError,
    },
    /// Embedded migrations failed to apply.
    #[error("failed to run SQLite migrations")]
    Migrations {
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The blocking task running a statement panicked or was cancelled.
    #[error("SQLite worker task failed")]
    Join {
        #[source]
        source: tokio::task::JoinError,
    },
    /// A player with the same name already exists.
    #[error("player `{name}` already exists")]
    DuplicateName { name: String },
    /// SQLite rejected a statement.
    #[error("failed to {operation}: {source}")]
    Query {
        operation: &'static str,
        #[source]
        source: diesel::result::Error,
    },
    #[error("failed to encode teams of player `{name}`")]
    EncodeTeams {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    /// The stored teams column is not a JSON array of strings.
    #[error("stored teams of player `{name}` are not a JSON string array")]
    DecodeTeams {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
