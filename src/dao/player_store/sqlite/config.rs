use std::{
    path::{Path, PathBuf},
    time::Duration,
};

const IN_MEMORY: &str = ":memory:";
const DEFAULT_POOL_SIZE: u32 = 8;
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Runtime configuration describing which SQLite database to open.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub database_url: String,
    pub max_pool_size: u32,
    /// How long a connection waits for another connection's write lock.
    pub busy_timeout: Duration,
}

impl SqliteConfig {
    /// Target a database file (or `:memory:`), sizing the pool accordingly.
    pub fn new(database_url: impl Into<String>) -> Self {
        let database_url = database_url.into();
        // Every connection to `:memory:` opens its own database.
        let max_pool_size = if database_url == IN_MEMORY {
            1
        } else {
            DEFAULT_POOL_SIZE
        };
        Self {
            database_url,
            max_pool_size,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Private in-memory database, mostly useful for tests.
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    /// Whether the target is a private `:memory:` database.
    pub fn is_in_memory(&self) -> bool {
        self.database_url == IN_MEMORY
    }

    /// Directory that must exist before SQLite can create the database file.
    pub(super) fn parent_directory(&self) -> Option<PathBuf> {
        if self.is_in_memory() || self.database_url.starts_with("file:") {
            return None;
        }

        Path::new(&self.database_url)
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_database_uses_a_single_connection() {
        let config = SqliteConfig::in_memory();
        assert_eq!(config.max_pool_size, 1);
        assert_eq!(config.parent_directory(), None);
    }

    #[test]
    fn file_database_reports_its_directory() {
        let config = SqliteConfig::new("./data/players.db");
        assert_eq!(config.max_pool_size, DEFAULT_POOL_SIZE);
        assert_eq!(config.busy_timeout, DEFAULT_BUSY_TIMEOUT);
        assert_eq!(config.parent_directory(), Some(PathBuf::from("./data")));
        assert_eq!(SqliteConfig::new("players.db").parent_directory(), None);
    }
}
