mod config;
mod error;
mod models;
mod schema;
mod store;

pub use config::SqliteConfig;
pub use error::SqliteDaoError;
pub use store::SqlitePlayerStore;

use crate::dao::storage::StorageError;

impl From<SqliteDaoError> for StorageError {
    fn from(err: SqliteDaoError) -> Self {
        match err {
            SqliteDaoError::DuplicateName { name } => StorageError::Conflict { name },
            SqliteDaoError::Query { .. }
            | SqliteDaoError::EncodeTeams { .. }
            | SqliteDaoError::DecodeTeams { .. } => StorageError::query(err.to_string(), err),
            SqliteDaoError::Pool { .. }
            | SqliteDaoError::PoolBuild { .. }
            | SqliteDaoError::Migrations { .. }
            | SqliteDaoError::CreateDirectory { .. }
            | SqliteDaoError::Join { .. } => StorageError::unavailable(err.to_string(), err),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use serde_json::Value;

    use super::*;
    use crate::error::{AppError, ServiceError};

    #[tokio::test]
    async fn query_failures_pass_the_database_message_through() {
        let err = SqliteDaoError::Query {
            operation: "insert player",
            source: DieselError::DatabaseError(
                DatabaseErrorKind::Unknown,
                Box::new(String::from("disk I/O error")),
            ),
        };

        let response = AppError::from(ServiceError::from(StorageError::from(err))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("insert player"), "{message}");
        assert!(message.contains("disk I/O error"), "{message}");
    }

    #[test]
    fn duplicate_names_become_conflicts() {
        let err = StorageError::from(SqliteDaoError::DuplicateName {
            name: "Ish Smith".into(),
        });
        assert!(matches!(err, StorageError::Conflict { name } if name == "Ish Smith"));
    }
}
