pub mod postgres_chat_pdf_repository;
pub mod postgres_chat_repository;
pub mod postgres_message_repository;

pub use postgres_chat_pdf_repository::PostgresChatPdfRepository;
pub use postgres_chat_repository::PostgresChatRepository;
pub use postgres_message_repository::PostgresMessageRepository;

use diesel::{PgConnection, QueryResult};

use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::{DbPool, get_connection_from_pool};

/// Runs a diesel query on a pooled connection off the async executor.
async fn run_blocking<T, F>(pool: &DbPool, query: F) -> Result<T, RepositoryError>
where
    T: Send + 'static,
    F: FnOnce(&mut PgConnection) -> QueryResult<T> + Send + 'static,
{
    let pool = pool.clone();

    tokio::task::spawn_blocking(move || {
        let mut conn = get_connection_from_pool(&pool)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        query(&mut *conn).map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    })
    .await
    .map_err(|e| RepositoryError::DatabaseError(format!("Task join error: {}", e)))?
}
