use async_trait::async_trait;
use diesel::prelude::*;

use super::run_blocking;
use crate::domain::entities::Message;
use crate::domain::repositories::{MessageRepository, RepositoryError};
use crate::infrastructure::database::DbPool;
use crate::infrastructure::database::models::MessageModel;
use crate::infrastructure::database::schema::messages;

pub struct PostgresMessageRepository {
    pool: DbPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn save_all(&self, messages: &[Message]) -> Result<(), RepositoryError> {
        if messages.is_empty() {
            return Ok(());
        }

        let models: Vec<MessageModel> = messages.iter().map(MessageModel::from).collect();
        run_blocking(&self.pool, move |conn| {
            diesel::insert_into(messages::table)
                .values(&models)
                .execute(conn)
        })
        .await?;

        Ok(())
    }

    async fn find_by_chat_id(&self, chat_id: &str) -> Result<Vec<Message>, RepositoryError> {
        let chat_id = chat_id.to_string();
        let models = run_blocking(&self.pool, move |conn| {
            messages::table
                .filter(messages::chat_id.eq(chat_id))
                .order(messages::created_at.asc())
                .select(MessageModel::as_select())
                .load(conn)
        })
        .await?;

        models
            .into_iter()
            .map(Message::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::ValidationError)
    }
}
