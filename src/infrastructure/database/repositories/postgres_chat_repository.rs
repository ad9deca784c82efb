use async_trait::async_trait;
use diesel::prelude::*;

use super::run_blocking;
use crate::domain::entities::Chat;
use crate::domain::repositories::{ChatRepository, RepositoryError};
use crate::infrastructure::database::DbPool;
use crate::infrastructure::database::models::ChatModel;
use crate::infrastructure::database::schema::chats;

pub struct PostgresChatRepository {
    pool: DbPool,
}

impl PostgresChatRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PostgresChatRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Chat>, RepositoryError> {
        let chat_id = id.to_string();
        let model = run_blocking(&self.pool, move |conn| {
            chats::table
                .find(chat_id)
                .select(ChatModel::as_select())
                .first(conn)
                .optional()
        })
        .await?;

        model
            .map(Chat::try_from)
            .transpose()
            .map_err(RepositoryError::ValidationError)
    }

    async fn save_if_absent(&self, chat: &Chat) -> Result<bool, RepositoryError> {
        let model = ChatModel::from(chat);
        let inserted = run_blocking(&self.pool, move |conn| {
            diesel::insert_into(chats::table)
                .values(&model)
                .on_conflict(chats::id)
                .do_nothing()
                .execute(conn)
        })
        .await?;

        Ok(inserted == 1)
    }
}
