use async_trait::async_trait;
use diesel::prelude::*;

use super::run_blocking;
use crate::domain::entities::ChatPdfLink;
use crate::domain::repositories::{ChatPdfRepository, RepositoryError};
use crate::infrastructure::database::DbPool;
use crate::infrastructure::database::models::ChatPdfModel;
use crate::infrastructure::database::schema::chat_pdfs;

pub struct PostgresChatPdfRepository {
    pool: DbPool,
}

impl PostgresChatPdfRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatPdfRepository for PostgresChatPdfRepository {
    async fn find_by_chat_id(&self, chat_id: &str) -> Result<Vec<ChatPdfLink>, RepositoryError> {
        let chat_id = chat_id.to_string();
        let models = run_blocking(&self.pool, move |conn| {
            chat_pdfs::table
                .filter(chat_pdfs::chat_id.eq(chat_id))
                .order(chat_pdfs::added_at.asc())
                .select(ChatPdfModel::as_select())
                .load(conn)
        })
        .await?;

        Ok(models.into_iter().map(ChatPdfLink::from).collect())
    }

    async fn add(&self, link: &ChatPdfLink) -> Result<(), RepositoryError> {
        let model = ChatPdfModel::from(link);
        run_blocking(&self.pool, move |conn| {
            diesel::insert_into(chat_pdfs::table)
                .values(&model)
                .on_conflict_do_nothing()
                .execute(conn)
        })
        .await?;

        Ok(())
    }

    async fn remove(&self, chat_id: &str, pdf_id: &str) -> Result<bool, RepositoryError> {
        let chat_id = chat_id.to_string();
        let pdf_id = pdf_id.to_string();
        let deleted = run_blocking(&self.pool, move |conn| {
            diesel::delete(
                chat_pdfs::table
                    .filter(chat_pdfs::chat_id.eq(chat_id))
                    .filter(chat_pdfs::pdf_id.eq(pdf_id)),
            )
            .execute(conn)
        })
        .await?;

        Ok(deleted > 0)
    }

    async fn replace(&self, chat_id: &str, links: &[ChatPdfLink]) -> Result<(), RepositoryError> {
        let chat_id = chat_id.to_string();
        let models: Vec<ChatPdfModel> = links.iter().map(ChatPdfModel::from).collect();

        run_blocking(&self.pool, move |conn| {
            conn.transaction(|conn| {
                diesel::delete(chat_pdfs::table.filter(chat_pdfs::chat_id.eq(&chat_id)))
                    .execute(conn)?;
                if !models.is_empty() {
                    diesel::insert_into(chat_pdfs::table)
                        .values(&models)
                        .execute(conn)?;
                }
                Ok(())
            })
        })
        .await
    }
}
