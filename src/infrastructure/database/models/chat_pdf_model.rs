use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::entities::ChatPdfLink;
use crate::infrastructure::database::schema::chat_pdfs;

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = chat_pdfs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChatPdfModel {
    pub chat_id: String,
    pub pdf_id: String,
    pub added_at: DateTime<Utc>,
}

impl From<&ChatPdfLink> for ChatPdfModel {
    fn from(link: &ChatPdfLink) -> Self {
        Self {
            chat_id: link.chat_id().to_string(),
            pdf_id: link.pdf_id().to_string(),
            added_at: link.added_at(),
        }
    }
}

impl From<ChatPdfModel> for ChatPdfLink {
    fn from(model: ChatPdfModel) -> Self {
        ChatPdfLink::restore(model.chat_id, model.pdf_id, model.added_at)
    }
}
