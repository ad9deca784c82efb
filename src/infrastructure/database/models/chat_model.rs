use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::entities::Chat;
use crate::domain::value_objects::Visibility;
use crate::infrastructure::database::schema::chats;

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = chats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChatModel {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub visibility: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Chat> for ChatModel {
    fn from(chat: &Chat) -> Self {
        Self {
            id: chat.id().to_string(),
            user_id: chat.user_id().to_string(),
            title: chat.title().to_string(),
            visibility: chat.visibility().as_str().to_string(),
            created_at: chat.created_at(),
        }
    }
}

impl TryFrom<ChatModel> for Chat {
    type Error = String;

    fn try_from(model: ChatModel) -> Result<Self, Self::Error> {
        let visibility = Visibility::from_string(&model.visibility)?;
        Ok(Chat::restore(
            model.id,
            model.user_id,
            model.title,
            visibility,
            model.created_at,
        ))
    }
}
