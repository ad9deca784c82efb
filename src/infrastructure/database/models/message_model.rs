use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::entities::Message;
use crate::domain::value_objects::MessageRole;
use crate::infrastructure::database::schema::messages;

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageModel {
    pub id: String,
    pub chat_id: String,
    pub role: String,
    pub content: String,
    pub parts: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl From<&Message> for MessageModel {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            chat_id: message.chat_id().to_string(),
            role: message.role().as_str().to_string(),
            content: message.content().to_string(),
            parts: message.parts().clone(),
            created_at: message.created_at(),
        }
    }
}

impl TryFrom<MessageModel> for Message {
    type Error = String;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        let role = MessageRole::from_string(&model.role)?;
        Ok(Message::restore(
            model.id,
            model.chat_id,
            role,
            model.content,
            model.parts,
            model.created_at,
        ))
    }
}
