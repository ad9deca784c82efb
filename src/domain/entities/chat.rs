use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Visibility;

const TITLE_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    id: String,
    user_id: String,
    title: String,
    visibility: Visibility,
    created_at: DateTime<Utc>,
}

impl Chat {
    pub fn new(id: String, user_id: String, title: String, visibility: Visibility) -> Self {
        Self {
            id,
            user_id,
            title,
            visibility,
            created_at: Utc::now(),
        }
    }

    /// Starts a chat titled after the first question asked in it.
    pub fn from_first_question(
        id: String,
        user_id: String,
        question: &str,
        visibility: Visibility,
    ) -> Self {
        Self::new(id, user_id, Self::title_from_question(question), visibility)
    }

    pub fn restore(
        id: String,
        user_id: String,
        title: String,
        visibility: Visibility,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            visibility,
            created_at,
        }
    }

    pub fn title_from_question(question: &str) -> String {
        let mut title: String = question.chars().take(TITLE_MAX_CHARS).collect();
        if question.chars().count() > TITLE_MAX_CHARS {
            title.push_str("...");
        }
        title
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// Owners always read; everyone else only when the chat is public.
    pub fn is_readable_by(&self, user_id: &str) -> bool {
        self.is_owned_by(user_id) || self.visibility.is_public()
    }

    /// Mutation is owner-only regardless of visibility.
    pub fn is_modifiable_by(&self, user_id: &str) -> bool {
        self.is_owned_by(user_id)
    }
}
