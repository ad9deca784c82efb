use async_trait::async_trait;
use std::collections::HashMap;

use crate::application::ports::{AuthProvider, Session};

/// Single-user mode: every request is the same local user.
pub struct LocalAuthProvider {
    user_id: String,
}

impl LocalAuthProvider {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    async fn authenticate(&self, _bearer_token: Option<&str>) -> Option<Session> {
        Some(Session {
            user_id: self.user_id.clone(),
        })
    }
}

/// Static bearer tokens mapped to user ids.
pub struct TokenAuthProvider {
    tokens: HashMap<String, String>,
}

impl TokenAuthProvider {
    pub fn new(tokens: HashMap<String, String>) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl AuthProvider for TokenAuthProvider {
    async fn authenticate(&self, bearer_token: Option<&str>) -> Option<Session> {
        let token = bearer_token?;
        self.tokens.get(token).map(|user_id| Session {
            user_id: user_id.clone(),
        })
    }
}
