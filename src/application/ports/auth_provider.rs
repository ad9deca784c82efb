use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

/// Resolves request credentials to a session. `None` means the caller is
/// anonymous and must be rejected.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, bearer_token: Option<&str>) -> Option<Session>;
}
