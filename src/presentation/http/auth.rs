use axum::http::{HeaderMap, header::AUTHORIZATION};

use crate::application::ports::{AuthProvider, Session};
use crate::presentation::http::errors::AppError;

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub async fn require_session(
    provider: &dyn AuthProvider,
    headers: &HeaderMap,
) -> Result<Session, AppError> {
    provider
        .authenticate(bearer_token(headers))
        .await
        .ok_or(AppError::Unauthorized)
}
