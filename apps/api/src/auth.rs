//! Session resolution.
//!
//! An upstream gateway authenticates every request and forwards the
//! caller's identity in the `x-user-id` header; verifying that identity is
//! the gateway's job, not ours. This extractor surfaces the forwarded
//! identity, and `resolve_owner` maps it to the owning user row that all
//! artifact operations are scoped by.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::store::CareerStore;

pub const SESSION_HEADER: &str = "x-user-id";

/// The authenticated caller's forwarded identity.
#[derive(Debug, Clone)]
pub struct Session {
    pub external_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let external_id = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AppError::Unauthorized)?
            .to_string();

        Ok(Session { external_id })
    }
}

/// Resolves a session to its user row. Absence of a row is NotFound, not
/// Unauthorized: the gateway vouched for the identity, we just have no
/// profile for it.
pub async fn resolve_owner(
    store: &dyn CareerStore,
    session: &Session,
) -> Result<UserRow, AppError> {
    store
        .find_user_by_external_id(&session.external_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
