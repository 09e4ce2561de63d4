use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::modules::auth::{model::UserId, repository::TokenStore};

#[derive(Clone)]
pub struct TokenResolver {
    store: Arc<dyn TokenStore + Send + Sync>,
}

impl TokenResolver {
    pub fn with_dependencies(store: Arc<dyn TokenStore + Send + Sync>) -> Self {
        info!("TokenResolver initialized with dependencies");
        TokenResolver { store }
    }

    /// Maps a bearer token to the user id stored under it.
    ///
    /// Empty, unknown, or non-numeric entries are rejected as forbidden. Store failures surface
    /// as internal errors so an unreachable cache is not reported as a bad token.
    pub async fn resolve_user(&self, token: &str) -> Result<UserId, error::SystemError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(error::SystemError::forbidden("Failed to find token"));
        }

        let value = self
            .store
            .get_value(token)
            .await?
            .ok_or_else(|| error::SystemError::forbidden("Not a valid token"))?;

        parse_user_id(&value).ok_or_else(|| error::SystemError::forbidden("Not a valid token"))
    }
}

fn parse_user_id(value: &str) -> Option<UserId> {
    let raw = value.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<UserId>().ok()
}
