use std::{collections::HashMap, sync::Mutex};

use crate::{api::error, modules::auth::repository::TokenStore};

/// Test double for the Redis token store. Expirations are ignored.
#[derive(Default)]
pub struct TokenStoreMemory {
    values: Mutex<HashMap<String, String>>,
}

impl TokenStoreMemory {
    pub fn with_tokens<'a>(tokens: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = tokens.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Self { values: Mutex::new(values) }
    }
}

#[async_trait::async_trait]
impl TokenStore for TokenStoreMemory {
    async fn get_value(&self, key: &str) -> Result<Option<String>, error::SystemError> {
        let values = self.values.lock().map_err(|e| {
            error::SystemError::InternalError(e.to_string().into())
        })?;
        Ok(values.get(key).cloned())
    }

    async fn set_value(
        &self,
        key: &str,
        value: &str,
        _expiration: Option<u64>,
    ) -> Result<(), error::SystemError> {
        let mut values = self.values.lock().map_err(|e| {
            error::SystemError::InternalError(e.to_string().into())
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
