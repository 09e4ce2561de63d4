use crate::{api::error, configs::RedisCache, modules::auth::repository::TokenStore};

#[async_trait::async_trait]
impl TokenStore for RedisCache {
    async fn get_value(&self, key: &str) -> Result<Option<String>, error::SystemError> {
        self.get(key).await
    }

    async fn set_value(
        &self,
        key: &str,
        value: &str,
        expiration: Option<u64>,
    ) -> Result<(), error::SystemError> {
        self.set(key, value, expiration).await
    }
}
