use crate::api::error;

/// Key-value lookup backing bearer tokens. Keys are tokens, values are decimal user ids.
#[async_trait::async_trait]
pub trait TokenStore {
    async fn get_value(&self, key: &str) -> Result<Option<String>, error::SystemError>;

    async fn set_value(
        &self,
        key: &str,
        value: &str,
        expiration: Option<u64>,
    ) -> Result<(), error::SystemError>;
}
