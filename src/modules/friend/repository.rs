use crate::api::error;
use crate::modules::auth::model::UserId;
use crate::modules::friend::schema::{FriendRequestEntity, RequestId};

#[async_trait::async_trait]
pub trait FriendRequestRepository {
    /// Looks up the request between two users in either direction.
    async fn find_by_pair(
        &self,
        user_id_a: UserId,
        user_id_b: UserId,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError>;

    async fn find_by_id(
        &self,
        request_id: RequestId,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError>;

    async fn insert(&self, request: &FriendRequestEntity) -> Result<RequestId, error::SystemError>;

    /// Persists the outcome timestamps of a request that is still pending in the store.
    ///
    /// Fails with `NotFound` for an unknown id and `Conflict` when the stored record has
    /// already been accepted or rejected.
    async fn update(&self, request: &FriendRequestEntity) -> Result<(), error::SystemError>;

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError>;
}
