use std::sync::{Mutex, MutexGuard};

use crate::{
    api::error,
    modules::{
        auth::model::UserId,
        friend::{
            repository::FriendRequestRepository,
            schema::{FriendRequestEntity, FriendRequestStatus, RequestId},
        },
    },
};

fn involves(request: &FriendRequestEntity, user_id: UserId) -> bool {
    request.user_from_id == user_id || request.user_to_id == user_id
}

fn is_between(request: &FriendRequestEntity, user_a: UserId, user_b: UserId) -> bool {
    (request.user_from_id == user_a && request.user_to_id == user_b)
        || (request.user_from_id == user_b && request.user_to_id == user_a)
}

/// In-memory stand-in for `FriendRepositoryPg`, used by the endpoint tests.
#[derive(Default)]
pub struct FriendRepositoryMemory {
    requests: Mutex<Vec<FriendRequestEntity>>,
}

impl FriendRepositoryMemory {
    pub fn with_requests(requests: Vec<FriendRequestEntity>) -> Self {
        Self { requests: Mutex::new(requests) }
    }

    pub fn snapshot(&self) -> Vec<FriendRequestEntity> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<FriendRequestEntity>>, error::SystemError> {
        self.requests.lock().map_err(|e| error::SystemError::InternalError(e.to_string().into()))
    }
}

#[async_trait::async_trait]
impl FriendRequestRepository for FriendRepositoryMemory {
    async fn find_by_pair(
        &self,
        user_id_a: UserId,
        user_id_b: UserId,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        let requests = self.lock()?;
        Ok(requests.iter().rev().find(|r| is_between(r, user_id_a, user_id_b)).cloned())
    }

    async fn find_by_id(
        &self,
        request_id: RequestId,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        let requests = self.lock()?;
        Ok(requests.iter().find(|r| r.id == request_id).cloned())
    }

    async fn insert(&self, request: &FriendRequestEntity) -> Result<RequestId, error::SystemError> {
        let mut requests = self.lock()?;

        if requests.iter().any(|r| is_between(r, request.user_from_id, request.user_to_id)) {
            return Err(error::SystemError::conflict("Request already exists."));
        }

        let id = requests.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        requests.push(FriendRequestEntity { id, ..request.clone() });
        Ok(id)
    }

    async fn update(&self, request: &FriendRequestEntity) -> Result<(), error::SystemError> {
        let mut requests = self.lock()?;

        let stored = requests
            .iter_mut()
            .find(|r| r.id == request.id)
            .ok_or_else(|| error::SystemError::not_found("No request found."))?;

        if stored.status() != FriendRequestStatus::Pending {
            return Err(error::SystemError::conflict("Request already resolved"));
        }

        stored.accepted_at = request.accepted_at;
        stored.rejected_at = request.rejected_at;
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError> {
        let requests = self.lock()?;
        let mut found: Vec<_> = requests.iter().filter(|r| involves(r, user_id)).cloned().collect();
        found.sort_by_key(|r| r.id);
        Ok(found)
    }
}
