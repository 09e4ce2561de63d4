use log::info;
use std::sync::Arc;

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

#[derive(Clone)]
pub struct FriendService {
    repo: Arc<dyn FriendRequestRepository + Send + Sync>,
}

impl FriendService {
    pub fn with_dependencies(repo: Arc<dyn FriendRequestRepository + Send + Sync>) -> Self {
        info!("FriendService initialized with dependencies");
        FriendService { repo }
    }

    pub async fn has_existing_request(
        &self,
        user_from_id: UserId,
        user_to_id: UserId,
    ) -> Result<bool, error::SystemError> {
        let request = self.repo.find_by_pair(user_from_id, user_to_id).await?;
        Ok(request.is_some())
    }

    pub async fn send_friend_request(
        &self,
        user_from_id: UserId,
        user_to_id: UserId,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        let mut request = FriendRequestEntity::new(user_from_id, user_to_id)?;

        if self.has_existing_request(user_from_id, user_to_id).await? {
            return Err(error::SystemError::conflict("Request already exists."));
        }

        request.id = self.repo.insert(&request).await?;
        info!("Friend request {} created from {} to {}", request.id, user_from_id, user_to_id);

        Ok(request)
    }

    pub async fn accept_friend_request(
        &self,
        request_id: RequestId,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        self.settle(request_id, FriendRequestStatus::Accepted, FriendRequestEntity::accept).await
    }

    pub async fn reject_friend_request(
        &self,
        request_id: RequestId,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        self.settle(request_id, FriendRequestStatus::Rejected, FriendRequestEntity::reject).await
    }

    /// Returns every request the user takes part in, optionally narrowed to one status.
    pub async fn get_friends(
        &self,
        user_id: UserId,
        status: Option<FriendRequestStatus>,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError> {
        let mut requests = self.repo.list_for_user(user_id).await?;
        if let Some(status) = status {
            requests.retain(|r| r.status() == status);
        }
        Ok(requests)
    }

    // Repeating an outcome that is already stored succeeds without touching the record.
    async fn settle(
        &self,
        request_id: RequestId,
        outcome: FriendRequestStatus,
        transition: fn(&mut FriendRequestEntity) -> Result<(), error::SystemError>,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        let mut request = self
            .repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("No request found."))?;

        if request.status() == outcome {
            return Ok(request);
        }

        transition(&mut request)?;
        match self.repo.update(&request).await {
            Ok(()) => {}
            // A concurrent call may have stored the same outcome after our read.
            Err(error::SystemError::Conflict(msg)) => {
                return match self.repo.find_by_id(request_id).await? {
                    Some(stored) if stored.status() == outcome => Ok(stored),
                    _ => Err(error::SystemError::Conflict(msg)),
                };
            }
            Err(e) => return Err(e),
        }
        info!("Friend request {} marked {:?}", request_id, outcome);

        Ok(request)
    }
}
