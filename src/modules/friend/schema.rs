use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::{api::error, modules::auth::model::UserId};

pub type RequestId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FriendRequestEntity {
    pub id: RequestId,
    pub user_from_id: UserId,
    pub user_to_id: UserId,
    pub created_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
}

impl FriendRequestEntity {
    /// Builds a pending request. The id stays zero until the store assigns one.
    pub fn new(user_from_id: UserId, user_to_id: UserId) -> Result<Self, error::SystemError> {
        if user_from_id == user_to_id {
            return Err(error::SystemError::bad_request("Cannot send friend request to yourself"));
        }

        Ok(FriendRequestEntity {
            id: 0,
            user_from_id,
            user_to_id,
            created_at: Utc::now(),
            accepted_at: None,
            rejected_at: None,
        })
    }

    pub fn status(&self) -> FriendRequestStatus {
        match (self.accepted_at, self.rejected_at) {
            (Some(_), _) => FriendRequestStatus::Accepted,
            (None, Some(_)) => FriendRequestStatus::Rejected,
            (None, None) => FriendRequestStatus::Pending,
        }
    }

    pub fn accept(&mut self) -> Result<(), error::SystemError> {
        self.ensure_pending()?;
        self.accepted_at = Some(Utc::now());
        Ok(())
    }

    pub fn reject(&mut self) -> Result<(), error::SystemError> {
        self.ensure_pending()?;
        self.rejected_at = Some(Utc::now());
        Ok(())
    }

    fn ensure_pending(&self) -> Result<(), error::SystemError> {
        match self.status() {
            FriendRequestStatus::Pending => Ok(()),
            FriendRequestStatus::Accepted => {
                Err(error::SystemError::conflict("Request already accepted"))
            }
            FriendRequestStatus::Rejected => {
                Err(error::SystemError::conflict("Request already rejected"))
            }
        }
    }
}
