use serde::Deserialize;
use validator::Validate;

use crate::modules::{auth::model::UserId, friend::schema::FriendRequestStatus};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FriendRequestBody {
    // Zero is what an omitted or defaulted payload decodes to.
    #[validate(range(min = 1, message = "user_to_id must be a positive user id"))]
    pub user_to_id: UserId,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListFriendsQuery {
    pub status: Option<FriendRequestStatus>,
}
