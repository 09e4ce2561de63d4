use crate::{
    api::error,
    modules::{
        auth::model::UserId,
        friend::{
            repository::FriendRequestRepository,
            schema::{FriendRequestEntity, RequestId},
        },
    },
};

#[derive(Clone)]
pub struct FriendRepositoryPg {
    pool: sqlx::PgPool,
}

impl FriendRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FriendRequestRepository for FriendRepositoryPg {
    async fn find_by_pair(
        &self,
        user_id_a: UserId,
        user_id_b: UserId,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        let request = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            SELECT id, user_from_id, user_to_id, created_at, accepted_at, rejected_at
            FROM friend_requests
            WHERE
                (user_from_id = $1 AND user_to_id = $2)
            OR (user_from_id = $2 AND user_to_id = $1)
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id_a)
        .bind(user_id_b)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    async fn find_by_id(
        &self,
        request_id: RequestId,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        let request = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            SELECT id, user_from_id, user_to_id, created_at, accepted_at, rejected_at
            FROM friend_requests
            WHERE id = $1
            "#,
        )
        .bind(request_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    async fn insert(&self, request: &FriendRequestEntity) -> Result<RequestId, error::SystemError> {
        let id: RequestId = sqlx::query_scalar(
            r#"
            INSERT INTO friend_requests (user_from_id, user_to_id, created_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(request.user_from_id)
        .bind(request.user_to_id)
        .bind(request.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, request: &FriendRequestEntity) -> Result<(), error::SystemError> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<RequestId> = sqlx::query_scalar(
            r#"
            UPDATE friend_requests
            SET accepted_at = $1, rejected_at = $2
            WHERE id = $3
              AND accepted_at IS NULL
              AND rejected_at IS NULL
            RETURNING id
            "#,
        )
        .bind(request.accepted_at)
        .bind(request.rejected_at)
        .bind(request.id)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_some() {
            tx.commit().await?;
            return Ok(());
        }

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM friend_requests WHERE id = $1)")
                .bind(request.id)
                .fetch_one(&mut *tx)
                .await?;

        tx.rollback().await?;

        if exists {
            Err(error::SystemError::conflict("Request already resolved"))
        } else {
            Err(error::SystemError::not_found("No request found."))
        }
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError> {
        let requests = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            SELECT id, user_from_id, user_to_id, created_at, accepted_at, rejected_at
            FROM friend_requests
            WHERE user_from_id = $1
               OR user_to_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }
}
