use actix_web::{get, http::StatusCode, post, put, web, HttpRequest};

use crate::{
    api::{error, success},
    middlewares::get_extensions,
    modules::{
        auth::model::AuthUser,
        friend::{
            model::{FriendRequestBody, ListFriendsQuery},
            schema::{FriendRequestEntity, RequestId},
            service::FriendService,
        },
    },
    utils::{ValidatedJson, ValidatedQuery},
};

#[post("/request")]
pub async fn send_friend_request(
    friend_service: web::Data<FriendService>,
    body: ValidatedJson<FriendRequestBody>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let AuthUser(sender_id) = get_extensions::<AuthUser>(&req)?;
    friend_service.send_friend_request(sender_id, body.0.user_to_id).await?;

    Ok(success::Success::text(StatusCode::CREATED, "Request successfully created."))
}

#[put("/{request_id}/accept")]
pub async fn accept_friend_request(
    friend_service: web::Data<FriendService>,
    request_id: web::Path<RequestId>,
) -> Result<success::Success<&'static str>, error::Error> {
    friend_service.accept_friend_request(request_id.into_inner()).await?;
    Ok(success::Success::ok("Request accepted"))
}

#[put("/{request_id}/reject")]
pub async fn reject_friend_request(
    friend_service: web::Data<FriendService>,
    request_id: web::Path<RequestId>,
) -> Result<success::Success<&'static str>, error::Error> {
    friend_service.reject_friend_request(request_id.into_inner()).await?;
    Ok(success::Success::ok("Request rejected"))
}

#[get("")]
pub async fn list_friends(
    friend_service: web::Data<FriendService>,
    query: ValidatedQuery<ListFriendsQuery>,
    req: HttpRequest,
) -> Result<success::Success<Vec<FriendRequestEntity>>, error::Error> {
    let AuthUser(user_id) = get_extensions::<AuthUser>(&req)?;
    let friends = friend_service.get_friends(user_id, query.0.status).await?;

    Ok(success::Success::ok(friends))
}
