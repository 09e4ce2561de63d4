use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderMap, AUTHORIZATION},
    middleware::Next,
    web, Error, HttpMessage, HttpRequest, ResponseError,
};

use crate::{
    api::error,
    modules::auth::{
        model::{AuthUser, UserId},
        service::TokenResolver,
    },
};

/// Resolves the `Authorization` token to a user and stores it as [`AuthUser`] in the request
/// extensions. Requests without a resolvable token never reach the handler.
pub async fn authentication<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody + 'static,
{
    let user_id = match authenticate(&req).await {
        Ok(user_id) => user_id,
        Err(err) => {
            log::warn!("Rejected {} {}: {}", req.method(), req.path(), err);
            let response = err.error_response();
            return Ok(req.into_response(response).map_into_right_body());
        }
    };

    req.extensions_mut().insert(AuthUser(user_id));

    next.call(req).await.map(ServiceResponse::map_into_left_body)
}

async fn authenticate(req: &ServiceRequest) -> Result<UserId, error::Error> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| error::Error::forbidden("Failed to find token"))?;

    let resolver = req.app_data::<web::Data<TokenResolver>>().ok_or_else(|| {
        log::error!("TokenResolver is not registered as app data");
        error::Error::internal_server_error()
    })?;

    Ok(resolver.resolve_user(token).await?)
}

// Both a raw token and the `Bearer <token>` form are accepted.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim_start();
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    (!token.is_empty()).then_some(token)
}

pub fn get_extensions<T>(req: &HttpRequest) -> Result<T, error::Error>
where
    T: Clone + 'static,
{
    let extensions = req.extensions();

    let value = extensions
        .get::<T>()
        .ok_or_else(|| error::Error::forbidden("Failed to find token"))?
        .clone();

    Ok(value)
}
