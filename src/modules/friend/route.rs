use crate::{api::error, middlewares::authentication, modules::friend::handle::*};
use actix_web::{
    middleware::from_fn,
    web::{scope, JsonConfig, PathConfig, ServiceConfig},
};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/friends")
            .wrap(from_fn(authentication))
            .app_data(JsonConfig::default().content_type_required(false))
            .app_data(PathConfig::default().error_handler(|err, _req| {
                log::debug!("Unparseable request id: {err}");
                error::Error::not_found("No request found.").into()
            }))
            .service(send_friend_request)
            .service(accept_friend_request)
            .service(reject_friend_request)
            .service(list_friends),
    );
}
