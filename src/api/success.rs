use actix_web::{http::StatusCode, HttpResponse};
use std::borrow::Cow;

pub enum SuccessBody<T: serde::Serialize> {
    Json(T),
    Text(Cow<'static, str>),
}

pub struct Success<T: serde::Serialize> {
    pub status: StatusCode,
    pub body: Option<SuccessBody<T>>,
}

impl<T: serde::Serialize> Success<T> {
    pub fn ok(data: T) -> Self {
        Self { status: StatusCode::OK, body: Some(SuccessBody::Json(data)) }
    }
}

impl Success<()> {
    pub fn text<M>(status: StatusCode, msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { status, body: Some(SuccessBody::Text(msg.into())) }
    }
}

impl<T: serde::Serialize> actix_web::Responder for Success<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        let mut response = HttpResponse::build(self.status);

        match self.body {
            Some(SuccessBody::Json(data)) => response.json(data),
            Some(SuccessBody::Text(msg)) => {
                response.content_type("text/plain; charset=utf-8").body(msg.into_owned())
            }
            None => response.finish(),
        }
    }
}
