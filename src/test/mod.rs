use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::json;

use crate::modules::{
    auth::{repository_memory::TokenStoreMemory, service::TokenResolver},
    friend::{
        repository_memory::FriendRepositoryMemory,
        route,
        schema::{FriendRequestEntity, FriendRequestStatus},
        service::FriendService,
    },
};

struct TestState {
    resolver: web::Data<TokenResolver>,
    friends: web::Data<FriendService>,
    repo: Arc<FriendRepositoryMemory>,
}

impl TestState {
    fn new(requests: Vec<FriendRequestEntity>) -> Self {
        let tokens = TokenStoreMemory::with_tokens([("TEST", "1"), ("OTHER", "2")]);
        let repo = Arc::new(FriendRepositoryMemory::with_requests(requests));

        TestState {
            resolver: web::Data::new(TokenResolver::with_dependencies(Arc::new(tokens))),
            friends: web::Data::new(FriendService::with_dependencies(repo.clone())),
            repo,
        }
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.resolver.clone())
                .app_data($state.friends.clone())
                .configure(route::configure),
        )
        .await
    };
}

fn pending(id: i64, user_from_id: i64, user_to_id: i64) -> FriendRequestEntity {
    FriendRequestEntity { id, ..FriendRequestEntity::new(user_from_id, user_to_id).unwrap() }
}

#[actix_web::test]
async fn create_request_with_valid_token() {
    let state = TestState::new(vec![]);
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/friends/request")
        .insert_header(("Authorization", "TEST"))
        .set_json(json!({ "user_to_id": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(test::read_body(resp).await, "Request successfully created.");

    let stored = state.repo.snapshot();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_from_id, 1);
    assert_eq!(stored[0].user_to_id, 2);
    assert!(stored[0].accepted_at.is_none());
    assert!(stored[0].rejected_at.is_none());
}

#[actix_web::test]
async fn create_request_without_token_is_forbidden() {
    let state = TestState::new(vec![]);
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/friends/request")
        .set_payload("this is not valid json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(state.repo.snapshot().is_empty());
}

#[actix_web::test]
async fn unknown_tokens_are_forbidden_everywhere() {
    let state = TestState::new(vec![pending(1, 1, 2)]);
    let app = init_app!(state);

    let requests = [
        test::TestRequest::post().uri("/friends/request").set_json(json!({ "user_to_id": 3 })),
        test::TestRequest::put().uri("/friends/1/accept"),
        test::TestRequest::put().uri("/friends/1/reject"),
        test::TestRequest::get().uri("/friends"),
    ];

    for req in requests {
        let req = req.insert_header(("Authorization", "NOT-A-TOKEN")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    let stored = state.repo.snapshot();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status(), FriendRequestStatus::Pending);
}

#[actix_web::test]
async fn create_request_rejects_malformed_bodies() {
    let state = TestState::new(vec![]);
    let app = init_app!(state);

    let bodies = ["this is not valid json", "{}", r#"{"user_to_id": 0}"#, r#"{"user_to_id": -3}"#];

    for body in bodies {
        let req = test::TestRequest::post()
            .uri("/friends/request")
            .insert_header(("Authorization", "TEST"))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body {body:?}");
    }

    assert!(state.repo.snapshot().is_empty());
}

#[actix_web::test]
async fn create_request_to_self_is_bad_request() {
    let state = TestState::new(vec![]);
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/friends/request")
        .insert_header(("Authorization", "TEST"))
        .set_json(json!({ "user_to_id": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(state.repo.snapshot().is_empty());
}

#[actix_web::test]
async fn duplicate_request_in_either_direction_is_bad_request() {
    let state = TestState::new(vec![pending(1, 1, 2)]);
    let app = init_app!(state);

    for (token, user_to_id) in [("TEST", 2), ("OTHER", 1)] {
        let req = test::TestRequest::post()
            .uri("/friends/request")
            .insert_header(("Authorization", token))
            .set_json(json!({ "user_to_id": user_to_id }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Request already exists.");
    }

    assert_eq!(state.repo.snapshot().len(), 1);
}

#[actix_web::test]
async fn accept_unknown_request_is_not_found() {
    let state = TestState::new(vec![]);
    let app = init_app!(state);

    let req = test::TestRequest::put()
        .uri("/friends/1/accept")
        .insert_header(("Authorization", "TEST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn non_numeric_request_id_is_not_found() {
    let state = TestState::new(vec![pending(1, 1, 2)]);
    let app = init_app!(state);

    let req = test::TestRequest::put()
        .uri("/friends/abc/reject")
        .insert_header(("Authorization", "TEST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn reject_existing_request() {
    let state = TestState::new(vec![pending(1, 1, 2)]);
    let app = init_app!(state);

    let req = test::TestRequest::put()
        .uri("/friends/1/reject")
        .insert_header(("Authorization", "TEST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: String = test::read_body_json(resp).await;
    assert_eq!(body, "Request rejected");

    let stored = state.repo.snapshot();
    assert!(stored[0].rejected_at.is_some());
    assert!(stored[0].accepted_at.is_none());
}

#[actix_web::test]
async fn accept_then_reject_keeps_the_first_outcome() {
    let state = TestState::new(vec![pending(1, 1, 2)]);
    let app = init_app!(state);

    let accept = test::TestRequest::put()
        .uri("/friends/1/accept")
        .insert_header(("Authorization", "OTHER"))
        .to_request();
    let resp = test::call_service(&app, accept).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: String = test::read_body_json(resp).await;
    assert_eq!(body, "Request accepted");

    let reject = test::TestRequest::put()
        .uri("/friends/1/reject")
        .insert_header(("Authorization", "OTHER"))
        .to_request();
    let resp = test::call_service(&app, reject).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = state.repo.snapshot();
    assert_eq!(stored[0].status(), FriendRequestStatus::Accepted);
    assert!(stored[0].rejected_at.is_none());
}

#[actix_web::test]
async fn list_friends_without_token_is_forbidden() {
    let state = TestState::new(vec![pending(1, 1, 2)]);
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/friends").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(state.repo.snapshot().len(), 1);
}

#[actix_web::test]
async fn list_friends_returns_requests_involving_user() {
    let mut accepted = pending(2, 3, 1);
    accepted.accept().unwrap();
    let state = TestState::new(vec![pending(1, 1, 2), accepted, pending(3, 2, 3)]);
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/friends")
        .insert_header(("Authorization", "TEST"))
        .to_request();
    let friends: Vec<FriendRequestEntity> = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<_> = friends.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1, 2]);

    let req = test::TestRequest::get()
        .uri("/friends?status=accepted")
        .insert_header(("Authorization", "Bearer TEST"))
        .to_request();
    let friends: Vec<FriendRequestEntity> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].id, 2);
    assert!(friends[0].accepted_at.is_some());
}

#[actix_web::test]
async fn list_friends_for_user_without_requests_is_empty() {
    let state = TestState::new(vec![]);
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/friends")
        .insert_header(("Authorization", "TEST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let friends: Vec<FriendRequestEntity> = test::read_body_json(resp).await;
    assert!(friends.is_empty());
}

#[actix_web::test]
async fn list_friends_rejects_unknown_status_filter() {
    let state = TestState::new(vec![]);
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/friends?status=blocked")
        .insert_header(("Authorization", "TEST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
