mod common;
mod http_helpers;

use apiserver::app::{DEMO_ADMIN_TOKEN, DEMO_MEMBER_TOKEN, DEMO_OWNER_TOKEN};
use apiserver::store::HouseholdStore;
use axum::http::StatusCode;
use common::{read_json, seeded_app};
use http_helpers::{authed_json_request, authed_request};
use serde_json::json;
use tower::ServiceExt;

const HOUSEHOLD: &str = "/v1/households/demo-household";

#[tokio::test]
async fn member_can_list_webhooks() {
    let (app, _) = seeded_app().await;
    let response = app
        .oneshot(authed_request(
            "GET",
            &format!("{HOUSEHOLD}/webhooks"),
            DEMO_MEMBER_TOKEN,
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body[0]["webhook_id"], "wh-1");
}

#[tokio::test]
async fn member_cannot_update_household() {
    let (app, state) = seeded_app().await;
    let response = app
        .oneshot(authed_json_request(
            "PUT",
            HOUSEHOLD,
            DEMO_MEMBER_TOKEN,
            json!({ "name": "Renamed" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = read_json(response).await;
    assert_eq!(body["code"], "forbidden");
    assert_eq!(body["message"], "missing update_household");

    let household = state
        .store
        .get_household("demo-household")
        .await
        .expect("household");
    assert_eq!(household.name, "Demo Kitchen");
}

#[tokio::test]
async fn owner_updates_household_name() {
    let (app, _) = seeded_app().await;
    let response = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            HOUSEHOLD,
            DEMO_OWNER_TOKEN,
            json!({ "name": "  Test Kitchen " }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["name"], "Test Kitchen");

    let response = app
        .oneshot(authed_json_request(
            "PUT",
            HOUSEHOLD,
            DEMO_OWNER_TOKEN,
            json!({ "name": "   " }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_members_are_forbidden_even_for_unknown_households() {
    let (app, _) = seeded_app().await;
    // The admin holds no role in the demo household.
    let response = app
        .clone()
        .oneshot(authed_request(
            "GET",
            &format!("{HOUSEHOLD}/webhooks"),
            DEMO_ADMIN_TOKEN,
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(authed_request(
            "DELETE",
            "/v1/households/no-such-household",
            DEMO_OWNER_TOKEN,
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn transfer_requires_admin_and_existing_member() {
    let (app, state) = seeded_app().await;
    let uri = format!("{HOUSEHOLD}/transfer");

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            &uri,
            DEMO_MEMBER_TOKEN,
            json!({ "new_owner_user_id": "member" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            &uri,
            DEMO_OWNER_TOKEN,
            json!({ "new_owner_user_id": "stranger" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .oneshot(authed_json_request(
            "POST",
            &uri,
            DEMO_OWNER_TOKEN,
            json!({ "new_owner_user_id": "member" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["owner_user_id"], "member");

    let household = state
        .store
        .get_household("demo-household")
        .await
        .expect("household");
    assert_eq!(household.members["owner"], vec!["household_member"]);
    assert_eq!(household.members["member"], vec!["household_admin"]);
}

#[tokio::test]
async fn owner_removes_member_but_not_self() {
    let (app, _) = seeded_app().await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "DELETE",
            &format!("{HOUSEHOLD}/members/owner"),
            DEMO_OWNER_TOKEN,
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(authed_request(
            "DELETE",
            &format!("{HOUSEHOLD}/members/member"),
            DEMO_MEMBER_TOKEN,
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(authed_request(
            "DELETE",
            &format!("{HOUSEHOLD}/members/member"),
            DEMO_OWNER_TOKEN,
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(authed_request(
            "DELETE",
            &format!("{HOUSEHOLD}/members/member"),
            DEMO_OWNER_TOKEN,
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn owner_archives_household() {
    let (app, _) = seeded_app().await;
    let response = app
        .clone()
        .oneshot(authed_request("DELETE", HOUSEHOLD, DEMO_MEMBER_TOKEN))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(authed_request("DELETE", HOUSEHOLD, DEMO_OWNER_TOKEN))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The session still names the household, but it no longer exists.
    let response = app
        .oneshot(authed_request(
            "GET",
            &format!("{HOUSEHOLD}/webhooks"),
            DEMO_OWNER_TOKEN,
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
