//! API server HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::auth;
use crate::auth::cookie_secret::CookieSecret;
use crate::auth::session::SessionRecord;
use crate::model::{AccountStatus, Household, User, Webhook};
use crate::store::ApiStore;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use larder_authz::{
    HOUSEHOLD_ADMIN_ROLE_NAME, HOUSEHOLD_MEMBER_ROLE_NAME, SERVICE_ADMIN_ROLE_NAME,
    SERVICE_USER_ROLE_NAME,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ApiStore>,
    pub cookie_secret: Arc<CookieSecret>,
}

impl AppState {
    pub fn new(store: Arc<dyn ApiStore>) -> Self {
        Self {
            store,
            cookie_secret: Arc::new(CookieSecret::generate()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            )
        });

    let admin = Router::new()
        .route(
            "/v1/admin/users/status",
            post(api::admin::update_user_account_status),
        )
        .route(
            "/v1/admin/cycle_cookie_secret",
            post(api::admin::cycle_cookie_secret),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::guard::service_admin_middleware,
        ));

    Router::new()
        .route("/v1/system/health", get(api::system::system_health))
        .route(
            "/v1/users/self/permissions",
            get(api::permissions::self_permissions),
        )
        .route(
            "/v1/users/permissions/check",
            post(api::permissions::check_permissions),
        )
        .route(
            "/v1/users/household/select",
            post(api::sessions::select_household),
        )
        .route(
            "/v1/households/:household_id",
            axum::routing::put(api::households::update_household)
                .delete(api::households::archive_household),
        )
        .route(
            "/v1/households/:household_id/transfer",
            post(api::households::transfer_household),
        )
        .route(
            "/v1/households/:household_id/members/:user_id",
            delete(api::households::remove_member),
        )
        .route(
            "/v1/households/:household_id/webhooks",
            get(api::households::list_webhooks),
        )
        .route("/v1/openapi.json", get(openapi_json))
        .merge(admin)
        .layer(trace_layer)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Session tokens created by [`seed_demo_data`].
pub const DEMO_ADMIN_TOKEN: &str = "demo-admin";
pub const DEMO_OWNER_TOKEN: &str = "demo-owner";
pub const DEMO_MEMBER_TOKEN: &str = "demo-member";

/// Populate a store with one household, three users and their sessions.
///
/// Used for local runs (`seed_demo_sessions`) and by integration tests.
pub async fn seed_demo_data(store: &dyn ApiStore) -> anyhow::Result<()> {
    let users = [
        ("admin", vec![SERVICE_ADMIN_ROLE_NAME], None),
        ("owner", vec![SERVICE_USER_ROLE_NAME], Some(HOUSEHOLD_ADMIN_ROLE_NAME)),
        ("member", vec![SERVICE_USER_ROLE_NAME], Some(HOUSEHOLD_MEMBER_ROLE_NAME)),
    ];

    let mut members = BTreeMap::new();
    for (user_id, service_roles, household_role) in &users {
        store
            .create_user(User {
                user_id: user_id.to_string(),
                username: format!("{user_id}-cook"),
                account_status: AccountStatus::GoodStanding,
                account_status_explanation: String::new(),
                service_roles: service_roles.iter().map(|r| r.to_string()).collect(),
            })
            .await?;
        if let Some(role) = household_role {
            members.insert(user_id.to_string(), vec![role.to_string()]);
        }
    }

    store
        .create_household(Household {
            household_id: "demo-household".to_string(),
            name: "Demo Kitchen".to_string(),
            owner_user_id: "owner".to_string(),
            members: members.clone(),
            webhooks: vec![Webhook {
                webhook_id: "wh-1".to_string(),
                name: "meal plan finalized".to_string(),
                url: "https://hooks.example.com/meal-plans".to_string(),
            }],
        })
        .await?;

    let sessions = [
        (DEMO_ADMIN_TOKEN, "admin"),
        (DEMO_OWNER_TOKEN, "owner"),
        (DEMO_MEMBER_TOKEN, "member"),
    ];
    for (token, user_id) in sessions {
        let user = store.get_user(user_id).await?;
        let household_roles: BTreeMap<String, Vec<String>> = members
            .get(user_id)
            .map(|roles| BTreeMap::from([("demo-household".to_string(), roles.clone())]))
            .unwrap_or_default();
        let active_household_id = household_roles.keys().next().cloned();
        store
            .put_session(
                token,
                SessionRecord {
                    user_id: user.user_id,
                    account_status: user.account_status,
                    service_roles: user.service_roles,
                    active_household_id,
                    household_roles,
                },
            )
            .await?;
    }
    tracing::info!(
        tokens = ?[DEMO_ADMIN_TOKEN, DEMO_OWNER_TOKEN, DEMO_MEMBER_TOKEN],
        "seeded demo sessions"
    );
    Ok(())
}
