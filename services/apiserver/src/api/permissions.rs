//! Permission query handlers.
//!
//! # Purpose and responsibility
//! Lets a signed-in user ask what they may do: a rendered summary of every
//! named predicate, and a batch check of arbitrary permission names.
//!
//! # Key invariants and assumptions
//! - A name is granted when either the active household checker or the
//!   service checker grants it.
//! - Unknown names are reported as `false`, never as an error. An empty
//!   request yields an empty map.
use crate::api::error::ApiError;
use crate::api::types::{
    PermissionSummaryResponse, UserPermissionsRequest, UserPermissionsResponse,
};
use crate::app::AppState;
use crate::auth::session::session_context;
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use larder_authz::PermissionChecker;
use std::collections::BTreeMap;

fn owned_summary(summary: BTreeMap<&'static str, bool>) -> BTreeMap<String, bool> {
    summary
        .into_iter()
        .map(|(name, allowed)| (name.to_string(), allowed))
        .collect()
}

#[utoipa::path(
    get,
    path = "/v1/users/self/permissions",
    tag = "users",
    responses(
        (status = 200, body = PermissionSummaryResponse),
        (status = 401, body = crate::api::types::ErrorResponse)
    )
)]
pub async fn self_permissions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<PermissionSummaryResponse>, ApiError> {
    let ctx = session_context(&state, &headers).await?;
    let service = &ctx.requester.service_permissions;
    let household = ctx.active_household_checker();
    Ok(Json(PermissionSummaryResponse {
        user_id: ctx.requester.user_id.clone(),
        service_roles: service.roles().to_vec(),
        service_permissions: owned_summary(service.permission_summary()),
        active_household_id: ctx.active_household_id.clone(),
        household_roles: household.roles().to_vec(),
        household_permissions: owned_summary(household.permission_summary()),
    }))
}

#[utoipa::path(
    post,
    path = "/v1/users/permissions/check",
    tag = "users",
    request_body = UserPermissionsRequest,
    responses(
        (status = 200, body = UserPermissionsResponse),
        (status = 401, body = crate::api::types::ErrorResponse)
    )
)]
pub async fn check_permissions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UserPermissionsRequest>,
) -> Result<Json<UserPermissionsResponse>, ApiError> {
    let ctx = session_context(&state, &headers).await?;
    let household = ctx.active_household_checker();
    let service = &ctx.requester.service_permissions;
    let permissions = body
        .permissions
        .into_iter()
        .map(|name| {
            let allowed = household.has_permission_named(&name) || service.has_permission_named(&name);
            (name, allowed)
        })
        .collect();
    Ok(Json(UserPermissionsResponse { permissions }))
}
