//! Service administration handlers.
//!
//! # Purpose
//! Endpoints reserved for service admins. The router wraps them in
//! [`service_admin_middleware`](crate::auth::guard::service_admin_middleware),
//! which rejects anyone not holding the literal `service_admin` role before
//! the handler runs; handlers then check the specific permission.
use crate::api::error::{ApiError, api_store_error, api_validation_error};
use crate::api::types::UserAccountStatusUpdateRequest;
use crate::app::AppState;
use crate::auth::guard::require;
use crate::auth::session::SessionContextData;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

#[utoipa::path(
    post,
    path = "/v1/admin/users/status",
    tag = "admin",
    request_body = UserAccountStatusUpdateRequest,
    responses((status = 202), (status = 400), (status = 403), (status = 404))
)]
pub async fn update_user_account_status(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContextData>,
    Json(body): Json<UserAccountStatusUpdateRequest>,
) -> Result<StatusCode, ApiError> {
    require(
        ctx.requester
            .service_permissions
            .can_update_user_account_statuses(),
        "update_user_status",
    )?;
    if body.target_user_id.trim().is_empty() {
        return Err(api_validation_error("target_user_id is required"));
    }
    if body.reason.trim().is_empty() {
        return Err(api_validation_error("reason is required"));
    }
    let user = state
        .store
        .update_account_status(&body.target_user_id, body.new_status, body.reason.trim())
        .await
        .map_err(|err| api_store_error("failed to update account status", err))?;
    tracing::info!(
        admin = %ctx.requester.user_id,
        target = %user.user_id,
        status = ?user.account_status,
        "user account status changed"
    );
    Ok(StatusCode::ACCEPTED)
}

#[utoipa::path(
    post,
    path = "/v1/admin/cycle_cookie_secret",
    tag = "admin",
    responses((status = 202), (status = 403))
)]
pub async fn cycle_cookie_secret(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContextData>,
) -> Result<StatusCode, ApiError> {
    require(
        ctx.requester.service_permissions.can_cycle_cookie_secrets(),
        "update_cookie_secret",
    )?;
    let generation = state.cookie_secret.rotate();
    tracing::info!(admin = %ctx.requester.user_id, generation, "cookie secret cycled");
    Ok(StatusCode::ACCEPTED)
}
