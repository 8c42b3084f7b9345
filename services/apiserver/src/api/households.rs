//! Household administration handlers.
//!
//! # Purpose and responsibility
//! Operations a household admin performs on their own household. Each
//! handler resolves the caller's checker for the target household, runs the
//! matching predicate, and only then touches the store.
//!
//! # Security considerations
//! - Non-members receive 403 even for households that do not exist, so the
//!   endpoints cannot be used to discover household ids.
use crate::api::error::{ApiError, api_store_error, api_validation_error};
use crate::api::types::{HouseholdTransferRequest, HouseholdUpdateRequest};
use crate::app::AppState;
use crate::auth::guard::{household_checker, require};
use crate::auth::session::session_context;
use crate::model::{Household, Webhook};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};

#[utoipa::path(
    put,
    path = "/v1/households/{household_id}",
    tag = "households",
    params(("household_id" = String, Path, description = "Household identifier")),
    request_body = HouseholdUpdateRequest,
    responses((status = 200, body = Household), (status = 403), (status = 404))
)]
pub async fn update_household(
    Path(household_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<HouseholdUpdateRequest>,
) -> Result<Json<Household>, ApiError> {
    let ctx = session_context(&state, &headers).await?;
    let checker = household_checker(&ctx, &household_id)?;
    require(checker.can_update_households(), "update_household")?;
    let name = body.name.trim();
    if name.is_empty() {
        return Err(api_validation_error("household name is required"));
    }
    let household = state
        .store
        .update_household_name(&household_id, name)
        .await
        .map_err(|err| api_store_error("failed to update household", err))?;
    tracing::info!(%household_id, user_id = %ctx.requester.user_id, "household updated");
    Ok(Json(household))
}

#[utoipa::path(
    delete,
    path = "/v1/households/{household_id}",
    tag = "households",
    params(("household_id" = String, Path, description = "Household identifier")),
    responses((status = 204), (status = 403), (status = 404))
)]
pub async fn archive_household(
    Path(household_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let ctx = session_context(&state, &headers).await?;
    let checker = household_checker(&ctx, &household_id)?;
    require(checker.can_delete_households(), "archive_household")?;
    state
        .store
        .archive_household(&household_id)
        .await
        .map_err(|err| api_store_error("failed to archive household", err))?;
    tracing::info!(%household_id, user_id = %ctx.requester.user_id, "household archived");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/v1/households/{household_id}/transfer",
    tag = "households",
    params(("household_id" = String, Path, description = "Household identifier")),
    request_body = HouseholdTransferRequest,
    responses((status = 200, body = Household), (status = 403), (status = 404), (status = 409))
)]
pub async fn transfer_household(
    Path(household_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<HouseholdTransferRequest>,
) -> Result<Json<Household>, ApiError> {
    let ctx = session_context(&state, &headers).await?;
    let checker = household_checker(&ctx, &household_id)?;
    require(
        checker.can_transfer_household_to_new_owner(),
        "transfer_household",
    )?;
    if body.new_owner_user_id.trim().is_empty() {
        return Err(api_validation_error("new_owner_user_id is required"));
    }
    let household = state
        .store
        .transfer_household(&household_id, &body.new_owner_user_id)
        .await
        .map_err(|err| api_store_error("failed to transfer household", err))?;
    tracing::info!(
        %household_id,
        new_owner = %household.owner_user_id,
        "household ownership transferred"
    );
    Ok(Json(household))
}

#[utoipa::path(
    delete,
    path = "/v1/households/{household_id}/members/{user_id}",
    tag = "households",
    params(
        ("household_id" = String, Path, description = "Household identifier"),
        ("user_id" = String, Path, description = "Member to remove")
    ),
    responses((status = 204), (status = 403), (status = 404), (status = 409))
)]
pub async fn remove_member(
    Path((household_id, user_id)): Path<(String, String)>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let ctx = session_context(&state, &headers).await?;
    let checker = household_checker(&ctx, &household_id)?;
    require(
        checker.can_remove_member_from_households(),
        "remove_member_household",
    )?;
    state
        .store
        .remove_member(&household_id, &user_id)
        .await
        .map_err(|err| api_store_error("failed to remove member", err))?;
    tracing::info!(%household_id, removed = %user_id, "household member removed");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/v1/households/{household_id}/webhooks",
    tag = "households",
    params(("household_id" = String, Path, description = "Household identifier")),
    responses((status = 200, body = [Webhook]), (status = 403), (status = 404))
)]
pub async fn list_webhooks(
    Path(household_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Webhook>>, ApiError> {
    let ctx = session_context(&state, &headers).await?;
    let checker = household_checker(&ctx, &household_id)?;
    require(checker.can_see_webhooks(), "read_webhooks")?;
    let webhooks = state
        .store
        .list_webhooks(&household_id)
        .await
        .map_err(|err| api_store_error("failed to list webhooks", err))?;
    Ok(Json(webhooks))
}
