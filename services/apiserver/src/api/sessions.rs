//! Session maintenance handlers.
//!
//! # Purpose and responsibility
//! Re-points the caller's session at another household so later permission
//! checks use that household's roles.
//!
//! # Security considerations
//! - Only households the session already holds roles in can be selected; the
//!   role lists themselves are never rewritten here.
use crate::api::error::{ApiError, api_internal, api_unauthorized, api_validation_error};
use crate::api::types::ChangeActiveHouseholdRequest;
use crate::app::AppState;
use crate::auth::guard::household_checker;
use crate::auth::session::{extract_bearer, session_context};
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

#[utoipa::path(
    post,
    path = "/v1/users/household/select",
    tag = "users",
    request_body = ChangeActiveHouseholdRequest,
    responses(
        (status = 202),
        (status = 400, body = crate::api::types::ErrorResponse),
        (status = 401, body = crate::api::types::ErrorResponse),
        (status = 403, body = crate::api::types::ErrorResponse)
    )
)]
pub async fn select_household(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ChangeActiveHouseholdRequest>,
) -> Result<StatusCode, ApiError> {
    let ctx = session_context(&state, &headers).await?;
    let household_id = body.household_id.trim();
    if household_id.is_empty() {
        return Err(api_validation_error("household_id is required"));
    }
    household_checker(&ctx, household_id)?;

    let token = extract_bearer(&headers).ok_or_else(|| api_unauthorized("missing bearer token"))?;
    let mut record = state
        .store
        .get_session(token)
        .await
        .map_err(|err| api_internal("failed to load session", &err))?
        .ok_or_else(|| api_unauthorized("invalid session"))?;
    let previous = record.active_household_id.replace(household_id.to_string());
    state
        .store
        .put_session(token, record)
        .await
        .map_err(|err| api_internal("failed to store session", &err))?;
    tracing::info!(
        user_id = %ctx.requester.user_id,
        old_household_id = ?previous,
        %household_id,
        "active household changed"
    );
    Ok(StatusCode::ACCEPTED)
}
