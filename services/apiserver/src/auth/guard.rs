//! Permission gates shared by handlers.
//!
//! # Purpose and responsibility
//! Turns checker answers into HTTP outcomes: `true` proceeds, `false` becomes
//! `403 Forbidden`. Every denial is logged and counted.
//!
//! # Key invariants and assumptions
//! - Gates run before any store access for the guarded operation.
//! - A caller without a checker for the target household is not a member and
//!   is denied, whether or not the household exists.
use crate::api::error::{ApiError, api_forbidden};
use crate::app::AppState;
use crate::auth::session::{SessionContextData, session_context};
use crate::observability::PERMISSION_DENIED_COUNTER;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use larder_authz::HouseholdRolePermissionChecker;

/// Allow when `allowed`, otherwise record the denial and return 403.
pub fn require(allowed: bool, permission: &'static str) -> Result<(), ApiError> {
    if allowed {
        return Ok(());
    }
    tracing::debug!(permission, "permission denied");
    metrics::counter!(PERMISSION_DENIED_COUNTER, "permission" => permission).increment(1);
    Err(api_forbidden(&format!("missing {permission}")))
}

/// The caller's checker for `household_id`, or 403 for non-members.
pub fn household_checker<'a>(
    ctx: &'a SessionContextData,
    household_id: &str,
) -> Result<&'a HouseholdRolePermissionChecker, ApiError> {
    match ctx.household_checker(household_id) {
        Some(checker) => Ok(checker),
        None => {
            tracing::debug!(
                user_id = %ctx.requester.user_id,
                household_id,
                "caller is not a household member"
            );
            metrics::counter!(PERMISSION_DENIED_COUNTER, "permission" => "household_member")
                .increment(1);
            Err(api_forbidden("not a member of this household"))
        }
    }
}

/// Middleware for service administration routes.
///
/// Resolves the session, requires the literal service admin role, and makes
/// the [`SessionContextData`] available to handlers as an extension.
pub async fn service_admin_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx = session_context(&state, request.headers()).await?;
    require(
        ctx.requester.service_permissions.is_service_admin(),
        "service_admin",
    )?;
    request.extensions_mut().insert(ctx);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::SessionRecord;
    use crate::model::AccountStatus;
    use axum::http::StatusCode;
    use std::collections::BTreeMap;

    #[test]
    fn require_maps_denial_to_forbidden() {
        assert!(require(true, "update_household").is_ok());
        let err = require(false, "update_household").expect_err("denied");
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.body.code, "forbidden");
        assert!(err.body.message.contains("update_household"));
    }

    #[test]
    fn household_checker_rejects_non_members() {
        let ctx = SessionContextData::from_record(SessionRecord {
            user_id: "u1".to_string(),
            account_status: AccountStatus::GoodStanding,
            service_roles: vec![],
            active_household_id: None,
            household_roles: BTreeMap::from([(
                "h1".to_string(),
                vec!["household_member".to_string()],
            )]),
        });
        assert!(household_checker(&ctx, "h1").is_ok());
        let err = household_checker(&ctx, "h2").expect_err("not a member");
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }
}
