//! Session records and per-request session context.
//!
//! # Purpose and responsibility
//! A [`SessionRecord`] is what the session store persists for a logged-in
//! user: role names as plain string lists. [`SessionContextData`] is built
//! from a record once per request and owns the permission checkers handlers
//! consult.
//!
//! # Key invariants and assumptions
//! - Checkers are rebuilt from the persisted role names on every request and
//!   never shared across requests.
//! - A household absent from `household_roles` has no checker; handlers treat
//!   that as "not a member".
//!
//! # Security considerations
//! - Role lists are snapshots taken at login. Membership changes apply to new
//!   sessions only.
//! - Account status is read from the user store on every request, so a ban
//!   takes effect on existing sessions immediately.
use crate::api::error::{ApiError, api_forbidden, api_internal, api_unauthorized};
use crate::app::AppState;
use crate::model::AccountStatus;
use crate::store::StoreError;
use axum::http::HeaderMap;
use larder_authz::{HouseholdRolePermissionChecker, ServiceRolePermissionChecker};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: String,
    pub account_status: AccountStatus,
    pub service_roles: Vec<String>,
    pub active_household_id: Option<String>,
    /// Household id → role names held in that household.
    pub household_roles: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct RequesterInfo {
    pub user_id: String,
    pub account_status: AccountStatus,
    pub service_permissions: ServiceRolePermissionChecker,
}

#[derive(Debug, Clone)]
pub struct SessionContextData {
    pub requester: RequesterInfo,
    pub active_household_id: Option<String>,
    pub household_permissions: HashMap<String, HouseholdRolePermissionChecker>,
}

impl SessionContextData {
    pub fn from_record(record: SessionRecord) -> Self {
        let household_permissions = record
            .household_roles
            .into_iter()
            .map(|(household_id, roles)| (household_id, HouseholdRolePermissionChecker::new(roles)))
            .collect();
        Self {
            requester: RequesterInfo {
                user_id: record.user_id,
                account_status: record.account_status,
                service_permissions: ServiceRolePermissionChecker::new(record.service_roles),
            },
            active_household_id: record.active_household_id,
            household_permissions,
        }
    }

    pub fn household_checker(&self, household_id: &str) -> Option<&HouseholdRolePermissionChecker> {
        self.household_permissions.get(household_id)
    }

    /// Checker for the active household; denies everything when there is none.
    pub fn active_household_checker(&self) -> HouseholdRolePermissionChecker {
        self.active_household_id
            .as_deref()
            .and_then(|household_id| self.household_checker(household_id))
            .cloned()
            .unwrap_or_default()
    }
}

/// Resolve the caller's session from the `Authorization: Bearer` header.
///
/// # Errors
/// - 401 when the header is missing, the token is unknown, or the session's
///   user no longer exists.
/// - 403 when the user is banned or terminated.
/// - 500 when the store fails.
pub async fn session_context(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<SessionContextData, ApiError> {
    let token = extract_bearer(headers).ok_or_else(|| api_unauthorized("missing bearer token"))?;
    let mut record = state
        .store
        .get_session(token)
        .await
        .map_err(|err| api_internal("failed to load session", &err))?
        .ok_or_else(|| api_unauthorized("invalid session"))?;
    let user = match state.store.get_user(&record.user_id).await {
        Ok(user) => user,
        Err(StoreError::NotFound(_)) => return Err(api_unauthorized("invalid session")),
        Err(err) => return Err(api_internal("failed to load session user", &err)),
    };
    if user.account_status.is_locked_out() {
        tracing::debug!(
            user_id = %user.user_id,
            status = ?user.account_status,
            "rejecting session for locked out account"
        );
        let message = if user.account_status_explanation.is_empty() {
            "account is not in good standing"
        } else {
            user.account_status_explanation.as_str()
        };
        return Err(api_forbidden(message));
    }
    record.account_status = user.account_status;
    tracing::debug!(user_id = %record.user_id, "session resolved");
    Ok(SessionContextData::from_record(record))
}

pub(crate) fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(axum::http::header::AUTHORIZATION)?;
    let value = value.to_str().ok()?;
    value.strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_authz::PermissionChecker;

    fn record() -> SessionRecord {
        SessionRecord {
            user_id: "u1".to_string(),
            account_status: AccountStatus::GoodStanding,
            service_roles: vec!["service_user".to_string()],
            active_household_id: Some("h1".to_string()),
            household_roles: BTreeMap::from([
                ("h1".to_string(), vec!["household_admin".to_string()]),
                ("h2".to_string(), vec!["household_member".to_string()]),
            ]),
        }
    }

    #[test]
    fn context_builds_checkers_per_household() {
        let ctx = SessionContextData::from_record(record());
        assert!(!ctx.requester.service_permissions.is_service_admin());
        assert!(ctx.active_household_checker().can_update_households());
        let h2 = ctx.household_checker("h2").expect("member of h2");
        assert!(!h2.can_update_households());
        assert!(h2.can_see_webhooks());
        assert!(ctx.household_checker("h3").is_none());
    }

    #[test]
    fn missing_active_household_denies_everything() {
        let mut record = record();
        record.active_household_id = None;
        let ctx = SessionContextData::from_record(record);
        assert!(ctx.active_household_checker().roles().is_empty());
        assert!(!ctx.active_household_checker().can_see_webhooks());
    }

    #[test]
    fn record_json_roundtrip_preserves_permissions() {
        let original = record();
        let encoded = serde_json::to_string(&original).expect("encode");
        let decoded: SessionRecord = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded, original);

        let before = SessionContextData::from_record(original);
        let after = SessionContextData::from_record(decoded);
        assert_eq!(
            before.requester.service_permissions.permission_summary(),
            after.requester.service_permissions.permission_summary()
        );
        assert_eq!(
            before.active_household_checker().permission_summary(),
            after.active_household_checker().permission_summary()
        );
    }

    #[test]
    fn extract_bearer_requires_prefix() {
        let mut headers = HeaderMap::new();
        assert!(extract_bearer(&headers).is_none());
        headers.insert(
            axum::http::header::AUTHORIZATION,
            "Basic abc".parse().expect("header"),
        );
        assert!(extract_bearer(&headers).is_none());
        headers.insert(
            axum::http::header::AUTHORIZATION,
            "Bearer token-1".parse().expect("header"),
        );
        assert_eq!(extract_bearer(&headers), Some("token-1"));
    }
}
