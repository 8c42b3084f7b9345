//! HTTP API request/response types.
use crate::model::AccountStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
    pub backend: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserPermissionsRequest {
    pub permissions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserPermissionsResponse {
    /// Permission name → granted by either the active household or the service role.
    pub permissions: BTreeMap<String, bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PermissionSummaryResponse {
    pub user_id: String,
    pub service_roles: Vec<String>,
    pub service_permissions: BTreeMap<String, bool>,
    pub active_household_id: Option<String>,
    pub household_roles: Vec<String>,
    pub household_permissions: BTreeMap<String, bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HouseholdUpdateRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HouseholdTransferRequest {
    pub new_owner_user_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserAccountStatusUpdateRequest {
    pub target_user_id: String,
    pub new_status: AccountStatus,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ChangeActiveHouseholdRequest {
    pub household_id: String,
}
