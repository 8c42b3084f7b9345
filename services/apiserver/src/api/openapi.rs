//! OpenAPI schema aggregation for the API server.
use crate::api::{
    admin, households, permissions, sessions, system,
    types::{
        ChangeActiveHouseholdRequest, ErrorResponse, HealthStatus, HouseholdTransferRequest,
        HouseholdUpdateRequest, PermissionSummaryResponse, UserAccountStatusUpdateRequest,
        UserPermissionsRequest, UserPermissionsResponse,
    },
};
use crate::model::{AccountStatus, Household, Webhook};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "larder-apiserver",
        version = "v1",
        description = "Larder household and permission API"
    ),
    paths(
        system::system_health,
        permissions::self_permissions,
        permissions::check_permissions,
        sessions::select_household,
        households::update_household,
        households::archive_household,
        households::transfer_household,
        households::remove_member,
        households::list_webhooks,
        admin::update_user_account_status,
        admin::cycle_cookie_secret
    ),
    components(schemas(
        ErrorResponse,
        HealthStatus,
        UserPermissionsRequest,
        UserPermissionsResponse,
        PermissionSummaryResponse,
        ChangeActiveHouseholdRequest,
        HouseholdUpdateRequest,
        HouseholdTransferRequest,
        UserAccountStatusUpdateRequest,
        AccountStatus,
        Household,
        Webhook
    )),
    tags(
        (name = "system", description = "System endpoints"),
        (name = "users", description = "Caller permissions"),
        (name = "households", description = "Household administration"),
        (name = "admin", description = "Service administration")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_guarded_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/v1/users/permissions/check"));
        assert!(paths.iter().any(|p| p.as_str() == "/v1/admin/cycle_cookie_secret"));
        assert!(paths
            .iter()
            .any(|p| p.as_str() == "/v1/households/{household_id}/transfer"));
        assert!(paths.iter().any(|p| p.as_str() == "/v1/users/household/select"));
    }
}
