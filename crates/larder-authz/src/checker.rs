//! Request-scoped permission checkers.
//!
//! # Purpose and responsibility
//! A checker holds the role names a user has in one scope (service-wide or
//! within one household) and answers permission questions against the
//! process-wide [`RoleRegistry`](crate::RoleRegistry).
//!
//! # Key invariants and assumptions
//! - Checkers are immutable after construction and hold nothing but role
//!   names; they serialize as a plain ordered list of strings.
//! - `has_permission` is the union over held roles. Holding no roles, or only
//!   unknown roles, denies everything.
//! - `is_service_admin` is an identity test on the literal `service_admin`
//!   name. It does not consult the grant table.
//!
//! # Examples
//! ```rust
//! use larder_authz::{HouseholdRolePermissionChecker, PermissionChecker, Permission};
//!
//! let checker = HouseholdRolePermissionChecker::new(["household_member"]);
//! assert!(checker.can_see_webhooks());
//! assert!(!checker.has_permission(Permission::UpdateHousehold));
//! ```
use crate::Permission;
use crate::registry::registry;
use crate::role::SERVICE_ADMIN_ROLE_NAME;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shared behavior of service- and household-scoped checkers.
pub trait PermissionChecker {
    /// Role names held, in the order they were supplied.
    fn roles(&self) -> &[String];

    /// Name → result for every named predicate of this checker.
    ///
    /// Intended for display; access decisions call the predicates directly.
    fn permission_summary(&self) -> BTreeMap<&'static str, bool>;

    fn has_permission(&self, permission: Permission) -> bool {
        let registry = registry();
        self.roles()
            .iter()
            .any(|role| registry.grants(role, permission))
    }

    /// Like [`has_permission`](Self::has_permission) for a permission given by
    /// name; unknown names are denied.
    fn has_permission_named(&self, permission: &str) -> bool {
        Permission::parse(permission).is_ok_and(|permission| self.has_permission(permission))
    }
}

fn collect_roles<I, S>(roles: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    roles.into_iter().map(Into::into).collect()
}

/// Checker for the roles a user holds within one household.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseholdRolePermissionChecker {
    roles: Vec<String>,
}

impl HouseholdRolePermissionChecker {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: collect_roles(roles),
        }
    }

    pub fn can_update_households(&self) -> bool {
        self.has_permission(Permission::UpdateHousehold)
    }

    /// Households are archived rather than deleted.
    pub fn can_delete_households(&self) -> bool {
        self.has_permission(Permission::ArchiveHousehold)
    }

    pub fn can_add_member_to_households(&self) -> bool {
        self.has_permission(Permission::InviteUserToHousehold)
    }

    pub fn can_remove_member_from_households(&self) -> bool {
        self.has_permission(Permission::RemoveMemberHousehold)
    }

    pub fn can_transfer_household_to_new_owner(&self) -> bool {
        self.has_permission(Permission::TransferHousehold)
    }

    pub fn can_create_webhooks(&self) -> bool {
        self.has_permission(Permission::CreateWebhooks)
    }

    pub fn can_see_webhooks(&self) -> bool {
        self.has_permission(Permission::ReadWebhooks)
    }

    pub fn can_update_webhooks(&self) -> bool {
        self.has_permission(Permission::UpdateWebhooks)
    }

    pub fn can_archive_webhooks(&self) -> bool {
        self.has_permission(Permission::ArchiveWebhooks)
    }
}

impl PermissionChecker for HouseholdRolePermissionChecker {
    fn roles(&self) -> &[String] {
        &self.roles
    }

    fn permission_summary(&self) -> BTreeMap<&'static str, bool> {
        BTreeMap::from([
            ("can_update_households", self.can_update_households()),
            ("can_delete_households", self.can_delete_households()),
            (
                "can_add_member_to_households",
                self.can_add_member_to_households(),
            ),
            (
                "can_remove_member_from_households",
                self.can_remove_member_from_households(),
            ),
            (
                "can_transfer_household_to_new_owner",
                self.can_transfer_household_to_new_owner(),
            ),
            ("can_create_webhooks", self.can_create_webhooks()),
            ("can_see_webhooks", self.can_see_webhooks()),
            ("can_update_webhooks", self.can_update_webhooks()),
            ("can_archive_webhooks", self.can_archive_webhooks()),
        ])
    }
}

/// Checker for the roles a user holds across the whole service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceRolePermissionChecker {
    roles: Vec<String>,
}

impl ServiceRolePermissionChecker {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: collect_roles(roles),
        }
    }

    /// Household checker over the same role names.
    pub fn as_household_role_permission_checker(&self) -> HouseholdRolePermissionChecker {
        HouseholdRolePermissionChecker::new(self.roles.iter().cloned())
    }

    pub fn is_service_admin(&self) -> bool {
        self.roles.iter().any(|role| role == SERVICE_ADMIN_ROLE_NAME)
    }

    pub fn can_cycle_cookie_secrets(&self) -> bool {
        self.has_permission(Permission::CycleCookieSecret)
    }

    pub fn can_update_user_account_statuses(&self) -> bool {
        self.has_permission(Permission::UpdateUserStatus)
    }

    pub fn can_see_user_data(&self) -> bool {
        self.has_permission(Permission::ReadUser)
    }

    pub fn can_search_users(&self) -> bool {
        self.has_permission(Permission::SearchUser)
    }
}

impl PermissionChecker for ServiceRolePermissionChecker {
    fn roles(&self) -> &[String] {
        &self.roles
    }

    fn permission_summary(&self) -> BTreeMap<&'static str, bool> {
        BTreeMap::from([
            ("is_service_admin", self.is_service_admin()),
            ("can_cycle_cookie_secrets", self.can_cycle_cookie_secrets()),
            (
                "can_update_user_account_statuses",
                self.can_update_user_account_statuses(),
            ),
            ("can_see_user_data", self.can_see_user_data()),
            ("can_search_users", self.can_search_users()),
        ])
    }
}
