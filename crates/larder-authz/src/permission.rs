//! Statically enumerated permissions.
//!
//! # Purpose
//! Every action a role can be granted is a [`Permission`] variant with a
//! canonical snake_case name. The name is what callers put on the wire (for
//! example in a permission query request) and what serde emits.
//!
//! # Key invariants
//! - Canonical names are unique and stable; renaming one breaks stored
//!   clients that ask about it by name.
//! - [`Permission::ALL`] lists every variant exactly once.
//!
//! # Examples
//! ```rust
//! use larder_authz::Permission;
//!
//! let perm: Permission = "read_webhooks".parse().expect("known permission");
//! assert_eq!(perm, Permission::ReadWebhooks);
//! assert_eq!(perm.to_string(), "read_webhooks");
//! ```
use crate::AuthzError;
use serde::{Deserialize, Serialize};

macro_rules! permissions {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum Permission {
            $($(#[$meta])* $variant,)+
        }

        impl Permission {
            /// Every permission, in declaration order.
            pub const ALL: &'static [Permission] = &[$(Permission::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Permission::$variant => $name,)+
                }
            }
        }

        impl std::str::FromStr for Permission {
            type Err = AuthzError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($name => Ok(Permission::$variant),)+
                    _ => Err(AuthzError::InvalidPermission(value.to_string())),
                }
            }
        }
    };
}

permissions! {
    // Service scope.
    /// Rotate the cookie signing secret.
    CycleCookieSecret => "update_cookie_secret",
    /// Ban, terminate, or restore user accounts.
    UpdateUserStatus => "update_user_status",
    ReadUser => "read_user",
    SearchUser => "search_user",
    ImpersonateUser => "impersonate_user",
    CreateValidIngredients => "create_valid_ingredients",
    UpdateValidIngredients => "update_valid_ingredients",
    ArchiveValidIngredients => "archive_valid_ingredients",
    CreateValidInstruments => "create_valid_instruments",
    UpdateValidInstruments => "update_valid_instruments",
    ArchiveValidInstruments => "archive_valid_instruments",
    CreateValidPreparations => "create_valid_preparations",
    UpdateValidPreparations => "update_valid_preparations",
    ArchiveValidPreparations => "archive_valid_preparations",

    // Household scope.
    UpdateHousehold => "update_household",
    ArchiveHousehold => "archive_household",
    InviteUserToHousehold => "household_user_invite",
    ModifyMemberPermissionsForHousehold => "modify_member_permissions_for_household",
    RemoveMemberHousehold => "remove_member_household",
    /// Hand a household over to another member.
    TransferHousehold => "transfer_household",
    CreateWebhooks => "create_webhooks",
    ReadWebhooks => "read_webhooks",
    UpdateWebhooks => "update_webhooks",
    ArchiveWebhooks => "archive_webhooks",
    CreateApiClients => "create_api_clients",
    ReadApiClients => "read_api_clients",
    ArchiveApiClients => "archive_api_clients",
    CreateRecipes => "create_recipes",
    ReadRecipes => "read_recipes",
    UpdateRecipes => "update_recipes",
    ArchiveRecipes => "archive_recipes",
    CreateMealPlans => "create_meal_plans",
    ReadMealPlans => "read_meal_plans",
    UpdateMealPlans => "update_meal_plans",
    ArchiveMealPlans => "archive_meal_plans",
    CreateMealPlanOptionVotes => "create_meal_plan_option_votes",
}

impl Permission {
    /// Parse a permission name.
    ///
    /// # Errors
    /// - [`AuthzError::InvalidPermission`] if the name is not canonical.
    pub fn parse(value: &str) -> crate::AuthzResult<Self> {
        value.parse()
    }
}

impl TryFrom<String> for Permission {
    type Error = AuthzError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for &'static str {
    fn from(permission: Permission) -> Self {
        permission.as_str()
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn permission_string_roundtrip() {
        for permission in Permission::ALL {
            let as_str = permission.as_str();
            assert_eq!(Permission::parse(as_str).ok(), Some(*permission));
            assert_eq!(permission.to_string(), as_str);
        }
    }

    #[test]
    fn permission_names_are_unique() {
        let names: HashSet<&str> = Permission::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(names.len(), Permission::ALL.len());
    }

    #[test]
    fn permission_from_str_invalid() {
        let err = Permission::parse("update_everything").expect_err("unknown permission");
        assert!(matches!(err, AuthzError::InvalidPermission(_)));
    }

    #[test]
    fn permission_serde_uses_canonical_names() {
        let encoded = serde_json::to_string(&Permission::TransferHousehold).expect("encode");
        assert_eq!(encoded, "\"transfer_household\"");
        let encoded = serde_json::to_string(&Permission::CycleCookieSecret).expect("encode");
        assert_eq!(encoded, "\"update_cookie_secret\"");
        let decoded: Permission =
            serde_json::from_str("\"household_user_invite\"").expect("decode");
        assert_eq!(decoded, Permission::InviteUserToHousehold);
    }
}
