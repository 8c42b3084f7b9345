//! Process-wide role → permission grant table.
//!
//! # Purpose and responsibility
//! Defines, once, which permissions each of the four known roles grants.
//!
//! # Key invariants and assumptions
//! - The table is built exactly once by [`init_roles`] (or lazily by
//!   [`registry`]) and never mutated afterwards, so request handlers read it
//!   concurrently without locks.
//! - Inheritance is flattened: `household_admin` carries every
//!   `household_member` grant, and `service_admin` carries every
//!   `household_admin` grant.
//! - Unknown role names resolve to the empty set.
//!
//! # Security considerations
//! - Registration is not reachable at runtime; only the builder used by
//!   [`init_roles`] can populate a registry.
use crate::Permission;
use crate::role::{
    HOUSEHOLD_ADMIN_ROLE_NAME, HOUSEHOLD_MEMBER_ROLE_NAME, SERVICE_ADMIN_ROLE_NAME,
    SERVICE_USER_ROLE_NAME,
};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

static REGISTRY: OnceLock<RoleRegistry> = OnceLock::new();

const HOUSEHOLD_MEMBER_PERMISSIONS: &[Permission] = &[
    Permission::ReadWebhooks,
    Permission::ReadApiClients,
    Permission::CreateRecipes,
    Permission::ReadRecipes,
    Permission::ReadMealPlans,
    Permission::CreateMealPlanOptionVotes,
];

const HOUSEHOLD_ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::UpdateHousehold,
    Permission::ArchiveHousehold,
    Permission::InviteUserToHousehold,
    Permission::ModifyMemberPermissionsForHousehold,
    Permission::RemoveMemberHousehold,
    Permission::TransferHousehold,
    Permission::CreateWebhooks,
    Permission::UpdateWebhooks,
    Permission::ArchiveWebhooks,
    Permission::CreateApiClients,
    Permission::ArchiveApiClients,
    Permission::UpdateRecipes,
    Permission::ArchiveRecipes,
    Permission::CreateMealPlans,
    Permission::UpdateMealPlans,
    Permission::ArchiveMealPlans,
];

const SERVICE_ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::CycleCookieSecret,
    Permission::UpdateUserStatus,
    Permission::ReadUser,
    Permission::SearchUser,
    Permission::ImpersonateUser,
    Permission::CreateValidIngredients,
    Permission::UpdateValidIngredients,
    Permission::ArchiveValidIngredients,
    Permission::CreateValidInstruments,
    Permission::UpdateValidInstruments,
    Permission::ArchiveValidInstruments,
    Permission::CreateValidPreparations,
    Permission::UpdateValidPreparations,
    Permission::ArchiveValidPreparations,
];

/// Immutable mapping from role name to granted permissions.
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    grants: HashMap<&'static str, HashSet<Permission>>,
}

impl RoleRegistry {
    pub fn builder() -> RoleRegistryBuilder {
        RoleRegistryBuilder::default()
    }

    /// Every permission granted to `role`; empty for unknown names.
    pub fn all_permissions_for(&self, role: &str) -> HashSet<Permission> {
        self.grants.get(role).cloned().unwrap_or_default()
    }

    pub fn grants(&self, role: &str, permission: Permission) -> bool {
        self.grants
            .get(role)
            .is_some_and(|granted| granted.contains(&permission))
    }

    /// Registered role names, sorted.
    pub fn role_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.grants.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[derive(Debug, Default)]
pub struct RoleRegistryBuilder {
    grants: HashMap<&'static str, HashSet<Permission>>,
}

impl RoleRegistryBuilder {
    /// Register a role and the permissions it grants.
    ///
    /// Registering the same name twice is a programming error.
    pub fn register_role(
        mut self,
        name: &'static str,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        debug_assert!(
            !self.grants.contains_key(name),
            "role {name} registered twice"
        );
        self.grants.insert(name, permissions.into_iter().collect());
        self
    }

    pub fn build(self) -> RoleRegistry {
        RoleRegistry {
            grants: self.grants,
        }
    }
}

fn default_registry() -> RoleRegistry {
    let member = HOUSEHOLD_MEMBER_PERMISSIONS.iter().copied();
    let admin = member.clone().chain(HOUSEHOLD_ADMIN_PERMISSIONS.iter().copied());
    let service_admin = admin.clone().chain(SERVICE_ADMIN_PERMISSIONS.iter().copied());

    RoleRegistry::builder()
        .register_role(HOUSEHOLD_MEMBER_ROLE_NAME, member)
        .register_role(HOUSEHOLD_ADMIN_ROLE_NAME, admin)
        .register_role(SERVICE_USER_ROLE_NAME, std::iter::empty())
        .register_role(SERVICE_ADMIN_ROLE_NAME, service_admin)
        .build()
}

/// Build the process-wide grant table.
///
/// Call from process bootstrap before accepting requests. Repeated calls
/// return the already-initialized registry.
pub fn init_roles() -> &'static RoleRegistry {
    REGISTRY.get_or_init(|| {
        let registry = default_registry();
        tracing::debug!(roles = ?registry.role_names(), "role registry initialized");
        registry
    })
}

/// The process-wide registry, initialized on first use if bootstrap did not.
pub fn registry() -> &'static RoleRegistry {
    init_roles()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_four_roles() {
        assert_eq!(
            registry().role_names(),
            vec![
                "household_admin",
                "household_member",
                "service_admin",
                "service_user"
            ]
        );
    }

    #[test]
    fn unknown_role_grants_nothing() {
        let registry = registry();
        assert!(registry.all_permissions_for("bogus_role").is_empty());
        for permission in Permission::ALL {
            assert!(!registry.grants("bogus_role", *permission));
        }
    }

    #[test]
    fn grants_are_nested() {
        let registry = registry();
        let member = registry.all_permissions_for(HOUSEHOLD_MEMBER_ROLE_NAME);
        let admin = registry.all_permissions_for(HOUSEHOLD_ADMIN_ROLE_NAME);
        let service_admin = registry.all_permissions_for(SERVICE_ADMIN_ROLE_NAME);
        assert!(member.is_subset(&admin));
        assert!(admin.is_subset(&service_admin));
        assert!(member.len() < admin.len());
        assert!(admin.len() < service_admin.len());
    }

    #[test]
    fn service_user_grants_nothing() {
        assert!(
            registry()
                .all_permissions_for(SERVICE_USER_ROLE_NAME)
                .is_empty()
        );
    }

    #[test]
    fn init_roles_is_idempotent() {
        let first = init_roles() as *const RoleRegistry;
        let second = init_roles() as *const RoleRegistry;
        assert_eq!(first, second);
    }

    #[test]
    fn builder_registers_custom_roles() {
        let registry = RoleRegistry::builder()
            .register_role("auditor", [Permission::ReadUser])
            .build();
        assert!(registry.grants("auditor", Permission::ReadUser));
        assert!(!registry.grants("auditor", Permission::SearchUser));
        assert_eq!(registry.role_names(), vec!["auditor"]);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    #[cfg(debug_assertions)]
    fn builder_rejects_duplicate_roles_in_debug() {
        let _ = RoleRegistry::builder()
            .register_role("auditor", [Permission::ReadUser])
            .register_role("auditor", [Permission::SearchUser]);
    }

    #[test]
    fn every_permission_is_granted_to_some_role() {
        let registry = registry();
        for permission in Permission::ALL {
            assert!(
                registry.grants(SERVICE_ADMIN_ROLE_NAME, *permission),
                "{permission} is not reachable"
            );
        }
    }
}
