//! Larder role and permission primitives.
//!
//! # Purpose
//! Owns the static role → permission grant table and the request-scoped
//! checkers that HTTP handlers consult before touching the data store.
//!
//! # How it fits
//! The API server resolves a session, builds one service-scoped checker and
//! one household-scoped checker per household membership from persisted role
//! name lists, and translates a `false` answer into `403 Forbidden`.
//!
//! # Key invariants
//! - The grant table is initialized once ([`init_roles`]) and read-only
//!   afterwards.
//! - Permission checks never fail: unknown or missing roles deny.
//!
//! # Examples
//! ```rust
//! use larder_authz::{ServiceRolePermissionChecker, init_roles};
//!
//! init_roles();
//! let checker = ServiceRolePermissionChecker::new(["service_admin"]);
//! assert!(checker.is_service_admin());
//! assert!(checker.can_cycle_cookie_secrets());
//! ```

mod checker;
mod errors;
mod permission;
mod registry;
mod role;

pub use checker::{HouseholdRolePermissionChecker, PermissionChecker, ServiceRolePermissionChecker};
pub use errors::{AuthzError, AuthzResult};
pub use permission::Permission;
pub use registry::{RoleRegistry, RoleRegistryBuilder, init_roles, registry};
pub use role::{
    HOUSEHOLD_ADMIN_ROLE_NAME, HOUSEHOLD_MEMBER_ROLE_NAME, HouseholdRole,
    SERVICE_ADMIN_ROLE_NAME, SERVICE_USER_ROLE_NAME, ServiceRole,
};
