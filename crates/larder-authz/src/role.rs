//! Role identities for the two role universes.
//!
//! # Purpose
//! Service roles apply instance-wide; household roles apply within a single
//! household. A role's identity is its canonical name, which is what gets
//! persisted on user and household-membership records.
//!
//! # Key invariants
//! - `ServiceRole::Invalid` exists so that an unset service role has a
//!   rendering; it is never registered and grants nothing.
use crate::AuthzError;
use serde::{Deserialize, Serialize};

pub const SERVICE_USER_ROLE_NAME: &str = "service_user";
pub const SERVICE_ADMIN_ROLE_NAME: &str = "service_admin";
pub const HOUSEHOLD_MEMBER_ROLE_NAME: &str = "household_member";
pub const HOUSEHOLD_ADMIN_ROLE_NAME: &str = "household_admin";

const INVALID_SERVICE_ROLE_NAME: &str = "INVALID_SERVICE_ROLE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceRole {
    #[serde(rename = "INVALID_SERVICE_ROLE")]
    Invalid,
    ServiceUser,
    ServiceAdmin,
}

impl ServiceRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceRole::Invalid => INVALID_SERVICE_ROLE_NAME,
            ServiceRole::ServiceUser => SERVICE_USER_ROLE_NAME,
            ServiceRole::ServiceAdmin => SERVICE_ADMIN_ROLE_NAME,
        }
    }
}

impl std::fmt::Display for ServiceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ServiceRole {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            SERVICE_USER_ROLE_NAME => Ok(ServiceRole::ServiceUser),
            SERVICE_ADMIN_ROLE_NAME => Ok(ServiceRole::ServiceAdmin),
            _ => Err(AuthzError::InvalidRole(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdRole {
    HouseholdMember,
    HouseholdAdmin,
}

impl HouseholdRole {
    pub fn as_str(self) -> &'static str {
        match self {
            HouseholdRole::HouseholdMember => HOUSEHOLD_MEMBER_ROLE_NAME,
            HouseholdRole::HouseholdAdmin => HOUSEHOLD_ADMIN_ROLE_NAME,
        }
    }
}

impl std::fmt::Display for HouseholdRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HouseholdRole {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            HOUSEHOLD_MEMBER_ROLE_NAME => Ok(HouseholdRole::HouseholdMember),
            HOUSEHOLD_ADMIN_ROLE_NAME => Ok(HouseholdRole::HouseholdAdmin),
            _ => Err(AuthzError::InvalidRole(value.to_string())),
        }
    }
}
