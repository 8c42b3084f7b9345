use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Unverified,
    GoodStanding,
    Banned,
    Terminated,
}

impl AccountStatus {
    /// Banned and terminated accounts may not use existing sessions.
    pub fn is_locked_out(self) -> bool {
        matches!(self, AccountStatus::Banned | AccountStatus::Terminated)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub account_status: AccountStatus,
    /// Reason given by the admin who last changed `account_status`.
    pub account_status_explanation: String,
    pub service_roles: Vec<String>,
}
