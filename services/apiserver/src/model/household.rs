use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Webhook {
    pub webhook_id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Household {
    pub household_id: String,
    pub name: String,
    pub owner_user_id: String,
    /// Member user id → household role names.
    pub members: BTreeMap<String, Vec<String>>,
    pub webhooks: Vec<Webhook>,
}

impl Household {
    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.contains_key(user_id)
    }
}
