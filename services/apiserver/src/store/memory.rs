//! In-memory implementation of the API store.
//!
//! # Purpose
//! Keeps sessions, households, and users in `HashMap`s guarded by
//! `tokio::sync::RwLock`, for local development and tests.
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - Sessions are stored JSON-encoded, the same shape a cookie or cache
//!   backend would hold, so every lookup decodes the persisted role lists.
//! - Archived households move out of the active map; lookups then report
//!   them as not found.
use super::{
    ApiStore, HouseholdStore, SessionStore, StoreError, StoreResult, UserStore,
};
use crate::auth::session::SessionRecord;
use crate::model::{AccountStatus, Household, User, Webhook};
use anyhow::Context;
use async_trait::async_trait;
use larder_authz::{HOUSEHOLD_ADMIN_ROLE_NAME, HOUSEHOLD_MEMBER_ROLE_NAME};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStore {
    /// Session token → JSON-encoded [`SessionRecord`].
    sessions: Arc<RwLock<HashMap<String, String>>>,
    households: Arc<RwLock<HashMap<String, Household>>>,
    archived_households: Arc<RwLock<HashMap<String, Household>>>,
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn household_not_found(household_id: &str) -> StoreError {
    StoreError::NotFound(format!("household {household_id}"))
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn get_session(&self, token: &str) -> StoreResult<Option<SessionRecord>> {
        let sessions = self.sessions.read().await;
        let Some(encoded) = sessions.get(token) else {
            return Ok(None);
        };
        let record = serde_json::from_str(encoded).context("decode session record")?;
        Ok(Some(record))
    }

    async fn put_session(&self, token: &str, record: SessionRecord) -> StoreResult<()> {
        let encoded = serde_json::to_string(&record).context("encode session record")?;
        self.sessions
            .write()
            .await
            .insert(token.to_string(), encoded);
        Ok(())
    }
}

#[async_trait]
impl HouseholdStore for InMemoryStore {
    async fn create_household(&self, household: Household) -> StoreResult<Household> {
        let mut households = self.households.write().await;
        if households.contains_key(&household.household_id) {
            return Err(StoreError::Conflict("household exists".into()));
        }
        households.insert(household.household_id.clone(), household.clone());
        Ok(household)
    }

    async fn get_household(&self, household_id: &str) -> StoreResult<Household> {
        self.households
            .read()
            .await
            .get(household_id)
            .cloned()
            .ok_or_else(|| household_not_found(household_id))
    }

    async fn update_household_name(
        &self,
        household_id: &str,
        name: &str,
    ) -> StoreResult<Household> {
        let mut households = self.households.write().await;
        let household = households
            .get_mut(household_id)
            .ok_or_else(|| household_not_found(household_id))?;
        household.name = name.to_string();
        Ok(household.clone())
    }

    async fn archive_household(&self, household_id: &str) -> StoreResult<()> {
        let household = self
            .households
            .write()
            .await
            .remove(household_id)
            .ok_or_else(|| household_not_found(household_id))?;
        self.archived_households
            .write()
            .await
            .insert(household_id.to_string(), household);
        Ok(())
    }

    async fn transfer_household(
        &self,
        household_id: &str,
        new_owner_user_id: &str,
    ) -> StoreResult<Household> {
        let mut households = self.households.write().await;
        let household = households
            .get_mut(household_id)
            .ok_or_else(|| household_not_found(household_id))?;
        if !household.is_member(new_owner_user_id) {
            return Err(StoreError::Conflict(
                "new owner is not a household member".into(),
            ));
        }
        if household.owner_user_id == new_owner_user_id {
            return Ok(household.clone());
        }
        // The previous owner stays on as a plain member.
        let previous_owner = std::mem::replace(
            &mut household.owner_user_id,
            new_owner_user_id.to_string(),
        );
        if let Some(roles) = household.members.get_mut(&previous_owner) {
            *roles = vec![HOUSEHOLD_MEMBER_ROLE_NAME.to_string()];
        }
        household.members.insert(
            new_owner_user_id.to_string(),
            vec![HOUSEHOLD_ADMIN_ROLE_NAME.to_string()],
        );
        Ok(household.clone())
    }

    async fn remove_member(&self, household_id: &str, user_id: &str) -> StoreResult<()> {
        let mut households = self.households.write().await;
        let household = households
            .get_mut(household_id)
            .ok_or_else(|| household_not_found(household_id))?;
        if household.owner_user_id == user_id {
            return Err(StoreError::Conflict(
                "household owner cannot be removed".into(),
            ));
        }
        household
            .members
            .remove(user_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("member {user_id}")))
    }

    async fn list_webhooks(&self, household_id: &str) -> StoreResult<Vec<Webhook>> {
        Ok(self.get_household(household_id).await?.webhooks)
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn create_user(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.user_id) {
            return Err(StoreError::Conflict("user exists".into()));
        }
        users.insert(user.user_id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: &str) -> StoreResult<User> {
        self.users
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("user {user_id}")))
    }

    async fn update_account_status(
        &self,
        user_id: &str,
        status: AccountStatus,
        explanation: &str,
    ) -> StoreResult<User> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(format!("user {user_id}")))?;
        user.account_status = status;
        user.account_status_explanation = explanation.to_string();
        Ok(user.clone())
    }
}

impl ApiStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
