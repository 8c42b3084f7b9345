use crate::auth::session::SessionRecord;
use crate::model::{AccountStatus, Household, User, Webhook};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get_session(&self, token: &str) -> StoreResult<Option<SessionRecord>>;
    async fn put_session(&self, token: &str, record: SessionRecord) -> StoreResult<()>;
}

#[async_trait]
pub trait HouseholdStore: Send + Sync {
    async fn create_household(&self, household: Household) -> StoreResult<Household>;
    async fn get_household(&self, household_id: &str) -> StoreResult<Household>;
    async fn update_household_name(&self, household_id: &str, name: &str)
    -> StoreResult<Household>;
    async fn archive_household(&self, household_id: &str) -> StoreResult<()>;
    async fn transfer_household(
        &self,
        household_id: &str,
        new_owner_user_id: &str,
    ) -> StoreResult<Household>;
    async fn remove_member(&self, household_id: &str, user_id: &str) -> StoreResult<()>;
    async fn list_webhooks(&self, household_id: &str) -> StoreResult<Vec<Webhook>>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, user: User) -> StoreResult<User>;
    async fn get_user(&self, user_id: &str) -> StoreResult<User>;
    async fn update_account_status(
        &self,
        user_id: &str,
        status: AccountStatus,
        explanation: &str,
    ) -> StoreResult<User>;
}

pub trait ApiStore: SessionStore + HouseholdStore + UserStore {
    fn backend_name(&self) -> &'static str;
}
