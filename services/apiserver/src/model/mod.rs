//! Domain records served by the API.
//!
//! # Purpose
//! Re-exports household and user records so handlers and stores share one
//! set of shapes.
pub mod household;
pub mod user;

pub use household::{Household, Webhook};
pub use user::{AccountStatus, User};
