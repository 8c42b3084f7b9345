//! API server HTTP handlers.
//!
//! # Purpose
//! Route handler modules plus shared error and payload types.
pub mod admin;
pub mod error;
pub mod households;
pub mod openapi;
pub mod permissions;
pub mod sessions;
pub mod system;
pub mod types;
