//! Household API server library crate.
//!
//! # Purpose
//! Exposes the HTTP handlers, session and permission gates, configuration,
//! and storage implementations for use by the binary and tests.
//!
//! # Notes
//! Every access decision goes through the checkers in `larder_authz`; this
//! crate only maps their answers onto HTTP outcomes.
pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod model;
pub mod observability;
pub mod store;
