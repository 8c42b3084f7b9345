//! Request authentication and authorization helpers.
//!
//! # Purpose
//! Resolves session context from bearer tokens, gates handlers on the
//! permission checkers built from it, and holds the cookie signing secret
//! that service admins can rotate.
pub mod cookie_secret;
pub mod guard;
pub mod session;
