//! Networking modules for the auth service boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the identity/login/logout exchanges, `types` defines the
//! wire schema, `failure` is the typed failure taxonomy every exchange maps
//! into, and `admin` adapts the same primitives for the user-administration
//! console.

pub mod admin;
pub mod api;
pub mod failure;
pub mod types;
