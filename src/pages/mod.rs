//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guard wiring, auth flows,
//! query parameters) and delegates rendering details to `components`.

pub mod admin;
pub mod login;
pub mod monitor;
