//! Shared client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! State lives in plain structs driven by explicit events; pages read it
//! through `RwSignal` contexts provided by the root component.

pub mod session;
