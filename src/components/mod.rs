//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from the shared state contexts; route-scoped
//! orchestration stays in `pages`.

pub mod topbar;
