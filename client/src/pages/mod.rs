//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session checks, which actions
//! row buttons trigger) and delegates rendering details to `components`.

pub mod authors;
pub mod home;
