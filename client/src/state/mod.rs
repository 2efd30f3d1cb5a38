//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `authors`, `detail`, `form`,
//! `message`, `view`) so each view controller depends on a small focused
//! model. Transitions are plain methods so they can be tested without a
//! reactive runtime; `handle` bridges them to Leptos signals.

pub mod authors;
pub mod detail;
pub mod form;
pub mod guard;
pub mod handle;
pub mod message;
pub mod session;
pub mod view;
