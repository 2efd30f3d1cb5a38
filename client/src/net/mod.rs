//! Networking modules for the authors REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the gateway seam (real HTTP in the browser, mocks in tests),
//! `api` turns raw responses into domain values or `ApiError`s, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
#[path = "mock_transport.rs"]
pub(crate) mod mock_transport;
