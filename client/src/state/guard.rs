//! Session guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages render nothing domain-specific until `check` has run. The
//! token read and the presence check happen in one call so the caller never
//! acts on a token it did not just verify. Failure is terminal for the page
//! load: no retry, no data fetch, navigate home.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::HOME_ROUTE;
use crate::state::session::{Session, TokenStorage};

/// Shown to the user when a protected page is opened without a session.
pub const ACCESS_DENIED_MESSAGE: &str = "Acceso denegado. Debes iniciar sesión.";

/// Result of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// A non-empty token is present; initialization may continue.
    Proceed(String),
    /// No usable token; navigate to the given route.
    Redirect(&'static str),
}

/// Rendering gate for a protected page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Not yet checked (SSR output and the first client render).
    #[default]
    Checking,
    Granted,
    Denied,
}

impl GuardState {
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl From<&GuardDecision> for GuardState {
    fn from(decision: &GuardDecision) -> Self {
        match decision {
            GuardDecision::Proceed(_) => Self::Granted,
            GuardDecision::Redirect(_) => Self::Denied,
        }
    }
}

/// Read the token and decide in one step.
pub fn check<S: TokenStorage>(session: &Session<S>) -> GuardDecision {
    match session.token() {
        Some(token) => GuardDecision::Proceed(token),
        None => GuardDecision::Redirect(HOME_ROUTE),
    }
}
