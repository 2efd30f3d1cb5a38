//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components apply identical denied-access behavior: tell the
//! user once, then navigate to the home route.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::HOME_ROUTE;
use crate::state::guard::{ACCESS_DENIED_MESSAGE, GuardState};

/// True once the guard has run and refused access.
pub fn should_redirect_denied(state: &GuardState) -> bool {
    matches!(state, GuardState::Denied)
}

/// Alert and navigate home whenever the guard denies access.
pub fn install_denied_redirect<F>(guard: RwSignal<GuardState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_denied(&guard.get()) {
            crate::util::dom::alert(ACCESS_DENIED_MESSAGE);
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });
}
