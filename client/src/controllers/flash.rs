//! Transient banner with timed expiry.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use leptos::logging::warn;

use crate::net::error::ApiError;
use crate::state::handle::StateHandle;
use crate::state::message::{MessageState, Tone};

/// Shown when a failure carries no readable message.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Error inesperado";

/// Replace the banner and, in the browser, clear it after `MESSAGE_TTL_MS`.
pub fn flash<M: StateHandle<MessageState>>(messages: &M, text: impl Into<String>, tone: Tone) {
    let Some(seq) = messages.update_with(|m| m.show(text.into(), tone)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let messages = messages.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(crate::config::MESSAGE_TTL_MS)).await;
            messages.update_with(|m| m.expire(seq));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

/// Log a failure once and surface it as an error banner.
pub fn flash_error<M: StateHandle<MessageState>>(messages: &M, err: &ApiError) {
    warn!("request failed: {err:?}");
    flash(messages, error_text(err), Tone::Error);
}

/// User-facing text for a failure, never empty.
#[must_use]
pub fn error_text(err: &ApiError) -> String {
    let text = err.to_string();
    if text.trim().is_empty() { UNEXPECTED_ERROR_MESSAGE.to_owned() } else { text }
}
