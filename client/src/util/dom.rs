//! Browser dialogs, delegated-click decoding, and local task spawning.
//!
//! Outside the browser every helper here is a no-op.

use std::future::Future;

use crate::controllers::dispatch::Command;

/// Run `work` on the browser event loop.
pub fn spawn_browser(work: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(work);
    #[cfg(not(feature = "hydrate"))]
    drop(work);
}

/// Read `data-action`/`data-id` from the nearest annotated ancestor of the
/// click target.
#[cfg(feature = "hydrate")]
pub fn command_from_click(ev: &leptos::ev::MouseEvent) -> Option<Command> {
    use wasm_bindgen::JsCast;

    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest("[data-action]").ok().flatten()?;
    Command::from_attributes(button.get_attribute("data-action"), button.get_attribute("data-id"))
}

#[cfg(not(feature = "hydrate"))]
pub fn command_from_click(_ev: &leptos::ev::MouseEvent) -> Option<Command> {
    None
}

/// Blocking yes/no dialog.
pub fn confirm(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(text).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

pub fn alert(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
