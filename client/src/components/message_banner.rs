//! Transient success/error banner.

use leptos::prelude::*;

use crate::app::AppViews;

#[component]
pub fn MessageBanner() -> impl IntoView {
    let views = expect_context::<AppViews>();
    let messages = views.messages;

    move || {
        messages.get().current.map(|banner| {
            view! {
                <div class={format!("message {}", banner.tone.class())} role="status">
                    {banner.text}
                </div>
            }
        })
    }
}
