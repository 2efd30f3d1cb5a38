//! Email + password login form.

use leptos::prelude::*;

use crate::app::{AppRepository, AppViews};
use crate::controllers::session;
use crate::util::dom::spawn_browser;

#[component]
pub fn LoginForm() -> impl IntoView {
    let views = expect_context::<AppViews>();
    let repo = expect_context::<AppRepository>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let repo = repo.clone();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        spawn_browser(async move {
            if session::login(&repo, &views, &email_value, &password_value).await.is_ok() {
                password.set(String::new());
            }
            busy.set(false);
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h2>"Iniciar sesión"</h2>
            <input
                class="login-input"
                type="email"
                placeholder="correo@ejemplo.com"
                required=true
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="login-input"
                type="password"
                placeholder="Contraseña"
                required=true
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="login-button" type="submit" disabled=move || busy.get()>
                "Entrar"
            </button>
        </form>
    }
}
