//! Home page: login form when signed out, author list and detail when signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the "checking session" placeholder because the token
//! only exists in the browser. After hydration `init_home` reads it and picks
//! the view.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{AppRepository, AppViews};
use crate::components::author_detail::AuthorDetail;
use crate::components::author_list::AuthorList;
use crate::components::login_form::LoginForm;
use crate::components::message_banner::MessageBanner;
use crate::config::MANAGE_ROUTE;
use crate::controllers::dispatch::{Action, CommandTable};
use crate::controllers::{authors, session};
use crate::util::dom::spawn_browser;

/// Row actions available on the public list.
fn list_commands(repo: AppRepository, views: AppViews) -> CommandTable {
    CommandTable::new().on(Action::ShowDetail, move |id| {
        let repo = repo.clone();
        spawn_browser(async move {
            authors::show_detail(&repo, &views, &id).await;
        });
    })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let views = expect_context::<AppViews>();
    let repo = expect_context::<AppRepository>();
    let ready = RwSignal::new(false);

    Effect::new(move || {
        let repo = repo.clone();
        spawn_browser(async move {
            session::init_home(&repo, &views).await;
            ready.set(true);
        });
    });

    view! {
        <div class="home-page">
            <h1>"Gestión de Autores"</h1>
            <MessageBanner/>
            <Show when=move || ready.get() fallback=|| view! { <p>"Verificando sesión..."</p> }>
                <Show
                    when=move || views.view.with(|v| v.is_authenticated())
                    fallback=|| view! { <LoginForm/> }
                >
                    <SignedInHome/>
                </Show>
            </Show>
        </div>
    }
}

/// Navigation, author list and detail panel for a signed-in user.
#[component]
fn SignedInHome() -> impl IntoView {
    let views = expect_context::<AppViews>();
    let repo = expect_context::<AppRepository>();
    let commands = list_commands(repo.clone(), views);
    let on_logout = move |_: leptos::ev::MouseEvent| session::logout(&repo, &views);

    view! {
        <nav class="home-page__nav">
            <A href=MANAGE_ROUTE>"Gestionar autores"</A>
            <button class="home-page__logout" on:click=on_logout>
                "Cerrar sesión"
            </button>
        </nav>
        <AuthorList commands=commands/>
        <AuthorDetail/>
    }
}
