//! Protected author management page: table plus create/edit form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing author-specific renders until the guard has granted access. A
//! denied guard alerts once and navigates home without fetching anything.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::{AppRepository, AppViews};
use crate::components::author_form::AuthorForm;
use crate::components::author_table::AuthorTable;
use crate::components::message_banner::MessageBanner;
use crate::config::HOME_ROUTE;
use crate::controllers::dispatch::{Action, CommandTable};
use crate::controllers::{authors, form, session};
use crate::state::guard::GuardState;
use crate::util::auth::install_denied_redirect;
use crate::util::dom::{confirm, spawn_browser};

/// Row actions available in the management table.
fn table_commands(repo: AppRepository, views: AppViews) -> CommandTable {
    let edit_repo = repo.clone();
    CommandTable::new()
        .on(Action::Edit, move |id| {
            let repo = edit_repo.clone();
            spawn_browser(async move {
                form::start_edit(&repo, &views, &id).await;
            });
        })
        .on(Action::Delete, move |id| {
            let repo = repo.clone();
            spawn_browser(async move {
                authors::delete_author(&repo, &views, &id, confirm).await;
            });
        })
}

#[component]
pub fn AuthorsPage() -> impl IntoView {
    let views = expect_context::<AppViews>();
    let repo = expect_context::<AppRepository>();

    // A denial from an earlier visit must not fire the redirect again.
    views.guard.set(GuardState::Checking);
    install_denied_redirect(views.guard, use_navigate());

    let guard_repo = repo.clone();
    Effect::new(move || {
        let repo = guard_repo.clone();
        spawn_browser(async move {
            session::enter_protected(&repo, &views).await;
        });
    });

    view! {
        <div class="authors-page">
            <h1>"Administrar Autores"</h1>
            <MessageBanner/>
            <Show
                when=move || views.guard.with(GuardState::is_granted)
                fallback=|| view! { <p>"Verificando sesión..."</p> }
            >
                <nav class="authors-page__nav">
                    <A href=HOME_ROUTE>"Volver al inicio"</A>
                </nav>
                <AuthorForm/>
                <AuthorTable commands=table_commands(repo.clone(), views)/>
            </Show>
        </div>
    }
}
