//! Public author list with a detail button per entry.
//!
//! DESIGN
//! ======
//! Buttons carry `data-action`/`data-id` and the `<ul>` owns the only click
//! listener; the page decides what each action does through `commands`.

use leptos::prelude::*;

use crate::app::AppViews;
use crate::controllers::dispatch::{Action, CommandTable};
use crate::net::types::Author;
use crate::util::dom::command_from_click;

#[component]
pub fn AuthorList(commands: CommandTable) -> impl IntoView {
    let authors = expect_context::<AppViews>().authors;

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(command) = command_from_click(&ev) {
            commands.dispatch(command);
        }
    };

    view! {
        <section class="author-list">
            <h2>"Autores"</h2>
            <Show when=move || authors.with(|a| a.loading && a.items.is_empty())>
                <p class="author-list__loading">"Cargando..."</p>
            </Show>
            <ul on:click=on_click>
                <For
                    each=move || authors.get().items
                    key=|author| author.id.clone()
                    children=move |author: Author| {
                        let name = author.full_name();
                        view! {
                            <li class="author-list__item">
                                <span>{name}</span>
                                <button data-action={Action::ShowDetail.attr()} data-id={author.id}>
                                    "Ver Detalle"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
