//! Management table with edit and delete buttons per row.

use leptos::prelude::*;

use crate::app::AppViews;
use crate::controllers::dispatch::{Action, CommandTable};
use crate::net::types::Author;
use crate::util::dom::command_from_click;

#[component]
pub fn AuthorTable(commands: CommandTable) -> impl IntoView {
    let authors = expect_context::<AppViews>().authors;

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(command) = command_from_click(&ev) {
            commands.dispatch(command);
        }
    };

    view! {
        <table class="author-table">
            <thead>
                <tr>
                    <th>"Nombre"</th>
                    <th>"Biografía"</th>
                    <th>"Acciones"</th>
                </tr>
            </thead>
            <tbody on:click=on_click>
                <For
                    each=move || authors.get().items
                    key=|author| author.id.clone()
                    children=move |author: Author| {
                        let name = author.full_name();
                        let biography = author.biography_or_na().to_owned();
                        let edit_id = author.id.clone();
                        let delete_id = author.id;
                        view! {
                            <tr>
                                <td>{name}</td>
                                <td>{biography}</td>
                                <td>
                                    <button data-action={Action::Edit.attr()} data-id={edit_id}>
                                        "Editar"
                                    </button>
                                    <button data-action={Action::Delete.attr()} data-id={delete_id}>
                                        "Eliminar"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
