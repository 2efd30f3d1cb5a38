//! Create/edit form bound to the form draft.
//!
//! The hidden identifier field mirrors the form mode: empty while creating,
//! the author id while editing.

use leptos::prelude::*;

use crate::app::{AppRepository, AppViews};
use crate::controllers::form;
use crate::state::form::{FormMode, FormState};
use crate::util::dom::spawn_browser;

fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[component]
pub fn AuthorForm() -> impl IntoView {
    let views = expect_context::<AppViews>();
    let repo = expect_context::<AppRepository>();
    let state = views.form;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let repo = repo.clone();
        spawn_browser(async move {
            form::submit(&repo, &views).await;
        });
    };

    let heading = move || if state.with(FormState::is_edit_mode) { "Editar autor" } else { "Nuevo autor" };
    let submit_label = move || if state.with(FormState::is_edit_mode) { "Guardar cambios" } else { "Crear autor" };
    let locked = move || state.with(|f| f.submitting || matches!(f.mode, FormMode::Loading(_)));

    view! {
        <form class="author-form" on:submit=on_submit>
            <h2>{heading}</h2>
            <Show when=move || state.with(|f| matches!(f.mode, FormMode::Loading(_)))>
                <p class="author-form__loading">"Cargando..."</p>
            </Show>
            <input
                type="hidden"
                name="id"
                prop:value=move || state.with(|f| f.identifier().unwrap_or_default().to_owned())
            />
            <input
                type="text"
                name="first_name"
                placeholder="Nombre"
                required=true
                prop:value=move || state.with(|f| f.draft.first_name.clone())
                on:input=move |ev| state.update(|f| f.draft.first_name = event_target_value(&ev))
            />
            <input
                type="text"
                name="last_name"
                placeholder="Apellido"
                required=true
                prop:value=move || state.with(|f| f.draft.last_name.clone())
                on:input=move |ev| state.update(|f| f.draft.last_name = event_target_value(&ev))
            />
            <textarea
                name="biography"
                placeholder="Biografía"
                prop:value=move || state.with(|f| f.draft.biography.clone().unwrap_or_default())
                on:input=move |ev| state.update(|f| f.draft.biography = optional(event_target_value(&ev)))
            ></textarea>
            <input
                type="url"
                name="image"
                placeholder="URL de imagen"
                prop:value=move || state.with(|f| f.draft.image.clone().unwrap_or_default())
                on:input=move |ev| state.update(|f| f.draft.image = optional(event_target_value(&ev)))
            />
            <button type="submit" disabled=locked>{submit_label}</button>
            <Show when=move || state.with(FormState::is_edit_mode)>
                <button type="button" on:click=move |_| form::cancel_edit(&views)>
                    "Cancelar"
                </button>
            </Show>
        </form>
    }
}
