//! Single-author detail panel.

use leptos::prelude::*;

use crate::app::AppViews;
use crate::net::types::Author;

#[component]
pub fn AuthorDetail() -> impl IntoView {
    let detail = expect_context::<AppViews>().detail;

    move || {
        let state = detail.get();
        if state.loading.is_some() {
            return view! { <section class="author-detail"><p>"Cargando..."</p></section> }.into_any();
        }
        match state.author {
            Some(author) => detail_view(author).into_any(),
            None => ().into_any(),
        }
    }
}

fn detail_view(author: Author) -> impl IntoView {
    let name = author.full_name();
    let biography = author.biography_or_na().to_owned();
    view! {
        <section class="author-detail">
            <h3>"Detalle del autor"</h3>
            <p><strong>"ID: "</strong>{author.id}</p>
            <p><strong>"Nombre: "</strong>{name}</p>
            <p><strong>"Biografía: "</strong>{biography}</p>
            {author.image.map(|src| view! { <img class="author-detail__image" src=src alt="Imagen del autor"/> })}
        </section>
    }
}
