//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::controllers::Views;
use crate::net::api::AuthorRepository;
use crate::net::transport::HttpTransport;
use crate::pages::{authors::AuthorsPage, home::HomePage};
use crate::state::handle::Signals;
use crate::state::session::{BrowserStorage, Session};

/// All view state, as signals shared through context.
pub type AppViews = Views<Signals>;

/// Repository over the browser transport and `localStorage` session.
pub type AppRepository = AuthorRepository<HttpTransport, BrowserStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the view state and the repository, then sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AppViews::new());
    provide_context(AppRepository::new(HttpTransport::default(), Session::new(BrowserStorage)));

    view! {
        <Stylesheet id="leptos" href="/pkg/autores.css"/>
        <Title text="Gestión de Autores"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("autores") view=AuthorsPage/>
            </Routes>
        </Router>
    }
}
