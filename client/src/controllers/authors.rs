//! List, table and detail flows.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged, shown once as a banner, and leaves the displayed
//! authors exactly as they were before the call.

#[cfg(test)]
#[path = "authors_test.rs"]
mod authors_test;

use leptos::logging::log;

use super::Views;
use super::flash::{flash, flash_error};
use crate::net::api::AuthorRepository;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::state::authors::{AuthorsState, LoadOutcome};
use crate::state::handle::{HandleKind, StateHandle};
use crate::state::message::Tone;
use crate::state::session::TokenStorage;
use crate::state::view::ViewState;

pub const DETAIL_LOADED_MESSAGE: &str = "Detalle de ruta protegida cargado con éxito.";
pub const DELETED_MESSAGE: &str = "Autor eliminado correctamente.";

/// Text of the interactive delete confirmation.
#[must_use]
pub fn confirm_prompt(id: &str) -> String {
    format!("¿Estás seguro de que deseas eliminar al autor con ID: {id}?")
}

/// Result of a delete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; no request was made.
    Declined,
    /// Deleted; carries the outcome of the follow-up refetch.
    Deleted(LoadOutcome),
    Failed(ApiError),
}

/// Fetch the whole collection into the list/table state.
pub async fn refresh<T, S, K>(repo: &AuthorRepository<T, S>, views: &Views<K>) -> LoadOutcome
where
    T: Transport,
    S: TokenStorage,
    K: HandleKind,
{
    let Some(ticket) = views.authors.update_with(AuthorsState::begin_load) else {
        return LoadOutcome::Stale;
    };
    let result = repo.list().await;
    let outcome = views
        .authors
        .update_with(|s| s.finish_load(ticket, result))
        .unwrap_or(LoadOutcome::Stale);
    if let LoadOutcome::Failed(err) = &outcome {
        flash_error(&views.messages, err);
    }
    outcome
}

/// Fetch one author into the detail panel.
pub async fn show_detail<T, S, K>(repo: &AuthorRepository<T, S>, views: &Views<K>, id: &str) -> LoadOutcome
where
    T: Transport,
    S: TokenStorage,
    K: HandleKind,
{
    let Some(ticket) = views.detail.update_with(|d| d.begin(id)) else {
        return LoadOutcome::Stale;
    };
    let result = repo.get(id).await;
    let shown = result.as_ref().ok().cloned();
    let outcome = views
        .detail
        .update_with(|d| d.finish(ticket, result))
        .unwrap_or(LoadOutcome::Stale);

    match (&outcome, shown) {
        (LoadOutcome::Applied, Some(author)) => {
            views.view.update_with(|v| *v = ViewState::ShowingDetail(author));
            flash(&views.messages, DETAIL_LOADED_MESSAGE, Tone::Success);
        }
        (LoadOutcome::Failed(err), _) => flash_error(&views.messages, err),
        _ => {}
    }
    outcome
}

/// Confirm, delete, then refetch the table once the delete has completed.
///
/// `confirm` receives the prompt text and returns whether the user accepted.
pub async fn delete_author<T, S, K>(
    repo: &AuthorRepository<T, S>,
    views: &Views<K>,
    id: &str,
    confirm: impl FnOnce(&str) -> bool,
) -> DeleteOutcome
where
    T: Transport,
    S: TokenStorage,
    K: HandleKind,
{
    if !confirm(&confirm_prompt(id)) {
        return DeleteOutcome::Declined;
    }

    match repo.delete(id).await {
        Ok(_) => {
            log!("deleted author {id}");
            forget_detail(views, id);
            flash(&views.messages, DELETED_MESSAGE, Tone::Success);
            DeleteOutcome::Deleted(refresh(repo, views).await)
        }
        Err(err) => {
            flash_error(&views.messages, &err);
            DeleteOutcome::Failed(err)
        }
    }
}

/// Drop the detail panel if it shows the author that no longer exists.
fn forget_detail<K: HandleKind>(views: &Views<K>, id: &str) {
    let showing = views
        .detail
        .read_with(|d| d.author.as_ref().is_some_and(|a| a.id == id))
        .unwrap_or(false);
    if showing {
        views.detail.update_with(|d| d.reset());
        views.view.update_with(|v| {
            if matches!(v, ViewState::ShowingDetail(_)) {
                *v = ViewState::Listing;
            }
        });
    }
}
