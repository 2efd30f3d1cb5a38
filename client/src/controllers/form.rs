//! Create/edit form flows.
//!
//! A successful submit refetches the table and announces the save even when
//! a newer edit or a cancel took over the form while the request was in
//! flight: the mutation happened either way. Only the current form returns
//! the view to Listing.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use super::Views;
use super::authors::refresh;
use super::flash::{flash, flash_error};
use crate::net::api::AuthorRepository;
use crate::net::transport::Transport;
use crate::state::authors::LoadOutcome;
use crate::state::form::Submission;
use crate::state::handle::{HandleKind, StateHandle};
use crate::state::message::Tone;
use crate::state::session::TokenStorage;
use crate::state::view::ViewState;

pub const CREATED_MESSAGE: &str = "Autor creado correctamente.";
pub const UPDATED_MESSAGE: &str = "Autor actualizado correctamente.";

/// Load an author into the form with an explicit `get(id)`.
pub async fn start_edit<T, S, K>(repo: &AuthorRepository<T, S>, views: &Views<K>, id: &str) -> LoadOutcome
where
    T: Transport,
    S: TokenStorage,
    K: HandleKind,
{
    let Some(ticket) = views.form.update_with(|f| f.start_edit(id)) else {
        return LoadOutcome::Stale;
    };
    views.view.update_with(|v| *v = ViewState::Editing(None));

    let result = repo.get(id).await;
    let loaded = result.as_ref().ok().cloned();
    let outcome = views
        .form
        .update_with(|f| f.finish_fetch(ticket, result))
        .unwrap_or(LoadOutcome::Stale);

    match &outcome {
        LoadOutcome::Applied => {
            views.view.update_with(|v| *v = ViewState::Editing(loaded));
        }
        LoadOutcome::Failed(err) => {
            views.view.update_with(|v| *v = ViewState::Listing);
            flash_error(&views.messages, err);
        }
        LoadOutcome::Stale => {}
    }
    outcome
}

/// Leave edit mode without saving.
pub fn cancel_edit<K: HandleKind>(views: &Views<K>) {
    views.form.update_with(|f| f.cancel());
    views.view.update_with(|v| *v = ViewState::Listing);
}

/// Validate the draft and dispatch create or update.
pub async fn submit<T, S, K>(repo: &AuthorRepository<T, S>, views: &Views<K>) -> LoadOutcome
where
    T: Transport,
    S: TokenStorage,
    K: HandleKind,
{
    let begun = match views.form.update_with(|f| f.begin_submit()) {
        Some(begun) => begun,
        None => return LoadOutcome::Stale,
    };
    let (ticket, submission) = match begun {
        Ok(pair) => pair,
        Err(err) => {
            flash_error(&views.messages, &err);
            return LoadOutcome::Failed(err);
        }
    };

    let (result, success_text) = match &submission {
        Submission::Create(fields) => (repo.create(fields).await, CREATED_MESSAGE),
        Submission::Update { id, fields } => (repo.update(id, fields).await, UPDATED_MESSAGE),
    };
    let outcome = views
        .form
        .update_with(|f| f.finish_submit(ticket, result.clone()))
        .unwrap_or(LoadOutcome::Stale);

    match &result {
        Ok(_) => {
            if outcome == LoadOutcome::Applied {
                views.view.update_with(|v| *v = ViewState::Listing);
            }
            flash(&views.messages, success_text, Tone::Success);
            refresh(repo, views).await;
        }
        Err(err) => flash_error(&views.messages, err),
    }
    outcome
}
