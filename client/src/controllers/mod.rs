//! Refresh orchestration between the repository and view state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components translate DOM events into controller calls; controllers issue
//! repository requests, apply results through generation tickets, and raise
//! banners. They never touch the DOM, so every flow runs natively in tests
//! against `Cells` and a recording transport.
//!
//! DESIGN
//! ======
//! Each controller awaits one request at a time and only issues the
//! follow-up refetch after the mutation it depends on has completed.

pub mod authors;
pub mod dispatch;
pub mod flash;
pub mod form;
pub mod session;

#[cfg(test)]
#[path = "fixtures.rs"]
pub(crate) mod fixtures;

use crate::state::authors::AuthorsState;
use crate::state::detail::DetailState;
use crate::state::form::FormState;
use crate::state::guard::GuardState;
use crate::state::handle::HandleKind;
use crate::state::message::MessageState;
use crate::state::view::ViewState;

/// Every piece of view state a controller may touch.
pub struct Views<K: HandleKind> {
    pub view: K::Handle<ViewState>,
    pub guard: K::Handle<GuardState>,
    pub authors: K::Handle<AuthorsState>,
    pub detail: K::Handle<DetailState>,
    pub form: K::Handle<FormState>,
    pub messages: K::Handle<MessageState>,
}

impl<K: HandleKind> Views<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: K::wrap(ViewState::default()),
            guard: K::wrap(GuardState::default()),
            authors: K::wrap(AuthorsState::default()),
            detail: K::wrap(DetailState::default()),
            form: K::wrap(FormState::default()),
            messages: K::wrap(MessageState::default()),
        }
    }
}

impl<K: HandleKind> Default for Views<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: HandleKind> Clone for Views<K> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            guard: self.guard.clone(),
            authors: self.authors.clone(),
            detail: self.detail.clone(),
            form: self.form.clone(),
            messages: self.messages.clone(),
        }
    }
}

impl Copy for Views<crate::state::handle::Signals> {}
