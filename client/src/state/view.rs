//! Which top-level view the user is looking at. Transient, never persisted.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::net::types::Author;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Unauthenticated,
    Listing,
    ShowingDetail(Author),
    /// `None` while creating a new author.
    Editing(Option<Author>),
}

impl ViewState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Unauthenticated)
    }
}
