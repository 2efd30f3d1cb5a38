//! Author collection state shared by the list and table views.
//!
//! DESIGN
//! ======
//! Views never patch `items` in place: every load replaces the whole vector
//! from a fresh fetch (refetch-after-mutation). Each load is tagged with a
//! generation ticket; a response whose ticket is no longer current belongs to
//! a superseded view and is dropped.

#[cfg(test)]
#[path = "authors_test.rs"]
mod authors_test;

use crate::net::error::ApiError;
use crate::net::types::Author;

/// What happened to a finished request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// The request failed; displayed data is unchanged.
    Failed(ApiError),
    /// A newer request or a reset superseded this one; nothing applied.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorsState {
    pub items: Vec<Author>,
    pub loading: bool,
    generation: u64,
}

impl AuthorsState {
    /// Mark a load in flight and return its ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        self.generation
    }

    /// Apply a finished load if `ticket` is still current.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Vec<Author>, ApiError>) -> LoadOutcome {
        if ticket != self.generation {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                LoadOutcome::Applied
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    /// Empty the collection and invalidate any in-flight load.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.items.clear();
        self.loading = false;
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|a| a.id == id)
    }
}
