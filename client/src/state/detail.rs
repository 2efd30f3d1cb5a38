//! Single-author detail panel.
//!
//! `begin` swaps in a loading placeholder; a failure removes the placeholder
//! but never the author that was on screen before the request.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::net::error::ApiError;
use crate::net::types::Author;
use crate::state::authors::LoadOutcome;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    pub author: Option<Author>,
    /// Identifier currently being fetched, if any.
    pub loading: Option<String>,
    generation: u64,
}

impl DetailState {
    pub fn begin(&mut self, id: &str) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.loading = Some(id.to_owned());
        self.generation
    }

    pub fn finish(&mut self, ticket: u64, result: Result<Author, ApiError>) -> LoadOutcome {
        if ticket != self.generation {
            return LoadOutcome::Stale;
        }
        self.loading = None;
        match result {
            Ok(author) => {
                self.author = Some(author);
                LoadOutcome::Applied
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.author = None;
        self.loading = None;
    }
}
