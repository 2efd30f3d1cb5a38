//! Create/edit form state machine.
//!
//! ```text
//! Blank --start_edit(id)--> Loading(id) --fetch ok--> Editing(author) --submit ok--> Blank
//! Loading(id) --fetch fail--> Blank
//! Editing --cancel--> Blank
//! Blank | Editing --submit fail--> unchanged
//! ```
//!
//! The identifier decides the dispatch: blank means create, present means
//! update. The draft holds the edited text and survives failed submissions.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::error::ApiError;
use crate::net::types::{Author, AuthorFields};
use crate::state::authors::LoadOutcome;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Nombre y apellido son obligatorios";
pub const STILL_LOADING_MESSAGE: &str = "Espera a que termine de cargar el autor";
pub const ALREADY_SUBMITTING_MESSAGE: &str = "Ya hay un envío en curso";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Blank,
    Loading(String),
    Editing(Author),
}

/// Which repository call a submission maps to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Create(AuthorFields),
    Update { id: String, fields: AuthorFields },
}

/// Map a (possibly blank) identifier and fields onto create or update.
#[must_use]
pub fn submission_for(id: &str, fields: &AuthorFields) -> Submission {
    let id = id.trim();
    if id.is_empty() {
        Submission::Create(fields.normalized())
    } else {
        Submission::Update { id: id.to_owned(), fields: fields.normalized() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub mode: FormMode,
    pub draft: AuthorFields,
    pub submitting: bool,
    generation: u64,
}

impl FormState {
    /// Identifier of the author being edited; `None` in create mode.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Editing(author) => Some(author.id.as_str()),
            FormMode::Blank | FormMode::Loading(_) => None,
        }
    }

    #[must_use]
    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Enter `Loading(id)`; returns the ticket for the pre-fill fetch.
    pub fn start_edit(&mut self, id: &str) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.mode = FormMode::Loading(id.to_owned());
        self.submitting = false;
        self.generation
    }

    /// Apply the pre-fill fetch started by `start_edit`.
    pub fn finish_fetch(&mut self, ticket: u64, result: Result<Author, ApiError>) -> LoadOutcome {
        if ticket != self.generation || !matches!(self.mode, FormMode::Loading(_)) {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(author) => {
                self.draft = author.fields();
                self.mode = FormMode::Editing(author);
                LoadOutcome::Applied
            }
            Err(err) => {
                self.clear();
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Leave edit mode without saving; any pending pre-fill is discarded.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.clear();
    }

    /// Validate the draft and decide create vs update.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] while a pre-fill is loading or when a required
    /// field is blank.
    pub fn submission(&self) -> Result<Submission, ApiError> {
        if matches!(self.mode, FormMode::Loading(_)) {
            return Err(ApiError::Validation(STILL_LOADING_MESSAGE.to_owned()));
        }
        if !self.draft.missing_required().is_empty() {
            return Err(ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_owned()));
        }
        Ok(submission_for(self.identifier().unwrap_or_default(), &self.draft))
    }

    /// Validate and mark the form as submitting.
    ///
    /// # Errors
    ///
    /// As [`Self::submission`], plus a validation error when a submission is
    /// already in flight. State is untouched on error.
    pub fn begin_submit(&mut self) -> Result<(u64, Submission), ApiError> {
        if self.submitting {
            return Err(ApiError::Validation(ALREADY_SUBMITTING_MESSAGE.to_owned()));
        }
        let submission = self.submission()?;
        self.submitting = true;
        Ok((self.generation, submission))
    }

    /// Success returns to `Blank`; failure keeps mode and draft.
    pub fn finish_submit(&mut self, ticket: u64, result: Result<Author, ApiError>) -> LoadOutcome {
        if ticket != self.generation {
            return LoadOutcome::Stale;
        }
        self.submitting = false;
        match result {
            Ok(_) => {
                self.generation = self.generation.wrapping_add(1);
                self.clear();
                LoadOutcome::Applied
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    fn clear(&mut self) {
        self.mode = FormMode::Blank;
        self.draft = AuthorFields::default();
        self.submitting = false;
    }
}
