//! Command dispatch table for row buttons.
//!
//! DESIGN
//! ======
//! One delegated click listener per container reads `data-action` and
//! `data-id` from the clicked button and hands the pair to `Command`. Parsing
//! and routing live here so detection (DOM) and handling (controllers) stay
//! apart, and unknown or incomplete attributes are ignored in one place.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::collections::HashMap;
use std::sync::Arc;

/// Row-level actions, keyed by their `data-action` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    ShowDetail,
    Edit,
    Delete,
}

impl Action {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "detail" => Some(Self::ShowDetail),
            "edit" => Some(Self::Edit),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    /// The `data-action` attribute value.
    #[must_use]
    pub fn attr(self) -> &'static str {
        match self {
            Self::ShowDetail => "detail",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

/// An action aimed at one author.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub id: String,
}

impl Command {
    /// Build from raw attribute values; `None` unless both are usable.
    #[must_use]
    pub fn from_attributes(action: Option<String>, id: Option<String>) -> Option<Self> {
        let action = Action::parse(action?.trim())?;
        let id = id?.trim().to_owned();
        if id.is_empty() {
            return None;
        }
        Some(Self { action, id })
    }
}

pub type Handler = Arc<dyn Fn(String) + Send + Sync>;

/// Maps each action to at most one handler.
#[derive(Clone, Default)]
pub struct CommandTable {
    handlers: HashMap<Action, Handler>,
}

impl CommandTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `action`, replacing any previous one.
    #[must_use]
    pub fn on(mut self, action: Action, handler: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.handlers.insert(action, Arc::new(handler));
        self
    }

    /// Run the handler for `command`; false when none is registered.
    pub fn dispatch(&self, command: Command) -> bool {
        match self.handlers.get(&command.action) {
            Some(handler) => {
                handler(command.id);
                true
            }
            None => false,
        }
    }
}
