//! Uniform read/update access to a piece of view state.
//!
//! DESIGN
//! ======
//! Controllers are written against `StateHandle` so the same orchestration
//! drives Leptos `RwSignal`s in the app and `Rc<RefCell<_>>` cells in unit
//! tests. Both methods return `None` when the underlying state is gone (a
//! disposed signal), which callers treat as "view no longer exists".

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

pub trait StateHandle<S>: Clone + 'static {
    fn update_with<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
}

impl<S: Send + Sync + 'static> StateHandle<S> for RwSignal<S> {
    fn update_with<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<S: 'static> StateHandle<S> for Rc<RefCell<S>> {
    fn update_with<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// A family of handles, so a whole set of view states can be built with one
/// storage strategy.
pub trait HandleKind: Clone + 'static {
    type Handle<S: Send + Sync + 'static>: StateHandle<S>;

    fn wrap<S: Send + Sync + 'static>(value: S) -> Self::Handle<S>;
}

/// Leptos signals; requires a reactive owner when wrapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct Signals;

impl HandleKind for Signals {
    type Handle<S: Send + Sync + 'static> = RwSignal<S>;

    fn wrap<S: Send + Sync + 'static>(value: S) -> RwSignal<S> {
        RwSignal::new(value)
    }
}

/// Plain shared cells, usable without a reactive runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cells;

impl HandleKind for Cells {
    type Handle<S: Send + Sync + 'static> = Rc<RefCell<S>>;

    fn wrap<S: Send + Sync + 'static>(value: S) -> Rc<RefCell<S>> {
        Rc::new(RefCell::new(value))
    }
}
