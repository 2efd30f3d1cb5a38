//! Shared builders for controller tests.

use std::cell::RefCell;

use futures::channel::oneshot;
use serde_json::{Value, json};

use super::Views;
use crate::net::api::AuthorRepository;
use crate::net::error::ApiError;
use crate::net::mock_transport::MockTransport;
use crate::net::transport::{ApiRequest, RawResponse, Transport};
use crate::state::handle::{Cells, StateHandle};
use crate::state::message::{Banner, Tone};
use crate::state::session::{MemoryStorage, Session};

pub(crate) type TestRepo = AuthorRepository<MockTransport, MemoryStorage>;

/// Repository over a fresh mock, optionally already logged in.
pub(crate) fn repo(token: Option<&str>) -> (TestRepo, MockTransport) {
    let transport = MockTransport::new();
    let session = Session::new(MemoryStorage::default());
    if let Some(token) = token {
        session.set_token(token);
    }
    (AuthorRepository::new(transport.clone(), session), transport)
}

/// Holds its first request until the gate opens, then replies from the mock.
///
/// Later requests go straight through, so a second flow can run to
/// completion while the first is parked.
pub(crate) struct GatedTransport {
    inner: MockTransport,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

#[async_trait::async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.inner.send(request).await
    }
}

/// Logged-in repository whose first request waits for the returned sender.
pub(crate) fn gated_repo(
    token: &str,
) -> (AuthorRepository<GatedTransport, MemoryStorage>, MockTransport, oneshot::Sender<()>) {
    let (open, gate) = oneshot::channel();
    let inner = MockTransport::new();
    let session = Session::new(MemoryStorage::default());
    session.set_token(token);
    let transport = GatedTransport { inner: inner.clone(), gate: RefCell::new(Some(gate)) };
    (AuthorRepository::new(transport, session), inner, open)
}

pub(crate) fn views() -> Views<Cells> {
    Views::new()
}

pub(crate) fn author_json(id: &str, first: &str) -> Value {
    json!({ "_id": id, "first_name": first, "last_name": "Ruiz", "biography": null })
}

pub(crate) fn list_body(ids: &[&str]) -> Value {
    let items: Vec<Value> = ids.iter().map(|id| author_json(id, "Autor")).collect();
    json!({ "data": items })
}

pub(crate) fn banner(views: &Views<Cells>) -> Option<Banner> {
    views.messages.read_with(|m| m.current.clone()).flatten()
}

pub(crate) fn banner_is(views: &Views<Cells>, text: &str, tone: Tone) -> bool {
    banner(views) == Some(Banner { text: text.to_owned(), tone })
}

pub(crate) fn item_ids(views: &Views<Cells>) -> Vec<String> {
    views
        .authors
        .read_with(|s| s.items.iter().map(|a| a.id.clone()).collect())
        .unwrap_or_default()
}
