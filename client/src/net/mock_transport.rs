//! Recording transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::error::ApiError;
use super::transport::{ApiRequest, RawResponse, Transport};

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    replies: Rc<RefCell<VecDeque<Result<RawResponse, ApiError>>>>,
    seen: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and a JSON body.
    pub(crate) fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.reply_raw(status, &body.to_string())
    }

    /// Queue a response with `status` and a verbatim body.
    pub(crate) fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    /// Queue a transport-level failure.
    pub(crate) fn fail(&self, message: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Transport(message.to_owned())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.seen.borrow().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.seen.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no reply queued".to_owned())))
    }
}
