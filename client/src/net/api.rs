//! Author repository and login call.
//!
//! Each operation builds an `ApiRequest`, hands it to the injected
//! `Transport`, then parses the body *before* deciding success or failure:
//! success bodies carry `data`, failure bodies carry `message` (or `msg`).
//!
//! ERROR HANDLING
//! ==============
//! Nothing here touches view state. A failed call returns `ApiError` and
//! leaves the caller's state exactly as it was.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, Method, RawResponse, Transport};
use super::types::{Ack, Author, AuthorFields, Credentials, Envelope, LoginSuccess, Reason};
use crate::state::session::{Session, TokenStorage};

pub const AUTHORS_PATH: &str = "/autores";
pub const LOGIN_PATH: &str = "/usuarios/login";

const LIST_FAILED: &str = "Error cargando autores";
const GET_FAILED: &str = "Error cargando detalle";
const CREATE_FAILED: &str = "Error al crear autor";
const UPDATE_FAILED: &str = "Error al actualizar autor";
const DELETE_FAILED: &str = "Error al eliminar";
const LOGIN_FAILED: &str = "Error al iniciar sesión";
const MALFORMED_BODY: &str = "Respuesta inválida del servidor";

fn author_path(id: &str) -> String {
    format!("{AUTHORS_PATH}/{id}")
}

/// Parse a raw response into an envelope, classifying by status.
///
/// Empty bodies read as `{}`; anything that is not JSON is a transport error
/// regardless of status.
fn decode<T: DeserializeOwned>(resp: RawResponse, fallback: &str) -> Result<Envelope<T>, ApiError> {
    let body = if resp.body.trim().is_empty() { "{}" } else { resp.body.as_str() };
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| ApiError::Transport(MALFORMED_BODY.to_owned()))?;

    if !resp.is_success() {
        let message = serde_json::from_value::<Reason>(value)
            .ok()
            .and_then(Reason::into_message)
            .unwrap_or_else(|| fallback.to_owned());
        return Err(ApiError::Api { status: resp.status, message });
    }

    serde_json::from_value(value).map_err(|_| ApiError::Transport(MALFORMED_BODY.to_owned()))
}

fn required_data<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    envelope
        .data
        .ok_or_else(|| ApiError::Transport(MALFORMED_BODY.to_owned()))
}

fn to_body(fields: &AuthorFields) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(fields.normalized()).map_err(|e| ApiError::Validation(e.to_string()))
}

/// CRUD over the author resource, authenticated by the session token.
#[derive(Clone, Debug)]
pub struct AuthorRepository<T, S> {
    transport: T,
    session: Session<S>,
}

impl<T: Transport, S: TokenStorage> AuthorRepository<T, S> {
    #[must_use]
    pub fn new(transport: T, session: Session<S>) -> Self {
        Self { transport, session }
    }

    #[must_use]
    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<D: DeserializeOwned>(&self, request: ApiRequest, fallback: &str) -> Result<Envelope<D>, ApiError> {
        let request = request.with_token(self.session.token());
        let resp = self.transport.send(request).await?;
        decode(resp, fallback)
    }

    /// `GET /autores`.
    ///
    /// # Errors
    ///
    /// Returns the server's message (or a fallback) on a non-2xx status, or a
    /// transport error when the body is unreadable.
    pub async fn list(&self) -> Result<Vec<Author>, ApiError> {
        let envelope = self
            .call(ApiRequest::new(Method::Get, AUTHORS_PATH), LIST_FAILED)
            .await?;
        required_data(envelope)
    }

    /// `GET /autores/{id}`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::list`].
    pub async fn get(&self, id: &str) -> Result<Author, ApiError> {
        let envelope = self
            .call(ApiRequest::new(Method::Get, author_path(id)), GET_FAILED)
            .await?;
        required_data(envelope)
    }

    /// `POST /autores` with the normalized fields.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::list`].
    pub async fn create(&self, fields: &AuthorFields) -> Result<Author, ApiError> {
        let request = ApiRequest::new(Method::Post, AUTHORS_PATH).with_body(to_body(fields)?);
        let envelope = self.call(request, CREATE_FAILED).await?;
        required_data(envelope)
    }

    /// `PUT /autores/{id}`: full replacement of the mutable fields.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::list`].
    pub async fn update(&self, id: &str, fields: &AuthorFields) -> Result<Author, ApiError> {
        let request = ApiRequest::new(Method::Put, author_path(id)).with_body(to_body(fields)?);
        let envelope = self.call(request, UPDATE_FAILED).await?;
        required_data(envelope)
    }

    /// `DELETE /autores/{id}`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::list`]; a success body needs no `data`.
    pub async fn delete(&self, id: &str) -> Result<Ack, ApiError> {
        let envelope: Envelope<serde::de::IgnoredAny> = self
            .call(ApiRequest::new(Method::Delete, author_path(id)), DELETE_FAILED)
            .await?;
        Ok(Ack { message: envelope.reason().map(str::to_owned) })
    }
}

/// `POST /usuarios/login`.
///
/// # Errors
///
/// Fails on a non-2xx status or a `status:false` reply, using `msg` (or
/// `message`) when present, otherwise a fallback. A success reply without a
/// token or user is a transport error.
pub async fn login<T: Transport>(transport: &T, credentials: &Credentials) -> Result<LoginSuccess, ApiError> {
    let body = serde_json::to_value(credentials).map_err(|e| ApiError::Validation(e.to_string()))?;
    let resp = transport
        .send(ApiRequest::new(Method::Post, LOGIN_PATH).with_body(body))
        .await?;
    let status = resp.status;
    let envelope: Envelope<serde::de::IgnoredAny> = decode(resp, LOGIN_FAILED)?;

    if envelope.status == Some(false) {
        let message = envelope.reason().unwrap_or(LOGIN_FAILED).to_owned();
        return Err(ApiError::Api { status, message });
    }

    match (envelope.token, envelope.user) {
        (Some(token), Some(user)) if !token.is_empty() => Ok(LoginSuccess { token, user }),
        _ => Err(ApiError::Transport(MALFORMED_BODY.to_owned())),
    }
}
