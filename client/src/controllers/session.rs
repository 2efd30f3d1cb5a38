//! Login, logout, and page-entry flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token is the only thing that survives a reload. Everything a
//! view shows is rebuilt from it: `init_home` and `enter_protected` decide
//! from the stored token alone, and logout invalidates every in-flight load
//! so a late response cannot repaint a signed-out page.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::logging::{log, warn};

use super::Views;
use super::authors::refresh;
use super::flash::{flash, flash_error};
use crate::net::api::{self, AuthorRepository};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{Credentials, User};
use crate::state::detail::DetailState;
use crate::state::form::FormState;
use crate::state::guard::{self, GuardDecision, GuardState};
use crate::state::handle::{HandleKind, StateHandle};
use crate::state::message::Tone;
use crate::state::session::TokenStorage;
use crate::state::view::ViewState;

pub const LOGOUT_MESSAGE: &str = "Sesión cerrada con éxito.";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Ingresa tu correo y contraseña.";

#[must_use]
pub fn welcome_message(user: &User) -> String {
    format!("¡Bienvenido {}!", user.first_name)
}

/// Trim the email and require both fields.
///
/// # Errors
///
/// [`ApiError::Validation`] when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(MISSING_CREDENTIALS_MESSAGE.to_owned()));
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Pick the home view from the stored token; fetch the list when signed in.
pub async fn init_home<T, S, K>(repo: &AuthorRepository<T, S>, views: &Views<K>) -> bool
where
    T: Transport,
    S: TokenStorage,
    K: HandleKind,
{
    supersede_page_loads(views);
    if !repo.session().has_token() {
        views.view.update_with(|v| *v = ViewState::Unauthenticated);
        return false;
    }
    views.view.update_with(|v| {
        if !v.is_authenticated() {
            *v = ViewState::Listing;
        }
    });
    refresh(repo, views).await;
    true
}

/// Exchange credentials for a token, then switch to the signed-in view.
///
/// # Errors
///
/// Returns the validation or login failure after showing it.
pub async fn login<T, S, K>(
    repo: &AuthorRepository<T, S>,
    views: &Views<K>,
    email: &str,
    password: &str,
) -> Result<User, ApiError>
where
    T: Transport,
    S: TokenStorage,
    K: HandleKind,
{
    let attempt = match validate_credentials(email, password) {
        Ok(credentials) => api::login(repo.transport(), &credentials).await,
        Err(err) => Err(err),
    };
    let success = match attempt {
        Ok(success) => success,
        Err(err) => {
            flash_error(&views.messages, &err);
            return Err(err);
        }
    };

    repo.session().set_token(&success.token);
    log!("signed in as {}", success.user.first_name);
    flash(&views.messages, welcome_message(&success.user), Tone::Success);
    views.view.update_with(|v| *v = ViewState::Listing);
    refresh(repo, views).await;
    Ok(success.user)
}

/// Forget the token and everything loaded with it.
pub fn logout<T, S, K>(repo: &AuthorRepository<T, S>, views: &Views<K>)
where
    T: Transport,
    S: TokenStorage,
    K: HandleKind,
{
    repo.session().clear_token();
    views.view.update_with(|v| *v = ViewState::Unauthenticated);
    views.guard.update_with(|g| *g = GuardState::Checking);
    views.authors.update_with(|a| a.reset());
    views.detail.update_with(|d| d.reset());
    views.form.update_with(|f| f.cancel());
    flash(&views.messages, LOGOUT_MESSAGE, Tone::Success);
}

/// Guard the management page: record the decision, then fetch only if granted.
pub async fn enter_protected<T, S, K>(repo: &AuthorRepository<T, S>, views: &Views<K>) -> GuardDecision
where
    T: Transport,
    S: TokenStorage,
    K: HandleKind,
{
    supersede_page_loads(views);
    let decision = guard::check(repo.session());
    views.guard.update_with(|g| *g = GuardState::from(&decision));

    match &decision {
        GuardDecision::Proceed(_) => {
            views.view.update_with(|v| *v = ViewState::Listing);
            refresh(repo, views).await;
        }
        GuardDecision::Redirect(to) => warn!("no session token, redirecting to {to}"),
    }
    decision
}

/// Drop detail and form loads started on the page being left.
fn supersede_page_loads<K: HandleKind>(views: &Views<K>) {
    views.detail.update_with(DetailState::reset);
    views.form.update_with(FormState::cancel);
}
