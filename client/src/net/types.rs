//! Wire schema for the authors API.
//!
//! DESIGN
//! ======
//! The server is inconsistent about where it puts failure reasons (`message`
//! on resource routes, `msg` on login). `Envelope::reason` is the only place
//! that knows about both names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An author record as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Author {
    /// "First Last", as shown in lists and tables.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Biography text, or `"N/A"` when absent or blank.
    #[must_use]
    pub fn biography_or_na(&self) -> &str {
        match self.biography.as_deref() {
            Some(bio) if !bio.trim().is_empty() => bio,
            _ => "N/A",
        }
    }

    /// Mutable fields, for pre-filling the edit form.
    #[must_use]
    pub fn fields(&self) -> AuthorFields {
        AuthorFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            biography: self.biography.clone(),
            image: self.image.clone(),
        }
    }
}

/// Mutable author fields sent on create (POST) and full replacement (PUT).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorFields {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl AuthorFields {
    /// Trim text and drop blank optional fields.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            biography: non_blank(self.biography.as_deref()),
            image: non_blank(self.image.as_deref()),
        }
    }

    /// Names of required fields that are blank.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push("first_name");
        }
        if self.last_name.trim().is_empty() {
            missing.push("last_name");
        }
        missing
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Login form payload for `POST /usuarios/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The user record returned alongside a login token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Successful login: the bearer token to persist plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSuccess {
    pub token: String,
    pub user: User,
}

/// Acknowledgement of a delete.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ack {
    pub message: Option<String>,
}

/// Canonical response envelope.
///
/// Resource routes answer `{ data, message }`; login answers
/// `{ status, token, user, msg }`. Unknown fields are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl<T> Envelope<T> {
    /// Human-readable reason from either `message` or `msg`, ignoring blanks.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        first_reason(self.message.as_deref(), self.msg.as_deref())
    }
}

/// Reason fields only; used to read error bodies whose `data` may not match `T`.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct Reason {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl Reason {
    pub(crate) fn into_message(self) -> Option<String> {
        first_reason(self.message.as_deref(), self.msg.as_deref()).map(str::to_owned)
    }
}

fn first_reason<'a>(message: Option<&'a str>, msg: Option<&'a str>) -> Option<&'a str> {
    [message, msg].into_iter().flatten().find(|m| !m.trim().is_empty())
}
