//! One-shot notices carried from a mutating request to the next list page.
//!
//! The notice travels in a short-lived `flash` cookie set on the redirect;
//! the list page reads it and clears it in the same response.

use axum::http::{HeaderMap, header::COOKIE};

pub const COOKIE_NAME: &str = "flash";

/// Seconds an unread notice survives.
const MAX_AGE_SECS: u32 = 6;

pub const CLEAR_COOKIE: &str = "flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Added,
    Edited,
    Deleted,
}

impl Flash {
    pub fn key(&self) -> &'static str {
        match self {
            Flash::Added => "added",
            Flash::Edited => "edited",
            Flash::Deleted => "deleted",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Flash::Added => "Contact has been added!",
            Flash::Edited => "Contact has been edited!",
            Flash::Deleted => "Contact has been deleted!",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "added" => Some(Flash::Added),
            "edited" => Some(Flash::Edited),
            "deleted" => Some(Flash::Deleted),
            _ => None,
        }
    }

    pub fn set_cookie(&self) -> String {
        format!(
            "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
            COOKIE_NAME,
            self.key(),
            MAX_AGE_SECS
        )
    }

    /// Pending flash from the request's `Cookie` headers, if any.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == COOKIE_NAME)
            .and_then(|(_, value)| Flash::from_key(value))
    }
}
