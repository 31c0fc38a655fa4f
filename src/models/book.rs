//! Book model and related request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A tracked book as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Server-assigned identifier, never reused
    pub id: i64,
    pub title: String,
    pub author: String,
    pub pages: i64,
    pub is_read: bool,
    /// Set once at creation
    pub added_at: DateTime<Utc>,
    /// Re-stamped every time the book is marked as read
    pub read_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Build a fresh, unread record from a create request
    pub fn new(id: i64, data: CreateBook, added_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: data.title,
            author: data.author,
            pages: data.pages,
            is_read: false,
            added_at,
            read_at: None,
        }
    }

    /// Flag the book as read at the given instant
    pub fn mark_read(&mut self, at: DateTime<Utc>) {
        self.is_read = true;
        self.read_at = Some(at);
    }
}

/// Create book request.
///
/// Omitted fields take their zero value; anything else in the body
/// (`id`, `is_read`, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub pages: i64,
}

impl CreateBook {
    /// Decode the first JSON value in `body`.
    ///
    /// `null` yields an all-default request and anything after the first
    /// value is ignored. An empty body is an error.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        match serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<Self>>()
            .next()
        {
            Some(data) => Ok(data?.unwrap_or_default()),
            None => Err(serde::de::Error::custom("EOF")),
        }
    }
}

/// Query string carrying a book id (`?id=N`), as documented in the OpenAPI output
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookIdQuery {
    /// Book ID
    pub id: Option<String>,
}
