// src/api/types.rs
//! Domain-side pagination types for the Notion API module.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque continuation token handed out by a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaginationCursor(String);

impl PaginationCursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaginationCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of a paginated listing, converted to domain items.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    pub next_cursor: Option<PaginationCursor>,
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// A final page: no cursor, nothing more to fetch.
    pub fn last(results: Vec<T>) -> Self {
        Self {
            results,
            next_cursor: None,
            has_more: false,
        }
    }

    /// A page followed by more results at `cursor`.
    pub fn with_more(results: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            results,
            next_cursor: Some(PaginationCursor::new(cursor)),
            has_more: true,
        }
    }

    /// The cursor to request next, if the listing is not exhausted.
    ///
    /// A response claiming `has_more` without a cursor is treated as the end.
    pub fn continuation(&self) -> Option<&PaginationCursor> {
        if self.has_more {
            self.next_cursor.as_ref()
        } else {
            None
        }
    }
}
