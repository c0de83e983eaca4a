// src/error.rs
//! Application error types with structured error handling.
//!
//! `AppError` covers everything that can go wrong talking to Notion or
//! setting up a run. `TrimError` is the per-page vocabulary of the title
//! upkeep itself: each variant names the page or edge it happened on and
//! wraps the underlying `AppError` as its source.

use crate::model::ParentKind;
use crate::types::{NotionId, PageId};
use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is not shared with the integration
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Conflict with current state of the resource
    Conflict,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            404 => Self::ObjectNotFound,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),

    #[error(transparent)]
    NotionClient(#[from] NotionClientError),
}

impl AppError {
    /// Whether the API reported that the object does not exist or is not
    /// shared with the integration.
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::NotionService { code, .. } => code.is_not_found(),
            AppError::NotionClient(NotionClientError::NotionApi { code, status, .. }) => {
                NotionErrorCode::from_api_response(code).is_not_found() || *status == 404
            }
            _ => false,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Errors decoding Notion payloads through `notion-client` types.
#[derive(Error, Debug)]
pub enum NotionClientError {
    #[error("Failed to deserialize response: {source}\nBody: {body}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Notion API error ({status}): {code} - {message}")]
    NotionApi {
        status: u32,
        code: String,
        message: String,
        request_id: Option<String>,
    },

    #[error("Type conversion error: {message}")]
    ConversionError { message: String },
}

/// A failure while trimming one page's title or discovering its children.
#[derive(Error, Debug)]
pub enum TrimError {
    #[error("page {page_id}: page type {kind} not supported")]
    UnsupportedContainer { page_id: PageId, kind: ParentKind },

    #[error("page {id} not found: {source}")]
    NotFound {
        id: NotionId,
        #[source]
        source: AppError,
    },

    #[error("failed to fetch {target}: {source}")]
    RemoteFetch {
        target: String,
        #[source]
        source: AppError,
    },

    #[error("failed to update title of page {page_id}: {source}")]
    RemotePersist {
        page_id: PageId,
        #[source]
        source: AppError,
    },
}

impl TrimError {
    /// Classifies a failed page lookup.
    pub fn page_lookup(id: &NotionId, source: AppError) -> Self {
        if source.is_not_found() {
            TrimError::NotFound {
                id: id.clone(),
                source,
            }
        } else {
            TrimError::RemoteFetch {
                target: format!("page {}", id),
                source,
            }
        }
    }

    /// Classifies a failed child listing of `parent`.
    pub fn child_listing(parent: &PageId, source: AppError) -> Self {
        if source.is_not_found() {
            TrimError::NotFound {
                id: NotionId::from(parent),
                source,
            }
        } else {
            TrimError::RemoteFetch {
                target: format!("children of page {}", parent),
                source,
            }
        }
    }
}
