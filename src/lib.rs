// src/lib.rs
//! notion-upkeep library: housekeeping operations on Notion workspaces.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `TrimError`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `TrimConfig`
//! - **Domain model**: `Page`, `Parent`, `Title`, `RichTextSegment`, `ChildBlock`
//! - **Domain types**: `NotionId`, `PageId`, `BlockId`, `ApiKey`, `ApiBaseUrl`
//! - **API client**: `PageDirectory`, `NotionHttpClient`, parsers
//! - **Title upkeep**: `TitleNormalizer`, `SubtreeWalker`, `WalkReport`

pub mod api;
pub mod config;
pub mod constants;
mod error;
pub mod model;
pub mod trim;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionClientError, NotionErrorCode, TrimError};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{Command, CommandLineInput, TrimArgs, TrimConfig};

// --- Domain Model ---
pub use crate::model::{
    BlockKind, ChildBlock, EquationRun, Link, MentionRun, Page, Parent, ParentKind,
    RichTextSegment, TextRun, Title,
};

// --- Domain Types ---
pub use crate::types::{ApiBaseUrl, ApiKey, BlockId, DatabaseId, NotionId, PageId};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse,
    parser::{parse_children_pagination, parse_page_response},
    NotionHttpClient, PageDirectory, PaginatedResponse, PaginationCursor,
};

// --- Title Upkeep ---
pub use crate::trim::{NormalizedTitle, SubtreeWalker, TitleNormalizer, TrimOptions, WalkReport};
