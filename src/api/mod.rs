// src/api/mod.rs
//! Notion API interaction: reading pages and child listings, writing titles.
//!
//! Business logic depends on the [`PageDirectory`] trait, never on HTTP
//! details. [`NotionHttpClient`] is the live implementation.

pub mod client;
pub mod notion_client_adapter;
pub mod parser;
mod requests;
mod responses;
mod types;

use crate::error::AppError;
use crate::model::{ChildBlock, Page, Title};
use crate::types::{NotionId, PageId};

pub use client::NotionHttpClient;
pub use requests::title_update_body;
pub use types::{PaginatedResponse, PaginationCursor};

/// The pages of a Notion workspace, as seen by title upkeep.
///
/// Implementations perform one remote round trip per call and never retry.
#[async_trait::async_trait]
pub trait PageDirectory: Send + Sync {
    /// Fetches a page with its parent reference and title.
    async fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError>;

    /// Fetches one page of the child blocks of `page`, starting at `cursor`
    /// (or at the beginning when `None`).
    async fn list_children(
        &self,
        page: &PageId,
        cursor: Option<&PaginationCursor>,
    ) -> Result<PaginatedResponse<ChildBlock>, AppError>;

    /// Replaces the title of `page`.
    async fn update_title(&self, page: &PageId, title: &Title) -> Result<(), AppError>;
}
