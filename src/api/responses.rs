// src/api/responses.rs
//! API response types using the notion-client library for parsing.
//!
//! Wire payloads are decoded with notion-client's serde implementations and
//! then converted into the domain model through [`ToDomain`].

use serde::{Deserialize, Serialize};

pub use notion_client::objects::{
    block::Block as NotionBlock, error::Error as NotionError, page::Page as NotionPage,
};

/// Generic paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub object: String,
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// Block children response using notion-client types
pub type RetrieveBlockChildrenResponse = PaginatedResponse<NotionBlock>;

/// Trait for converting notion-client types to domain types
pub trait ToDomain<T> {
    fn to_domain(self) -> Result<T, crate::error::AppError>;
}

impl ToDomain<crate::model::Page> for NotionPage {
    fn to_domain(self) -> Result<crate::model::Page, crate::error::AppError> {
        crate::api::notion_client_adapter::convert_page(self)
    }
}

impl ToDomain<crate::model::ChildBlock> for NotionBlock {
    fn to_domain(self) -> Result<crate::model::ChildBlock, crate::error::AppError> {
        crate::api::notion_client_adapter::convert_child_block(self)
    }
}

impl RetrieveBlockChildrenResponse {
    /// Convert all blocks to domain model
    pub fn into_domain_blocks(
        self,
    ) -> Result<Vec<crate::model::ChildBlock>, crate::error::AppError> {
        self.results.into_iter().map(ToDomain::to_domain).collect()
    }
}
