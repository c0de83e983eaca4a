use crate::types::{BlockId, NotionId};
use serde::{Deserialize, Serialize};

/// What a child block is, as far as page traversal cares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockKind {
    /// A nested page; its block id is the page id.
    ChildPage { title: String },
    /// An inline database. Never descended into.
    ChildDatabase { title: String },
    /// Any other block type.
    Other,
}

/// One entry of a page's child block listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildBlock {
    pub id: BlockId,
    pub kind: BlockKind,
}

impl ChildBlock {
    pub fn child_page(id: BlockId, title: impl Into<String>) -> Self {
        Self {
            id,
            kind: BlockKind::ChildPage {
                title: title.into(),
            },
        }
    }

    pub fn child_database(id: BlockId, title: impl Into<String>) -> Self {
        Self {
            id,
            kind: BlockKind::ChildDatabase {
                title: title.into(),
            },
        }
    }

    pub fn other(id: BlockId) -> Self {
        Self {
            id,
            kind: BlockKind::Other,
        }
    }

    /// The id to fetch the full page with, when this block is a child page.
    pub fn child_page_id(&self) -> Option<NotionId> {
        match self.kind {
            BlockKind::ChildPage { .. } => Some(NotionId::from(&self.id)),
            _ => None,
        }
    }
}
