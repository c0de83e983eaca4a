mod block;
pub mod title;

pub use block::{BlockKind, ChildBlock};
pub use title::{EquationRun, Link, MentionRun, RichTextSegment, TextRun, Title};

use crate::types::{BlockId, DatabaseId, PageId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Notion page, reduced to what title upkeep needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub parent: Parent,
    pub title: Title,
    pub url: String,
    pub archived: bool,
}

impl Page {
    pub fn parent_kind(&self) -> ParentKind {
        self.parent.kind()
    }
}

/// Parent reference with typed IDs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Parent {
    #[serde(rename = "page_id")]
    Page { page_id: PageId },
    #[serde(rename = "database_id")]
    Database { database_id: DatabaseId },
    #[serde(rename = "block_id")]
    Block { block_id: BlockId },
    #[serde(rename = "workspace")]
    Workspace,
}

impl Parent {
    pub fn kind(&self) -> ParentKind {
        match self {
            Parent::Page { .. } => ParentKind::Page,
            Parent::Database { .. } => ParentKind::Database,
            Parent::Block { .. } => ParentKind::Block,
            Parent::Workspace => ParentKind::Workspace,
        }
    }
}

/// The kind of container a page lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentKind {
    Page,
    Database,
    Block,
    Workspace,
}

impl ParentKind {
    /// Whether pages under this container may have their title rewritten.
    /// Database rows may not.
    pub fn allows_title_update(self) -> bool {
        !matches!(self, ParentKind::Database)
    }
}

impl fmt::Display for ParentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Matches the parent `type` tag of the API.
        let tag = match self {
            ParentKind::Page => "page_id",
            ParentKind::Database => "database_id",
            ParentKind::Block => "block_id",
            ParentKind::Workspace => "workspace",
        };
        f.write_str(tag)
    }
}
