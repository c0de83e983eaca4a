// src/api/notion_client_adapter.rs
//! Adapter layer for converting notion-client types to our domain model.
//!
//! Only the parts of a page that title upkeep touches are converted. Rich
//! text payloads that are opaque to trimming (mentions, annotations) are
//! kept as raw JSON so they can be written back exactly as read.

use crate::error::{AppError, NotionClientError};
use crate::model::{
    BlockKind, ChildBlock, EquationRun, Link, MentionRun, Page, Parent, RichTextSegment, TextRun,
    Title,
};
use crate::types::{BlockId, DatabaseId, PageId};
use notion_client::objects::rich_text::RichText as NcRichText;
use serde::Serialize;
use std::collections::HashMap;

/// Convert notion-client Page to our domain Page
pub fn convert_page(notion_page: notion_client::objects::page::Page) -> Result<Page, AppError> {
    let id = PageId::parse(&notion_page.id)?;
    let title = extract_page_title(notion_page.properties)?;
    let parent = convert_parent(notion_page.parent)?;

    Ok(Page {
        id,
        parent,
        title,
        url: notion_page.url,
        archived: notion_page.archived,
    })
}

/// Convert a notion-client Block from a children listing
pub fn convert_child_block(
    notion_block: notion_client::objects::block::Block,
) -> Result<ChildBlock, AppError> {
    use notion_client::objects::block::BlockType;

    let id = BlockId::parse(&notion_block.id.ok_or_else(|| {
        NotionClientError::ConversionError {
            message: "Block missing required ID field".to_string(),
        }
    })?)?;

    let kind = match notion_block.block_type {
        BlockType::ChildPage { child_page } => BlockKind::ChildPage {
            title: child_page.title,
        },
        BlockType::ChildDatabase { child_database } => BlockKind::ChildDatabase {
            title: child_database.title,
        },
        _ => BlockKind::Other,
    };

    Ok(ChildBlock { id, kind })
}

/// Convert notion-client Parent to our domain Parent
fn convert_parent(
    notion_parent: notion_client::objects::parent::Parent,
) -> Result<Parent, AppError> {
    use notion_client::objects::parent::Parent as NcParent;

    match notion_parent {
        NcParent::PageId { page_id } => Ok(Parent::Page {
            page_id: PageId::parse(&page_id)?,
        }),
        NcParent::DatabaseId { database_id } => Ok(Parent::Database {
            database_id: DatabaseId::parse(&database_id)?,
        }),
        NcParent::BlockId { block_id } => Ok(Parent::Block {
            block_id: BlockId::parse(&block_id)?,
        }),
        NcParent::Workspace { .. } => Ok(Parent::Workspace),
        _ => Err(NotionClientError::ConversionError {
            message: "Unsupported parent type".to_string(),
        }
        .into()),
    }
}

/// Finds the title property, whatever the page calls it.
fn extract_page_title(
    properties: HashMap<String, notion_client::objects::page::PageProperty>,
) -> Result<Title, AppError> {
    for (_, property) in properties {
        if let notion_client::objects::page::PageProperty::Title { title, .. } = property {
            let segments = title
                .into_iter()
                .map(convert_segment)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Title::new(segments));
        }
    }

    Err(NotionClientError::ConversionError {
        message: "Page has no title property".to_string(),
    }
    .into())
}

fn convert_segment(rich_text: NcRichText) -> Result<RichTextSegment, AppError> {
    match rich_text {
        NcRichText::Text {
            text,
            annotations,
            plain_text: _,
            href,
        } => Ok(RichTextSegment::Text(TextRun {
            content: text.content,
            link: text.link.map(|link| Link { url: link.url }),
            annotations: annotations.as_ref().map(to_raw).transpose()?,
            href,
        })),

        NcRichText::Mention {
            mention,
            annotations,
            plain_text,
            href,
        } => Ok(RichTextSegment::Mention(MentionRun {
            mention: to_raw(&mention)?,
            annotations: Some(to_raw(&annotations)?),
            plain_text,
            href,
        })),

        NcRichText::Equation {
            equation,
            annotations,
            plain_text,
            href,
        } => Ok(RichTextSegment::Equation(EquationRun {
            expression: equation.expression,
            annotations: Some(to_raw(&annotations)?),
            plain_text,
            href,
        })),

        other => Err(NotionClientError::ConversionError {
            message: format!("Unsupported rich text segment in title: {:?}", other),
        }
        .into()),
    }
}

fn to_raw<T: Serialize>(value: &T) -> Result<serde_json::Value, AppError> {
    Ok(serde_json::to_value(value)?)
}
