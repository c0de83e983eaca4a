// tests/support/mod.rs
//! A scripted Notion workspace for driving title upkeep end to end.

#![allow(dead_code)]

use notion_upkeep::{
    AppError, BlockId, ChildBlock, NotionClientError, NotionId, Page, PageDirectory, PageId,
    PaginatedResponse, PaginationCursor, Parent, RichTextSegment, Title,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub fn id(n: u32) -> PageId {
    PageId::parse(&format!("{:08x}-0000-4000-8000-{:012x}", n, n)).unwrap()
}

pub fn block(n: u32) -> BlockId {
    BlockId::parse(id(n).as_str()).unwrap()
}

pub fn text_title(parts: &[&str]) -> Title {
    Title::new(parts.iter().map(|p| RichTextSegment::text(*p)).collect())
}

pub fn page_under(parent: Parent, n: u32, title: Title) -> Page {
    Page {
        id: id(n),
        parent,
        title,
        url: format!("https://www.notion.so/{}", id(n).as_str()),
        archived: false,
    }
}

pub fn subpage(parent: u32, n: u32, title: Title) -> Page {
    page_under(Parent::Page { page_id: id(parent) }, n, title)
}

fn not_found() -> AppError {
    NotionClientError::NotionApi {
        status: 404,
        code: "object_not_found".to_string(),
        message: "Could not find page".to_string(),
        request_id: Some("req_test".to_string()),
    }
    .into()
}

fn rejected() -> AppError {
    NotionClientError::NotionApi {
        status: 400,
        code: "validation_error".to_string(),
        message: "Title cannot be updated".to_string(),
        request_id: None,
    }
    .into()
}

/// Child listings are served `page_size` blocks at a time.
pub struct Workspace {
    page_size: usize,
    pages: HashMap<PageId, Page>,
    children: HashMap<PageId, Vec<ChildBlock>>,
    rejecting: HashSet<PageId>,
    writes: Mutex<Vec<(PageId, Title)>>,
}

impl Workspace {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            pages: HashMap::new(),
            children: HashMap::new(),
            rejecting: HashSet::new(),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Registers `page` and, when its parent is a page, lists it as a child.
    pub fn add(mut self, page: Page) -> Self {
        if let Parent::Page { page_id } = &page.parent {
            let title = page.title.plain_text();
            self.children
                .entry(page_id.clone())
                .or_default()
                .push(ChildBlock::child_page(
                    BlockId::parse(page.id.as_str()).unwrap(),
                    title,
                ));
        }
        self.pages.insert(page.id.clone(), page);
        self
    }

    /// Appends an arbitrary block to the listing of `parent`.
    pub fn with_block(mut self, parent: u32, child: ChildBlock) -> Self {
        self.children.entry(id(parent)).or_default().push(child);
        self
    }

    pub fn rejecting(mut self, n: u32) -> Self {
        self.rejecting.insert(id(n));
        self
    }

    pub fn root(&self, n: u32) -> Page {
        self.pages[&id(n)].clone()
    }

    pub fn writes(&self) -> Vec<(PageId, Title)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn written_title(&self, n: u32) -> Option<Title> {
        self.writes()
            .into_iter()
            .find(|(page, _)| *page == id(n))
            .map(|(_, title)| title)
    }
}

#[async_trait::async_trait]
impl PageDirectory for Workspace {
    async fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError> {
        self.pages
            .get(&PageId::from(id))
            .cloned()
            .ok_or_else(not_found)
    }

    async fn list_children(
        &self,
        page: &PageId,
        cursor: Option<&PaginationCursor>,
    ) -> Result<PaginatedResponse<ChildBlock>, AppError> {
        let all = self.children.get(page).cloned().unwrap_or_default();
        let start = cursor
            .map(|c| c.as_str().parse::<usize>().unwrap())
            .unwrap_or(0);
        let end = (start + self.page_size).min(all.len());
        let results = all[start.min(end)..end].to_vec();

        if end < all.len() {
            Ok(PaginatedResponse::with_more(results, end.to_string()))
        } else {
            Ok(PaginatedResponse::last(results))
        }
    }

    async fn update_title(&self, page: &PageId, title: &Title) -> Result<(), AppError> {
        if self.rejecting.contains(page) {
            return Err(rejected());
        }
        self.writes
            .lock()
            .unwrap()
            .push((page.clone(), title.clone()));
        Ok(())
    }
}
