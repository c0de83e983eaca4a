// src/trim/walker.rs
//! Breadth-first title upkeep over a page subtree.
//!
//! Pages are handled one level at a time. Every page of the current level
//! is normalized and its child listing is paged through to the end; child
//! pages found there are fetched and form the next level. Failures are
//! recorded against the page or listing they happened on and the walk
//! carries on with everything else.

use super::normalizer::{TitleNormalizer, TrimOptions};
use crate::api::{PageDirectory, PaginationCursor};
use crate::error::TrimError;
use crate::model::{BlockKind, Page};
use crate::types::PageId;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::io::Write;

/// Outcome of a subtree walk.
#[derive(Debug, Default)]
pub struct WalkReport {
    pub pages_visited: usize,
    pub titles_written: usize,
    /// Every per-page failure, in the order they occurred.
    pub errors: Vec<TrimError>,
}

impl WalkReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Pages at one depth, in discovery order, each at most once.
#[derive(Debug, Default)]
struct TraversalLevel {
    pages: IndexMap<PageId, Page>,
}

impl TraversalLevel {
    fn root(page: Page) -> Self {
        let mut level = Self::default();
        level.push(page);
        level
    }

    /// Adds a page unless it is already part of this level.
    fn push(&mut self, page: Page) {
        if !self.pages.contains_key(&page.id) {
            self.pages.insert(page.id.clone(), page);
        }
    }

    fn contains(&self, id: &PageId) -> bool {
        self.pages.contains_key(id)
    }

    fn len(&self) -> usize {
        self.pages.len()
    }

    fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn into_pages(self) -> impl Iterator<Item = Page> {
        self.pages.into_values()
    }
}

/// Walks a subtree breadth-first, trimming every page title on the way.
pub struct SubtreeWalker<'a, D: PageDirectory + ?Sized> {
    directory: &'a D,
    normalizer: TitleNormalizer<'a, D>,
}

impl<'a, D: PageDirectory + ?Sized> SubtreeWalker<'a, D> {
    pub fn new(directory: &'a D, options: TrimOptions) -> Self {
        Self {
            directory,
            normalizer: TitleNormalizer::new(directory, options),
        }
    }

    /// Trims `root` and every page below it.
    ///
    /// Never fails as a whole: each failure lands in [`WalkReport::errors`].
    /// A page that was processed once is skipped if it shows up again, so a
    /// cyclic hierarchy still terminates.
    pub async fn walk<W: Write + ?Sized>(&self, root: Page, progress: &mut W) -> WalkReport {
        let mut report = WalkReport::default();
        let mut visited: HashSet<PageId> = HashSet::new();
        let mut level = TraversalLevel::root(root);
        let mut depth = 0usize;

        while !level.is_empty() {
            log::info!("Trimming level {} ({} pages)", depth, level.len());
            let mut next = TraversalLevel::default();

            for page in level.into_pages() {
                if !visited.insert(page.id.clone()) {
                    log::warn!("Page {} was already processed, skipping it", page.id);
                    continue;
                }
                report.pages_visited += 1;

                match self.normalizer.normalize(&page, progress).await {
                    Ok(outcome) if outcome.written => report.titles_written += 1,
                    Ok(_) => {}
                    Err(err) => {
                        log::debug!("Trimming page {} failed: {}", page.id, err);
                        report.errors.push(err);
                    }
                }

                self.discover_children(&page.id, &visited, &mut next, &mut report.errors)
                    .await;
            }

            level = next;
            depth += 1;
        }

        log::info!(
            "Walk finished: {} pages, {} titles written, {} errors",
            report.pages_visited,
            report.titles_written,
            report.errors.len()
        );
        report
    }

    /// Pages through the child listing of `parent` and adds every child
    /// page to `next`. Stops at the first failure, which is recorded.
    async fn discover_children(
        &self,
        parent: &PageId,
        visited: &HashSet<PageId>,
        next: &mut TraversalLevel,
        errors: &mut Vec<TrimError>,
    ) {
        let mut cursor: Option<PaginationCursor> = None;

        loop {
            let listing = match self.directory.list_children(parent, cursor.as_ref()).await {
                Ok(listing) => listing,
                Err(source) => {
                    errors.push(TrimError::child_listing(parent, source));
                    return;
                }
            };

            for block in &listing.results {
                if let BlockKind::ChildDatabase { title } = &block.kind {
                    log::debug!("Not descending into child database '{}' of {}", title, parent);
                    continue;
                }
                let Some(child_id) = block.child_page_id() else {
                    continue;
                };
                let child_page = PageId::from(&child_id);
                if visited.contains(&child_page) {
                    log::warn!("Page {} links back to {}, skipping it", parent, child_id);
                    continue;
                }
                if next.contains(&child_page) {
                    log::debug!("Page {} already queued", child_id);
                    continue;
                }

                match self.directory.retrieve_page(&child_id).await {
                    Ok(child) => next.push(child),
                    Err(source) => {
                        errors.push(TrimError::page_lookup(&child_id, source));
                        return;
                    }
                }
            }

            match listing.continuation() {
                Some(next_cursor) => cursor = Some(next_cursor.clone()),
                None => break,
            }
        }
    }
}
