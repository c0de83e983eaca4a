// src/trim/normalizer.rs
//! Trimming the title of a single page.

use super::emit_progress;
use crate::api::PageDirectory;
use crate::error::TrimError;
use crate::model::Page;
use std::io::Write;

/// Knobs for how titles are written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimOptions {
    /// Report what would change without writing anything.
    pub dry_run: bool,
    /// Skip the write when trimming leaves the title as it was.
    pub skip_unchanged: bool,
}

/// What happened to one page's title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedTitle {
    /// Trimming altered the title.
    pub changed: bool,
    /// An update was sent and acknowledged.
    pub written: bool,
}

/// Trims one page title and writes it back through a [`PageDirectory`].
pub struct TitleNormalizer<'a, D: PageDirectory + ?Sized> {
    directory: &'a D,
    options: TrimOptions,
}

impl<'a, D: PageDirectory + ?Sized> TitleNormalizer<'a, D> {
    pub fn new(directory: &'a D, options: TrimOptions) -> Self {
        Self { directory, options }
    }

    /// Trims the title of `page` and persists the result.
    ///
    /// Pages inside a database are refused with
    /// [`TrimError::UnsupportedContainer`] and left untouched. Otherwise a
    /// progress line naming the page and its current title goes to
    /// `progress`, then the trimmed title is written, even when trimming
    /// changed nothing (unless [`TrimOptions::skip_unchanged`] is set).
    pub async fn normalize<W: Write + ?Sized>(
        &self,
        page: &Page,
        progress: &mut W,
    ) -> Result<NormalizedTitle, TrimError> {
        let kind = page.parent_kind();
        if !kind.allows_title_update() {
            return Err(TrimError::UnsupportedContainer {
                page_id: page.id.clone(),
                kind,
            });
        }

        let trimmed = page.title.trimmed();
        let changed = trimmed != page.title;

        if self.options.dry_run {
            emit_progress(
                progress,
                format_args!(
                    "would trim title for page {} ({}) to ({})",
                    page.id,
                    page.title.to_segmented_string(),
                    trimmed.to_segmented_string()
                ),
            );
            return Ok(NormalizedTitle {
                changed,
                written: false,
            });
        }

        if !changed && self.options.skip_unchanged {
            log::debug!("Title of page {} is already trimmed", page.id);
            return Ok(NormalizedTitle {
                changed,
                written: false,
            });
        }

        emit_progress(
            progress,
            format_args!(
                "trimming title for page {} ({})",
                page.id,
                page.title.to_segmented_string()
            ),
        );

        self.directory
            .update_title(&page.id, &trimmed)
            .await
            .map_err(|source| TrimError::RemotePersist {
                page_id: page.id.clone(),
                source,
            })?;

        Ok(NormalizedTitle {
            changed,
            written: true,
        })
    }
}
