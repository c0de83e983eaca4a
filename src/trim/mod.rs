// src/trim/mod.rs
//! Title upkeep: trimming one page, or every page below a root.
//!
//! [`TitleNormalizer`] handles a single page. [`SubtreeWalker`] walks a
//! subtree level by level, normalizing every page it reaches and collecting
//! failures instead of stopping at them.

mod normalizer;
mod walker;

pub use normalizer::{NormalizedTitle, TitleNormalizer, TrimOptions};
pub use walker::{SubtreeWalker, WalkReport};

use std::fmt;
use std::io::Write;

/// Writes one progress line. A closed or broken output stream must not
/// abort the run, so failures are only logged.
fn emit_progress<W: Write + ?Sized>(progress: &mut W, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(progress, "{}", line) {
        log::warn!("Could not write progress output: {}", e);
    }
}
