// src/model/title.rs
//! Page titles as ordered rich text, and whitespace trimming over them.
//!
//! A Notion title is not a string: it is a sequence of segments, each of
//! which is plain text, a mention, or an inline equation. Only plain text
//! carries editable content. Trimming therefore walks inward from both ends,
//! stripping whitespace from text segments and dropping the ones that end up
//! empty, and stops at the first segment that is not plain text.

use crate::constants::TITLE_SEGMENT_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hyperlink attached to a text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Plain text: the only segment kind whose content may be edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub content: String,
    pub link: Option<Link>,
    /// Annotation payload exactly as the API returned it.
    pub annotations: Option<serde_json::Value>,
    pub href: Option<String>,
}

impl TextRun {
    fn trim_start(&mut self) {
        let cut = self.content.len() - self.content.trim_start().len();
        self.content.drain(..cut);
    }

    fn trim_end(&mut self) {
        let keep = self.content.trim_end().len();
        self.content.truncate(keep);
    }
}

/// A mention of a user, page, database or date. Opaque to trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionRun {
    /// Mention payload exactly as the API returned it.
    pub mention: serde_json::Value,
    pub annotations: Option<serde_json::Value>,
    pub plain_text: String,
    pub href: Option<String>,
}

/// An inline equation. Opaque to trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationRun {
    pub expression: String,
    pub annotations: Option<serde_json::Value>,
    pub plain_text: String,
    pub href: Option<String>,
}

/// One segment of a rich text title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RichTextSegment {
    Text(TextRun),
    Mention(MentionRun),
    Equation(EquationRun),
}

impl RichTextSegment {
    /// An unannotated, unlinked text segment.
    pub fn text(content: impl Into<String>) -> Self {
        RichTextSegment::Text(TextRun {
            content: content.into(),
            link: None,
            annotations: None,
            href: None,
        })
    }

    /// A mention segment with the given rendered text and raw payload.
    pub fn mention(plain_text: impl Into<String>, mention: serde_json::Value) -> Self {
        RichTextSegment::Mention(MentionRun {
            mention,
            annotations: None,
            plain_text: plain_text.into(),
            href: None,
        })
    }

    /// An inline equation segment.
    pub fn equation(expression: impl Into<String>) -> Self {
        let expression = expression.into();
        RichTextSegment::Equation(EquationRun {
            plain_text: expression.clone(),
            expression,
            annotations: None,
            href: None,
        })
    }

    /// The text a reader sees for this segment.
    pub fn plain_text(&self) -> &str {
        match self {
            RichTextSegment::Text(run) => &run.content,
            RichTextSegment::Mention(run) => &run.plain_text,
            RichTextSegment::Equation(run) => &run.plain_text,
        }
    }
}

/// A page title: rich text segments in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(Vec<RichTextSegment>);

impl Title {
    pub fn new(segments: Vec<RichTextSegment>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[RichTextSegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Strips leading whitespace.
    ///
    /// Leading text segments are stripped in turn; each one that becomes
    /// empty is dropped and the scan moves on to its neighbour. The scan
    /// stops at the first text segment with content left, or at the first
    /// segment that is not text, which is kept as is.
    pub fn trim_start(&mut self) {
        let mut start = 0;
        while let Some(RichTextSegment::Text(run)) = self.0.get_mut(start) {
            run.trim_start();
            if !run.content.is_empty() {
                break;
            }
            start += 1;
        }
        self.0.drain(..start);
    }

    /// Strips trailing whitespace; the mirror image of [`Title::trim_start`].
    pub fn trim_end(&mut self) {
        let mut end = self.0.len();
        while end > 0 {
            match &mut self.0[end - 1] {
                RichTextSegment::Text(run) => {
                    run.trim_end();
                    if !run.content.is_empty() {
                        break;
                    }
                    end -= 1;
                }
                _ => break,
            }
        }
        self.0.truncate(end);
    }

    /// Strips whitespace from both ends.
    ///
    /// A title made only of whitespace text collapses to an empty title.
    /// Segments between the two kept ends are never touched.
    pub fn trim(&mut self) {
        self.trim_start();
        self.trim_end();
    }

    /// Returns a trimmed copy, leaving `self` as it was.
    pub fn trimmed(&self) -> Self {
        let mut title = self.clone();
        title.trim();
        title
    }

    /// The concatenated text of every segment.
    pub fn plain_text(&self) -> String {
        self.0.iter().map(RichTextSegment::plain_text).collect()
    }

    /// Segment texts joined with a visible separator, so that segment
    /// boundaries and stray whitespace show up in progress output.
    pub fn to_segmented_string(&self) -> String {
        let parts: Vec<&str> = self.0.iter().map(RichTextSegment::plain_text).collect();
        parts.join(TITLE_SEGMENT_SEPARATOR)
    }
}

impl From<Vec<RichTextSegment>> for Title {
    fn from(segments: Vec<RichTextSegment>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plain_text())
    }
}
