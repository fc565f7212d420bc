//! Documentation content
//!
//! Raw doc comments arrive as [`DocText`]: paragraphs made of plain runs,
//! cross-reference markers and hyperlink markers. Nodes carry the
//! normalized [`Content`] (abstract, description, remaining paragraphs).

use serde::{Deserialize, Serialize};

/// One run inside a documentation paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocRun {
    Text { text: String },
    /// Cross-reference to another documented entity
    Ref { target: String, text: String },
    /// External hyperlink
    Link { url: String, text: String },
}

impl DocRun {
    pub fn text(text: impl Into<String>) -> Self {
        DocRun::Text { text: text.into() }
    }

    pub fn reference(target: impl Into<String>, text: impl Into<String>) -> Self {
        DocRun::Ref {
            target: target.into(),
            text: text.into(),
        }
    }

    pub fn link(url: impl Into<String>, text: impl Into<String>) -> Self {
        DocRun::Link {
            url: url.into(),
            text: text.into(),
        }
    }

    pub fn visible_text(&self) -> &str {
        match self {
            DocRun::Text { text } | DocRun::Ref { text, .. } | DocRun::Link { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<DocRun>,
}

impl Paragraph {
    pub fn new(runs: Vec<DocRun>) -> Self {
        Self { runs }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![DocRun::text(text)],
        }
    }

    /// Visible text with whitespace runs collapsed
    pub fn plain_text(&self) -> String {
        let joined: String = self.runs.iter().map(DocRun::visible_text).collect();
        collapse_whitespace(&joined)
    }

    pub fn is_blank(&self) -> bool {
        self.runs
            .iter()
            .all(|run| run.visible_text().trim().is_empty())
    }
}

/// Free-text documentation as delivered by a source record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocText {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl DocText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::plain(text)],
        }
    }

    pub fn is_blank(&self) -> bool {
        self.paragraphs.iter().all(Paragraph::is_blank)
    }

    fn non_blank(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter().filter(|p| !p.is_blank())
    }
}

/// Normalized documentation attached to a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// One-line abstract (from the brief description)
    #[serde(rename = "abstract")]
    pub summary: String,
    /// First paragraph of the detailed description
    pub description: String,
    /// Remaining detailed paragraphs, markers preserved
    pub paragraphs: Vec<Paragraph>,
}

impl Content {
    pub fn new(summary: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            paragraphs: Vec::new(),
        }
    }

    /// Fold a brief + detailed pair into content.
    ///
    /// A missing brief falls back to the first detailed paragraph.
    pub fn from_doc(brief: &DocText, detailed: &DocText) -> Self {
        let summary = brief
            .non_blank()
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join(" ");

        let mut detailed_iter = detailed.non_blank();
        let description = detailed_iter
            .next()
            .map(Paragraph::plain_text)
            .unwrap_or_default();
        let paragraphs: Vec<Paragraph> = detailed_iter.cloned().collect();

        if summary.is_empty() && !description.is_empty() {
            return Self {
                summary: description,
                description: String::new(),
                paragraphs,
            };
        }

        Self {
            summary,
            description,
            paragraphs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.trim().is_empty()
            && self.description.trim().is_empty()
            && self.paragraphs.iter().all(Paragraph::is_blank)
    }

    /// Cross-reference targets mentioned in the paragraphs
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.runs.iter())
            .filter_map(|run| match run {
                DocRun::Ref { target, .. } => Some(target.as_str()),
                _ => None,
            })
    }
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
