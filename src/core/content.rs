//! # Learning Content
//!
//! Topics and the content blocks that make up a lesson.
//!
//! The backend has served two topic shapes over time. The structured one
//! (`contentBlocks`) is canonical. The older flat shape (`signImage`,
//! `description`, top-level `steps`) is folded into blocks while
//! deserializing, so the rest of the app only ever sees one schema.

use serde::{Deserialize, Serialize};

/// A numbered step inside a `steps` block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Step {
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteLevel {
    #[default]
    Info,
    Warning,
    Danger,
}

impl NoteLevel {
    pub fn label(self) -> &'static str {
        match self {
            NoteLevel::Info => "INFO",
            NoteLevel::Warning => "WARNING",
            NoteLevel::Danger => "DANGER",
        }
    }
}

/// One renderable piece of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Image {
        #[serde(rename = "imageUrl")]
        image_url: String,
        #[serde(default)]
        caption: Option<String>,
    },
    Steps {
        steps: Vec<Step>,
    },
    Note {
        text: String,
        #[serde(default)]
        level: NoteLevel,
    },
}

/// A learning unit: title, media and content blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTopic")]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub img_url: Option<String>,
    pub count: String,
    pub tag: String,
    pub content_blocks: Vec<ContentBlock>,
    pub is_published: Option<bool>,
}

/// Wire shape accepting both the structured and the legacy flat fields.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTopic {
    #[serde(alias = "_id")]
    id: String,
    title: String,
    #[serde(default)]
    img_url: Option<String>,
    #[serde(default)]
    count: String,
    #[serde(default)]
    tag: String,
    #[serde(default)]
    content_blocks: Option<Vec<ContentBlock>>,
    #[serde(default)]
    is_published: Option<bool>,
    // Legacy flat fields
    #[serde(default)]
    sign_image: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    steps: Option<Vec<Step>>,
}

impl From<RawTopic> for Topic {
    fn from(raw: RawTopic) -> Self {
        let content_blocks = match raw.content_blocks {
            Some(blocks) => blocks,
            None => {
                let mut blocks = Vec::new();
                if let Some(text) = raw.description.filter(|d| !d.trim().is_empty()) {
                    blocks.push(ContentBlock::Text { text });
                }
                if let Some(steps) = raw.steps.filter(|s| !s.is_empty()) {
                    blocks.push(ContentBlock::Steps { steps });
                }
                blocks
            }
        };

        Topic {
            id: raw.id,
            title: raw.title,
            img_url: raw.img_url.or(raw.sign_image).filter(|u| !u.is_empty()),
            count: raw.count,
            tag: raw.tag,
            content_blocks,
            is_published: raw.is_published,
        }
    }
}

/// Colour family picked from a topic's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTheme {
    Beginner,
    Advanced,
    Warning,
    Neutral,
}

impl Topic {
    pub fn theme(&self) -> TagTheme {
        let tag = self.tag.to_lowercase();
        if tag.contains("beginner") {
            TagTheme::Beginner
        } else if tag.contains("advanced") {
            TagTheme::Advanced
        } else if tag.contains("warning") {
            TagTheme::Warning
        } else {
            TagTheme::Neutral
        }
    }

    /// Unpublished topics are hidden; a missing flag counts as published.
    pub fn is_visible(&self) -> bool {
        self.is_published.unwrap_or(true)
    }
}

/// Topics whose title contains `query`, ignoring case. Empty query keeps all.
pub fn filter_topics<'a>(topics: &'a [Topic], query: &str) -> Vec<&'a Topic> {
    let needle = query.trim().to_lowercase();
    topics
        .iter()
        .filter(|t| t.is_visible())
        .filter(|t| needle.is_empty() || t.title.to_lowercase().contains(&needle))
        .collect()
}
