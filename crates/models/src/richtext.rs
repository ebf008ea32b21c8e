//! Block-structured rich text as stored by the Content Store.
//!
//! Each block and inline node carries a `type` tag. Kinds this site does not
//! know decode to an explicit `Unknown` variant instead of failing the whole
//! document.

use serde::Deserialize;

use crate::media::MediaAttributes;

/// A rich-text field: structured blocks, or a plain string from older entries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    Blocks(Vec<Block>),
    Plain(String),
}

impl Default for RichText {
    fn default() -> Self {
        RichText::Blocks(Vec::new())
    }
}

impl RichText {
    pub fn is_empty(&self) -> bool {
        match self {
            RichText::Blocks(blocks) => blocks.iter().all(|b| matches!(b, Block::Unknown)),
            RichText::Plain(text) => text.trim().is_empty(),
        }
    }

    /// Concatenated text content, used for meta descriptions and excerpts.
    pub fn plain_text(&self) -> String {
        match self {
            RichText::Plain(text) => text.trim().to_string(),
            RichText::Blocks(blocks) => {
                let parts: Vec<String> = blocks
                    .iter()
                    .map(Block::plain_text)
                    .filter(|t| !t.trim().is_empty())
                    .collect();
                parts.join(" ")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Paragraph {
        #[serde(default)]
        children: Vec<Inline>,
    },
    Heading {
        #[serde(default = "default_heading_level")]
        level: u8,
        #[serde(default)]
        children: Vec<Inline>,
    },
    List(ListBlock),
    Quote {
        #[serde(default)]
        children: Vec<Inline>,
    },
    Code {
        #[serde(default)]
        language: Option<String>,
        #[serde(default)]
        children: Vec<Inline>,
    },
    Image {
        #[serde(default)]
        image: Option<MediaAttributes>,
    },
    #[serde(other)]
    Unknown,
}

fn default_heading_level() -> u8 {
    2
}

impl Block {
    fn plain_text(&self) -> String {
        match self {
            Block::Paragraph { children }
            | Block::Heading { children, .. }
            | Block::Quote { children }
            | Block::Code { children, .. } => inline_text(children),
            Block::List(list) => list.plain_text(),
            Block::Image { .. } | Block::Unknown => String::new(),
        }
    }
}

/// List numbering. Formats other than `ordered` (including ones added to the
/// editor later) render as a bulleted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum ListFormat {
    Ordered,
    #[default]
    Unordered,
}

impl From<Option<String>> for ListFormat {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("ordered") => ListFormat::Ordered,
            _ => ListFormat::Unordered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListBlock {
    #[serde(default)]
    pub format: ListFormat,
    #[serde(default)]
    pub children: Vec<ListNode>,
}

impl ListBlock {
    fn plain_text(&self) -> String {
        let parts: Vec<String> = self
            .children
            .iter()
            .map(|node| match node {
                ListNode::ListItem { children } => inline_text(children),
                ListNode::List(nested) => nested.plain_text(),
                ListNode::Unknown => String::new(),
            })
            .filter(|t| !t.is_empty())
            .collect();
        parts.join(" ")
    }
}

/// Children of a list: items, or a nested list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ListNode {
    ListItem {
        #[serde(default)]
        children: Vec<Inline>,
    },
    List(ListBlock),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Inline {
    Text(TextRun),
    Link {
        #[serde(default)]
        url: String,
        #[serde(default)]
        children: Vec<TextRun>,
    },
    #[serde(other)]
    Unknown,
}

/// A run of text with independent style flags; any combination may be set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub code: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }
}

fn inline_text(children: &[Inline]) -> String {
    children
        .iter()
        .map(|c| match c {
            Inline::Text(run) => run.text.clone(),
            Inline::Link { children, .. } => {
                children.iter().map(|r| r.text.as_str()).collect::<String>()
            }
            Inline::Unknown => String::new(),
        })
        .collect()
}
