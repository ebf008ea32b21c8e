//! Rich text → HTML.
//!
//! One function per block kind. `Unknown` blocks and inline nodes render as
//! nothing. Inline styles nest in a fixed order, outermost first:
//! `s`, `u`, `em`, `strong`, `code`.

use maud::{html, Markup};
use models::media::MediaAttributes;
use models::{Block, Inline, ListBlock, ListFormat, ListNode, RichText, TextRun};

pub struct RichTextRenderer<'a> {
    media_base: &'a str,
}

impl<'a> RichTextRenderer<'a> {
    pub fn new(media_base: &'a str) -> Self {
        Self { media_base }
    }

    pub fn render(&self, doc: &RichText) -> Markup {
        match doc {
            RichText::Blocks(blocks) => html! {
                @for block in blocks { (self.block(block)) }
            },
            RichText::Plain(text) => plain(text),
        }
    }

    fn block(&self, block: &Block) -> Markup {
        match block {
            Block::Paragraph { children } => paragraph(children),
            Block::Heading { level, children } => heading(*level, children),
            Block::List(list) => list_block(list),
            Block::Quote { children } => quote(children),
            Block::Code { language, children } => code(language.as_deref(), children),
            Block::Image { image } => self.image(image.as_ref()),
            Block::Unknown => html! {},
        }
    }

    fn image(&self, image: Option<&MediaAttributes>) -> Markup {
        let Some(img) = image else { return html! {} };
        let Some(url) = img.url.as_deref().filter(|u| !u.trim().is_empty()) else {
            return html! {};
        };
        let src = models::media::resolve_media_url(self.media_base, url);
        let alt = img.alternative_text.as_deref().unwrap_or_default();
        html! {
            figure.rt-image {
                img src=(src) alt=(alt) width=[img.width] height=[img.height] loading="lazy";
                @if let Some(caption) = img.caption.as_deref().filter(|c| !c.trim().is_empty()) {
                    figcaption { (caption) }
                }
            }
        }
    }
}

fn is_blank(children: &[Inline]) -> bool {
    children.iter().all(|c| match c {
        Inline::Text(run) => run.text.is_empty(),
        Inline::Link { children, .. } => children.iter().all(|r| r.text.is_empty()),
        Inline::Unknown => true,
    })
}

fn paragraph(children: &[Inline]) -> Markup {
    if is_blank(children) {
        return html! {};
    }
    html! { p { (inlines(children)) } }
}

fn heading(level: u8, children: &[Inline]) -> Markup {
    let content = inlines(children);
    match level.clamp(1, 6) {
        1 => html! { h1 { (content) } },
        2 => html! { h2 { (content) } },
        3 => html! { h3 { (content) } },
        4 => html! { h4 { (content) } },
        5 => html! { h5 { (content) } },
        _ => html! { h6 { (content) } },
    }
}

fn list_block(list: &ListBlock) -> Markup {
    let items = html! {
        @for node in &list.children {
            @match node {
                ListNode::ListItem { children } => li { (inlines(children)) },
                ListNode::List(nested) => li { (list_block(nested)) },
                ListNode::Unknown => {},
            }
        }
    };
    match list.format {
        ListFormat::Ordered => html! { ol { (items) } },
        ListFormat::Unordered => html! { ul { (items) } },
    }
}

fn quote(children: &[Inline]) -> Markup {
    html! { blockquote { (inlines(children)) } }
}

fn code(language: Option<&str>, children: &[Inline]) -> Markup {
    let text: String = children
        .iter()
        .map(|c| match c {
            Inline::Text(run) => run.text.as_str(),
            _ => "",
        })
        .collect();
    let class = language.map(|l| format!("language-{}", l.trim()));
    html! { pre { code class=[class] { (text) } } }
}

fn inlines(children: &[Inline]) -> Markup {
    html! {
        @for child in children {
            @match child {
                Inline::Text(run) => (text_run(run)),
                Inline::Link { url, children } => (link(url, children)),
                Inline::Unknown => {},
            }
        }
    }
}

/// Only web and mail links are emitted; anything else keeps its text unlinked.
fn safe_href(url: &str) -> Option<&str> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    let allowed = ["http://", "https://", "mailto:", "tel:", "/", "#"]
        .iter()
        .any(|p| lower.starts_with(p));
    allowed.then_some(url)
}

fn link(url: &str, children: &[TextRun]) -> Markup {
    let runs = html! { @for run in children { (text_run(run)) } };
    match safe_href(url) {
        Some(href) => {
            let external = href.starts_with("http://") || href.starts_with("https://");
            html! {
                a href=(href)
                    target=[external.then_some("_blank")]
                    rel=[external.then_some("noopener noreferrer")] { (runs) }
            }
        }
        None => runs,
    }
}

fn with_breaks(text: &str) -> Markup {
    html! {
        @for (i, line) in text.split('\n').enumerate() {
            @if i > 0 { br; }
            (line)
        }
    }
}

fn text_run(run: &TextRun) -> Markup {
    if run.text.is_empty() {
        return html! {};
    }
    let mut out = with_breaks(&run.text);
    if run.code {
        out = html! { code { (out) } };
    }
    if run.bold {
        out = html! { strong { (out) } };
    }
    if run.italic {
        out = html! { em { (out) } };
    }
    if run.underline {
        out = html! { u { (out) } };
    }
    if run.strikethrough {
        out = html! { s { (out) } };
    }
    out
}

/// Legacy plain-text fields: blank lines separate paragraphs.
fn plain(text: &str) -> Markup {
    html! {
        @for chunk in text.split("\n\n").map(str::trim).filter(|c| !c.is_empty()) {
            p { (with_breaks(chunk)) }
        }
    }
}
