use serde::Deserialize;

use crate::strapi::{Entry, Relation};

/// Attributes of an uploaded file as the Content Store returns them.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttributes {
    pub url: Option<String>,
    pub alternative_text: Option<String>,
    pub caption: Option<String>,
    pub name: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// A displayable image. `url` is exactly what the store sent; use
/// [`resolve_media_url`] to make relative upload paths absolute.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub url: String,
    pub alt: String,
    pub caption: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Image {
    fn from_attributes(attrs: MediaAttributes) -> Option<Self> {
        let url = attrs.url.filter(|u| !u.trim().is_empty())?;
        let alt = attrs
            .alternative_text
            .filter(|a| !a.trim().is_empty())
            .or(attrs.name)
            .unwrap_or_default();
        Some(Self {
            url,
            alt,
            caption: attrs.caption.filter(|c| !c.trim().is_empty()),
            width: attrs.width,
            height: attrs.height,
        })
    }
}

/// Images of a media field, always as a list; files without a URL are skipped.
pub fn images(rel: Option<Relation<MediaAttributes>>) -> Vec<Image> {
    rel.map(Relation::into_entries)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|Entry { attributes, .. }| Image::from_attributes(attributes))
        .collect()
}

/// First image of a media field, for single-image fields.
pub fn first_image(rel: Option<Relation<MediaAttributes>>) -> Option<Image> {
    images(rel).into_iter().next()
}

/// Prefix relative upload paths with the Content Store's base URL.
pub fn resolve_media_url(base: &str, url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || url.starts_with("//") {
        return url.to_string();
    }
    let base = base.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{base}{url}")
    } else {
        format!("{base}/{url}")
    }
}
