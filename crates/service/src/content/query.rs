//! Query-string builder for the Content Store's REST filters.

/// What to ask the Content Store for: one collection, optionally narrowed to a
/// slug, with the relations to populate inline.
///
/// # Examples
/// ```
/// use service::content::ContentQuery;
/// let q = ContentQuery::new("projets").slug("boutique").populate(["Images"]);
/// let pairs = q.to_pairs();
/// assert!(pairs.contains(&("filters[slug][$eq]".to_string(), "boutique".to_string())));
/// assert!(pairs.contains(&("populate[Images]".to_string(), "true".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    collection: String,
    slug: Option<String>,
    populate: Vec<String>,
    sort: Vec<String>,
    page_size: Option<u32>,
    locale: Option<String>,
}

impl ContentQuery {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            slug: None,
            populate: Vec::new(),
            sort: Vec::new(),
            page_size: None,
            locale: None,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn populate<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for rel in relations {
            let rel = rel.into();
            if !self.populate.contains(&rel) {
                self.populate.push(rel);
            }
        }
        self
    }

    /// `field:asc` or `field:desc`; applied in the order given.
    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort.push(field.into());
        self
    }

    /// Clamped to 1..=100, the Content Store's accepted range.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size.clamp(1, 100));
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn has_locale(&self) -> bool {
        self.locale.is_some()
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(slug) = &self.slug {
            pairs.push(("filters[slug][$eq]".to_string(), slug.clone()));
        }
        for rel in &self.populate {
            pairs.push((format!("populate[{rel}]"), "true".to_string()));
        }
        for (i, field) in self.sort.iter().enumerate() {
            pairs.push((format!("sort[{i}]"), field.clone()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("pagination[pageSize]".to_string(), size.to_string()));
        }
        if let Some(locale) = &self.locale {
            pairs.push(("locale".to_string(), locale.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_query_has_no_pairs() {
        assert!(ContentQuery::new("services").to_pairs().is_empty());
    }

    #[test]
    fn builds_every_directive_in_order() {
        let q = ContentQuery::new("services")
            .slug("seo")
            .populate(["technologies", "FAQ", "technologies"])
            .sort("Titre:asc")
            .sort("id:desc")
            .page_size(500)
            .locale("fr");
        assert_eq!(
            q.to_pairs(),
            vec![
                ("filters[slug][$eq]".to_string(), "seo".to_string()),
                ("populate[technologies]".to_string(), "true".to_string()),
                ("populate[FAQ]".to_string(), "true".to_string()),
                ("sort[0]".to_string(), "Titre:asc".to_string()),
                ("sort[1]".to_string(), "id:desc".to_string()),
                ("pagination[pageSize]".to_string(), "100".to_string()),
                ("locale".to_string(), "fr".to_string()),
            ]
        );
        assert_eq!(q.collection(), "services");
    }
}
