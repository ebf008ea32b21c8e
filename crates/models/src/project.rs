use chrono::NaiveDate;
use serde::Deserialize;

use crate::components::{
    components, or_default, Characteristic, CharacteristicAttributes, Seo, SeoAttributes, Tag, TagAttributes,
    Technology, TechnologyAttributes,
};
use crate::media::{first_image, images, Image, MediaAttributes};
use crate::richtext::RichText;
use crate::strapi::{normalize_relation, Entry, Relation};

pub const DEFAULT_PROJECT_TITLE: &str = "Projet sans titre";
pub const DEFAULT_CATEGORY: &str = "Non catégorisé";
pub const DEFAULT_CLIENT: &str = "Client confidentiel";

/// Project attributes exactly as stored; every field may be missing or null.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProjectAttributes {
    #[serde(rename = "Titre")]
    pub titre: Option<String>,
    pub slug: Option<String>,
    #[serde(rename = "Resume")]
    pub resume: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<RichText>,
    #[serde(rename = "Categorie")]
    pub categorie: Option<String>,
    #[serde(rename = "Client")]
    pub client: Option<String>,
    #[serde(rename = "DateRealisation")]
    pub date_realisation: Option<String>,
    #[serde(rename = "ImagePrincipale")]
    pub image_principale: Option<Relation<MediaAttributes>>,
    #[serde(rename = "Images")]
    pub images: Option<Relation<MediaAttributes>>,
    pub technologies: Option<Relation<TechnologyAttributes>>,
    #[serde(rename = "Fonctionnalites")]
    pub fonctionnalites: Option<Vec<CharacteristicAttributes>>,
    #[serde(rename = "Tags")]
    pub tags: Option<Vec<TagAttributes>>,
    #[serde(rename = "SEO")]
    pub seo: Option<SeoAttributes>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub description: RichText,
    /// Free text as entered; may hold several comma-separated categories.
    pub category: String,
    pub client: String,
    pub completed_on: Option<NaiveDate>,
    pub image: Option<Image>,
    pub images: Vec<Image>,
    pub technologies: Vec<Technology>,
    pub features: Vec<Characteristic>,
    pub tags: Vec<Tag>,
    pub seo: Option<Seo>,
}

impl Project {
    /// Individual categories: the raw value split on commas, trimmed, blanks dropped.
    pub fn categories(&self) -> Vec<String> {
        split_categories(&self.category)
    }

    pub fn has_category(&self, wanted: &str) -> bool {
        let wanted = wanted.trim().to_lowercase();
        self.categories().iter().any(|c| c.to_lowercase() == wanted)
    }
}

pub fn split_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts `YYYY-MM-DD` as well as full timestamps; anything else is dropped.
fn parse_date(raw: Option<String>) -> Option<NaiveDate> {
    let raw = raw?;
    let day = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

impl From<Entry<ProjectAttributes>> for Project {
    fn from(Entry { id, attributes: a }: Entry<ProjectAttributes>) -> Self {
        Self {
            id,
            title: or_default(a.titre, DEFAULT_PROJECT_TITLE),
            slug: a.slug.map(|s| s.trim().to_string()).unwrap_or_default(),
            summary: a.resume.map(|s| s.trim().to_string()).unwrap_or_default(),
            description: a.description.unwrap_or_default(),
            category: or_default(a.categorie, DEFAULT_CATEGORY),
            client: or_default(a.client, DEFAULT_CLIENT),
            completed_on: parse_date(a.date_realisation),
            image: first_image(a.image_principale),
            images: images(a.images),
            technologies: normalize_relation(a.technologies),
            features: components(a.fonctionnalites),
            tags: components(a.tags),
            seo: a.seo.map(Seo::from),
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Entry { id: 0, attributes: ProjectAttributes::default() }.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(v: serde_json::Value) -> Project {
        let entry: Entry<ProjectAttributes> = serde_json::from_value(v).unwrap();
        entry.into()
    }

    #[test]
    fn missing_fields_take_documented_defaults() {
        let p = decode(json!({ "id": 3, "attributes": { "slug": "vitrine", "Categorie": null } }));
        assert_eq!(p.id, 3);
        assert_eq!(p.title, DEFAULT_PROJECT_TITLE);
        assert_eq!(p.category, "Non catégorisé");
        assert_eq!(p.client, DEFAULT_CLIENT);
        assert!(p.images.is_empty());
        assert!(p.technologies.is_empty());
        assert!(p.features.is_empty());
        assert!(p.image.is_none());
        assert!(p.seo.is_none());
        assert!(p.description.is_empty());
    }

    #[test]
    fn full_project_normalizes_relations() {
        let p = decode(json!({ "id": 1, "attributes": {
            "Titre": "Boutique en ligne",
            "slug": "boutique",
            "Resume": "E-commerce sur mesure",
            "Categorie": "Web, E-commerce",
            "Client": "Maison Dupont",
            "DateRealisation": "2024-03-15",
            "ImagePrincipale": { "data": { "id": 9, "attributes": { "url": "/uploads/main.jpg" } } },
            "Images": { "data": { "id": 10, "attributes": { "url": "/uploads/one.jpg" } } },
            "technologies": { "data": [
                { "id": 1, "attributes": { "nom": "React" } },
                { "id": 2, "attributes": { "nom": "Node.js" } }
            ]},
            "Fonctionnalites": [{ "id": 1, "Titre": "Paiement" }],
            "Tags": [{ "id": 1, "nom": "shop" }],
            "SEO": { "metaTitle": "Boutique" }
        }}));
        assert_eq!(p.title, "Boutique en ligne");
        assert_eq!(p.completed_on, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(p.image.as_ref().map(|i| i.url.as_str()), Some("/uploads/main.jpg"));
        assert_eq!(p.images.len(), 1);
        assert_eq!(p.technologies.len(), 2);
        assert_eq!(p.features[0].title, "Paiement");
        assert_eq!(p.tags[0].name, "shop");
        assert_eq!(p.categories(), vec!["Web".to_string(), "E-commerce".to_string()]);
        assert!(p.has_category("e-commerce"));
        assert!(!p.has_category("Mobile"));
    }

    #[test]
    fn timestamps_and_garbage_dates() {
        assert_eq!(
            parse_date(Some("2023-11-02T10:00:00.000Z".into())),
            NaiveDate::from_ymd_opt(2023, 11, 2)
        );
        assert_eq!(parse_date(Some("bientôt".into())), None);
        assert_eq!(parse_date(Some("".into())), None);
    }

    #[test]
    fn default_project_matches_empty_entry() {
        let p = Project::default();
        assert_eq!(p.title, DEFAULT_PROJECT_TITLE);
        assert_eq!(p.category, DEFAULT_CATEGORY);
    }
}
