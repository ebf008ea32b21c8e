//! Reusable nested structures attached to services and projects.
//!
//! `*Attributes` types mirror the stored component; the plain types are what
//! pages consume, with every missing field already defaulted.

use serde::Deserialize;

use crate::media::{first_image, Image, MediaAttributes};
use crate::strapi::{Entry, Relation};

fn text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn optional_text(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Trimmed value, or `default` when missing or blank.
pub(crate) fn or_default(value: Option<String>, default: &str) -> String {
    optional_text(value).unwrap_or_else(|| default.to_string())
}

/// Components arrive as a bare array, or as `null` when never filled in.
pub fn components<A, T>(items: Option<Vec<A>>) -> Vec<T>
where
    T: From<A>,
{
    items.unwrap_or_default().into_iter().map(T::from).collect()
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CharacteristicAttributes {
    #[serde(rename = "Titre")]
    pub titre: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Icone")]
    pub icone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Characteristic {
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl From<CharacteristicAttributes> for Characteristic {
    fn from(a: CharacteristicAttributes) -> Self {
        Self {
            title: text(a.titre),
            description: text(a.description),
            icon: optional_text(a.icone).unwrap_or_else(|| "check".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProcessStepAttributes {
    #[serde(rename = "Numero")]
    pub numero: Option<u32>,
    #[serde(rename = "Titre")]
    pub titre: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStep {
    pub number: u32,
    pub title: String,
    pub description: String,
}

impl ProcessStep {
    /// Steps without an explicit number take their 1-based position.
    pub fn numbered(steps: Option<Vec<ProcessStepAttributes>>) -> Vec<ProcessStep> {
        steps
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, a)| ProcessStep {
                number: a.numero.unwrap_or(i as u32 + 1),
                title: text(a.titre),
                description: text(a.description),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FaqItemAttributes {
    #[serde(rename = "Question")]
    pub question: Option<String>,
    #[serde(rename = "Reponse")]
    pub reponse: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl From<FaqItemAttributes> for FaqItem {
    fn from(a: FaqItemAttributes) -> Self {
        Self { question: text(a.question), answer: text(a.reponse) }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TagAttributes {
    pub nom: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
}

impl From<TagAttributes> for Tag {
    fn from(a: TagAttributes) -> Self {
        Self { name: text(a.nom) }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TechnologyAttributes {
    pub nom: Option<String>,
    #[serde(rename = "Icone")]
    pub icone: Option<String>,
    #[serde(rename = "Couleur")]
    pub couleur: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Technology {
    pub id: u64,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl Technology {
    pub fn named(name: impl Into<String>) -> Self {
        Self { id: 0, name: name.into(), icon: None, color: None }
    }
}

impl From<Entry<TechnologyAttributes>> for Technology {
    fn from(Entry { id, attributes: a }: Entry<TechnologyAttributes>) -> Self {
        Self {
            id,
            name: text(a.nom),
            icon: optional_text(a.icone),
            color: optional_text(a.couleur),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TypeServiceAttributes {
    #[serde(rename = "Titre")]
    pub titre: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeService {
    pub title: String,
    pub description: String,
}

impl From<TypeServiceAttributes> for TypeService {
    fn from(a: TypeServiceAttributes) -> Self {
        Self { title: text(a.titre), description: text(a.description) }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAttributes {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub meta_image: Option<Relation<MediaAttributes>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub image: Option<Image>,
}

impl From<SeoAttributes> for Seo {
    fn from(a: SeoAttributes) -> Self {
        Self {
            title: optional_text(a.meta_title),
            description: optional_text(a.meta_description),
            keywords: optional_text(a.keywords),
            image: first_image(a.meta_image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_values_take_the_default() {
        assert_eq!(or_default(None, "x"), "x");
        assert_eq!(or_default(Some("   ".into()), "x"), "x");
        assert_eq!(or_default(Some(" Web ".into()), "x"), "Web");
    }

    #[test]
    fn steps_fall_back_to_position() {
        let raw: Vec<ProcessStepAttributes> = serde_json::from_value(json!([
            { "id": 1, "Titre": "Audit" },
            { "id": 2, "Numero": 5, "Titre": "Design", "Description": null },
            { "id": 3 }
        ]))
        .unwrap();
        let steps = ProcessStep::numbered(Some(raw));
        let numbers: Vec<u32> = steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 5, 3]);
        assert_eq!(steps[1].description, "");
    }

    #[test]
    fn null_component_list_is_empty() {
        let faq: Vec<FaqItem> = components::<FaqItemAttributes, FaqItem>(None);
        assert!(faq.is_empty());
    }

    #[test]
    fn seo_blank_strings_are_absent() {
        let a: SeoAttributes = serde_json::from_value(json!({
            "metaTitle": "  ",
            "metaDescription": "Agence web à Lyon",
            "metaImage": { "data": null }
        }))
        .unwrap();
        let seo = Seo::from(a);
        assert_eq!(seo.title, None);
        assert_eq!(seo.description.as_deref(), Some("Agence web à Lyon"));
        assert!(seo.image.is_none());
    }

    #[test]
    fn technology_keeps_cms_id() {
        let e: Entry<TechnologyAttributes> =
            serde_json::from_value(json!({ "id": 4, "attributes": { "nom": " Rust " } })).unwrap();
        let t = Technology::from(e);
        assert_eq!(t.id, 4);
        assert_eq!(t.name, "Rust");
        assert_eq!(t.icon, None);
    }
}
