use serde::Deserialize;

use crate::components::{
    components, or_default, Characteristic, CharacteristicAttributes, FaqItem, FaqItemAttributes, ProcessStep,
    ProcessStepAttributes, Seo, SeoAttributes, Technology, TechnologyAttributes, TypeService,
    TypeServiceAttributes,
};
use crate::project::{Project, ProjectAttributes};
use crate::richtext::RichText;
use crate::strapi::{normalize_relation, Entry, Relation};

pub const DEFAULT_SERVICE_TITLE: &str = "Service sans titre";
pub const DEFAULT_SERVICE_ICON: &str = "code";
pub const DEFAULT_SERVICE_COLOR: &str = "primary";

/// Service attributes exactly as stored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ServiceAttributes {
    #[serde(rename = "Titre")]
    pub titre: Option<String>,
    pub slug: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<RichText>,
    #[serde(rename = "Icone")]
    pub icone: Option<String>,
    #[serde(rename = "Couleur")]
    pub couleur: Option<String>,
    #[serde(rename = "TypesService")]
    pub types_service: Option<Vec<TypeServiceAttributes>>,
    #[serde(rename = "Caracteristiques")]
    pub caracteristiques: Option<Vec<CharacteristicAttributes>>,
    #[serde(rename = "Etapes")]
    pub etapes: Option<Vec<ProcessStepAttributes>>,
    pub technologies: Option<Relation<TechnologyAttributes>>,
    #[serde(rename = "FAQ")]
    pub faq: Option<Vec<FaqItemAttributes>>,
    pub projets: Option<Relation<ProjectAttributes>>,
    #[serde(rename = "SEO")]
    pub seo: Option<SeoAttributes>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub description: RichText,
    pub icon: String,
    pub color: String,
    pub service_types: Vec<TypeService>,
    pub characteristics: Vec<Characteristic>,
    pub steps: Vec<ProcessStep>,
    pub technologies: Vec<Technology>,
    pub faq: Vec<FaqItem>,
    pub projects: Vec<Project>,
    pub seo: Option<Seo>,
}

impl From<Entry<ServiceAttributes>> for Service {
    fn from(Entry { id, attributes: a }: Entry<ServiceAttributes>) -> Self {
        Self {
            id,
            title: or_default(a.titre, DEFAULT_SERVICE_TITLE),
            slug: a.slug.map(|s| s.trim().to_string()).unwrap_or_default(),
            description: a.description.unwrap_or_default(),
            icon: or_default(a.icone, DEFAULT_SERVICE_ICON),
            color: or_default(a.couleur, DEFAULT_SERVICE_COLOR),
            service_types: components(a.types_service),
            characteristics: components(a.caracteristiques),
            steps: ProcessStep::numbered(a.etapes),
            technologies: normalize_relation(a.technologies),
            faq: components(a.faq),
            projects: normalize_relation(a.projets),
            seo: a.seo.map(Seo::from),
        }
    }
}

impl Default for Service {
    fn default() -> Self {
        Entry { id: 0, attributes: ServiceAttributes::default() }.into()
    }
}
