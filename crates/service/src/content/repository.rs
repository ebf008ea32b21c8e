use async_trait::async_trait;
use models::strapi::Entry;
use models::{Project, ProjectAttributes, Service, ServiceAttributes, Slug};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::client::CmsClient;
use super::query::ContentQuery;

pub const SERVICES: &str = "services";
pub const PROJECTS: &str = "projets";

/// Largest page the Content Store serves; lists on this site stay well below it.
const LIST_PAGE_SIZE: u32 = 100;

/// Read access to site content, as pages need it.
///
/// Lookups never fail: when the store is unreachable or answers garbage the
/// implementation logs it and returns an empty list or `None`, so a page only
/// has to decide how to render "absent".
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn services(&self) -> Vec<Service>;
    async fn service_by_slug(&self, slug: &str) -> Option<Service>;
    async fn projects(&self) -> Vec<Project>;
    async fn project_by_slug(&self, slug: &str) -> Option<Project>;
}

/// [`ContentRepository`] backed by the Content Store's REST API.
#[derive(Clone)]
pub struct CmsContentRepository {
    client: CmsClient,
}

impl CmsContentRepository {
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    pub fn services_query() -> ContentQuery {
        ContentQuery::new(SERVICES)
            .populate(["technologies", "SEO"])
            .sort("Titre:asc")
            .page_size(LIST_PAGE_SIZE)
    }

    pub fn service_query(slug: &Slug) -> ContentQuery {
        ContentQuery::new(SERVICES)
            .slug(slug.as_str())
            .populate([
                "TypesService",
                "Caracteristiques",
                "Etapes",
                "technologies",
                "FAQ",
                "projets",
                "SEO",
            ])
            .page_size(1)
    }

    pub fn projects_query() -> ContentQuery {
        ContentQuery::new(PROJECTS)
            .populate(["ImagePrincipale", "technologies"])
            .sort("DateRealisation:desc")
            .page_size(LIST_PAGE_SIZE)
    }

    pub fn project_query(slug: &Slug) -> ContentQuery {
        ContentQuery::new(PROJECTS)
            .slug(slug.as_str())
            .populate(["ImagePrincipale", "Images", "technologies", "Fonctionnalites", "Tags", "SEO"])
            .page_size(1)
    }

    async fn fetch_all<A, R>(&self, query: ContentQuery) -> Vec<R>
    where
        A: DeserializeOwned + Send,
        R: From<Entry<A>>,
    {
        match self.client.fetch_entries::<A>(&query).await {
            Ok(entries) => entries.into_iter().map(R::from).collect(),
            Err(e) => {
                warn!(
                    collection = query.collection(),
                    kind = e.kind(),
                    error = %e,
                    "content fetch failed; rendering without it"
                );
                Vec::new()
            }
        }
    }
}

fn parse_slug(raw: &str) -> Option<Slug> {
    match Slug::parse(raw) {
        Ok(slug) => Some(slug),
        Err(e) => {
            debug!(slug = raw, error = %e, "rejecting slug without querying the store");
            None
        }
    }
}

#[async_trait]
impl ContentRepository for CmsContentRepository {
    #[instrument(skip(self))]
    async fn services(&self) -> Vec<Service> {
        self.fetch_all::<ServiceAttributes, Service>(Self::services_query()).await
    }

    #[instrument(skip(self))]
    async fn service_by_slug(&self, slug: &str) -> Option<Service> {
        let slug = parse_slug(slug)?;
        self.fetch_all::<ServiceAttributes, Service>(Self::service_query(&slug))
            .await
            .into_iter()
            .next()
    }

    #[instrument(skip(self))]
    async fn projects(&self) -> Vec<Project> {
        self.fetch_all::<ProjectAttributes, Project>(Self::projects_query()).await
    }

    #[instrument(skip(self))]
    async fn project_by_slug(&self, slug: &str) -> Option<Project> {
        let slug = parse_slug(slug)?;
        self.fetch_all::<ProjectAttributes, Project>(Self::project_query(&slug))
            .await
            .into_iter()
            .next()
    }
}

/// Simple in-memory repository for tests and offline previews
pub mod mock {
    use super::*;

    #[derive(Default, Clone)]
    pub struct InMemoryContentRepository {
        services: Vec<Service>,
        projects: Vec<Project>,
    }

    impl InMemoryContentRepository {
        pub fn new(services: Vec<Service>, projects: Vec<Project>) -> Self {
            Self { services, projects }
        }
    }

    /// # Examples
    /// ```
    /// use service::content::{mock::InMemoryContentRepository, ContentRepository};
    /// use models::Project;
    /// let repo = InMemoryContentRepository::new(vec![], vec![Project { slug: "site".into(), ..Project::default() }]);
    /// let found = tokio_test::block_on(repo.project_by_slug("site"));
    /// assert!(found.is_some());
    /// assert!(tokio_test::block_on(repo.project_by_slug("absent")).is_none());
    /// ```
    #[async_trait]
    impl ContentRepository for InMemoryContentRepository {
        async fn services(&self) -> Vec<Service> {
            self.services.clone()
        }

        async fn service_by_slug(&self, slug: &str) -> Option<Service> {
            self.services.iter().find(|s| s.slug == slug).cloned()
        }

        async fn projects(&self) -> Vec<Project> {
            self.projects.clone()
        }

        async fn project_by_slug(&self, slug: &str) -> Option<Project> {
            self.projects.iter().find(|p| p.slug == slug).cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_queries_filter_on_slug_and_populate_relations() {
        let slug = Slug::parse("developpement-web").unwrap();
        let pairs = CmsContentRepository::service_query(&slug).to_pairs();
        assert!(pairs.contains(&("filters[slug][$eq]".into(), "developpement-web".into())));
        assert!(pairs.contains(&("populate[FAQ]".into(), "true".into())));
        assert!(pairs.contains(&("populate[projets]".into(), "true".into())));

        let pairs = CmsContentRepository::project_query(&Slug::parse("boutique").unwrap()).to_pairs();
        assert!(pairs.contains(&("populate[Images]".into(), "true".into())));
    }

    #[test]
    fn list_queries_are_sorted_and_not_filtered() {
        let pairs = CmsContentRepository::projects_query().to_pairs();
        assert!(pairs.iter().all(|(k, _)| !k.starts_with("filters")));
        assert!(pairs.contains(&("sort[0]".into(), "DateRealisation:desc".into())));
        assert!(pairs.contains(&("pagination[pageSize]".into(), "100".into())));
    }

    #[test]
    fn unsafe_slugs_never_reach_the_store() {
        assert!(parse_slug("../admin").is_none());
        assert!(parse_slug("").is_none());
        assert!(parse_slug("ok-slug").is_some());
    }
}
