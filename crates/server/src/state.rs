use std::sync::Arc;

use configs::AppConfig;
use models::media::resolve_media_url;
use service::contact::ContactService;
use service::content::ContentRepository;

/// Site-wide values every page needs.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub name: String,
    /// Public origin of this site, for canonical links and the sitemap.
    pub base_url: String,
    /// Origin of the Content Store; relative upload URLs are resolved against it.
    pub media_base: String,
    pub contact_email: String,
}

impl SiteContext {
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            name: cfg.site.name.clone(),
            base_url: cfg.site.base_url.trim_end_matches('/').to_string(),
            media_base: cfg.cms.api_url.trim_end_matches('/').to_string(),
            contact_email: cfg.site.contact_email.clone(),
        }
    }

    pub fn media_url(&self, url: &str) -> String {
        resolve_media_url(&self.media_base, url)
    }

    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentRepository>,
    pub contact: ContactService,
    pub site: Arc<SiteContext>,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentRepository>, site: SiteContext) -> Self {
        Self { content, contact: ContactService::new(), site: Arc::new(site) }
    }
}
