use std::time::Duration;

use configs::CmsConfig;
use models::strapi::{Entry, Envelope};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::query::ContentQuery;
use crate::errors::ContentError;
use crate::metrics;

/// HTTP client for the Content Store's REST API.
///
/// Cheap to clone; the underlying connection pool is shared. Every request is
/// bounded by the configured timeout and carries a `timestamp` parameter so
/// no intermediate cache answers for the store.
#[derive(Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    base_url: String,
    locale: Option<String>,
}

impl CmsClient {
    pub fn new(cfg: &CmsConfig) -> Result<Self, ContentError> {
        Self::with_timeout(cfg, Duration::from_secs(cfg.timeout_secs))
    }

    /// Build with an explicit timeout instead of `cfg.timeout_secs`.
    pub fn with_timeout(cfg: &CmsConfig, timeout: Duration) -> Result<Self, ContentError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &cfg.api_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ContentError::Config(format!("api token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ContentError::Config(e.to_string()))?;
        Ok(Self {
            http,
            base_url: cfg.api_url.trim_end_matches('/').to_string(),
            locale: cfg.locale.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and unwrap the entries matching `query`.
    ///
    /// Failures are returned typed and counted; deciding that a failure means
    /// "nothing to show" is left to the repository.
    #[instrument(skip(self, query), fields(collection = %query.collection()))]
    pub async fn fetch_entries<T>(&self, query: &ContentQuery) -> Result<Vec<Entry<T>>, ContentError>
    where
        T: DeserializeOwned + Send,
    {
        let collection = query.collection().to_string();
        metrics::CONTENT_REQUESTS_TOTAL.with_label_values(&[collection.as_str()]).inc();
        let timer = metrics::CONTENT_REQUEST_DURATION.start_timer();

        let result = self.send::<T>(query).await;
        timer.observe_duration();

        match &result {
            Ok(entries) => debug!(count = entries.len(), "content fetched"),
            Err(e) => {
                metrics::CONTENT_FAILURES_TOTAL
                    .with_label_values(&[collection.as_str(), e.kind()])
                    .inc();
            }
        }
        result
    }

    async fn send<T>(&self, query: &ContentQuery) -> Result<Vec<Entry<T>>, ContentError>
    where
        T: DeserializeOwned + Send,
    {
        let url = format!("{}/api/{}", self.base_url, query.collection());

        let mut pairs = query.to_pairs();
        if let (Some(locale), false) = (&self.locale, query.has_locale()) {
            pairs.push(("locale".to_string(), locale.clone()));
        }
        pairs.push(("timestamp".to_string(), chrono::Utc::now().timestamp_millis().to_string()));

        let resp = self
            .http
            .get(&url)
            .query(&pairs)
            .send()
            .await
            .map_err(ContentError::from_reqwest)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                collection: query.collection().to_string(),
            });
        }

        let body = resp.bytes().await.map_err(ContentError::from_reqwest)?;
        let envelope: Envelope =
            serde_json::from_slice(&body).map_err(|e| ContentError::Decode(e.to_string()))?;
        let (entries, errors) = envelope.decode_entries::<T>();
        for e in &errors {
            warn!(collection = query.collection(), error = %e, "skipping entry that failed to decode");
        }
        if !errors.is_empty() {
            metrics::CONTENT_FAILURES_TOTAL
                .with_label_values(&[query.collection(), "entry"])
                .inc_by(errors.len() as u64);
        }
        Ok(entries)
    }
}
