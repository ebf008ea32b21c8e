use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cms: CmsConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Where the Content Store lives and how long we wait for it.
#[derive(Debug, Clone, Deserialize)]
pub struct CmsConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub locale: Option<String>,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
            timeout_secs: default_timeout_secs(),
            locale: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
            public_dir: default_public_dir(),
            contact_email: default_contact_email(),
        }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 3000 }
fn default_api_url() -> String { "http://localhost:1337".into() }
fn default_timeout_secs() -> u64 { 10 }
fn default_site_name() -> String { "Agence".into() }
fn default_base_url() -> String { "http://localhost:3000".into() }
fn default_public_dir() -> String { "public".into() }
fn default_contact_email() -> String { "contact@example.com".into() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), falling back to defaults when
    /// the file is absent, then apply environment overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_not_found(&e) => AppConfig::default(),
            Err(e) => return Err(e),
        };
        cfg.apply_env(|key| std::env::var(key).ok());
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Overlay values from the environment. `lookup` is injected so tests do
    /// not have to mutate the process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Some(url) = lookup("CMS_API_URL") {
            self.cms.api_url = url;
        }
        if let Some(token) = lookup("CMS_API_TOKEN") {
            self.cms.api_token = Some(token);
        }
        if let Some(secs) = lookup("CMS_TIMEOUT_SECS").and_then(|v| v.parse::<u64>().ok()) {
            self.cms.timeout_secs = secs;
        }
        if let Some(locale) = lookup("CMS_LOCALE") {
            self.cms.locale = Some(locale);
        }
        if let Some(name) = lookup("SITE_NAME") {
            self.site.name = name;
        }
        if let Some(url) = lookup("SITE_BASE_URL") {
            self.site.base_url = url;
        }
        if let Some(dir) = lookup("SITE_PUBLIC_DIR") {
            self.site.public_dir = dir;
        }
        if let Some(email) = lookup("SITE_CONTACT_EMAIL") {
            self.site.contact_email = email;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.cms.normalize_and_validate()?;
        self.site.normalize_and_validate()?;
        Ok(())
    }
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

fn normalize_http_url(field: &str, url: &mut String) -> Result<()> {
    let trimmed = url.trim().trim_end_matches('/').to_string();
    let lower = trimmed.to_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return Err(anyhow!("{field} must start with http:// or https:// (got {trimmed:?})"));
    }
    *url = trimmed;
    Ok(())
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }
}

impl CmsConfig {
    fn normalize_and_validate(&mut self) -> Result<()> {
        normalize_http_url("cms.api_url", &mut self.api_url)?;
        if self.timeout_secs == 0 {
            return Err(anyhow!("cms.timeout_secs must be a positive number of seconds"));
        }
        // blank values from .env files mean "unset"
        if self.api_token.as_deref().map(str::trim).is_some_and(str::is_empty) {
            self.api_token = None;
        }
        if self.locale.as_deref().map(str::trim).is_some_and(str::is_empty) {
            self.locale = None;
        }
        Ok(())
    }
}

impl SiteConfig {
    fn normalize_and_validate(&mut self) -> Result<()> {
        normalize_http_url("site.base_url", &mut self.base_url)?;
        if self.name.trim().is_empty() {
            self.name = default_site_name();
        }
        if self.public_dir.trim().is_empty() {
            self.public_dir = default_public_dir();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parses_partial_toml_with_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8088

            [cms]
            api_url = "https://cms.example.com/"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.cms.timeout_secs, 10);
        assert_eq!(cfg.site.public_dir, "public");
    }

    #[test]
    fn normalize_trims_trailing_slash() {
        let mut cfg = AppConfig::default();
        cfg.cms.api_url = "https://cms.example.com/".into();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.cms.api_url, "https://cms.example.com");
    }

    #[test]
    fn rejects_non_http_api_url() {
        let mut cfg = AppConfig::default();
        cfg.cms.api_url = "cms.example.com".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut cfg = AppConfig::default();
        cfg.cms.timeout_secs = 0;
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("CMS_API_URL", "https://strapi.internal"),
            ("SERVER_PORT", "9000"),
            ("CMS_API_TOKEN", "  "),
            ("SERVER_HOST", "0.0.0.0"),
        ]);
        let mut cfg = AppConfig::default();
        cfg.apply_env(|k| env.get(k).map(|v| v.to_string()));
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.cms.api_url, "https://strapi.internal");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert!(cfg.cms.api_token.is_none());
    }

    #[test]
    fn missing_file_is_detected() {
        let err = load_from_file("/nonexistent-config-for-tests.toml").unwrap_err();
        assert!(is_not_found(&err));
    }
}
