use std::net::SocketAddr;
use std::sync::Arc;

use configs::AppConfig;
use service::content::{CmsClient, CmsContentRepository};
use tracing::info;

use crate::routes;
use crate::state::{AppState, SiteContext};

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Wire the content client, state and router, then serve until `shutdown`
/// resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    common::env::ensure_env(&cfg.site.public_dir).await?;

    let client = CmsClient::new(&cfg.cms)?;
    info!(cms = %client.base_url(), timeout_secs = cfg.cms.timeout_secs, "content client ready");
    let repo = CmsContentRepository::new(client);
    let state = AppState::new(Arc::new(repo), SiteContext::from_config(&cfg));

    let app = routes::build_router(state, &cfg.site.public_dir);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "site listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server stopped");
    Ok(())
}
