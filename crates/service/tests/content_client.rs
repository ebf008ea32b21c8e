use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use configs::CmsConfig;
use models::ServiceAttributes;
use serde_json::{json, Value};
use service::content::{CmsClient, CmsContentRepository, ContentQuery, ContentRepository};
use service::errors::ContentError;
use tokio::net::TcpListener;

type Seen = Arc<Mutex<Vec<(HashMap<String, String>, Option<String>)>>>;

/// Bind a fake content store on an ephemeral port and return its base URL.
async fn spawn_store(router: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("fake store error: {}", e);
        }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

fn cms_config(api_url: &str) -> CmsConfig {
    CmsConfig { api_url: api_url.to_string(), ..CmsConfig::default() }
}

fn repo_for(base_url: &str) -> anyhow::Result<CmsContentRepository> {
    Ok(CmsContentRepository::new(CmsClient::new(&cms_config(base_url))?))
}

fn services_payload() -> Value {
    json!({
        "data": [
            { "id": 1, "attributes": {
                "Titre": "Développement web",
                "slug": "developpement-web",
                "technologies": { "data": [
                    { "id": 1, "attributes": { "nom": "React" } },
                    { "id": 2, "attributes": { "nom": "react" } },
                    { "id": 3, "attributes": { "nom": "Vue" } }
                ]}
            }},
            { "id": 2, "attributes": { "slug": "seo", "Titre": null } }
        ],
        "meta": { "pagination": { "page": 1, "pageSize": 100, "total": 2 } }
    })
}

async fn services_handler(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let slug = params.get("filters[slug][$eq]").cloned();
    seen.lock().unwrap().push((params, auth));

    let all = services_payload();
    match slug {
        None => Json(all),
        Some(slug) => {
            let matching: Vec<Value> = all["data"]
                .as_array()
                .unwrap()
                .iter()
                .filter(|e| e["attributes"]["slug"] == slug.as_str())
                .cloned()
                .collect();
            Json(json!({ "data": matching }))
        }
    }
}

async fn healthy_store() -> anyhow::Result<(String, Seen)> {
    let seen: Seen = Arc::default();
    let router = Router::new()
        .route("/api/services", get(services_handler))
        .with_state(seen.clone());
    Ok((spawn_store(router).await?, seen))
}

#[tokio::test]
async fn lists_services_with_defaults_applied() -> anyhow::Result<()> {
    let (base, _) = healthy_store().await?;
    let services = repo_for(&base)?.services().await;

    assert_eq!(services.len(), 2);
    assert_eq!(services[0].title, "Développement web");
    assert_eq!(services[0].technologies.len(), 3, "dedupe happens at render time");
    assert_eq!(services[1].title, "Service sans titre");
    Ok(())
}

#[tokio::test]
async fn every_request_is_cache_busted() -> anyhow::Result<()> {
    let (base, seen) = healthy_store().await?;
    let repo = repo_for(&base)?;
    repo.services().await;
    repo.services().await;

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    for (params, _) in seen.iter() {
        let ts = params.get("timestamp").expect("timestamp param");
        assert!(ts.parse::<i64>()? > 0);
        assert_eq!(params.get("populate[technologies]").map(String::as_str), Some("true"));
    }
    Ok(())
}

#[tokio::test]
async fn slug_lookup_filters_and_misses_return_none() -> anyhow::Result<()> {
    let (base, seen) = healthy_store().await?;
    let repo = repo_for(&base)?;

    let found = repo.service_by_slug("developpement-web").await;
    assert_eq!(found.map(|s| s.slug), Some("developpement-web".to_string()));

    assert!(repo.service_by_slug("inexistant").await.is_none());

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen[1].0.get("filters[slug][$eq]").map(String::as_str),
        Some("inexistant")
    );
    Ok(())
}

#[tokio::test]
async fn invalid_slug_is_not_sent() -> anyhow::Result<()> {
    let (base, seen) = healthy_store().await?;
    let repo = repo_for(&base)?;
    assert!(repo.service_by_slug("Not A Slug").await.is_none());
    assert!(seen.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn non_success_status_collapses_to_empty() -> anyhow::Result<()> {
    let router = Router::new()
        .route("/api/services", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/api/projets", get(|| async { (StatusCode::NOT_FOUND, "nope").into_response() }));
    let base = spawn_store(router).await?;
    let repo = repo_for(&base)?;

    assert!(repo.services().await.is_empty());
    assert!(repo.service_by_slug("seo").await.is_none());
    assert!(repo.projects().await.is_empty());
    assert!(repo.project_by_slug("boutique").await.is_none());

    let client = CmsClient::new(&cms_config(&base))?;
    let err = client
        .fetch_entries::<ServiceAttributes>(&ContentQuery::new("services"))
        .await
        .unwrap_err();
    assert!(matches!(err, ContentError::Status { status: 500, .. }));
    Ok(())
}

#[tokio::test]
async fn malformed_json_collapses_to_empty() -> anyhow::Result<()> {
    let router = Router::new()
        .route("/api/services", get(|| async { "<html>maintenance</html>" }))
        .route("/api/projets", get(|| async { Json(json!({ "data": [{ "attributes": {} }] })) }));
    let base = spawn_store(router).await?;
    let repo = repo_for(&base)?;

    assert!(repo.services().await.is_empty());
    assert!(repo.projects().await.is_empty(), "entries without id are malformed");

    let client = CmsClient::new(&cms_config(&base))?;
    let err = client
        .fetch_entries::<ServiceAttributes>(&ContentQuery::new("services"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "decode");
    Ok(())
}

#[tokio::test]
async fn slow_store_times_out_as_not_found() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/api/services",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(services_payload())
        }),
    );
    let base = spawn_store(router).await?;
    let client = CmsClient::with_timeout(&cms_config(&base), Duration::from_millis(200))?;

    let err = client
        .fetch_entries::<ServiceAttributes>(&ContentQuery::new("services"))
        .await
        .unwrap_err();
    assert!(matches!(err, ContentError::Timeout), "got {err:?}");

    let repo = CmsContentRepository::new(client);
    assert!(repo.service_by_slug("seo").await.is_none());
    Ok(())
}

#[tokio::test]
async fn unreachable_store_is_a_network_error() -> anyhow::Result<()> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let base = format!("http://{}:{}", addr.ip(), addr.port());
    let client = CmsClient::new(&cms_config(&base))?;
    let err = client
        .fetch_entries::<ServiceAttributes>(&ContentQuery::new("services"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "network");
    assert!(repo_for(&base)?.services().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn api_token_and_locale_are_sent() -> anyhow::Result<()> {
    let (base, seen) = healthy_store().await?;
    let cfg = CmsConfig {
        api_token: Some("secret-token".into()),
        locale: Some("fr".into()),
        ..cms_config(&base)
    };
    CmsContentRepository::new(CmsClient::new(&cfg)?).services().await;

    let seen = seen.lock().unwrap();
    let (params, auth) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer secret-token"));
    assert_eq!(params.get("locale").map(String::as_str), Some("fr"));
    Ok(())
}

async fn projects_handler(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let all = json!([
        { "id": 1, "attributes": { "Titre": "Refonte", "slug": "Refonte-v2.0", "Categorie": "Web" } },
        { "id": 2, "attributes": { "Titre": "Vitrine", "slug": "vitrine" } }
    ]);
    let data: Vec<Value> = match params.get("filters[slug][$eq]") {
        None => all.as_array().cloned().unwrap_or_default(),
        Some(slug) => all
            .as_array()
            .into_iter()
            .flatten()
            .filter(|e| e["attributes"]["slug"] == slug.as_str())
            .cloned()
            .collect(),
    };
    Json(json!({ "data": data }))
}

#[tokio::test]
async fn listed_mixed_case_slug_resolves_on_detail() -> anyhow::Result<()> {
    let router = Router::new().route("/api/projets", get(projects_handler));
    let base = spawn_store(router).await?;
    let repo = repo_for(&base)?;

    let slugs: Vec<String> = repo.projects().await.into_iter().map(|p| p.slug).collect();
    assert_eq!(slugs, vec!["Refonte-v2.0", "vitrine"]);

    for slug in &slugs {
        let found = repo.project_by_slug(slug).await;
        assert_eq!(found.map(|p| p.slug).as_deref(), Some(slug.as_str()));
    }
    Ok(())
}

#[tokio::test]
async fn one_broken_entry_does_not_empty_the_list() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/api/services",
        get(|| async {
            Json(json!({ "data": [
                { "id": 1, "attributes": { "Titre": "Développement web", "slug": "developpement-web" } },
                { "id": 2, "attributes": {
                    "Titre": "SEO",
                    "slug": "seo",
                    "Description": [{ "type": "list", "format": "checklist", "children": [] }]
                }},
                { "id": 3, "attributes": { "Titre": ["pas", "une", "chaîne"], "slug": "casse" } },
                { "attributes": { "Titre": "Sans id" } }
            ]}))
        }),
    );
    let base = spawn_store(router).await?;
    let services = repo_for(&base)?.services().await;

    let slugs: Vec<&str> = services.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, vec!["developpement-web", "seo"]);
    Ok(())
}
