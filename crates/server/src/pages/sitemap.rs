use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use maud::html;

use crate::state::AppState;
use crate::views::components::{project_href, service_href};

const STATIC_PATHS: [&str; 4] = ["/", "/services", "/projects", "/contact"];

pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let (services, projects) = tokio::join!(state.content.services(), state.content.projects());
    let site = &state.site;

    let paths = STATIC_PATHS
        .iter()
        .map(|p| p.to_string())
        .chain(services.iter().filter_map(service_href))
        .chain(projects.iter().filter_map(project_href));

    let urls = html! {
        urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" {
            @for path in paths {
                url { loc { (site.absolute(&path)) } }
            }
        }
    };
    let body = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", urls.into_string());
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], body)
}
