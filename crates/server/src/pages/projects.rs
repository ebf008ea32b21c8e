use axum::extract::{Path, Query, State};
use maud::{html, Markup};
use serde::Deserialize;
use service::shaping::{
    filter_by_category, project_categories, related_projects, sort_by_completion_desc, unique_technologies,
};

use crate::errors::PageError;
use crate::state::AppState;
use crate::views::components::{
    category_filter, characteristics, empty_state, gallery, project_card, section_heading, tags, tech_badges,
};
use crate::views::layout::{self, PageMeta};
use crate::views::month_year;
use crate::views::richtext::RichTextRenderer;

const RELATED_LIMIT: usize = 3;

#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilter {
    pub categorie: Option<String>,
}

pub async fn list(State(state): State<AppState>, Query(filter): Query<ProjectFilter>) -> Markup {
    let mut projects = state.content.projects().await;
    sort_by_completion_desc(&mut projects);
    let categories = project_categories(&projects);
    let active = filter.categorie.as_deref();
    let shown = filter_by_category(projects, active);

    let meta = PageMeta::new("Projets", "Une sélection de nos réalisations récentes.", "/projects");
    let body = html! {
        section.page-intro data-reveal {
            h1 { "Nos projets" }
            p.lead { "Sites, applications et plateformes livrés pour nos clients." }
        }
        @if !categories.is_empty() {
            (category_filter(&categories, active))
        }
        @if shown.is_empty() {
            (empty_state("Aucun projet ne correspond à cette catégorie."))
        } @else {
            div.grid {
                @for (i, project) in shown.iter().enumerate() {
                    (project_card(&state.site, project, i))
                }
            }
        }
    };
    layout::page(&state.site, &meta, body)
}

pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Markup, PageError> {
    let (project, mut all) = tokio::join!(state.content.project_by_slug(&slug), state.content.projects());
    let project = project.ok_or_else(|| PageError::not_found(&state.site, "Projet"))?;
    sort_by_completion_desc(&mut all);
    let related = related_projects(&project, &all, RELATED_LIMIT);

    let site = &state.site;
    let renderer = RichTextRenderer::new(&site.media_base);
    let description = if project.summary.is_empty() {
        project.description.plain_text()
    } else {
        project.summary.clone()
    };
    let meta = PageMeta::new(project.title.clone(), description, format!("/projects/{}", project.slug))
        .with_seo(project.seo.as_ref(), site)
        .with_image(project.image.as_ref().map(|i| site.media_url(&i.url)));
    let technologies = unique_technologies(&project.technologies);

    let body = html! {
        article.project-detail {
            header.page-intro data-reveal {
                p.eyebrow { (project.categories().join(" · ")) }
                h1 { (project.title) }
                @if !project.summary.is_empty() { p.lead { (project.summary) } }
            }
            @if let Some(image) = &project.image {
                figure.hero-image data-reveal {
                    img src=(site.media_url(&image.url)) alt=(image.alt)
                        width=[image.width] height=[image.height];
                }
            }
            dl.project-facts data-reveal {
                dt { "Client" } dd { (project.client) }
                dt { "Catégorie" } dd { (project.categories().join(", ")) }
                @if let Some(date) = project.completed_on {
                    dt { "Réalisé en" }
                    dd { time datetime=(date.format("%Y-%m-%d").to_string()) { (month_year(date)) } }
                }
            }
            @if !project.description.is_empty() {
                section.richtext data-reveal { (renderer.render(&project.description)) }
            }
            @if !project.features.is_empty() {
                section {
                    (section_heading("Fonctionnalités", "Ce que nous avons livré"))
                    (characteristics(&project.features))
                }
            }
            @if !technologies.is_empty() {
                section {
                    (section_heading("Stack", "Technologies utilisées"))
                    (tech_badges(&technologies))
                }
            }
            @if !project.images.is_empty() {
                section {
                    (section_heading("Galerie", "En images"))
                    (gallery(site, &project.images))
                }
            }
            (tags(&project.tags))
            @if !related.is_empty() {
                section.related {
                    (section_heading("Dans la même catégorie", "Projets similaires"))
                    div.grid {
                        @for (i, other) in related.iter().enumerate() { (project_card(site, other, i)) }
                    }
                }
            }
        }
    };
    Ok(layout::page(site, &meta, body))
}
