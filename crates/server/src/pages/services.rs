use axum::extract::{Path, State};
use maud::{html, Markup};
use service::shaping::unique_technologies;

use crate::errors::PageError;
use crate::state::AppState;
use crate::views::components::{
    accent_class, characteristics, empty_state, faq, process_steps, project_card, section_heading, service_card,
    service_types, tech_badges,
};
use crate::views::excerpt;
use crate::views::icons::icon;
use crate::views::layout::{self, PageMeta};
use crate::views::richtext::RichTextRenderer;

pub async fn list(State(state): State<AppState>) -> Markup {
    let services = state.content.services().await;
    let meta = PageMeta::new("Services", "Développement web, applications mobiles, design et référencement.", "/services");
    let body = html! {
        section.page-intro data-reveal {
            h1 { "Nos services" }
            p.lead { "Des équipes resserrées, du cadrage à la mise en ligne." }
        }
        @if services.is_empty() {
            (empty_state("Aucun service n'est disponible pour le moment."))
        } @else {
            div.grid {
                @for (i, svc) in services.iter().enumerate() { (service_card(svc, i)) }
            }
        }
    };
    layout::page(&state.site, &meta, body)
}

pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Markup, PageError> {
    let service = state
        .content
        .service_by_slug(&slug)
        .await
        .ok_or_else(|| PageError::not_found(&state.site, "Service"))?;
    let site = &state.site;
    let renderer = RichTextRenderer::new(&site.media_base);

    let meta = PageMeta::new(
        service.title.clone(),
        excerpt(&service.description.plain_text(), 160),
        format!("/services/{}", service.slug),
    )
    .with_seo(service.seo.as_ref(), site);

    let technologies = unique_technologies(&service.technologies);
    let body = html! {
        article class={ "service-detail " (accent_class(&service.color)) } {
            header.page-intro data-reveal {
                div.card-icon { (icon(&service.icon)) }
                h1 { (service.title) }
            }
            @if !service.description.is_empty() {
                section.richtext data-reveal { (renderer.render(&service.description)) }
            }
            @if !service.service_types.is_empty() {
                section {
                    (section_heading("Prestations", "Types de projets"))
                    (service_types(&service.service_types))
                }
            }
            @if !service.characteristics.is_empty() {
                section {
                    (section_heading("Points forts", "Ce qui fait la différence"))
                    (characteristics(&service.characteristics))
                }
            }
            @if !service.steps.is_empty() {
                section {
                    (section_heading("Méthode", "Notre processus"))
                    (process_steps(&service.steps))
                }
            }
            @if !technologies.is_empty() {
                section {
                    (section_heading("Stack", "Technologies"))
                    (tech_badges(&technologies))
                }
            }
            @if !service.faq.is_empty() {
                section {
                    (section_heading("FAQ", "Questions fréquentes"))
                    (faq(&service.faq))
                }
            }
            @if !service.projects.is_empty() {
                section {
                    (section_heading("Réalisations", "Projets associés"))
                    div.grid {
                        @for (i, project) in service.projects.iter().enumerate() {
                            (project_card(site, project, i))
                        }
                    }
                }
            }
            section.cta data-reveal {
                h2 { "Intéressé par ce service ?" }
                a.button href="/contact" { "Demander un devis" }
            }
        }
    };
    Ok(layout::page(site, &meta, body))
}
