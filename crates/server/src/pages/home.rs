use axum::extract::State;
use maud::{html, Markup};
use service::shaping::sort_by_completion_desc;

use crate::state::AppState;
use crate::views::components::{empty_state, project_card, section_heading, service_card};
use crate::views::layout::{self, PageMeta};

const HOME_SERVICES: usize = 6;
const HOME_PROJECTS: usize = 3;

pub async fn home(State(state): State<AppState>) -> Markup {
    let (services, mut projects) = tokio::join!(state.content.services(), state.content.projects());
    sort_by_completion_desc(&mut projects);
    let site = &state.site;

    let meta = PageMeta::new(
        site.name.clone(),
        format!("{} : conception de sites, applications et identités numériques.", site.name),
        "/",
    );
    let body = html! {
        section.hero data-reveal {
            h1 { "Nous concevons des expériences numériques qui durent." }
            p.lead { (site.name) " accompagne les entreprises de l'idée au lancement." }
            p.actions {
                a.button href="/projects" { "Voir nos projets" }
                a.button.secondary href="/contact" { "Parlons de votre projet" }
            }
        }
        section.services {
            (section_heading("Services", "Ce que nous faisons"))
            @if services.is_empty() {
                (empty_state("Nos services seront bientôt en ligne."))
            } @else {
                div.grid {
                    @for (i, svc) in services.iter().take(HOME_SERVICES).enumerate() {
                        (service_card(svc, i))
                    }
                }
                p { a href="/services" { "Tous les services →" } }
            }
        }
        @if !projects.is_empty() {
            section.projects {
                (section_heading("Réalisations", "Projets récents"))
                div.grid {
                    @for (i, project) in projects.iter().take(HOME_PROJECTS).enumerate() {
                        (project_card(site, project, i))
                    }
                }
                p { a href="/projects" { "Tous les projets →" } }
            }
        }
        section.cta data-reveal {
            h2 { "Un projet en tête ?" }
            a.button href="/contact" { "Contactez-nous" }
        }
    };
    layout::page(site, &meta, body)
}
