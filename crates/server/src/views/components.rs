//! Presentational building blocks shared by the pages.

use maud::{html, Markup};
use models::{Characteristic, FaqItem, Image, ProcessStep, Project, Service, Tag, Technology, TypeService};
use service::shaping::unique_technologies;

use crate::state::SiteContext;
use crate::views::icons::icon;
use crate::views::reveal::delay_style;
use crate::views::{excerpt, month_year};

/// Color tokens become CSS class suffixes; anything odd falls back to `primary`.
pub fn accent_class(color: &str) -> String {
    let token = color.trim().to_ascii_lowercase();
    let valid = !token.is_empty()
        && token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    format!("accent-{}", if valid { token.as_str() } else { "primary" })
}

/// Detail page of a project; `None` when the record has no slug to link to.
pub fn project_href(project: &Project) -> Option<String> {
    detail_href("/projects", &project.slug)
}

pub fn service_href(service: &Service) -> Option<String> {
    detail_href("/services", &service.slug)
}

fn detail_href(prefix: &str, slug: &str) -> Option<String> {
    let slug = slug.trim();
    (!slug.is_empty()).then(|| format!("{prefix}/{}", urlencoding::encode(slug)))
}

pub fn section_heading(eyebrow: &str, title: &str) -> Markup {
    html! {
        header.section-heading data-reveal {
            p.eyebrow { (eyebrow) }
            h2 { (title) }
        }
    }
}

pub fn empty_state(message: &str) -> Markup {
    html! { p.empty-state { (message) } }
}

pub fn tech_badges(techs: &[Technology]) -> Markup {
    let unique = unique_technologies(techs);
    html! {
        @if !unique.is_empty() {
            ul.tech-badges {
                @for tech in &unique {
                    li.tech-badge style=[tech.color.as_ref().map(|c| format!("--badge-color: {c}"))] {
                        @if let Some(name) = &tech.icon { (icon(name)) }
                        (tech.name)
                    }
                }
            }
        }
    }
}

pub fn service_card(service: &Service, index: usize) -> Markup {
    let summary = excerpt(&service.description.plain_text(), 140);
    let techs: Vec<Technology> = unique_technologies(&service.technologies).into_iter().take(4).collect();
    html! {
        article class={ "card service-card " (accent_class(&service.color)) }
            data-reveal style=(delay_style(index)) {
            div.card-icon { (icon(&service.icon)) }
            h3 {
                @if let Some(href) = service_href(service) {
                    a href=(href) { (service.title) }
                } @else {
                    (service.title)
                }
            }
            @if !summary.is_empty() { p { (summary) } }
            (tech_badges(&techs))
        }
    }
}

fn image_tag(site: &SiteContext, image: &Image, class: &str) -> Markup {
    html! {
        img class=(class) src=(site.media_url(&image.url)) alt=(image.alt)
            width=[image.width] height=[image.height] loading="lazy";
    }
}

pub fn project_card(site: &SiteContext, project: &Project, index: usize) -> Markup {
    let href = project_href(project);
    html! {
        article.card.project-card data-reveal style=(delay_style(index)) {
            @if let Some(image) = &project.image {
                @if let Some(href) = &href {
                    a href=(href) { (image_tag(site, image, "card-image")) }
                } @else {
                    (image_tag(site, image, "card-image"))
                }
            }
            p.meta {
                span.category { (project.categories().join(" · ")) }
                @if let Some(date) = project.completed_on {
                    " · " time datetime=(date.format("%Y-%m-%d").to_string()) { (month_year(date)) }
                }
            }
            h3 {
                @if let Some(href) = &href {
                    a href=(href) { (project.title) }
                } @else {
                    (project.title)
                }
            }
            @if !project.summary.is_empty() { p { (excerpt(&project.summary, 160)) } }
        }
    }
}

pub fn category_filter(categories: &[String], active: Option<&str>) -> Markup {
    let active = active.map(str::trim).filter(|a| !a.is_empty() && !a.eq_ignore_ascii_case("all"));
    html! {
        nav.category-filter aria-label="Filtrer par catégorie" {
            @if active.is_none() {
                a.chip href="/projects" aria-current="true" { "Tous" }
            } @else {
                a.chip href="/projects" { "Tous" }
            }
            @for cat in categories {
                @let href = format!("/projects?categorie={}", urlencoding::encode(cat));
                @if active.is_some_and(|a| a.to_lowercase() == cat.to_lowercase()) {
                    a.chip href=(href) aria-current="true" { (cat) }
                } @else {
                    a.chip href=(href) { (cat) }
                }
            }
        }
    }
}

pub fn service_types(items: &[TypeService]) -> Markup {
    html! {
        @if !items.is_empty() {
            div.grid.service-types {
                @for (i, item) in items.iter().enumerate() {
                    div.card data-reveal style=(delay_style(i)) {
                        h3 { (item.title) }
                        @if !item.description.is_empty() { p { (item.description) } }
                    }
                }
            }
        }
    }
}

pub fn characteristics(items: &[Characteristic]) -> Markup {
    html! {
        @if !items.is_empty() {
            ul.characteristics {
                @for (i, item) in items.iter().enumerate() {
                    li data-reveal style=(delay_style(i)) {
                        (icon(&item.icon))
                        div {
                            strong { (item.title) }
                            @if !item.description.is_empty() { p { (item.description) } }
                        }
                    }
                }
            }
        }
    }
}

pub fn process_steps(steps: &[ProcessStep]) -> Markup {
    html! {
        @if !steps.is_empty() {
            ol.process-steps {
                @for (i, step) in steps.iter().enumerate() {
                    li data-reveal style=(delay_style(i)) {
                        span.step-number { (format!("{:02}", step.number)) }
                        h3 { (step.title) }
                        @if !step.description.is_empty() { p { (step.description) } }
                    }
                }
            }
        }
    }
}

pub fn faq(items: &[FaqItem]) -> Markup {
    html! {
        @if !items.is_empty() {
            div.faq {
                @for item in items {
                    details {
                        summary { (item.question) }
                        p { (item.answer) }
                    }
                }
            }
        }
    }
}

pub fn gallery(site: &SiteContext, images: &[Image]) -> Markup {
    html! {
        @if !images.is_empty() {
            div.gallery {
                @for (i, image) in images.iter().enumerate() {
                    figure data-reveal style=(delay_style(i)) {
                        (image_tag(site, image, "gallery-image"))
                        @if let Some(caption) = &image.caption { figcaption { (caption) } }
                    }
                }
            }
        }
    }
}

pub fn tags(items: &[Tag]) -> Markup {
    html! {
        @if items.iter().any(|t| !t.name.is_empty()) {
            ul.tags {
                @for tag in items.iter().filter(|t| !t.name.is_empty()) {
                    li { "#" (tag.name) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_class_is_sanitized() {
        assert_eq!(accent_class("Violet"), "accent-violet");
        assert_eq!(accent_class("\" onload=x"), "accent-primary");
        assert_eq!(accent_class(""), "accent-primary");
    }

    #[test]
    fn tech_badges_render_unique_names() {
        let html = tech_badges(&[
            Technology::named("React"),
            Technology::named("react"),
            Technology::named("Vue"),
        ])
        .into_string();
        assert_eq!(html.matches("class=\"tech-badge\"").count(), 2);
    }

    #[test]
    fn category_links_are_encoded_and_marked() {
        let html = category_filter(&["Web".into(), "E-commerce & retail".into()], Some("web")).into_string();
        assert!(html.contains("href=\"/projects?categorie=E-commerce%20%26%20retail\""));
        assert!(html.contains("href=\"/projects?categorie=Web\" aria-current=\"true\">Web</a>"));
    }

    #[test]
    fn detail_links_need_a_slug() {
        let listed = Project { slug: "Refonte-v2.0".into(), ..Project::default() };
        assert_eq!(project_href(&listed).as_deref(), Some("/projects/Refonte-v2.0"));

        let spaced = Service { slug: "cas à part".into(), ..Service::default() };
        assert_eq!(service_href(&spaced).as_deref(), Some("/services/cas%20%C3%A0%20part"));

        let unlinked = Project { title: "Sans lien".into(), ..Project::default() };
        assert_eq!(project_href(&unlinked), None);
        let site = SiteContext {
            name: "Agence".into(),
            base_url: "https://agence.fr".into(),
            media_base: "https://cms.agence.fr".into(),
            contact_email: "hello@agence.fr".into(),
        };
        let html = project_card(&site, &unlinked, 0).into_string();
        assert!(html.contains("<h3>Sans lien</h3>"));
        assert!(!html.contains("href=\"/projects/\""));
    }

    #[test]
    fn empty_sections_render_nothing() {
        assert_eq!(faq(&[]).into_string(), "");
        assert_eq!(process_steps(&[]).into_string(), "");
        assert_eq!(tags(&[Tag { name: String::new() }]).into_string(), "");
    }
}
