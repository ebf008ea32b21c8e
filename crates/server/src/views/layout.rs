use maud::{html, Markup, DOCTYPE};
use models::Seo;

use crate::state::SiteContext;
use crate::views::excerpt;

const NAV: [(&str, &str); 4] = [
    ("/", "Accueil"),
    ("/services", "Services"),
    ("/projects", "Projets"),
    ("/contact", "Contact"),
];

/// Head metadata of one page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub image: Option<String>,
    /// Request path, for the canonical link and the active nav entry.
    pub path: String,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: excerpt(&description.into(), 160),
            keywords: None,
            image: None,
            path: path.into(),
        }
    }

    /// Let the record's SEO component override what was derived from its fields.
    pub fn with_seo(mut self, seo: Option<&Seo>, site: &SiteContext) -> Self {
        let Some(seo) = seo else { return self };
        if let Some(title) = &seo.title {
            self.title = title.clone();
        }
        if let Some(description) = &seo.description {
            self.description = excerpt(description, 160);
        }
        self.keywords = seo.keywords.clone();
        if let Some(image) = &seo.image {
            self.image = Some(site.media_url(&image.url));
        }
        self
    }

    pub fn with_image(mut self, url: Option<String>) -> Self {
        if self.image.is_none() {
            self.image = url;
        }
        self
    }

    fn full_title(&self, site: &SiteContext) -> String {
        if self.title == site.name {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, site.name)
        }
    }
}

fn is_active(current: &str, href: &str) -> bool {
    if href == "/" {
        current == "/"
    } else {
        current == href || current.starts_with(&format!("{href}/"))
    }
}

fn header(site: &SiteContext, current: &str) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { (site.name) }
            nav aria-label="Navigation principale" {
                ul {
                    @for (href, label) in NAV {
                        li {
                            @if is_active(current, href) {
                                a href=(href) class="active" aria-current="page" { (label) }
                            } @else {
                                a href=(href) { (label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn footer(site: &SiteContext) -> Markup {
    html! {
        footer.site-footer {
            p { "© " (chrono::Utc::now().format("%Y").to_string()) " " (site.name) }
            p { a href={ "mailto:" (site.contact_email) } { (site.contact_email) } }
        }
    }
}

/// Full HTML document around `body`.
pub fn page(site: &SiteContext, meta: &PageMeta, body: Markup) -> Markup {
    let title = meta.full_title(site);
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(meta.description);
                @if let Some(keywords) = &meta.keywords {
                    meta name="keywords" content=(keywords);
                }
                link rel="canonical" href=(site.absolute(&meta.path));
                meta property="og:title" content=(title);
                meta property="og:description" content=(meta.description);
                meta property="og:url" content=(site.absolute(&meta.path));
                @if let Some(image) = &meta.image {
                    meta property="og:image" content=(image);
                }
                link rel="stylesheet" href="/assets/site.css";
                script src="/assets/reveal.js" defer {}
            }
            body {
                (header(site, &meta.path))
                main { (body) }
                (footer(site))
            }
        }
    }
}
