use maud::{html, Markup};

use crate::state::SiteContext;
use crate::views::layout::{self, PageMeta};

/// The "content not found" page, used for unknown slugs and unknown routes.
pub fn page(site: &SiteContext, what: &str) -> Markup {
    let meta = PageMeta::new("Page introuvable", format!("{what} introuvable"), "/404");
    layout::page(
        site,
        &meta,
        html! {
            section.not-found {
                h1 { (what) " introuvable" }
                p { "Le contenu demandé n'existe pas ou n'est plus disponible." }
                p { a.button href="/" { "Retour à l'accueil" } }
            }
        },
    )
}
