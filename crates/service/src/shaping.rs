//! Small list transforms applied at render time.

use std::collections::HashSet;

use models::{Project, Technology};

/// Technologies with duplicates removed, comparing trimmed, lower-cased names.
/// The first spelling seen wins; nameless entries are dropped.
pub fn unique_technologies(techs: &[Technology]) -> Vec<Technology> {
    let mut seen = HashSet::new();
    techs
        .iter()
        .filter(|t| {
            let key = t.name.trim().to_lowercase();
            !key.is_empty() && seen.insert(key)
        })
        .cloned()
        .collect()
}

/// Every distinct category across `projects`, sorted alphabetically.
///
/// A `Categorie` value holding commas counts as several categories.
pub fn project_categories(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out: Vec<String> = projects
        .iter()
        .flat_map(Project::categories)
        .filter(|c| seen.insert(c.to_lowercase()))
        .collect();
    out.sort_by_key(|c| c.to_lowercase());
    out
}

/// Keep projects in `category`; `None`, blank or `"all"` keeps everything.
pub fn filter_by_category(projects: Vec<Project>, category: Option<&str>) -> Vec<Project> {
    match category.map(str::trim) {
        None | Some("") => projects,
        Some(c) if c.eq_ignore_ascii_case("all") => projects,
        Some(c) => projects.into_iter().filter(|p| p.has_category(c)).collect(),
    }
}

/// Newest completion date first; undated projects keep their order at the end.
pub fn sort_by_completion_desc(projects: &mut [Project]) {
    projects.sort_by(|a, b| match (a.completed_on, b.completed_on) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// Up to `limit` other projects sharing at least one category with `current`.
pub fn related_projects(current: &Project, all: &[Project], limit: usize) -> Vec<Project> {
    let wanted: Vec<String> = current.categories().iter().map(|c| c.to_lowercase()).collect();
    all.iter()
        .filter(|p| p.slug != current.slug)
        .filter(|p| p.categories().iter().any(|c| wanted.contains(&c.to_lowercase())))
        .take(limit)
        .cloned()
        .collect()
}
