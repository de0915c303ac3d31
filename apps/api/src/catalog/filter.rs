//! Project filtering by technology, category and free-text search.
//!
//! All criteria are optional and combine as a logical AND. An empty string is
//! treated the same as an absent criterion. Catalog order is preserved.

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::models::project::Project;

/// Filter criteria as they arrive in the query string (`tech`, `category`, `search`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    #[serde(default)]
    pub tech: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub search: String,
}

impl ProjectFilter {
    fn matches(&self, project: &Project, search_lower: &str) -> bool {
        matches_technology(project, &self.tech)
            && matches_category(project, &self.category)
            && matches_search(project, search_lower)
    }
}

/// Exact match against one of the project's technologies.
fn matches_technology(project: &Project, tech: &str) -> bool {
    tech.is_empty() || project.technologies.iter().any(|t| t == tech)
}

/// Exact match against the project's category.
fn matches_category(project: &Project, category: &str) -> bool {
    category.is_empty() || project.category == category
}

/// Case-insensitive substring match on title, description or any technology.
fn matches_search(project: &Project, search_lower: &str) -> bool {
    if search_lower.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(search_lower)
        || project.description.to_lowercase().contains(search_lower)
        || project
            .technologies
            .iter()
            .any(|t| t.to_lowercase().contains(search_lower))
}

/// Returns the projects satisfying every supplied criterion, in catalog order.
pub fn filter_projects<'a>(catalog: &'a Catalog, filter: &ProjectFilter) -> Vec<&'a Project> {
    let search_lower = filter.search.to_lowercase();
    catalog
        .projects
        .iter()
        .filter(|p| filter.matches(p, &search_lower))
        .collect()
}
