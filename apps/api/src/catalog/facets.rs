use std::collections::BTreeSet;

use crate::catalog::Catalog;

/// Distinct technologies across all projects, ascending (case-sensitive).
pub fn technologies(catalog: &Catalog) -> Vec<String> {
    catalog
        .projects
        .iter()
        .flat_map(|p| p.technologies.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct categories across all projects, ascending (case-sensitive).
pub fn categories(catalog: &Catalog) -> Vec<String> {
    catalog
        .projects
        .iter()
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
