// Project catalog: dataset loading, facet extraction, filtering and skill scoring.
// Everything except the loader is pure and operates on a borrowed `Catalog`.

pub mod facets;
pub mod filter;
pub mod handlers;
pub mod loader;
pub mod skills;

use crate::models::project::Project;

/// The full set of projects for one request. Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::Map;

    use super::Catalog;
    use crate::models::project::Project;

    pub fn project(id: &str, category: &str, technologies: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            category: category.to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            extra: Map::new(),
        }
    }

    /// Three-project catalog: a(Go, SQL), b(Go), c(React).
    pub fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            project("a", "Backend", &["Go", "SQL"]),
            project("b", "Backend", &["Go"]),
            project("c", "Frontend", &["React"]),
        ])
    }
}
