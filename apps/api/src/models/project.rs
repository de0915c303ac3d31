use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_CATEGORY: &str = "Other";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A single portfolio project as stored in the dataset.
///
/// Defaults are applied once at deserialization time, so downstream code never
/// has to re-default a missing `category` or `technologies` list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Presentation-only fields (links, images, feature lists) passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The on-disk dataset document.
///
/// Any other top-level keys (such as precomputed `technologies` /
/// `categories`) are skipped whatever their shape; facets are always
/// recomputed from `projects`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectData {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_category_defaults_to_other() {
        let p: Project = serde_json::from_str(r#"{"id":"a","title":"A"}"#).unwrap();
        assert_eq!(p.category, "Other");
        assert!(p.technologies.is_empty());
        assert_eq!(p.description, "");
    }

    #[test]
    fn test_explicit_empty_category_is_kept() {
        let p: Project = serde_json::from_str(r#"{"id":"a","category":""}"#).unwrap();
        assert_eq!(p.category, "");
    }

    #[test]
    fn test_extra_fields_survive() {
        let p: Project =
            serde_json::from_str(r#"{"id":"a","github_url":"https://example.com"}"#).unwrap();
        assert_eq!(p.extra["github_url"], "https://example.com");
        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back["github_url"], "https://example.com");
    }
}
