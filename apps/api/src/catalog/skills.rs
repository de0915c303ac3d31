use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::models::skill::Skill;

/// Derives a proficiency score per technology from how often it appears.
///
/// Every occurrence counts, including repeats inside a single project.
/// `proficiency = round(100 * count / max_count)`, capped at 100.
/// Sorted by proficiency descending, ties by name ascending.
pub fn compute_skills(catalog: &Catalog) -> Vec<Skill> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tech in catalog.projects.iter().flat_map(|p| p.technologies.iter()) {
        *counts.entry(tech.as_str()).or_insert(0) += 1;
    }

    let max_count = counts.values().copied().max().unwrap_or(1);

    let mut skills: Vec<Skill> = counts
        .into_iter()
        .map(|(name, count)| Skill {
            name: name.to_string(),
            proficiency: proficiency(count, max_count),
            projects_count: count,
        })
        .collect();

    // Stable sort keeps the BTreeMap's name-ascending order among equal scores
    skills.sort_by(|a, b| b.proficiency.cmp(&a.proficiency));
    skills
}

fn proficiency(count: usize, max_count: usize) -> u8 {
    let pct = (100.0 * count as f64 / max_count.max(1) as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{project, sample_catalog};

    #[test]
    fn test_empty_catalog_has_no_skills() {
        assert!(compute_skills(&Catalog::default()).is_empty());
    }

    #[test]
    fn test_sample_catalog_scores() {
        let skills = compute_skills(&sample_catalog());
        let summary: Vec<(&str, u8, usize)> = skills
            .iter()
            .map(|s| (s.name.as_str(), s.proficiency, s.projects_count))
            .collect();
        assert_eq!(
            summary,
            vec![("Go", 100, 2), ("React", 50, 1), ("SQL", 50, 1)]
        );
    }

    #[test]
    fn test_repeats_within_project_count_twice() {
        let catalog = Catalog::new(vec![
            project("a", "x", &["Rust", "Rust"]),
            project("b", "x", &["Python"]),
        ]);
        let skills = compute_skills(&catalog);
        assert_eq!(skills[0].name, "Rust");
        assert_eq!(skills[0].projects_count, 2);
        assert_eq!(skills[1].proficiency, 50);
    }

    #[test]
    fn test_proficiency_rounds_to_nearest() {
        // 2/3 = 66.67 -> 67, 1/3 = 33.33 -> 33
        assert_eq!(proficiency(2, 3), 67);
        assert_eq!(proficiency(1, 3), 33);
        assert_eq!(proficiency(3, 3), 100);
    }

    #[test]
    fn test_projects_without_technologies_are_ignored() {
        let catalog = Catalog::new(vec![project("a", "x", &[]), project("b", "x", &["Go"])]);
        let skills = compute_skills(&catalog);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].proficiency, 100);
    }

    #[test]
    fn test_sorted_descending_and_in_range() {
        let catalog = Catalog::new(vec![
            project("a", "x", &["A", "B", "C"]),
            project("b", "x", &["B", "C"]),
            project("c", "x", &["C"]),
        ]);
        let skills = compute_skills(&catalog);
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
        assert!(skills.windows(2).all(|w| w[0].proficiency >= w[1].proficiency));
        assert!(skills.iter().all(|s| s.proficiency <= 100));
    }
}
