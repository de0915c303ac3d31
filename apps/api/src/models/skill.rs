use serde::{Deserialize, Serialize};

/// Derived skill entry shown on the about page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    /// 0..=100, relative to the most used technology.
    pub proficiency: u8,
    pub projects_count: usize,
}
