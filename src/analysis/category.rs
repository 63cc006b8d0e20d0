// src/analysis/category.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub skills: Vec<String>,
}

/// Category name → groups of skills, as read from the category file
pub type CategoryConfig = IndexMap<String, Vec<SkillGroup>>;

/// Lower-cased skill name → category label
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    by_skill: HashMap<String, String>,
}

impl CategoryMap {
    /// A skill listed under several categories ends up in the last one
    pub fn from_config(config: &CategoryConfig) -> Self {
        let mut by_skill = HashMap::new();
        for (category, groups) in config {
            for skill in groups.iter().flat_map(|group| &group.skills) {
                by_skill.insert(skill.to_lowercase(), category.clone());
            }
        }
        Self { by_skill }
    }

    pub fn classify(&self, skill: &str) -> &str {
        self.by_skill
            .get(&skill.to_lowercase())
            .map(String::as_str)
            .unwrap_or(UNCATEGORIZED)
    }

    pub fn len(&self) -> usize {
        self.by_skill.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_skill.is_empty()
    }
}
