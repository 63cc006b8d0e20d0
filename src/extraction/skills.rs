// src/extraction/skills.rs
use super::rules::{clean_text, parse_selector};
use crate::types::{SkillSet, NOT_AVAILABLE};
use anyhow::Result;
use scraper::{ElementRef, Selector};
use std::collections::HashSet;
use tracing::debug;

/// Text that marks the element holding a job's skills
pub const SKILLS_LABEL: &str = "Skills:";

/// Separates mentions inside one skills line
pub const MENTION_DELIMITER: &str = " · ";

/// Drops a leading "Label:" from a mention. Returns `None` when nothing is left.
pub fn strip_label(mention: &str) -> Option<&str> {
    let name = mention.rsplit(':').next().unwrap_or(mention).trim();
    (!name.is_empty()).then_some(name)
}

/// Collects the skills of one job from its labelled skills element
pub struct SkillNormalizer {
    label: String,
    container: Selector,
    mention: Selector,
}

impl SkillNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            label: SKILLS_LABEL.to_string(),
            container: parse_selector("li")?,
            mention: parse_selector(r#"span[aria-hidden="true"]"#)?,
        })
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Every text node carrying the label points at its closest list item;
    /// the visible spans of that item hold the delimited mentions.
    ///
    /// A fragment that yields no mention at all is `SkillSet::Absent`, whether
    /// the label is missing, has no enclosing item, or the item holds no spans.
    pub fn normalize(&self, fragment: ElementRef<'_>) -> SkillSet {
        let mut visited = HashSet::new();
        let mut names: Vec<String> = Vec::new();

        for node in fragment.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            if !text.contains(self.label.as_str()) {
                continue;
            }

            let Some(item) = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .find(|element| self.container.matches(element))
            else {
                continue;
            };
            if !visited.insert(item.id()) {
                continue;
            }

            for span in item.select(&self.mention) {
                let line = clean_text(&span.text().collect::<String>());
                for mention in line.split(MENTION_DELIMITER) {
                    let Some(name) = strip_label(mention) else {
                        continue;
                    };
                    if name != NOT_AVAILABLE && !names.iter().any(|known| known == name) {
                        names.push(name.to_string());
                    }
                }
            }
        }

        if names.is_empty() {
            debug!("No '{}' mentions in job fragment", self.label);
            return SkillSet::Absent;
        }

        SkillSet::Listed(names)
    }
}
