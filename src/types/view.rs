// src/types/view.rs
use serde::{Deserialize, Serialize};

/// Total months a skill was used across every job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDuration {
    pub skill: String,
    pub total_duration_months: i64,
}

impl SkillDuration {
    pub fn new(skill: impl Into<String>, total_duration_months: i64) -> Self {
        Self {
            skill: skill.into(),
            total_duration_months,
        }
    }
}

/// One row of the view snapshot read by the chart pages.
/// Field names on the wire are capitalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillView {
    #[serde(rename = "Skill")]
    pub skill: String,
    #[serde(rename = "Duration")]
    pub duration: i64,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Grade")]
    pub grade: u8,
}

/// Skills ordered by category ascending, then duration descending.
///
/// Only the ranking step builds one from scratch; consumers get read access.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedView(Vec<SkillView>);

impl RankedView {
    pub(crate) fn from_sorted(views: Vec<SkillView>) -> Self {
        Self(views)
    }

    pub fn as_slice(&self) -> &[SkillView] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SkillView> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, skill: &str) -> Option<&SkillView> {
        self.0.iter().find(|view| view.skill == skill)
    }

    pub fn into_inner(self) -> Vec<SkillView> {
        self.0
    }
}

impl<'a> IntoIterator for &'a RankedView {
    type Item = &'a SkillView;
    type IntoIter = std::slice::Iter<'a, SkillView>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
