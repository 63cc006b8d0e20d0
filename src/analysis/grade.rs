// src/analysis/grade.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const MAX_GRADE: u8 = 9;

const MONTHS_PER_STEP: i64 = 12;

fn default_multiplier() -> u8 {
    3
}

/// Per-category multiplier applied to whole years of use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeScale {
    #[serde(default = "default_multiplier")]
    pub default: u8,
    #[serde(default)]
    pub categories: IndexMap<String, u8>,
}

impl Default for GradeScale {
    fn default() -> Self {
        let mut categories = IndexMap::new();
        categories.insert("Programming".to_string(), 3);
        categories.insert("Tools".to_string(), 4);
        Self {
            default: default_multiplier(),
            categories,
        }
    }
}

impl GradeScale {
    pub fn multiplier(&self, category: &str) -> u8 {
        self.categories.get(category).copied().unwrap_or(self.default)
    }

    /// `min(years * multiplier, 9)` with years rounded down
    pub fn grade(&self, category: &str, duration_months: i64) -> u8 {
        if duration_months <= 0 {
            return 0;
        }
        let years = duration_months / MONTHS_PER_STEP;
        let grade = years
            .saturating_mul(i64::from(self.multiplier(category)))
            .min(i64::from(MAX_GRADE));
        u8::try_from(grade).unwrap_or(MAX_GRADE)
    }
}
