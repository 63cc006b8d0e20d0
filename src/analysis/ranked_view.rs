// src/analysis/ranked_view.rs
use super::aggregator::aggregate_durations;
use super::category::CategoryMap;
use super::grade::GradeScale;
use crate::types::{ExperienceByEmployer, RankedView, SkillDuration, SkillView};

/// Aggregates, classifies and grades skills into the final view
pub struct RankedViewBuilder<'a> {
    categories: &'a CategoryMap,
    scale: &'a GradeScale,
}

impl<'a> RankedViewBuilder<'a> {
    pub fn new(categories: &'a CategoryMap, scale: &'a GradeScale) -> Self {
        Self { categories, scale }
    }

    pub fn build(&self, experience: &ExperienceByEmployer) -> RankedView {
        self.rank(aggregate_durations(experience))
    }

    /// Sorted by category ascending, then duration descending.
    /// The sort is stable so ties keep their aggregation order.
    pub fn rank(&self, durations: Vec<SkillDuration>) -> RankedView {
        let mut views: Vec<SkillView> = durations
            .into_iter()
            .map(|duration| {
                let category = self.categories.classify(&duration.skill).to_string();
                let grade = self.scale.grade(&category, duration.total_duration_months);
                SkillView {
                    skill: duration.skill,
                    duration: duration.total_duration_months,
                    category,
                    grade,
                }
            })
            .collect();

        views.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| b.duration.cmp(&a.duration))
        });
        RankedView::from_sorted(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::category::CategoryConfig;

    fn categories() -> CategoryMap {
        let config: CategoryConfig = serde_json::from_str(
            r#"{"Programming": [{"skills": ["SQL", "Bash"]}], "Ops": [{"skills": ["Docker"]}]}"#,
        )
        .unwrap();
        CategoryMap::from_config(&config)
    }

    #[test]
    fn test_sorted_by_category_then_duration() {
        let categories = categories();
        let scale = GradeScale::default();
        let view = RankedViewBuilder::new(&categories, &scale).rank(vec![
            SkillDuration::new("SQL", 40),
            SkillDuration::new("Docker", 40),
            SkillDuration::new("Bash", 10),
        ]);

        let order: Vec<_> = view.iter().map(|v| (v.skill.as_str(), v.category.as_str())).collect();
        assert_eq!(
            order,
            [("Docker", "Ops"), ("SQL", "Programming"), ("Bash", "Programming")]
        );
        assert_eq!(view.get("SQL").map(|v| v.grade), Some(9));
        assert_eq!(view.get("Bash").map(|v| v.grade), Some(0));
    }

    #[test]
    fn test_ties_keep_aggregation_order() {
        let categories = categories();
        let scale = GradeScale::default();
        let view = RankedViewBuilder::new(&categories, &scale).rank(vec![
            SkillDuration::new("Kafka", 12),
            SkillDuration::new("Airflow", 12),
            SkillDuration::new("Spark", 12),
        ]);

        let names: Vec<_> = view.iter().map(|v| v.skill.as_str()).collect();
        assert_eq!(names, ["Kafka", "Airflow", "Spark"]);
        assert!(view.iter().all(|v| v.category == "Uncategorized" && v.grade == 3));
    }
}
