// src/analysis/chart.rs
//! Selects the skills each chart plots, in the order it plots them

use crate::types::{RankedView, SkillView};
use serde::{Deserialize, Serialize};

/// One chart on the summary page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub categories: Vec<String>,
    /// Preferred axis order; skills not listed follow in view order
    #[serde(default)]
    pub skill_order: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub id: String,
    pub title: String,
    pub skills: Vec<String>,
    pub grades: Vec<u8>,
}

impl ChartSpec {
    pub fn new(id: &str, title: &str, categories: &[&str], skill_order: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            skill_order: skill_order.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn select<'v>(&self, view: &'v RankedView) -> Vec<&'v SkillView> {
        let mut selected: Vec<&SkillView> = view
            .iter()
            .filter(|item| self.categories.contains(&item.category))
            .collect();

        let position = |skill: &str| {
            self.skill_order
                .iter()
                .position(|ordered| ordered == skill)
                .unwrap_or(self.skill_order.len())
        };
        selected.sort_by_key(|item| position(&item.skill));
        selected
    }

    pub fn series(&self, view: &RankedView) -> ChartSeries {
        let selected = self.select(view);
        ChartSeries {
            id: self.id.clone(),
            title: self.title.clone(),
            skills: selected.iter().map(|item| item.skill.clone()).collect(),
            grades: selected.iter().map(|item| item.grade).collect(),
        }
    }
}

/// Charts of the default summary page
pub fn default_charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec::new(
            "chart1",
            "Cloud and Server Technologies",
            &["Cloud", "Server"],
            &[
                "MSSQL",
                "Snowflake",
                "Amazon S3",
                "AWS",
                "MongoDB",
                "MySQL",
                "PostgreSQL",
                "Amazon Redshift",
            ],
        ),
        ChartSpec::new(
            "chart2",
            "Data Development Skills",
            &["Programming", "Tools"],
            &[
                "Python",
                "Apache Kafka",
                "TSQL",
                "PgSQL",
                "Bash",
                "Powershell",
                "C#",
                "Apache Airflow",
                "SQL",
            ],
        ),
        ChartSpec::new(
            "chart3",
            "DataOps",
            &["Ops"],
            &[
                "Docker",
                "Jenkins",
                "Gitlab",
                "SonarQube",
                "Kubernetes",
                "Git",
                "Grafana",
                "ELK",
                "Ansible",
                "Liquibase",
                "Prometheus",
            ],
        ),
        ChartSpec::new(
            "chart4",
            "Soft Skills and Competencies",
            &["Soft Skills"],
            &[],
        ),
        ChartSpec::new(
            "chart5",
            "Areas of Professional Expertise",
            &["Domain"],
            &[],
        ),
    ]
}

/// Skill names joined by spaces, for the word-cloud generator
pub fn wordcloud_corpus(view: &RankedView) -> String {
    view.iter()
        .map(|item| item.skill.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(skill: &str, category: &str, grade: u8) -> SkillView {
        SkillView {
            skill: skill.to_string(),
            duration: i64::from(grade) * 4,
            category: category.to_string(),
            grade,
        }
    }

    fn view() -> RankedView {
        RankedView::from_sorted(vec![
            item("Docker", "Ops", 6),
            item("Bash", "Programming", 9),
            item("Python", "Programming", 9),
            item("Scala", "Programming", 3),
            item("Git", "Tools", 8),
            item("Negotiation", "Soft Skills", 3),
        ])
    }

    #[test]
    fn test_filters_and_orders() {
        let chart = ChartSpec::new("dev", "Dev", &["Programming", "Tools"], &["Python", "Git", "Bash"]);
        let series = chart.series(&view());

        assert_eq!(series.skills, ["Python", "Git", "Bash", "Scala"]);
        assert_eq!(series.grades, [9, 8, 9, 3]);
    }

    #[test]
    fn test_without_order_keeps_view_order() {
        let chart = ChartSpec::new("soft", "Soft", &["Soft Skills", "Ops"], &[]);
        let view = view();
        let names: Vec<_> = chart.select(&view).into_iter().map(|v| v.skill.as_str()).collect();
        assert_eq!(names, ["Docker", "Negotiation"]);
    }

    #[test]
    fn test_wordcloud_corpus() {
        assert_eq!(
            wordcloud_corpus(&view()),
            "Docker Bash Python Scala Git Negotiation"
        );
        assert_eq!(wordcloud_corpus(&RankedView::default()), "");
    }

    #[test]
    fn test_default_charts_are_distinct() {
        let charts = default_charts();
        assert_eq!(charts.len(), 5);
        assert!(charts.iter().all(|chart| !chart.categories.is_empty()));
    }
}
