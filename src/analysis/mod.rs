// src/analysis/mod.rs
//! Aggregation, classification and grading of skills into the ranked view

pub mod aggregator;
pub mod category;
pub mod chart;
pub mod grade;
pub mod ranked_view;

pub use aggregator::aggregate_durations;
pub use category::{CategoryConfig, CategoryMap, SkillGroup, UNCATEGORIZED};
pub use chart::{default_charts, wordcloud_corpus, ChartSeries, ChartSpec};
pub use grade::{GradeScale, MAX_GRADE};
pub use ranked_view::RankedViewBuilder;
