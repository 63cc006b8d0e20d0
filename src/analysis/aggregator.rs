// src/analysis/aggregator.rs
use crate::extraction::strip_label;
use crate::types::{ExperienceByEmployer, SkillDuration};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Sums the months of every job mentioning a skill.
///
/// Overlapping jobs add up. Durations that are not known count as zero, and
/// jobs without a skill section contribute nothing. The result is ordered by
/// total descending, ties kept in first-encountered order.
pub fn aggregate_durations(experience: &ExperienceByEmployer) -> Vec<SkillDuration> {
    let mut totals: IndexMap<String, i64> = IndexMap::new();

    for jobs in experience.values() {
        for job in jobs {
            let months = job.duration_months.or_zero();
            let mut counted = HashSet::new();

            for mention in job.skills.names() {
                let Some(skill) = strip_label(mention) else {
                    continue;
                };
                if counted.insert(skill) {
                    *totals.entry(skill.to_string()).or_insert(0) += months;
                }
            }
        }
    }

    let mut durations: Vec<SkillDuration> = totals
        .into_iter()
        .map(|(skill, total)| SkillDuration::new(skill, total))
        .collect();
    durations.sort_by(|a, b| b.total_duration_months.cmp(&a.total_duration_months));
    durations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldValue, JobRecord, Months, SkillSet};

    fn job(months: Months, skills: SkillSet) -> JobRecord {
        JobRecord {
            job_title: FieldValue::Absent,
            date_range_label: FieldValue::Absent,
            duration_months: months,
            location: FieldValue::Absent,
            description: FieldValue::Absent,
            skills,
        }
    }

    fn total(durations: &[SkillDuration], skill: &str) -> Option<i64> {
        durations
            .iter()
            .find(|d| d.skill == skill)
            .map(|d| d.total_duration_months)
    }

    #[test]
    fn test_sums_across_employers() {
        let mut experience = ExperienceByEmployer::new();
        experience.insert(
            "Acme".to_string(),
            vec![job(Months::Known(12), SkillSet::from_names(["Python"]))],
        );
        experience.insert(
            "Initech".to_string(),
            vec![job(Months::Known(12), SkillSet::from_names(["Python", "SQL"]))],
        );

        let durations = aggregate_durations(&experience);
        assert_eq!(durations[0], SkillDuration::new("Python", 24));
        assert_eq!(durations[1], SkillDuration::new("SQL", 12));
    }

    #[test]
    fn test_order_independent_totals() {
        let jobs_a = vec![
            job(Months::Known(7), SkillSet::from_names(["Bash", "Docker"])),
            job(Months::Unknown, SkillSet::from_names(["Docker"])),
        ];
        let jobs_b = vec![job(Months::Known(30), SkillSet::from_names(["Docker", "Go"]))];

        let mut forward = ExperienceByEmployer::new();
        forward.insert("A".to_string(), jobs_a.clone());
        forward.insert("B".to_string(), jobs_b.clone());

        let mut backward = ExperienceByEmployer::new();
        backward.insert("B".to_string(), jobs_b);
        backward.insert("A".to_string(), jobs_a);

        let forward = aggregate_durations(&forward);
        let backward = aggregate_durations(&backward);
        for skill in ["Bash", "Docker", "Go"] {
            assert_eq!(total(&forward, skill), total(&backward, skill));
        }
        assert_eq!(total(&forward, "Docker"), Some(37));
    }

    #[test]
    fn test_unknown_counts_zero_and_absent_skips() {
        let mut experience = ExperienceByEmployer::new();
        experience.insert(
            "Acme".to_string(),
            vec![
                job(Months::Unknown, SkillSet::from_names(["Excel"])),
                job(Months::Known(40), SkillSet::Absent),
            ],
        );

        let durations = aggregate_durations(&experience);
        assert_eq!(durations, vec![SkillDuration::new("Excel", 0)]);
    }

    #[test]
    fn test_residual_prefix_merges() {
        let mut experience = ExperienceByEmployer::new();
        experience.insert(
            "Acme".to_string(),
            vec![
                job(Months::Known(6), SkillSet::from_names(["Skills: Kafka", "Kafka"])),
                job(Months::Known(4), SkillSet::from_names(["Kafka"])),
            ],
        );

        assert_eq!(
            aggregate_durations(&experience),
            vec![SkillDuration::new("Kafka", 10)]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let mut experience = ExperienceByEmployer::new();
        experience.insert(
            "Acme".to_string(),
            vec![job(Months::Known(5), SkillSet::from_names(["Zsh", "Awk", "python", "Python"]))],
        );

        let names: Vec<_> = aggregate_durations(&experience)
            .into_iter()
            .map(|d| d.skill)
            .collect();
        assert_eq!(names, ["Zsh", "Awk", "python", "Python"]);
    }
}
