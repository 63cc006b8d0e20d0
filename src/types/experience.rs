// src/types/experience.rs
//! Job records extracted from the archived profile, and their snapshot encoding

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Wire marker for data the profile did not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Employer name → jobs held there, both in document order
pub type ExperienceByEmployer = IndexMap<String, Vec<JobRecord>>;

/// A textual field that may be missing from the markup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Present(String),
    Absent,
}

impl FieldValue {
    pub fn from_option(value: Option<String>) -> Self {
        match value {
            Some(text) if !text.is_empty() && text != NOT_AVAILABLE => Self::Present(text),
            _ => Self::Absent,
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Present(text) => Some(text),
            Self::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Text as written to snapshots, with `N/A` standing in for absence
    pub fn as_str(&self) -> &str {
        self.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::from_option(Some(value.to_string()))
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_option(raw))
    }
}

/// Whole months spent in a position
///
/// `Unknown` means a date range was present but could not be parsed,
/// `Absent` means the job carried no date range at all. Both are written as
/// `N/A`; a record tells them apart again from its date range on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Months {
    Known(i64),
    Unknown,
    #[default]
    Absent,
}

impl Months {
    pub fn known(&self) -> Option<i64> {
        match self {
            Self::Known(months) => Some(*months),
            _ => None,
        }
    }

    /// Contribution to additive totals: anything not known counts as zero
    pub fn or_zero(&self) -> i64 {
        self.known().unwrap_or(0)
    }
}

impl Serialize for Months {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(months) => serializer.serialize_i64(*months),
            Self::Unknown | Self::Absent => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMonths {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Months {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let months = match Option::<RawMonths>::deserialize(deserializer)? {
            Some(RawMonths::Number(months)) => Self::Known(months),
            Some(RawMonths::Text(text)) => text
                .trim()
                .parse::<i64>()
                .map(Self::Known)
                .unwrap_or(Self::Unknown),
            None => Self::Absent,
        };
        Ok(months)
    }
}

/// Skills attached to one job, unique and in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillSet {
    Listed(Vec<String>),
    /// No skill section was found for the job
    Absent,
}

impl SkillSet {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let listed = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();
        Self::Listed(listed)
    }

    pub fn names(&self) -> &[String] {
        match self {
            Self::Listed(names) => names,
            Self::Absent => &[],
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.names().iter().any(|name| name == skill)
    }
}

impl Serialize for SkillSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Listed(names) => names.serialize(serializer),
            Self::Absent => [NOT_AVAILABLE].serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Option::<Vec<String>>::deserialize(deserializer)?;
        Ok(match names {
            Some(names) if names.len() == 1 && names[0] == NOT_AVAILABLE => Self::Absent,
            Some(names) => Self::from_names(names),
            None => Self::Absent,
        })
    }
}

/// One position as persisted in the experience snapshot.
/// The employer is the key the record is grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredJobRecord")]
pub struct JobRecord {
    pub job_title: FieldValue,
    #[serde(rename = "date_range")]
    pub date_range_label: FieldValue,
    #[serde(default)]
    pub duration_months: Months,
    pub location: FieldValue,
    pub description: FieldValue,
    pub skills: SkillSet,
}

#[derive(Deserialize)]
struct StoredJobRecord {
    job_title: FieldValue,
    date_range: FieldValue,
    #[serde(default)]
    duration_months: Months,
    location: FieldValue,
    description: FieldValue,
    skills: SkillSet,
}

impl From<StoredJobRecord> for JobRecord {
    fn from(stored: StoredJobRecord) -> Self {
        let duration_months = match (&stored.date_range, stored.duration_months) {
            (FieldValue::Absent, Months::Unknown) => Months::Absent,
            (_, months) => months,
        };

        Self {
            job_title: stored.job_title,
            date_range_label: stored.date_range,
            duration_months,
            location: stored.location,
            description: stored.description,
            skills: stored.skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_sentinel() {
        assert_eq!(FieldValue::from_option(None), FieldValue::Absent);
        assert_eq!(FieldValue::from_option(Some(String::new())), FieldValue::Absent);
        assert_eq!(FieldValue::from("N/A"), FieldValue::Absent);
        assert_eq!(FieldValue::from("Engineer").as_str(), "Engineer");
        assert_eq!(FieldValue::Absent.to_string(), "N/A");
    }

    #[test]
    fn test_months_encoding() {
        assert_eq!(serde_json::to_string(&Months::Known(0)).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Months::Unknown).unwrap(), "\"N/A\"");
        assert_eq!(serde_json::to_string(&Months::Absent).unwrap(), "\"N/A\"");

        let known: Months = serde_json::from_str("17").unwrap();
        let unknown: Months = serde_json::from_str("\"N/A\"").unwrap();
        let absent: Months = serde_json::from_str("null").unwrap();
        assert_eq!(known, Months::Known(17));
        assert_eq!(unknown, Months::Unknown);
        assert_eq!(absent, Months::Absent);
        assert_eq!(unknown.or_zero(), 0);
    }

    #[test]
    fn test_skill_set_dedup_and_sentinel() {
        let skills = SkillSet::from_names(["Python", "SQL", "Python"]);
        assert_eq!(skills.names(), ["Python".to_string(), "SQL".to_string()]);
        assert!(skills.contains("SQL"));

        assert_eq!(serde_json::to_string(&SkillSet::Absent).unwrap(), "[\"N/A\"]");
        let decoded: SkillSet = serde_json::from_str("[\"N/A\"]").unwrap();
        assert!(decoded.is_absent());

        let empty: SkillSet = serde_json::from_str("[]").unwrap();
        assert_eq!(empty, SkillSet::Listed(Vec::new()));
    }

    #[test]
    fn test_job_record_wire_names() {
        let record = JobRecord {
            job_title: "Data Engineer".into(),
            date_range_label: "Jan 2020 - Jan 2021".into(),
            duration_months: Months::Known(12),
            location: FieldValue::Absent,
            description: FieldValue::Absent,
            skills: SkillSet::from_names(["Python"]),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["date_range"], "Jan 2020 - Jan 2021");
        assert_eq!(value["duration_months"], 12);
        assert_eq!(value["location"], "N/A");
        assert_eq!(value["skills"][0], "Python");

        let decoded: JobRecord = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_missing_date_range_reloads_as_absent() {
        let record = JobRecord {
            job_title: "Intern".into(),
            date_range_label: FieldValue::Absent,
            duration_months: Months::Absent,
            location: FieldValue::Absent,
            description: FieldValue::Absent,
            skills: SkillSet::Absent,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["date_range"], "N/A");
        assert_eq!(value["duration_months"], "N/A");

        let decoded: JobRecord = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.duration_months, Months::Absent);
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_unparseable_date_range_reloads_as_unknown() {
        let decoded: JobRecord = serde_json::from_value(serde_json::json!({
            "job_title": "Intern",
            "date_range": "Summer 2017",
            "duration_months": "N/A",
            "location": "N/A",
            "description": "N/A",
            "skills": ["N/A"]
        }))
        .unwrap();

        assert_eq!(decoded.duration_months, Months::Unknown);
        assert!(decoded.skills.is_absent());
    }
}
