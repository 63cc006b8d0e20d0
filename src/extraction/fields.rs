// src/extraction/fields.rs
use super::rules::{FieldRule, SelectorRule};
use super::skills::SkillNormalizer;
use crate::types::{FieldValue, SkillSet};
use anyhow::Result;
use scraper::{ElementRef, Html};
use tracing::debug;

/// Everything recovered from one job fragment, before date resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub company: FieldValue,
    pub job_title: FieldValue,
    pub date_range: FieldValue,
    pub location: FieldValue,
    pub description: FieldValue,
    pub skills: SkillSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    Title,
    Company,
    DateRange,
    Location,
    Description,
}

/// Runs one rule per field over a job fragment. A rule that finds nothing
/// leaves its field absent without affecting the others.
pub struct FieldExtractor {
    title: Box<dyn FieldRule>,
    company: Box<dyn FieldRule>,
    date_range: Box<dyn FieldRule>,
    location: Box<dyn FieldRule>,
    description: Box<dyn FieldRule>,
    skills: SkillNormalizer,
}

impl FieldExtractor {
    /// Rules for the archived LinkedIn profile markup
    pub fn linkedin() -> Result<Self> {
        let meta = "span.t-14.t-normal.t-black--light";

        Ok(Self {
            title: Box::new(SelectorRule::new(
                "job_title",
                r#"div.mr1.t-bold span[aria-hidden="true"]"#,
            )?),
            company: Box::new(
                SelectorRule::new("company", "span.t-14.t-normal span")?.before(" · "),
            ),
            date_range: Box::new(SelectorRule::new("date_range", meta)?.within("span")?),
            location: Box::new(SelectorRule::new("location", meta)?.nth(1).within("span")?),
            description: Box::new(SelectorRule::new(
                "description",
                r#"li.pvs-list__item--with-top-padding span[aria-hidden="true"]"#,
            )?),
            skills: SkillNormalizer::new()?,
        })
    }

    /// Swaps the rule for one field
    pub fn with_rule(mut self, field: JobField, rule: Box<dyn FieldRule>) -> Self {
        match field {
            JobField::Title => self.title = rule,
            JobField::Company => self.company = rule,
            JobField::DateRange => self.date_range = rule,
            JobField::Location => self.location = rule,
            JobField::Description => self.description = rule,
        }
        self
    }

    pub fn with_skills(mut self, skills: SkillNormalizer) -> Self {
        self.skills = skills;
        self
    }

    pub fn extract(&self, fragment: ElementRef<'_>) -> JobDraft {
        JobDraft {
            company: Self::apply(self.company.as_ref(), fragment),
            job_title: Self::apply(self.title.as_ref(), fragment),
            date_range: Self::apply(self.date_range.as_ref(), fragment),
            location: Self::apply(self.location.as_ref(), fragment),
            description: Self::apply(self.description.as_ref(), fragment),
            skills: self.skills.normalize(fragment),
        }
    }

    /// Parses standalone markup for one job and extracts it
    pub fn extract_markup(&self, markup: &str) -> JobDraft {
        let html = Html::parse_fragment(markup);
        self.extract(html.root_element())
    }

    fn apply(rule: &dyn FieldRule, fragment: ElementRef<'_>) -> FieldValue {
        let value = FieldValue::from_option(rule.extract(fragment));
        if !value.is_present() {
            debug!("Rule '{}' found nothing", rule.name());
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = r#"
        <li class="pvs-list__paged-list-item">
            <div class="mr1 t-bold"><span aria-hidden="true">Data Engineer</span></div>
            <span class="t-14 t-normal"><span aria-hidden="true">Acme Corp · Full-time</span></span>
            <span class="t-14 t-normal t-black--light"><span aria-hidden="true">Jan 2020 - Present · 1 yr 6 mos</span></span>
            <span class="t-14 t-normal t-black--light"><span aria-hidden="true">Berlin, Germany</span></span>
            <ul>
                <li class="pvs-list__item--with-top-padding"><span aria-hidden="true">Built the warehouse.</span></li>
                <li><span aria-hidden="true">Skills: Python · SQL</span></li>
            </ul>
        </li>
    "#;

    #[test]
    fn test_extracts_every_field() {
        let draft = FieldExtractor::linkedin().unwrap().extract_markup(JOB);

        assert_eq!(draft.job_title.as_str(), "Data Engineer");
        assert_eq!(draft.company.as_str(), "Acme Corp");
        assert_eq!(draft.date_range.as_str(), "Jan 2020 - Present · 1 yr 6 mos");
        assert_eq!(draft.location.as_str(), "Berlin, Germany");
        assert_eq!(draft.description.as_str(), "Built the warehouse.");
        assert_eq!(draft.skills.names(), ["Python".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn test_missing_everything_is_absent() {
        let draft = FieldExtractor::linkedin()
            .unwrap()
            .extract_markup(r#"<li class="pvs-list__paged-list-item"><p>Nothing here</p></li>"#);

        assert_eq!(draft.job_title, FieldValue::Absent);
        assert_eq!(draft.company, FieldValue::Absent);
        assert_eq!(draft.date_range, FieldValue::Absent);
        assert_eq!(draft.location, FieldValue::Absent);
        assert_eq!(draft.description, FieldValue::Absent);
        assert_eq!(draft.skills, SkillSet::Absent);
    }

    #[test]
    fn test_one_missing_field_leaves_others() {
        let markup = r#"
            <li>
                <div class="mr1 t-bold"><span aria-hidden="true">Analyst</span></div>
                <span class="t-14 t-normal t-black--light"><span>Mar 2019 - Mar 2019</span></span>
            </li>
        "#;
        let draft = FieldExtractor::linkedin().unwrap().extract_markup(markup);

        assert_eq!(draft.job_title.as_str(), "Analyst");
        assert_eq!(draft.date_range.as_str(), "Mar 2019 - Mar 2019");
        assert_eq!(draft.location, FieldValue::Absent);
    }

    struct Constant(&'static str);

    impl FieldRule for Constant {
        fn name(&self) -> &'static str {
            "constant"
        }

        fn extract(&self, _fragment: ElementRef<'_>) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[test]
    fn test_rule_can_be_replaced() {
        let extractor = FieldExtractor::linkedin()
            .unwrap()
            .with_rule(JobField::Company, Box::new(Constant("Initech")));
        let draft = extractor.extract_markup(JOB);

        assert_eq!(draft.company.as_str(), "Initech");
        assert_eq!(draft.job_title.as_str(), "Data Engineer");
    }
}
