// src/extraction/experience.rs
use super::date_range::{Clock, DateRangeResolver, SystemClock};
use super::fields::FieldExtractor;
use super::rules::parse_selector;
use crate::types::{ExperienceByEmployer, JobRecord};
use anyhow::Result;
use scraper::{ElementRef, Html, Selector};

/// Document → main region → experience card → job items
pub const EXPERIENCE_ITEMS: &str =
    "main.scaffold-layout__main section.artdeco-card li.pvs-list__paged-list-item";

pub struct ExperienceExtractor<C: Clock = SystemClock> {
    items: Selector,
    fields: FieldExtractor,
    dates: DateRangeResolver<C>,
}

impl ExperienceExtractor<SystemClock> {
    pub fn new() -> Result<Self> {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> ExperienceExtractor<C> {
    pub fn with_clock(clock: C) -> Result<Self> {
        Ok(Self {
            items: parse_selector(EXPERIENCE_ITEMS)?,
            fields: FieldExtractor::linkedin()?,
            dates: DateRangeResolver::new(clock),
        })
    }

    pub fn with_fields(mut self, fields: FieldExtractor) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_items(mut self, selector: &str) -> Result<Self> {
        self.items = parse_selector(selector)?;
        Ok(self)
    }

    pub fn extract(&self, html: &str) -> ExperienceByEmployer {
        let document = Html::parse_document(html);
        self.extract_document(&document)
    }

    /// Groups every job item of the document under its employer.
    /// A page without an experience section yields an empty map.
    pub fn extract_document(&self, document: &Html) -> ExperienceByEmployer {
        let mut experience = ExperienceByEmployer::new();
        let mut jobs = 0usize;

        for item in document.select(&self.items) {
            let (company, record) = self.build_record(item);
            experience.entry(company).or_default().push(record);
            jobs += 1;
        }

        if jobs == 0 {
            app_log!(warn, "No experience section found in document");
        } else {
            app_log!(
                info,
                "Extracted {} jobs across {} employers",
                jobs,
                experience.len()
            );
        }

        experience
    }

    /// Builds the record for one job and returns it with its employer
    pub fn build_record(&self, fragment: ElementRef<'_>) -> (String, JobRecord) {
        let draft = self.fields.extract(fragment);
        let (date_range_label, duration_months) = self.dates.resolve_field(&draft.date_range);

        let record = JobRecord {
            job_title: draft.job_title,
            date_range_label,
            duration_months,
            location: draft.location,
            description: draft.description,
            skills: draft.skills,
        };

        (draft.company.as_str().to_string(), record)
    }
}
