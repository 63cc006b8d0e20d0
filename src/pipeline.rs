// src/pipeline.rs
//! The linear run: markup → experience snapshot → ranked view snapshot

use crate::analysis::{
    wordcloud_corpus, CategoryConfig, CategoryMap, ChartSeries, RankedViewBuilder,
};
use crate::config::PipelineConfig;
use crate::core::FsOps;
use crate::extraction::{Clock, ExperienceExtractor, SystemClock};
use crate::types::{ExperienceByEmployer, RankedView};
use anyhow::Result;
use std::path::Path;

pub struct Pipeline<C: Clock = SystemClock> {
    config: PipelineConfig,
    extractor: ExperienceExtractor<C>,
}

impl Pipeline<SystemClock> {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Pipeline<C> {
    pub fn with_clock(config: PipelineConfig, clock: C) -> Result<Self> {
        Ok(Self {
            config,
            extractor: ExperienceExtractor::with_clock(clock)?,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Reads the archived profile and groups its jobs by employer.
    /// An empty result is returned as-is; callers decide if that is an error.
    pub fn extract_experience(&self) -> Result<ExperienceByEmployer> {
        let html = FsOps::read_file_safe(&self.config.profile_html)?;
        app_log!(
            info,
            "Parsing profile {} ({} bytes)",
            self.config.profile_html.display(),
            html.len()
        );
        Ok(self.extractor.extract(&html))
    }

    pub fn save_experience(&self, experience: &ExperienceByEmployer) -> Result<()> {
        FsOps::write_json(&self.config.experience_json, experience)
    }

    pub fn load_experience(&self) -> Result<ExperienceByEmployer> {
        FsOps::read_json(&self.config.experience_json)
    }

    pub fn load_categories(&self) -> Result<CategoryMap> {
        let config: CategoryConfig = FsOps::read_json(&self.config.categories_json)?;
        let categories = CategoryMap::from_config(&config);
        app_log!(
            info,
            "Loaded {} categorized skills from {}",
            categories.len(),
            self.config.categories_json.display()
        );
        Ok(categories)
    }

    pub fn rank(&self, experience: &ExperienceByEmployer) -> Result<RankedView> {
        let categories = self.load_categories()?;
        let view = RankedViewBuilder::new(&categories, &self.config.grade_scale).build(experience);
        app_log!(info, "Ranked {} skills", view.len());
        Ok(view)
    }

    pub fn save_view(&self, view: &RankedView) -> Result<()> {
        save_view(&self.config.view_json, view)
    }

    pub fn load_view(&self) -> Result<RankedView> {
        load_view(&self.config.view_json)
    }

    /// Snapshot-to-snapshot ranking stage
    pub fn rank_snapshot(&self) -> Result<RankedView> {
        let experience = self.load_experience()?;
        let view = self.rank(&experience)?;
        self.save_view(&view)?;
        Ok(view)
    }

    pub fn chart_series(&self) -> Result<Vec<ChartSeries>> {
        let view = self.load_view()?;
        Ok(self
            .config
            .charts
            .iter()
            .map(|chart| chart.series(&view))
            .collect())
    }

    pub fn wordcloud(&self) -> Result<String> {
        Ok(wordcloud_corpus(&self.load_view()?))
    }
}

pub fn save_view(path: &Path, view: &RankedView) -> Result<()> {
    FsOps::write_json(path, view)
}

pub fn load_view(path: &Path) -> Result<RankedView> {
    FsOps::read_json(path)
}
