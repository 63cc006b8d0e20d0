// src/config.rs
use crate::analysis::{default_charts, ChartSpec, GradeScale};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "skill-radar.yaml";

fn default_profile_html() -> PathBuf {
    PathBuf::from("files/linkedin_profile.html")
}

fn default_experience_json() -> PathBuf {
    PathBuf::from("files/linkedin_experience.json")
}

fn default_categories_json() -> PathBuf {
    PathBuf::from("files/skill_category.json")
}

fn default_view_json() -> PathBuf {
    PathBuf::from("files/view_experience.json")
}

/// Paths and tables for one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_profile_html")]
    pub profile_html: PathBuf,
    #[serde(default = "default_experience_json")]
    pub experience_json: PathBuf,
    #[serde(default = "default_categories_json")]
    pub categories_json: PathBuf,
    #[serde(default = "default_view_json")]
    pub view_json: PathBuf,
    #[serde(default)]
    pub grade_scale: GradeScale,
    #[serde(default = "default_charts")]
    pub charts: Vec<ChartSpec>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: PipelineConfig,
    production: Option<PipelineConfig>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            profile_html: default_profile_html(),
            experience_json: default_experience_json(),
            categories_json: default_categories_json(),
            view_json: default_view_json(),
            grade_scale: GradeScale::default(),
            charts: default_charts(),
        }
    }
}

impl PipelineConfig {
    /// Loads `skill-radar.yaml` from the current directory, falling back to
    /// built-in defaults when the file does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE), &Self::get_environment())
    }

    pub fn get_environment() -> String {
        std::env::var("SKILL_RADAR_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    pub fn load_from(path: &Path, environment: &str) -> Result<Self> {
        app_log!(info, "Loading configuration for environment: {}", environment);

        let config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::parse(&content, environment)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            app_log!(info, "{} not found, using defaults", path.display());
            Self::default()
        };

        config.resolved()
    }

    fn parse(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        match environment {
            "production" => file
                .production
                .ok_or_else(|| anyhow::anyhow!("No 'production' section in configuration")),
            _ => Ok(file.local),
        }
    }

    fn resolved(self) -> Result<Self> {
        Ok(Self {
            profile_html: Self::resolve_path(&self.profile_html)?,
            experience_json: Self::resolve_path(&self.experience_json)?,
            categories_json: Self::resolve_path(&self.categories_json)?,
            view_json: Self::resolve_path(&self.view_json)?,
            ..self
        })
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }

    pub fn with_profile_html(mut self, path: PathBuf) -> Self {
        self.profile_html = path;
        self
    }

    pub fn with_experience_json(mut self, path: PathBuf) -> Self {
        self.experience_json = path;
        self
    }

    pub fn with_categories_json(mut self, path: PathBuf) -> Self {
        self.categories_json = path;
        self
    }

    pub fn with_view_json(mut self, path: PathBuf) -> Self {
        self.view_json = path;
        self
    }

    pub fn with_grade_scale(mut self, scale: GradeScale) -> Self {
        self.grade_scale = scale;
        self
    }
}
