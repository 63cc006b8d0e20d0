use anyhow::Result;
use clap::{Parser, Subcommand};
use skill_radar::app_log;
use skill_radar::core::FsOps;
use skill_radar::types::ExperienceByEmployer;
use skill_radar::{Pipeline, PipelineConfig};
use std::path::PathBuf;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "skill-radar")]
#[command(about = "Extract, aggregate and rank skills from an archived profile page")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pipeline configuration file
    #[arg(long, default_value = skill_radar::config::CONFIG_FILE)]
    config: PathBuf,

    /// Archived profile markup
    #[arg(long)]
    profile_html: Option<PathBuf>,

    /// Experience snapshot (employer → jobs)
    #[arg(long)]
    experience_json: Option<PathBuf>,

    /// Skill category configuration
    #[arg(long)]
    categories_json: Option<PathBuf>,

    /// Ranked view snapshot
    #[arg(long)]
    view_json: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Parse the profile into the experience snapshot
    Extract {
        /// Write the snapshot even when no experience section is found
        #[arg(long)]
        allow_empty: bool,
    },
    /// Rank the experience snapshot into the view snapshot
    Rank,
    /// Extract and rank in one go
    Run {
        #[arg(long)]
        allow_empty: bool,
    },
    /// Print the series of every configured chart
    Charts {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the word-cloud corpus
    Wordcloud {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn load_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = PipelineConfig::load_from(&cli.config, &PipelineConfig::get_environment())?;

    if let Some(path) = &cli.profile_html {
        config = config.with_profile_html(path.clone());
    }
    if let Some(path) = &cli.experience_json {
        config = config.with_experience_json(path.clone());
    }
    if let Some(path) = &cli.categories_json {
        config = config.with_categories_json(path.clone());
    }
    if let Some(path) = &cli.view_json {
        config = config.with_view_json(path.clone());
    }

    Ok(config)
}

fn extract(pipeline: &Pipeline, allow_empty: bool) -> Result<ExperienceByEmployer> {
    let experience = pipeline.extract_experience()?;
    if experience.is_empty() && !allow_empty {
        anyhow::bail!(
            "No experience section found in {}",
            pipeline.config().profile_html.display()
        );
    }
    pipeline.save_experience(&experience)?;
    Ok(experience)
}

fn emit(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => FsOps::write_file_safe(path, content),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    let config = load_config(&cli)?;
    let pipeline = Pipeline::new(config)?;

    match &cli.command {
        Command::Extract { allow_empty } => {
            let experience = extract(&pipeline, *allow_empty)?;
            app_log!(info, "Experience snapshot holds {} employers", experience.len());
        }
        Command::Rank => {
            pipeline.rank_snapshot()?;
        }
        Command::Run { allow_empty } => {
            let experience = extract(&pipeline, *allow_empty)?;
            let view = pipeline.rank(&experience)?;
            pipeline.save_view(&view)?;
        }
        Command::Charts { output } => {
            let series = pipeline.chart_series()?;
            emit(output.as_ref(), &FsOps::to_json(&series)?)?;
        }
        Command::Wordcloud { output } => {
            emit(output.as_ref(), &pipeline.wordcloud()?)?;
        }
    }

    Ok(())
}
