//! Flyer Studio - Terminal flyer generator for Little Founders
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use flyer_app::config;
use flyer_core::{Category, SocialFormat, TargetAudience};
use flyer_genai::GeminiClient;
use flyer_studio::HeadlessOptions;
use tracing::info;

/// Flyer Studio - social media flyers for Little Founders
#[derive(Parser, Debug)]
#[command(name = "flyer-studio")]
#[command(about = "Generate Little Founders social media flyers", long_about = None)]
struct Args {
    /// Directory holding .flyer/config.toml and the export folder
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write a commented .flyer/config.toml and exit
    #[arg(long)]
    init_config: bool,

    /// Run one generation with JSON output, no TUI
    #[arg(long)]
    headless: bool,

    /// Audience (headless): kids | parents
    #[arg(long, default_value = "kids")]
    target: TargetAudience,

    /// Content style (headless): tip | challenge | curiosity
    #[arg(long, default_value = "tip")]
    category: Category,

    /// Output format (headless): instagram | facebook | tiktok
    #[arg(long, default_value = "instagram")]
    format: SocialFormat,

    /// Free-text request (headless)
    #[arg(long, default_value = "")]
    prompt: String,

    /// Save the flyer to the export folder after generating (headless)
    #[arg(long)]
    export: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    flyer_core::logging::init().wrap_err("failed to initialize logging")?;

    let project_path = match args.config_dir {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    if args.init_config {
        config::init_config_dir(&project_path)?;
        eprintln!(
            "Created {}",
            project_path
                .join(config::FLYER_DIR)
                .join(config::CONFIG_FILENAME)
                .display()
        );
        return Ok(());
    }

    let settings = config::load_settings(&project_path);
    info!(
        "Loaded settings: text_model={}, image_model={}",
        settings.service.text_model, settings.service.image_model
    );

    let client = GeminiClient::new(config::to_gemini_config(&settings.service))
        .wrap_err("failed to create Gemini client")?;

    if args.headless {
        let options = HeadlessOptions {
            target: args.target,
            category: args.category,
            format: args.format,
            prompt: args.prompt,
            export: args.export,
        };
        let success = flyer_studio::run_headless(project_path, settings, client, options).await?;
        if !success {
            std::process::exit(1);
        }
        return Ok(());
    }

    flyer_studio::run(project_path, settings, client).await?;
    Ok(())
}
