//! Fetches a league's FBref player tables, scores every player and writes the
//! ranked list as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use fantasy_stats::pipeline::SUMMARY_SIZE;
use fantasy_stats::{initialize_logging, FbrefScraper, PipelineConfig, StatsPipeline};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Scrape FBref player stats into a scored fantasy document
#[derive(Parser, Debug)]
#[command(name = "fetch-fbref")]
#[command(about = "Scrape FBref player stats into a scored fantasy football document")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output JSON path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Season label stamped on the document
    #[arg(long)]
    season: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (compact, pretty, json)
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("✗ {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    initialize_logging(&config.logging)?;

    let scraper = FbrefScraper::new(config.scraper.clone()).context("Failed to create scraper")?;
    let pipeline = StatsPipeline::new(scraper, config);

    let document = pipeline.run_to_file().await.context("Stats pipeline failed")?;

    println!("\nTop {SUMMARY_SIZE} Players by Fantasy Points:");
    println!("{:<4} {:<28} {:<22} {:<4} {:>6}", "Rank", "Name", "Club", "Pos", "Points");
    println!("{}", "-".repeat(68));

    for (index, player) in document.top_players(SUMMARY_SIZE).iter().enumerate() {
        println!(
            "{:<4} {:<28} {:<22} {:<4} {:>6}",
            index + 1,
            player.stats.name,
            player.stats.club,
            player.stats.pos,
            player.points
        );
    }

    println!("\nSummary:");
    println!("- Total players: {}", document.players.len());
    println!("- Written to: {}", pipeline.config().output_path.display());

    info!("Scraping completed successfully!");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config =
        PipelineConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }

    if let Some(season) = &cli.season {
        config.document.season = season.clone();
    }

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
