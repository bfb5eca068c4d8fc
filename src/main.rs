// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use bookpedia::{
    CandidateSelector, Config, ConsoleSelector, FixedSelector, LookupPipeline,
};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "bookpedia")]
#[command(version = "0.1.0")]
#[command(about = "Book metadata lookup against the DBpedia knowledge graph", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a book title and print its metadata summary
    Lookup {
        /// Book title to search for
        title: String,

        /// Pick this candidate index instead of prompting interactively
        #[arg(long, value_name = "IDX")]
        select: Option<usize>,
    },

    /// Report which configured lookup endpoint is currently reachable
    Probe,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    bookpedia::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Lookup { title, select } => {
            cmd_lookup(config, &title, select).await?;
        }
        Commands::Probe => {
            cmd_probe(config).await?;
        }
    }

    Ok(())
}

async fn cmd_lookup(config: Config, title: &str, select: Option<usize>) -> Result<()> {
    info!("Looking up: {}", title);

    let pipeline = LookupPipeline::new(config);

    let selector: Box<dyn CandidateSelector> = match select {
        Some(index) => Box::new(FixedSelector { index }),
        None => Box::new(ConsoleSelector),
    };

    pipeline.run(title, selector.as_ref()).await?;

    Ok(())
}

async fn cmd_probe(config: Config) -> Result<()> {
    info!("Probing configured lookup endpoints");

    let pipeline = LookupPipeline::new(config);
    let base_url = pipeline.probe().await?;

    println!("Functioning lookup endpoint: {}", base_url);

    Ok(())
}
