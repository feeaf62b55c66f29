use clap::{ArgGroup, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use colored::Colorize;
use log::info;

mod app;
mod config;
mod error;
mod llm;
mod review;
mod ui;

use error::ReviewError;
use review::ReviewRequest;
use ui::display::{format_error, format_success};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").args(["input", "input_string"])))]
struct Cli {
    /// Path to a JSON input file with 'code_snippet' and 'review_comments'
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Inline JSON input string
    #[arg(short = 's', long)]
    input_string: Option<String>,

    /// Output Markdown file (default: print to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Gemini API key (or set GEMINI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Turn on verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the application
    Config {
        /// Set the Gemini API endpoint URL
        #[arg(long)]
        api_url: Option<String>,

        /// Set the API key for Gemini
        #[arg(long)]
        api_key: Option<String>,

        /// Set the Gemini model to use
        #[arg(long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", format_error("Error:").bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("empathetic-reviewer/config.toml");

    if let Some(Commands::Config { api_url, api_key, model }) = &cli.command {
        config::update_config(&config_path, api_url, api_key, model)?;
        println!("Configuration updated successfully.");
        return Ok(());
    }

    let mut config = config::load_or_create_config(&config_path)?;
    config.llm.api_key = config::resolve_api_key(cli.api_key.clone(), &config)?;

    let request = match (&cli.input, &cli.input_string) {
        (Some(path), _) => ReviewRequest::from_file(path)?,
        (None, Some(raw)) => ReviewRequest::from_json_str(raw)?,
        (None, None) => return Err(ReviewError::InputMissing.into()),
    };

    let app = app::App::new(config)?;
    let markdown = app.review(&request).await;

    match &cli.output {
        Some(path) => {
            fs::write(path, &markdown).map_err(|source| ReviewError::OutputWriteFailure {
                path: path.clone(),
                source,
            })?;
            info!("Report written to {}", path.display());
            if cli.verbose {
                println!(
                    "{} Output written to {}",
                    format_success("✓"),
                    path.display()
                );
            }
        }
        None => println!("{}", markdown),
    }

    Ok(())
}
