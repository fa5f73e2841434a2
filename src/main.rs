mod config;
mod db;
mod extract;
mod fetch;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::Settings;

#[derive(Parser)]
#[command(
    name = "question_ingest",
    about = "Load programming questions from the HF datasets server into SQLite"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the question/iopair tables
    Init,
    /// Fetch and extract one page without persisting, print a preview
    Preview {
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = 100)]
        length: u32,
    },
    /// Fetch one page, extract, persist, summarize
    Run {
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = 100)]
        length: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::load()?;
    info!(?settings, "settings loaded");

    match cli.command {
        Commands::Init => {
            let conn = db::connect(&settings.db_path)?;
            db::init_schema(&conn)?;
            println!("Schema ready at {}", settings.db_path);
            Ok(())
        }
        Commands::Preview { offset, length } => preview(&settings, offset, length),
        Commands::Run { offset, length } => run(&settings, offset, length),
    }
}

/// One pass: connect, fetch a page, extract, persist record by record.
/// The connection lives for this scope only and closes on every exit path.
fn run(settings: &Settings, offset: u32, length: u32) -> Result<()> {
    println!("Connecting to database...");
    let conn = db::connect(&settings.db_path)?;
    println!("Connected: {}\n", settings.db_path);

    println!("Fetching dataset page (offset={}, length={})...", offset, length);
    let client = reqwest::blocking::Client::new();
    let page = fetch::fetch_rows_page(&client, settings, offset, length)?;

    let questions = extract::extract_questions(&page);
    println!("Extracted {} questions with IO pairs\n", questions.len());
    if questions.is_empty() {
        return Ok(());
    }

    let stats = db::insert_batch(&conn, &questions);
    stats.print();
    Ok(())
}

fn preview(settings: &Settings, offset: u32, length: u32) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let page = fetch::fetch_rows_page(&client, settings, offset, length)?;
    let questions = extract::extract_questions(&page);
    println!("Extracted {} questions with IO pairs", questions.len());

    let Some(first) = questions.first() else {
        return Ok(());
    };
    println!("\n=== First Question Preview ===");
    println!("Difficulty: {}", first.difficulty);
    println!("Topics:     {}", first.topics);
    println!("Function:   {}", first.function_name);
    println!("IO Pairs:   {}", first.input_output_pairs.len());
    Ok(())
}
