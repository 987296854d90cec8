//! Reelmatch CLI
//!
//! Command-line interface for the movie recommender.

mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use reelmatch_core::{
    Corpus, FeatureFields, RecommendError, Recommender, RecommenderConfig,
};

/// Environment variable naming the catalogue file
const ENV_DATA: &str = "REELMATCH_DATA";

/// Catalogue file used when neither `--data` nor `REELMATCH_DATA` is set
const DEFAULT_DATA_FILE: &str = "movies.csv";

/// Reelmatch - movie recommendations from a CSV catalogue
#[derive(Parser)]
#[command(name = "reelmatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Movie recommendations from a CSV catalogue")]
#[command(long_about = "Reelmatch recommends movies from a CSV catalogue.\n\nAsk for titles similar to one you like, search by free text, or make a keyword request such as \"films after 2000\".")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalogue CSV file (default: $REELMATCH_DATA, then ./movies.csv)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Fields used for similarity: title-genre or genre-director-overview
    #[arg(long, global = true)]
    features: Option<FeatureFields>,

    /// Number of results to show
    #[arg(long, global = true)]
    top: Option<usize>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Movies similar to a title in the catalogue
    Similar {
        /// Exact title (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Movies most similar to free text
    Search {
        /// Words to match against titles and genres
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Answer a keyword request ("comedy", "films after 2010", "movies by ...")
    Ask {
        /// The request
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Interactive keyword requests, one per line
    Chat,

    /// Show catalogue statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();

    let recommender = load_recommender(&cli)?;

    match cli.command {
        Commands::Similar { title } => run_similar(&recommender, &title.join(" "), cli.json),
        Commands::Search { text } => run_search(&recommender, &text.join(" "), cli.json),
        Commands::Ask { text } => run_ask(&recommender, &text.join(" "), cli.json),
        Commands::Chat => run_chat(&recommender, cli.json),
        Commands::Stats => run_stats(&recommender, cli.json),
    }
}

/// `--data`, then `REELMATCH_DATA`, then `movies.csv` in the working directory
fn resolve_data_path(flag: Option<PathBuf>, env: Option<std::ffi::OsString>) -> PathBuf {
    flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

/// Environment config, then command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<RecommenderConfig> {
    let mut config = RecommenderConfig::from_env().context("Invalid REELMATCH_* environment")?;
    if let Some(features) = cli.features {
        config = config.with_features(features);
    }
    if let Some(top) = cli.top {
        config = config.with_top_n(top);
    }
    Ok(config)
}

fn load_recommender(cli: &Cli) -> anyhow::Result<Recommender> {
    let path = resolve_data_path(cli.data.clone(), std::env::var_os(ENV_DATA));
    debug!(path = %path.display(), "Resolved catalogue path");

    let corpus = Corpus::from_path(&path)
        .with_context(|| format!("Failed to load catalogue from {}", path.display()))?;
    let config = build_config(cli)?;

    let recommender = Recommender::new(corpus, config).context("Failed to build recommender")?;
    info!(records = recommender.corpus().len(), "Catalogue ready");
    Ok(recommender)
}

/// Run similar command
fn run_similar(recommender: &Recommender, title: &str, json: bool) -> anyhow::Result<()> {
    match recommender.similar_to_title(title, recommender.top_n()) {
        Ok(results) => {
            let heading = format!("Movies similar to \"{}\"", title.trim());
            render::recommendations(&heading, &results, json)
        }
        Err(RecommendError::TitleNotFound(_)) => {
            if json {
                render::json(&Vec::<reelmatch_core::Recommendation>::new())
            } else {
                println!("{}", render::NO_RESULTS_MESSAGE.yellow());
                Ok(())
            }
        }
        Err(e) => Err(e.into()),
    }
}

/// Run search command
fn run_search(recommender: &Recommender, text: &str, json: bool) -> anyhow::Result<()> {
    let results = recommender.search(text, recommender.top_n())?;
    let heading = format!("Best matches for \"{}\"", text.trim());
    render::recommendations(&heading, &results, json)
}

/// Run ask command
fn run_ask(recommender: &Recommender, text: &str, json: bool) -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let response = recommender.respond(text, &mut rng);
    render::response(&response, json)
}

/// Run chat loop until an empty line, `quit` or end of input
fn run_chat(recommender: &Recommender, json: bool) -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if !json {
        println!("{}", "=== Reelmatch ===".cyan().bold());
        println!("{}", "Ask for movies; an empty line or 'quit' exits.".dimmed());
    }

    loop {
        if !json {
            print!("{} ", ">".green().bold());
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit")
        {
            break;
        }

        let response = recommender.respond(input, &mut rng);
        if json {
            println!("{}", serde_json::to_string(&response)?);
        } else {
            render::response(&response, false)?;
            println!();
        }
    }

    Ok(())
}

/// Run stats command
fn run_stats(recommender: &Recommender, json: bool) -> anyhow::Result<()> {
    let stats = recommender.stats();
    if json {
        return render::json(&stats);
    }

    println!("{}", "=== Reelmatch Catalogue Statistics ===".cyan().bold());
    println!();
    println!("{}: {}", "Total Movies".white().bold(), stats.total_records);
    println!("{}: {}", "With Rating".white().bold(), stats.rated_records);
    println!("{}: {}", "With Year".white().bold(), stats.dated_records);
    if let Some(avg) = stats.average_rating {
        println!("{}: {:.2}", "Average Rating".white().bold(), avg);
    }
    if let (Some(first), Some(last)) = (stats.earliest_year, stats.latest_year) {
        println!("{}: {} - {}", "Years".white().bold(), first, last);
    }
    println!("{}: {}", "Vocabulary Size".white().bold(), stats.vocabulary_size);
    println!(
        "{}: {}",
        "Features".white().bold(),
        recommender.config().features
    );

    Ok(())
}
