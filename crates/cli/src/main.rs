use anyhow::{anyhow, Context, Result};
use catalog::{Catalog, Movie};
use clap::{Parser, Subcommand};
use colored::Colorize;
use preferences::PreferenceState;
use server::{ChatOrchestrator, EngineConfig, SessionStore, Turn};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Messages the benchmark's simulated users pick from
const BENCHMARK_SCRIPT: [&str; 10] = [
    "hi",
    "I love action movies",
    "I like funny stuff",
    "I don't like horror",
    "something recent please",
    "any old classics?",
    "I like movies from 1990 to 2005",
    "I enjoyed 'The Matrix'",
    "I hate romantic films",
    "more",
];

/// reel-chat - Conversational Movie Recommender
#[derive(Parser)]
#[command(name = "reel-chat")]
#[command(about = "Chat your way to a movie recommendation", long_about = None)]
struct Cli {
    /// Movie catalog CSV (movie_id,title,year,genres,popularity). Uses the built-in sample when absent.
    #[arg(short, long, env = "REEL_CHAT_CATALOG")]
    catalog: Option<PathBuf>,

    /// Number of recommendations per turn
    #[arg(long, default_value = "5")]
    top_k: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session on stdin (/reset, /state, /quit)
    Chat {
        /// Session id to chat as
        #[arg(long, default_value = "local")]
        user: String,
    },

    /// Run a single turn on a fresh session
    Ask {
        /// The chat message
        #[arg(long)]
        message: String,

        /// Print the turn as JSON
        #[arg(long)]
        json: bool,

        /// Show each recommendation's score breakdown
        #[arg(long)]
        explain: bool,
    },

    /// List the most popular movies (the cold-start recommendation)
    Popular {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Write the loaded catalog as CSV
    Export {
        #[arg(long)]
        out: PathBuf,
    },

    /// Simulate concurrent users chatting against one session store
    Benchmark {
        /// Number of simulated users
        #[arg(long, default_value = "100")]
        users: usize,

        /// Turns per user
        #[arg(long, default_value = "10")]
        turns: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Arc::new(load_catalog(cli.catalog.as_deref())?);
    info!("Loaded {} movies in {:?}", catalog.len(), start.elapsed());

    let config = EngineConfig::default().with_top_k(cli.top_k);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Chat { user } => handle_chat(catalog, config, &user)?,
        Commands::Ask {
            message,
            json,
            explain,
        } => handle_ask(catalog, config, &message, json, explain)?,
        Commands::Popular { limit } => handle_popular(catalog, config, limit)?,
        Commands::Search { title } => handle_search(&catalog, &title)?,
        Commands::Export { out } => handle_export(&catalog, &out)?,
        Commands::Benchmark { users, turns } => {
            handle_benchmark(catalog, config, users, turns).await?
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            println!("Loading catalog from {}...", path.display());
            let catalog = Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            println!("{} Loaded {} movies", "✓".green(), catalog.len());
            Ok(catalog)
        }
        None => Catalog::sample().context("Built-in sample catalog is invalid"),
    }
}

/// Handle the 'chat' command
fn handle_chat(catalog: Arc<Catalog>, config: EngineConfig, user: &str) -> Result<()> {
    let orchestrator = ChatOrchestrator::new(catalog, config)?;
    let store = SessionStore::new();

    println!(
        "{}",
        "Tell me what you like. /reset starts over, /state shows what I know, /quit exits."
            .dimmed()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{} ", "you>".bold().cyan());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "/quit" | "/exit" => break,
            "/reset" => {
                orchestrator.reset(&store, user);
                println!("{}", "Preferences cleared.".yellow());
            }
            "/state" => {
                let state = store.snapshot(user).unwrap_or_default();
                println!("{}", serde_json::to_string_pretty(&state)?);
            }
            message => {
                let turn = orchestrator.chat(&store, user, message);
                println!("{} {}\n", "bot>".bold().green(), turn.response);
            }
        }
    }

    Ok(())
}

/// Handle the 'ask' command
fn handle_ask(
    catalog: Arc<Catalog>,
    config: EngineConfig,
    message: &str,
    json: bool,
    explain: bool,
) -> Result<()> {
    let orchestrator = ChatOrchestrator::new(catalog, config)?;
    let mut state = PreferenceState::new();

    let turn = orchestrator.handle(message, &mut state);

    if json {
        println!("{}", serde_json::to_string_pretty(&turn)?);
    } else {
        print_turn(&turn);
    }

    if explain {
        print_explanations(&orchestrator, &turn, state);
    }
    Ok(())
}

/// Handle the 'popular' command
fn handle_popular(catalog: Arc<Catalog>, config: EngineConfig, limit: usize) -> Result<()> {
    let orchestrator = ChatOrchestrator::new(catalog, config)?;
    let movies = orchestrator.recommender().popular(limit);

    println!("{}", "Most popular movies:".bold().blue());
    for (rank, movie) in movies.into_iter().enumerate() {
        print_movie(rank + 1, movie);
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, title: &str) -> Result<()> {
    let matches = catalog.find_titles(title);
    if matches.is_empty() {
        println!("{}", format!("No movie title contains '{}'", title).yellow());
        return Ok(());
    }

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    for movie in matches.iter().take(20) {
        println!(
            "{}: {} ({}) [{}] popularity {:.1}",
            movie.id,
            movie.title,
            movie.year,
            movie.genres.join(", "),
            movie.popularity
        );
    }
    Ok(())
}

/// Handle the 'export' command
fn handle_export(catalog: &Catalog, out: &Path) -> Result<()> {
    catalog
        .write_csv(out)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    println!(
        "{} Wrote {} movies to {}",
        "✓".green(),
        catalog.len(),
        out.display()
    );
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    catalog: Arc<Catalog>,
    config: EngineConfig,
    users: usize,
    turns: usize,
) -> Result<()> {
    if users == 0 || turns == 0 {
        return Err(anyhow!("Benchmark needs at least one user and one turn"));
    }

    let orchestrator = ChatOrchestrator::new(catalog, config)?;
    let store = Arc::new(SessionStore::new());

    // Each simulated user runs its turns on a blocking thread
    let wall = Instant::now();
    let mut handles = vec![];
    for user in 0..users {
        let orchestrator = orchestrator.clone();
        let store = store.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let user_id = format!("bench-{}", user);
            let mut timings = Vec::with_capacity(turns);
            for _ in 0..turns {
                let pick = rand::random::<u32>() as usize % BENCHMARK_SCRIPT.len();
                let start = Instant::now();
                orchestrator.chat(&store, &user_id, BENCHMARK_SCRIPT[pick]);
                timings.push(start.elapsed());
            }
            timings
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        timings.extend(handle.await.context("Benchmark task panicked")?);
    }
    let wall_time = wall.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = timings.len() as f32 / wall_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Sessions: {}", store.len());
    println!("Turns: {}", timings.len());
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} turns/second", throughput);

    Ok(())
}

fn print_turn(turn: &Turn) {
    println!("{}", turn.response);
}

fn print_movie(rank: usize, movie: &Movie) {
    println!(
        "{}. {} ({}) [{}] - popularity {:.1}",
        rank.to_string().green(),
        movie.title,
        movie.year,
        movie.genres.join(", "),
        movie.popularity
    );
}

/// Per-signal score breakdown for each recommended movie
fn print_explanations(orchestrator: &ChatOrchestrator, turn: &Turn, mut state: PreferenceState) {
    println!();
    if state.is_cold_start() {
        println!("{}", "No positive preferences yet: ranked by popularity.".dimmed());
        return;
    }

    // Score as the ranker saw it, before this turn's picks were recorded
    state.set_last_recommendations(Vec::new());
    let scorer = orchestrator.recommender().scorer();
    for (rank, movie) in turn.recommendations.iter().enumerate() {
        print_movie(rank + 1, movie);
        for (signal, contribution) in scorer.explain(movie, &state) {
            if contribution != 0.0 {
                println!("   {:<28} {:+.1}", signal, contribution);
            }
        }
        println!("   {:<28} {:+.1}", "total", scorer.score(movie, &state));
    }
}
