use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use questlog::config::Config;
use questlog::models::{coerce_xp, Category};
use questlog::store::SqliteStore;
use questlog::tracker::Tracker;
use questlog::{api, render};

#[derive(Parser)]
#[command(name = "qlog")]
#[command(about = "Gamified quest log: earn XP, level up")]
struct Cli {
    /// Path to the quest database (overrides QUESTLOG_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show level, XP and every quest
    Status,
    /// Log a new quest
    Add {
        /// penalty, daily, weekly, epic or legendary
        category: Category,
        name: String,
        /// Experience the quest is worth (malformed values count as 0)
        #[arg(long, default_value = "0")]
        xp: String,
    },
    /// Complete a quest, applying its XP
    Complete { category: Category, index: usize },
    /// Delete a quest without applying its XP
    Delete { category: Category, index: usize },
    /// Manually grant or remove XP
    Xp {
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Print the saved state blob as JSON
    Export,
    /// Replace the saved state with a JSON blob (`-` reads stdin)
    Import { file: PathBuf },
    /// Serve the quest log over HTTP
    Serve {
        /// Port for HTTP API (overrides QUESTLOG_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Initialize tracing on stderr so stdout stays clean for command output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "questlog=info,tower_http=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_tracker(config: &Config) -> anyhow::Result<Tracker> {
    let store = SqliteStore::open(&config.db_path)
        .with_context(|| format!("Failed to open {}", config.db_path.display()))?;
    store.migrate()?;
    Ok(Tracker::load(Arc::new(store)))
}

fn read_import(file: &Path) -> anyhow::Result<String> {
    if file.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let port = match &cli.command {
        Some(Commands::Serve { port }) => *port,
        _ => None,
    };
    let config = Config::resolve(cli.db, port)?;
    let tracker = open_tracker(&config)?;

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => {
            print!("{}", render::render_state(&tracker.state()));
        }
        Commands::Add { category, name, xp } => {
            if name.trim().is_empty() {
                anyhow::bail!("Quest name cannot be empty");
            }
            let state = tracker.add_task(category, &name, coerce_xp(&xp))?;
            print!("{}", render::render_state(&state));
        }
        Commands::Complete { category, index } => {
            let state = tracker.complete_task(category, index)?;
            print!("{}", render::render_state(&state));
        }
        Commands::Delete { category, index } => {
            let state = tracker.delete_task(category, index)?;
            print!("{}", render::render_state(&state));
        }
        Commands::Xp { delta } => {
            let state = tracker.adjust_xp(delta)?;
            print!("{}", render::render_state(&state));
        }
        Commands::Export => {
            println!("{}", tracker.export_raw()?);
        }
        Commands::Import { file } => {
            let raw = read_import(&file)?;
            let state = tracker.import_raw(&raw)?;
            tracing::info!(
                "Imported {} XP and {} quests",
                state.experience,
                state.tasks.total()
            );
            print!("{}", render::render_state(&state));
        }
        Commands::Serve { .. } => {
            let app = api::create_router(tracker);

            let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
            tracing::info!(
                "Questlog server listening on http://127.0.0.1:{}",
                config.port
            );

            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
