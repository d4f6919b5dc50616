//! echo: command-line journal with AI reflections and mood insights.
//!
//! Entries are stored in a JSON file. Each submitted entry gets a short AI
//! reflection and a mood; `insights` summarizes the mood distribution.
//! Results are printed to stdout as JSON; logs go to stderr.

mod logging;

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use echo_core::defaults;
use echo_inference::{GatewayConfig, HuggingFaceGateway, ResponseCache};
use echo_journal::{FileJournalStore, JournalService};

#[derive(Parser, Debug)]
#[command(name = "echo")]
#[command(author, version, about = "Journal with AI reflections and mood insights")]
#[command(propagate_version = true)]
struct Cli {
    /// Gateway config file (default: ~/.config/echo/echo.toml, else environment)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Journal file
    #[arg(short, long, global = true, default_value = defaults::JOURNAL_FILE)]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct OwnerArg {
    /// Journal owner
    #[arg(short, long, default_value_t = Uuid::nil())]
    owner: Uuid,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write an entry and print the stored record
    Reflect {
        #[command(flatten)]
        owner: OwnerArg,

        /// Entry text (read from stdin when omitted)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// List entries, newest first
    List {
        #[command(flatten)]
        owner: OwnerArg,
    },

    /// Mood counts and a summary across all entries
    Insights {
        #[command(flatten)]
        owner: OwnerArg,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let _log_guard = logging::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let service = build_service(config, &cli.store).await?;

    match cli.command {
        Commands::Reflect { owner, text } => {
            let text = entry_text(text)?;
            let record = service.create_entry(owner.owner, &text).await?;
            print_json(&record)?;
        }
        Commands::List { owner } => {
            let records = service.list_entries(owner.owner).await?;
            print_json(&records)?;
        }
        Commands::Insights { owner } => {
            let report = service.insights(owner.owner).await?;
            print_json(&report)?;
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GatewayConfig> {
    let config = match path {
        Some(path) => GatewayConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GatewayConfig::load().context("loading gateway config")?,
    };
    debug!(
        base_url = %config.base_url,
        cache_ttl_secs = config.cache_ttl_secs,
        "Gateway config loaded"
    );
    Ok(config)
}

async fn build_service(config: GatewayConfig, store: &Path) -> anyhow::Result<JournalService> {
    let cache = ResponseCache::from_config(&config);
    let gateway = HuggingFaceGateway::new(config)?;
    let repository = FileJournalStore::open(store)
        .await
        .with_context(|| format!("opening journal {}", store.display()))?;

    info!(store = %store.display(), "Journal ready");
    Ok(JournalService::new(
        Arc::new(repository),
        Arc::new(gateway),
        cache,
    ))
}

/// Join positional words, or read stdin when none were given.
fn entry_text(words: Vec<String>) -> anyhow::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("no entry text given (pass it as arguments or pipe it on stdin)");
    }
    read_entry(stdin.lock())
}

/// Read a piped entry, dropping the trailing line ending so it matches the
/// same text given as arguments.
fn read_entry(mut reader: impl Read) -> anyhow::Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("reading entry from stdin")?;
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
