use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quercle_tools::config::default_config_path;
use quercle_tools::{FetchInput, QuercleConfig, QuercleTools, SearchInput, create_tools};

/// Quercle - web search and fetch tools for AI agents
#[derive(Parser)]
#[command(name = "quercle", version, about)]
struct Cli {
    /// Quercle API key
    #[arg(long, env = "QUERCLE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, env = "QUERCLE_CONFIG")]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print tool definitions as JSON
    Tools,
    /// Search the web
    Search {
        /// Search query
        query: String,
        /// Only include results from this domain (repeatable)
        #[arg(long = "allow")]
        allowed_domains: Vec<String>,
        /// Exclude results from this domain (repeatable)
        #[arg(long = "block")]
        blocked_domains: Vec<String>,
    },
    /// Fetch and analyze a URL
    Fetch {
        /// URL to fetch
        url: String,
        /// What to extract from the page
        #[arg(short, long)]
        prompt: Option<String>,
    },
    /// Invoke a tool by name with JSON arguments
    Call {
        /// Tool name (e.g. "quercle_search")
        name: String,
        /// Arguments as a JSON object
        args: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn,quercle_tools=info",
        1 => "info,quercle_tools=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let tools = build_tools(cli.config, cli.api_key)?;

    let output = match cli.command {
        Command::Tools => serde_json::to_string_pretty(&tools.definitions())?,
        Command::Search {
            query,
            allowed_domains,
            blocked_domains,
        } => {
            let input = SearchInput {
                query,
                allowed_domains: non_empty(allowed_domains),
                blocked_domains: non_empty(blocked_domains),
            };
            tools.search.execute(input).await?
        }
        Command::Fetch { url, prompt } => {
            let input = FetchInput { url, prompt };
            tools.fetch.execute(input).await?
        }
        Command::Call { name, args } => {
            let args: serde_json::Value = serde_json::from_str(&args)
                .map_err(|e| anyhow::anyhow!("arguments are not valid JSON: {e}"))?;
            tools.call(&name, args).await?
        }
    };

    println!("{output}");
    Ok(())
}

/// Build tools from the config file, with `--api-key` layered on top
fn build_tools(path: Option<PathBuf>, api_key: Option<String>) -> anyhow::Result<QuercleTools> {
    let mut config = match path {
        Some(path) => QuercleConfig::from_file(&path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using default config file");
                QuercleConfig::from_file(&path)?
            }
            None => QuercleConfig::new(),
        },
    };

    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }

    Ok(create_tools(Some(config)))
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    (!values.is_empty()).then_some(values)
}
