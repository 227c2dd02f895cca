//! CLI for the NewsCredible article analyzer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use newscred_core::config::{self, ConfigError, NewsCredConfig, API_URL_ENV};
use newscred_core::endpoint::Endpoint;

use commands::{run_analyze, run_completions, run_config, run_health, run_man};

/// Top-level CLI for the NewsCredible analyzer.
#[derive(Debug, Parser)]
#[command(name = "newscred")]
#[command(about = "NewsCredible: analyze news articles for bias, credibility, sentiment and factuality", long_about = None)]
pub struct Cli {
    /// Base URL of the analysis API (overrides NEWSCRED_API_URL and the config file).
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Analyze a news article by URL.
    Analyze {
        /// Absolute http(s) URL of the article.
        url: String,
        /// Print the raw JSON result instead of cards.
        #[arg(long)]
        json: bool,
    },

    /// Check that the analysis API is reachable and healthy.
    Health,

    /// Show the config file path and the resolved API endpoint.
    Config,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let api_url = cli.api_url.as_deref();

        match cli.command {
            CliCommand::Analyze { url, json } => {
                let (cfg, endpoint) = load(api_url)?;
                run_analyze(&cfg, endpoint, &url, json).await?;
            }
            CliCommand::Health => {
                let (cfg, endpoint) = load(api_url)?;
                run_health(&cfg, endpoint).await?;
            }
            CliCommand::Config => {
                // Resolution may fail; the command still shows where settings come from.
                let cfg = config::load_or_init()?;
                let endpoint = resolve(&cfg, api_url);
                run_config(&cfg, endpoint)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

/// Load the config file and resolve the endpoint once for this invocation.
fn load(cli_override: Option<&str>) -> Result<(NewsCredConfig, Endpoint)> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let endpoint = resolve(&cfg, cli_override)?;
    tracing::debug!("analysis endpoint: {}", endpoint.base());
    Ok((cfg, endpoint))
}

fn resolve(cfg: &NewsCredConfig, cli_override: Option<&str>) -> Result<Endpoint, ConfigError> {
    let env_override = std::env::var(API_URL_ENV).ok();
    cfg.resolve_endpoint(env_override.as_deref(), cli_override)
}

#[cfg(test)]
mod tests;
