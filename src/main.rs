//! Kalshi market browser entry point.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kalshi_markets::config::Config;
use kalshi_markets::error::KalshiError;
use kalshi_markets::market::KalshiClient;
use kalshi_markets::skill::{self, SkillOptions, DEFAULT_BROWSE_URL};

/// Kalshi prediction market browser.
#[derive(Parser, Debug)]
#[command(name = "kalshi-markets")]
#[command(about = "List Kalshi markets and fetch outcome prices as JSON")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List markets from a category or home page.
    Browse {
        /// Kalshi page URL or category URL.
        #[arg(long, default_value = DEFAULT_BROWSE_URL)]
        url: String,

        /// Maximum number of markets to return.
        #[arg(long = "max")]
        max_markets: Option<usize>,
    },

    /// Fetch outcome prices for one market.
    Market {
        /// Market page URL or event ticker.
        url: String,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging; stdout is reserved for JSON output
    let filter = if args.verbose || config.verbose {
        EnvFilter::new("kalshi_markets=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(KalshiError::InvalidConfig(e).into());
    }

    match args.command {
        Command::Browse { url, max_markets } => {
            let max_markets = max_markets.unwrap_or(config.default_max_markets);
            cmd_browse(&config, &url, max_markets).await
        }
        Command::Market { url } => cmd_market(&config, &url).await,
        Command::CheckConfig => cmd_check_config(&config),
    }
}

/// List markets and print them as JSON.
async fn cmd_browse(config: &Config, url: &str, max_markets: usize) -> anyhow::Result<()> {
    info!("Browsing {} (max {})", url, max_markets);

    let client = KalshiClient::new(config)?;
    let entries = skill::browse(&client, url, max_markets, &SkillOptions::from(config)).await?;

    print_json(&entries)
}

/// Fetch one market and print it as JSON.
async fn cmd_market(config: &Config, url: &str) -> anyhow::Result<()> {
    info!("Fetching market {}", url);

    let client = KalshiClient::new(config)?;
    let result = skill::market(&client, url).await;

    print_json(&result)
}

/// Print the effective configuration.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("KALSHI MARKETS - CONFIGURATION CHECK");
    println!("======================================================================");
    println!("  API URL: {}", config.kalshi_api_url);
    println!("  Web URL: {}", config.kalshi_web_url);
    println!("  HTTP Timeout: {}ms", config.http_timeout_ms);
    println!("  Event Status: {}", config.event_status);
    println!("  Default Max Markets: {}", config.default_max_markets);
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
