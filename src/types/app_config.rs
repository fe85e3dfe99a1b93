use std::path::PathBuf;

use clap::Parser;

use super::feed_table::DEFAULT_FEED_HOST;

/// Lists the subway stations a line is currently serving, from the MTA
/// real-time feeds.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    /// MTA API key, sent as the x-api-key header.
    #[arg(long, env = "MTA_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Path to the GTFS stops.txt file.
    #[arg(long, env = "MTA_STOPS_PATH", default_value = "stops.txt")]
    pub stops: PathBuf,

    #[arg(long, env = "MTA_FEED_HOST", default_value = DEFAULT_FEED_HOST)]
    pub feed_host: String,

    /// Line to report on. Prompts when missing or unknown.
    #[arg(long, env = "MTA_ROUTE")]
    pub route: Option<String>,
}
