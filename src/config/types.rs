//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CT_INDEX_ENDPOINT, DEFAULT_MAX_CONCURRENCY, DEFAULT_OUTPUT_FILE, DEFAULT_SEARCH_ATTEMPTS,
    DEFAULT_SEARCH_RETRY_DELAY_SECS, DEFAULT_USER_AGENT, PROBE_TIMEOUT_SECS,
};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Doubles as the CLI surface (`clap` derive) and the programmatic
/// configuration for [`run_monitor`](crate::run_monitor).
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_monitor",
    about = "Discovers keyword-related domains via certificate-transparency logs and reports their registration, DNS, TLS, and web health."
)]
pub struct Config {
    /// Keyword to search for in certificate subject names
    pub keyword: String,

    /// Path of the JSON results file (overwritten each run)
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Assess at most this many discovered domains
    #[arg(long)]
    pub max_domains: Option<usize>,

    /// Maximum domains assessed concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Search attempts against the certificate-transparency index
    #[arg(long, default_value_t = DEFAULT_SEARCH_ATTEMPTS)]
    pub search_attempts: usize,

    /// Delay between failed search attempts, in seconds
    #[arg(long, default_value_t = DEFAULT_SEARCH_RETRY_DELAY_SECS)]
    pub search_retry_delay_secs: u64,

    /// Certificate-transparency index endpoint
    #[arg(long, default_value = CT_INDEX_ENDPOINT)]
    pub search_endpoint: String,

    /// Fail the run when every search attempt fails, instead of
    /// continuing with an empty candidate list
    #[arg(long)]
    pub strict_search: bool,

    /// Per-request timeout for the HTTP reachability probe, in seconds
    #[arg(long, default_value_t = PROBE_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Config {
    /// A configuration with defaults for everything but the keyword.
    pub fn for_keyword(keyword: impl Into<String>) -> Self {
        Config {
            keyword: keyword.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            max_domains: None,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            search_attempts: DEFAULT_SEARCH_ATTEMPTS,
            search_retry_delay_secs: DEFAULT_SEARCH_RETRY_DELAY_SECS,
            search_endpoint: CT_INDEX_ENDPOINT.to_string(),
            strict_search: false,
            timeout_seconds: PROBE_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
