//! domain_monitor library: keyword-driven domain discovery and assessment.
//!
//! This library discovers domains whose certificates mention a keyword (via
//! a certificate-transparency index) and assesses each discovered domain's
//! health: registration status, DNS topology, TLS certificate validity, and
//! web reachability.
//!
//! # Example
//!
//! ```no_run
//! use domain_monitor::{run_monitor, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::for_keyword("example");
//! let report = run_monitor(config).await?;
//! println!(
//!     "Assessed {} of {} discovered domains",
//!     report.records.len(),
//!     report.discovered.len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

mod assess;
pub mod config;
mod dns;
mod error_handling;
mod http;
pub mod initialization;
mod models;
pub mod report;
mod search;
mod tls;
mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{RegistrationError, SearchError};
pub use models::{CertificateStatus, DomainRecord, RecordType, RegistrationInfo, Scheme};
pub use run::{run_monitor, MonitorReport};
pub use search::CtSearchClient;

// Internal run module (contains the main monitoring logic)
mod run {
    use std::path::PathBuf;
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use futures::stream::StreamExt;
    use log::info;

    use crate::assess::DomainAssessor;
    use crate::config::Config;
    use crate::initialization::{init_client, init_resolver};
    use crate::models::DomainRecord;
    use crate::report::write_report;
    use crate::search::CtSearchClient;

    /// Results of one monitoring run.
    #[derive(Debug, Clone)]
    pub struct MonitorReport {
        /// Keyword the run searched for
        pub keyword: String,
        /// All candidate domains returned by the search stage, first-seen order
        pub discovered: Vec<String>,
        /// One record per assessed domain, in discovery order
        pub records: Vec<DomainRecord>,
        /// Path of the JSON results file
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a monitoring pass with the provided configuration.
    ///
    /// This is the main entry point for the library. It searches the
    /// certificate-transparency index for the configured keyword, assesses
    /// each discovered domain (bounded concurrency, one record per domain),
    /// and writes the records to the configured JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP client or DNS resolver cannot be initialized
    /// - `strict_search` is set and every search attempt fails
    /// - The results file cannot be written
    ///
    /// Per-domain failures never fail the run; they are encoded in the
    /// returned records.
    pub async fn run_monitor(config: Config) -> Result<MonitorReport> {
        let start_time = std::time::Instant::now();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let resolver = init_resolver().context("Failed to initialize DNS resolver")?;

        let search = CtSearchClient::new(Arc::clone(&client), &config);
        let discovered = if config.strict_search {
            search
                .search(&config.keyword)
                .await
                .context("Certificate-transparency search failed")?
        } else {
            search.search_lenient(&config.keyword).await
        };
        info!(
            "discovered {} candidate domain(s) for '{}'",
            discovered.len(),
            config.keyword
        );

        let candidates: Vec<String> = match config.max_domains {
            Some(limit) => discovered.iter().take(limit).cloned().collect(),
            None => discovered.clone(),
        };

        let assessor = DomainAssessor::new(Arc::clone(&client), resolver);
        let records: Vec<DomainRecord> = futures::stream::iter(candidates.iter())
            .map(|domain| assessor.assess(domain))
            .buffered(config.max_concurrency.max(1))
            .collect()
            .await;

        write_report(&records, &config.output).await?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "assessed {} domain(s) in {:.1}s, results written to {}",
            records.len(),
            elapsed_seconds,
            config.output.display()
        );

        Ok(MonitorReport {
            keyword: config.keyword.clone(),
            discovered,
            records,
            output_path: config.output.clone(),
            elapsed_seconds,
        })
    }
}
