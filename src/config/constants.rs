//! Configuration constants.
//!
//! Defaults for timeouts, retry policy, and output locations. CLI flags
//! override the retry and concurrency values; the per-probe timeouts are
//! fixed operational parameters.

use std::time::Duration;

/// Certificate-transparency index queried for candidate domains.
pub const CT_INDEX_ENDPOINT: &str = "https://crt.sh";

/// Per-attempt timeout for one CT index query.
/// The index is slow under load; 30s matches its typical worst case.
pub const SEARCH_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// Search attempts before the result is declared exhausted (including the first).
pub const DEFAULT_SEARCH_ATTEMPTS: usize = 3;

/// Delay between failed search attempts in seconds.
pub const DEFAULT_SEARCH_RETRY_DELAY_SECS: u64 = 5;

/// Per-request timeout for the HTTP reachability probe in seconds.
pub const PROBE_TIMEOUT_SECS: u64 = 5;

/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// TLS handshake timeout in seconds
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 5;

/// DNS query timeout in seconds
/// Most queries complete in <1s; 3s provides buffer while failing fast.
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Maximum domains assessed concurrently.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// JSON results file written at the end of each run (overwritten).
pub const DEFAULT_OUTPUT_FILE: &str = "domain_monitor_results.json";

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("domain_monitor/", env!("CARGO_PKG_VERSION"));
