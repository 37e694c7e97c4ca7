//! Certificate-transparency search.
//!
//! Queries a crt.sh-style index for certificate subject names containing a
//! keyword. Owns the retry/backoff policy and the deduplication of the
//! returned names; everything downstream consumes the candidate list as-is.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, warn};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::config::{Config, SEARCH_ATTEMPT_TIMEOUT};
use crate::error_handling::SearchError;

/// One entry of the index's JSON response. Only `name_value` matters here;
/// it may pack several newline-separated subject names into one string.
#[derive(Debug, Deserialize)]
struct CtEntry {
    name_value: Option<String>,
}

/// Client for the certificate-transparency index.
pub struct CtSearchClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
    max_attempts: usize,
    retry_delay: std::time::Duration,
    cancel: CancellationToken,
}

impl CtSearchClient {
    pub fn new(client: Arc<reqwest::Client>, config: &Config) -> Self {
        CtSearchClient {
            client,
            endpoint: config.search_endpoint.trim_end_matches('/').to_string(),
            max_attempts: config.search_attempts.max(1),
            retry_delay: std::time::Duration::from_secs(config.search_retry_delay_secs),
            cancel: CancellationToken::new(),
        }
    }

    /// Token that interrupts a retry backoff in progress. Cancelling makes
    /// an in-flight [`search`](Self::search) return `SearchError::Cancelled`.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Searches the index for names containing `keyword`.
    ///
    /// Issues one GET per attempt; the first successful, parseable response
    /// wins and no further attempts are made. Non-200 responses, transport
    /// errors, and unparseable bodies all count as failed attempts and are
    /// retried after the configured delay.
    ///
    /// The returned names are deduplicated, keeping first-seen order.
    ///
    /// # Errors
    ///
    /// `SearchError::Exhausted` once every attempt has failed, or
    /// `SearchError::Cancelled` if the cancellation token fires during a
    /// retry wait.
    pub async fn search(&self, keyword: &str) -> Result<Vec<String>, SearchError> {
        let url = format!(
            "{}/?q=%25{}%25&output=json",
            self.endpoint,
            urlencoding::encode(keyword)
        );

        for attempt in 1..=self.max_attempts {
            match self.attempt(&url).await {
                Ok(names) => {
                    debug!(
                        "search for '{keyword}' returned {} unique names on attempt {attempt}",
                        names.len()
                    );
                    return Ok(names);
                }
                Err(cause) => {
                    warn!("search attempt {attempt}/{} failed: {cause}", self.max_attempts);
                }
            }

            if attempt < self.max_attempts {
                tokio::select! {
                    _ = tokio::time::sleep(self.retry_delay) => {}
                    _ = self.cancel.cancelled() => return Err(SearchError::Cancelled),
                }
            }
        }

        Err(SearchError::Exhausted {
            attempts: self.max_attempts,
        })
    }

    /// Soft-mode search: an exhausted search degrades to an empty candidate
    /// list instead of an error. This masks "index down" as "no results";
    /// callers that need to tell the two apart use [`search`](Self::search).
    pub async fn search_lenient(&self, keyword: &str) -> Vec<String> {
        match self.search(keyword).await {
            Ok(names) => names,
            Err(e) => {
                warn!("continuing with no candidates: {e}");
                Vec::new()
            }
        }
    }

    async fn attempt(&self, url: &str) -> Result<Vec<String>, anyhow::Error> {
        let response = self
            .client
            .get(url)
            .timeout(SEARCH_ATTEMPT_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            anyhow::bail!("index returned status {status}");
        }

        let text = response.text().await?;
        let entries: Vec<CtEntry> = serde_json::from_str(&text)
            .map_err(|e| anyhow::anyhow!("unparseable index response: {e}"))?;

        Ok(extract_names(&entries))
    }
}

/// Flattens index entries into a deduplicated name list, first-seen order.
///
/// A single `name_value` can hold several newline-separated subject names
/// (SANs of one certificate); each line becomes its own candidate.
fn extract_names(entries: &[CtEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for entry in entries {
        let Some(name_value) = &entry.name_value else {
            continue;
        };
        for name in name_value.lines() {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        }
    }

    names
}
