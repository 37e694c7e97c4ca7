//! Web reachability probe.
//!
//! Issues one GET per scheme against the bare domain and records whether the
//! final response status is exactly 200. Redirects follow the client's
//! default policy, so a site that redirects to a 200 page counts as
//! reachable while one that lands on 4xx/5xx does not.

use std::collections::BTreeMap;

use log::debug;
use strum::IntoEnumIterator;

use crate::models::Scheme;

/// Checks reachability of `domain` over every configured scheme.
///
/// Total: a transport error (refused connection, timeout, TLS failure) maps
/// to `false` for that scheme, never to an error.
pub async fn check_reachability(
    client: &reqwest::Client,
    domain: &str,
) -> BTreeMap<Scheme, bool> {
    let mut status = BTreeMap::new();

    for scheme in Scheme::iter() {
        let url = format!("{scheme}://{domain}");
        status.insert(scheme, probe_url(client, &url).await);
    }

    status
}

/// Fetches one URL and reports whether the final status is 200.
async fn probe_url(client: &reqwest::Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(response) => response.status() == reqwest::StatusCode::OK,
        Err(e) => {
            debug!("reachability probe failed for {url}: {e}");
            false
        }
    }
}
