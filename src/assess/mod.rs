//! Per-domain assessment orchestration.
//!
//! `DomainAssessor` runs the four probes for one domain and merges their
//! outcomes into a single [`DomainRecord`]. The failure policy lives here
//! and nowhere else: registration is a hard dependency whose error produces
//! a minimal `fatal_error` record and skips the remaining probes, while DNS,
//! TLS, and HTTP are soft dependencies that each degrade only their own
//! field.

use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;
use log::{info, warn};

use crate::models::DomainRecord;
use crate::{dns, http, tls, whois};

/// Runs the probe set against one domain at a time.
pub struct DomainAssessor {
    client: Arc<reqwest::Client>,
    resolver: Arc<TokioAsyncResolver>,
}

impl DomainAssessor {
    pub fn new(client: Arc<reqwest::Client>, resolver: Arc<TokioAsyncResolver>) -> Self {
        DomainAssessor { client, resolver }
    }

    /// Assesses one domain. Total: all failure is encoded in the record.
    ///
    /// Registration runs first; the soft probes only run once it has
    /// succeeded and are independent of each other, so they run
    /// concurrently and join before the merge.
    pub async fn assess(&self, domain: &str) -> DomainRecord {
        info!("assessing {domain}");

        let registration = match whois::lookup_registration(domain).await {
            Ok(registration) => registration,
            Err(e) => {
                warn!("registration lookup failed for {domain}: {e}");
                return DomainRecord::fatal(domain, e.to_string());
            }
        };

        let (dns_records, website_status, ssl_certificate) = tokio::join!(
            dns::resolve_records(&self.resolver, domain),
            http::check_reachability(&self.client, domain),
            tls::inspect_certificate(domain),
        );

        DomainRecord::full(
            domain,
            registration,
            dns_records,
            website_status,
            ssl_certificate,
        )
    }
}
