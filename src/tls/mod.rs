//! TLS certificate probe.
//!
//! Connects to `domain:443` with SNI and the webpki root store, reads the
//! peer certificate, and extracts its expiry. Uses `tokio-rustls` for the
//! async TLS connection and `x509-parser` for certificate parsing.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::debug;
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::config::{TCP_CONNECT_TIMEOUT_SECS, TLS_HANDSHAKE_TIMEOUT_SECS};
use crate::models::CertificateStatus;

/// Inspects the TLS certificate served on `domain:443`.
///
/// Total: every failure (connect/handshake timeout, invalid name, parse
/// error) is folded into a `valid: false` status carrying the stringified
/// cause. No retry.
pub async fn inspect_certificate(domain: &str) -> CertificateStatus {
    match fetch_certificate_expiry(domain).await {
        Ok(expiry_date) => CertificateStatus::valid(expiry_date),
        Err(e) => {
            debug!("certificate inspection failed for {domain}: {e}");
            CertificateStatus::invalid(e.to_string())
        }
    }
}

async fn fetch_certificate_expiry(domain: &str) -> Result<DateTime<Utc>> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let server_name = ServerName::try_from(domain.to_string())
        .map_err(|e| anyhow::anyhow!("Invalid domain name: {}", e))?;

    let sock = match tokio::time::timeout(
        Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
        TcpStream::connect((domain.to_string(), 443)),
    )
    .await
    {
        Ok(Ok(sock)) => sock,
        Ok(Err(e)) => return Err(anyhow::anyhow!("Failed to connect to {}:443 - {}", domain, e)),
        Err(_) => {
            return Err(anyhow::anyhow!(
                "TCP connection timeout for {}:443 ({}s)",
                domain,
                TCP_CONNECT_TIMEOUT_SECS
            ))
        }
    };

    let connector = TlsConnector::from(Arc::new(config));
    let tls_stream = match tokio::time::timeout(
        Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
        connector.connect(server_name, sock),
    )
    .await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => return Err(anyhow::anyhow!("TLS handshake failed for {}: {}", domain, e)),
        Err(_) => {
            return Err(anyhow::anyhow!(
                "TLS handshake timeout for {} ({}s)",
                domain,
                TLS_HANDSHAKE_TIMEOUT_SECS
            ))
        }
    };

    let certs = tls_stream
        .get_ref()
        .1
        .peer_certificates()
        .ok_or_else(|| anyhow::anyhow!("No peer certificate presented by {}", domain))?;
    let cert = certs
        .first()
        .ok_or_else(|| anyhow::anyhow!("Empty certificate chain from {}", domain))?;

    let (_, cert) = x509_parser::parse_x509_certificate(cert.as_ref())?;

    let not_after = cert
        .tbs_certificate
        .validity
        .not_after
        .to_rfc2822()
        .map_err(|e| anyhow::anyhow!("RFC2822 conversion error for not_after: {}", e))?;
    let expiry = DateTime::parse_from_str(&not_after, "%a, %d %b %Y %H:%M:%S %z")
        .map_err(|_| anyhow::anyhow!("Failed to parse not_after"))?;

    Ok(expiry.with_timezone(&Utc))
}
