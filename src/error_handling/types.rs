//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    #[allow(dead_code)] // Reserved for future use if fallback fails
    DnsResolverError(String),
}

/// Failure of the certificate-transparency search stage.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Every attempt against the index failed.
    #[error("certificate-transparency search exhausted after {attempts} attempts")]
    Exhausted { attempts: usize },

    /// The retry wait was cancelled from outside.
    #[error("certificate-transparency search cancelled during retry backoff")]
    Cancelled,
}

/// Failure of the registration (WHOIS/RDAP) lookup.
///
/// The one per-domain error that aborts the remaining probes: the assessor
/// turns it into a minimal `fatal_error` record.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// The WHOIS client could not be constructed.
    #[error("WHOIS client error: {0}")]
    Client(String),

    /// The lookup itself failed (transport or registry error).
    #[error("WHOIS lookup failed: {0}")]
    Lookup(String),
}
