//! Registration (WHOIS/RDAP) probe.
//!
//! Delegates to the `whois-service` crate, which tries RDAP first and falls
//! back to WHOIS with IANA bootstrap for TLD discovery. Unlike the other
//! probes this one is a hard dependency: its error aborts the rest of the
//! domain's assessment.

use chrono::{DateTime, Utc};
use log::debug;
use whois_service::{WhoisClient, WhoisResponse};

use crate::error_handling::RegistrationError;
use crate::models::RegistrationInfo;

/// Fetches registration metadata for `domain`.
///
/// No retry; registry fields are passed through as parsed, with date strings
/// converted to timestamps where a known format matches. A lookup that
/// succeeds but yields no parseable fields returns an empty
/// `RegistrationInfo`, not an error.
///
/// # Errors
///
/// `RegistrationError` when the client cannot be constructed or the lookup
/// itself fails.
pub async fn lookup_registration(domain: &str) -> Result<RegistrationInfo, RegistrationError> {
    let client = WhoisClient::new()
        .await
        .map_err(|e| RegistrationError::Client(e.to_string()))?;

    let response = client
        .lookup(domain)
        .await
        .map_err(|e| RegistrationError::Lookup(e.to_string()))?;

    debug!("registration lookup succeeded for {domain}");
    Ok(convert_response(&response))
}

/// Converts the whois-service response to the record's registration fields.
fn convert_response(response: &WhoisResponse) -> RegistrationInfo {
    let Some(parsed) = &response.parsed_data else {
        return RegistrationInfo::default();
    };

    RegistrationInfo {
        registrar: parsed.registrar.clone(),
        creation_date: parsed.creation_date.as_deref().and_then(parse_date_string),
        expiration_date: parsed.expiration_date.as_deref().and_then(parse_date_string),
    }
}

/// Attempts to parse a registry date string in the formats commonly seen
/// across WHOIS servers.
fn parse_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%d-%b-%Y",
        "%d/%m/%Y",
    ];

    for format in &formats {
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
