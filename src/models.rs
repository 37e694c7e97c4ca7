//! Core data model: the per-domain assessment record and its field types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};

/// DNS record types queried for every assessed domain.
///
/// Declaration order drives `BTreeMap` iteration order, which in turn fixes
/// the key order of the `dns_records` object in the JSON output.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    DisplayMacro,
    EnumIterMacro,
)]
pub enum RecordType {
    A,
    AAAA,
    MX,
    NS,
    TXT,
    CNAME,
}

/// URL schemes probed for web reachability.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    DisplayMacro,
    EnumIterMacro,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// Uppercase label used in the console report ("HTTP"/"HTTPS").
    pub fn label(&self) -> &'static str {
        match self {
            Scheme::Http => "HTTP",
            Scheme::Https => "HTTPS",
        }
    }
}

/// Outcome of the TLS certificate probe.
///
/// Exactly one of `expiry_date` (valid) or `error` (invalid) is populated;
/// the constructors below are the only way the rest of the crate builds one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateStatus {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CertificateStatus {
    pub fn valid(expiry_date: DateTime<Utc>) -> Self {
        CertificateStatus {
            valid: true,
            expiry_date: Some(expiry_date),
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        CertificateStatus {
            valid: false,
            expiry_date: None,
            error: Some(error.into()),
        }
    }
}

/// Registration metadata returned by the WHOIS/RDAP capability.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationInfo {
    pub registrar: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
}

/// One assessed domain.
///
/// A record is either *full* (registration fields plus all three probe
/// results, each possibly degraded) or *minimal* (`domain` + `fatal_error`
/// only, produced when the registration lookup itself failed) — never a
/// mixture. Field declaration order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_records: Option<BTreeMap<RecordType, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_status: Option<BTreeMap<Scheme, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_certificate: Option<CertificateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fatal_error: Option<String>,
}

impl DomainRecord {
    /// Builds a full record from the merged probe outcomes.
    pub fn full(
        domain: impl Into<String>,
        registration: RegistrationInfo,
        dns_records: BTreeMap<RecordType, Vec<String>>,
        website_status: BTreeMap<Scheme, bool>,
        ssl_certificate: CertificateStatus,
    ) -> Self {
        DomainRecord {
            domain: domain.into(),
            registrar: registration.registrar,
            creation_date: registration.creation_date,
            expiration_date: registration.expiration_date,
            dns_records: Some(dns_records),
            website_status: Some(website_status),
            ssl_certificate: Some(ssl_certificate),
            fatal_error: None,
        }
    }

    /// Builds the minimal error record for a failed registration lookup.
    pub fn fatal(domain: impl Into<String>, error: impl Into<String>) -> Self {
        DomainRecord {
            domain: domain.into(),
            registrar: None,
            creation_date: None,
            expiration_date: None,
            dns_records: None,
            website_status: None,
            ssl_certificate: None,
            fatal_error: Some(error.into()),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal_error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use strum::IntoEnumIterator;

    fn sample_full_record() -> DomainRecord {
        let mut dns = BTreeMap::new();
        for record_type in RecordType::iter() {
            dns.insert(record_type, Vec::new());
        }
        dns.insert(RecordType::A, vec!["93.184.216.34".to_string()]);
        dns.insert(
            RecordType::MX,
            vec!["10 mail.example.com.".to_string(), "20 mx2.example.com.".to_string()],
        );

        let mut status = BTreeMap::new();
        status.insert(Scheme::Http, false);
        status.insert(Scheme::Https, true);

        DomainRecord::full(
            "example.com",
            RegistrationInfo {
                registrar: Some("Example Registrar, Inc.".to_string()),
                creation_date: Some(Utc.with_ymd_and_hms(1995, 8, 14, 4, 0, 0).unwrap()),
                expiration_date: Some(Utc.with_ymd_and_hms(2026, 8, 13, 4, 0, 0).unwrap()),
            },
            dns,
            status,
            CertificateStatus::valid(Utc.with_ymd_and_hms(2026, 1, 15, 23, 59, 59).unwrap()),
        )
    }

    #[test]
    fn test_full_record_round_trip() {
        let record = sample_full_record();
        let json = serde_json::to_string_pretty(&record).expect("serialize");
        let parsed: DomainRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_full_record_keeps_all_record_types() {
        let record = sample_full_record();
        let dns = record.dns_records.as_ref().unwrap();
        for record_type in RecordType::iter() {
            assert!(dns.contains_key(&record_type), "{record_type} key missing");
        }
        assert!(dns[&RecordType::TXT].is_empty());
        assert!(!dns[&RecordType::A].is_empty());
    }

    #[test]
    fn test_fatal_record_serializes_to_two_fields() {
        let record = DomainRecord::fatal("bad.example", "lookup refused");
        let json = serde_json::to_value(&record).expect("serialize");
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["domain"], "bad.example");
        assert_eq!(object["fatal_error"], "lookup refused");
    }

    #[test]
    fn test_fatal_record_round_trip() {
        let record = DomainRecord::fatal("bad.example", "lookup refused");
        let json = serde_json::to_string(&record).expect("serialize");
        let parsed: DomainRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, parsed);
        assert!(parsed.is_fatal());
        assert!(parsed.dns_records.is_none());
        assert!(parsed.website_status.is_none());
        assert!(parsed.ssl_certificate.is_none());
    }

    #[test]
    fn test_certificate_status_populates_exactly_one_side() {
        let valid = CertificateStatus::valid(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        assert!(valid.valid);
        assert!(valid.expiry_date.is_some());
        assert!(valid.error.is_none());

        let invalid = CertificateStatus::invalid("handshake timeout");
        assert!(!invalid.valid);
        assert!(invalid.expiry_date.is_none());
        assert_eq!(invalid.error.as_deref(), Some("handshake timeout"));
    }

    #[test]
    fn test_dns_map_key_order_is_declaration_order() {
        let record = sample_full_record();
        let json = serde_json::to_string(&record).expect("serialize");
        let a = json.find("\"A\"").unwrap();
        let aaaa = json.find("\"AAAA\"").unwrap();
        let mx = json.find("\"MX\"").unwrap();
        let ns = json.find("\"NS\"").unwrap();
        let txt = json.find("\"TXT\"").unwrap();
        let cname = json.find("\"CNAME\"").unwrap();
        assert!(a < aaaa && aaaa < mx && mx < ns && ns < txt && txt < cname);
    }

    #[test]
    fn test_scheme_serializes_lowercase() {
        let json = serde_json::to_string(&Scheme::Https).unwrap();
        assert_eq!(json, "\"https\"");
        assert_eq!(Scheme::Http.to_string(), "http");
        assert_eq!(Scheme::Http.label(), "HTTP");
    }
}
