//! Markdown rendering of assessment results.
//!
//! Human-readable only; the machine-readable output is the JSON file.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use strum::IntoEnumIterator;

use crate::models::{DomainRecord, Scheme};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the full console report: the discovery list followed by one
/// `###` section per assessed domain.
pub fn render_report(keyword: &str, discovered: &[String], records: &[DomainRecord]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "## Domains Containing '{keyword}'\n");
    for domain in discovered {
        let _ = writeln!(out, "- {domain}");
    }

    let _ = writeln!(out, "\n## Domain Monitor Results\n");
    for record in records {
        render_record(&mut out, record);
    }

    out
}

fn render_record(out: &mut String, record: &DomainRecord) {
    let _ = writeln!(out, "### {}\n", record.domain);

    if let Some(error) = &record.fatal_error {
        let _ = writeln!(out, "**Error:** {error}\n");
        return;
    }

    let _ = writeln!(out, "- **Registrar:** {}", text_or_unknown(&record.registrar));
    let _ = writeln!(
        out,
        "- **Creation Date:** {}",
        date_or_unknown(&record.creation_date)
    );
    let _ = writeln!(
        out,
        "- **Expiration Date:** {}",
        date_or_unknown(&record.expiration_date)
    );

    if let Some(status) = &record.website_status {
        for scheme in Scheme::iter() {
            let _ = writeln!(
                out,
                "- **Website Active ({}):** {}",
                scheme.label(),
                status.get(&scheme).copied().unwrap_or(false)
            );
        }
    }

    if let Some(certificate) = &record.ssl_certificate {
        if certificate.valid {
            let _ = writeln!(
                out,
                "- **SSL Expiry Date:** {}",
                date_or_unknown(&certificate.expiry_date)
            );
        } else {
            let _ = writeln!(
                out,
                "- **SSL Error:** {}",
                certificate.error.as_deref().unwrap_or("unknown")
            );
        }
    }

    if let Some(dns_records) = &record.dns_records {
        let _ = writeln!(out, "\n**DNS Records:**");
        for (record_type, values) in dns_records {
            if !values.is_empty() {
                let _ = writeln!(out, "- {}: {}", record_type, values.join(", "));
            }
        }
    }

    let _ = writeln!(out, "\n---\n");
}

fn text_or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("unknown")
}

fn date_or_unknown(value: &Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CertificateStatus, RecordType, RegistrationInfo};
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn full_record() -> DomainRecord {
        let mut dns = BTreeMap::new();
        for record_type in RecordType::iter() {
            dns.insert(record_type, Vec::new());
        }
        dns.insert(RecordType::A, vec!["93.184.216.34".to_string()]);

        let mut status = BTreeMap::new();
        status.insert(Scheme::Http, true);
        status.insert(Scheme::Https, true);

        DomainRecord::full(
            "example.com",
            RegistrationInfo {
                registrar: Some("Example Registrar".to_string()),
                creation_date: Some(Utc.with_ymd_and_hms(1995, 8, 14, 4, 0, 0).unwrap()),
                expiration_date: None,
            },
            dns,
            status,
            CertificateStatus::invalid("handshake timeout"),
        )
    }

    #[test]
    fn test_render_report_lists_discovered_domains() {
        let report = render_report(
            "example",
            &["a.example.com".to_string(), "b.example.com".to_string()],
            &[],
        );
        assert!(report.starts_with("## Domains Containing 'example'"));
        assert!(report.contains("- a.example.com\n"));
        assert!(report.contains("- b.example.com\n"));
        assert!(report.contains("## Domain Monitor Results"));
    }

    #[test]
    fn test_render_fatal_record_is_a_single_error_line() {
        let record = DomainRecord::fatal("bad.example", "connection refused");
        let report = render_report("example", &[], &[record]);
        assert!(report.contains("### bad.example"));
        assert!(report.contains("**Error:** connection refused"));
        assert!(!report.contains("**Registrar:**"));
        assert!(!report.contains("**DNS Records:**"));
    }

    #[test]
    fn test_render_full_record_fields() {
        let report = render_report("example", &[], &[full_record()]);
        assert!(report.contains("- **Registrar:** Example Registrar"));
        assert!(report.contains("- **Creation Date:** 1995-08-14 04:00:00"));
        assert!(report.contains("- **Expiration Date:** unknown"));
        assert!(report.contains("- **Website Active (HTTP):** true"));
        assert!(report.contains("- **Website Active (HTTPS):** true"));
        assert!(report.contains("- **SSL Error:** handshake timeout"));
    }

    #[test]
    fn test_render_dns_sublist_hides_empty_types() {
        let report = render_report("example", &[], &[full_record()]);
        assert!(report.contains("- A: 93.184.216.34"));
        assert!(!report.contains("- MX:"));
        assert!(!report.contains("- TXT:"));
    }
}
