//! DNS topology probe.
//!
//! Resolves a fixed set of record types for a domain using
//! `hickory-resolver`. Failures never escape this module: a type that fails
//! to resolve (NXDOMAIN, timeout, no answer) is mapped to an empty list, the
//! same shape as "no records of this type".

use std::collections::BTreeMap;

use hickory_resolver::proto::rr::{RData, RecordType as HickoryRecordType};
use hickory_resolver::TokioAsyncResolver;
use log::debug;
use strum::IntoEnumIterator;

use crate::models::RecordType;

impl RecordType {
    fn to_hickory(self) -> HickoryRecordType {
        match self {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::CNAME => HickoryRecordType::CNAME,
        }
    }
}

/// Resolves every configured record type for `domain`.
///
/// The returned map always contains all of [`RecordType`]'s variants as
/// keys; a failed or empty lookup yields an empty list for that type.
/// Within a type, values keep the resolver's response order.
pub async fn resolve_records(
    resolver: &TokioAsyncResolver,
    domain: &str,
) -> BTreeMap<RecordType, Vec<String>> {
    let mut records = BTreeMap::new();

    for record_type in RecordType::iter() {
        let values = match resolver.lookup(domain, record_type.to_hickory()).await {
            Ok(lookup) => lookup
                .iter()
                .filter_map(|rdata| rdata_to_string(record_type, rdata))
                .collect(),
            Err(e) => {
                debug!("{record_type} lookup for {domain} yielded no records: {e}");
                Vec::new()
            }
        };
        records.insert(record_type, values);
    }

    records
}

/// Renders one answer of a typed lookup; answers of other types that the
/// resolver folds into the response (e.g. CNAME chains) are dropped.
fn rdata_to_string(record_type: RecordType, rdata: &RData) -> Option<String> {
    match (record_type, rdata) {
        (RecordType::A, RData::A(a)) => Some(a.to_string()),
        (RecordType::AAAA, RData::AAAA(aaaa)) => Some(aaaa.to_string()),
        (RecordType::MX, RData::MX(mx)) => {
            Some(format!("{} {}", mx.preference(), mx.exchange().to_utf8()))
        }
        (RecordType::NS, RData::NS(ns)) => Some(ns.to_utf8()),
        (RecordType::TXT, RData::TXT(txt)) => {
            // TXT records can contain multiple character strings - join them
            Some(
                txt.iter()
                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                    .collect::<Vec<String>>()
                    .join(""),
            )
        }
        (RecordType::CNAME, RData::CNAME(cname)) => Some(cname.to_utf8()),
        _ => None,
    }
}
