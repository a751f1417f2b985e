//! Record builders for `scontrol show ... --oneliner` dumps.
//!
//! Partition, node, and per-job detail lines share the `KEY=VALUE` shape;
//! each becomes a raw attribute map keyed on its identifying attribute.
//! Every attribute is kept, recognized or not, so downstream consumers
//! can pick the keys they need.

use squint_parsers::parse_kv_line;
use std::collections::HashMap;

fn parse_records(lines: &[String], id_key: &str) -> Vec<HashMap<String, String>> {
    let mut records = Vec::new();
    for line in lines {
        let attrs = parse_kv_line(line);
        if attrs.get(id_key).is_some_and(|v| !v.is_empty()) {
            records.push(attrs);
        } else {
            tracing::debug!("dropping {} line without identifier: {}", id_key, line);
        }
    }
    records
}

/// Build attribute maps from `PartitionName=` lines.
pub fn parse_partition_records(lines: &[String]) -> Vec<HashMap<String, String>> {
    parse_records(lines, "PartitionName")
}

/// Build attribute maps from `NodeName=` lines.
pub fn parse_node_records(lines: &[String]) -> Vec<HashMap<String, String>> {
    parse_records(lines, "NodeName")
}

/// Build attribute maps from `JobId=` detail lines.
pub fn parse_detail_records(lines: &[String]) -> Vec<HashMap<String, String>> {
    parse_records(lines, "JobId")
}
