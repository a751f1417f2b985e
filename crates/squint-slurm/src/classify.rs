//! Line-by-line classification of pasted Slurm output.
//!
//! The input is a manual paste of several independent command outputs in
//! no guaranteed order, with or without `---` separators. Formats are
//! recognized by line shape alone: `Key=` prefixes for the scontrol
//! one-liner dumps, distinctive header rows for the two tabular formats,
//! and an ISO-8601 line for the collection timestamp.

use once_cell::sync::Lazy;
use regex::Regex;

/// ISO-8601 date-time with a mandatory `Z` or `±HH:MM` offset.
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2})([-+]\d{2}:\d{2}|Z)").unwrap());

/// Longest plausible length for a bare `date --iso-8601=seconds` line.
/// Longer lines containing an ISO timestamp are data rows, not the
/// collection timestamp.
const TIMESTAMP_LINE_MAX: usize = 50;

/// Classified line buckets plus the detected collection timestamp.
#[derive(Debug, Default)]
pub struct Segments {
    pub partition_lines: Vec<String>,
    pub node_lines: Vec<String>,
    pub queue_lines: Vec<String>,
    pub detail_lines: Vec<String>,
    pub sacct_lines: Vec<String>,
    /// The raw timestamp line, last one wins.
    pub collected_at: Option<String>,
    /// The offset token of the timestamp line (`Z` or `±HH:MM`).
    pub utc_offset: Option<String>,
}

/// Bucket every line of the raw input.
///
/// Rules are evaluated per line in priority order, so a higher-priority
/// shape (e.g. a `NodeName=` line) interrupts tabular trailing capture
/// even after a table header was seen. Blank lines, `---` separators,
/// and anything unrecognized are dropped.
pub fn classify(raw: &str) -> Segments {
    let mut segments = Segments::default();
    let mut in_sacct = false;
    let mut in_queue = false;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("---") {
            continue;
        }

        let timestamp = if line.len() < TIMESTAMP_LINE_MAX {
            ISO_DATE_RE.captures(line)
        } else {
            None
        };

        if let Some(caps) = timestamp {
            segments.collected_at = Some(line.to_string());
            segments.utc_offset = Some(caps[2].to_string());
        } else if line.starts_with("PartitionName=") {
            segments.partition_lines.push(line.to_string());
        } else if line.starts_with("NodeName=") {
            segments.node_lines.push(line.to_string());
        } else if line.starts_with("JobId=") {
            segments.detail_lines.push(line.to_string());
        } else if line.starts_with("JobID|JobName|") {
            in_sacct = true;
        } else if in_sacct {
            segments.sacct_lines.push(line.to_string());
        } else if line.starts_with("JOBID") && line.contains("PARTITION") {
            in_queue = true;
        } else if in_queue {
            segments.queue_lines.push(line.to_string());
        } else {
            tracing::debug!("dropping unrecognized line: {}", line);
        }
    }

    segments
}
