//! sacct accounting row parsing.

use crate::types::{RecordError, SacctRow};

/// Expected field order of the accounting report:
/// JobID|JobName|User|Partition|State|Start|End|Elapsed|ReqMem|ReqCPUS|ReqTRES
const MIN_FIELDS: usize = 8;

/// Parse one pipe-delimited accounting row.
///
/// Step rows often omit the trailing request fields, so only the first
/// eight are required; missing trailers default to empty strings. State
/// may carry a tail like `CANCELLED by 1002`, kept verbatim.
fn parse_sacct_row(line: &str) -> Result<SacctRow, RecordError> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < MIN_FIELDS {
        return Err(RecordError::SacctRow(line.to_string()));
    }

    let field = |i: usize| fields.get(i).copied().unwrap_or("").to_string();

    Ok(SacctRow {
        job_id: field(0),
        job_name: field(1),
        user: field(2),
        partition: field(3),
        state: field(4),
        start: field(5),
        end: field(6),
        elapsed: field(7),
        req_mem: field(8),
        req_cpus: field(9),
        req_tres: field(10),
    })
}

/// Build accounting rows from classified sacct lines, dropping rows with
/// too few fields.
pub fn parse_sacct_rows(lines: &[String]) -> Vec<SacctRow> {
    let mut rows = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        match parse_sacct_row(line) {
            Ok(row) => rows.push(row),
            Err(e) => tracing::debug!("{}", e),
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sacct_row() {
        let line = "1336135|grounding|user1|gpu-high|COMPLETED|2025-07-04T15:29:40|2025-07-04T21:07:32|05:37:52|32000Mc|2|gpu:1";
        let row = parse_sacct_row(line).unwrap();
        assert_eq!(row.job_id, "1336135");
        assert_eq!(row.job_name, "grounding");
        assert_eq!(row.state, "COMPLETED");
        assert_eq!(row.req_mem, "32000Mc");
        assert_eq!(row.req_cpus, "2");
        assert_eq!(row.req_tres, "gpu:1");
    }

    #[test]
    fn test_step_row_missing_trailers() {
        let line = "1336135.batch|batch|user1|gpu-high|COMPLETED|2025-07-04T15:29:41|2025-07-04T21:07:32|05:37:51";
        let row = parse_sacct_row(line).unwrap();
        assert_eq!(row.job_id, "1336135.batch");
        assert_eq!(row.req_mem, "");
        assert_eq!(row.req_tres, "");
    }

    #[test]
    fn test_state_with_tail_kept_verbatim() {
        let line = "1336196|robo|user2|gpu-high|CANCELLED by 1002|a|b|00:04:05|16000Mc|8|";
        let row = parse_sacct_row(line).unwrap();
        assert_eq!(row.state, "CANCELLED by 1002");
    }

    #[test]
    fn test_short_rows_dropped() {
        let rows = parse_sacct_rows(&["a|b|c".to_string(), String::new()]);
        assert!(rows.is_empty());
    }
}
