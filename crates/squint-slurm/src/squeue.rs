//! squeue tabular row parsing.

use crate::types::{QueueRow, RecordError};

/// Parse a single data row of the squeue table.
///
/// Columns are whitespace-aligned: JOBID PARTITION NAME USER STATE TIME
/// TIME_LIMIT NODES NODELIST(REASON). The node list is everything past
/// the eighth column, since a `(Reason)` tail may itself contain spaces.
fn parse_queue_row(line: &str) -> Result<QueueRow, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 8 {
        return Err(RecordError::QueueRow(line.to_string()));
    }

    Ok(QueueRow {
        job_id: fields[0].to_string(),
        partition: fields[1].to_string(),
        name: fields[2].to_string(),
        user: fields[3].to_string(),
        state: fields[4].to_string(),
        time: fields[5].to_string(),
        time_limit: fields[6].to_string(),
        nodes: fields[7].to_string(),
        node_list: fields[8..].join(" "),
    })
}

/// Build queue rows from classified squeue lines, dropping rows that do
/// not have enough columns.
pub fn parse_queue_rows(lines: &[String]) -> Vec<QueueRow> {
    let mut rows = Vec::new();
    for line in lines {
        match parse_queue_row(line) {
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
    fn test_parse_queue_row() {
        let line = "           1336199  gpu-high  train_model    user1    RUNNING      10:34  3-00:00:00      1 node-a1";
        let row = parse_queue_row(line).unwrap();
        assert_eq!(row.job_id, "1336199");
        assert_eq!(row.partition, "gpu-high");
        assert_eq!(row.name, "train_model");
        assert_eq!(row.user, "user1");
        assert_eq!(row.state, "RUNNING");
        assert_eq!(row.time, "10:34");
        assert_eq!(row.time_limit, "3-00:00:00");
        assert_eq!(row.nodes, "1");
        assert_eq!(row.node_list, "node-a1");
    }

    #[test]
    fn test_pending_reason_kept_as_node_list() {
        let line = "1336162 cpu-low data_proc_2 user2 PENDING 0:00 1-00:00:00 1 (Resources)";
        let row = parse_queue_row(line).unwrap();
        assert_eq!(row.state, "PENDING");
        assert_eq!(row.node_list, "(Resources)");
    }

    #[test]
    fn test_short_rows_dropped() {
        let rows = parse_queue_rows(&["too few columns".to_string()]);
        assert!(rows.is_empty());
    }
}
