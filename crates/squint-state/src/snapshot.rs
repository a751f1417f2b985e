//! Snapshot assembly: classified lines to one `ClusterSnapshot`.

use crate::merge::{fold_history, merge_job_details};
use crate::types::{ClusterSnapshot, Node, Partition, QueueItem};
use squint_parsers::expand_host_list;
use squint_slurm::{
    classify, parse_detail_records, parse_node_records, parse_partition_records,
    parse_queue_rows, parse_sacct_rows, QueueRow,
};
use std::collections::HashMap;

fn queue_item(row: QueueRow) -> QueueItem {
    QueueItem {
        job_id: row.job_id,
        partition: row.partition,
        name: row.name,
        user: row.user,
        state: row.state,
        elapsed: row.time,
        time_limit: row.time_limit,
        nodes: row.nodes,
        node_list: row.node_list,
        detail: None,
    }
}

/// Parse one pasted blob into a snapshot.
///
/// Total for arbitrary text: unrecognized lines are dropped, missing
/// sections yield empty collections. Each call builds a wholly new
/// snapshot; there is no cross-call state. Repeated partition or node
/// names keep the last-seen line.
pub fn build_snapshot(raw: &str) -> ClusterSnapshot {
    let segments = classify(raw);

    let mut partitions = HashMap::new();
    for attrs in parse_partition_records(&segments.partition_lines) {
        let name = attrs.get("PartitionName").cloned().unwrap_or_default();
        let nodes = expand_host_list(attrs.get("Nodes").map(String::as_str).unwrap_or(""));
        partitions.insert(name.clone(), Partition { name, nodes, attrs });
    }

    let mut nodes = HashMap::new();
    for attrs in parse_node_records(&segments.node_lines) {
        let name = attrs.get("NodeName").cloned().unwrap_or_default();
        nodes.insert(name.clone(), Node { name, attrs });
    }

    let mut queue: Vec<QueueItem> = parse_queue_rows(&segments.queue_lines)
        .into_iter()
        .map(queue_item)
        .collect();
    merge_job_details(&mut queue, parse_detail_records(&segments.detail_lines));

    let history = fold_history(parse_sacct_rows(&segments.sacct_lines));

    ClusterSnapshot {
        partitions,
        nodes,
        queue,
        history,
        collected_at: segments.collected_at,
        utc_offset: segments.utc_offset,
    }
}
