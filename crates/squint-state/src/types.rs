//! Cluster snapshot types.
//!
//! Each record keeps a well-defined core field set as raw strings plus a
//! raw attribute container (`attrs` / `detail`) holding every key seen
//! in the input, so unknown attributes survive for downstream consumers.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A named scheduling pool of nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub name: String,

    /// Expanded host names spanned by this partition.
    pub nodes: HashSet<String>,

    /// Every raw attribute of the `PartitionName=` line.
    pub attrs: HashMap<String, String>,
}

/// A single compute host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,

    /// Every raw attribute of the `NodeName=` line.
    pub attrs: HashMap<String, String>,
}

/// A job currently pending or running.
///
/// Built from a squeue table row, optionally enriched in place by a
/// matching `scontrol show job` detail record; detail-only jobs are
/// synthesized entirely from their detail fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    /// Opaque job identifier (may carry array suffixes)
    pub job_id: String,

    pub partition: String,

    /// Display name
    pub name: String,

    pub user: String,

    pub state: String,

    /// Elapsed time, raw (`10:34`, `1-00:27:16`)
    pub elapsed: String,

    pub time_limit: String,

    /// Assigned node count column, raw
    pub nodes: String,

    /// Node list or pending reason, unexpanded
    pub node_list: String,

    /// Full detail mapping when a per-job dump was present
    pub detail: Option<HashMap<String, String>>,
}

/// A terminated job from the accounting report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub job_id: String,
    pub name: String,
    pub user: String,
    pub partition: String,
    pub state: String,
    pub start: String,
    pub end: String,
    pub elapsed: String,
    pub req_mem: String,
    pub req_cpus: String,
    pub req_tres: String,

    /// Sub-steps (`<job_id>.batch`, `<job_id>.0`, ...) in input order.
    pub steps: Vec<HistoryStep>,
}

/// One step of a history item. Same shape as the parent, no recursion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStep {
    pub job_id: String,
    pub name: String,
    pub user: String,
    pub partition: String,
    pub state: String,
    pub start: String,
    pub end: String,
    pub elapsed: String,
    pub req_mem: String,
    pub req_cpus: String,
    pub req_tres: String,
}

/// The root aggregate produced by one parse.
///
/// Immutable once built; re-parsing the same input produces a field-wise
/// equal snapshot. Safe to share across threads read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    pub partitions: HashMap<String, Partition>,
    pub nodes: HashMap<String, Node>,

    /// Queue items in order of first appearance; detail-only entries
    /// appended at the position they were discovered.
    pub queue: Vec<QueueItem>,

    /// History items in first-seen base-identifier order.
    pub history: Vec<HistoryItem>,

    /// The raw detected timestamp line, if any.
    pub collected_at: Option<String>,

    /// The detected UTC offset token (`Z` or `±HH:MM`), if any.
    pub utc_offset: Option<String>,
}
