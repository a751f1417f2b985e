//! Cluster snapshot assembly for squint.
//!
//! Reconciles the classified Slurm record buckets into one immutable
//! `ClusterSnapshot`, and derives display-only values from it.

pub mod display;
pub mod merge;
pub mod snapshot;
pub mod types;

pub use display::{
    cpu_utilization, effective_req_mem, gres_utilization, memory_utilization, Utilization,
};
pub use merge::{fold_history, merge_job_details};
pub use snapshot::build_snapshot;
pub use types::{ClusterSnapshot, HistoryItem, HistoryStep, Node, Partition, QueueItem};
