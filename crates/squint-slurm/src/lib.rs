//! Slurm output format detection and record building.
//!
//! Classifies raw pasted lines into per-format buckets, then turns each
//! bucket into typed records for the state layer to reconcile.

pub mod classify;
pub mod sacct;
pub mod scontrol;
pub mod squeue;
pub mod types;

pub use classify::{classify, Segments};
pub use sacct::parse_sacct_rows;
pub use scontrol::{parse_detail_records, parse_node_records, parse_partition_records};
pub use squeue::parse_queue_rows;
pub use types::{QueueRow, RecordError, SacctRow};
