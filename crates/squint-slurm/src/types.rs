//! Raw record types for the individual Slurm output formats.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("malformed squeue row (expected at least 8 columns): {0}")]
    QueueRow(String),
    #[error("malformed sacct row (expected at least 8 fields): {0}")]
    SacctRow(String),
}

/// One row of the squeue fixed-width table.
///
/// All fields are raw strings; the job id is opaque text since real ids
/// may carry array suffixes like `1336199_4`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueRow {
    pub job_id: String,
    pub partition: String,
    pub name: String,
    pub user: String,
    pub state: String,
    /// Elapsed time column (`TIME`)
    pub time: String,
    pub time_limit: String,
    /// Assigned node count column (`NODES`)
    pub nodes: String,
    /// `NODELIST(REASON)` tail, unexpanded
    pub node_list: String,
}

/// One row of `sacct --parsable2` accounting output.
///
/// The trailing `ReqMem`/`ReqCPUS`/`ReqTRES` fields are empty for step
/// rows, which only report the core identification fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SacctRow {
    pub job_id: String,
    pub job_name: String,
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
