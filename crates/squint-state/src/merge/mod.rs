//! Cross-source reconciliation: scontrol job details into the queue,
//! accounting rows into parent/step history records.

mod detail;
mod sacct;

pub use detail::merge_job_details;
pub use sacct::fold_history;
