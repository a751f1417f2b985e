//! Accounting parent/step folding.

use crate::types::{HistoryItem, HistoryStep};
use squint_slurm::SacctRow;
use std::collections::HashMap;

/// A job id containing `.` denotes a step of the base id before the dot.
fn base_id(job_id: &str) -> &str {
    job_id.split('.').next().unwrap_or(job_id)
}

fn parent_from(row: &SacctRow) -> HistoryItem {
    HistoryItem {
        job_id: row.job_id.clone(),
        name: row.job_name.clone(),
        user: row.user.clone(),
        partition: row.partition.clone(),
        state: row.state.clone(),
        start: row.start.clone(),
        end: row.end.clone(),
        elapsed: row.elapsed.clone(),
        req_mem: row.req_mem.clone(),
        req_cpus: row.req_cpus.clone(),
        req_tres: row.req_tres.clone(),
        steps: Vec::new(),
    }
}

fn step_from(row: SacctRow) -> HistoryStep {
    HistoryStep {
        job_id: row.job_id,
        name: row.job_name,
        user: row.user,
        partition: row.partition,
        state: row.state,
        start: row.start,
        end: row.end,
        elapsed: row.elapsed,
        req_mem: row.req_mem,
        req_cpus: row.req_cpus,
        req_tres: row.req_tres,
    }
}

/// An empty parent shell for a step seen before any parent row.
fn empty_parent(base: &str) -> HistoryItem {
    HistoryItem {
        job_id: base.to_string(),
        name: String::new(),
        user: String::new(),
        partition: String::new(),
        state: String::new(),
        start: String::new(),
        end: String::new(),
        elapsed: String::new(),
        req_mem: String::new(),
        req_cpus: String::new(),
        req_tres: String::new(),
        steps: Vec::new(),
    }
}

/// Fold accounting rows into history items keyed by base job id.
///
/// Parent rows create the item on first sight or overlay its fields on
/// repeat sight (accounting tools may emit a pending row followed by a
/// completed row for the same id). Step rows only append to their base's
/// step list, never touching parent-level fields. Output order is the
/// first-seen order of base ids.
pub fn fold_history(rows: Vec<SacctRow>) -> Vec<HistoryItem> {
    let mut items: Vec<HistoryItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let base = base_id(&row.job_id).to_string();
        let is_step = row.job_id.contains('.');

        let slot = match index.get(&base) {
            Some(&i) => {
                if !is_step {
                    let steps = std::mem::take(&mut items[i].steps);
                    items[i] = parent_from(&row);
                    items[i].steps = steps;
                }
                i
            }
            None => {
                let item = if is_step {
                    empty_parent(&base)
                } else {
                    parent_from(&row)
                };
                items.push(item);
                index.insert(base, items.len() - 1);
                items.len() - 1
            }
        };

        if is_step {
            items[slot].steps.push(step_from(row));
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(job_id: &str, state: &str) -> SacctRow {
        SacctRow {
            job_id: job_id.to_string(),
            job_name: "job".to_string(),
            user: "user1".to_string(),
            partition: "gpu-high".to_string(),
            state: state.to_string(),
            start: "2025-07-04T15:29:40".to_string(),
            end: "2025-07-04T21:07:32".to_string(),
            elapsed: "05:37:52".to_string(),
            req_mem: "32000Mc".to_string(),
            req_cpus: "2".to_string(),
            req_tres: "gpu:1".to_string(),
        }
    }

    #[test]
    fn test_parent_then_step() {
        let items = fold_history(vec![row("7", "COMPLETED"), row("7.batch", "COMPLETED")]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].job_id, "7");
        assert_eq!(items[0].steps.len(), 1);
        assert_eq!(items[0].steps[0].job_id, "7.batch");
    }

    #[test]
    fn test_step_before_parent() {
        let items = fold_history(vec![row("7.batch", "COMPLETED"), row("7", "FAILED")]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].job_id, "7");
        assert_eq!(items[0].state, "FAILED");
        assert_eq!(items[0].steps.len(), 1);
    }

    #[test]
    fn test_repeated_parent_overlays_and_keeps_steps() {
        let items = fold_history(vec![
            row("7", "PENDING"),
            row("7.0", "RUNNING"),
            row("7", "COMPLETED"),
        ]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].state, "COMPLETED");
        assert_eq!(items[0].steps.len(), 1);
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let items = fold_history(vec![
            row("9", "COMPLETED"),
            row("3", "FAILED"),
            row("9.batch", "COMPLETED"),
        ]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].job_id, "9");
        assert_eq!(items[1].job_id, "3");
    }

    #[test]
    fn test_step_never_touches_parent_fields() {
        let items = fold_history(vec![row("7", "COMPLETED"), row("7.batch", "FAILED")]);
        assert_eq!(items[0].state, "COMPLETED");
        assert_eq!(items[0].steps[0].state, "FAILED");
    }
}
