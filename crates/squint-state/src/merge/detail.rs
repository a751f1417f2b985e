//! Queue / job-detail reconciliation.

use crate::types::QueueItem;
use std::collections::HashMap;

/// Strip the `(uid)` parenthetical from a `UserId=user1(1001)` value.
fn strip_uid(user: &str) -> String {
    user.split('(').next().unwrap_or_default().to_string()
}

/// Merge `scontrol show job` detail records into the queue, in input order.
///
/// A record matching an existing queue item's job id overwrites each
/// typed field whose detail key is present (detail wins) and attaches the
/// full mapping for resource-breakdown display. A record with no match
/// synthesizes a new item from the detail fields alone, appended at the
/// position it was discovered. Later records for the same id win.
pub fn merge_job_details(queue: &mut Vec<QueueItem>, details: Vec<HashMap<String, String>>) {
    for detail in details {
        let Some(job_id) = detail.get("JobId").cloned() else {
            continue;
        };

        match queue.iter_mut().find(|item| item.job_id == job_id) {
            Some(item) => {
                if let Some(v) = detail.get("Partition") {
                    item.partition = v.clone();
                }
                if let Some(v) = detail.get("JobName") {
                    item.name = v.clone();
                }
                if let Some(v) = detail.get("UserId") {
                    item.user = strip_uid(v);
                }
                if let Some(v) = detail.get("JobState") {
                    item.state = v.clone();
                }
                if let Some(v) = detail.get("RunTime") {
                    item.elapsed = v.clone();
                }
                if let Some(v) = detail.get("TimeLimit") {
                    item.time_limit = v.clone();
                }
                if let Some(v) = detail.get("NodeList") {
                    item.node_list = v.clone();
                }
                item.detail = Some(detail);
            }
            None => {
                let get = |key: &str| detail.get(key).cloned().unwrap_or_default();
                let node_list = get("NodeList");
                queue.push(QueueItem {
                    job_id,
                    partition: get("Partition"),
                    name: get("JobName"),
                    user: strip_uid(&get("UserId")),
                    state: get("JobState"),
                    elapsed: get("RunTime"),
                    time_limit: get("TimeLimit"),
                    nodes: node_list.clone(),
                    node_list,
                    detail: Some(detail),
                });
            }
        }
    }
}
