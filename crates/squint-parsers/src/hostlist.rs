//! Slurm host-list range expansion.
//!
//! Expands compressed notation like `node-a1,node-b[1-2,5]` into the
//! explicit set of host names.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Top-level groups: either `prefix[ranges]` (commas inside the brackets
/// do not split) or a plain comma-separated token.
static GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^,\[]+\[[^\]]+\][^,]*|[^,]+").unwrap());

/// One bracketed group: prefix, range list, optional suffix.
static BRACKET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^\[]+)\[([^\]]+)\](.*)$").unwrap());

/// A numeric `start-end` range item.
static RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)-(\d+)$").unwrap());

/// Expand a host-list string into the set of explicit host names.
///
/// The literal `(null)` and the empty string expand to an empty set.
/// Numeric ranges inherit zero-padding from the width of the range start
/// (`node[01-03]` yields `node01..node03`). A group matching neither
/// shape is kept verbatim rather than dropped.
pub fn expand_host_list(hosts: &str) -> HashSet<String> {
    let mut expanded = HashSet::new();
    if hosts.is_empty() || hosts == "(null)" {
        return expanded;
    }

    for group in GROUP_RE.find_iter(hosts) {
        expand_group(group.as_str(), &mut expanded);
    }
    expanded
}

/// Expand the first bracket expression of one group, recursing so a
/// suffix carrying a further bracket group (`a[1-2]b[3-4]`) is expanded
/// too instead of leaking range syntax into the result.
fn expand_group(group: &str, expanded: &mut HashSet<String>) {
    let Some(caps) = BRACKET_RE.captures(group) else {
        expanded.insert(group.to_string());
        return;
    };
    let prefix = &caps[1];
    let suffix = &caps[3];
    for item in caps[2].split(',') {
        if let Some(range) = RANGE_RE.captures(item) {
            let width = range[1].len();
            let (start, end) = (range[1].parse::<u64>(), range[2].parse::<u64>());
            if let (Ok(start), Ok(end)) = (start, end) {
                for i in start..=end {
                    expand_group(&format!("{prefix}{i:0width$}{suffix}"), expanded);
                }
                continue;
            }
        }
        expand_group(&format!("{prefix}{item}{suffix}"), expanded);
    }
}
