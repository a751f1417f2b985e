//! Display-only derivations from normalized snapshot fields.

use crate::types::{HistoryItem, Node};
use squint_parsers::{leading_f64, parse_gres_decl, parse_mem_mb, parse_quantity, parse_tres};
use std::collections::{BTreeMap, BTreeSet};

/// Allocated versus configured amount of one node resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utilization {
    pub alloc: f64,
    pub total: f64,
}

impl Utilization {
    pub fn percent(&self) -> f64 {
        if self.total > 0.0 {
            self.alloc / self.total * 100.0
        } else {
            0.0
        }
    }
}

fn attr<'a>(node: &'a Node, key: &str) -> &'a str {
    node.attrs.get(key).map(String::as_str).unwrap_or("")
}

/// CPU allocation for a node, preferring the TRES descriptors and
/// falling back to the `CPUTot`/`CPUAlloc` attributes.
pub fn cpu_utilization(node: &Node) -> Utilization {
    let cfg = parse_tres(attr(node, "CfgTRES"));
    let alloc = parse_tres(attr(node, "AllocTRES"));

    let pick = |tres_cpu: &str, fallback: &str| match tres_cpu.parse::<f64>() {
        Ok(v) if v > 0.0 => v,
        _ => leading_f64(fallback).unwrap_or(0.0),
    };

    Utilization {
        alloc: pick(&alloc.cpu, attr(node, "CPUAlloc")),
        total: pick(&cfg.cpu, attr(node, "CPUTot")),
    }
}

/// Memory allocation for a node in MB, preferring the TRES descriptors
/// and falling back to `RealMemory`/`AllocMem` (already MB).
pub fn memory_utilization(node: &Node) -> Utilization {
    let cfg = parse_tres(attr(node, "CfgTRES"));
    let alloc = parse_tres(attr(node, "AllocTRES"));

    let pick = |tres_mem: &str, fallback: &str| {
        if tres_mem != "N/A" {
            parse_mem_mb(tres_mem)
        } else {
            parse_mem_mb(fallback)
        }
    };

    Utilization {
        alloc: pick(&alloc.mem, attr(node, "AllocMem")),
        total: pick(&cfg.mem, attr(node, "RealMemory")),
    }
}

/// GRES allocation per resource name, sorted for display.
///
/// Configured totals prefer the `CfgTRES` descriptor and fall back to
/// the node's `Gres=` declaration (which carries counts the TRES string
/// sometimes omits). Resources with neither a total nor an allocation
/// are left out.
pub fn gres_utilization(node: &Node) -> BTreeMap<String, Utilization> {
    let cfg = parse_tres(attr(node, "CfgTRES"));
    let alloc = parse_tres(attr(node, "AllocTRES"));
    let declared = parse_gres_decl(attr(node, "Gres"));

    let mut names: BTreeSet<String> = cfg.gres.keys().cloned().collect();
    names.extend(alloc.gres.keys().cloned());
    names.extend(declared.keys().cloned());

    let mut usage = BTreeMap::new();
    for name in names {
        let total = cfg
            .gres
            .get(&name)
            .map(|v| parse_quantity(v))
            .or_else(|| declared.get(&name).copied())
            .unwrap_or(0.0);
        let allocated = alloc
            .gres
            .get(&name)
            .map(|v| parse_quantity(v))
            .unwrap_or(0.0);
        if total == 0.0 && allocated == 0.0 {
            continue;
        }
        usage.insert(
            name,
            Utilization {
                alloc: allocated,
                total,
            },
        );
    }
    usage
}

/// Resolve a history item's requested memory for display.
///
/// sacct reports per-core requests with a `c` suffix (`32000Mc`), which
/// scale by the requested CPU count; the per-node `n` / per-core `c`
/// marker is stripped either way.
pub fn effective_req_mem(item: &HistoryItem) -> String {
    let mut req = item.req_mem.clone();

    if req.ends_with('c') {
        if let (Some(value), Ok(cpus)) = (leading_f64(&req), item.req_cpus.parse::<f64>()) {
            let unit: String = req
                .chars()
                .filter(|c| !c.is_ascii_digit() && *c != '.' && *c != 'c')
                .collect();
            req = format!("{}{}", value * cpus, unit);
        }
    }

    if req.ends_with(['n', 'c', 'N', 'C']) {
        req.pop();
    }
    req
}
