//! TRES and GRES descriptor parsing.
//!
//! TRES strings are the compact `key=value,...` resource notation found
//! in `CfgTRES=` / `AllocTRES=` / `ReqTRES=` attributes. GRES declarations
//! are the colon-separated `name[:subtype]:count` form of the node-level
//! `Gres=` attribute.

use crate::units::parse_quantity;
use std::collections::HashMap;

/// Structured summary of one TRES descriptor string.
///
/// Values are kept as raw strings; the caller decides which unit regime
/// applies. GRES entries are keyed by the name with the `gres/` prefix
/// stripped, subtype qualifiers (`gpu:a100`) kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct TresSummary {
    pub cpu: String,
    pub mem: String,
    pub gres: HashMap<String, String>,
}

impl Default for TresSummary {
    fn default() -> Self {
        Self {
            cpu: "0".to_string(),
            mem: "N/A".to_string(),
            gres: HashMap::new(),
        }
    }
}

/// Parse a comma-separated TRES descriptor (`cpu=32,mem=256000M,...`).
///
/// Unrecognized keys (`node`, `billing`, ...) are ignored.
pub fn parse_tres(tres: &str) -> TresSummary {
    let mut summary = TresSummary::default();
    for entry in tres.split(',') {
        let Some((key, value)) = entry.split_once('=') else {
            continue;
        };
        if key == "cpu" {
            summary.cpu = value.to_string();
        } else if key == "mem" {
            summary.mem = value.to_string();
        } else if let Some(name) = key.strip_prefix("gres/") {
            summary.gres.insert(name.to_string(), value.to_string());
        }
    }
    summary
}

/// Parse a node-level GRES declaration (`gpu:a100:4,tmpfs:100G`).
///
/// The trailing field is the count, decimal-normalized, with any
/// parenthetical suffix (`4(S:0-1)`) discarded. The remaining fields
/// joined by `:` form the resource name.
pub fn parse_gres_decl(gres: &str) -> HashMap<String, f64> {
    let mut counts = HashMap::new();
    if gres.is_empty() {
        return counts;
    }
    for entry in gres.split(',') {
        // The parenthetical suffix can itself contain `:` (socket
        // affinity), so drop it before splitting the fields.
        let entry = entry.find('(').map_or(entry, |i| &entry[..i]);
        let parts: Vec<&str> = entry.split(':').collect();
        if parts.len() < 2 {
            continue;
        }
        let name = parts[..parts.len() - 1].join(":");
        counts.insert(name, parse_quantity(parts[parts.len() - 1]));
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tres() {
        let tres = parse_tres("cpu=32,mem=256000M,billing=32,gres/gpu=4,gres/gpu:a100=4");
        assert_eq!(tres.cpu, "32");
        assert_eq!(tres.mem, "256000M");
        assert_eq!(tres.gres.get("gpu").unwrap(), "4");
        assert_eq!(tres.gres.get("gpu:a100").unwrap(), "4");
        assert_eq!(tres.gres.len(), 2);
    }

    #[test]
    fn test_parse_tres_empty() {
        let tres = parse_tres("");
        assert_eq!(tres.cpu, "0");
        assert_eq!(tres.mem, "N/A");
        assert!(tres.gres.is_empty());
    }

    #[test]
    fn test_parse_gres_decl() {
        let gres = parse_gres_decl("gpu:a100:4,tmpfs:100G");
        assert_eq!(gres.get("gpu:a100"), Some(&4.0));
        assert_eq!(gres.get("tmpfs"), Some(&100_000_000_000.0));
    }

    #[test]
    fn test_parse_gres_decl_parenthetical() {
        let gres = parse_gres_decl("gpu:v100:4(S:0-1)");
        assert_eq!(gres.get("gpu:v100"), Some(&4.0));
        assert_eq!(gres.len(), 1);
    }

    #[test]
    fn test_parse_gres_decl_parenthetical_in_list() {
        let gres = parse_gres_decl("gpu:a100:4(S:0-1),tmpfs:100G");
        assert_eq!(gres.get("gpu:a100"), Some(&4.0));
        assert_eq!(gres.get("tmpfs"), Some(&100_000_000_000.0));
        assert_eq!(gres.len(), 2);
    }

    #[test]
    fn test_parse_gres_decl_bare_name_skipped() {
        assert!(parse_gres_decl("gpu").is_empty());
        assert!(parse_gres_decl("").is_empty());
    }
}
