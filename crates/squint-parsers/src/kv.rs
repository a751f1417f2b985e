//! Key=value line splitting for `scontrol --oneliner` output.

use std::collections::HashMap;

/// Split a space-delimited `KEY=VALUE KEY=VALUE ...` line into a map.
///
/// Tokens are split on the first `=` only, so values containing `=`
/// (e.g. `JobDefaults=(null)` style markers) survive intact. Tokens
/// without `=` are skipped; the last occurrence of a repeated key wins.
pub fn parse_kv_line(line: &str) -> HashMap<String, String> {
    let mut data = HashMap::new();
    for token in line.split(' ') {
        if let Some((key, value)) = token.split_once('=') {
            if !key.is_empty() {
                data.insert(key.to_string(), value.to_string());
            }
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kv_line() {
        let map = parse_kv_line("PartitionName=gpu-high State=UP TotalCPUs=128");
        assert_eq!(map.get("PartitionName").unwrap(), "gpu-high");
        assert_eq!(map.get("State").unwrap(), "UP");
        assert_eq!(map.get("TotalCPUs").unwrap(), "128");
    }

    #[test]
    fn test_value_with_embedded_equals() {
        let map = parse_kv_line("JobName=run=final TresPerNode=gres/gpu=2");
        assert_eq!(map.get("JobName").unwrap(), "run=final");
        assert_eq!(map.get("TresPerNode").unwrap(), "gres/gpu=2");
    }

    #[test]
    fn test_skips_bare_tokens_and_repeats() {
        let map = parse_kv_line("orphan State=UP State=DOWN");
        assert!(!map.contains_key("orphan"));
        assert_eq!(map.get("State").unwrap(), "DOWN");
    }
}
