//! Unit normalizers for suffixed quantity strings.
//!
//! Slurm uses two distinct unit regimes that must never be mixed:
//! memory strings are binary (K/M/G/T against 1024, canonical unit MB),
//! while generic resource counts are decimal (K/M/G against 1000).

/// Parse the longest leading float literal of a string.
///
/// Mirrors how Slurm's own tools treat values like "256000M" or "8.60":
/// the numeric prefix is the value, anything after it is the unit.
pub fn leading_f64(s: &str) -> Option<f64> {
    let mut end = 0;
    for (i, c) in s.char_indices() {
        let ok = c.is_ascii_digit()
            || c == '.'
            || (i == 0 && (c == '-' || c == '+'));
        if !ok {
            break;
        }
        end = i + c.len_utf8();
    }
    s[..end].parse().ok()
}

/// Normalize a memory string to megabytes (binary regime).
///
/// Suffixes: K divides by 1024, G multiplies by 1024, T by 1024^2,
/// M or no suffix is taken as MB. Empty or non-numeric input yields 0.
pub fn parse_mem_mb(s: &str) -> f64 {
    let Some(value) = leading_f64(s) else {
        return 0.0;
    };
    match s.chars().last().map(|c| c.to_ascii_uppercase()) {
        Some('G') => value * 1024.0,
        Some('T') => value * 1024.0 * 1024.0,
        Some('K') => value / 1024.0,
        _ => value,
    }
}

/// Normalize a generic resource count with an optional K/M/G suffix
/// (decimal regime). Empty or non-numeric input yields 0.
pub fn parse_quantity(s: &str) -> f64 {
    let Some(value) = leading_f64(s) else {
        return 0.0;
    };
    match s.chars().last().map(|c| c.to_ascii_uppercase()) {
        Some('K') => value * 1000.0,
        Some('M') => value * 1_000_000.0,
        Some('G') => value * 1_000_000_000.0,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_f64() {
        assert_eq!(leading_f64("256000M"), Some(256000.0));
        assert_eq!(leading_f64("8.60"), Some(8.6));
        assert_eq!(leading_f64("-3d"), Some(-3.0));
        assert_eq!(leading_f64("garbage"), None);
        assert_eq!(leading_f64(""), None);
    }

    #[test]
    fn test_parse_mem_mb() {
        assert_eq!(parse_mem_mb("256000M"), 256000.0);
        assert_eq!(parse_mem_mb("250G"), 256000.0);
        assert_eq!(parse_mem_mb("1T"), 1048576.0);
        assert_eq!(parse_mem_mb("2048K"), 2.0);
        assert_eq!(parse_mem_mb("4096"), 4096.0);
        assert_eq!(parse_mem_mb("UNLIMITED"), 0.0);
        assert_eq!(parse_mem_mb(""), 0.0);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("4"), 4.0);
        assert_eq!(parse_quantity("2K"), 2000.0);
        assert_eq!(parse_quantity("3M"), 3_000_000.0);
        assert_eq!(parse_quantity("1G"), 1_000_000_000.0);
        assert_eq!(parse_quantity("100g"), 100_000_000_000.0);
        assert_eq!(parse_quantity("N/A"), 0.0);
    }
}
