use crate::error::OracleError;
use regex::Regex;
use std::sync::OnceLock;

/// Node count and logic depth reported by one `print_stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthStats {
    pub nodes: i64,
    pub levels: i64,
}

fn level_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\blev\s*=\s*(\d+)").expect("static regex"))
}

fn node_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bnd\s*=\s*(\d+)").expect("static regex"))
}

fn capture_int(re: &Regex, line: &str) -> Option<i64> {
    re.captures(line)?.get(1)?.as_str().parse().ok()
}

/// Scans `output` bottom-up and returns the stats of the last line carrying
/// both `lev = N` and `nd = N`.
pub fn parse_stats(output: &str) -> Result<SynthStats, OracleError> {
    for line in output.lines().rev() {
        if let (Some(levels), Some(nodes)) =
            (capture_int(level_re(), line), capture_int(node_re(), line))
        {
            return Ok(SynthStats { nodes, levels });
        }
    }

    let tail: Vec<&str> = output.lines().rev().take(5).collect();
    Err(OracleError::Parse(
        tail.into_iter().rev().collect::<Vec<_>>().join(" | "),
    ))
}
