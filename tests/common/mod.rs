#![allow(dead_code)]

use synthforge::bitstring::Bitstring;
use synthforge::cache::QorCache;
use synthforge::oracle::{QorMode, SynthOracle, ToolRunner};
use synthforge::actions::Vocabulary;
use synthforge::OracleError;

pub const DESIGN: &str = "benchmarks/arithmetic/log2.blif";

pub fn bits(s: &str) -> Bitstring {
    s.parse().expect("test bitstring")
}

pub fn stats_line(nodes: i64, levels: i64) -> String {
    format!(
        "log2 : i/o = 32/ 32  lat = 0  nd = {}  edge = 28925  aig = 61420  lev = {}",
        nodes, levels
    )
}

/// Stand-in for the synthesis binary. Reference runs report
/// `baseline`; every other script reports `candidate`. Scripts containing
/// `fail_on` exit non-zero.
pub struct FakeAbc {
    pub scripts: Vec<String>,
    pub baseline: (i64, i64),
    pub candidate: (i64, i64),
    pub fail_on: Option<String>,
}

impl FakeAbc {
    pub fn new(baseline: (i64, i64), candidate: (i64, i64)) -> Self {
        Self {
            scripts: Vec::new(),
            baseline,
            candidate,
            fail_on: None,
        }
    }

    pub fn failing_on(mut self, needle: &str) -> Self {
        self.fail_on = Some(needle.to_string());
        self
    }

    pub fn reference_runs(&self) -> usize {
        self.scripts.iter().filter(|s| is_reference(s)).count()
    }
}

fn is_reference(script: &str) -> bool {
    script.contains("resyn2") || script.contains("&if -g; &dch; &lf")
}

impl ToolRunner for FakeAbc {
    fn run(&mut self, script: &str) -> Result<String, OracleError> {
        self.scripts.push(script.to_string());

        if let Some(needle) = &self.fail_on {
            if script.contains(needle.as_str()) {
                return Err(OracleError::ToolExit {
                    status: "exit status: 1".to_string(),
                    tail: "Error: command failed".to_string(),
                });
            }
        }

        let (nodes, levels) = if is_reference(script) {
            self.baseline
        } else {
            self.candidate
        };
        Ok(format!("ABC command line: \"{}\"\n{}\n", script, stats_line(nodes, levels)))
    }
}

pub fn fake_oracle(runner: FakeAbc, mode: QorMode) -> SynthOracle<FakeAbc> {
    SynthOracle::new(
        runner,
        QorCache::in_memory(),
        DESIGN,
        Vocabulary::Generic,
        mode,
    )
}
