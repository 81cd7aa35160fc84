pub mod runner;
pub mod stats;
pub mod synth;

pub use self::runner::{AbcRunner, ToolRunner};
pub use self::stats::{parse_stats, SynthStats};
pub use self::synth::{Baseline, OracleStats, SynthOracle};

use crate::bitstring::Bitstring;
use crate::error::OracleError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Black-box fitness function. Lower is better; `Err` means the candidate
/// could not be scored.
pub trait Oracle {
    fn evaluate(&mut self, bits: &Bitstring) -> Result<f64, OracleError>;
}

impl<F> Oracle for F
where
    F: FnMut(&Bitstring) -> Result<f64, OracleError>,
{
    fn evaluate(&mut self, bits: &Bitstring) -> Result<f64, OracleError> {
        self(bits)
    }
}

/// Which ratio(s) against the baseline make up the score.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum QorMode {
    Lut,
    Level,
    #[default]
    Combined,
}

impl QorMode {
    pub fn score(self, stats: SynthStats, baseline: Baseline) -> f64 {
        let lut_ratio = stats.nodes as f64 / baseline.nodes as f64;
        let level_ratio = stats.levels as f64 / baseline.levels as f64;
        match self {
            Self::Lut => lut_ratio,
            Self::Level => level_ratio,
            Self::Combined => lut_ratio + level_ratio,
        }
    }

    /// Score of a candidate that exactly matches the baseline.
    pub fn parity(self) -> f64 {
        match self {
            Self::Lut | Self::Level => 1.0,
            Self::Combined => 2.0,
        }
    }

    /// Percent better than the baseline (negative when worse).
    pub fn improvement_pct(self, score: f64) -> f64 {
        (1.0 - score / self.parity()) * 100.0
    }
}
