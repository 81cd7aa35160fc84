pub mod elite;
pub mod initialization;
pub mod refine;
pub mod runner;
pub mod velocity;

pub use self::elite::EliteMemory;
pub use self::runner::{
    BinaryPso, IterationReport, OptimizationOptions, OptimizationResult, ProgressCallback,
    SwarmState,
};

use crate::bitstring::Bitstring;
use strum_macros::Display;

/// Fitness assigned to a particle whose evaluation failed.
pub const FAILURE_PENALTY: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchMode {
    #[strum(to_string = "EXPLORATION")]
    Exploration,
    #[strum(to_string = "EXPLOITATION")]
    Exploitation,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Bitstring,
    pub velocity: Vec<f64>,
    pub best_position: Bitstring,
    pub best_score: f64,
}

impl Particle {
    /// Fresh particle whose personal best is its start position, unscored.
    pub fn new(position: Bitstring, velocity: Vec<f64>) -> Self {
        Self {
            best_position: position.clone(),
            position,
            velocity,
            best_score: f64::INFINITY,
        }
    }

    /// Records `score` for the current position; returns true on a new
    /// personal best.
    pub fn observe(&mut self, score: f64) -> bool {
        if score < self.best_score {
            self.best_score = score;
            self.best_position = self.position.clone();
            true
        } else {
            false
        }
    }
}
