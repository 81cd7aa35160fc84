use crate::actions::Vocabulary;
use crate::error::{SfResult, SynthForgeError};
use crate::oracle::QorMode;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub oracle: OracleParams,
    #[command(flatten)]
    pub output: OutputParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[arg(long, default_value_t = 100)]
    pub particles: usize,
    /// Bitstring length; must be a multiple of 4.
    #[arg(long, default_value_t = 80)]
    pub dimensions: usize,
    #[arg(long, default_value_t = 100)]
    pub iterations: usize,

    // === Velocity update ===
    /// Inertia weight at iteration 0 (w_max).
    #[arg(long, default_value_t = 5.0)]
    pub inertia: f64,
    /// Inertia weight the schedule decays towards (w_min).
    #[arg(long, default_value_t = 0.4)]
    pub inertia_min: f64,
    #[arg(long, default_value_t = 1.7)]
    pub cognitive: f64,
    #[arg(long, default_value_t = 1.3)]
    pub social: f64,

    // === Diversity control ===
    #[arg(long, default_value_t = 15)]
    pub stall_limit: usize,
    #[arg(long, default_value_t = 10)]
    pub explore_trigger: usize,
    #[arg(long, default_value_t = 0.2)]
    pub mutation_rate: f64,
    #[arg(long, default_value_t = 5)]
    pub elite_capacity: usize,

    /// Hill-climb the global best every N iterations.
    #[arg(long, default_value_t = 20)]
    pub refine_interval: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            particles: 100,
            dimensions: 80,
            iterations: 100,
            inertia: 5.0,
            inertia_min: 0.4,
            cognitive: 1.7,
            social: 1.3,
            stall_limit: 15,
            explore_trigger: 10,
            mutation_rate: 0.2,
            elite_capacity: 5,
            refine_interval: 20,
            seed: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleParams {
    #[arg(short, long, default_value = "benchmarks/arithmetic/log2.blif")]
    pub design: String,
    #[arg(long, value_enum, default_value_t = QorMode::Combined)]
    pub qor_mode: QorMode,
    #[arg(long, value_enum, default_value_t = Vocabulary::Generic)]
    pub vocabulary: Vocabulary,
    #[arg(long, default_value = "yosys-abc")]
    pub abc_binary: String,
}

impl Default for OracleParams {
    fn default() -> Self {
        Self {
            design: "benchmarks/arithmetic/log2.blif".to_string(),
            qor_mode: QorMode::Combined,
            vocabulary: Vocabulary::Generic,
            abc_binary: "yosys-abc".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputParams {
    /// Directory holding the per-design QoR caches.
    #[arg(long, default_value = "logs")]
    pub log_dir: String,
    #[arg(long, default_value = "logs/final_result.csv")]
    pub results_csv: String,
    #[arg(long, default_value = "logs/convergence.csv")]
    pub convergence_csv: String,
}

impl Default for OutputParams {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            results_csv: "logs/final_result.csv".to_string(),
            convergence_csv: "logs/convergence.csv".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SynthForgeError::Config(format!("Failed to read config {:?}: {}", path, e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn validate(&self) -> SfResult<()> {
        let s = &self.search;
        if s.dimensions == 0 || s.dimensions % 4 != 0 {
            return Err(SynthForgeError::Config(format!(
                "--dimensions must be a positive multiple of 4 (got {})",
                s.dimensions
            )));
        }
        if s.particles == 0 {
            return Err(SynthForgeError::Config("--particles must be > 0".into()));
        }
        if s.iterations == 0 {
            return Err(SynthForgeError::Config("--iterations must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&s.mutation_rate) {
            return Err(SynthForgeError::Config(format!(
                "--mutation-rate must lie in [0, 1] (got {})",
                s.mutation_rate
            )));
        }
        if s.inertia_min > s.inertia {
            return Err(SynthForgeError::Config(format!(
                "--inertia-min ({}) exceeds --inertia ({})",
                s.inertia_min, s.inertia
            )));
        }
        if s.elite_capacity == 0 {
            return Err(SynthForgeError::Config(
                "--elite-capacity must be > 0".into(),
            ));
        }
        if s.refine_interval == 0 {
            return Err(SynthForgeError::Config(
                "--refine-interval must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Copies every value the user typed on the command line over `self`,
    /// leaving file-provided values in place for everything else.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.particles);
        update_if_present!(search.dimensions);
        update_if_present!(search.iterations);
        update_if_present!(search.inertia);
        update_if_present!(search.inertia_min);
        update_if_present!(search.cognitive);
        update_if_present!(search.social);
        update_if_present!(search.stall_limit);
        update_if_present!(search.explore_trigger);
        update_if_present!(search.mutation_rate);
        update_if_present!(search.elite_capacity);
        update_if_present!(search.refine_interval);
        update_if_present!(search.seed);

        update_if_present!(oracle.design);
        update_if_present!(oracle.qor_mode);
        update_if_present!(oracle.vocabulary);
        update_if_present!(oracle.abc_binary);

        update_if_present!(output.log_dir);
        update_if_present!(output.results_csv);
        update_if_present!(output.convergence_csv);
    }
}
