use super::elite::EliteMemory;
use super::initialization::{initial_positions, uniform_velocity};
use super::refine::hill_climb;
use super::velocity::{
    clamp_velocity, exploration_amplitude, inertia_weight, pso_update, resample_position,
};
use super::{Particle, SearchMode, FAILURE_PENALTY};
use crate::bitstring::Bitstring;
use crate::config::Config;
use crate::oracle::Oracle;
use fastrand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub particles: usize,
    pub dimensions: usize,
    pub iterations: usize,
    pub inertia_max: f64,
    pub inertia_min: f64,
    pub cognitive: f64,
    pub social: f64,
    pub stall_limit: usize,
    pub explore_trigger: usize,
    pub mutation_rate: f64,
    pub elite_capacity: usize,
    pub refine_interval: usize,
    pub seed: Option<u64>,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        let s = &cfg.search;
        Self {
            particles: s.particles,
            dimensions: s.dimensions,
            iterations: s.iterations,
            inertia_max: s.inertia,
            inertia_min: s.inertia_min,
            cognitive: s.cognitive,
            social: s.social,
            stall_limit: s.stall_limit,
            explore_trigger: s.explore_trigger,
            mutation_rate: s.mutation_rate,
            elite_capacity: s.elite_capacity,
            refine_interval: s.refine_interval,
            seed: s.seed,
        }
    }
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Swarm-wide bookkeeping, updated once per iteration.
#[derive(Debug, Clone)]
pub struct SwarmState {
    pub global_best_position: Bitstring,
    pub global_best_score: f64,
    /// Iterations since the last global-best improvement; drives diversification.
    pub stall_counter: usize,
    /// Same count, but only reset by improvement; drives exploration mode.
    pub stagnation_counter: usize,
    /// Global best after each iteration's evaluation. Non-increasing.
    pub convergence: Vec<f64>,
    pub diversifications: usize,
    pub refinements: usize,
}

#[derive(Debug, Clone)]
pub struct IterationReport {
    pub iteration: usize,
    pub max_iter: usize,
    pub mode: SearchMode,
    pub best_score: f64,
    pub improved: bool,
    pub diversified: bool,
    pub refined: bool,
}

/// Receives one report per completed iteration.
pub trait ProgressCallback {
    fn on_iteration(&self, report: &IterationReport);
}

impl<F: Fn(&IterationReport)> ProgressCallback for F {
    fn on_iteration(&self, report: &IterationReport) {
        self(report)
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub best_position: Bitstring,
    pub best_score: f64,
    pub convergence: Vec<f64>,
    pub elite: Vec<(Bitstring, f64)>,
    pub diversifications: usize,
    pub refinements: usize,
    pub elapsed: Duration,
}

/// Binary particle swarm with elite memory, stagnation-driven exploration,
/// diversity injection and periodic hill climbing.
pub struct BinaryPso {
    options: OptimizationOptions,
    rng: Rng,
    particles: Vec<Particle>,
    state: SwarmState,
    elite: EliteMemory,
    iteration: usize,
}

impl BinaryPso {
    pub fn new(options: OptimizationOptions) -> Self {
        let mut rng = match options.seed {
            Some(s) => Rng::with_seed(s),
            None => Rng::new(),
        };

        let dims = options.dimensions;
        let positions = initial_positions(&mut rng, options.particles, dims);
        let particles = positions
            .into_iter()
            .map(|p| {
                let v = uniform_velocity(&mut rng, dims, 1.0);
                Particle::new(p, v)
            })
            .collect();

        let state = SwarmState {
            global_best_position: Bitstring::zeros(dims),
            global_best_score: f64::INFINITY,
            stall_counter: 0,
            stagnation_counter: 0,
            convergence: Vec::with_capacity(options.iterations),
            diversifications: 0,
            refinements: 0,
        };

        Self {
            elite: EliteMemory::new(options.elite_capacity),
            options,
            rng,
            particles,
            state,
            iteration: 0,
        }
    }

    pub fn options(&self) -> &OptimizationOptions {
        &self.options
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn state(&self) -> &SwarmState {
        &self.state
    }

    pub fn elite(&self) -> &EliteMemory {
        &self.elite
    }

    /// Number of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn mode(&self) -> SearchMode {
        if self.state.stagnation_counter >= self.options.explore_trigger {
            SearchMode::Exploration
        } else {
            SearchMode::Exploitation
        }
    }

    /// Runs one full iteration: evaluate, update bests, move, then
    /// optionally diversify and refine.
    pub fn step<O: Oracle>(&mut self, oracle: &mut O) -> IterationReport {
        let iteration = self.iteration;
        let max_iter = self.options.iterations;
        let mode = self.mode();

        for p in self.particles.iter_mut() {
            let fitness = oracle.evaluate(&p.position).unwrap_or(FAILURE_PENALTY);
            p.observe(fitness);
        }

        let improved = self.update_global_best();
        self.state.convergence.push(self.state.global_best_score);

        self.move_particles(mode, iteration);

        let diversified = self.state.stall_counter >= self.options.stall_limit;
        if diversified {
            self.diversify();
        }

        let refined = iteration > 0
            && iteration % self.options.refine_interval == 0
            && self.refine(oracle);

        self.iteration += 1;

        debug!(
            "Iteration {}/{} [{}] best={:.6} stall={} stagnation={}",
            iteration + 1,
            max_iter,
            mode,
            self.state.global_best_score,
            self.state.stall_counter,
            self.state.stagnation_counter
        );

        IterationReport {
            iteration,
            max_iter,
            mode,
            best_score: self.state.global_best_score,
            improved,
            diversified,
            refined,
        }
    }

    /// Runs the remaining iteration budget and returns the best solution.
    pub fn run<O: Oracle, CB: ProgressCallback>(
        mut self,
        oracle: &mut O,
        callback: CB,
    ) -> OptimizationResult {
        let start = Instant::now();
        info!(
            "Binary PSO: {} particles x {} bits, {} iterations",
            self.options.particles, self.options.dimensions, self.options.iterations
        );

        while self.iteration < self.options.iterations {
            let report = self.step(oracle);
            callback.on_iteration(&report);
        }

        OptimizationResult {
            best_position: self.state.global_best_position,
            best_score: self.state.global_best_score,
            convergence: self.state.convergence,
            elite: self.elite.entries().to_vec(),
            diversifications: self.state.diversifications,
            refinements: self.state.refinements,
            elapsed: start.elapsed(),
        }
    }

    fn update_global_best(&mut self) -> bool {
        let best = self
            .particles
            .iter()
            .min_by(|a, b| a.best_score.total_cmp(&b.best_score));

        match best {
            Some(p) if p.best_score < self.state.global_best_score => {
                self.state.global_best_score = p.best_score;
                self.state.global_best_position = p.best_position.clone();
                self.state.stall_counter = 0;
                self.state.stagnation_counter = 0;
                self.elite
                    .insert(p.best_position.clone(), p.best_score);
                true
            }
            _ => {
                self.state.stall_counter += 1;
                self.state.stagnation_counter += 1;
                false
            }
        }
    }

    fn move_particles(&mut self, mode: SearchMode, iteration: usize) {
        let opts = &self.options;
        let dims = opts.dimensions;
        let inertia = inertia_weight(opts.inertia_max, opts.inertia_min, iteration, opts.iterations);
        let amplitude = exploration_amplitude(iteration, opts.iterations);
        let global_best = &self.state.global_best_position;

        for p in self.particles.iter_mut() {
            match mode {
                SearchMode::Exploration => {
                    p.velocity = uniform_velocity(&mut self.rng, dims, amplitude);
                }
                SearchMode::Exploitation => {
                    pso_update(
                        &mut self.rng,
                        p,
                        global_best,
                        inertia,
                        opts.cognitive,
                        opts.social,
                    );
                }
            }
            clamp_velocity(&mut p.velocity);
            p.position = resample_position(&mut self.rng, &p.velocity);
        }
    }

    /// Random XOR mutation of the whole swarm, then elite positions are
    /// written over the leading particles.
    fn diversify(&mut self) {
        info!(
            "Stall limit reached: injecting diversity and {} elite positions",
            self.elite.len()
        );

        let rate = self.options.mutation_rate;
        let dims = self.options.dimensions;
        for p in self.particles.iter_mut() {
            let mask: Vec<bool> = (0..dims).map(|_| self.rng.f64() < rate).collect();
            p.position.xor_assign(&mask);
        }

        for (p, elite) in self.particles.iter_mut().zip(self.elite.positions()) {
            p.position = elite.clone();
        }

        self.state.stall_counter = 0;
        self.state.diversifications += 1;
    }

    fn refine<O: Oracle>(&mut self, oracle: &mut O) -> bool {
        debug!("Refining global best with hill climbing");
        let (refined, score) = hill_climb(
            oracle,
            &self.state.global_best_position,
            self.state.global_best_score,
        );

        if score < self.state.global_best_score {
            info!(
                "Hill climbing improved QoR: {:.6} -> {:.6}",
                self.state.global_best_score, score
            );
            self.state.global_best_position = refined;
            self.state.global_best_score = score;
            self.state.refinements += 1;
            true
        } else {
            false
        }
    }
}
