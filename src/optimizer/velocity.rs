use super::Particle;
use crate::bitstring::Bitstring;
use fastrand::Rng;

/// Velocities are clamped to `[-VELOCITY_LIMIT, VELOCITY_LIMIT]` before the
/// transfer function is applied.
pub const VELOCITY_LIMIT: f64 = 4.0;

#[inline(always)]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[inline(always)]
pub fn clamp_velocity(v: &mut [f64]) {
    for x in v.iter_mut() {
        *x = x.clamp(-VELOCITY_LIMIT, VELOCITY_LIMIT);
    }
}

/// Linear decay from `w_max` at iteration 0 towards `w_min` at `max_iter`.
#[inline]
pub fn inertia_weight(w_max: f64, w_min: f64, iteration: usize, max_iter: usize) -> f64 {
    w_max - (w_max - w_min) * (iteration as f64 / max_iter as f64)
}

/// Amplitude of the fresh velocities drawn in exploration mode.
#[inline]
pub fn exploration_amplitude(iteration: usize, max_iter: usize) -> f64 {
    2.0 * (1.0 - iteration as f64 / max_iter as f64)
}

/// Canonical PSO update: inertia + cognitive pull + social pull.
pub fn pso_update(
    rng: &mut Rng,
    particle: &mut Particle,
    global_best: &Bitstring,
    inertia: f64,
    cognitive: f64,
    social: f64,
) {
    for d in 0..particle.velocity.len() {
        let x = particle.position.value(d);
        let r1 = rng.f64();
        let r2 = rng.f64();
        let pull_self = cognitive * r1 * (particle.best_position.value(d) - x);
        let pull_swarm = social * r2 * (global_best.value(d) - x);
        particle.velocity[d] = inertia * particle.velocity[d] + pull_self + pull_swarm;
    }
}

/// Resamples every bit: 1 with probability `sigmoid(v[d])`, 0 otherwise.
pub fn resample_position(rng: &mut Rng, velocity: &[f64]) -> Bitstring {
    Bitstring::from_bits(velocity.iter().map(|&v| rng.f64() < sigmoid(v)).collect())
}
