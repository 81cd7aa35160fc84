use crate::bitstring::Bitstring;
use fastrand::Rng;

/// Latin hypercube sample of `n` points in `[0, 1)^dims`: along every axis,
/// each of the `n` equal-width strata holds exactly one point.
pub fn latin_hypercube(rng: &mut Rng, n: usize, dims: usize) -> Vec<Vec<f64>> {
    let mut points = vec![vec![0.0; dims]; n];
    if n == 0 {
        return points;
    }

    let width = 1.0 / n as f64;
    let mut strata: Vec<usize> = (0..n).collect();
    for d in 0..dims {
        rng.shuffle(&mut strata);
        for (point, &stratum) in points.iter_mut().zip(&strata) {
            point[d] = (stratum as f64 + rng.f64()) * width;
        }
    }
    points
}

/// Space-filling binary start positions: a latin hypercube thresholded at 0.5.
pub fn initial_positions(rng: &mut Rng, n: usize, dims: usize) -> Vec<Bitstring> {
    latin_hypercube(rng, n, dims)
        .into_iter()
        .map(|p| Bitstring::from_bits(p.into_iter().map(|x| x > 0.5).collect()))
        .collect()
}

/// Uniform draw in `[-amplitude, amplitude)` per dimension.
pub fn uniform_velocity(rng: &mut Rng, dims: usize, amplitude: f64) -> Vec<f64> {
    (0..dims)
        .map(|_| (rng.f64() * 2.0 - 1.0) * amplitude)
        .collect()
}
