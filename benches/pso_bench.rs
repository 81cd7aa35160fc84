use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use synthforge::actions::Vocabulary;
use synthforge::bitstring::Bitstring;
use synthforge::oracle::parse_stats;
use synthforge::optimizer::{BinaryPso, IterationReport, OptimizationOptions};
use synthforge::OracleError;

// Separable stand-in for the synthesis tool: each set bit costs its weight.
fn synthetic_oracle() -> impl FnMut(&Bitstring) -> Result<f64, OracleError> + Clone {
    let weights: Vec<f64> = (0..80).map(|i| ((i * 37) % 11) as f64 / 10.0 - 0.5).collect();
    move |b: &Bitstring| {
        Ok(b
            .as_slice()
            .iter()
            .zip(&weights)
            .filter(|(bit, _)| **bit)
            .map(|(_, w)| *w)
            .sum())
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let oracle = synthetic_oracle();

    c.bench_function("pso run (20 particles x 80 bits, 25 iters)", |b| {
        b.iter(|| {
            let mut o = oracle.clone();
            let pso = BinaryPso::new(OptimizationOptions {
                particles: 20,
                iterations: 25,
                seed: Some(42),
                ..OptimizationOptions::default()
            });
            pso.run(&mut o, |_: &IterationReport| {})
        })
    });

    let bits: Bitstring = "0110".repeat(20).parse().expect("bench bitstring");
    c.bench_function("decode + script (80 bits)", |b| {
        b.iter(|| {
            let actions = Vocabulary::Generic.decode(black_box(&bits));
            Vocabulary::Generic.script("benchmarks/arithmetic/log2.blif", &actions)
        })
    });

    let mut output = String::new();
    for i in 0..200 {
        output.push_str(&format!("** cmd {} done\n", i));
    }
    output.push_str("log2 : i/o = 32/ 32  lat = 0  nd = 8133  edge = 28925  aig = 61420  lev = 139\n");
    c.bench_function("parse_stats (200 lines)", |b| {
        b.iter(|| parse_stats(black_box(&output)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
