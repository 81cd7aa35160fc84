use crate::bitstring::Bitstring;
use crate::oracle::Oracle;
use tracing::debug;

/// One greedy pass of single-bit hill climbing.
///
/// Bits are visited in order; a flip is kept when it strictly beats the best
/// score found so far in this pass. Failed evaluations never win. The result
/// is never worse than `(start, start_score)`.
pub fn hill_climb<O: Oracle>(oracle: &mut O, start: &Bitstring, start_score: f64) -> (Bitstring, f64) {
    let mut best = start.clone();
    let mut best_score = start_score;

    for i in 0..best.len() {
        let candidate = best.flipped(i);
        match oracle.evaluate(&candidate) {
            Ok(score) if score < best_score => {
                debug!("Hill climb: bit {} -> {:.6}", i, score);
                best = candidate;
                best_score = score;
            }
            _ => {}
        }
    }

    (best, best_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OracleError;

    #[test]
    fn test_single_pass_reaches_zero_on_separable_objective() {
        let mut oracle = |b: &Bitstring| -> Result<f64, OracleError> { Ok(b.count_ones() as f64) };
        let start: Bitstring = "10110111".parse().unwrap();
        let (best, score) = hill_climb(&mut oracle, &start, 6.0);
        assert_eq!(best.to_string(), "00000000");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_failures_are_skipped() {
        let mut oracle =
            |_: &Bitstring| -> Result<f64, OracleError> { Err(OracleError::Parse("x".into())) };
        let start: Bitstring = "1111".parse().unwrap();
        let (best, score) = hill_climb(&mut oracle, &start, 1.5);
        assert_eq!(best, start);
        assert_eq!(score, 1.5);
    }

    #[test]
    fn test_only_one_pass_is_made() {
        // Bit 1 only pays off after bit 0 is kept; one evaluation per bit.
        let mut calls = 0;
        let mut oracle = |b: &Bitstring| -> Result<f64, OracleError> {
            calls += 1;
            Ok(match (b.get(0), b.get(1)) {
                (false, false) => 3.0,
                (true, false) => 2.0,
                (true, true) => 1.0,
                (false, true) => 4.0,
            })
        };
        let start = Bitstring::zeros(2);
        let (best, score) = hill_climb(&mut oracle, &start, 3.0);
        assert_eq!(best.to_string(), "11");
        assert_eq!(score, 1.0);
        drop(oracle);
        assert_eq!(calls, 2);
    }
}
