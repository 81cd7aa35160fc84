use super::runner::{AbcRunner, ToolRunner};
use super::stats::parse_stats;
use super::{Oracle, QorMode};
use crate::actions::Vocabulary;
use crate::bitstring::Bitstring;
use crate::cache::QorCache;
use crate::error::OracleError;
use tracing::{debug, info, warn};

/// Reference node count and depth every score is normalized against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baseline {
    pub nodes: i64,
    pub levels: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OracleStats {
    pub evaluations: usize,
    pub cache_hits: usize,
    pub tool_invocations: usize,
    pub failures: usize,
}

/// Memoized QoR oracle for one design, backed by an external synthesis tool.
///
/// The baseline is computed lazily by the first evaluation whose own run
/// succeeds, then kept for the lifetime of this oracle. A failed baseline is
/// not stored, so the next uncached evaluation tries again.
pub struct SynthOracle<R = AbcRunner> {
    runner: R,
    cache: QorCache,
    design_path: String,
    vocabulary: Vocabulary,
    mode: QorMode,
    baseline: Option<Baseline>,
    stats: OracleStats,
}

impl<R: ToolRunner> SynthOracle<R> {
    pub fn new(
        runner: R,
        cache: QorCache,
        design_path: impl Into<String>,
        vocabulary: Vocabulary,
        mode: QorMode,
    ) -> Self {
        Self {
            runner,
            cache,
            design_path: design_path.into(),
            vocabulary,
            mode,
            baseline: None,
            stats: OracleStats::default(),
        }
    }

    pub fn design_path(&self) -> &str {
        &self.design_path
    }

    pub fn mode(&self) -> QorMode {
        self.mode
    }

    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    pub fn baseline(&self) -> Option<Baseline> {
        self.baseline
    }

    pub fn stats(&self) -> OracleStats {
        self.stats
    }

    pub fn cache(&self) -> &QorCache {
        &self.cache
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn runner_mut(&mut self) -> &mut R {
        &mut self.runner
    }

    /// The script that scoring `bits` would send to the tool.
    pub fn script_for(&self, bits: &Bitstring) -> String {
        let actions = self.vocabulary.decode(bits);
        self.vocabulary.script(&self.design_path, &actions)
    }

    fn invoke(&mut self, script: &str) -> Result<String, OracleError> {
        self.stats.tool_invocations += 1;
        self.runner.run(script)
    }

    fn ensure_baseline(&mut self) -> Result<Baseline, OracleError> {
        if let Some(b) = self.baseline {
            return Ok(b);
        }

        info!("Calculating reference QoR for {}", self.design_path);
        let script = self.vocabulary.baseline_script(&self.design_path);
        let stats = self
            .invoke(&script)
            .and_then(|out| parse_stats(&out))
            .map_err(|e| OracleError::BaselineUnavailable(e.to_string()))?;

        if stats.nodes <= 0 || stats.levels <= 0 {
            return Err(OracleError::BaselineUnavailable(format!(
                "non-positive reference (nodes={}, levels={})",
                stats.nodes, stats.levels
            )));
        }

        let baseline = Baseline {
            nodes: stats.nodes,
            levels: stats.levels,
        };
        info!(
            "Reference QoR: nodes = {} / levels = {}",
            baseline.nodes, baseline.levels
        );
        self.baseline = Some(baseline);
        Ok(baseline)
    }

    fn score_uncached(&mut self, bits: &Bitstring) -> Result<f64, OracleError> {
        let script = self.script_for(bits);
        let output = self.invoke(&script)?;
        let stats = parse_stats(&output)?;
        let baseline = self.ensure_baseline()?;
        let score = self.mode.score(stats, baseline);

        debug!(
            "[QoR {}] nodes={}/{} levels={}/{} -> {:.4}",
            self.mode, stats.nodes, baseline.nodes, stats.levels, baseline.levels, score
        );
        Ok(score)
    }
}

impl<R: ToolRunner> Oracle for SynthOracle<R> {
    fn evaluate(&mut self, bits: &Bitstring) -> Result<f64, OracleError> {
        self.stats.evaluations += 1;
        let key = bits.to_string();

        if let Some(score) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            return Ok(score);
        }

        match self.score_uncached(bits) {
            Ok(score) => {
                if let Err(e) = self.cache.put(key, score) {
                    warn!("Failed to persist QoR cache: {}", e);
                }
                Ok(score)
            }
            Err(e) => {
                self.stats.failures += 1;
                warn!("QoR evaluation failed: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned outputs in order and records every script it receives.
    struct Scripted {
        replies: VecDeque<Result<String, OracleError>>,
        scripts: Vec<String>,
    }

    impl Scripted {
        fn new(replies: Vec<Result<&str, OracleError>>) -> Self {
            Self {
                replies: replies
                    .into_iter()
                    .map(|r| r.map(str::to_string))
                    .collect(),
                scripts: Vec::new(),
            }
        }
    }

    impl ToolRunner for Scripted {
        fn run(&mut self, script: &str) -> Result<String, OracleError> {
            self.scripts.push(script.to_string());
            self.replies
                .pop_front()
                .unwrap_or_else(|| Err(OracleError::Parse("no reply".into())))
        }
    }

    fn oracle(replies: Vec<Result<&str, OracleError>>) -> SynthOracle<Scripted> {
        SynthOracle::new(
            Scripted::new(replies),
            QorCache::in_memory(),
            "d.blif",
            Vocabulary::Generic,
            QorMode::Combined,
        )
    }

    #[test]
    fn test_first_success_computes_baseline_once() {
        let mut o = oracle(vec![
            Ok("x : nd = 50 lev = 5"),
            Ok("ref : nd = 100 lev = 10"),
            Ok("x : nd = 100 lev = 10"),
        ]);
        let a: Bitstring = "0000".parse().unwrap();
        let b: Bitstring = "0001".parse().unwrap();

        assert_eq!(o.evaluate(&a), Ok(1.0));
        assert_eq!(o.evaluate(&b), Ok(2.0));
        assert_eq!(
            o.baseline(),
            Some(Baseline {
                nodes: 100,
                levels: 10
            })
        );
        assert_eq!(o.stats().tool_invocations, 3);
        assert!(o.runner().scripts[1].contains("resyn2"));
    }

    #[test]
    fn test_failed_candidate_skips_baseline() {
        let mut o = oracle(vec![Ok("garbage")]);
        let a: Bitstring = "0000".parse().unwrap();
        assert!(matches!(o.evaluate(&a), Err(OracleError::Parse(_))));
        assert_eq!(o.baseline(), None);
        assert_eq!(o.stats().tool_invocations, 1);
        assert_eq!(o.stats().failures, 1);
        assert!(o.cache().is_empty());
    }

    #[test]
    fn test_non_positive_baseline_is_retried() {
        let mut o = oracle(vec![
            Ok("x : nd = 50 lev = 5"),
            Ok("ref : nd = 0 lev = 10"),
            Ok("x : nd = 50 lev = 5"),
            Ok("ref : nd = 100 lev = 10"),
        ]);
        let a: Bitstring = "0000".parse().unwrap();

        assert!(matches!(
            o.evaluate(&a),
            Err(OracleError::BaselineUnavailable(_))
        ));
        assert_eq!(o.baseline(), None);
        assert_eq!(o.evaluate(&a), Ok(1.0));
    }

    #[test]
    fn test_cache_hit_skips_tool() {
        let mut o = oracle(vec![Ok("x : nd = 50 lev = 5"), Ok("ref : nd = 50 lev = 5")]);
        let a: Bitstring = "0110".parse().unwrap();
        let first = o.evaluate(&a).unwrap();
        let second = o.evaluate(&a).unwrap();
        assert_eq!(first, second);
        assert_eq!(o.stats().tool_invocations, 2);
        assert_eq!(o.stats().cache_hits, 1);
    }
}
