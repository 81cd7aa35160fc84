use crate::reports;
use clap::Args;
use synthforge::bitstring::Bitstring;
use synthforge::cache::QorCache;
use synthforge::config::Config;
use synthforge::oracle::{AbcRunner, Oracle, SynthOracle};
use synthforge::{SfResult, SynthForgeError};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Bitstrings to score, e.g. `--bits 0000000100100011`.
    #[arg(short, long, required = true, num_args = 1..)]
    pub bits: Vec<String>,

    /// Print the decoded scripts without running the tool.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

fn parse_candidates(raw: &[String]) -> SfResult<Vec<Bitstring>> {
    raw.iter()
        .map(|s| {
            let bits: Bitstring = s.trim().parse()?;
            if bits.is_empty() || bits.len() % 4 != 0 {
                return Err(SynthForgeError::Validation(format!(
                    "bitstring '{}' has {} bits; expected a positive multiple of 4",
                    s,
                    bits.len()
                )));
            }
            Ok(bits)
        })
        .collect()
}

pub fn run(args: &EvaluateArgs, config: &Config) -> SfResult<()> {
    let oc = &config.oracle;
    let candidates = parse_candidates(&args.bits)?;

    if args.dry_run {
        for (i, bits) in candidates.iter().enumerate() {
            reports::print_script_grid(&format!("CANDIDATE #{}", i + 1), oc.vocabulary, bits);
            let actions = oc.vocabulary.decode(bits);
            println!("{}", oc.vocabulary.script(&oc.design, &actions));
        }
        return Ok(());
    }

    let cache = QorCache::for_design(&config.output.log_dir, &oc.design);
    let mut oracle = SynthOracle::new(
        AbcRunner::new(oc.abc_binary.as_str()),
        cache,
        oc.design.as_str(),
        oc.vocabulary,
        oc.qor_mode,
    );

    info!("🔎 Scoring {} candidate(s) on {}", candidates.len(), oc.design);

    let results: Vec<_> = candidates
        .into_iter()
        .map(|bits| {
            let outcome = oracle.evaluate(&bits);
            (bits, outcome)
        })
        .collect();

    reports::print_evaluation_report(&results, oc.qor_mode);
    reports::print_oracle_stats(oracle.baseline(), oracle.stats());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_candidates_rejects_partial_nibbles() {
        assert!(parse_candidates(&["0101".to_string(), "1".repeat(8)]).is_ok());
        assert!(parse_candidates(&["010".to_string()]).is_err());
        assert!(parse_candidates(&["01x1".to_string()]).is_err());
        assert!(parse_candidates(&[String::new()]).is_err());
    }
}
