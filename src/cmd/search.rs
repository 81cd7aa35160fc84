use crate::reports;
use clap::Args;
use synthforge::cache::QorCache;
use synthforge::config::Config;
use synthforge::export;
use synthforge::optimizer::{
    BinaryPso, IterationReport, OptimizationOptions, ProgressCallback, FAILURE_PENALTY,
};
use synthforge::oracle::{AbcRunner, QorMode, SynthOracle};
use synthforge::SfResult;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,
}

/// Logs one line per iteration.
struct CliLogger {
    mode: QorMode,
}

impl ProgressCallback for CliLogger {
    fn on_iteration(&self, r: &IterationReport) {
        let mut flags = String::new();
        if r.improved {
            flags.push_str(" ⭐");
        }
        if r.diversified {
            flags.push_str(" 🔀");
        }
        if r.refined {
            flags.push_str(" ⛰️");
        }
        info!(
            "Iter {:4}/{} [{}] best QoR = {:.4} ({:+.2}%){}",
            r.iteration + 1,
            r.max_iter,
            r.mode,
            r.best_score,
            self.mode.improvement_pct(r.best_score),
            flags
        );
    }
}

pub fn run(config: &Config) -> SfResult<()> {
    let oc = &config.oracle;
    let mode = oc.qor_mode;

    info!(
        "🔬 Design: {} ({} vocabulary, {} QoR)",
        oc.design, oc.vocabulary, mode
    );

    let cache = QorCache::for_design(&config.output.log_dir, &oc.design);
    info!("💾 QoR cache: {} known scripts", cache.len());

    let mut oracle = SynthOracle::new(
        AbcRunner::new(oc.abc_binary.as_str()),
        cache,
        oc.design.as_str(),
        oc.vocabulary,
        mode,
    );

    let pso = BinaryPso::new(OptimizationOptions::from(config));

    let result = pso.run(&mut oracle, CliLogger { mode });

    if result.best_score >= FAILURE_PENALTY {
        warn!("⚠️  No candidate could be scored; check the design path and the ABC binary.");
    }

    reports::print_result_summary(&oc.design, &result, mode, oracle.baseline(), oracle.stats());
    reports::print_script_grid("BEST SCRIPT", oc.vocabulary, &result.best_position);
    reports::print_elite_table(&result.elite, mode);

    export::write_final_result(&config.output.results_csv, &result, mode)?;
    export::write_convergence(&config.output.convergence_csv, &result.convergence)?;

    Ok(())
}
