use crate::error::SfResult;
use crate::optimizer::OptimizationResult;
use crate::oracle::QorMode;
use std::fs;
use std::path::Path;
use tracing::info;

fn ensure_parent(path: &Path) -> SfResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Metric/value summary followed by one `index,bit` row per dimension.
pub fn write_final_result<P: AsRef<Path>>(
    path: P,
    result: &OptimizationResult,
    mode: QorMode,
) -> SfResult<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["Metric", "Value"])?;
    wtr.write_record(["Best Score (QoR)", &result.best_score.to_string()])?;
    wtr.write_record([
        "Improvement (%)",
        &mode.improvement_pct(result.best_score).to_string(),
    ])?;
    wtr.write_record([
        "Elapsed Time (s)",
        &result.elapsed.as_secs_f64().to_string(),
    ])?;
    wtr.write_record(["Best Bitstring", &result.best_position.to_string()])?;

    wtr.write_record(["Bit Index", "Bit Value"])?;
    for (idx, &bit) in result.best_position.as_slice().iter().enumerate() {
        wtr.write_record([idx.to_string(), u8::from(bit).to_string()])?;
    }
    wtr.flush()?;

    info!("📄 Results saved to {:?}", path);
    Ok(())
}

/// `iteration,best_score`, one row per iteration (1-based).
pub fn write_convergence<P: AsRef<Path>>(path: P, trace: &[f64]) -> SfResult<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["iteration", "best_score"])?;
    for (i, score) in trace.iter().enumerate() {
        wtr.write_record([(i + 1).to_string(), score.to_string()])?;
    }
    wtr.flush()?;

    info!("📈 Convergence trace saved to {:?}", path);
    Ok(())
}
