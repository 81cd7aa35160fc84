use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use synthforge::bitstring::Bitstring;
use synthforge::optimizer::OptimizationResult;
use synthforge::oracle::{Baseline, OracleStats, QorMode};
use synthforge::OracleError;

fn improvement_cell(mode: QorMode, score: f64) -> Cell {
    let pct = mode.improvement_pct(score);
    let cell = Cell::new(format!("{:+.2}%", pct));
    if pct > 0.0 {
        cell.fg(Color::Green)
    } else if pct < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn summary(
    design: &str,
    result: &OptimizationResult,
    mode: QorMode,
    baseline: Option<Baseline>,
    stats: OracleStats,
) {
    println!("\n=== 🏆 FINAL RESULT ===");
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Design"), Cell::new(design)]);
    table.add_row(vec![
        Cell::new(format!("Best QoR ({})", mode)),
        Cell::new(format!("{:.6}", result.best_score)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Improvement"),
        improvement_cell(mode, result.best_score),
    ]);
    table.add_row(vec![
        Cell::new("Elapsed"),
        Cell::new(format!("{:.2}s", result.elapsed.as_secs_f64())),
    ]);
    table.add_row(vec![
        Cell::new("Iterations"),
        Cell::new(result.convergence.len()),
    ]);
    table.add_row(vec![
        Cell::new("Diversity injections"),
        Cell::new(result.diversifications),
    ]);
    table.add_row(vec![
        Cell::new("Hill-climb gains"),
        Cell::new(result.refinements),
    ]);
    table.add_row(vec![
        Cell::new("Best bitstring"),
        Cell::new(result.best_position.to_string()),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("{}", table);

    oracle_stats(baseline, stats);
}

pub fn oracle_stats(baseline: Option<Baseline>, stats: OracleStats) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Ref Nodes").add_attribute(Attribute::Bold),
        Cell::new("Ref Levels").add_attribute(Attribute::Bold),
        Cell::new("Evals"),
        Cell::new("Cache Hits").fg(Color::Green),
        Cell::new("Tool Runs").fg(Color::Cyan),
        Cell::new("Failures").fg(Color::Red),
    ]);

    let (nodes, levels) = match baseline {
        Some(b) => (b.nodes.to_string(), b.levels.to_string()),
        None => ("-".to_string(), "-".to_string()),
    };
    table.add_row(vec![
        Cell::new(nodes),
        Cell::new(levels),
        Cell::new(stats.evaluations),
        Cell::new(stats.cache_hits).fg(Color::Green),
        Cell::new(stats.tool_invocations).fg(Color::Cyan),
        Cell::new(stats.failures).fg(Color::Red),
    ]);

    for i in 0..6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", table);
}

pub fn elite(entries: &[(Bitstring, f64)], mode: QorMode) {
    if entries.is_empty() {
        return;
    }

    println!("\n--- Elite Memory ---");
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("QoR").fg(Color::Cyan),
        Cell::new("Gain"),
        Cell::new("Bitstring"),
    ]);

    for (rank, (bits, score)) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(format!("{:.6}", score)).fg(Color::Cyan),
            improvement_cell(mode, *score),
            Cell::new(bits.to_string()),
        ]);
    }
    println!("{}", table);
}

pub fn evaluations(results: &[(Bitstring, Result<f64, OracleError>)], mode: QorMode) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Bitstring").add_attribute(Attribute::Bold),
        Cell::new("QoR").fg(Color::Cyan),
        Cell::new("Gain"),
        Cell::new("Status"),
    ]);

    for (bits, outcome) in results {
        let row = match outcome {
            Ok(score) => vec![
                Cell::new(bits.to_string()),
                Cell::new(format!("{:.6}", score)).fg(Color::Cyan),
                improvement_cell(mode, *score),
                Cell::new("ok").fg(Color::Green),
            ],
            Err(e) => vec![
                Cell::new(bits.to_string()),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new(e.to_string()).fg(Color::Red),
            ],
        };
        table.add_row(row);
    }
    println!("\n{}", table);
}
