mod grid;
mod tables;

pub use self::grid::print_script as print_script_grid;
pub use self::tables::{
    elite as print_elite_table, evaluations as print_evaluation_report,
    oracle_stats as print_oracle_stats, summary as print_result_summary,
};
