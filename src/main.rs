use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use synthforge::config::Config;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON run configuration; explicit CLI flags override its values.
    #[arg(global = true, short, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Optimize a synthesis script for the configured design.
    Search(cmd::search::SearchArgs),
    /// Score (or just decode) explicit bitstrings.
    Evaluate(cmd::evaluate::EvaluateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚀 Initializing SynthForge...");

    let cli_config = match &cli.command {
        Commands::Search(args) => &args.config,
        Commands::Evaluate(args) => &args.config,
    };

    let config = match (&cli.config, matches.subcommand()) {
        (Some(path), Some((_, sub_matches))) => {
            info!("📂 Loading Config: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        _ => cli_config.clone(),
    };

    if let Err(e) = config.validate() {
        error!("❌ Invalid configuration: {}", e);
        process::exit(1);
    }

    let outcome = match &cli.command {
        Commands::Search(_) => cmd::search::run(&config),
        Commands::Evaluate(args) => cmd::evaluate::run(args, &config),
    };

    if let Err(e) = outcome {
        error!("\n❌ FATAL ERROR:");
        error!("   {}", e);
        process::exit(1);
    }
}
