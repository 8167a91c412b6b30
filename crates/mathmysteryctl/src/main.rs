//! Math Mystery Control - terminal host for multiplication and division practice
//!
//! Generates problems, checks answers and prints the number line, equal
//! groups and fact family behind each answer.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use mathmystery_common::Mode;
use mathmysteryctl::commands::{self, GlobalOptions};
use mathmysteryctl::{errors, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mathmysteryctl")]
#[command(about = "Math Mystery - multiplication and division fact practice", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/mathmystery/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible problems
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one problem and show its explanations
    Problem {
        /// Allowed factors, comma separated (e.g. "2, 5, 10")
        #[arg(long)]
        factors: Option<String>,

        /// multiply, divide or mixed
        #[arg(long)]
        mode: Option<Mode>,

        /// Print the problem and visual data as JSON
        #[arg(long)]
        json: bool,
    },

    /// Practice interactively, one answer per line
    Quiz {
        /// Allowed factors, comma separated
        #[arg(long)]
        factors: Option<String>,

        /// multiply, divide or mixed
        #[arg(long)]
        mode: Option<Mode>,

        /// Number of problems
        #[arg(long)]
        rounds: Option<u32>,
    },

    /// Show how a factor list is parsed
    Factors {
        /// Factor list text
        text: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change configuration
    Config {
        /// Set a configuration value (key=value)
        #[arg(long)]
        set: Option<String>,
    },
}

fn run(cli: Cli) -> Result<()> {
    let global = GlobalOptions {
        config: cli.config,
        seed: cli.seed,
        no_color: cli.no_color,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Problem { factors, mode, json } => {
            commands::problem(&global, factors, mode, json, &mut out)
        }
        Commands::Quiz { factors, mode, rounds } => {
            drop(out);
            commands::quiz(&global, factors, mode, rounds).map(|_| ())
        }
        Commands::Factors { text, json } => commands::factors(&text, json, &mut out),
        Commands::Config { set } => commands::config(&global, set, &mut out),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {:#}", err);
        std::process::exit(errors::exit_code_for(&err));
    }
}
