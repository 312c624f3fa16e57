//! keycalc: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! keycalc                          # Interactive calculator
//! keycalc eval 12 + 7 =            # Prints 19
//! keycalc eval --json 5 / 0 =      # Final state as JSON
//! keycalc eval --tape 2 + 2 = x 3 =
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use keycalc::config::{CalcConfig, Verbosity};
use keycalc::core::{Calculator, Command};
use keycalc::error::CalcResult;
use keycalc::logging::{self, LogTarget};
use keycalc::tui::{self, CalculatorApp};
use tracing::info;

/// Keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
struct Cli {
    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// YAML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive terminal calculator (the default)
    Tui,
    /// Feed keys through the calculator and print the result
    Eval(EvalArgs),
}

#[derive(Args, Debug)]
struct EvalArgs {
    /// Print the final state as JSON
    #[arg(long)]
    json: bool,

    /// Print the tape before the result
    #[arg(long)]
    tape: bool,

    /// Keys, e.g. `12 + 7 =`; numbers expand to one key per digit
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CalcResult<()> {
    let cli = Cli::parse();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let config = CalcConfig::load_or_default(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_tui(config, verbosity),
        Commands::Eval(args) => run_eval(config, verbosity, &args),
    }
}

fn run_tui(config: CalcConfig, verbosity: Verbosity) -> CalcResult<()> {
    logging::init(&LogTarget::for_mode(true, &config), verbosity, &config)?;
    let app = tui::run(CalculatorApp::with_config(config))?;
    info!(tape = app.calculator().tape().len(), "exiting");
    Ok(())
}

fn run_eval(config: CalcConfig, verbosity: Verbosity, args: &EvalArgs) -> CalcResult<()> {
    logging::init(&LogTarget::for_mode(false, &config), verbosity, &config)?;

    let commands = Command::parse_sequence(&args.keys.join(" "))?;
    info!(keys = commands.len(), "evaluating");

    let mut calc = Calculator::with_tape(config.tape());
    calc.apply_all(commands);

    let mut out = std::io::stdout().lock();
    if args.tape && !calc.tape().is_empty() {
        writeln!(out, "{}", calc.tape().export_formatted())?;
    }
    if args.json {
        writeln!(out, "{}", serde_json::to_string(&calc.snapshot())?)?;
    } else {
        writeln!(out, "{}", calc.display())?;
    }
    Ok(())
}
