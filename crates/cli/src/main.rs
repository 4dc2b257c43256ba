//! LS-8 emulator CLI.
//!
//! This binary provides the command-line entry point. It performs:
//! 1. **Run:** Load a `.ls8` text program and execute it until `HLT`.
//! 2. **Disassemble:** Print a linear listing of a program image.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::{env, fs};

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use ls8_core::common::{CpuError, LoadError};
use ls8_core::config::Config;
use ls8_core::isa::disasm;
use ls8_core::sim::{loader, ExitReason, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 virtual CPU emulator",
    long_about = "Run or disassemble LS-8 programs.\n\nPrograms are text files with one 8-bit binary literal per line; '#' starts a comment.\n\nExamples:\n  ls8 run programs/print8.ls8\n  ls8 run --trace --max-steps 1000 programs/call.ls8\n  ls8 disasm programs/stack.ls8"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until it halts.
    Run {
        /// Program file (.ls8).
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a trace line to stderr before every instruction.
        #[arg(short, long)]
        trace: bool,

        /// Stop after this many instructions.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Print execution statistics after the run.
        #[arg(long)]
        stats: bool,

        /// Print execution statistics as JSON after the run.
        #[arg(long, conflicts_with = "stats")]
        stats_json: bool,

        /// Dump PC, flags and registers after the run.
        #[arg(long)]
        dump_state: bool,
    },

    /// Print a disassembly listing of a program.
    Disasm {
        /// Program file (.ls8).
        program: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            program,
            config,
            trace,
            max_steps,
            stats,
            stats_json,
            dump_state,
        } => cmd_run(
            &program,
            config.as_deref(),
            &RunFlags {
                trace,
                max_steps,
                stats,
                stats_json,
                dump_state,
            },
        ),
        Commands::Disasm { program } => cmd_disasm(&program),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

/// Output options for `run`.
#[derive(Debug)]
struct RunFlags {
    trace: bool,
    max_steps: Option<u64>,
    stats: bool,
    stats_json: bool,
    dump_state: bool,
}

/// Errors surfaced by the CLI.
#[derive(Debug)]
enum CliError {
    Cpu(CpuError),
    Config(PathBuf, String),
}

impl From<CpuError> for CliError {
    fn from(e: CpuError) -> Self {
        Self::Cpu(e)
    }
}

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        Self::Cpu(CpuError::Load(e))
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text =
        fs::read_to_string(path).map_err(|e| CliError::Config(path.to_path_buf(), e.to_string()))?;
    Config::from_json(&text).map_err(|e| CliError::Config(path.to_path_buf(), e.to_string()))
}

/// Loads the program, runs it, and reports the outcome.
///
/// Command-line flags override the configuration file.
fn cmd_run(program: &Path, config: Option<&Path>, flags: &RunFlags) -> Result<ExitCode, CliError> {
    let mut config = load_config(config)?;
    config.general.trace_instructions |= flags.trace;
    if flags.max_steps.is_some() {
        config.general.max_steps = flags.max_steps;
    }

    let mut sim = Simulator::new(&config);
    sim.load_file(program)?;

    let outcome = sim.run();

    if flags.dump_state {
        sim.cpu.dump_state();
    }
    if flags.stats {
        sim.cpu.stats.print();
    }
    if flags.stats_json {
        match sim.cpu.stats.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => error!("could not serialize statistics: {e}"),
        }
    }

    match outcome? {
        ExitReason::Halted => Ok(ExitCode::SUCCESS),
        ExitReason::StepLimit(limit) => {
            eprintln!("stopped after {limit} instructions without halting");
            Ok(ExitCode::from(2))
        }
    }
}

fn cmd_disasm(program: &Path) -> Result<ExitCode, CliError> {
    let image = loader::load_program(program)?;
    for line in disasm::listing(&image) {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

fn report(e: &CliError) {
    match e {
        CliError::Cpu(CpuError::Load(LoadError::ProgramNotFound { path })) => {
            let argv0 = env::args().next().unwrap_or_else(|| "ls8".to_string());
            eprintln!("{argv0}: {} not found", path.display());
        }
        CliError::Cpu(e) => eprintln!("error: {e}"),
        CliError::Config(path, msg) => {
            eprintln!("error: invalid config {}: {msg}", path.display());
        }
    }
}
