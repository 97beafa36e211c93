//! RISC-V RV64 emulator CLI.
//!
//! This binary runs a bare-metal guest to completion. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overridden by a JSON file and flags.
//! 2. **Loading:** Flat binaries at the RAM base, or ELF64 images at their segment addresses.
//! 3. **Execution:** Runs until the guest exits, traps, or hits the step limit; the
//!    process exit status mirrors the guest's exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use rv64emu_core::config::{Config, UnmappedAccess};
use rv64emu_core::sim::{RunOutcome, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "rv64emu",
    author,
    version,
    about = "Interpretive RISC-V RV64IMA emulator",
    long_about = "Run a bare-metal RV64IMA program.\n\nThe guest stops by writing to the SysCon device or by calling exit (a7 = 93).\n\nExamples:\n  rv64emu run hello.elf\n  rv64emu run image.bin --max-steps 1000000 --stats\n  RUST_LOG=debug rv64emu run test.elf --fault-unmapped"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a flat binary or ELF64 image.
    Run {
        /// Image to execute.
        image: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop after this many retired instructions.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Log every retired instruction.
        #[arg(long)]
        trace: bool,

        /// Print execution statistics as JSON on stderr.
        #[arg(long)]
        stats: bool,

        /// Raise access faults for unmapped addresses instead of ignoring them.
        #[arg(long)]
        fault_unmapped: bool,
    },
}

/// Options of the `run` subcommand.
#[derive(Debug)]
struct RunArgs {
    image: PathBuf,
    config: Option<PathBuf>,
    max_steps: Option<u64>,
    trace: bool,
    stats: bool,
    fault_unmapped: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            image,
            config,
            max_steps,
            trace,
            stats,
            fault_unmapped,
        } => {
            init_tracing(trace);
            cmd_run(&RunArgs {
                image,
                config,
                max_steps,
                trace,
                stats,
                fault_unmapped,
            })
        }
    }
}

/// Installs the log subscriber. `RUST_LOG` wins unless `--trace` is given.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("warn,rv64emu_core=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the effective configuration: file (or defaults), then flags.
fn build_config(args: &RunArgs) -> Result<Config, rv64emu_core::common::SimError> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.max_steps.is_some() {
        config.general.max_instructions = args.max_steps;
    }
    if args.trace {
        config.general.trace_instructions = true;
    }
    if args.fault_unmapped {
        config.system.unmapped_access = UnmappedAccess::Fault;
    }
    Ok(config)
}

/// Loads the image, runs it, and maps the outcome to a process exit status.
fn cmd_run(args: &RunArgs) -> ExitCode {
    let config = match build_config(args) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut sim = match Simulator::new(&config) {
        Ok(sim) => sim,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = sim.load(&args.image) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    let outcome = sim.run();

    if args.stats {
        match sim.cpu.stats.to_json() {
            Ok(json) => eprintln!("{json}"),
            Err(e) => error!("could not render statistics: {e}"),
        }
    }

    match outcome {
        RunOutcome::Exited(code) => ExitCode::from(code as u8),
        RunOutcome::Trapped { trap, pc } => {
            eprintln!("\n[!] FATAL TRAP: {trap} at pc {pc:#x}");
            eprintln!("{}", sim.cpu);
            ExitCode::FAILURE
        }
        RunOutcome::StepLimit => {
            eprintln!("\n[!] step limit reached at pc {:#x}", sim.cpu.pc);
            ExitCode::FAILURE
        }
    }
}
