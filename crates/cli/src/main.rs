//! Pep/9 simulator CLI.
//!
//! This binary runs one program image to completion. It performs:
//! 1. **Setup:** Reads the JSON configuration (if any) and applies command-line overrides.
//! 2. **Load:** Reads the image (raw binary or object text) and the optional input file.
//! 3. **Run:** Executes until STOP, a fatal error, or the instruction limit.
//! 4. **Report:** Writes program output to stdout and the register dump (and stats) to stderr.

use std::io::Write;
use std::path::PathBuf;
use std::{fs, io, process};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pep9_core::config::Config;
use pep9_core::sim::{ExitReason, ImageFormat, Simulator, loader};

/// Image encoding accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Pick from the file extension (`.pepo`/`.txt` are object text).
    Auto,
    /// Raw bytes loaded at address 0.
    Binary,
    /// Whitespace-separated hex bytes terminated by `zz`.
    Object,
}

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Pep/9 instruction-set simulator",
    long_about = "Load a Pep/9 program at address 0 and run it until STOP.\n\nProgram output (bytes written to 0xFC16) goes to stdout; the final register dump goes to stderr.\n\nExamples:\n  sim hello.pepo\n  sim --input data.txt --stats echo.bin"
)]
struct Cli {
    /// Program image to execute.
    program: PathBuf,

    /// Image encoding.
    #[arg(short, long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// File whose bytes are queued on the input port (0xFC15).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every executed instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Stop after this many instructions.
    #[arg(long)]
    max_instructions: Option<u64>,

    /// Print execution statistics to stderr.
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.trace { "trace" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();

    process::exit(run(&cli));
}

/// Runs the simulator and returns the process exit code.
fn run(cli: &Cli) -> i32 {
    let mut config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[!] {e}");
                return 2;
            }
        },
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;
    if cli.max_instructions.is_some() {
        config.general.max_instructions = cli.max_instructions;
    }

    let format = match cli.format {
        Format::Auto => ImageFormat::from_path(&cli.program),
        Format::Binary => ImageFormat::Binary,
        Format::Object => ImageFormat::ObjectText,
    };
    let image = match loader::load_image(&cli.program, format) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("[!] {e}");
            return 2;
        }
    };

    let mut sim = Simulator::new(&config);
    if let Some(path) = &cli.input {
        match fs::read(path) {
            Ok(bytes) => sim.feed_input(&bytes),
            Err(e) => {
                eprintln!("[!] failed to read input {}: {e}", path.display());
                return 2;
            }
        }
    }
    sim.load_and_initialize(&image);

    let result = sim.run();

    let output = sim.take_output();
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(&output).and_then(|()| stdout.flush()) {
        eprintln!("[!] failed to write program output: {e}");
    }

    eprintln!("{}", sim.cpu.dump_state());
    if cli.stats {
        sim.cpu.stats.print();
    }

    match result {
        Ok(ExitReason::Halted) => 0,
        Ok(ExitReason::InstructionLimit) => {
            eprintln!("[!] instruction limit reached");
            3
        }
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            1
        }
    }
}
