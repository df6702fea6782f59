//! ListBatch CLI
//!
//! Command-line front end: reads operations from JSON Lines and renders,
//! summarizes or spools the resulting batch documents.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use listbatch::input::read_operations;
use listbatch::submit::{DirectorySubmitter, WriterSubmitter};
use listbatch::{BatchAccumulator, Config, ErrorPolicy, EscapeMode, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// ListBatch CLI
#[derive(Parser, Debug)]
#[command(name = "listbatch-cli")]
#[command(about = "Split list-item operations into bounded batch documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every batch document, one per line
    Render {
        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Print operation and segment counts
    Stats {
        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Write every batch document to its own file
    Spool {
        #[command(flatten)]
        batch: BatchArgs,

        /// Directory receiving batch-NNNNN.xml files
        #[arg(short, long)]
        out_dir: PathBuf,
    },
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// JSON Lines file of operations
    #[arg(short, long)]
    input: PathBuf,

    /// Maximum operations per batch document
    #[arg(short, long, default_value = "500")]
    cap: usize,

    /// OnError directive for the batch processor
    #[arg(long, value_enum, default_value = "return")]
    on_error: OnErrorArg,

    /// Escape markup characters in targets and fields
    #[arg(long)]
    escape: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OnErrorArg {
    Return,
    Continue,
}

impl From<OnErrorArg> for ErrorPolicy {
    fn from(arg: OnErrorArg) -> Self {
        match arg {
            OnErrorArg::Return => ErrorPolicy::StopOnError,
            OnErrorArg::Continue => ErrorPolicy::ContinueOnError,
        }
    }
}

fn main() {
    // Initialize tracing/logging (stderr, stdout carries documents)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,listbatch=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Render { batch } => {
            let accumulator = load(&batch)?;
            let stdout = io::stdout();
            let mut submitter = WriterSubmitter::new(stdout.lock());
            accumulator.run(&mut submitter)?;
            tracing::info!("Rendered {} batch documents", submitter.submitted());
        }
        Commands::Stats { batch } => {
            let accumulator = load(&batch)?;
            println!("operations: {}", accumulator.len());
            println!("segments:   {}", accumulator.segment_count());
            for (index, segment) in accumulator.segments().iter().enumerate() {
                println!("  segment {}: {} methods", index, segment.len());
            }
        }
        Commands::Spool { batch, out_dir } => {
            let accumulator = load(&batch)?;
            let mut submitter = DirectorySubmitter::open(&out_dir)?;
            let acks = accumulator.run(&mut submitter)?;
            print!("{}", acks);
        }
    }
    Ok(())
}

/// Read the input file into a configured accumulator
fn load(batch: &BatchArgs) -> Result<BatchAccumulator> {
    tracing::info!("ListBatch CLI v{}", listbatch::VERSION);
    tracing::info!("Input file: {}", batch.input.display());

    let config = Config::builder()
        .segment_cap(batch.cap)
        .error_policy(batch.on_error.into())
        .escape_mode(if batch.escape { EscapeMode::Xml } else { EscapeMode::Raw })
        .build();

    let mut accumulator = BatchAccumulator::with_config(config)?;

    let file = File::open(&batch.input)?;
    for operation in read_operations(BufReader::new(file))? {
        accumulator.append(operation);
    }

    tracing::info!(
        "Queued {} operations in {} segments",
        accumulator.len(),
        accumulator.segment_count()
    );
    Ok(accumulator)
}
