use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tileglow::batch::{self, BatchOptions, DEFAULT_TILESET_DIR, SEPARATOR};
use tileglow::{BatchSummary, Operation};

#[derive(Parser)]
#[command(name = "tileglow")]
#[command(version, about = "Convert polygon SVG tiles to the glowing border format")]
#[command(long_about = "Convert polygon SVG tiles to the glowing border format\n\n\
    Convert a single tile:\n  \
    tileglow convert input.svg output.svg\n\n\
    Convert every tile of a tileset directory in place:\n  \
    tileglow batch [--root static/tilesets] [--dry-run]\n\n\
    Remove the background gradient and tiny/huge blur stages from converted tiles:\n  \
    tileglow strip [--root static/tilesets] [--dry-run]")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one simple tile to the glowing border format
    Convert {
        /// Input SVG file path
        input: PathBuf,

        /// Output SVG file path
        output: PathBuf,
    },

    /// Convert every .svg file under the tileset directory in place
    Batch {
        /// Tileset directory to walk
        #[arg(long, default_value = DEFAULT_TILESET_DIR)]
        root: PathBuf,

        /// Report what would happen without modifying any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Strip bgGradient and the tiny/huge blur stages from every .svg file under the tileset directory
    Strip {
        /// Tileset directory to walk
        #[arg(long, default_value = DEFAULT_TILESET_DIR)]
        root: PathBuf,

        /// Report what would change without modifying any file
        #[arg(long)]
        dry_run: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Convert { input, output } => Ok(handle_convert(&input, &output)),
        Command::Batch { root, dry_run } => {
            handle_batch(&root, Operation::Convert, BatchOptions { dry_run })
        }
        Command::Strip { root, dry_run } => {
            handle_batch(&root, Operation::Strip, BatchOptions { dry_run })
        }
    }
}

/// Convert a single file, reporting the outcome on stdout
fn handle_convert(input: &Path, output: &Path) -> ExitCode {
    match tileglow::convert_file(input, output) {
        Ok(tile) => {
            println!(
                "Successfully converted {} to {}",
                input.display(),
                output.display()
            );
            println!("Detected {}-sided polygon", tile.sides);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error converting {}: {}", input.display(), e);
            ExitCode::FAILURE
        }
    }
}

/// Run a batch operation and print the aggregate summary
fn handle_batch(root: &Path, operation: Operation, options: BatchOptions) -> Result<ExitCode> {
    let summary = batch::run(root, operation, options)
        .with_context(|| format!("Failed to {} tiles in {}", operation.verb(), root.display()))?;

    if summary.total() == 0 {
        return Ok(ExitCode::SUCCESS);
    }

    print_summary(operation, &summary);

    if summary.is_success() {
        println!("🎉 All files processed successfully!");
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_summary(operation: Operation, summary: &BatchSummary) {
    let (title, done, not_done) = match operation {
        Operation::Convert => ("Conversion", "Successfully converted", "Failed to convert"),
        Operation::Strip => ("Cleanup", "Successfully processed", "Failed to process"),
    };

    println!("{}", SEPARATOR);
    println!("{} complete!", title);
    println!("✅ {}: {} files", done, summary.succeeded);
    println!("❌ {}: {} files", not_done, summary.failed);
}
