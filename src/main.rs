//! uniqint: write the unique in-range integers of a text file, sorted.
//!
//! Usage: uniqint <INPUT_FILE> [--output-dir DIR] [--stats]

use clap::error::ErrorKind;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

use uniqint::config::{OutputLayout, DEFAULT_OUTPUT_DIR};
use uniqint::diagnostics::RunTimer;
use uniqint::{UniqueIntCommand, UniqueIntError};

#[derive(Parser)]
#[command(name = "uniqint")]
#[command(version)]
#[command(about = "Extract unique integers in [-1023, 1023] from a text file and write them sorted", long_about = None)]
struct Cli {
    /// Input text file, one integer per line
    input: PathBuf,

    /// Directory for the results file (created if absent)
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print line statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprint!("{}", e);
                process::exit(1);
            }
        },
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), UniqueIntError> {
    if !cli.input.exists() {
        return Err(UniqueIntError::InputNotFound(cli.input));
    }

    fs::create_dir_all(&cli.output_dir)?;
    let layout = OutputLayout::new(cli.output_dir);

    let timer = RunTimer::start();
    let outcome = UniqueIntCommand::new().run_to_dir(&cli.input, &layout)?;
    let report = timer.finish();

    println!("Output File Path: {}", outcome.output_path.display());
    println!("File processed successfully.");
    println!("{}", report);

    if cli.stats {
        eprintln!("uniqint stats: {}", outcome.stats);
    }

    Ok(())
}
