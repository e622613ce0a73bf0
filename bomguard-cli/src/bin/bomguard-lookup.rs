//! Prints the part numbers in use for every part triple matching a substring.

#[path = "../logging.rs"]
mod logging;

use anyhow::Context;
use bomguard::{BomGuardCore, TripleMatch};
use clap::Parser;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "bomguard-lookup")]
#[command(about = "Look up the part numbers used by a part triple", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Eagle .sch file
    #[arg(value_name = "SCHEMATIC")]
    schematic: PathBuf,

    /// Substring of the part triple, e.g. "R0402-10k"
    #[arg(value_name = "PART_TRIPLE")]
    part_triple: String,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = BomGuardCore::lookup_in_schematic(&cli.schematic, &cli.part_triple)
        .with_context(|| format!("could not read {}", cli.schematic.display()));

    match result {
        Ok(matches) => {
            for m in &matches {
                print_match(m);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}

fn print_match(m: &TripleMatch) {
    println!(
        "Found matching part triple '{}', which has the following part numbers:",
        m.key
    );
    for part_number in &m.part_numbers {
        println!("  - {}", part_number);
    }
}
