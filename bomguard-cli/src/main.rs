//! BomGuard CLI - BOM consistency checks for Eagle schematics.

mod logging;

use anyhow::Context;
use bomguard::{BomGuardCore, CheckOptions, CheckReport};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process;

const SUCCESS_LINE: &str = "All checks passed!";

#[derive(Parser)]
#[command(name = "bomguard")]
#[command(about = "BOM consistency checks for Eagle XML schematics", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Eagle .sch file
    #[arg(value_name = "SCHEMATIC")]
    schematic: PathBuf,

    /// Check that every placed part has a HEIGHT attribute
    #[arg(short = 'z', long)]
    check_height: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One tagged line per issue
    Human,
    /// JSON output for CI/CD
    Json,
    /// GitHub Actions format
    Github,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = CheckOptions {
        check_height: cli.check_height,
    };

    let exit_code = match check(&cli.schematic, &options) {
        Ok(report) => {
            output_report(&report, &cli.format);
            if report.passed() {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    process::exit(exit_code);
}

fn check(path: &Path, options: &CheckOptions) -> anyhow::Result<CheckReport> {
    BomGuardCore::check_schematic(path, options)
        .with_context(|| format!("could not check {}", path.display()))
}

fn output_report(report: &CheckReport, format: &OutputFormat) {
    match format {
        OutputFormat::Human => output_human(report),
        OutputFormat::Json => output_json(report),
        OutputFormat::Github => output_github(report),
    }
}

fn output_human(report: &CheckReport) {
    if report.passed() {
        println!("{}", SUCCESS_LINE);
        return;
    }
    for issue in &report.issues {
        println!("{}", issue);
    }
}

fn output_json(report: &CheckReport) {
    let output = serde_json::json!({
        "file": report.file.display().to_string(),
        "passed": report.passed(),
        "part_count": report.part_count,
        "issues": report.issues,
        "stats": report.stats,
    });
    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn output_github(report: &CheckReport) {
    if report.passed() {
        println!("{}", SUCCESS_LINE);
        return;
    }
    for issue in &report.issues {
        println!("::error file={}::{}", report.file.display(), issue);
    }
}
