//! Simple check example: check a schematic and print the BOM issues.

use bomguard::prelude::*;
use std::path::Path;

fn main() -> Result<(), BomGuardError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/bom_violations.sch".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example simple_check [path/to/file.sch]");
        std::process::exit(1);
    }

    let options = CheckOptions { check_height: true };
    let report = BomGuardCore::check_schematic(path, &options)?;

    println!("Check results for: {}", report.file.display());
    println!("Parts: {}", report.part_count);
    println!("Total issues: {}", report.total_issues());
    println!();

    for issue in &report.issues {
        println!("  - {}", issue);
    }

    if !report.passed() {
        println!("\nBOM check failed.");
        std::process::exit(1);
    }

    println!("\nBOM check passed.");
    Ok(())
}
