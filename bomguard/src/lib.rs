//! BomGuard - BOM consistency checks for Eagle XML schematics
//!
//! This library flags bill-of-materials problems in a schematic's part list:
//! parts without a part number, groups of interchangeable parts that use
//! different part numbers, and (optionally) parts without a HEIGHT attribute.
//!
//! # Quick Start
//!
//! ```no_run
//! use bomguard::{BomGuardCore, CheckOptions};
//! use std::path::Path;
//!
//! let options = CheckOptions { check_height: true };
//! let report = BomGuardCore::check_schematic(Path::new("design.sch"), &options).unwrap();
//!
//! for issue in &report.issues {
//!     println!("{}", issue);
//! }
//! ```
//!
//! # Rules
//!
//! - **missing-empty-part-number**: placed parts without a `PN` attribute
//! - **uniqueness**: one part triple, two or more part numbers
//! - **part-height**: placed parts without a `HEIGHT` attribute (opt-in)
//!
//! Supply symbols, sheet frames, test points and parts marked
//! `BOM="EXCLUDE"` are skipped by every rule.

pub mod analyzer;
pub mod core;
pub mod parser;

// Re-export main types
pub use analyzer::rules::{Issue, Rule, RuleId, RulesEngine};
pub use core::{BomGuardCore, BomGuardError, CheckOptions, CheckReport, CheckStats, TripleMatch};
pub use parser::eagle::EagleParser;
pub use parser::schema::{Part, PartAttribute, Schematic};

/// Parse a schematic file (convenience wrapper).
pub fn parse_schematic(path: &std::path::Path) -> Result<Schematic, BomGuardError> {
    EagleParser::parse_file(path).map_err(BomGuardError::from)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        BomGuardCore, BomGuardError, CheckOptions, CheckReport, CheckStats, Issue, RuleId,
        TripleMatch,
    };
}
