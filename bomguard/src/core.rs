//! Core check logic shared by the check and lookup tools.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::analyzer::part_groups::get_parts_by_triple;
use crate::analyzer::rules::{Issue, RuleId, RulesEngine};
use crate::parser::eagle::{EagleParseError, EagleParser};
use crate::parser::schema::{Part, Schematic};

#[derive(Debug, thiserror::Error)]
pub enum BomGuardError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<EagleParseError> for BomGuardError {
    fn from(e: EagleParseError) -> Self {
        match e {
            EagleParseError::Io(io) => BomGuardError::Io(io),
            EagleParseError::Xml(xml) => BomGuardError::Parse(xml.to_string()),
        }
    }
}

/// Options for a check run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Also require a HEIGHT attribute on every placed part.
    pub check_height: bool,
}

/// Per-file check result with issues and counts.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub file: PathBuf,
    pub part_count: usize,
    pub issues: Vec<Issue>,
    pub stats: CheckStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckStats {
    pub missing_part_number: usize,
    pub uniqueness: usize,
    pub part_height: usize,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn total_issues(&self) -> usize {
        self.issues.len()
    }
}

fn issues_to_stats(issues: &[Issue]) -> CheckStats {
    let mut stats = CheckStats::default();
    for issue in issues {
        match issue.rule_id {
            RuleId::MissingEmptyPartNumber => stats.missing_part_number += 1,
            RuleId::Uniqueness => stats.uniqueness += 1,
            RuleId::PartHeight => stats.part_height += 1,
        }
    }
    stats
}

/// A device key matched by a lookup, with every distinct part number in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripleMatch {
    pub key: String,
    pub part_numbers: BTreeSet<String>,
}

/// Core check API used by both CLI tools.
pub struct BomGuardCore;

impl BomGuardCore {
    /// Parse and check a single schematic file.
    pub fn check_schematic(
        path: &Path,
        options: &CheckOptions,
    ) -> Result<CheckReport, BomGuardError> {
        let schematic = EagleParser::parse_file(path)?;
        let mut report = Self::check_parsed(&schematic, options);
        report.file = path.to_path_buf();
        Ok(report)
    }

    /// Check an already parsed schematic.
    pub fn check_parsed(schematic: &Schematic, options: &CheckOptions) -> CheckReport {
        let issues = Self::check_parts(&schematic.parts, options);
        let stats = issues_to_stats(&issues);

        tracing::info!(
            "Checked {} parts in {}: {} issue(s)",
            schematic.parts.len(),
            schematic.filename,
            issues.len()
        );

        CheckReport {
            file: PathBuf::from(&schematic.filename),
            part_count: schematic.parts.len(),
            issues,
            stats,
        }
    }

    /// Run every default rule over an unfiltered part list.
    pub fn check_parts(parts: &[Part], options: &CheckOptions) -> Vec<Issue> {
        RulesEngine::with_default_rules().analyze(parts, options)
    }

    /// Every device key containing `needle`, with its distinct non-empty part
    /// numbers. All parts take part, including supply and excluded ones.
    pub fn lookup_part_triple(parts: &[Part], needle: &str) -> Vec<TripleMatch> {
        get_parts_by_triple(parts)
            .into_iter()
            .filter(|group| group.key.contains(needle))
            .map(|group| TripleMatch {
                part_numbers: group
                    .parts
                    .iter()
                    .filter_map(|p| p.part_number())
                    .map(str::to_string)
                    .collect(),
                key: group.key,
            })
            .collect()
    }

    /// Parse a schematic file and look up `needle` in its device keys.
    pub fn lookup_in_schematic(
        path: &Path,
        needle: &str,
    ) -> Result<Vec<TripleMatch>, BomGuardError> {
        let schematic = EagleParser::parse_file(path)?;
        let matches = Self::lookup_part_triple(&schematic.parts, needle);
        tracing::debug!("{} group(s) match '{}'", matches.len(), needle);
        Ok(matches)
    }
}
