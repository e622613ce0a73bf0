use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analyzer::classifier::only_placed_components;
use crate::analyzer::part_groups::get_parts_by_triple;
use crate::core::CheckOptions;
use crate::parser::schema::{get_part_attribute, has_part_number, Part, HEIGHT_ATTRIBUTE};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    MissingEmptyPartNumber,
    Uniqueness,
    PartHeight,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::MissingEmptyPartNumber => "missing-empty-part-number",
            RuleId::Uniqueness => "uniqueness",
            RuleId::PartHeight => "part-height",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One BOM rule violation. Renders as `[<rule-tag>] <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub rule_id: RuleId,
    pub message: String,
    /// Names of the parts involved.
    pub components: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub part_numbers: Vec<String>,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule_id, self.message)
    }
}

pub trait Rule: Send + Sync {
    fn id(&self) -> RuleId;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn check(&self, parts: &[Part], options: &CheckOptions) -> Vec<Issue>;
}

pub struct RulesEngine {
    rules: Vec<Arc<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Missing part numbers, then uniqueness, then height.
    pub fn with_default_rules() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Arc::new(MissingPartNumberRule));
        engine.add_rule(Arc::new(PartNumberUniquenessRule));
        engine.add_rule(Arc::new(PartHeightRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Arc<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    /// Runs every rule over the full, unfiltered part list. Issues keep rule
    /// order first, then the order each rule produced them in.
    pub fn analyze(&self, parts: &[Part], options: &CheckOptions) -> Vec<Issue> {
        let mut issues = Vec::new();
        for rule in &self.rules {
            let found = rule.check(parts, options);
            tracing::debug!("Rule {} produced {} issue(s)", rule.id(), found.len());
            issues.extend(found);
        }
        issues
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

pub struct MissingPartNumberRule;

impl Rule for MissingPartNumberRule {
    fn id(&self) -> RuleId {
        RuleId::MissingEmptyPartNumber
    }

    fn name(&self) -> &str {
        "Missing or Empty Part Number Check"
    }

    fn description(&self) -> &str {
        "Every placed part needs a non-empty PN attribute"
    }

    fn check(&self, parts: &[Part], options: &CheckOptions) -> Vec<Issue> {
        check_for_missing_or_empty_part_numbers(parts, options)
    }
}

pub struct PartNumberUniquenessRule;

impl Rule for PartNumberUniquenessRule {
    fn id(&self) -> RuleId {
        RuleId::Uniqueness
    }

    fn name(&self) -> &str {
        "Part Number Uniqueness Check"
    }

    fn description(&self) -> &str {
        "Parts with the same deviceset, device and value must use a single PN"
    }

    fn check(&self, parts: &[Part], options: &CheckOptions) -> Vec<Issue> {
        check_for_uniqueness_in_part_triples(parts, options)
    }
}

pub struct PartHeightRule;

impl Rule for PartHeightRule {
    fn id(&self) -> RuleId {
        RuleId::PartHeight
    }

    fn name(&self) -> &str {
        "Part Height Check"
    }

    fn description(&self) -> &str {
        "Every placed part needs a HEIGHT attribute (only with --check-height)"
    }

    fn check(&self, parts: &[Part], options: &CheckOptions) -> Vec<Issue> {
        check_for_height_attribute(parts, options)
    }
}

/// One issue per device key whose placed parts lack a part number, whether the
/// attribute is missing or empty.
pub fn check_for_missing_or_empty_part_numbers(
    parts: &[Part],
    _options: &CheckOptions,
) -> Vec<Issue> {
    let missing = only_placed_components(parts)
        .into_iter()
        .filter(|p| !has_part_number(p));

    get_parts_by_triple(missing)
        .into_iter()
        .map(|group| {
            let names = group.names();
            Issue {
                rule_id: RuleId::MissingEmptyPartNumber,
                message: format!(
                    "Found part group {} with missing or empty part numbers: {}",
                    group.key,
                    names.join(", ")
                ),
                components: names.into_iter().map(str::to_string).collect(),
                part_numbers: Vec::new(),
            }
        })
        .collect()
}

/// One issue per device key whose placed parts use two or more distinct part
/// numbers. Groups with no part number at all, or a mix of set and unset, are
/// left to the missing part number rule.
pub fn check_for_uniqueness_in_part_triples(
    parts: &[Part],
    _options: &CheckOptions,
) -> Vec<Issue> {
    get_parts_by_triple(only_placed_components(parts))
        .into_iter()
        .filter_map(|group| {
            let unique: BTreeSet<&str> = group.parts.iter().filter_map(|p| p.part_number()).collect();
            if unique.len() < 2 {
                return None;
            }

            let part_numbers: Vec<String> = unique.into_iter().map(str::to_string).collect();
            Some(Issue {
                rule_id: RuleId::Uniqueness,
                message: format!(
                    "Found part group {} with two or more part numbers in use: {}",
                    group.key,
                    part_numbers.join(", ")
                ),
                components: group.names().into_iter().map(str::to_string).collect(),
                part_numbers,
            })
        })
        .collect()
}

/// One issue per placed part without a non-empty HEIGHT attribute. Produces
/// nothing unless `options.check_height` is set.
pub fn check_for_height_attribute(parts: &[Part], options: &CheckOptions) -> Vec<Issue> {
    if !options.check_height {
        return Vec::new();
    }

    only_placed_components(parts)
        .into_iter()
        .filter(|p| get_part_attribute(p, HEIGHT_ATTRIBUTE).is_empty())
        .map(|p| Issue {
            rule_id: RuleId::PartHeight,
            message: format!("Part {} missed HEIGHT attribute or empty!", p.name_or_empty()),
            components: vec![p.name_or_empty().to_string()],
            part_numbers: Vec::new(),
        })
        .collect()
}
