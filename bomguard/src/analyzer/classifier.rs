//! Part classification
//!
//! Decides which schematic parts are real, purchasable components. Supply
//! symbols (GND, VCC, ...), drawing helpers (sheet frames, test points) and
//! parts explicitly marked `BOM="EXCLUDE"` never reach the BOM checks.

use crate::parser::schema::{get_part_attribute, Part, BOM_ATTRIBUTE};

/// Library name prefix of Eagle's power/ground symbol libraries.
pub const SUPPLY_LIBRARY_PREFIX: &str = "supplies";

/// `BOM` attribute value that removes a part from the BOM.
pub const BOM_EXCLUDE: &str = "EXCLUDE";

/// Name prefixes of non-physical helper symbols.
pub const HELPER_NAME_PREFIXES: &[&str] = &["SHEET", "TP"];

pub fn is_supply_part(part: &Part) -> bool {
    part.library_or_empty().starts_with(SUPPLY_LIBRARY_PREFIX) && part.device_or_empty().is_empty()
}

pub fn is_excluded_part(part: &Part) -> bool {
    get_part_attribute(part, BOM_ATTRIBUTE) == BOM_EXCLUDE
}

pub fn is_helper_part(part: &Part) -> bool {
    let name = part.name_or_empty();
    HELPER_NAME_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// The BOM-relevant view of a part list: excluded, supply and helper parts
/// removed, relative order of the rest kept.
pub fn only_placed_components(parts: &[Part]) -> Vec<&Part> {
    parts
        .iter()
        .filter(|p| !is_excluded_part(p))
        .filter(|p| !is_supply_part(p))
        .filter(|p| !is_helper_part(p))
        .collect()
}
