use serde::{Deserialize, Serialize};

/// Attribute name carrying the manufacturer/distributor part number.
pub const PART_NUMBER_ATTRIBUTE: &str = "PN";
/// Attribute name used to mark a part as excluded from the BOM.
pub const BOM_ATTRIBUTE: &str = "BOM";
/// Attribute name carrying the physical height used for clearance checks.
pub const HEIGHT_ATTRIBUTE: &str = "HEIGHT";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schematic {
    pub filename: String,
    pub parts: Vec<Part>,
}

/// A single `<attribute name=".." value=".."/>` child of a part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartAttribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Part {
    pub name: Option<String>,      // R1, C12, U3
    pub library: Option<String>,   // rcl, supplies1
    pub deviceset: Option<String>, // R-US_
    pub device: Option<String>,    // R0402
    pub value: Option<String>,     // 10k
    pub attributes: Vec<PartAttribute>,
}

impl Part {
    /// Value of the first attribute child named `name`, if any.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Non-empty part number, if the part carries one.
    pub fn part_number(&self) -> Option<&str> {
        self.attribute(PART_NUMBER_ATTRIBUTE)
            .filter(|pn| !pn.is_empty())
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn library_or_empty(&self) -> &str {
        self.library.as_deref().unwrap_or("")
    }

    pub fn deviceset_or_empty(&self) -> &str {
        self.deviceset.as_deref().unwrap_or("")
    }

    pub fn device_or_empty(&self) -> &str {
        self.device.as_deref().unwrap_or("")
    }

    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// Looks up a named attribute on a part. Returns an empty string when the
/// attribute is absent.
pub fn get_part_attribute<'a>(part: &'a Part, name: &str) -> &'a str {
    part.attribute(name).unwrap_or("")
}

pub fn has_part_number(part: &Part) -> bool {
    !get_part_attribute(part, PART_NUMBER_ATTRIBUTE).is_empty()
}
