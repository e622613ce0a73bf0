//! Equivalence grouping of parts
//!
//! Two parts with the same deviceset, device and value (the "part triple") are
//! interchangeable for purchasing and should share one part number.

use serde::Serialize;

use crate::parser::schema::Part;

/// Parts sharing one device key, in sorted order.
#[derive(Debug, Clone, Serialize)]
pub struct PartGroup<'a> {
    pub key: String,
    pub parts: Vec<&'a Part>,
}

impl<'a> PartGroup<'a> {
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.parts.iter().map(|p| p.name_or_empty()).collect()
    }
}

/// Human-readable equivalence key, `{deviceset}{device}-{value} (value: {value})`.
pub fn get_device_key(part: &Part) -> String {
    let value = part.value_or_empty();
    format!(
        "{}{}-{} (value: {})",
        part.deviceset_or_empty(),
        part.device_or_empty(),
        value,
        value
    )
}

/// Stable-sorts parts by device key and groups consecutive equal keys.
///
/// Every input part lands in exactly one group; groups come out in key order.
pub fn get_parts_by_triple<'a, I>(parts: I) -> Vec<PartGroup<'a>>
where
    I: IntoIterator<Item = &'a Part>,
{
    let mut keyed: Vec<(String, &'a Part)> =
        parts.into_iter().map(|p| (get_device_key(p), p)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut groups: Vec<PartGroup<'a>> = Vec::new();
    for (key, part) in keyed {
        match groups.last_mut() {
            Some(group) if group.key == key => group.parts.push(part),
            _ => groups.push(PartGroup {
                key,
                parts: vec![part],
            }),
        }
    }
    groups
}
