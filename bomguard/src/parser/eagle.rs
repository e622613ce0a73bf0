//! Eagle XML Schematic Parser
//!
//! Extracts the part list from an Eagle `.sch` export. Only the pieces needed
//! for BOM checks are read:
//! - every `<part>` element below the document root, at any depth
//! - its `name`, `library`, `deviceset`, `device` and `value` attributes
//! - its direct `<attribute name=".." value=".."/>` children
//!
//! Everything else in the drawing (libraries, sheets, nets) is ignored.

use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::parser::schema::{Part, PartAttribute, Schematic};

#[derive(Debug, thiserror::Error)]
pub enum EagleParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),
}

pub struct EagleParser;

impl EagleParser {
    pub fn parse_file(path: &Path) -> Result<Schematic, EagleParseError> {
        let content = std::fs::read_to_string(path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();
        Self::parse_str(&content, &filename)
    }

    pub fn parse_str(content: &str, filename: &str) -> Result<Schematic, EagleParseError> {
        // Eagle exports carry a DOCTYPE line
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;

        let doc = Document::parse_with_options(content, options)?;
        let root = doc.root_element();

        let parts: Vec<Part> = root
            .descendants()
            .skip(1)
            .filter(|n| n.is_element() && n.tag_name().name() == "part")
            .map(|n| Self::parse_part(&n))
            .collect();

        tracing::debug!("Parsed {} parts from {}", parts.len(), filename);

        Ok(Schematic {
            filename: filename.to_string(),
            parts,
        })
    }

    fn parse_part(node: &Node) -> Part {
        let attributes = node
            .children()
            .filter(|c| c.is_element() && c.tag_name().name() == "attribute")
            .map(|c| PartAttribute {
                name: c.attribute("name").unwrap_or("").to_string(),
                value: c.attribute("value").unwrap_or("").to_string(),
            })
            .collect();

        Part {
            name: node.attribute("name").map(str::to_string),
            library: node.attribute("library").map(str::to_string),
            deviceset: node.attribute("deviceset").map(str::to_string),
            device: node.attribute("device").map(str::to_string),
            value: node.attribute("value").map(str::to_string),
            attributes,
        }
    }
}
