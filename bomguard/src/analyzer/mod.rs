//! BOM Analysis Module
//!
//! Classifies parts, groups them by part triple and runs the BOM rules.

pub mod classifier;
pub mod part_groups;
pub mod rules;

pub use classifier::*;
pub use part_groups::*;
pub use rules::*;
