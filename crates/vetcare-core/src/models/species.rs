//! Species classification.

use serde::{Deserialize, Serialize};

/// Patient species as understood by the calculators.
///
/// Forms submitted by owners carry free-text species labels in Spanish or
/// English. `Other` is a valid input, not an error: calculators return an
/// advisory result for it instead of failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Species {
    Canine,
    Feline,
    /// Any species outside the supported set.
    Other,
}

impl Species {
    /// Classify a free-text species label.
    ///
    /// Matching is case-insensitive and substring-based, so "Perro mestizo"
    /// and "gato doméstico" both resolve.
    pub fn parse(label: &str) -> Species {
        let lower = label.to_lowercase();
        if lower.contains("gato") || lower.contains("felino") || lower.contains("cat") {
            Species::Feline
        } else if lower.contains("perro") || lower.contains("canino") || lower.contains("dog") {
            Species::Canine
        } else {
            Species::Other
        }
    }

    /// Display label as used on records and certificates.
    pub fn label(&self) -> &'static str {
        match self {
            Species::Canine => "Perro",
            Species::Feline => "Gato",
            Species::Other => "Otra especie",
        }
    }
}
