//! Body-condition value types.

use serde::{Deserialize, Serialize};

use super::Species;

/// Morphometric measurements for a body-condition evaluation.
///
/// All linear measurements are optional: when chest circumference or leg
/// length is missing the evaluation degrades to a weight-and-BCS-only
/// classification instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MorphometricInput {
    pub species: Species,
    /// Body weight in kg. Must be positive and at most 200.
    pub weight_kg: f64,
    /// Nose-to-tail-base body length in cm.
    pub body_length_cm: Option<f64>,
    /// Thoracic circumference in cm, used by both index formulas.
    pub chest_circumference_cm: Option<f64>,
    /// Tibia length for cats, hind leg length for dogs, in cm.
    pub leg_length_cm: Option<f64>,
    /// Body Condition Score on the 9-point scale.
    pub bcs: Option<u8>,
}

impl MorphometricInput {
    /// Minimal input: species and weight only.
    pub fn new(species: Species, weight_kg: f64) -> Self {
        Self {
            species,
            weight_kg,
            body_length_cm: None,
            chest_circumference_cm: None,
            leg_length_cm: None,
            bcs: None,
        }
    }
}

/// Computed body index, tagged by the formula that produced it.
///
/// Exactly one variant applies to a given result; the species selects it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum BodyIndex {
    /// Mawby ratio index: (chest / leg − 1) × 100.
    Canine(f64),
    /// Feline Body Mass Index: (chest − 20) / (0.07062 × tibia).
    Feline(f64),
}

impl BodyIndex {
    /// The numeric index value regardless of variant.
    pub fn value(&self) -> f64 {
        match self {
            BodyIndex::Canine(v) | BodyIndex::Feline(v) => *v,
        }
    }
}

/// Weight classification derived from the body index thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConditionClass {
    Underweight,
    Ideal,
    /// Feline-only band: FBMI above ideal but not yet obese.
    TrendingOverweight,
    Overweight,
    /// Measurements were missing; only weight and BCS were considered.
    WeightAndBcsOnly,
    /// Species outside the supported set; advisory result, not an error.
    UnsupportedSpecies,
}

impl ConditionClass {
    /// Spanish display label, as shown in the portal.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionClass::Underweight => "Bajo peso",
            ConditionClass::Ideal => "Peso ideal",
            ConditionClass::TrendingOverweight => "Tendencia sobrepeso",
            ConditionClass::Overweight => "Sobrepeso/Obesidad",
            ConditionClass::WeightAndBcsOnly => "Evaluación basada en peso y BCS",
            ConditionClass::UnsupportedSpecies => "Especie no soportada",
        }
    }
}

/// Ideal weight range estimated from current weight and BCS.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IdealWeightRange {
    pub low_kg: f64,
    pub high_kg: f64,
}

impl std::fmt::Display for IdealWeightRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} - {:.1} kg", self.low_kg, self.high_kg)
    }
}

/// Result of a body-condition evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyConditionResult {
    /// Computed index; absent when measurements were missing or the species
    /// is unsupported.
    pub index: Option<BodyIndex>,
    pub classification: ConditionClass,
    /// Clinical recommendation matching the classification.
    pub recommendation: String,
    /// Palpation narrative for the supplied (or assumed) BCS.
    pub bcs_narrative: Option<String>,
    pub ideal_weight_range: Option<IdealWeightRange>,
}
