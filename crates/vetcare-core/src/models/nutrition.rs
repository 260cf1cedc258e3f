//! Energy-requirement value types.

use serde::{Deserialize, Serialize};

use super::Species;

/// Life stage / activity class driving the energy multiplier.
///
/// Each species accepts a subset of these; a value outside the species'
/// allowed set falls back to that species' sedentary default instead of
/// erroring, so partially filled forms still produce a usable plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    // Canine set
    PuppyUnder4,
    PuppyOver4,
    NeuteredSedentary,
    Active,
    LightWork,
    HeavyWork,
    // Feline set
    Kitten,
    IndoorSedentary,
    OutdoorActive,
    Pregnant,
    Lactating,
    // Shared
    WeightLoss,
    WeightGain,
    Geriatric,
}

impl std::str::FromStr for ActivityLevel {
    type Err = ();

    /// Parse the snake_case tokens used by the portal forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "puppy_under4" => Ok(Self::PuppyUnder4),
            "puppy_over4" => Ok(Self::PuppyOver4),
            "neutered_sedentary" => Ok(Self::NeuteredSedentary),
            "active" => Ok(Self::Active),
            "light_work" => Ok(Self::LightWork),
            "heavy_work" => Ok(Self::HeavyWork),
            "kitten" => Ok(Self::Kitten),
            "indoor_sedentary" => Ok(Self::IndoorSedentary),
            "outdoor_active" => Ok(Self::OutdoorActive),
            "pregnant" => Ok(Self::Pregnant),
            "lactating" => Ok(Self::Lactating),
            "weight_loss" => Ok(Self::WeightLoss),
            "weight_gain" => Ok(Self::WeightGain),
            "geriatric" => Ok(Self::Geriatric),
            _ => Err(()),
        }
    }
}

/// Input for a daily energy requirement calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyRequestInput {
    pub species: Species,
    /// Body weight in kg. Must be positive and at most 200.
    pub weight_kg: f64,
    /// Body Condition Score, 1-9. Defaults to 5 (ideal) when omitted.
    #[serde(default = "default_bcs")]
    pub bcs: u8,
    pub activity: ActivityLevel,
}

fn default_bcs() -> u8 {
    5
}

impl EnergyRequestInput {
    pub fn new(species: Species, weight_kg: f64, activity: ActivityLevel) -> Self {
        Self {
            species,
            weight_kg,
            bcs: default_bcs(),
            activity,
        }
    }
}

/// NRC/AAFCO-style daily macro-nutrient targets.
///
/// The canine/feline asymmetry is intentional: cats are obligate carnivores
/// and carry an arachidonic-acid requirement dogs do not have, while dogs
/// carry an alpha-linolenic target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientTargets {
    pub protein_g_per_day: f64,
    pub fat_g_per_day: f64,
    pub linoleic_acid_g_per_1000kcal: f64,
    /// Canine only.
    pub alpha_linolenic_g_per_1000kcal: Option<f64>,
    /// Feline only.
    pub arachidonic_g_per_1000kcal: Option<f64>,
    pub epa_dha_advisory: String,
}

/// Result of a daily energy requirement calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyResult {
    /// Resting energy requirement: 70 × kg^0.75, in kcal.
    pub resting_energy_kcal: f64,
    /// Daily requirement: round(RER × factor), in kcal.
    pub daily_energy_kcal: u32,
    pub classification: String,
    pub recommendations: String,
    /// Present only for weight-loss / weight-gain plans.
    pub weight_management: Option<String>,
    /// Dietary composition summary for the species.
    pub description: Option<String>,
    pub meals_per_day: u8,
    /// Absent for unsupported species.
    pub targets: Option<NutrientTargets>,
}

/// Meal count with its rationale, chosen from species and body weight.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealDistribution {
    pub meals: u8,
    pub description: &'static str,
}
