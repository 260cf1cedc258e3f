//! Energy requirement calculator.
//!
//! RER = 70 × kg^0.75 (fixed allometric constants), scaled by a species ×
//! activity multiplier, then extended with NRC/AAFCO-style macro-nutrient
//! targets over metabolic weight. Strict on numeric ranges, tolerant on
//! categorical unknowns: a bad weight rejects, an unknown activity or
//! species does not.

mod factors;
mod foods;

pub use factors::{canine_factor, feline_factor, EnergyFactor, CANINE_DEFAULT, FELINE_DEFAULT};
pub use foods::{daily_food_grams, foods_for, meal_distribution, FoodEnergy, CAT_FOODS, DOG_FOODS};

use crate::condition::MAX_WEIGHT_KG;
use crate::error::{ValidationError, Violation};
use crate::models::{
    ActivityLevel, EnergyRequestInput, EnergyResult, NutrientTargets, Species,
};

/// Resting energy requirement in kcal/day. Constants are not configurable.
pub fn resting_energy_kcal(weight_kg: f64) -> f64 {
    70.0 * weight_kg.powf(0.75)
}

/// Metabolic body weight, kg^0.75.
pub fn metabolic_weight(weight_kg: f64) -> f64 {
    weight_kg.powf(0.75)
}

/// Compute the daily energy requirement and feeding plan.
pub fn compute_energy_requirement(
    input: &EnergyRequestInput,
) -> Result<EnergyResult, ValidationError> {
    let mut violations = Vec::new();
    if input.weight_kg <= 0.0 || !input.weight_kg.is_finite() {
        violations.push(Violation::WeightNotPositive);
    } else if input.weight_kg > MAX_WEIGHT_KG {
        violations.push(Violation::WeightAboveCeiling);
    }
    if !(1..=9).contains(&input.bcs) {
        violations.push(Violation::BcsOutOfRange);
    }
    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }

    let rer = resting_energy_kcal(input.weight_kg);

    let factor = match input.species {
        Species::Canine => canine_factor(input.activity).unwrap_or(CANINE_DEFAULT),
        Species::Feline => feline_factor(input.activity).unwrap_or(FELINE_DEFAULT),
        Species::Other => EnergyFactor {
            factor: 1.0,
            classification: "Especie no soportada",
            recommendations:
                "Requerimientos detallados disponibles solo para perros y gatos.",
            weight_management: None,
        },
    };

    let daily_kcal = (rer * factor.factor).round() as u32;
    let mw = metabolic_weight(input.weight_kg);

    let (targets, description) = match input.species {
        Species::Canine => (
            Some(canine_targets(mw, daily_kcal)),
            Some("≈18% proteína, ≈5.5% grasa de energía metabolizable".to_string()),
        ),
        Species::Feline => (
            Some(feline_targets(mw, daily_kcal)),
            Some("≈26% proteína, ≈9% grasa de energía metabolizable".to_string()),
        ),
        Species::Other => (None, None),
    };

    Ok(EnergyResult {
        resting_energy_kcal: rer,
        daily_energy_kcal: daily_kcal,
        classification: factor.classification.to_string(),
        recommendations: factor.recommendations.to_string(),
        weight_management: factor.weight_management.map(str::to_string),
        description,
        meals_per_day: meals_per_day(input.species, input.activity),
        targets,
    })
}

/// Adult-dog macro targets (NRC/AAFCO coefficients).
fn canine_targets(metabolic_weight: f64, daily_kcal: u32) -> NutrientTargets {
    NutrientTargets {
        protein_g_per_day: round1(2.62 * metabolic_weight),
        fat_g_per_day: round1(1.3 * metabolic_weight),
        linoleic_acid_g_per_1000kcal: round1(2.8 * daily_kcal as f64 / 1000.0),
        alpha_linolenic_g_per_1000kcal: Some(round2(0.08 * daily_kcal as f64 / 1000.0)),
        arachidonic_g_per_1000kcal: None,
        epa_dha_advisory: "0.05-0.1 g/1000 kcal (beneficioso)".to_string(),
    }
}

/// Adult-cat macro targets. The arachidonic-acid requirement is feline-only
/// (obligate carnivore).
fn feline_targets(metabolic_weight: f64, daily_kcal: u32) -> NutrientTargets {
    NutrientTargets {
        protein_g_per_day: round1(5.0 * metabolic_weight),
        fat_g_per_day: round1(2.0 * metabolic_weight),
        linoleic_acid_g_per_1000kcal: round1(2.0 * daily_kcal as f64 / 1000.0),
        alpha_linolenic_g_per_1000kcal: None,
        arachidonic_g_per_1000kcal: Some(round2(0.02 * daily_kcal as f64 / 1000.0)),
        epa_dha_advisory: "0.05-0.1 g/1000 kcal (recomendado)".to_string(),
    }
}

/// Meal count decision table by species and life stage.
fn meals_per_day(species: Species, activity: ActivityLevel) -> u8 {
    use ActivityLevel::*;
    match species {
        Species::Canine => match activity {
            PuppyUnder4 => 4,
            PuppyOver4 | HeavyWork => 3,
            _ => 2,
        },
        Species::Feline => match activity {
            Kitten => 4,
            Pregnant | Lactating => 3,
            _ => 2,
        },
        Species::Other => 2,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rer_formula() {
        // RER(10 kg) = 70 × 10^0.75 ≈ 393.6
        assert!((resting_energy_kcal(10.0) - 393.64).abs() < 0.1);
        assert!((resting_energy_kcal(1.0) - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_sedentary_dog_der() {
        // DER = round(393.6 × 1.6) = 630 kcal/day
        let input = EnergyRequestInput::new(
            Species::Canine,
            10.0,
            ActivityLevel::NeuteredSedentary,
        );
        let result = compute_energy_requirement(&input).unwrap();
        assert_eq!(result.daily_energy_kcal, 630);
        assert_eq!(result.classification, "Adulto esterilizado/sedentario");
        assert_eq!(result.meals_per_day, 2);
    }

    #[test]
    fn test_unknown_activity_falls_back_to_default() {
        // A "kitten" dog is not in the canine table → sedentary default 1.6
        let odd = EnergyRequestInput::new(Species::Canine, 10.0, ActivityLevel::Kitten);
        let baseline = EnergyRequestInput::new(
            Species::Canine,
            10.0,
            ActivityLevel::NeuteredSedentary,
        );
        let odd_result = compute_energy_requirement(&odd).unwrap();
        let baseline_result = compute_energy_requirement(&baseline).unwrap();
        assert_eq!(
            odd_result.daily_energy_kcal,
            baseline_result.daily_energy_kcal
        );
    }

    #[test]
    fn test_species_specific_fatty_acids() {
        let dog = compute_energy_requirement(&EnergyRequestInput::new(
            Species::Canine,
            10.0,
            ActivityLevel::Active,
        ))
        .unwrap();
        let dog_targets = dog.targets.unwrap();
        assert!(dog_targets.alpha_linolenic_g_per_1000kcal.is_some());
        assert!(dog_targets.arachidonic_g_per_1000kcal.is_none());

        let cat = compute_energy_requirement(&EnergyRequestInput::new(
            Species::Feline,
            4.0,
            ActivityLevel::IndoorSedentary,
        ))
        .unwrap();
        let cat_targets = cat.targets.unwrap();
        assert!(cat_targets.alpha_linolenic_g_per_1000kcal.is_none());
        assert!(cat_targets.arachidonic_g_per_1000kcal.is_some());
    }

    #[test]
    fn test_macro_targets_scale_with_metabolic_weight() {
        let result = compute_energy_requirement(&EnergyRequestInput::new(
            Species::Feline,
            4.0,
            ActivityLevel::IndoorSedentary,
        ))
        .unwrap();
        let targets = result.targets.unwrap();
        // 4^0.75 ≈ 2.828; protein = 5.0 × mw ≈ 14.1 g/day
        assert!((targets.protein_g_per_day - 14.1).abs() < 0.05);
        assert!((targets.fat_g_per_day - 5.7).abs() < 0.05);
    }

    #[test]
    fn test_meal_counts() {
        let puppy = compute_energy_requirement(&EnergyRequestInput::new(
            Species::Canine,
            3.0,
            ActivityLevel::PuppyUnder4,
        ))
        .unwrap();
        assert_eq!(puppy.meals_per_day, 4);

        let working = compute_energy_requirement(&EnergyRequestInput::new(
            Species::Canine,
            30.0,
            ActivityLevel::HeavyWork,
        ))
        .unwrap();
        assert_eq!(working.meals_per_day, 3);

        let queen = compute_energy_requirement(&EnergyRequestInput::new(
            Species::Feline,
            3.5,
            ActivityLevel::Lactating,
        ))
        .unwrap();
        assert_eq!(queen.meals_per_day, 3);
    }

    #[test]
    fn test_nonpositive_weight_rejects() {
        for weight in [0.0, -1.0, -0.001] {
            let input =
                EnergyRequestInput::new(Species::Canine, weight, ActivityLevel::Active);
            let err = compute_energy_requirement(&input).unwrap_err();
            assert!(err.contains(Violation::WeightNotPositive));
        }
    }

    #[test]
    fn test_unsupported_species_best_effort() {
        let input = EnergyRequestInput::new(Species::Other, 1.5, ActivityLevel::Active);
        let result = compute_energy_requirement(&input).unwrap();
        // Factor 1.0: DER equals rounded RER
        assert_eq!(
            result.daily_energy_kcal,
            resting_energy_kcal(1.5).round() as u32
        );
        assert_eq!(result.classification, "Especie no soportada");
        assert!(result.targets.is_none());
    }
}
