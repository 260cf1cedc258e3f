//! Body-condition calculator.
//!
//! Species-specific morphometric index plus BCS interpretation and
//! ideal-weight estimation. Two index formulas are in clinical circulation
//! for each species; this module implements the morphometric-ratio variants
//! and their matching thresholds:
//!
//! - feline: `FBMI = (chest − 20) / (0.07062 × tibia)`, ideal 15-25
//! - canine (Mawby): `BMI = (chest / leg − 1) × 100`, ideal 25-35
//!
//! The weight/length² variants use different threshold sets and must never
//! be mixed with these.

mod bcs;

pub use bcs::{adjustment_factor, ideal_weight_range, narrative};

use crate::error::{ValidationError, Violation};
use crate::models::{
    BodyConditionResult, BodyIndex, ConditionClass, MorphometricInput, Species,
};

/// Sanity ceiling on body weight, kg.
pub const MAX_WEIGHT_KG: f64 = 200.0;

/// Tibia coefficient for the feline index, scaled so the 15/25/30
/// classification thresholds land on realistic cats (a 35 cm chest with a
/// 12 cm tibia scores 17.7, ideal).
const FBMI_TIBIA_COEFFICIENT: f64 = 0.07062;

/// Validate a morphometric input, returning every violated rule.
pub fn validate(input: &MorphometricInput) -> Vec<Violation> {
    let mut violations = Vec::new();

    if input.weight_kg <= 0.0 || !input.weight_kg.is_finite() {
        violations.push(Violation::WeightNotPositive);
    } else if input.weight_kg > MAX_WEIGHT_KG {
        violations.push(Violation::WeightAboveCeiling);
    }

    if let Some(length) = input.body_length_cm {
        if !(5.0..=200.0).contains(&length) {
            violations.push(Violation::BodyLengthOutOfRange);
        }
    }

    if let Some(leg) = input.leg_length_cm {
        if !(2.0..=50.0).contains(&leg) {
            violations.push(Violation::LegLengthOutOfRange);
        }
    }

    if let Some(chest) = input.chest_circumference_cm {
        if !(10.0..=150.0).contains(&chest) {
            violations.push(Violation::ChestCircumferenceOutOfRange);
        }
    }

    if let Some(bcs) = input.bcs {
        if !(1..=9).contains(&bcs) {
            violations.push(Violation::BcsOutOfRange);
        }
    }

    violations
}

/// Compute the body-condition evaluation for a validated input.
///
/// Missing measurements degrade to a BCS-only classification; an
/// unsupported species yields an advisory result. Neither is an error.
pub fn compute_body_condition(
    input: &MorphometricInput,
) -> Result<BodyConditionResult, ValidationError> {
    let violations = validate(input);
    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }

    match input.species {
        Species::Feline => Ok(compute_feline(input)),
        Species::Canine => Ok(compute_canine(input)),
        Species::Other => Ok(BodyConditionResult {
            index: None,
            classification: ConditionClass::UnsupportedSpecies,
            recommendation: "Cálculo de IMC disponible solo para perros y gatos".to_string(),
            bcs_narrative: None,
            ideal_weight_range: None,
        }),
    }
}

fn compute_feline(input: &MorphometricInput) -> BodyConditionResult {
    let bcs = input.bcs.unwrap_or(5);

    let (index, classification, recommendation) = match measurements(input) {
        Some((chest, leg)) => {
            let fbmi = (chest - 20.0) / (FBMI_TIBIA_COEFFICIENT * leg);
            let (class, advice) = if fbmi < 15.0 {
                (
                    ConditionClass::Underweight,
                    "Evaluación nutricional. Incrementar aporte calórico.",
                )
            } else if fbmi <= 25.0 {
                (
                    ConditionClass::Ideal,
                    "Mantener peso actual con dieta balanceada.",
                )
            } else if fbmi > 30.0 {
                (
                    ConditionClass::Overweight,
                    "Plan de pérdida de peso supervisado.",
                )
            } else {
                (
                    ConditionClass::TrendingOverweight,
                    "Monitorear peso y ajustar dieta si es necesario.",
                )
            };
            (Some(BodyIndex::Feline(fbmi)), class, advice)
        }
        None => (
            None,
            ConditionClass::WeightAndBcsOnly,
            "Se requieren circunferencia torácica y longitud de tibia para FBMI.",
        ),
    };

    BodyConditionResult {
        index,
        classification,
        recommendation: recommendation.to_string(),
        bcs_narrative: Some(narrative(bcs).to_string()),
        ideal_weight_range: Some(ideal_weight_range(input.weight_kg, bcs)),
    }
}

fn compute_canine(input: &MorphometricInput) -> BodyConditionResult {
    let bcs = input.bcs.unwrap_or(5);

    let (index, classification, recommendation) = match measurements(input) {
        Some((chest, leg)) => {
            let bmi = (chest / leg - 1.0) * 100.0;
            let (class, advice) = if bmi < 25.0 {
                (
                    ConditionClass::Underweight,
                    "Incrementar aporte calórico. Evaluar causas de pérdida de peso.",
                )
            } else if bmi <= 35.0 {
                (
                    ConditionClass::Ideal,
                    "Mantener peso actual con dieta equilibrada y ejercicio regular.",
                )
            } else {
                (
                    ConditionClass::Overweight,
                    "Plan de pérdida de peso. Control veterinario.",
                )
            };
            (Some(BodyIndex::Canine(bmi)), class, advice)
        }
        None => (
            None,
            ConditionClass::WeightAndBcsOnly,
            "Se requieren circunferencia torácica y longitud de pata trasera para IMC Mawby.",
        ),
    };

    BodyConditionResult {
        index,
        classification,
        recommendation: recommendation.to_string(),
        bcs_narrative: Some(narrative(bcs).to_string()),
        ideal_weight_range: Some(ideal_weight_range(input.weight_kg, bcs)),
    }
}

/// Both measurements, when present and positive.
fn measurements(input: &MorphometricInput) -> Option<(f64, f64)> {
    match (input.chest_circumference_cm, input.leg_length_cm) {
        (Some(chest), Some(leg)) if chest > 0.0 && leg > 0.0 => Some((chest, leg)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feline_input(weight: f64, chest: f64, leg: f64) -> MorphometricInput {
        MorphometricInput {
            species: Species::Feline,
            weight_kg: weight,
            body_length_cm: None,
            chest_circumference_cm: Some(chest),
            leg_length_cm: Some(leg),
            bcs: None,
        }
    }

    #[test]
    fn test_feline_ideal() {
        // FBMI = (35 - 20) / (0.07062 × 12) ≈ 17.70
        let result = compute_body_condition(&feline_input(4.0, 35.0, 12.0)).unwrap();
        match result.index {
            Some(BodyIndex::Feline(fbmi)) => assert!((fbmi - 17.70).abs() < 0.01),
            other => panic!("expected feline index, got {:?}", other),
        }
        assert_eq!(result.classification, ConditionClass::Ideal);
    }

    #[test]
    fn test_feline_thresholds() {
        // Low FBMI
        let result = compute_body_condition(&feline_input(2.5, 28.0, 14.0)).unwrap();
        assert_eq!(result.classification, ConditionClass::Underweight);

        // FBMI in (25, 30]: (45-20)/(0.07062×12) ≈ 29.50 → trending
        let result = compute_body_condition(&feline_input(6.5, 45.0, 12.0)).unwrap();
        assert_eq!(result.classification, ConditionClass::TrendingOverweight);

        // FBMI > 30
        let result = compute_body_condition(&feline_input(8.0, 48.0, 12.0)).unwrap();
        assert_eq!(result.classification, ConditionClass::Overweight);
    }

    #[test]
    fn test_canine_mawby() {
        // BMI = (65/30 - 1) × 100 ≈ 116.7, far above the 35 threshold
        let input = MorphometricInput {
            species: Species::Canine,
            weight_kg: 20.0,
            body_length_cm: None,
            chest_circumference_cm: Some(65.0),
            leg_length_cm: Some(30.0),
            bcs: None,
        };
        let result = compute_body_condition(&input).unwrap();
        match result.index {
            Some(BodyIndex::Canine(bmi)) => assert!((bmi - 116.7).abs() < 0.1),
            other => panic!("expected canine index, got {:?}", other),
        }
        assert_eq!(result.classification, ConditionClass::Overweight);
    }

    #[test]
    fn test_canine_ideal_band() {
        // chest 39, leg 30 → (1.3 - 1) × 100 = 30 → ideal
        let input = MorphometricInput {
            species: Species::Canine,
            weight_kg: 18.0,
            body_length_cm: None,
            chest_circumference_cm: Some(39.0),
            leg_length_cm: Some(30.0),
            bcs: Some(5),
        };
        let result = compute_body_condition(&input).unwrap();
        assert_eq!(result.classification, ConditionClass::Ideal);
    }

    #[test]
    fn test_missing_measurements_degrade() {
        let input = MorphometricInput::new(Species::Canine, 12.0);
        let result = compute_body_condition(&input).unwrap();
        assert!(result.index.is_none());
        assert_eq!(result.classification, ConditionClass::WeightAndBcsOnly);
        // BCS interpretation and ideal range still present, assuming BCS 5
        assert!(result.bcs_narrative.unwrap().contains("BCS 5"));
        assert!(result.ideal_weight_range.is_some());
    }

    #[test]
    fn test_unsupported_species_is_not_an_error() {
        let input = MorphometricInput::new(Species::Other, 1.2);
        let result = compute_body_condition(&input).unwrap();
        assert_eq!(result.classification, ConditionClass::UnsupportedSpecies);
        assert!(result.index.is_none());
        assert!(result.ideal_weight_range.is_none());
    }

    #[test]
    fn test_validation_collects_all_violations() {
        let input = MorphometricInput {
            species: Species::Canine,
            weight_kg: -2.0,
            body_length_cm: Some(3.0),
            chest_circumference_cm: Some(500.0),
            leg_length_cm: Some(1.0),
            bcs: Some(12),
        };
        let err = compute_body_condition(&input).unwrap_err();
        assert_eq!(err.violations.len(), 5);
        assert!(err.contains(Violation::WeightNotPositive));
        assert!(err.contains(Violation::BodyLengthOutOfRange));
        assert!(err.contains(Violation::ChestCircumferenceOutOfRange));
        assert!(err.contains(Violation::LegLengthOutOfRange));
        assert!(err.contains(Violation::BcsOutOfRange));
    }

    #[test]
    fn test_weight_ceiling() {
        let input = MorphometricInput::new(Species::Feline, 250.0);
        let err = compute_body_condition(&input).unwrap_err();
        assert_eq!(err.violations, vec![Violation::WeightAboveCeiling]);
    }
}
