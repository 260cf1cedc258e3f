//! Input validation errors.
//!
//! Validation collects every violated rule before reporting, so a form can
//! mark all offending fields in one round trip. Unrecognized species or
//! activity values are NOT errors; they are representable result states.

use thiserror::Error;

/// One violated input rule. Messages are the field-level Spanish strings
/// shown in the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("El peso debe ser mayor a 0 kg")]
    WeightNotPositive,
    #[error("Peso excesivamente alto. Verificar unidad de medida (kg)")]
    WeightAboveCeiling,
    #[error("Longitud corporal debe estar entre 5 y 200 cm")]
    BodyLengthOutOfRange,
    #[error("Longitud de pata debe estar entre 2 y 50 cm")]
    LegLengthOutOfRange,
    #[error("Circunferencia torácica debe estar entre 10 y 150 cm")]
    ChestCircumferenceOutOfRange,
    #[error("BCS debe estar entre 1 y 9")]
    BcsOutOfRange,
}

/// Rejection carrying every violated rule, not just the first.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("entrada inválida: {}", summary(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }
}

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
