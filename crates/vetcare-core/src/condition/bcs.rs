//! Body Condition Score reference data.
//!
//! The 9-point palpation narratives and the BCS → weight-adjustment factors
//! are fixed clinical reference tables, reproduced as data.

use crate::models::IdealWeightRange;

/// Palpation narratives for BCS 1-9, index 0 = BCS 1.
const BCS_NARRATIVES: [&str; 9] = [
    "BCS 1: Extremadamente delgado - Costillas, vértebras y huesos pélvicos claramente visibles",
    "BCS 2: Muy delgado - Costillas fácilmente palpables sin presión",
    "BCS 3: Delgado - Costillas palpables con ligera presión",
    "BCS 4: Bajo del ideal - Costillas palpables con presión mínima",
    "BCS 5: Ideal - Costillas palpables sin exceso de grasa. Cintura visible",
    "BCS 6: Sobre el ideal - Costillas palpables con ligera dificultad",
    "BCS 7: Sobrepeso - Costillas difíciles de palpar debido a grasa",
    "BCS 8: Obeso - Costillas muy difíciles de palpar. Depósitos de grasa evidentes",
    "BCS 9: Extremadamente obeso - Costillas no palpables. Depósitos masivos de grasa",
];

/// Palpation narrative for a BCS value. Out-of-range scores clamp to the
/// nearest end of the scale.
pub fn narrative(bcs: u8) -> &'static str {
    let clamped = bcs.clamp(1, 9);
    BCS_NARRATIVES[(clamped - 1) as usize]
}

/// Fraction of current weight that the ideal weight represents.
///
/// BCS 5 is exactly 1.0: an ideal-condition animal never has its weight
/// adjusted.
pub fn adjustment_factor(bcs: u8) -> f64 {
    match bcs {
        1 | 2 => 1.20,
        3 => 1.10,
        4 => 1.05,
        5 => 1.00,
        6 => 0.95,
        7 => 0.85,
        8 => 0.75,
        9 => 0.65,
        _ => 1.00,
    }
}

/// Ideal weight range: current weight × factor, ± 5 %, one decimal.
pub fn ideal_weight_range(current_weight_kg: f64, bcs: u8) -> IdealWeightRange {
    let ideal = current_weight_kg * adjustment_factor(bcs);
    IdealWeightRange {
        low_kg: round1(ideal * 0.95),
        high_kg: round1(ideal * 1.05),
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
