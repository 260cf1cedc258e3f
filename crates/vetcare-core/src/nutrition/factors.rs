//! Species × activity energy multiplier tables.
//!
//! Fixed veterinary reference ratios applied to the resting energy
//! requirement. Reproduced as data; never derived.

use crate::models::ActivityLevel;

/// One row of the multiplier table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyFactor {
    pub factor: f64,
    pub classification: &'static str,
    pub recommendations: &'static str,
    pub weight_management: Option<&'static str>,
}

/// Default for dogs with an unrecognized activity value: neutered/sedentary.
pub const CANINE_DEFAULT: EnergyFactor = EnergyFactor {
    factor: 1.6,
    classification: "Adulto esterilizado/sedentario",
    recommendations: "Control de peso, ejercicio regular moderado.",
    weight_management: None,
};

/// Default for cats with an unrecognized activity value: indoor/sedentary.
pub const FELINE_DEFAULT: EnergyFactor = EnergyFactor {
    factor: 1.3,
    classification: "Adulto esterilizado/indoor",
    recommendations: "Control de peso, estimulación ambiental, juegos.",
    weight_management: None,
};

/// Canine multiplier table. `None` for activities outside the canine set.
pub fn canine_factor(activity: ActivityLevel) -> Option<EnergyFactor> {
    use ActivityLevel::*;
    let row = match activity {
        PuppyUnder4 => EnergyFactor {
            factor: 3.0,
            classification: "Cachorro < 4 meses",
            recommendations: "Alimentación frecuente, alimento para cachorros de alta calidad.",
            weight_management: None,
        },
        PuppyOver4 => EnergyFactor {
            factor: 2.0,
            classification: "Cachorro > 4 meses",
            recommendations: "Transición gradual a alimento adulto según raza.",
            weight_management: None,
        },
        NeuteredSedentary => CANINE_DEFAULT,
        Active => EnergyFactor {
            factor: 2.0,
            classification: "Adulto activo",
            recommendations: "Paseos largos diarios, juegos activos.",
            weight_management: None,
        },
        // Published range 2.5-4.0; midpoint
        LightWork => EnergyFactor {
            factor: 3.0,
            classification: "Trabajo ligero",
            recommendations: "Deporte, agility, actividades de entrenamiento.",
            weight_management: None,
        },
        // Published range 4.0-8.0; midpoint
        HeavyWork => EnergyFactor {
            factor: 6.0,
            classification: "Trabajo pesado",
            recommendations: "Trineo, búsqueda y rescate, trabajo en climas extremos.",
            weight_management: None,
        },
        WeightLoss => EnergyFactor {
            factor: 1.0,
            classification: "Pérdida de peso",
            recommendations: "Dieta hipocalórica estricta, ejercicio controlado.",
            weight_management: Some("Plan de pérdida de peso supervisado por veterinario."),
        },
        WeightGain => EnergyFactor {
            factor: 1.3,
            classification: "Ganancia de peso",
            recommendations: "Dieta hipercalórica, múltiples comidas pequeñas.",
            weight_management: Some("Incrementar calorías gradualmente hasta peso objetivo."),
        },
        Geriatric => EnergyFactor {
            factor: 1.3,
            classification: "Geriátrico",
            recommendations: "Alimento senior, fácil digestión, suplementos según necesidad.",
            weight_management: None,
        },
        _ => return None,
    };
    Some(row)
}

/// Feline multiplier table. `None` for activities outside the feline set.
pub fn feline_factor(activity: ActivityLevel) -> Option<EnergyFactor> {
    use ActivityLevel::*;
    let row = match activity {
        Kitten => EnergyFactor {
            factor: 2.5,
            classification: "Gatito en crecimiento",
            recommendations: "Alimento para gatitos, alimentación libre o frecuente.",
            weight_management: None,
        },
        IndoorSedentary => FELINE_DEFAULT,
        OutdoorActive => EnergyFactor {
            factor: 1.5,
            classification: "Adulto activo/outdoor",
            recommendations: "Acceso exterior, alta estimulación, caza natural.",
            weight_management: None,
        },
        Pregnant => EnergyFactor {
            factor: 2.0,
            classification: "Gestación",
            recommendations: "Alimento para gatitas gestantes, alimentación libre.",
            weight_management: None,
        },
        // Peak lactation within the published 2.0-6.0 range
        Lactating => EnergyFactor {
            factor: 4.0,
            classification: "Lactancia",
            recommendations: "Alimentación libre, alimento de alta calidad y densidad.",
            weight_management: None,
        },
        WeightLoss => EnergyFactor {
            factor: 0.8,
            classification: "Pérdida de peso",
            recommendations: "Dieta prescrita, control veterinario estricto.",
            weight_management: Some(
                "Reducción calórica controlada para evitar lipidosis hepática.",
            ),
        },
        WeightGain => EnergyFactor {
            factor: 1.2,
            classification: "Ganancia de peso",
            recommendations: "Dieta alta en calorías, palatabilidad aumentada.",
            weight_management: Some("Incremento calórico gradual hasta peso ideal."),
        },
        Geriatric => EnergyFactor {
            factor: 1.05,
            classification: "Geriátrico sedentario",
            recommendations: "Alimento senior, fácil digestión, monitoreo renal.",
            weight_management: None,
        },
        _ => return None,
    };
    Some(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canine_table_values() {
        assert_eq!(
            canine_factor(ActivityLevel::NeuteredSedentary).unwrap().factor,
            1.6
        );
        assert_eq!(canine_factor(ActivityLevel::HeavyWork).unwrap().factor, 6.0);
        assert_eq!(canine_factor(ActivityLevel::PuppyUnder4).unwrap().factor, 3.0);
    }

    #[test]
    fn test_feline_table_values() {
        assert_eq!(feline_factor(ActivityLevel::Lactating).unwrap().factor, 4.0);
        assert_eq!(feline_factor(ActivityLevel::WeightLoss).unwrap().factor, 0.8);
        assert_eq!(feline_factor(ActivityLevel::Geriatric).unwrap().factor, 1.05);
    }

    #[test]
    fn test_cross_species_activities_are_none() {
        // A kitten row does not exist in the canine table, nor puppies in
        // the feline table; callers substitute the species default.
        assert!(canine_factor(ActivityLevel::Kitten).is_none());
        assert!(canine_factor(ActivityLevel::IndoorSedentary).is_none());
        assert!(feline_factor(ActivityLevel::PuppyUnder4).is_none());
        assert!(feline_factor(ActivityLevel::HeavyWork).is_none());
    }

    #[test]
    fn test_weight_plans_carry_management_note() {
        assert!(canine_factor(ActivityLevel::WeightLoss)
            .unwrap()
            .weight_management
            .is_some());
        assert!(feline_factor(ActivityLevel::WeightGain)
            .unwrap()
            .weight_management
            .is_some());
        assert!(canine_factor(ActivityLevel::Active)
            .unwrap()
            .weight_management
            .is_none());
    }
}
