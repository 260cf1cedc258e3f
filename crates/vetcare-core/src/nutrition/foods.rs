//! Commercial food reference data and portion arithmetic.

use serde::Serialize;

use crate::models::{MealDistribution, Species};

/// Energy density of a commercial food product.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FoodEnergy {
    pub name: &'static str,
    pub kcal_per_100g: u32,
}

/// Common dog foods on the Chilean market.
pub const DOG_FOODS: &[FoodEnergy] = &[
    FoodEnergy { name: "Alimento Seco Premium Adulto", kcal_per_100g: 350 },
    FoodEnergy { name: "Alimento Seco Super Premium", kcal_per_100g: 380 },
    FoodEnergy { name: "Alimento Húmedo Lata", kcal_per_100g: 85 },
    FoodEnergy { name: "Alimento Light/Senior", kcal_per_100g: 320 },
    FoodEnergy { name: "Alimento Puppy/Cachorro", kcal_per_100g: 400 },
];

/// Common cat foods on the Chilean market.
pub const CAT_FOODS: &[FoodEnergy] = &[
    FoodEnergy { name: "Alimento Seco Premium Adulto", kcal_per_100g: 380 },
    FoodEnergy { name: "Alimento Seco Super Premium", kcal_per_100g: 420 },
    FoodEnergy { name: "Alimento Húmedo Lata", kcal_per_100g: 90 },
    FoodEnergy { name: "Alimento Light/Senior", kcal_per_100g: 350 },
    FoodEnergy { name: "Alimento Kitten/Gatito", kcal_per_100g: 450 },
];

/// Food catalog for a species; empty for unsupported species.
pub fn foods_for(species: Species) -> &'static [FoodEnergy] {
    match species {
        Species::Canine => DOG_FOODS,
        Species::Feline => CAT_FOODS,
        Species::Other => &[],
    }
}

/// Grams of food per day covering a daily requirement at a given energy
/// density. Returns `None` for a zero density.
pub fn daily_food_grams(daily_kcal: u32, kcal_per_100g: u32) -> Option<u32> {
    if kcal_per_100g == 0 {
        return None;
    }
    Some(((daily_kcal as f64 * 100.0) / kcal_per_100g as f64).round() as u32)
}

/// Meal distribution by species and body weight.
///
/// Large dogs stay at two meals to reduce gastric-torsion risk; cats graze
/// in small portions regardless of weight.
pub fn meal_distribution(species: Species, weight_kg: f64) -> MealDistribution {
    match species {
        Species::Canine => {
            if weight_kg < 10.0 {
                MealDistribution {
                    meals: 3,
                    description: "3 comidas diarias (razas pequeñas)",
                }
            } else if weight_kg < 25.0 {
                MealDistribution {
                    meals: 2,
                    description: "2 comidas diarias (razas medianas)",
                }
            } else {
                MealDistribution {
                    meals: 2,
                    description: "2 comidas diarias (razas grandes - prevenir torsión gástrica)",
                }
            }
        }
        Species::Feline => MealDistribution {
            meals: 3,
            description: "3-4 comidas pequeñas diarias (comportamiento natural felino)",
        },
        Species::Other => MealDistribution {
            meals: 2,
            description: "2 comidas diarias",
        },
    }
}
