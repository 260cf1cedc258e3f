//! VetCare Core Library
//!
//! Pure clinical calculation core for a home-visit veterinary practice.
//!
//! # Architecture
//!
//! ```text
//! Morphometrics ──▶ condition  ──▶ BodyConditionResult
//! Weight + BCS  ──▶ nutrition  ──▶ EnergyResult (RER, DER, targets)
//! Vacc. record  ──▶ schedule   ──▶ VaccinationScheduleResult
//!
//! Siblings: rut (Chilean RUT), contact (WhatsApp), certificate (SAG form),
//! catalog (vaccines, breeds), profile (practitioner identity)
//! ```
//!
//! # Core Principle
//!
//! **Calculators are pure.** They never perform I/O, never read the clock,
//! and never return a partial result when a numeric invariant is violated.
//! Validation collects every violation at once.
//!
//! # Modules
//!
//! - [`models`]: Domain types (inputs, results, species, activity levels)
//! - [`condition`]: Body condition index and ideal weight range
//! - [`nutrition`]: Energy requirement and macronutrient targets
//! - [`schedule`]: Vaccination due dates and alert levels
//! - [`catalog`]: Static reference data (vaccine products, breeds)
//! - [`certificate`]: SAG export health certificate
//! - [`rut`], [`contact`], [`profile`]: identity and messaging utilities

pub mod catalog;
pub mod certificate;
pub mod condition;
pub mod contact;
pub mod error;
pub mod models;
pub mod nutrition;
pub mod profile;
pub mod rut;
pub mod schedule;

// Re-export commonly used types
pub use error::{ValidationError, Violation};
pub use models::{
    ActivityLevel, AlertLevel, BodyConditionResult, BodyIndex, ConditionClass, EnergyRequestInput,
    EnergyResult, IdealWeightRange, MorphometricInput, Species, VaccinationRecord,
    VaccinationScheduleResult,
};
pub use profile::VetProfile;
