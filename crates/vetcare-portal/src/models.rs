//! Portal record types.
//!
//! Documents are stored as JSON in whatever `DocumentStore` backs the
//! deployment, so every record carries its own `id` and serializes with
//! camelCase field names.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use vetcare_core::certificate::DewormingKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Veterinarian,
    Owner,
}

/// A portal account, either the practitioner or a pet owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub name: String,
    /// RFC3339 creation timestamp.
    pub created_at: String,
}

impl User {
    pub fn new(email: impl Into<String>, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            role,
            name: name.into(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// A registered pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub weight_kg: Option<f64>,
    pub microchip: Option<String>,
    pub photo: Option<String>,
    /// Clinical record number, unique per practice.
    pub record_number: Option<String>,
    pub created_at: String,
}

impl Pet {
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        species: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            name: name.into(),
            species: species.into(),
            breed: None,
            birth_date: None,
            weight_kg: None,
            microchip: None,
            photo: None,
            record_number: None,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Consultation,
    Vaccination,
    Deworming,
    Examination,
    Certificate,
    Prescription,
}

/// An entry in the pet's clinical history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    pub pet_id: String,
    pub veterinarian_id: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub date: NaiveDate,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub notes: Option<String>,
    /// Blob-store keys of attached documents.
    #[serde(default)]
    pub documents: Vec<String>,
    pub created_at: String,
}

impl MedicalRecord {
    pub fn new(
        pet_id: impl Into<String>,
        veterinarian_id: impl Into<String>,
        record_type: RecordType,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            pet_id: pet_id.into(),
            veterinarian_id: veterinarian_id.into(),
            record_type,
            date,
            diagnosis: None,
            treatment: None,
            notes: None,
            documents: Vec::new(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// An administered vaccine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vaccination {
    pub id: String,
    pub pet_id: String,
    pub veterinarian_id: String,
    pub vaccine_name: String,
    pub laboratory: String,
    pub batch: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub application_date: NaiveDate,
    #[serde(default)]
    pub pathogens: Vec<String>,
    /// Stamped by the scheduler when the record is created.
    pub next_due_date: Option<NaiveDate>,
    pub created_at: String,
}

impl Vaccination {
    pub fn new(
        pet_id: impl Into<String>,
        veterinarian_id: impl Into<String>,
        vaccine_name: impl Into<String>,
        laboratory: impl Into<String>,
        application_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            pet_id: pet_id.into(),
            veterinarian_id: veterinarian_id.into(),
            vaccine_name: vaccine_name.into(),
            laboratory: laboratory.into(),
            batch: None,
            expiry_date: None,
            application_date,
            pathogens: Vec::new(),
            next_due_date: None,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// An administered antiparasitic treatment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deworming {
    pub id: String,
    pub pet_id: String,
    pub veterinarian_id: String,
    pub product: String,
    pub kind: DewormingKind,
    pub laboratory: Option<String>,
    pub active_ingredient: Option<String>,
    pub lot: Option<String>,
    pub dose: Option<String>,
    pub application_date: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
    pub created_at: String,
}

impl Deworming {
    pub fn new(
        pet_id: impl Into<String>,
        veterinarian_id: impl Into<String>,
        product: impl Into<String>,
        kind: DewormingKind,
        application_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            pet_id: pet_id.into(),
            veterinarian_id: veterinarian_id.into(),
            product: product.into(),
            kind,
            laboratory: None,
            active_ingredient: None,
            lot: None,
            dose: None,
            application_date,
            next_due_date: None,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateKind {
    Health,
    Export,
    Vaccination,
}

/// An issued certificate. The rendered document lives in the blob store;
/// `content` keeps the structured data it was rendered from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub pet_id: String,
    pub veterinarian_id: String,
    #[serde(rename = "type")]
    pub kind: CertificateKind,
    pub issued_date: NaiveDate,
    pub valid_until: Option<NaiveDate>,
    pub content: Option<serde_json::Value>,
    pub pdf_url: Option<String>,
    pub created_at: String,
}

impl Certificate {
    pub fn new(
        pet_id: impl Into<String>,
        veterinarian_id: impl Into<String>,
        kind: CertificateKind,
        issued_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            pet_id: pet_id.into(),
            veterinarian_id: veterinarian_id.into(),
            kind,
            issued_date,
            valid_until: None,
            content: None,
            pdf_url: None,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
