//! VetCare Portal Library
//!
//! Record types and collaborator seams for the client portal. Storage and
//! authentication are external services behind traits; this crate supplies
//! the record schema, an in-memory store for tests, and a service layer
//! that wires the stores to the clinical calculators in `vetcare-core`.
//!
//! # Modules
//!
//! - [`models`]: Portal records (users, pets, clinical history)
//! - [`auth`]: Identity provider seam
//! - [`store`]: Document and blob storage seams
//! - [`memory`]: In-memory store implementations
//! - [`service`]: Portal operations over a store

pub mod auth;
pub mod memory;
pub mod models;
pub mod service;
pub mod store;

pub use auth::{AuthSession, AuthStateCallback, IdentityProvider};
pub use memory::{MemoryBlobStore, MemoryStore};
pub use models::{
    Certificate, CertificateKind, Deworming, DewormingKind, MedicalRecord, Pet, RecordType, User,
    UserRole, Vaccination,
};
pub use service::{IssuedCertificate, PortalService, VaccinationStatus};
pub use store::{BlobStore, DocumentStore, Filter};

/// Top-level portal error.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("error de almacenamiento: {0}")]
    Store(#[from] store::StoreError),

    #[error("no encontrado: {0}")]
    NotFound(String),

    #[error("registro inválido: {0}")]
    InvalidRecord(String),

    #[error("error de autenticación: {0}")]
    Auth(#[from] auth::AuthError),
}

impl From<serde_json::Error> for PortalError {
    fn from(e: serde_json::Error) -> Self {
        PortalError::Store(store::StoreError::Serialization(e))
    }
}
