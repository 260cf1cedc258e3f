//! Professional profile of the attending veterinarian.
//!
//! The profile is injected wherever contact details or a signature block are
//! needed (reminder messages, certificates) rather than read from a global.

use serde::{Deserialize, Serialize};

/// Identity and contact details used in generated messages and documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VetProfile {
    /// Full professional name, e.g. "Dra. Alejandra Cautín Bastías".
    pub name: String,
    /// RUT printed on official documents.
    pub rut: String,
    /// Professional title, e.g. "Médica Veterinaria".
    pub title: String,
    pub speciality: String,
    /// Registration with the professional college.
    pub license: String,
    pub phone: String,
    pub email: String,
    /// Number used for WhatsApp links, any written form.
    pub whatsapp_phone: String,
    pub clinic_name: String,
    pub address: String,
    pub service_area: String,
    /// Name printed on certificate signature blocks.
    pub signature: String,
    pub professional_id: String,
    pub working_hours: String,
    pub emergency_phone: String,
    pub website: String,
}

impl Default for VetProfile {
    fn default() -> Self {
        VetProfile {
            name: "Dra. Alejandra Cautín Bastías".to_string(),
            rut: "19.463.420-K".to_string(),
            title: "Médica Veterinaria".to_string(),
            speciality: "Medicina Preventiva e Integrativa".to_string(),
            license: "MV - Colegio Médicos Veterinarios".to_string(),
            phone: "+56 9 7604 0797".to_string(),
            email: "avmveterinaria@gmail.com".to_string(),
            whatsapp_phone: "+56 9 7604 0797".to_string(),
            clinic_name: "Atención Veterinaria a Domicilio".to_string(),
            address: "Santiago, Chile".to_string(),
            service_area: "Región Metropolitana".to_string(),
            signature: "Dra. Alejandra Cautín Bastías".to_string(),
            professional_id: "Médica Veterinaria Colegiada".to_string(),
            working_hours: "Lunes a Viernes 9:00-18:00".to_string(),
            emergency_phone: "+56 9 7604 0797".to_string(),
            website: "AleVeterinaria.cl".to_string(),
        }
    }
}
