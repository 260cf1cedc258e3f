//! Portal service layer.
//!
//! Composes the document store with the core calculators: vaccination
//! records get their due date stamped on creation, the status board rates
//! every stored vaccination against an explicit `today`, and certificates
//! are assembled from the stored history.

use chrono::{Duration, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use vetcare_core::certificate::{
    build_certificate, render_html, AppliedVaccine, DewormingEntry, OwnerIdentity, PetIdentity,
};
use vetcare_core::contact::{vaccination_reminder_message, whatsapp_url};
use vetcare_core::models::{VaccinationRecord, VaccinationScheduleResult};
use vetcare_core::schedule::compute_next_due;
use vetcare_core::VetProfile;

use crate::models::{Certificate, CertificateKind, Deworming, Pet, Vaccination};
use crate::store::{DocumentStore, Filter};
use crate::PortalError;

const PETS: &str = "pets";
const VACCINATIONS: &str = "vaccinations";
const DEWORMINGS: &str = "dewormings";
const CERTIFICATES: &str = "certificates";

/// A stored vaccination with its schedule evaluation.
#[derive(Debug, Clone)]
pub struct VaccinationStatus {
    pub vaccination: Vaccination,
    pub schedule: VaccinationScheduleResult,
}

/// An issued certificate together with its rendered document.
#[derive(Debug, Clone)]
pub struct IssuedCertificate {
    pub certificate: Certificate,
    pub html: String,
}

/// Portal operations over a document store and the practitioner profile.
pub struct PortalService<S: DocumentStore> {
    store: S,
    vet: VetProfile,
}

fn to_value<T: Serialize>(record: &T) -> Result<Value, PortalError> {
    Ok(serde_json::to_value(record)?)
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, PortalError> {
    Ok(serde_json::from_value(value)?)
}

impl<S: DocumentStore> PortalService<S> {
    pub fn new(store: S, vet: VetProfile) -> Self {
        Self { store, vet }
    }

    pub fn vet(&self) -> &VetProfile {
        &self.vet
    }

    // =========================================================================
    // Pets
    // =========================================================================

    pub async fn register_pet(&self, pet: Pet) -> Result<Pet, PortalError> {
        self.store.create(PETS, &pet.id, to_value(&pet)?).await?;
        Ok(pet)
    }

    pub async fn get_pet(&self, pet_id: &str) -> Result<Pet, PortalError> {
        let value = self
            .store
            .get(PETS, pet_id)
            .await?
            .ok_or_else(|| PortalError::NotFound(format!("mascota {pet_id}")))?;
        from_value(value)
    }

    pub async fn pets_for_owner(&self, owner_id: &str) -> Result<Vec<Pet>, PortalError> {
        let filter = Filter::new().field("ownerId", owner_id);
        let values = self.store.query(PETS, &filter).await?;
        values.into_iter().map(from_value).collect()
    }

    // =========================================================================
    // Vaccinations
    // =========================================================================

    /// Store a vaccination, stamping its due date from the vaccine's
    /// validity period.
    pub async fn record_vaccination(
        &self,
        mut vaccination: Vaccination,
    ) -> Result<Vaccination, PortalError> {
        let record =
            VaccinationRecord::new(vaccination.vaccine_name.clone(), vaccination.application_date);
        let schedule = compute_next_due(&record, vaccination.application_date);
        vaccination.next_due_date = Some(schedule.next_due_date);

        self.store
            .create(VACCINATIONS, &vaccination.id, to_value(&vaccination)?)
            .await?;
        Ok(vaccination)
    }

    pub async fn vaccinations_for_pet(
        &self,
        pet_id: &str,
    ) -> Result<Vec<Vaccination>, PortalError> {
        let filter = Filter::new().field("petId", pet_id);
        let values = self.store.query(VACCINATIONS, &filter).await?;
        values.into_iter().map(from_value).collect()
    }

    /// Every stored vaccination for the pet with its alert level at `today`.
    pub async fn vaccination_board(
        &self,
        pet_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<VaccinationStatus>, PortalError> {
        let vaccinations = self.vaccinations_for_pet(pet_id).await?;

        let mut board: Vec<VaccinationStatus> = vaccinations
            .into_iter()
            .map(|vaccination| {
                let record = VaccinationRecord::new(
                    vaccination.vaccine_name.clone(),
                    vaccination.application_date,
                );
                let schedule = compute_next_due(&record, today);
                VaccinationStatus {
                    vaccination,
                    schedule,
                }
            })
            .collect();

        // Most urgent first
        board.sort_by_key(|status| status.schedule.days_until_due);
        Ok(board)
    }

    /// WhatsApp reminder link for the most urgent due vaccination, if any
    /// is overdue or upcoming at `today`.
    pub async fn vaccination_reminder_link(
        &self,
        pet_id: &str,
        owner_name: &str,
        owner_phone: &str,
        today: NaiveDate,
    ) -> Result<Option<String>, PortalError> {
        let board = self.vaccination_board(pet_id, today).await?;
        let due = match board
            .into_iter()
            .find(|status| status.schedule.days_until_due <= 30)
        {
            Some(status) => status,
            None => return Ok(None),
        };

        let pet = self.get_pet(pet_id).await?;
        let message = vaccination_reminder_message(
            owner_name,
            &pet.name,
            &due.vaccination.vaccine_name,
            &due.schedule.next_due_date.format("%d-%m-%Y").to_string(),
            &self.vet,
        );
        Ok(Some(whatsapp_url(owner_phone, &message)))
    }

    // =========================================================================
    // Dewormings
    // =========================================================================

    /// Store a deworming, stamping its due date from the given interval.
    pub async fn record_deworming(
        &self,
        mut deworming: Deworming,
        interval_days: u32,
    ) -> Result<Deworming, PortalError> {
        deworming.next_due_date =
            Some(deworming.application_date + Duration::days(i64::from(interval_days)));
        self.store
            .create(DEWORMINGS, &deworming.id, to_value(&deworming)?)
            .await?;
        Ok(deworming)
    }

    pub async fn dewormings_for_pet(&self, pet_id: &str) -> Result<Vec<Deworming>, PortalError> {
        let filter = Filter::new().field("petId", pet_id);
        let values = self.store.query(DEWORMINGS, &filter).await?;
        values.into_iter().map(from_value).collect()
    }

    // =========================================================================
    // Certificates
    // =========================================================================

    /// Assemble the SAG export certificate for a pet from its stored
    /// history, render it and store the issuance record.
    pub async fn issue_export_certificate(
        &self,
        pet_id: &str,
        veterinarian_id: &str,
        owner: OwnerIdentity,
        today: NaiveDate,
    ) -> Result<IssuedCertificate, PortalError> {
        let pet = self.get_pet(pet_id).await?;

        let applied: Vec<AppliedVaccine> = self
            .vaccinations_for_pet(pet_id)
            .await?
            .into_iter()
            .map(|vaccination| AppliedVaccine {
                vaccine: vaccination.vaccine_name,
                administered: vaccination.application_date,
                laboratory: Some(vaccination.laboratory),
                batch_number: vaccination.batch,
            })
            .collect();

        let deworming: Vec<DewormingEntry> = self
            .dewormings_for_pet(pet_id)
            .await?
            .into_iter()
            .map(|entry| DewormingEntry {
                product_name: entry.product,
                laboratory: entry.laboratory.unwrap_or_default(),
                active_ingredient: entry.active_ingredient.unwrap_or_default(),
                lot: entry.lot.unwrap_or_default(),
                applied_date: entry.application_date,
                applied_time: String::new(),
                kind: entry.kind,
            })
            .collect();

        let identity = PetIdentity {
            name: pet.name.clone(),
            species_label: pet.species.clone(),
            breed: pet.breed.clone(),
            sex: String::new(),
            color: None,
            birth_date: pet.birth_date,
            microchip_id: pet.microchip.clone(),
        };

        let data = build_certificate(identity, owner, &applied, deworming, &self.vet, today);
        let html = render_html(&data);

        let mut certificate =
            Certificate::new(pet_id, veterinarian_id, CertificateKind::Export, today);
        certificate.content = Some(serde_json::to_value(&data)?);
        self.store
            .create(CERTIFICATES, &certificate.id, to_value(&certificate)?)
            .await?;

        Ok(IssuedCertificate { certificate, html })
    }
}
