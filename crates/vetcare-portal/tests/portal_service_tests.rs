//! Service-layer tests over the in-memory stores.

use chrono::NaiveDate;

use vetcare_core::certificate::OwnerIdentity;
use vetcare_core::models::AlertLevel;
use vetcare_core::VetProfile;
use vetcare_portal::{
    BlobStore, Deworming, DewormingKind, MemoryBlobStore, MemoryStore, Pet, PortalService,
    Vaccination,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn service() -> PortalService<MemoryStore> {
    PortalService::new(MemoryStore::new(), VetProfile::default())
}

fn sample_owner() -> OwnerIdentity {
    OwnerIdentity {
        name: "María González".to_string(),
        rut: "12.345.678-5".to_string(),
        phone: "+56 9 8765 4321".to_string(),
        address: "Av. Providencia 1234, Santiago".to_string(),
    }
}

#[tokio::test]
async fn register_and_list_pets_by_owner() {
    let portal = service();

    let firulais = portal
        .register_pet(Pet::new("owner-1", "Firulais", "Perro"))
        .await
        .unwrap();
    portal
        .register_pet(Pet::new("owner-2", "Misu", "Gato"))
        .await
        .unwrap();

    let pets = portal.pets_for_owner("owner-1").await.unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].id, firulais.id);

    let fetched = portal.get_pet(&firulais.id).await.unwrap();
    assert_eq!(fetched.name, "Firulais");
}

#[tokio::test]
async fn get_unknown_pet_is_not_found() {
    let portal = service();
    let err = portal.get_pet("missing").await.unwrap_err();
    assert!(err.to_string().contains("no encontrado"));
}

#[tokio::test]
async fn recording_vaccination_stamps_due_date() {
    let portal = service();
    let pet = portal
        .register_pet(Pet::new("owner-1", "Firulais", "Perro"))
        .await
        .unwrap();

    let vaccination = portal
        .record_vaccination(Vaccination::new(
            &pet.id,
            "vet-1",
            "Antirrábica",
            "MSD",
            date(2023, 11, 20),
        ))
        .await
        .unwrap();

    // Annual validity: 365 days after 2023-11-20 crosses a leap day
    assert_eq!(vaccination.next_due_date, Some(date(2024, 11, 19)));
}

#[tokio::test]
async fn vaccination_board_sorts_most_urgent_first() {
    let portal = service();
    let pet = portal
        .register_pet(Pet::new("owner-1", "Firulais", "Perro"))
        .await
        .unwrap();

    portal
        .record_vaccination(Vaccination::new(
            &pet.id,
            "vet-1",
            "Antirrábica",
            "MSD",
            date(2023, 11, 20),
        ))
        .await
        .unwrap();
    portal
        .record_vaccination(Vaccination::new(
            &pet.id,
            "vet-1",
            "Quíntuple",
            "Zoetis",
            date(2024, 6, 1),
        ))
        .await
        .unwrap();

    let board = portal
        .vaccination_board(&pet.id, date(2024, 11, 25))
        .await
        .unwrap();

    assert_eq!(board.len(), 2);
    assert_eq!(board[0].vaccination.vaccine_name, "Antirrábica");
    assert_eq!(board[0].schedule.alert_level, AlertLevel::Overdue);
    assert_eq!(board[1].schedule.alert_level, AlertLevel::Current);
}

#[tokio::test]
async fn reminder_link_targets_due_vaccination() {
    let portal = service();
    let pet = portal
        .register_pet(Pet::new("owner-1", "Firulais", "Perro"))
        .await
        .unwrap();

    portal
        .record_vaccination(Vaccination::new(
            &pet.id,
            "vet-1",
            "Antirrábica",
            "MSD",
            date(2023, 11, 20),
        ))
        .await
        .unwrap();

    let link = portal
        .vaccination_reminder_link(&pet.id, "María", "+56 9 8765 4321", date(2024, 11, 25))
        .await
        .unwrap()
        .expect("a due vaccination should produce a link");

    assert!(link.starts_with("https://wa.me/56987654321?text="));
    assert!(link.contains("Firulais"));
}

#[tokio::test]
async fn reminder_link_absent_when_nothing_is_due() {
    let portal = service();
    let pet = portal
        .register_pet(Pet::new("owner-1", "Misu", "Gato"))
        .await
        .unwrap();

    portal
        .record_vaccination(Vaccination::new(
            &pet.id,
            "vet-1",
            "Triple felina",
            "Boehringer",
            date(2024, 11, 1),
        ))
        .await
        .unwrap();

    let link = portal
        .vaccination_reminder_link(&pet.id, "Pedro", "+56 9 1111 2222", date(2024, 11, 15))
        .await
        .unwrap();
    assert!(link.is_none());
}

#[tokio::test]
async fn recording_deworming_stamps_interval() {
    let portal = service();
    let deworming = portal
        .record_deworming(
            Deworming::new(
                "pet-1",
                "vet-1",
                "Drontal Plus",
                DewormingKind::Internal,
                date(2024, 11, 10),
            ),
            90,
        )
        .await
        .unwrap();

    assert_eq!(deworming.next_due_date, Some(date(2025, 2, 8)));
}

#[tokio::test]
async fn export_certificate_uses_stored_history() {
    let portal = service();
    let mut pet = Pet::new("owner-1", "Firulais", "Perro");
    pet.breed = Some("Labrador Retriever".to_string());
    let pet = portal.register_pet(pet).await.unwrap();

    portal
        .record_vaccination(Vaccination::new(
            &pet.id,
            "vet-1",
            "Antirrábica",
            "MSD",
            date(2024, 6, 1),
        ))
        .await
        .unwrap();

    let issued = portal
        .issue_export_certificate(&pet.id, "vet-1", sample_owner(), date(2024, 11, 14))
        .await
        .unwrap();

    assert!(issued.html.contains("Firulais"));
    assert!(issued.html.contains("ANEXO 2"));
    assert!(issued.html.contains("MSD"));
    assert!(issued.certificate.content.is_some());
}

#[tokio::test]
async fn export_certificate_splits_deworming_by_kind() {
    let portal = service();
    let pet = portal
        .register_pet(Pet::new("owner-1", "Firulais", "Perro"))
        .await
        .unwrap();

    let mut internal = Deworming::new(
        &pet.id,
        "vet-1",
        "Drontal Plus",
        DewormingKind::Internal,
        date(2024, 10, 1),
    );
    internal.laboratory = Some("Bayer".to_string());
    internal.active_ingredient = Some("Praziquantel + Pirantel".to_string());
    internal.lot = Some("DP4471".to_string());
    portal.record_deworming(internal, 90).await.unwrap();

    let mut external = Deworming::new(
        &pet.id,
        "vet-1",
        "Frontline Plus",
        DewormingKind::External,
        date(2024, 10, 15),
    );
    external.laboratory = Some("Boehringer".to_string());
    external.active_ingredient = Some("Fipronil".to_string());
    external.lot = Some("FL2209".to_string());
    portal.record_deworming(external, 30).await.unwrap();

    let issued = portal
        .issue_export_certificate(&pet.id, "vet-1", sample_owner(), date(2024, 11, 14))
        .await
        .unwrap();

    assert!(issued.html.contains("Drontal Plus"));
    assert!(issued.html.contains("DP4471"));
    assert!(issued.html.contains("Frontline Plus"));
    assert!(issued.html.contains("Fipronil"));
    assert!(issued.html.contains("FL2209"));
}

#[tokio::test]
async fn blob_store_round_trip() {
    let blobs = MemoryBlobStore::new();
    let key = blobs
        .upload("certificates/c1.html", b"<html></html>".to_vec(), "text/html")
        .await
        .unwrap();
    assert_eq!(key, "certificates/c1.html");

    let url = blobs.download_url(&key).await.unwrap();
    assert_eq!(url, "memory://certificates/c1.html");

    blobs.delete(&key).await.unwrap();
    assert!(blobs.download_url(&key).await.is_err());
}
