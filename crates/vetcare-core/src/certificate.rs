//! SAG export health certificate for companion animals.
//!
//! Assembles the certificate data from the pet, owner and vaccination
//! records, then renders the printable HTML form. The per-species annex
//! lists the vaccines the SAG form requires; records are matched against
//! that list by name, and unapplied vaccines are shown as such.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::profile::VetProfile;

const UNSPECIFIED: &str = "No especificado";

const HEALTH_STATUS: &str = "Se encuentra clínicamente sano al examen físico, \
sin presentar tumoraciones, heridas frescas o en proceso de cicatrización, ni \
signo alguno de enfermedades infectocontagiosas, cuarentenables o \
transmisibles, ni presencia de parásitos externos y ha sido tratado contra \
estos últimos.";

const REGISTRATION_STATUS: &str = "Se encuentra inscrito o se ha solicitado \
su inscripción en el Registro Nacional de Mascotas.";

/// Species covered by the SAG export form, each with its own annex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnexSpecies {
    Dog,
    Cat,
    Ferret,
}

impl AnnexSpecies {
    /// Match a free-form species label against the covered species.
    pub fn from_label(label: &str) -> Option<AnnexSpecies> {
        let lower = label.to_lowercase();
        if lower.contains("perro") || lower.contains("canino") || lower.contains("dog") {
            Some(AnnexSpecies::Dog)
        } else if lower.contains("gato") || lower.contains("felino") || lower.contains("cat") {
            Some(AnnexSpecies::Cat)
        } else if lower.contains("hurón") || lower.contains("huron") || lower.contains("ferret") {
            Some(AnnexSpecies::Ferret)
        } else {
            None
        }
    }

    /// Vaccines the SAG annex requires for this species.
    pub fn required_vaccines(&self) -> &'static [&'static str] {
        match self {
            AnnexSpecies::Dog => &[
                "Distemper",
                "Adenovirus (Hepatitis)",
                "Leptospira (L. canícola e icterohaemorrahagie)",
                "Parvovirus",
                "Parainfluenza",
                "Coronavirus",
                "Antirrábica",
            ],
            AnnexSpecies::Cat => &[
                "Panleucopenia",
                "Rinotraqueitis",
                "Calicovirus",
                "Antirrábica",
            ],
            AnnexSpecies::Ferret => &["Antirrábica"],
        }
    }

    pub fn annex_title(&self) -> &'static str {
        match self {
            AnnexSpecies::Dog => {
                "ANEXO 2 - Información del programa de vacunación y desparasitación para CANINOS"
            }
            AnnexSpecies::Cat => {
                "ANEXO 1 - Información del programa de vacunación y desparasitación para FELINOS"
            }
            AnnexSpecies::Ferret => {
                "ANEXO 3 - Información del programa de vacunación y desparasitación para HURONES"
            }
        }
    }
}

/// Animal identification for section 1 of the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetIdentity {
    pub name: String,
    pub species_label: String,
    pub breed: Option<String>,
    pub sex: String,
    pub color: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub microchip_id: Option<String>,
}

/// Owner identification for section 2 of the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerIdentity {
    pub name: String,
    pub rut: String,
    pub phone: String,
    pub address: String,
}

/// A vaccination as recorded in the pet's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedVaccine {
    pub vaccine: String,
    pub administered: NaiveDate,
    pub laboratory: Option<String>,
    pub batch_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DewormingKind {
    Internal,
    External,
}

/// A deworming application for the annex table. Entries come from the
/// pet's actual records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DewormingEntry {
    pub product_name: String,
    pub laboratory: String,
    pub active_ingredient: String,
    pub lot: String,
    pub applied_date: NaiveDate,
    /// Time of application as written, e.g. "10:30".
    pub applied_time: String,
    pub kind: DewormingKind,
}

/// One row of the annex vaccination table, already formatted for print.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccineRow {
    pub name: String,
    /// "vacuna viva modificada", "vacuna inactivada", "vacuna mixta" or
    /// "No aplicada".
    pub kind: String,
    pub laboratory: String,
    pub serial_number: String,
    pub vaccination_date: String,
    pub validity: String,
}

/// The assembled certificate, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SagCertificate {
    pub pet: PetIdentity,
    pub owner: OwnerIdentity,
    pub annex_species: Option<AnnexSpecies>,
    pub health_status: String,
    pub registration_status: String,
    pub vet_name: String,
    pub vet_rut: String,
    pub vet_phone: String,
    pub vet_address: String,
    pub inspection_date: NaiveDate,
    pub vaccines: Vec<VaccineRow>,
    pub deworming: Vec<DewormingEntry>,
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Same day one year later; February 29 rolls to February 28.
fn one_year_after(date: NaiveDate) -> NaiveDate {
    date.with_year(date.year() + 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(date.year() + 1, 2, 28).unwrap_or(date))
}

/// Infer the SAG vaccine type from the recorded vaccine name.
pub fn vaccine_kind_label(vaccine_name: &str) -> &'static str {
    let lower = vaccine_name.to_lowercase();
    if lower.contains("inactivada") || lower.contains("muerta") {
        "vacuna inactivada"
    } else if lower.contains("mixta") {
        "vacuna mixta"
    } else {
        "vacuna viva modificada"
    }
}

fn annex_vaccine_rows(species: AnnexSpecies, records: &[AppliedVaccine]) -> Vec<VaccineRow> {
    species
        .required_vaccines()
        .iter()
        .map(|required| {
            let required_lower = required.to_lowercase();
            let applied = records.iter().find(|record| {
                let recorded = record.vaccine.to_lowercase();
                recorded.contains(&required_lower) || required_lower.contains(&recorded)
            });

            match applied {
                Some(record) => VaccineRow {
                    name: required.to_string(),
                    kind: vaccine_kind_label(&record.vaccine).to_string(),
                    laboratory: record
                        .laboratory
                        .clone()
                        .unwrap_or_else(|| UNSPECIFIED.to_string()),
                    serial_number: record
                        .batch_number
                        .clone()
                        .unwrap_or_else(|| UNSPECIFIED.to_string()),
                    vaccination_date: format_date(record.administered),
                    validity: format_date(one_year_after(record.administered)),
                },
                None => VaccineRow {
                    name: required.to_string(),
                    kind: "No aplicada".to_string(),
                    laboratory: String::new(),
                    serial_number: String::new(),
                    vaccination_date: String::new(),
                    validity: String::new(),
                },
            }
        })
        .collect()
}

/// Assemble the certificate from the pet's records and the signing vet.
pub fn build_certificate(
    pet: PetIdentity,
    owner: OwnerIdentity,
    vaccinations: &[AppliedVaccine],
    deworming: Vec<DewormingEntry>,
    vet: &VetProfile,
    inspection_date: NaiveDate,
) -> SagCertificate {
    let annex_species = AnnexSpecies::from_label(&pet.species_label);
    let vaccines = annex_species
        .map(|species| annex_vaccine_rows(species, vaccinations))
        .unwrap_or_default();

    SagCertificate {
        pet,
        owner,
        annex_species,
        health_status: HEALTH_STATUS.to_string(),
        registration_status: REGISTRATION_STATUS.to_string(),
        vet_name: vet.name.clone(),
        vet_rut: vet.rut.clone(),
        vet_phone: vet.phone.clone(),
        vet_address: vet.address.clone(),
        inspection_date,
        vaccines,
        deworming,
    }
}

fn field(label: &str, value: &str) -> String {
    format!(
        "            <div class=\"field\">\n\
         \x20               <span class=\"field-label\">{label}</span>\n\
         \x20               <span class=\"field-value\">{value}</span>\n\
         \x20           </div>\n"
    )
}

fn deworming_rows(entries: &[DewormingEntry], kind: DewormingKind) -> String {
    entries
        .iter()
        .filter(|entry| entry.kind == kind)
        .map(|entry| {
            format!(
                "                    <tr>\n\
                 \x20                       <td>{}</td>\n\
                 \x20                       <td>{}</td>\n\
                 \x20                       <td>{}</td>\n\
                 \x20                       <td>{}</td>\n\
                 \x20                       <td>{}</td>\n\
                 \x20                       <td>{}</td>\n\
                 \x20                   </tr>\n",
                entry.product_name,
                entry.laboratory,
                entry.active_ingredient,
                entry.lot,
                format_date(entry.applied_date),
                entry.applied_time,
            )
        })
        .collect()
}

fn annex_html(certificate: &SagCertificate) -> String {
    let title = certificate
        .annex_species
        .as_ref()
        .map(AnnexSpecies::annex_title)
        .unwrap_or("ANEXO - Información del programa de vacunación y desparasitación");

    let vaccine_rows: String = certificate
        .vaccines
        .iter()
        .map(|row| {
            format!(
                "                    <tr>\n\
                 \x20                       <td>{}</td>\n\
                 \x20                       <td>{}</td>\n\
                 \x20                       <td>{}</td>\n\
                 \x20                       <td>{}</td>\n\
                 \x20                       <td>{}</td>\n\
                 \x20                       <td>{}</td>\n\
                 \x20                   </tr>\n",
                row.name,
                row.kind,
                row.laboratory,
                row.serial_number,
                row.vaccination_date,
                row.validity,
            )
        })
        .collect();

    let rabies_note = if certificate.vaccines.iter().any(|v| v.name == "Antirrábica") {
        "            <div class=\"note\">* Debe estar respaldada por el certificado original \
         de vacunación antirrábica.</div>\n"
    } else {
        ""
    };

    format!(
        r#"    <div class="section" style="page-break-before: always;">
        <div class="section-title">{title}</div>

        <div style="margin-bottom: 20px;">
            <strong>Vacunación</strong>
            <table class="table">
                <thead>
                    <tr>
                        <th>Nombre vacuna</th>
                        <th>Tipo vacuna**</th>
                        <th>Laboratorio</th>
                        <th>N° serie vacuna</th>
                        <th>Fecha vacunación</th>
                        <th>Vigencia vacuna</th>
                    </tr>
                </thead>
                <tbody>
{vaccine_rows}                </tbody>
            </table>
{rabies_note}            <div class="note">** Tipo: vacuna viva modificada, vacuna inactivada o vacuna mixta.</div>
        </div>

        <div>
            <strong>Desparasitación</strong>
            <table class="table">
                <thead>
                    <tr>
                        <th>Nombre Producto</th>
                        <th>Laboratorio</th>
                        <th>Principio activo</th>
                        <th>Lote</th>
                        <th>Fecha desparasitación</th>
                        <th>Hora desparasitación</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td colspan="6" style="font-weight: bold; background-color: #f0f0f0;">Interna</td>
                    </tr>
{internal_rows}                    <tr>
                        <td colspan="6" style="font-weight: bold; background-color: #f0f0f0;">Externa</td>
                    </tr>
{external_rows}                </tbody>
            </table>
            <div class="note">Si el destino final del animal de compañía es Finlandia, Reino Unido, Irlanda o Malta se deberá aplicar un tratamiento antiparasitario efectivo contra el Echinococcus multilocularis.</div>
        </div>
    </div>
"#,
        internal_rows = deworming_rows(&certificate.deworming, DewormingKind::Internal),
        external_rows = deworming_rows(&certificate.deworming, DewormingKind::External),
    )
}

/// Render the full printable certificate document.
pub fn render_html(certificate: &SagCertificate) -> String {
    let pet = &certificate.pet;
    let owner = &certificate.owner;

    let breed = pet.breed.as_deref().unwrap_or("Mestizo");
    let color = pet.color.as_deref().unwrap_or(UNSPECIFIED);
    let birth_date = pet
        .birth_date
        .map(format_date)
        .unwrap_or_else(|| UNSPECIFIED.to_string());
    let inspection = format_date(certificate.inspection_date);

    let microchip_fields = match pet.microchip_id.as_deref() {
        Some(_) => {
            let mut chunk = field(
                "Fecha de implantación o lectura del microchip:",
                &inspection,
            );
            chunk.push_str(&field(
                "Sitio de implantación/lectura del microchip en el animal:",
                "Cuello (lado izquierdo)",
            ));
            chunk
        }
        None => String::new(),
    };

    let mut body = String::new();
    body.push_str(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Certificado de Salud para Exportación - SAG</title>
    <style>
        body { font-family: 'Times New Roman', serif; margin: 20px; line-height: 1.4; color: #000; }
        .header { text-align: center; font-weight: bold; font-size: 16px; margin-bottom: 30px; text-transform: uppercase; }
        .section { margin-bottom: 25px; border: 1px solid #000; padding: 15px; }
        .section-title { font-weight: bold; font-size: 14px; margin-bottom: 15px; }
        .field { margin-bottom: 8px; display: flex; align-items: baseline; }
        .field-label { font-weight: bold; margin-right: 10px; min-width: 120px; }
        .field-value { border-bottom: 1px solid #000; flex-grow: 1; padding-bottom: 2px; min-height: 20px; }
        .table { width: 100%; border-collapse: collapse; margin-top: 15px; }
        .table th, .table td { border: 1px solid #000; padding: 8px; text-align: left; font-size: 12px; }
        .table th { background-color: #f0f0f0; font-weight: bold; }
        .note { font-size: 10px; margin-top: 10px; font-style: italic; }
        .vet-signature { margin-top: 40px; text-align: center; border-top: 1px solid #000; padding-top: 10px; }
    </style>
</head>
<body>
    <div class="header">
        CERTIFICADO DE SALUD PARA LA EXPORTACIÓN DE ANIMALES DE COMPAÑÍA<br>
        (PERROS, GATOS O HURONES)
    </div>

"#,
    );

    body.push_str("    <div class=\"section\">\n");
    body.push_str(
        "        <div class=\"section-title\">1) Identificación del animal de compañía:</div>\n",
    );
    body.push_str(&field("Nombre:", &pet.name));
    body.push_str(&field("Especie:", &pet.species_label));
    body.push_str(&field("Raza:", breed));
    body.push_str(&field("Sexo:", &pet.sex));
    body.push_str(&field("Color:", color));
    body.push_str(&field("Fecha de nacimiento o edad:", &birth_date));
    body.push_str(&field(
        "N° de microchip*:",
        pet.microchip_id.as_deref().unwrap_or(""),
    ));
    body.push_str(&microchip_fields);
    body.push_str(
        "        <div class=\"note\">*Solo es obligatorio si el país de destino lo requiere.</div>\n",
    );
    body.push_str("    </div>\n\n");

    body.push_str("    <div class=\"section\">\n");
    body.push_str(
        "        <div class=\"section-title\">2) Identificación del Dueño (Responsable en el \
         registro Nacional de Mascotas):</div>\n",
    );
    body.push_str(&field("Nombre:", &owner.name));
    body.push_str(&field("RUN/RUT:", &owner.rut));
    body.push_str(&field("Teléfono:", &owner.phone));
    body.push_str(&field("Dirección:", &owner.address));
    body.push_str("    </div>\n\n");

    body.push_str("    <div class=\"section\">\n");
    body.push_str(
        "        <div class=\"section-title\">3) El médico veterinario que suscribe certifica \
         que el animal de compañía:</div>\n",
    );
    body.push_str(&format!("        <p>{}</p>\n", certificate.health_status));
    body.push_str(&format!(
        "        <p>{}</p>\n",
        certificate.registration_status
    ));
    body.push_str("    </div>\n\n");

    body.push_str("    <div class=\"section\">\n");
    body.push_str(
        "        <div class=\"section-title\">4) Datos del médico veterinario firmante:</div>\n",
    );
    body.push_str(&field("Nombre:", &certificate.vet_name));
    body.push_str(&field("RUN/RUT:", &certificate.vet_rut));
    body.push_str(&field("Teléfono:", &certificate.vet_phone));
    body.push_str(&field("Dirección:", &certificate.vet_address));
    body.push_str(&field(
        "Fecha de la inspección física del animal de compañía*:",
        &inspection,
    ));
    body.push_str(
        "        <div class=\"note\">*No debe ser mayor a 10 días previos a la fecha del \
         embarque</div>\n",
    );
    body.push_str(
        "        <div class=\"note\">(Adjuntar la información sanitaria de acuerdo al anexo \
         correspondiente según especie.)</div>\n",
    );
    body.push_str("    </div>\n\n");

    body.push_str(&annex_html(certificate));

    body.push_str(&format!(
        r#"
    <div class="vet-signature">
        <div style="margin-bottom: 60px;">_____________________________</div>
        <div><strong>Firma y Timbre del Médico Veterinario</strong></div>
        <div>{}</div>
        <div>RUT: {}</div>
    </div>
</body>
</html>
"#,
        certificate.vet_name, certificate.vet_rut,
    ));

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pet() -> PetIdentity {
        PetIdentity {
            name: "Firulais".to_string(),
            species_label: "Perro".to_string(),
            breed: Some("Labrador Retriever".to_string()),
            sex: "Macho".to_string(),
            color: Some("Dorado".to_string()),
            birth_date: NaiveDate::from_ymd_opt(2020, 3, 15),
            microchip_id: Some("956000012345678".to_string()),
        }
    }

    fn sample_owner() -> OwnerIdentity {
        OwnerIdentity {
            name: "María González".to_string(),
            rut: "12.345.678-5".to_string(),
            phone: "+56 9 8765 4321".to_string(),
            address: "Av. Providencia 1234, Santiago".to_string(),
        }
    }

    #[test]
    fn test_annex_species_from_label() {
        assert_eq!(AnnexSpecies::from_label("Perro"), Some(AnnexSpecies::Dog));
        assert_eq!(AnnexSpecies::from_label("gato"), Some(AnnexSpecies::Cat));
        assert_eq!(
            AnnexSpecies::from_label("Hurón"),
            Some(AnnexSpecies::Ferret)
        );
        assert_eq!(AnnexSpecies::from_label("Conejo"), None);
    }

    #[test]
    fn test_required_vaccine_counts() {
        assert_eq!(AnnexSpecies::Dog.required_vaccines().len(), 7);
        assert_eq!(AnnexSpecies::Cat.required_vaccines().len(), 4);
        assert_eq!(AnnexSpecies::Ferret.required_vaccines(), &["Antirrábica"]);
    }

    #[test]
    fn test_vaccine_kind_inference() {
        assert_eq!(vaccine_kind_label("Rabia inactivada"), "vacuna inactivada");
        assert_eq!(vaccine_kind_label("Quíntuple mixta"), "vacuna mixta");
        assert_eq!(vaccine_kind_label("Parvovirus"), "vacuna viva modificada");
    }

    #[test]
    fn test_applied_vaccine_matched_by_substring() {
        let records = vec![AppliedVaccine {
            vaccine: "Antirrábica Nobivac".to_string(),
            administered: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            laboratory: Some("MSD".to_string()),
            batch_number: Some("A123".to_string()),
        }];

        let rows = annex_vaccine_rows(AnnexSpecies::Ferret, &records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].laboratory, "MSD");
        assert_eq!(rows[0].vaccination_date, "10-05-2024");
        assert_eq!(rows[0].validity, "10-05-2025");
    }

    #[test]
    fn test_unapplied_vaccine_row_is_empty() {
        let rows = annex_vaccine_rows(AnnexSpecies::Cat, &[]);
        assert!(rows.iter().all(|row| row.kind == "No aplicada"));
        assert!(rows.iter().all(|row| row.vaccination_date.is_empty()));
    }

    #[test]
    fn test_one_year_after_handles_leap_day() {
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            one_year_after(leap),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_build_certificate_fills_vet_block() {
        let vet = VetProfile::default();
        let inspection = NaiveDate::from_ymd_opt(2024, 11, 14).unwrap();
        let certificate = build_certificate(
            sample_pet(),
            sample_owner(),
            &[],
            vec![],
            &vet,
            inspection,
        );

        assert_eq!(certificate.vet_name, vet.name);
        assert_eq!(certificate.vet_rut, vet.rut);
        assert_eq!(certificate.annex_species, Some(AnnexSpecies::Dog));
        assert_eq!(certificate.vaccines.len(), 7);
        assert_eq!(certificate.health_status, HEALTH_STATUS);
    }

    #[test]
    fn test_render_html_contains_sections() {
        let vet = VetProfile::default();
        let certificate = build_certificate(
            sample_pet(),
            sample_owner(),
            &[AppliedVaccine {
                vaccine: "Antirrábica".to_string(),
                administered: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                laboratory: None,
                batch_number: None,
            }],
            vec![DewormingEntry {
                product_name: "Drontal Plus".to_string(),
                laboratory: "Bayer".to_string(),
                active_ingredient: "Praziquantel + Pirantel + Febantel".to_string(),
                lot: "DP4471".to_string(),
                applied_date: NaiveDate::from_ymd_opt(2024, 11, 10).unwrap(),
                applied_time: "10:30".to_string(),
                kind: DewormingKind::Internal,
            }],
            &vet,
            NaiveDate::from_ymd_opt(2024, 11, 14).unwrap(),
        );

        let html = render_html(&certificate);
        assert!(html.contains("CERTIFICADO DE SALUD PARA LA EXPORTACIÓN"));
        assert!(html.contains("Firulais"));
        assert!(html.contains("ANEXO 2"));
        assert!(html.contains("Drontal Plus"));
        assert!(html.contains("certificado original"));
        assert!(html.contains(&vet.rut));
    }

    #[test]
    fn test_unknown_species_has_no_annex_rows() {
        let vet = VetProfile::default();
        let mut pet = sample_pet();
        pet.species_label = "Conejo".to_string();
        let certificate = build_certificate(
            pet,
            sample_owner(),
            &[],
            vec![],
            &vet,
            NaiveDate::from_ymd_opt(2024, 11, 14).unwrap(),
        );
        assert!(certificate.annex_species.is_none());
        assert!(certificate.vaccines.is_empty());
    }
}
