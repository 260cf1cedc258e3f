//! Vaccine products registered on the Chilean market.

use serde::Serialize;

use crate::models::Species;

/// A commercial vaccine product.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VaccineProduct {
    pub id: &'static str,
    pub name: &'static str,
    pub laboratory: &'static str,
    /// Product family, e.g. "Polivalente", "Triple felina".
    pub kind: &'static str,
    pub pathogens: &'static [&'static str],
    pub species: &'static [Species],
}

impl VaccineProduct {
    pub fn covers_species(&self, species: Species) -> bool {
        self.species.contains(&species)
    }

    pub fn covers_pathogen(&self, pathogen: &str) -> bool {
        let lower = pathogen.to_lowercase();
        self.pathogens.iter().any(|p| p.to_lowercase().contains(&lower))
    }
}

pub const CHILEAN_VACCINES: &[VaccineProduct] = &[
    // Zoetis
    VaccineProduct {
        id: "zoetis-vanguard-plus5",
        name: "Vanguard Plus 5",
        laboratory: "Zoetis",
        kind: "Polivalente",
        pathogens: &["Distemper", "Adenovirus tipo 1", "Adenovirus tipo 2", "Parainfluenza", "Parvovirus"],
        species: &[Species::Canine],
    },
    VaccineProduct {
        id: "zoetis-vanguard-plus5-l4",
        name: "Vanguard Plus 5 L4",
        laboratory: "Zoetis",
        kind: "Polivalente + Leptospira",
        pathogens: &[
            "Distemper", "Adenovirus tipo 1", "Adenovirus tipo 2", "Parainfluenza", "Parvovirus",
            "Leptospira canicola", "Leptospira grippotyphosa", "Leptospira icterohaemorrhagiae",
            "Leptospira pomona",
        ],
        species: &[Species::Canine],
    },
    VaccineProduct {
        id: "zoetis-vanguard-htlp5",
        name: "Vanguard HTLP 5",
        laboratory: "Zoetis",
        kind: "Polivalente + Leptospira",
        pathogens: &["Distemper", "Adenovirus", "Leptospira", "Parainfluenza", "Parvovirus"],
        species: &[Species::Canine],
    },
    VaccineProduct {
        id: "zoetis-fel-o-vax-iv",
        name: "Fel-O-Vax IV",
        laboratory: "Zoetis",
        kind: "Polivalente felina",
        pathogens: &[
            "Rinotraqueitis viral felina", "Calicivirus felino", "Panleucopenia felina",
            "Leucemia felina",
        ],
        species: &[Species::Feline],
    },
    VaccineProduct {
        id: "zoetis-fel-o-vax-pch",
        name: "Fel-O-Vax PCH",
        laboratory: "Zoetis",
        kind: "Triple felina",
        pathogens: &["Rinotraqueitis viral felina", "Calicivirus felino", "Panleucopenia felina"],
        species: &[Species::Feline],
    },
    // MSD/Nobivac
    VaccineProduct {
        id: "nobivac-dhppi",
        name: "Nobivac DHPPi",
        laboratory: "MSD/Nobivac",
        kind: "Polivalente",
        pathogens: &["Distemper", "Hepatitis", "Parvovirus", "Parainfluenza"],
        species: &[Species::Canine],
    },
    VaccineProduct {
        id: "nobivac-dh2pp",
        name: "Nobivac DH2PP",
        laboratory: "MSD/Nobivac",
        kind: "Polivalente",
        pathogens: &["Distemper", "Adenovirus tipo 2", "Parvovirus", "Parainfluenza"],
        species: &[Species::Canine],
    },
    VaccineProduct {
        id: "nobivac-lepto-4",
        name: "Nobivac Lepto 4",
        laboratory: "MSD/Nobivac",
        kind: "Leptospirosis",
        pathogens: &[
            "Leptospira canicola", "Leptospira grippotyphosa", "Leptospira icterohaemorrhagiae",
            "Leptospira pomona",
        ],
        species: &[Species::Canine],
    },
    VaccineProduct {
        id: "nobivac-rabies",
        name: "Nobivac Rabia",
        laboratory: "MSD/Nobivac",
        kind: "Antirrábica",
        pathogens: &["Virus de la rabia"],
        species: &[Species::Canine, Species::Feline],
    },
    VaccineProduct {
        id: "nobivac-tricat-trio",
        name: "Nobivac Tricat Trio",
        laboratory: "MSD/Nobivac",
        kind: "Triple felina",
        pathogens: &["Rinotraqueitis viral felina", "Calicivirus felino", "Panleucopenia felina"],
        species: &[Species::Feline],
    },
    // Merial / Virbac and other registered products
    VaccineProduct {
        id: "merial-eurican-dhppi2-l",
        name: "Eurican DHPPi2-L",
        laboratory: "Merial",
        kind: "Polivalente + Leptospira",
        pathogens: &[
            "Distemper", "Hepatitis", "Parvovirus", "Parainfluenza", "Adenovirus tipo 2",
            "Leptospira",
        ],
        species: &[Species::Canine],
    },
    VaccineProduct {
        id: "virbac-canigen-dha2ppil",
        name: "Canigen DHA2PPiL",
        laboratory: "Virbac",
        kind: "Polivalente + Leptospira",
        pathogens: &[
            "Distemper", "Hepatitis", "Adenovirus tipo 2", "Parvovirus", "Parainfluenza",
            "Leptospira",
        ],
        species: &[Species::Canine],
    },
    VaccineProduct {
        id: "nobivac-felv",
        name: "Nobivac FeLV",
        laboratory: "MSD/Nobivac",
        kind: "Leucemia felina",
        pathogens: &["Leucemia felina"],
        species: &[Species::Feline],
    },
    VaccineProduct {
        id: "nobivac-puppy-dp",
        name: "Nobivac Puppy DP",
        laboratory: "MSD/Nobivac",
        kind: "Cachorro",
        pathogens: &["Distemper", "Parvovirus"],
        species: &[Species::Canine],
    },
    VaccineProduct {
        id: "nobivac-kc",
        name: "Nobivac KC",
        laboratory: "MSD/Nobivac",
        kind: "Tos de las perreras",
        pathogens: &["Bordetella bronchiseptica", "Parainfluenza"],
        species: &[Species::Canine],
    },
];

/// Lookup by product id.
pub fn vaccine_by_id(id: &str) -> Option<&'static VaccineProduct> {
    CHILEAN_VACCINES.iter().find(|v| v.id == id)
}

/// Products registered for a species.
pub fn vaccines_for_species(species: Species) -> Vec<&'static VaccineProduct> {
    CHILEAN_VACCINES
        .iter()
        .filter(|v| v.covers_species(species))
        .collect()
}

/// Distinct laboratories, sorted.
pub fn laboratories() -> Vec<&'static str> {
    let mut labs: Vec<&'static str> = CHILEAN_VACCINES.iter().map(|v| v.laboratory).collect();
    labs.sort_unstable();
    labs.dedup();
    labs
}

/// Distinct product kinds, sorted.
pub fn vaccine_kinds() -> Vec<&'static str> {
    let mut kinds: Vec<&'static str> = CHILEAN_VACCINES.iter().map(|v| v.kind).collect();
    kinds.sort_unstable();
    kinds.dedup();
    kinds
}
