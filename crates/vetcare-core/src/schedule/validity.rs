//! Vaccine validity catalog and alias resolution.
//!
//! An ordered table so that substring resolution is deterministic: the first
//! matching entry wins.

/// Validity entry for one vaccine family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaccineValidity {
    /// Lookup key matched inside user-entered names.
    pub key: &'static str,
    /// Canonical display name.
    pub display_name: &'static str,
    pub standard_duration_days: u32,
    /// Re-dose cadence label.
    pub description: &'static str,
}

/// Default validity when no entry matches: one year.
pub const DEFAULT_VALIDITY_DAYS: u32 = 365;

/// Canine and feline vaccine families plus common combination products,
/// in resolution order.
pub const VACCINE_VALIDITIES: &[VaccineValidity] = &[
    // Canine
    VaccineValidity { key: "distemper", display_name: "Distemper", standard_duration_days: 365, description: "Anual" },
    VaccineValidity { key: "parvovirus", display_name: "Parvovirus", standard_duration_days: 365, description: "Anual" },
    VaccineValidity { key: "hepatitis", display_name: "Hepatitis/Adenovirus", standard_duration_days: 365, description: "Anual" },
    VaccineValidity { key: "parainfluenza", display_name: "Parainfluenza", standard_duration_days: 365, description: "Anual" },
    VaccineValidity { key: "leptospirosis", display_name: "Leptospirosis", standard_duration_days: 365, description: "Anual" },
    VaccineValidity { key: "bordetella", display_name: "Bordetella (Tos de las Perreras)", standard_duration_days: 365, description: "Anual" },
    VaccineValidity { key: "rabia_perro", display_name: "Antirrábica", standard_duration_days: 365, description: "Anual" },
    // Feline
    VaccineValidity { key: "panleucopenia", display_name: "Panleucopenia Felina", standard_duration_days: 365, description: "Anual" },
    VaccineValidity { key: "rinotraqueitis", display_name: "Rinotraqueitis Felina", standard_duration_days: 365, description: "Anual" },
    VaccineValidity { key: "calicivirus", display_name: "Calicivirus Felino", standard_duration_days: 365, description: "Anual" },
    VaccineValidity { key: "leucemia", display_name: "Leucemia Felina (FeLV)", standard_duration_days: 365, description: "Anual" },
    VaccineValidity { key: "rabia_gato", display_name: "Antirrábica", standard_duration_days: 365, description: "Anual" },
    // Combination products
    VaccineValidity {
        key: "quintuple",
        display_name: "Quíntuple (Distemper, Hepatitis, Parvovirus, Parainfluenza, Leptospirosis)",
        standard_duration_days: 365,
        description: "Anual",
    },
    VaccineValidity {
        key: "triple_felina",
        display_name: "Triple Felina (Panleucopenia, Rinotraqueitis, Calicivirus)",
        standard_duration_days: 365,
        description: "Anual",
    },
];

/// Resolve a vaccine name or alias to its validity entry.
///
/// Case-insensitive substring matching in both directions: the entered name
/// may contain the key or display name, or be contained in the display name.
pub fn resolve_validity(name: &str) -> Option<&'static VaccineValidity> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    VACCINE_VALIDITIES.iter().find(|entry| {
        let display = entry.display_name.to_lowercase();
        normalized.contains(entry.key)
            || display.contains(&normalized)
            || normalized.contains(&display)
    })
}
