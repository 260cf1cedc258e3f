//! Vaccination and deworming scheduler.
//!
//! Pure calendar arithmetic: the reference date is always an explicit
//! parameter, never read from a clock, so every result is reproducible.

mod validity;

pub use validity::{resolve_validity, VaccineValidity, DEFAULT_VALIDITY_DAYS, VACCINE_VALIDITIES};

use chrono::{Duration, NaiveDate};

use crate::models::{AlertLevel, Species, VaccinationRecord, VaccinationScheduleResult};

/// Days ahead of the due date at which a dose counts as "upcoming".
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

/// Compute the next due date and urgency for an administered dose.
///
/// Validity resolution order: explicit override (zero counts as absent),
/// then the vaccine catalog, then the one-year default.
pub fn compute_next_due(
    record: &VaccinationRecord,
    today: NaiveDate,
) -> VaccinationScheduleResult {
    let validity_days = record
        .validity_days
        .filter(|days| *days > 0)
        .or_else(|| resolve_validity(&record.vaccine).map(|v| v.standard_duration_days))
        .unwrap_or(DEFAULT_VALIDITY_DAYS);

    let next_due_date = record.last_administered + Duration::days(validity_days as i64);
    let days_until_due = (next_due_date - today).num_days();

    VaccinationScheduleResult {
        next_due_date,
        days_until_due,
        is_overdue: days_until_due < 0,
        alert_level: AlertLevel::from_days_until_due(days_until_due),
        validity_period: format_validity_period(validity_days),
    }
}

/// Human-readable validity period with Spanish pluralization.
///
/// ≥365 days: whole years plus remainder days; ≥30 days: whole months plus
/// remainder days; otherwise a plain day count.
pub fn format_validity_period(days: u32) -> String {
    if days >= 365 {
        let years = days / 365;
        let remaining = days % 365;
        let year_word = if years > 1 { "años" } else { "año" };
        if remaining == 0 {
            format!("{} {}", years, year_word)
        } else {
            format!("{} {} y {} días", years, year_word, remaining)
        }
    } else if days >= 30 {
        let months = days / 30;
        let remaining = days % 30;
        let month_word = if months > 1 { "meses" } else { "mes" };
        if remaining == 0 {
            format!("{} {}", months, month_word)
        } else {
            format!("{} {} y {} días", months, month_word, remaining)
        }
    } else {
        let day_word = if days == 1 { "día" } else { "días" };
        format!("{} {}", days, day_word)
    }
}

/// Core vaccines recommended for a species.
pub fn vaccine_recommendations(species: Species) -> Vec<&'static str> {
    match species {
        Species::Canine => vec![
            "Quíntuple (Distemper, Hepatitis, Parvovirus, Parainfluenza, Leptospirosis)",
            "Antirrábica",
            "Bordetella (Tos de las Perreras)",
        ],
        Species::Feline => vec![
            "Triple Felina (Panleucopenia, Rinotraqueitis, Calicivirus)",
            "Antirrábica",
            "Leucemia Felina (FeLV)",
        ],
        Species::Other => Vec::new(),
    }
}

/// Standing deworming cadence advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DewormingAdvisory {
    pub internal: &'static str,
    pub external: &'static str,
}

pub fn deworming_advisory() -> DewormingAdvisory {
    DewormingAdvisory {
        internal: "Cada 3-6 meses según riesgo",
        external: "Mensual o según exposición a parásitos",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_overdue_rabies() {
        // 365 days from 2023-11-20 is 2024-11-19 (2024 is a leap year),
        // six days before the reference date.
        let record = VaccinationRecord::new("Antirrábica", date(2023, 11, 20));
        let result = compute_next_due(&record, date(2024, 11, 25));
        assert_eq!(result.next_due_date, date(2024, 11, 19));
        assert!(result.is_overdue);
        assert_eq!(result.alert_level, AlertLevel::Overdue);
        assert_eq!(result.days_until_due, -6);
        assert_eq!(result.validity_period, "1 año");
    }

    #[test]
    fn test_due_today_is_upcoming_not_overdue() {
        let record =
            VaccinationRecord::new("Parvovirus", date(2024, 1, 1)).with_validity_days(30);
        let result = compute_next_due(&record, date(2024, 1, 31));
        assert_eq!(result.days_until_due, 0);
        assert!(!result.is_overdue);
        assert_eq!(result.alert_level, AlertLevel::Upcoming);
    }

    #[test]
    fn test_current_outside_window() {
        let record = VaccinationRecord::new("Distemper", date(2024, 6, 1));
        let result = compute_next_due(&record, date(2024, 6, 15));
        assert_eq!(result.alert_level, AlertLevel::Current);
        assert!(result.days_until_due > UPCOMING_WINDOW_DAYS);
    }

    #[test]
    fn test_explicit_validity_overrides_catalog() {
        let record =
            VaccinationRecord::new("Antirrábica", date(2024, 1, 1)).with_validity_days(90);
        let result = compute_next_due(&record, date(2024, 1, 1));
        assert_eq!(result.next_due_date, date(2024, 3, 31));
        assert_eq!(result.validity_period, "3 meses");
    }

    #[test]
    fn test_zero_validity_falls_back_to_catalog() {
        let record =
            VaccinationRecord::new("Distemper", date(2024, 1, 1)).with_validity_days(0);
        let result = compute_next_due(&record, date(2024, 1, 1));
        assert_eq!(result.days_until_due, 365);
    }

    #[test]
    fn test_unknown_vaccine_defaults_to_one_year() {
        let record = VaccinationRecord::new("vacuna experimental", date(2024, 3, 10));
        let result = compute_next_due(&record, date(2024, 3, 10));
        assert_eq!(result.next_due_date, date(2025, 3, 10));
        assert_eq!(result.validity_period, "1 año");
    }

    #[test]
    fn test_round_trip_due_date_is_zero() {
        let record = VaccinationRecord::new("Leucemia", date(2023, 7, 4));
        let first = compute_next_due(&record, date(2023, 7, 4));
        let at_due = compute_next_due(&record, first.next_due_date);
        assert_eq!(at_due.days_until_due, 0);
        assert_eq!(at_due.alert_level, AlertLevel::Upcoming);
    }

    #[test]
    fn test_validity_period_formatting() {
        assert_eq!(format_validity_period(365), "1 año");
        assert_eq!(format_validity_period(730), "2 años");
        assert_eq!(format_validity_period(400), "1 año y 35 días");
        assert_eq!(format_validity_period(60), "2 meses");
        assert_eq!(format_validity_period(95), "3 meses y 5 días");
        assert_eq!(format_validity_period(30), "1 mes");
        assert_eq!(format_validity_period(15), "15 días");
        assert_eq!(format_validity_period(1), "1 día");
    }

    #[test]
    fn test_recommendations_by_species() {
        assert_eq!(vaccine_recommendations(Species::Canine).len(), 3);
        assert_eq!(vaccine_recommendations(Species::Feline).len(), 3);
        assert!(vaccine_recommendations(Species::Other).is_empty());
    }
}
