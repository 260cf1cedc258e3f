//! Vaccination scheduling value types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scheduler input: one administered dose of a vaccine or antiparasitic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaccinationRecord {
    /// Vaccine name or alias; resolved against the validity catalog when no
    /// explicit validity is given.
    pub vaccine: String,
    pub last_administered: NaiveDate,
    /// Explicit validity override in days. Zero counts as absent.
    pub validity_days: Option<u32>,
}

impl VaccinationRecord {
    pub fn new(vaccine: impl Into<String>, last_administered: NaiveDate) -> Self {
        Self {
            vaccine: vaccine.into(),
            last_administered,
            validity_days: None,
        }
    }

    pub fn with_validity_days(mut self, days: u32) -> Self {
        self.validity_days = Some(days);
        self
    }
}

/// Traffic-light urgency for a scheduled dose.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertLevel {
    /// More than 30 days of cover remain.
    Current,
    /// Due within the next 30 days. Due today is upcoming, not overdue.
    Upcoming,
    /// Past due.
    Overdue,
}

impl AlertLevel {
    /// Classify from signed days until due.
    pub fn from_days_until_due(days: i64) -> AlertLevel {
        if days < 0 {
            AlertLevel::Overdue
        } else if days <= 30 {
            AlertLevel::Upcoming
        } else {
            AlertLevel::Current
        }
    }

    /// Badge color used by the portal UI.
    pub fn color(&self) -> &'static str {
        match self {
            AlertLevel::Current => "green",
            AlertLevel::Upcoming => "yellow",
            AlertLevel::Overdue => "red",
        }
    }
}

/// Scheduler output for one record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaccinationScheduleResult {
    pub next_due_date: NaiveDate,
    /// Negative when overdue.
    pub days_until_due: i64,
    pub is_overdue: bool,
    pub alert_level: AlertLevel,
    /// Human-readable validity period, e.g. "1 año", "2 meses y 5 días".
    pub validity_period: String,
}
