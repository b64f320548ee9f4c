use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{format_iso_date, is_supported_date, RatingScale};
use crate::error::TrackerError;

/// Severity scores for one day, each on the session's [`RatingScale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Symptoms {
    pub mood_swings: u8,
    pub cramps: u8,
    pub bloating: u8,
    pub headaches: u8,
    pub fatigue: u8,
    pub stress_level: u8,
}

impl Symptoms {
    /// Every score paired with its column name, in report order.
    #[must_use]
    pub const fn named(&self) -> [(&'static str, u8); 6] {
        [
            ("Mood Swings", self.mood_swings),
            ("Cramps", self.cramps),
            ("Bloating", self.bloating),
            ("Headaches", self.headaches),
            ("Fatigue", self.fatigue),
            ("Stress Level", self.stress_level),
        ]
    }

    /// Set every score to the same value.
    #[must_use]
    pub const fn uniform(value: u8) -> Self {
        Self {
            mood_swings: value,
            cramps: value,
            bloating: value,
            headaches: value,
            fatigue: value,
            stress_level: value,
        }
    }
}

/// One day's logged symptom record.
///
/// Built only through [`Entry::new`], which checks every score against the
/// rating scale. Fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    date: NaiveDate,
    day_of_cycle: u32,
    #[serde(flatten)]
    symptoms: Symptoms,
    other_symptoms: Option<String>,
    notes: Option<String>,
}

impl Entry {
    /// Build a validated entry.
    ///
    /// Blank free text is stored as `None`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::DateOutOfRange` if `date` cannot be stored in a
    /// spreadsheet, or `TrackerError::OutOfRange` if any score lies outside
    /// `scale`.
    pub fn new(
        date: NaiveDate,
        day_of_cycle: u32,
        symptoms: Symptoms,
        other_symptoms: Option<String>,
        notes: Option<String>,
        scale: &RatingScale,
    ) -> Result<Self, TrackerError> {
        if !is_supported_date(date) {
            return Err(TrackerError::DateOutOfRange(format_iso_date(date)));
        }

        for (field, value) in symptoms.named() {
            if !scale.contains(value) {
                return Err(TrackerError::OutOfRange {
                    field,
                    value: i64::from(value),
                    min: i64::from(scale.min),
                    max: i64::from(scale.max),
                });
            }
        }

        Ok(Self {
            date,
            day_of_cycle,
            symptoms,
            other_symptoms: non_blank(other_symptoms),
            notes: non_blank(notes),
        })
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn day_of_cycle(&self) -> u32 {
        self.day_of_cycle
    }

    #[must_use]
    pub const fn symptoms(&self) -> &Symptoms {
        &self.symptoms
    }

    #[must_use]
    pub fn other_symptoms(&self) -> Option<&str> {
        self.other_symptoms.as_deref()
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}
