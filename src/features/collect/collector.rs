//! Session-scoped accumulation of entries.

use std::io::{BufRead, Write};

use colored::Colorize;

use super::Prompter;
use crate::core::{format_iso_date, RatingScale};
use crate::entry::{Entry, Symptoms, Table};
use crate::error::TrackerError;

/// Collects one entry per call and keeps them in logging order.
#[derive(Debug, Clone, Default)]
pub struct EntryCollector {
    scale: RatingScale,
    entries: Vec<Entry>,
}

impl EntryCollector {
    #[must_use]
    pub const fn new(scale: RatingScale) -> Self {
        Self {
            scale,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub const fn scale(&self) -> &RatingScale {
        &self.scale
    }

    /// Prompt for one full day and append it. The new entry is the last of
    /// [`Self::entries`].
    ///
    /// Fields are asked in report order: date, day of cycle, the six ratings,
    /// then the two free-text fields. Nothing is stored until every field has
    /// been answered.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InputClosed` if input ends mid-entry, or an I/O
    /// error from the console.
    pub fn add_entry<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), TrackerError> {
        let date = prompter.prompt_date("Enter the date for the entry (YYYY-MM-DD): ")?;
        let day_of_cycle = prompter.prompt_count("Enter the day of the cycle: ")?;
        let symptoms = Symptoms {
            mood_swings: self.rate(prompter, "mood swings")?,
            cramps: self.rate(prompter, "cramps")?,
            bloating: self.rate(prompter, "bloating")?,
            headaches: self.rate(prompter, "headaches")?,
            fatigue: self.rate(prompter, "fatigue")?,
            stress_level: self.rate(prompter, "stress level")?,
        };
        let other_symptoms = prompter.prompt_text("List any other symptoms you experienced: ")?;
        let notes = prompter.prompt_text("Any additional notes? ")?;

        let entry = Entry::new(date, day_of_cycle, symptoms, other_symptoms, notes, &self.scale)?;
        tracing::debug!(
            date = %format_iso_date(entry.date()),
            day_of_cycle = entry.day_of_cycle(),
            "entry recorded"
        );
        self.entries.push(entry);
        prompter.say(&"Entry added successfully!".green().to_string())
    }

    /// Run [`Self::add_entry`] `count` times.
    ///
    /// # Errors
    ///
    /// Stops at the first failing entry; entries completed before it are kept.
    pub fn collect<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
        count: u32,
    ) -> Result<(), TrackerError> {
        for day in 1..=count {
            if count > 1 {
                prompter.say(&format!("Day {day} of {count}").bold().to_string())?;
            }
            self.add_entry(prompter)?;
        }
        Ok(())
    }

    fn rate<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        what: &str,
    ) -> Result<u8, TrackerError> {
        let prompt = format!("Rate your {what} today {}: ", self.scale.hint());
        prompter.prompt_rating(&prompt, &self.scale)
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The session as a table with one row per entry, in logging order.
    #[must_use]
    pub fn to_table(&self) -> Table {
        Table::from_entries(&self.entries)
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}
