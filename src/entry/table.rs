use chrono::NaiveDate;

use super::Entry;

/// Report columns, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    DayOfCycle,
    MoodSwings,
    Cramps,
    Bloating,
    Headaches,
    Fatigue,
    StressLevel,
    OtherSymptoms,
    Notes,
}

impl Column {
    /// Every column in the fixed report order.
    pub const ALL: [Self; 10] = [
        Self::Date,
        Self::DayOfCycle,
        Self::MoodSwings,
        Self::Cramps,
        Self::Bloating,
        Self::Headaches,
        Self::Fatigue,
        Self::StressLevel,
        Self::OtherSymptoms,
        Self::Notes,
    ];

    /// Header text shown in the report.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::DayOfCycle => "Day of Cycle",
            Self::MoodSwings => "Mood Swings",
            Self::Cramps => "Cramps",
            Self::Bloating => "Bloating",
            Self::Headaches => "Headaches",
            Self::Fatigue => "Fatigue",
            Self::StressLevel => "Stress Level",
            Self::OtherSymptoms => "Other Symptoms",
            Self::Notes => "Notes",
        }
    }

    /// Zero-based position of the column.
    #[must_use]
    pub const fn index(self) -> u16 {
        self as u16
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// A single table value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Date(NaiveDate),
    Number(u32),
    /// Free text; `None` when the user left it blank.
    Text(Option<String>),
}

impl Cell {
    fn of(entry: &Entry, column: Column) -> Self {
        let symptoms = entry.symptoms();
        match column {
            Column::Date => Self::Date(entry.date()),
            Column::DayOfCycle => Self::Number(entry.day_of_cycle()),
            Column::MoodSwings => Self::Number(symptoms.mood_swings.into()),
            Column::Cramps => Self::Number(symptoms.cramps.into()),
            Column::Bloating => Self::Number(symptoms.bloating.into()),
            Column::Headaches => Self::Number(symptoms.headaches.into()),
            Column::Fatigue => Self::Number(symptoms.fatigue.into()),
            Column::StressLevel => Self::Number(symptoms.stress_level.into()),
            Column::OtherSymptoms => Self::Text(entry.other_symptoms().map(str::to_string)),
            Column::Notes => Self::Text(entry.notes().map(str::to_string)),
        }
    }
}

/// One table row, one cell per entry of [`Column::ALL`].
pub type Row = Vec<Cell>;

/// Row-oriented view of a session's entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from entries, keeping their order.
    #[must_use]
    pub fn from_entries(entries: &[Entry]) -> Self {
        let rows = entries
            .iter()
            .map(|entry| Column::ALL.iter().map(|&c| Cell::of(entry, c)).collect())
            .collect();
        Self { rows }
    }

    /// Header names in column order.
    #[must_use]
    pub fn headers(&self) -> [&'static str; 10] {
        Column::ALL.map(Column::header)
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
