use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Categorical columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Smoker {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Day {
    Thur,
    Fri,
    Sat,
    Sun,
}

/// Time of food service for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum TimeOfDay {
    Lunch,
    Dinner,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 2] = [TimeOfDay::Lunch, TimeOfDay::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Lunch => "Lunch",
            TimeOfDay::Dinner => "Dinner",
        }
    }
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl Smoker {
    pub fn as_str(self) -> &'static str {
        match self {
            Smoker::Yes => "Yes",
            Smoker::No => "No",
        }
    }
}

impl Day {
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Thur => "Thur",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Smoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category – a selectable categorical column
// ---------------------------------------------------------------------------

/// One of the dataset's categorical columns, used for the scatter colour-by
/// and ridgeline split-by selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sex,
    Smoker,
    Day,
    Time,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Sex,
        Category::Smoker,
        Category::Day,
        Category::Time,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Sex => "sex",
            Category::Smoker => "smoker",
            Category::Day => "day",
            Category::Time => "time",
        }
    }

    /// The column's levels, in display order.
    pub fn levels(self) -> &'static [&'static str] {
        match self {
            Category::Sex => &["Male", "Female"],
            Category::Smoker => &["Yes", "No"],
            Category::Day => &["Thur", "Fri", "Sat", "Sun"],
            Category::Time => &["Lunch", "Dinner"],
        }
    }

    /// The level a given record falls into.
    pub fn value_of(self, record: &Record) -> &'static str {
        match self {
            Category::Sex => record.sex.as_str(),
            Category::Smoker => record.smoker.as_str(),
            Category::Day => record.day.as_str(),
            Category::Time => record.time.as_str(),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single observed transaction (one row of the source table).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub total_bill: f64,
    pub tip: f64,
    pub sex: Sex,
    pub smoker: Smoker,
    pub day: Day,
    pub time: TimeOfDay,
    pub size: u32,
}

impl Record {
    /// Tip as a fraction of the bill. Bills are validated > 0 at load time.
    pub fn tip_percent(&self) -> f64 {
        self.tip / self.total_bill
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with the bill range precomputed once at load.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records (rows), in source order.
    pub records: Vec<Record>,
    /// Global `(min, max)` of `total_bill` across all records.
    pub bill_range: (f64, f64),
}

impl Dataset {
    /// Build the dataset and precompute the global bill range.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for r in &records {
            min = min.min(r.total_bill);
            max = max.max(r.total_bill);
        }
        Dataset {
            records,
            bill_range: (min, max),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
