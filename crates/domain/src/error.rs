use crate::{CoachError, MuscleID, SplitCategory};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] BoxError),
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] BoxError),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("poisoned lock")]
    Poisoned,
    #[error(transparent)]
    Other(#[from] BoxError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Frequency must be in the range 3 to 6 ({0})")]
    FrequencyOutOfRange(u8),
    #[error("Number of workout days ({days}) does not match frequency ({frequency})")]
    DayCountMismatch { frequency: u8, days: usize },
    #[error("Weekday must be in the range 0 to 6 ({0})")]
    WeekdayOutOfRange(u8),
    #[error("Weekday {0} selected more than once")]
    DuplicateWeekday(u8),
    #[error("Unknown injury \"{0}\"")]
    UnknownInjury(String),
    #[error("Unknown {field} \"{value}\"")]
    UnknownValue { field: &'static str, value: String },
    #[error("Every muscle of the {category} day and its substitutes is excluded ({muscle})")]
    ExcludedCategory {
        category: SplitCategory,
        muscle: MuscleID,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(
        "not enough eligible exercises for {category} day{} (required {required}, found {found})",
        .muscle.map(|m| format!(" targeting {m}")).unwrap_or_default()
    )]
    InsufficientExercises {
        category: SplitCategory,
        muscle: Option<MuscleID>,
        required: usize,
        found: usize,
    },
    #[error(transparent)]
    Coach(#[from] CoachError),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Update(#[from] UpdateError),
}
