#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod assembler;
pub mod catalog;
mod coach;
mod constraint;
mod error;
mod exercise;
mod generator;
mod name;
mod preferences;
mod prescription;
mod program;
mod service;
mod split;
mod user;

pub use assembler::{assemble_day, exercise_count};
pub use catalog::{Catalog, CatalogRepository, ExerciseFilter};
pub use coach::{CoachError, RegenerateRequest};
pub use constraint::{Constraints, ResolvedConstraints};
pub use error::{
    BoxError, GenerateError, ReadError, StorageError, UpdateError, ValidationError,
};
pub use exercise::{
    BodyPart, Difficulty, Equipment, ExerciseID, ExerciseRecord, Mechanic, MuscleID, Property,
    Region,
};
pub use generator::generate_program;
pub use name::{Name, NameError};
pub use preferences::{
    EquipmentAccess, Experience, Goal, Injury, PreferencesRepository, UserPreferences,
    weekday_from_index, weekday_index,
};
pub use prescription::{Prescription, RPE, RPEError, RepRange, Reps, RepsError};
pub use program::{
    PlannedExercise, PlannedWorkout, ProgramRepository, ProgramService, Workout,
    WorkoutExercise, WorkoutExerciseID, WorkoutID,
};
pub use service::Service;
pub use split::{
    DaySpec, SplitCategory, Template, adjacent, day_of_week, resolve_split,
    resolve_split_excluding,
};
pub use user::UserID;
