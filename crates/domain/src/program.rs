use std::fmt;

use chrono::Weekday;
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    Catalog, ExerciseID, GenerateError, Mechanic, MuscleID, Name, RPE, ReadError,
    RegenerateRequest, RepRange, SplitCategory, UpdateError, UserID, UserPreferences,
    weekday_index,
};

#[allow(async_fn_in_trait)]
pub trait ProgramService {
    async fn get_catalog(&self) -> Result<Catalog, ReadError>;
    async fn get_preferences(&self, user_id: UserID) -> Result<UserPreferences, ReadError>;
    /// Stores the preferences and replaces the program with one generated from them.
    async fn set_preferences(
        &self,
        user_id: UserID,
        preferences: UserPreferences,
    ) -> Result<Vec<Workout>, GenerateError>;
    async fn get_program(&self, user_id: UserID) -> Result<Vec<Workout>, ReadError>;
    async fn generate_program(&self, user_id: UserID) -> Result<Vec<Workout>, GenerateError>;
    /// Replaces the program with one that additionally respects the requested constraints.
    ///
    /// The stored preferences stay unchanged.
    async fn regenerate_with_constraints(
        &self,
        user_id: UserID,
        request: RegenerateRequest,
    ) -> Result<Vec<Workout>, GenerateError>;
}

#[allow(async_fn_in_trait)]
pub trait ProgramRepository {
    async fn read_program(&self, user_id: UserID) -> Result<Vec<Workout>, ReadError>;
    /// Replaces the whole program of the user in one step.
    ///
    /// Readers observe either the previous or the new program, never a mixture of both.
    async fn replace_program(
        &self,
        user_id: UserID,
        program: Vec<PlannedWorkout>,
    ) -> Result<Vec<Workout>, UpdateError>;
}

/// Exercise selected for a day, before it is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub mechanic: Mechanic,
    pub target_sets: u32,
    pub target_reps: RepRange,
    pub target_rpe: Option<RPE>,
    pub rest_seconds: Option<u32>,
    pub notes: Option<String>,
}

impl PlannedExercise {
    /// Seconds spent on all sets including rest, assuming four seconds per repetition.
    #[must_use]
    pub fn duration_seconds(&self) -> u32 {
        let work = u32::from(self.target_reps.max()) * SECONDS_PER_REP;
        self.target_sets * (work + self.rest_seconds.unwrap_or_default())
    }
}

const SECONDS_PER_REP: u32 = 4;
const WARM_UP_SECONDS: u32 = 300;

/// Workout of a generated week, before it is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedWorkout {
    pub name: String,
    pub category: SplitCategory,
    pub day_of_week: Weekday,
    pub target_muscles: Vec<MuscleID>,
    pub exercises: Vec<PlannedExercise>,
}

impl PlannedWorkout {
    /// Minutes including a warm-up, rounded up.
    #[must_use]
    pub fn estimated_duration_min(&self) -> u32 {
        let seconds = WARM_UP_SECONDS
            + self
                .exercises
                .iter()
                .map(PlannedExercise::duration_seconds)
                .sum::<u32>();
        seconds.div_ceil(60)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub user_id: UserID,
    pub name: String,
    pub category: SplitCategory,
    pub day_of_week: Weekday,
    pub estimated_duration_min: u32,
    pub target_muscles: Vec<MuscleID>,
    pub is_active: bool,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    /// Creates an active workout from a plan, numbering the exercises in plan order.
    pub fn from_plan(
        id: WorkoutID,
        user_id: UserID,
        plan: PlannedWorkout,
        mut exercise_id: impl FnMut() -> WorkoutExerciseID,
    ) -> Self {
        let estimated_duration_min = plan.estimated_duration_min();
        Self {
            id,
            user_id,
            name: plan.name,
            category: plan.category,
            day_of_week: plan.day_of_week,
            estimated_duration_min,
            target_muscles: plan.target_muscles,
            is_active: true,
            exercises: plan
                .exercises
                .into_iter()
                .zip(0..)
                .map(|(e, order_index)| WorkoutExercise {
                    id: exercise_id(),
                    workout_id: id,
                    exercise_id: e.exercise_id,
                    exercise_name: e.exercise_name,
                    order_index,
                    target_sets: e.target_sets,
                    target_reps: e.target_reps,
                    target_rpe: e.target_rpe,
                    rest_seconds: e.rest_seconds,
                    notes: e.notes,
                })
                .collect(),
        }
    }

    /// Weekday as stored, 0 = Sunday.
    #[must_use]
    pub fn day_index(&self) -> u8 {
        weekday_index(self.day_of_week)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub id: WorkoutExerciseID,
    pub workout_id: WorkoutID,
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub order_index: u32,
    pub target_sets: u32,
    pub target_reps: RepRange,
    pub target_rpe: Option<RPE>,
    pub rest_seconds: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl fmt::Display for WorkoutID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutExerciseID(Uuid);

impl From<Uuid> for WorkoutExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl fmt::Display for WorkoutExerciseID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
