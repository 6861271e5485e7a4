use std::str::FromStr;

use liftplan_domain as domain;
use uuid::Uuid;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub goal: String,
    pub experience: String,
    pub equipment: String,
    #[serde(default)]
    pub injuries: String,
    pub frequency: u8,
    pub workout_days: Vec<u8>,
}

impl From<domain::UserPreferences> for Preferences {
    fn from(value: domain::UserPreferences) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::UserPreferences> for Preferences {
    fn from(value: &domain::UserPreferences) -> Self {
        Self {
            goal: value.goal.to_string(),
            experience: value.experience.to_string(),
            equipment: value.equipment.to_string(),
            injuries: value.injuries.clone(),
            frequency: value.frequency,
            workout_days: value.workout_days.clone(),
        }
    }
}

impl TryFrom<Preferences> for domain::UserPreferences {
    type Error = WireError;

    fn try_from(value: Preferences) -> Result<Self, Self::Error> {
        Ok(Self {
            goal: parse("goal", &value.goal)?,
            experience: parse("experience", &value.experience)?,
            equipment: parse("equipment", &value.equipment)?,
            injuries: value.injuries,
            frequency: value.frequency,
            workout_days: value.workout_days,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub version: u32,
    pub exercises: Vec<Exercise>,
}

impl From<&domain::Catalog> for Catalog {
    fn from(value: &domain::Catalog) -> Self {
        Self {
            version: value.version(),
            exercises: value.exercises().iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<Catalog> for domain::Catalog {
    type Error = WireError;

    fn try_from(value: Catalog) -> Result<Self, Self::Error> {
        Ok(Self::new(
            value.version,
            value
                .exercises
                .into_iter()
                .map(domain::ExerciseRecord::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        ))
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub body_part: String,
    pub target: String,
    pub secondary_muscles: Vec<String>,
    pub equipment: String,
    pub mechanic: String,
    pub difficulty: String,
}

impl From<&domain::ExerciseRecord> for Exercise {
    fn from(value: &domain::ExerciseRecord) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            body_part: value.body_part.to_string(),
            target: value.target.slug().to_string(),
            secondary_muscles: value
                .secondary
                .iter()
                .map(|m| m.slug().to_string())
                .collect(),
            equipment: value.equipment.slug().to_string(),
            mechanic: value.mechanic.to_string(),
            difficulty: value.difficulty.to_string(),
        }
    }
}

impl TryFrom<Exercise> for domain::ExerciseRecord {
    type Error = WireError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            body_part: parse("body part", &value.body_part)?,
            target: muscle(&value.target)?,
            secondary: value
                .secondary_muscles
                .iter()
                .map(|m| muscle(m))
                .collect::<Result<Vec<_>, _>>()?,
            equipment: domain::Equipment::parse(&value.equipment)
                .ok_or_else(|| unknown("equipment", &value.equipment))?,
            mechanic: parse("mechanic", &value.mechanic)?,
            difficulty: parse("difficulty", &value.difficulty)?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub day_of_week: u8,
    pub estimated_duration_min: u32,
    pub target_muscles: Vec<String>,
    pub is_active: bool,
    pub exercises: Vec<WorkoutExercise>,
}

impl From<domain::Workout> for Workout {
    fn from(value: domain::Workout) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            user_id: *value.user_id,
            name: value.name.clone(),
            category: value.category.to_string(),
            day_of_week: value.day_index(),
            estimated_duration_min: value.estimated_duration_min,
            target_muscles: value
                .target_muscles
                .iter()
                .map(|m| m.slug().to_string())
                .collect(),
            is_active: value.is_active,
            exercises: value.exercises.iter().map(WorkoutExercise::from).collect(),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = WireError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            user_id: value.user_id.into(),
            name: value.name,
            category: parse("type", &value.category)?,
            day_of_week: domain::weekday_from_index(value.day_of_week)?,
            estimated_duration_min: value.estimated_duration_min,
            target_muscles: value
                .target_muscles
                .iter()
                .map(|m| muscle(m))
                .collect::<Result<Vec<_>, _>>()?,
            is_active: value.is_active,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::WorkoutExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub order_index: u32,
    pub target_sets: u32,
    pub target_reps: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rpe: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::WorkoutExercise> for WorkoutExercise {
    fn from(value: &domain::WorkoutExercise) -> Self {
        Self {
            id: *value.id,
            workout_id: *value.workout_id,
            exercise_id: *value.exercise_id,
            exercise_name: value.exercise_name.to_string(),
            order_index: value.order_index,
            target_sets: value.target_sets,
            target_reps: value.target_reps.to_string(),
            target_rpe: value.target_rpe.map(f32::from),
            rest_seconds: value.rest_seconds,
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<WorkoutExercise> for domain::WorkoutExercise {
    type Error = WireError;

    fn try_from(value: WorkoutExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            workout_id: value.workout_id.into(),
            exercise_id: value.exercise_id.into(),
            exercise_name: domain::Name::new(&value.exercise_name)?,
            order_index: value.order_index,
            target_sets: value.target_sets,
            target_reps: domain::RepRange::try_from(value.target_reps.as_str())?,
            target_rpe: value.target_rpe.map(domain::RPE::new).transpose()?,
            rest_seconds: value.rest_seconds,
            notes: value.notes,
        })
    }
}

/// Coach tool call, with exercises given by name.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RegenerateRequest {
    pub excluded_exercises: Vec<String>,
    pub excluded_muscles: Vec<String>,
    pub excluded_regions: Vec<String>,
    pub injuries: Vec<String>,
    pub equipment: Option<String>,
    pub reason: Option<String>,
}

impl From<RegenerateRequest> for domain::RegenerateRequest {
    fn from(value: RegenerateRequest) -> Self {
        Self {
            excluded_exercises: value.excluded_exercises,
            excluded_muscles: value.excluded_muscles,
            excluded_regions: value.excluded_regions,
            injuries: value.injuries,
            equipment: value.equipment,
            reason: value.reason,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WireError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidValue(#[from] domain::ValidationError),
    #[error(transparent)]
    InvalidReps(#[from] domain::RepsError),
    #[error(transparent)]
    InvalidRPE(#[from] domain::RPEError),
}

fn unknown(field: &'static str, value: &str) -> domain::ValidationError {
    domain::ValidationError::UnknownValue {
        field,
        value: value.to_string(),
    }
}

fn parse<T: FromStr>(field: &'static str, value: &str) -> Result<T, domain::ValidationError> {
    T::from_str(value).map_err(|_| unknown(field, value))
}

fn muscle(value: &str) -> Result<domain::MuscleID, domain::ValidationError> {
    domain::MuscleID::parse(value).ok_or_else(|| unknown("muscle", value))
}
