use std::{collections::BTreeSet, str::FromStr};

use log::info;

use crate::{Catalog, Constraints, EquipmentAccess, Injury, MuscleID, Region, ValidationError};

/// Regeneration requested by the coach, with exercises, muscles and regions given by name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegenerateRequest {
    pub excluded_exercises: Vec<String>,
    pub excluded_muscles: Vec<String>,
    pub excluded_regions: Vec<String>,
    pub injuries: Vec<String>,
    pub equipment: Option<String>,
    pub reason: Option<String>,
}

impl RegenerateRequest {
    /// Resolves all names against the catalog and the fixed enumerations.
    pub fn resolve(&self, catalog: &Catalog) -> Result<Constraints, CoachError> {
        if let Some(reason) = &self.reason {
            info!("regenerating program: {reason}");
        }

        let excluded_exercises = self
            .excluded_exercises
            .iter()
            .map(|name| {
                catalog
                    .find_by_name(name)
                    .map(|e| e.id)
                    .ok_or_else(|| CoachError::UnknownExercise(name.trim().to_string()))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        let excluded_muscles = self
            .excluded_muscles
            .iter()
            .map(|name| {
                MuscleID::parse(name)
                    .ok_or_else(|| CoachError::UnknownMuscle(name.trim().to_string()))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        let excluded_regions = self
            .excluded_regions
            .iter()
            .map(|name| {
                Region::from_str(&name.trim().replace([' ', '-'], "_"))
                    .map_err(|_| CoachError::UnknownRegion(name.trim().to_string()))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        let mut injuries = BTreeSet::new();
        for text in &self.injuries {
            injuries.extend(Injury::parse_list(text)?);
        }

        let equipment = self
            .equipment
            .as_deref()
            .map(|value| {
                EquipmentAccess::from_str(&value.trim().to_lowercase().replace([' ', '-'], "_"))
                    .map_err(|_| ValidationError::UnknownValue {
                        field: "equipment",
                        value: value.trim().to_string(),
                    })
            })
            .transpose()?;

        Ok(Constraints {
            excluded_exercises,
            excluded_muscles,
            excluded_regions,
            injuries,
            equipment,
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoachError {
    #[error("Unknown exercise \"{0}\"")]
    UnknownExercise(String),
    #[error("Unknown muscle \"{0}\"")]
    UnknownMuscle(String),
    #[error("Unknown body region \"{0}\"")]
    UnknownRegion(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
