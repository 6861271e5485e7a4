use std::collections::BTreeSet;

use crate::{
    Catalog, EquipmentAccess, ExerciseFilter, ExerciseID, Injury, MuscleID, Region,
    UserPreferences, ValidationError,
};

/// Ad-hoc restrictions applied on top of the stored preferences for a single generation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Constraints {
    pub excluded_exercises: BTreeSet<ExerciseID>,
    pub excluded_muscles: BTreeSet<MuscleID>,
    pub excluded_regions: BTreeSet<Region>,
    pub injuries: BTreeSet<Injury>,
    /// Equipment available where the user trains this time, e.g. at home instead of the gym.
    /// It can grant more access than the stored preferences as well as less.
    pub equipment: Option<EquipmentAccess>,
}

impl Constraints {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Muscles excluded explicitly, through a region or through an injury.
    #[must_use]
    pub fn excluded_muscles(&self) -> BTreeSet<MuscleID> {
        self.excluded_muscles
            .iter()
            .copied()
            .chain(self.excluded_regions.iter().flat_map(|r| r.muscles()))
            .chain(
                self.injuries
                    .iter()
                    .flat_map(|i| i.excluded_muscles().iter().copied()),
            )
            .collect()
    }
}

/// Everything that limits exercise choice for one user in one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConstraints {
    pub equipment: EquipmentAccess,
    pub excluded_muscles: BTreeSet<MuscleID>,
    pub excluded_exercises: BTreeSet<ExerciseID>,
}

impl ResolvedConstraints {
    /// Combines the stored preferences with the ad-hoc constraints.
    ///
    /// An equipment override replaces the stored equipment access, in either direction, while
    /// all exclusions add up.
    pub fn new(
        prefs: &UserPreferences,
        constraints: &Constraints,
    ) -> Result<ResolvedConstraints, ValidationError> {
        let mut excluded_muscles = prefs.excluded_muscles()?;
        excluded_muscles.extend(constraints.excluded_muscles());

        Ok(ResolvedConstraints {
            equipment: constraints.equipment.unwrap_or(prefs.equipment),
            excluded_muscles,
            excluded_exercises: constraints.excluded_exercises.clone(),
        })
    }

    #[must_use]
    pub fn exercise_filter(&self, prefs: &UserPreferences) -> ExerciseFilter {
        ExerciseFilter {
            equipment: Some(self.equipment),
            max_difficulty: Some(prefs.experience.max_difficulty()),
            targets: BTreeSet::new(),
            excluded_muscles: self.excluded_muscles.clone(),
            excluded_exercises: self.excluded_exercises.clone(),
        }
    }

    /// Number of catalog exercises that pass all restrictions.
    #[must_use]
    pub fn eligible_count(&self, prefs: &UserPreferences, catalog: &Catalog) -> usize {
        catalog
            .eligible_exercises(&self.exercise_filter(prefs))
            .len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Experience, Goal};

    use super::*;

    fn preferences() -> UserPreferences {
        UserPreferences {
            goal: Goal::Hypertrophy,
            experience: Experience::Beginner,
            equipment: EquipmentAccess::HomeGym,
            injuries: String::from("knee"),
            frequency: 3,
            workout_days: vec![1, 3, 5],
        }
    }

    #[test]
    fn test_constraints_excluded_muscles() {
        let constraints = Constraints {
            excluded_muscles: BTreeSet::from([MuscleID::Biceps]),
            excluded_regions: BTreeSet::from([Region::Core]),
            injuries: BTreeSet::from([Injury::Ankle]),
            ..Constraints::default()
        };

        assert_eq!(
            constraints.excluded_muscles(),
            BTreeSet::from([
                MuscleID::Biceps,
                MuscleID::Abs,
                MuscleID::ErectorSpinae,
                MuscleID::Calves
            ])
        );
        assert!(!constraints.is_empty());
        assert!(Constraints::none().is_empty());
    }

    #[test]
    fn test_resolved_constraints() {
        let constraints = Constraints {
            excluded_exercises: BTreeSet::from([ExerciseID::from(7)]),
            injuries: BTreeSet::from([Injury::Elbow]),
            equipment: Some(EquipmentAccess::Bodyweight),
            ..Constraints::default()
        };

        assert_eq!(
            ResolvedConstraints::new(&preferences(), &constraints),
            Ok(ResolvedConstraints {
                equipment: EquipmentAccess::Bodyweight,
                excluded_muscles: BTreeSet::from([MuscleID::Forearms, MuscleID::Quads]),
                excluded_exercises: BTreeSet::from([ExerciseID::from(7)]),
            })
        );
    }

    #[test]
    fn test_resolved_constraints_keep_stored_equipment() {
        let resolved = ResolvedConstraints::new(&preferences(), &Constraints::none()).unwrap();
        let filter = resolved.exercise_filter(&preferences());

        assert_eq!(filter.equipment, Some(EquipmentAccess::HomeGym));
        assert_eq!(filter.max_difficulty, Some(crate::Difficulty::Beginner));
        assert_eq!(filter.excluded_muscles, BTreeSet::from([MuscleID::Quads]));
    }

    #[test]
    fn test_equipment_override_widens_access() {
        let catalog = Catalog::builtin();
        let prefs = preferences();
        let stored = ResolvedConstraints::new(&prefs, &Constraints::none()).unwrap();
        let gym = ResolvedConstraints::new(
            &prefs,
            &Constraints {
                equipment: Some(EquipmentAccess::FullGym),
                ..Constraints::default()
            },
        )
        .unwrap();

        assert_eq!(gym.equipment, EquipmentAccess::FullGym);
        assert!(gym.eligible_count(&prefs, &catalog) > stored.eligible_count(&prefs, &catalog));
        assert!(
            catalog
                .eligible_exercises(&gym.exercise_filter(&prefs))
                .iter()
                .any(|e| !EquipmentAccess::HomeGym.satisfies(e.equipment))
        );
    }

    #[test]
    fn test_resolved_constraints_unknown_injury() {
        let mut prefs = preferences();
        prefs.injuries = String::from("tennis elbow");
        assert_eq!(
            ResolvedConstraints::new(&prefs, &Constraints::none()),
            Err(ValidationError::UnknownInjury(String::from("tennis elbow")))
        );
    }

    #[test]
    fn test_eligible_count_shrinks_with_constraints() {
        let catalog = Catalog::builtin();
        let prefs = preferences();
        let all = ResolvedConstraints::new(&prefs, &Constraints::none())
            .unwrap()
            .eligible_count(&prefs, &catalog);
        let bodyweight = ResolvedConstraints::new(
            &prefs,
            &Constraints {
                equipment: Some(EquipmentAccess::Bodyweight),
                ..Constraints::default()
            },
        )
        .unwrap()
        .eligible_count(&prefs, &catalog);

        assert!(bodyweight > 0);
        assert!(bodyweight < all);
    }
}
