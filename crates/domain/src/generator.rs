use std::collections::BTreeMap;

use log::debug;

use crate::{
    Catalog, Constraints, DaySpec, GenerateError, PlannedWorkout, SplitCategory, UserPreferences,
    assemble_day, resolve_split_excluding,
};

/// Generates the workouts of a week, ordered by weekday.
///
/// The result only depends on the arguments. Preferences are validated before the catalog is
/// consulted.
pub fn generate_program(
    prefs: &UserPreferences,
    catalog: &Catalog,
    constraints: &Constraints,
) -> Result<Vec<PlannedWorkout>, GenerateError> {
    prefs.validate()?;

    let specs = resolve_split_excluding(prefs, &constraints.excluded_muscles())?;
    let names = workout_names(&specs);

    let workouts = specs
        .iter()
        .zip(names)
        .map(|(spec, name)| {
            Ok(PlannedWorkout {
                name,
                category: spec.category,
                day_of_week: spec.weekday,
                target_muscles: spec.target_muscles().collect(),
                exercises: assemble_day(spec, prefs, catalog, constraints)?,
            })
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    debug!(
        "generated {} workouts from catalog version {} ({})",
        workouts.len(),
        catalog.version(),
        workouts
            .iter()
            .map(|w| format!("{}: {}", w.day_of_week, w.name))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(workouts)
}

/// Names like "Push Day", with a letter appended when a category occurs more than once a week.
fn workout_names(specs: &[DaySpec]) -> Vec<String> {
    let mut occurrences: BTreeMap<SplitCategory, usize> = BTreeMap::new();
    for spec in specs {
        *occurrences.entry(spec.category).or_default() += 1;
    }

    specs
        .iter()
        .map(|spec| {
            let title = spec.category.title();
            if occurrences.get(&spec.category).copied().unwrap_or_default() > 1 {
                format!("{title} Day {}", rotation_letter(spec.rotation))
            } else {
                format!("{title} Day")
            }
        })
        .collect()
}

fn rotation_letter(rotation: usize) -> char {
    const LETTERS: &[u8] = b"ABCDEF";
    char::from(LETTERS[rotation % LETTERS.len()])
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::Weekday;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{
        Equipment, EquipmentAccess, Experience, Goal, Injury, MuscleID, Region, ValidationError,
        Workout, WorkoutID, weekday_index,
    };

    use super::*;

    fn preferences(
        goal: Goal,
        experience: Experience,
        equipment: EquipmentAccess,
        workout_days: &[u8],
    ) -> UserPreferences {
        UserPreferences {
            goal,
            experience,
            equipment,
            injuries: String::from("none"),
            frequency: u8::try_from(workout_days.len()).unwrap(),
            workout_days: workout_days.to_vec(),
        }
    }

    #[test]
    fn test_generate_program_hypertrophy_four_days() {
        let prefs = preferences(
            Goal::Hypertrophy,
            Experience::Intermediate,
            EquipmentAccess::FullGym,
            &[1, 2, 4, 5],
        );
        let program = generate_program(&prefs, &Catalog::builtin(), &Constraints::none()).unwrap();

        assert_eq!(
            program
                .iter()
                .map(|w| (w.day_of_week, w.category, w.name.as_str()))
                .collect::<Vec<_>>(),
            vec![
                (Weekday::Mon, SplitCategory::Upper, "Upper Body Day A"),
                (Weekday::Tue, SplitCategory::Lower, "Lower Body Day A"),
                (Weekday::Thu, SplitCategory::Upper, "Upper Body Day B"),
                (Weekday::Fri, SplitCategory::Lower, "Lower Body Day B"),
            ]
        );
        for workout in &program {
            assert!((4..=6).contains(&workout.exercises.len()));
            for exercise in &workout.exercises {
                assert_eq!(exercise.target_reps.to_string(), "8-12");
            }
        }
        assert_eq!(
            program[0].target_muscles,
            vec![
                MuscleID::Pecs,
                MuscleID::Lats,
                MuscleID::SideDelts,
                MuscleID::Biceps
            ]
        );
        assert_eq!(program[0].estimated_duration_min(), 40);
    }

    #[test]
    fn test_generate_program_bodyweight_three_days() {
        let prefs = preferences(
            Goal::General,
            Experience::Beginner,
            EquipmentAccess::Bodyweight,
            &[1, 3, 5],
        );
        let catalog = Catalog::builtin();
        let program = generate_program(&prefs, &catalog, &Constraints::none()).unwrap();

        assert_eq!(
            program.iter().map(|w| w.name.as_str()).collect::<Vec<_>>(),
            vec!["Full Body Day A", "Full Body Day B", "Full Body Day C"]
        );
        for exercise in program.iter().flat_map(|w| &w.exercises) {
            assert_eq!(
                catalog.get(exercise.exercise_id).unwrap().equipment,
                Equipment::None
            );
        }
    }

    #[rstest]
    #[case(&[1, 3, 5])]
    #[case(&[0, 1, 2, 3])]
    #[case(&[0, 2, 4, 5, 6])]
    #[case(&[1, 2, 3, 4, 5, 6])]
    fn test_generate_program_one_workout_per_day(#[case] workout_days: &[u8]) {
        let prefs = preferences(
            Goal::Strength,
            Experience::Advanced,
            EquipmentAccess::HomeGym,
            workout_days,
        );
        let program = generate_program(&prefs, &Catalog::builtin(), &Constraints::none()).unwrap();

        let days = program
            .iter()
            .map(|w| weekday_index(w.day_of_week))
            .collect::<BTreeSet<_>>();
        assert_eq!(days, workout_days.iter().copied().collect());
        assert_eq!(program.len(), workout_days.len());
    }

    #[test]
    fn test_generate_program_dense_order_index() {
        let prefs = preferences(
            Goal::FatLoss,
            Experience::Intermediate,
            EquipmentAccess::FullGym,
            &[1, 2, 3, 4, 5],
        );
        let program = generate_program(&prefs, &Catalog::builtin(), &Constraints::none()).unwrap();

        let mut next = 0u128;
        for (i, plan) in program.into_iter().enumerate() {
            let workout = Workout::from_plan(WorkoutID::from(i as u128 + 1), 1.into(), plan, || {
                next += 1;
                next.into()
            });
            assert_eq!(
                workout
                    .exercises
                    .iter()
                    .map(|e| e.order_index)
                    .collect::<Vec<_>>(),
                (0..u32::try_from(workout.exercises.len()).unwrap()).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_generate_program_is_deterministic() {
        let mut prefs = preferences(
            Goal::Hypertrophy,
            Experience::Advanced,
            EquipmentAccess::HomeGym,
            &[0, 1, 3, 4, 6],
        );
        prefs.injuries = String::from("knee");
        let catalog = Catalog::builtin();

        assert_eq!(
            generate_program(&prefs, &catalog, &Constraints::none()).unwrap(),
            generate_program(&prefs, &catalog, &Constraints::none()).unwrap()
        );
    }

    #[rstest]
    #[case("lower_back", &[MuscleID::ErectorSpinae])]
    #[case("knee", &[MuscleID::Quads])]
    #[case("hip, ankle", &[MuscleID::Adductors, MuscleID::Abductors, MuscleID::Calves])]
    #[case("elbow", &[MuscleID::Forearms])]
    fn test_generate_program_injury_exclusion(
        #[case] injuries: &str,
        #[case] excluded: &[MuscleID],
    ) {
        let mut prefs = preferences(
            Goal::Hypertrophy,
            Experience::Intermediate,
            EquipmentAccess::FullGym,
            &[1, 2, 3, 4, 5, 6],
        );
        prefs.injuries = injuries.to_string();
        let catalog = Catalog::builtin();
        let program = generate_program(&prefs, &catalog, &Constraints::none()).unwrap();

        for workout in &program {
            for muscle in excluded {
                assert!(!workout.target_muscles.contains(muscle));
            }
            for exercise in &workout.exercises {
                let record = catalog.get(exercise.exercise_id).unwrap();
                for muscle in excluded {
                    assert!(!record.works(*muscle), "{} works {muscle}", record.name);
                }
            }
        }
    }

    #[test]
    fn test_generate_program_with_constraints() {
        let prefs = preferences(
            Goal::Hypertrophy,
            Experience::Intermediate,
            EquipmentAccess::FullGym,
            &[1, 2, 4, 5],
        );
        let catalog = Catalog::builtin();
        let constraints = Constraints {
            excluded_regions: BTreeSet::from([Region::Lower]),
            injuries: BTreeSet::from([Injury::LowerBack]),
            equipment: Some(EquipmentAccess::HomeGym),
            ..Constraints::default()
        };
        let program = generate_program(&prefs, &catalog, &constraints).unwrap();

        assert_eq!(
            program.iter().map(|w| w.name.as_str()).collect::<Vec<_>>(),
            vec![
                "Upper Body Day A",
                "Accessory Day A",
                "Upper Body Day B",
                "Accessory Day B"
            ]
        );
        for exercise in program.iter().flat_map(|w| &w.exercises) {
            let record = catalog.get(exercise.exercise_id).unwrap();
            assert!(EquipmentAccess::HomeGym.satisfies(record.equipment));
            assert!(!record.muscles().any(|m| m.region() == Region::Lower));
            assert!(!record.works(MuscleID::ErectorSpinae));
        }
    }

    #[rstest]
    #[case(3, &[1, 3], ValidationError::DayCountMismatch { frequency: 3, days: 2 })]
    #[case(7, &[0, 1, 2, 3, 4, 5, 6], ValidationError::FrequencyOutOfRange(7))]
    #[case(3, &[1, 1, 3], ValidationError::DuplicateWeekday(1))]
    fn test_generate_program_invalid_preferences(
        #[case] frequency: u8,
        #[case] workout_days: &[u8],
        #[case] expected: ValidationError,
    ) {
        let mut prefs = preferences(
            Goal::Hypertrophy,
            Experience::Intermediate,
            EquipmentAccess::FullGym,
            workout_days,
        );
        prefs.frequency = frequency;
        let empty = Catalog::new(0, vec![]);

        assert!(matches!(
            generate_program(&prefs, &empty, &Constraints::none()),
            Err(GenerateError::Validation(err)) if err == expected
        ));
    }

    #[test]
    fn test_generate_program_unknown_injury() {
        let mut prefs = preferences(
            Goal::Hypertrophy,
            Experience::Intermediate,
            EquipmentAccess::FullGym,
            &[1, 3, 5],
        );
        prefs.injuries = String::from("knee, spleen");

        assert!(matches!(
            generate_program(&prefs, &Catalog::builtin(), &Constraints::none()),
            Err(GenerateError::Validation(ValidationError::UnknownInjury(tag))) if tag == "spleen"
        ));
    }

    #[test]
    fn test_generate_program_empty_catalog() {
        let prefs = preferences(
            Goal::Hypertrophy,
            Experience::Intermediate,
            EquipmentAccess::FullGym,
            &[1, 3, 5],
        );

        assert!(matches!(
            generate_program(&prefs, &Catalog::new(0, vec![]), &Constraints::none()),
            Err(GenerateError::InsufficientExercises {
                category: SplitCategory::FullBody,
                muscle: Some(MuscleID::Quads),
                required: 5,
                found: 0,
            })
        ));
    }

    #[test]
    fn test_workout_names() {
        let prefs = preferences(
            Goal::Hypertrophy,
            Experience::Intermediate,
            EquipmentAccess::FullGym,
            &[1, 2, 3, 4, 5],
        );
        let specs = crate::resolve_split(&prefs).unwrap();

        assert_eq!(
            workout_names(&specs),
            vec![
                "Push Day",
                "Pull Day",
                "Legs Day",
                "Upper Body Day",
                "Lower Body Day"
            ]
        );
    }
}
