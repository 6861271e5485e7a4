use log::trace;

use crate::{
    Catalog, Constraints, DaySpec, Experience, ExerciseRecord, GenerateError, Goal, MuscleID,
    PlannedExercise, Prescription, ResolvedConstraints, UserPreferences,
};

/// Number of exercises per training day.
#[must_use]
pub fn exercise_count(experience: Experience) -> usize {
    match experience {
        Experience::Beginner => 4,
        Experience::Intermediate => 5,
        Experience::Advanced => 6,
    }
}

/// Selects and prescribes the exercises of a single training day.
///
/// Primary muscles are covered in order, followed by every secondary muscle not already worked by
/// a selected exercise. Remaining slots are filled round-robin from the accessory, secondary and
/// primary muscles. For each slot the candidate at position `rotation` (wrapping) among the
/// eligible exercises targeting the muscle is chosen, so repeated categories vary within a week.
/// Compound movements are placed before isolation movements.
pub fn assemble_day(
    spec: &DaySpec,
    prefs: &UserPreferences,
    catalog: &Catalog,
    constraints: &Constraints,
) -> Result<Vec<PlannedExercise>, GenerateError> {
    let resolved = ResolvedConstraints::new(prefs, constraints)?;
    let eligible = catalog.eligible_exercises(&resolved.exercise_filter(prefs));
    let required = exercise_count(prefs.experience);

    let mut selection = Selection {
        eligible: &eligible,
        rotation: spec.rotation,
        selected: Vec::with_capacity(required),
    };

    for muscle in &spec.primary {
        if !selection.cover(*muscle) {
            return Err(selection.insufficient(spec, Some(*muscle), required));
        }
    }

    for muscle in &spec.secondary {
        if selection.works(*muscle) {
            continue;
        }
        if !selection.cover(*muscle) {
            return Err(selection.insufficient(spec, Some(*muscle), required));
        }
    }

    let pool = spec
        .accessory
        .iter()
        .chain(&spec.secondary)
        .chain(&spec.primary)
        .copied()
        .collect::<Vec<_>>();

    while selection.selected.len() < required {
        let mut progress = false;
        for muscle in &pool {
            if selection.selected.len() >= required {
                break;
            }
            progress |= selection.fill(*muscle);
        }
        if !progress {
            break;
        }
    }

    if selection.selected.len() < required {
        return Err(selection.insufficient(spec, None, required));
    }

    let mut selected = selection.selected;
    selected.sort_by_key(|e| !e.is_compound());

    trace!(
        "selected {} for {} day on {}",
        selected
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        spec.category,
        spec.weekday
    );

    let prescription = Prescription::for_goal(prefs.goal);

    Ok(selected
        .into_iter()
        .map(|exercise| prescribe(exercise, &prescription, prefs))
        .collect())
}

struct Selection<'a> {
    eligible: &'a [&'a ExerciseRecord],
    rotation: usize,
    selected: Vec<&'a ExerciseRecord>,
}

impl<'a> Selection<'a> {
    fn works(&self, muscle: MuscleID) -> bool {
        self.selected.iter().any(|e| e.works(muscle))
    }

    fn candidates(&self, accept: impl Fn(&ExerciseRecord) -> bool) -> Vec<&'a ExerciseRecord> {
        self.eligible
            .iter()
            .copied()
            .filter(|e| accept(e) && !self.selected.iter().any(|s| s.id == e.id))
            .collect()
    }

    fn pick(&mut self, candidates: &[&'a ExerciseRecord]) -> bool {
        if candidates.is_empty() {
            return false;
        }
        self.selected.push(candidates[self.rotation % candidates.len()]);
        true
    }

    /// Adds an exercise targeting the muscle, or one working it as a secondary muscle.
    fn cover(&mut self, muscle: MuscleID) -> bool {
        let mut candidates = self.candidates(|e| e.target == muscle);
        if candidates.is_empty() {
            candidates = self.candidates(|e| e.secondary.contains(&muscle));
        }
        self.pick(&candidates)
    }

    /// Adds an exercise targeting the muscle.
    fn fill(&mut self, muscle: MuscleID) -> bool {
        let candidates = self.candidates(|e| e.target == muscle);
        self.pick(&candidates)
    }

    fn insufficient(
        &self,
        spec: &DaySpec,
        muscle: Option<MuscleID>,
        required: usize,
    ) -> GenerateError {
        GenerateError::InsufficientExercises {
            category: spec.category,
            muscle,
            required,
            found: self.selected.len(),
        }
    }
}

fn prescribe(
    exercise: &ExerciseRecord,
    prescription: &Prescription,
    prefs: &UserPreferences,
) -> PlannedExercise {
    let notes = (prefs.goal == Goal::Strength && exercise.is_compound()).then(|| {
        format!(
            "Work up to a top set at RPE {}, then complete the remaining sets",
            prescription.rpe
        )
    });

    PlannedExercise {
        exercise_id: exercise.id,
        exercise_name: exercise.name.clone(),
        mechanic: exercise.mechanic,
        target_sets: prescription.target_sets(exercise.mechanic, prefs.experience),
        target_reps: prescription.reps,
        target_rpe: Some(prescription.rpe),
        rest_seconds: Some(prescription.rest_seconds(exercise.mechanic)),
        notes,
    }
}
