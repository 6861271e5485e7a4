use std::collections::BTreeSet;

use log::error;

use crate::{
    Difficulty, Equipment, EquipmentAccess, ExerciseID, ExerciseRecord, Mechanic, MuscleID, Name,
    ReadError,
};

#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    async fn read_catalog(&self) -> Result<Catalog, ReadError>;
}

/// Immutable snapshot of the exercise catalog.
///
/// The order of `exercises` is significant: exercise selection breaks ties by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    version: u32,
    exercises: Vec<ExerciseRecord>,
}

impl Catalog {
    pub const BUILTIN_VERSION: u32 = 1;

    #[must_use]
    pub fn new(version: u32, exercises: Vec<ExerciseRecord>) -> Self {
        Self { version, exercises }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Self::BUILTIN_VERSION, BUILTIN_EXERCISES.clone())
    }

    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    #[must_use]
    pub fn exercises(&self) -> &[ExerciseRecord] {
        &self.exercises
    }

    #[must_use]
    pub fn get(&self, id: ExerciseID) -> Option<&ExerciseRecord> {
        self.exercises.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&ExerciseRecord> {
        self.exercises.iter().find(|e| e.name.matches(name))
    }

    /// Exercises matching the filter, in catalog order.
    #[must_use]
    pub fn eligible_exercises(&self, filter: &ExerciseFilter) -> Vec<&ExerciseRecord> {
        self.exercises.iter().filter(|e| filter.accepts(e)).collect()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub equipment: Option<EquipmentAccess>,
    pub max_difficulty: Option<Difficulty>,
    pub targets: BTreeSet<MuscleID>,
    pub excluded_muscles: BTreeSet<MuscleID>,
    pub excluded_exercises: BTreeSet<ExerciseID>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn accepts(&self, exercise: &ExerciseRecord) -> bool {
        self.equipment
            .is_none_or(|access| access.satisfies(exercise.equipment))
            && self
                .max_difficulty
                .is_none_or(|max| exercise.difficulty <= max)
            && (self.targets.is_empty() || self.targets.contains(&exercise.target))
            && !exercise.muscles().any(|m| self.excluded_muscles.contains(&m))
            && !self.excluded_exercises.contains(&exercise.id)
    }
}

static BUILTIN_EXERCISES: std::sync::LazyLock<Vec<ExerciseRecord>> =
    std::sync::LazyLock::new(|| {
        BASE_EXERCISES
            .iter()
            .flat_map(|e| {
                std::iter::once((
                    e.name,
                    e.target,
                    e.secondary,
                    e.equipment,
                    e.mechanic,
                    e.difficulty,
                ))
                .chain(e.variants.iter().map(move |v| {
                    (
                        v.name,
                        v.target.unwrap_or(e.target),
                        v.secondary.unwrap_or(e.secondary),
                        v.equipment.unwrap_or(e.equipment),
                        v.mechanic.unwrap_or(e.mechanic),
                        v.difficulty.unwrap_or(e.difficulty),
                    )
                }))
            })
            .zip(1u128..)
            .filter_map(
                |((name, target, secondary, equipment, mechanic, difficulty), id)| {
                    match Name::new(name) {
                        Ok(name) => Some(ExerciseRecord {
                            id: id.into(),
                            name,
                            body_part: target.body_part(),
                            target,
                            secondary: secondary.to_vec(),
                            equipment,
                            mechanic,
                            difficulty,
                        }),
                        Err(err) => {
                            error!("invalid exercise name \"{name}\": {err}");
                            None
                        }
                    }
                },
            )
            .collect()
    });

struct BaseExercise {
    name: &'static str,
    target: MuscleID,
    secondary: &'static [MuscleID],
    equipment: Equipment,
    mechanic: Mechanic,
    difficulty: Difficulty,
    variants: &'static [ExerciseVariant],
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ExerciseVariant {
    name: &'static str,
    target: Option<MuscleID>,
    secondary: Option<&'static [MuscleID]>,
    equipment: Option<Equipment>,
    mechanic: Option<Mechanic>,
    difficulty: Option<Difficulty>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            name: "",
            target: None,
            secondary: None,
            equipment: None,
            mechanic: None,
            difficulty: None,
        }
    }
}

const BASE_EXERCISES: [BaseExercise; 49] = [
    BaseExercise {
        name: "Barbell Bench Press",
        target: MuscleID::Pecs,
        secondary: &[MuscleID::FrontDelts, MuscleID::Triceps],
        equipment: Equipment::Barbell,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Intermediate,
        variants: &[
            ExerciseVariant {
                name: "Barbell Incline Bench Press",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Bench Press",
                equipment: Some(Equipment::Dumbbell),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Incline Bench Press",
                equipment: Some(Equipment::Dumbbell),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Chest Press",
                equipment: Some(Equipment::Machine),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Push-Up",
        target: MuscleID::Pecs,
        secondary: &[MuscleID::FrontDelts, MuscleID::Triceps, MuscleID::Abs],
        equipment: Equipment::None,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Incline Push-Up",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Decline Push-Up",
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Archer Push-Up",
                difficulty: Some(Difficulty::Advanced),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Parallel Bar Dip",
        target: MuscleID::Pecs,
        secondary: &[MuscleID::Triceps, MuscleID::FrontDelts],
        equipment: Equipment::ParallelBars,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Intermediate,
        variants: &[
            ExerciseVariant {
                name: "Ring Dip",
                equipment: Some(Equipment::GymnasticRings),
                difficulty: Some(Difficulty::Advanced),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Fly",
        target: MuscleID::Pecs,
        secondary: &[MuscleID::FrontDelts],
        equipment: Equipment::Dumbbell,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Cable Crossover",
                equipment: Some(Equipment::Cable),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Fly",
                secondary: Some(&[]),
                equipment: Some(Equipment::Machine),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Overhead Press",
        target: MuscleID::FrontDelts,
        secondary: &[MuscleID::SideDelts, MuscleID::Triceps],
        equipment: Equipment::Barbell,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Intermediate,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Shoulder Press",
                equipment: Some(Equipment::Dumbbell),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Press",
                equipment: Some(Equipment::Kettlebell),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Shoulder Press",
                equipment: Some(Equipment::Machine),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Pike Push-Up",
        target: MuscleID::FrontDelts,
        secondary: &[MuscleID::Triceps, MuscleID::SideDelts],
        equipment: Equipment::None,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Elevated Pike Push-Up",
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Handstand Push-Up",
                difficulty: Some(Difficulty::Advanced),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Lateral Raise",
        target: MuscleID::SideDelts,
        secondary: &[],
        equipment: Equipment::Dumbbell,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Band Lateral Raise",
                equipment: Some(Equipment::ResistanceBand),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Cable Lateral Raise",
                equipment: Some(Equipment::Cable),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Arm Circles",
        target: MuscleID::SideDelts,
        secondary: &[MuscleID::FrontDelts, MuscleID::RearDelts],
        equipment: Equipment::None,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Cable Face Pull",
        target: MuscleID::RearDelts,
        secondary: &[MuscleID::Traps],
        equipment: Equipment::Cable,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Band Face Pull",
                equipment: Some(Equipment::ResistanceBand),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Reverse Fly",
        target: MuscleID::RearDelts,
        secondary: &[MuscleID::Traps],
        equipment: Equipment::Dumbbell,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Prone T Raise",
        target: MuscleID::RearDelts,
        secondary: &[MuscleID::Traps],
        equipment: Equipment::None,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Pull-Up",
        target: MuscleID::Lats,
        secondary: &[MuscleID::Biceps, MuscleID::RearDelts],
        equipment: Equipment::PullUpBar,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Intermediate,
        variants: &[
            ExerciseVariant {
                name: "Negative Pull-Up",
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Chin-Up",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Lat Pulldown",
        target: MuscleID::Lats,
        secondary: &[MuscleID::Biceps, MuscleID::RearDelts],
        equipment: Equipment::Cable,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Barbell Row",
        target: MuscleID::Lats,
        secondary: &[
            MuscleID::Traps,
            MuscleID::RearDelts,
            MuscleID::Biceps,
            MuscleID::ErectorSpinae,
        ],
        equipment: Equipment::Barbell,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Intermediate,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Row",
                secondary: Some(&[MuscleID::Traps, MuscleID::RearDelts, MuscleID::Biceps]),
                equipment: Some(Equipment::Dumbbell),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Row",
                secondary: Some(&[MuscleID::Traps, MuscleID::RearDelts, MuscleID::Biceps]),
                equipment: Some(Equipment::Kettlebell),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Seated Cable Row",
                secondary: Some(&[MuscleID::Traps, MuscleID::RearDelts, MuscleID::Biceps]),
                equipment: Some(Equipment::Cable),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Doorway Row",
        target: MuscleID::Lats,
        secondary: &[MuscleID::Biceps, MuscleID::RearDelts],
        equipment: Equipment::None,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Table Inverted Row",
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Prone Y Raise",
        target: MuscleID::Traps,
        secondary: &[MuscleID::RearDelts],
        equipment: Equipment::None,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Prone W Raise",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Shrug",
        target: MuscleID::Traps,
        secondary: &[MuscleID::Forearms],
        equipment: Equipment::Barbell,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Shrug",
                equipment: Some(Equipment::Dumbbell),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Trap Bar Shrug",
                equipment: Some(Equipment::TrapBar),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Farmer's Carry",
        target: MuscleID::Forearms,
        secondary: &[MuscleID::Traps, MuscleID::Abs],
        equipment: Equipment::Dumbbell,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Kettlebell Farmer's Carry",
                equipment: Some(Equipment::Kettlebell),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Curl",
        target: MuscleID::Biceps,
        secondary: &[MuscleID::Forearms],
        equipment: Equipment::Barbell,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Band Curl",
                equipment: Some(Equipment::ResistanceBand),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Cable Curl",
                equipment: Some(Equipment::Cable),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Curl",
                equipment: Some(Equipment::Dumbbell),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Hammer Curl",
                equipment: Some(Equipment::Dumbbell),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Doorway Curl",
        target: MuscleID::Biceps,
        secondary: &[MuscleID::Forearms],
        equipment: Equipment::None,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Towel Isometric Curl",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Cable Triceps Pushdown",
        target: MuscleID::Triceps,
        secondary: &[],
        equipment: Equipment::Cable,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Band Triceps Pushdown",
                equipment: Some(Equipment::ResistanceBand),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Skull Crusher",
        target: MuscleID::Triceps,
        secondary: &[],
        equipment: Equipment::Barbell,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Intermediate,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Overhead Triceps Extension",
                equipment: Some(Equipment::Dumbbell),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Close-Grip Bench Press",
        target: MuscleID::Triceps,
        secondary: &[MuscleID::Pecs, MuscleID::FrontDelts],
        equipment: Equipment::Barbell,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Intermediate,
        variants: &[],
    },
    BaseExercise {
        name: "Bench Dip",
        target: MuscleID::Triceps,
        secondary: &[MuscleID::Pecs, MuscleID::FrontDelts],
        equipment: Equipment::None,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Diamond Push-Up",
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Wrist Curl",
        target: MuscleID::Forearms,
        secondary: &[],
        equipment: Equipment::Dumbbell,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Plank",
        target: MuscleID::Abs,
        secondary: &[],
        equipment: Equipment::None,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Side Plank",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Crunch",
        target: MuscleID::Abs,
        secondary: &[],
        equipment: Equipment::None,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Dead Bug",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Hollow Hold",
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Cable Crunch",
        target: MuscleID::Abs,
        secondary: &[],
        equipment: Equipment::Cable,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Hanging Leg Raise",
        target: MuscleID::Abs,
        secondary: &[MuscleID::Forearms],
        equipment: Equipment::PullUpBar,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Intermediate,
        variants: &[],
    },
    BaseExercise {
        name: "Back Extension",
        target: MuscleID::ErectorSpinae,
        secondary: &[MuscleID::Glutes, MuscleID::Hamstrings],
        equipment: Equipment::Machine,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Superman",
        target: MuscleID::ErectorSpinae,
        secondary: &[MuscleID::Glutes],
        equipment: Equipment::None,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Barbell Back Squat",
        target: MuscleID::Quads,
        secondary: &[MuscleID::Glutes, MuscleID::Adductors, MuscleID::ErectorSpinae],
        equipment: Equipment::Barbell,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Intermediate,
        variants: &[
            ExerciseVariant {
                name: "Barbell Front Squat",
                difficulty: Some(Difficulty::Advanced),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Goblet Squat",
                secondary: Some(&[MuscleID::Glutes, MuscleID::Adductors]),
                equipment: Some(Equipment::Kettlebell),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Leg Press",
                secondary: Some(&[MuscleID::Glutes, MuscleID::Adductors]),
                equipment: Some(Equipment::Machine),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Bodyweight Squat",
        target: MuscleID::Quads,
        secondary: &[MuscleID::Glutes, MuscleID::Adductors],
        equipment: Equipment::None,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Jump Squat",
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Pistol Squat",
                difficulty: Some(Difficulty::Advanced),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Reverse Lunge",
        target: MuscleID::Quads,
        secondary: &[MuscleID::Glutes, MuscleID::Hamstrings],
        equipment: Equipment::None,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Bulgarian Split Squat",
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Bulgarian Split Squat",
                equipment: Some(Equipment::Dumbbell),
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Reverse Lunge",
                equipment: Some(Equipment::Dumbbell),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Box Step-Up",
                equipment: Some(Equipment::Box),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Leg Extension",
        target: MuscleID::Quads,
        secondary: &[],
        equipment: Equipment::Machine,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Wall Sit",
        target: MuscleID::Quads,
        secondary: &[MuscleID::Glutes],
        equipment: Equipment::None,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Barbell Romanian Deadlift",
        target: MuscleID::Hamstrings,
        secondary: &[MuscleID::Glutes, MuscleID::ErectorSpinae],
        equipment: Equipment::Barbell,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Intermediate,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Romanian Deadlift",
                equipment: Some(Equipment::Dumbbell),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Romanian Deadlift",
                equipment: Some(Equipment::Kettlebell),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Deadlift",
        target: MuscleID::Glutes,
        secondary: &[
            MuscleID::Hamstrings,
            MuscleID::ErectorSpinae,
            MuscleID::Quads,
            MuscleID::Traps,
            MuscleID::Forearms,
        ],
        equipment: Equipment::Barbell,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Intermediate,
        variants: &[
            ExerciseVariant {
                name: "Trap Bar Deadlift",
                equipment: Some(Equipment::TrapBar),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Good Morning",
        target: MuscleID::Hamstrings,
        secondary: &[MuscleID::ErectorSpinae, MuscleID::Glutes],
        equipment: Equipment::Barbell,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Advanced,
        variants: &[],
    },
    BaseExercise {
        name: "Single-Leg Romanian Deadlift",
        target: MuscleID::Hamstrings,
        secondary: &[MuscleID::Glutes],
        equipment: Equipment::None,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Lying Leg Curl",
        target: MuscleID::Hamstrings,
        secondary: &[],
        equipment: Equipment::Machine,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Nordic Curl",
                equipment: Some(Equipment::None),
                difficulty: Some(Difficulty::Advanced),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Slider Leg Curl",
                equipment: Some(Equipment::Sliders),
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Hip Thrust",
        target: MuscleID::Glutes,
        secondary: &[MuscleID::Hamstrings],
        equipment: Equipment::Barbell,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Intermediate,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Hip Thrust",
                equipment: Some(Equipment::Dumbbell),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Glute Bridge",
        target: MuscleID::Glutes,
        secondary: &[MuscleID::Hamstrings],
        equipment: Equipment::None,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Single-Leg Glute Bridge",
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Kettlebell Swing",
        target: MuscleID::Glutes,
        secondary: &[MuscleID::Hamstrings, MuscleID::ErectorSpinae],
        equipment: Equipment::Kettlebell,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Intermediate,
        variants: &[],
    },
    BaseExercise {
        name: "Standing Calf Raise",
        target: MuscleID::Calves,
        secondary: &[],
        equipment: Equipment::Machine,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Bodyweight Calf Raise",
                equipment: Some(Equipment::None),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Calf Raise",
                equipment: Some(Equipment::Dumbbell),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Single-Leg Calf Raise",
                equipment: Some(Equipment::None),
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Side-Lying Leg Raise",
        target: MuscleID::Abductors,
        secondary: &[],
        equipment: Equipment::None,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[
            ExerciseVariant {
                name: "Band Lateral Walk",
                equipment: Some(Equipment::ResistanceBand),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Hip Abduction Machine",
                equipment: Some(Equipment::Machine),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Sumo Squat",
        target: MuscleID::Adductors,
        secondary: &[MuscleID::Quads, MuscleID::Glutes],
        equipment: Equipment::None,
        mechanic: Mechanic::Compound,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Hip Adduction Machine",
        target: MuscleID::Adductors,
        secondary: &[],
        equipment: Equipment::Machine,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Beginner,
        variants: &[],
    },
    BaseExercise {
        name: "Copenhagen Plank",
        target: MuscleID::Adductors,
        secondary: &[MuscleID::Abs],
        equipment: Equipment::None,
        mechanic: Mechanic::Isolation,
        difficulty: Difficulty::Advanced,
        variants: &[],
    },
];
