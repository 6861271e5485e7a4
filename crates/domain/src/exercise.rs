use std::{fmt, slice::Iter};

use derive_more::Deref;
use uuid::Uuid;

use crate::Name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub id: ExerciseID,
    pub name: Name,
    pub body_part: BodyPart,
    pub target: MuscleID,
    pub secondary: Vec<MuscleID>,
    pub equipment: Equipment,
    pub mechanic: Mechanic,
    pub difficulty: Difficulty,
}

impl ExerciseRecord {
    /// Target muscle followed by the secondary muscles.
    pub fn muscles(&self) -> impl Iterator<Item = MuscleID> + '_ {
        std::iter::once(self.target).chain(self.secondary.iter().copied())
    }

    #[must_use]
    pub fn works(&self, muscle: MuscleID) -> bool {
        self.muscles().any(|m| m == muscle)
    }

    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.mechanic == Mechanic::Compound
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl fmt::Display for ExerciseID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleID {
    // Neck
    Neck = 1,
    // Chest
    Pecs = 11,
    // Back
    Traps = 21,
    Lats = 22,
    // Shoulders
    FrontDelts = 31,
    SideDelts = 32,
    RearDelts = 33,
    // Upper arms
    Biceps = 41,
    Triceps = 42,
    // Forearms
    Forearms = 51,
    // Waist
    Abs = 61,
    ErectorSpinae = 62,
    // Hips
    Glutes = 71,
    Abductors = 72,
    // Thighs
    Quads = 81,
    Hamstrings = 82,
    Adductors = 83,
    // Calves
    Calves = 91,
}

impl Property for MuscleID {
    fn iter() -> Iter<'static, MuscleID> {
        static MUSCLES: [MuscleID; 18] = [
            MuscleID::Neck,
            MuscleID::Pecs,
            MuscleID::Traps,
            MuscleID::Lats,
            MuscleID::FrontDelts,
            MuscleID::SideDelts,
            MuscleID::RearDelts,
            MuscleID::Biceps,
            MuscleID::Triceps,
            MuscleID::Forearms,
            MuscleID::Abs,
            MuscleID::ErectorSpinae,
            MuscleID::Glutes,
            MuscleID::Abductors,
            MuscleID::Quads,
            MuscleID::Hamstrings,
            MuscleID::Adductors,
            MuscleID::Calves,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleID::Neck => "Neck",
            MuscleID::Pecs => "Pecs",
            MuscleID::Traps => "Traps",
            MuscleID::Lats => "Lats",
            MuscleID::FrontDelts => "Front Delts",
            MuscleID::SideDelts => "Side Delts",
            MuscleID::RearDelts => "Rear Delts",
            MuscleID::Biceps => "Biceps",
            MuscleID::Triceps => "Triceps",
            MuscleID::Forearms => "Forearms",
            MuscleID::Abs => "Abs",
            MuscleID::ErectorSpinae => "Erector Spinae",
            MuscleID::Glutes => "Glutes",
            MuscleID::Abductors => "Abductors",
            MuscleID::Quads => "Quads",
            MuscleID::Hamstrings => "Hamstrings",
            MuscleID::Adductors => "Adductors",
            MuscleID::Calves => "Calves",
        }
    }
}

impl MuscleID {
    #[must_use]
    pub fn region(self) -> Region {
        match self {
            MuscleID::Neck
            | MuscleID::Pecs
            | MuscleID::Traps
            | MuscleID::Lats
            | MuscleID::FrontDelts
            | MuscleID::SideDelts
            | MuscleID::RearDelts
            | MuscleID::Biceps
            | MuscleID::Triceps
            | MuscleID::Forearms => Region::Upper,
            MuscleID::Abs | MuscleID::ErectorSpinae => Region::Core,
            MuscleID::Glutes
            | MuscleID::Abductors
            | MuscleID::Quads
            | MuscleID::Hamstrings
            | MuscleID::Adductors
            | MuscleID::Calves => Region::Lower,
        }
    }

    #[must_use]
    pub fn body_part(self) -> BodyPart {
        match self {
            MuscleID::Neck => BodyPart::Neck,
            MuscleID::Pecs => BodyPart::Chest,
            MuscleID::Traps | MuscleID::Lats | MuscleID::ErectorSpinae => BodyPart::Back,
            MuscleID::FrontDelts | MuscleID::SideDelts | MuscleID::RearDelts => {
                BodyPart::Shoulders
            }
            MuscleID::Biceps | MuscleID::Triceps => BodyPart::UpperArms,
            MuscleID::Forearms => BodyPart::LowerArms,
            MuscleID::Abs => BodyPart::Waist,
            MuscleID::Glutes
            | MuscleID::Abductors
            | MuscleID::Quads
            | MuscleID::Hamstrings
            | MuscleID::Adductors => BodyPart::UpperLegs,
            MuscleID::Calves => BodyPart::LowerLegs,
        }
    }

    /// Identifier used on the wire, e.g. `front_delts`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            MuscleID::Neck => "neck",
            MuscleID::Pecs => "pecs",
            MuscleID::Traps => "traps",
            MuscleID::Lats => "lats",
            MuscleID::FrontDelts => "front_delts",
            MuscleID::SideDelts => "side_delts",
            MuscleID::RearDelts => "rear_delts",
            MuscleID::Biceps => "biceps",
            MuscleID::Triceps => "triceps",
            MuscleID::Forearms => "forearms",
            MuscleID::Abs => "abs",
            MuscleID::ErectorSpinae => "erector_spinae",
            MuscleID::Glutes => "glutes",
            MuscleID::Abductors => "abductors",
            MuscleID::Quads => "quads",
            MuscleID::Hamstrings => "hamstrings",
            MuscleID::Adductors => "adductors",
            MuscleID::Calves => "calves",
        }
    }

    /// Accepts wire identifiers as well as display names.
    #[must_use]
    pub fn parse(value: &str) -> Option<MuscleID> {
        let value = value.trim().to_lowercase().replace([' ', '-'], "_");
        MuscleID::iter()
            .find(|m| m.slug() == value || m.slug().trim_end_matches('s') == value)
            .copied()
    }
}

impl fmt::Display for MuscleID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Region {
    Upper,
    Core,
    Lower,
}

impl Region {
    pub fn muscles(self) -> impl Iterator<Item = MuscleID> {
        MuscleID::iter().copied().filter(move |m| m.region() == self)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BodyPart {
    Back,
    Chest,
    LowerArms,
    LowerLegs,
    Neck,
    Shoulders,
    UpperArms,
    UpperLegs,
    Waist,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    None,
    Barbell,
    Box,
    Cable,
    Dumbbell,
    ExerciseBall,
    GymnasticRings,
    Kettlebell,
    Machine,
    ParallelBars,
    PullUpBar,
    ResistanceBand,
    Sliders,
    TrapBar,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 14] = [
            Equipment::None,
            Equipment::Barbell,
            Equipment::Box,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::ExerciseBall,
            Equipment::GymnasticRings,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::ParallelBars,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
            Equipment::Sliders,
            Equipment::TrapBar,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::None => "No Equipment",
            Equipment::Barbell => "Barbell",
            Equipment::Box => "Box",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::ExerciseBall => "Exercise Ball",
            Equipment::GymnasticRings => "Gymnastic Rings",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::ParallelBars => "Parallel Bars",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::Sliders => "Sliders",
            Equipment::TrapBar => "Trap Bar",
        }
    }
}

impl Equipment {
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Equipment::None => "body_weight",
            Equipment::Barbell => "barbell",
            Equipment::Box => "box",
            Equipment::Cable => "cable",
            Equipment::Dumbbell => "dumbbell",
            Equipment::ExerciseBall => "exercise_ball",
            Equipment::GymnasticRings => "gymnastic_rings",
            Equipment::Kettlebell => "kettlebell",
            Equipment::Machine => "machine",
            Equipment::ParallelBars => "parallel_bars",
            Equipment::PullUpBar => "pull_up_bar",
            Equipment::ResistanceBand => "resistance_band",
            Equipment::Sliders => "sliders",
            Equipment::TrapBar => "trap_bar",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Equipment> {
        let value = value.trim().to_lowercase().replace([' ', '-'], "_");
        Equipment::iter().find(|e| e.slug() == value).copied()
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Mechanic {
    Compound,
    Isolation,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
