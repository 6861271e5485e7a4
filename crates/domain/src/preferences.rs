use std::collections::BTreeSet;

use chrono::Weekday;

use crate::{Difficulty, Equipment, MuscleID, ReadError, UpdateError, UserID, ValidationError};

#[allow(async_fn_in_trait)]
pub trait PreferencesRepository {
    async fn read_preferences(&self, user_id: UserID) -> Result<UserPreferences, ReadError>;
    async fn write_preferences(
        &self,
        user_id: UserID,
        preferences: UserPreferences,
    ) -> Result<UserPreferences, UpdateError>;
}

/// Training preferences captured at the end of onboarding.
///
/// Weekdays and injuries are kept as entered and checked by [`validate`](Self::validate),
/// which every generation runs before touching the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPreferences {
    pub goal: Goal,
    pub experience: Experience,
    pub equipment: EquipmentAccess,
    pub injuries: String,
    pub frequency: u8,
    pub workout_days: Vec<u8>,
}

impl UserPreferences {
    pub const MIN_FREQUENCY: u8 = 3;
    pub const MAX_FREQUENCY: u8 = 6;

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.training_days()?;
        self.injury_set()?;
        Ok(())
    }

    /// Selected weekdays ordered from Sunday to Saturday.
    pub fn training_days(&self) -> Result<Vec<Weekday>, ValidationError> {
        if !(Self::MIN_FREQUENCY..=Self::MAX_FREQUENCY).contains(&self.frequency) {
            return Err(ValidationError::FrequencyOutOfRange(self.frequency));
        }

        let mut days = BTreeSet::new();

        for day in &self.workout_days {
            if *day > 6 {
                return Err(ValidationError::WeekdayOutOfRange(*day));
            }
            if !days.insert(*day) {
                return Err(ValidationError::DuplicateWeekday(*day));
            }
        }

        if days.len() != usize::from(self.frequency) {
            return Err(ValidationError::DayCountMismatch {
                frequency: self.frequency,
                days: days.len(),
            });
        }

        days.into_iter().map(weekday_from_index).collect()
    }

    pub fn injury_set(&self) -> Result<BTreeSet<Injury>, ValidationError> {
        Injury::parse_list(&self.injuries)
    }

    pub fn excluded_muscles(&self) -> Result<BTreeSet<MuscleID>, ValidationError> {
        Ok(self
            .injury_set()?
            .into_iter()
            .flat_map(|injury| injury.excluded_muscles().iter().copied())
            .collect())
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Goal {
    Hypertrophy,
    Strength,
    FatLoss,
    General,
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
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    #[must_use]
    pub fn max_difficulty(self) -> Difficulty {
        match self {
            Experience::Beginner => Difficulty::Beginner,
            Experience::Intermediate => Difficulty::Intermediate,
            Experience::Advanced => Difficulty::Advanced,
        }
    }
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
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentAccess {
    Bodyweight,
    HomeGym,
    FullGym,
}

impl EquipmentAccess {
    /// Each level of access includes everything available at the levels below it.
    #[must_use]
    pub fn satisfies(self, equipment: Equipment) -> bool {
        match self {
            EquipmentAccess::Bodyweight => equipment == Equipment::None,
            EquipmentAccess::HomeGym => matches!(
                equipment,
                Equipment::None
                    | Equipment::Box
                    | Equipment::Dumbbell
                    | Equipment::ExerciseBall
                    | Equipment::Kettlebell
                    | Equipment::PullUpBar
                    | Equipment::ResistanceBand
                    | Equipment::Sliders
            ),
            EquipmentAccess::FullGym => true,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Injury {
    LowerBack,
    Knee,
    Shoulder,
    Elbow,
    Wrist,
    Neck,
    Hip,
    Ankle,
}

impl Injury {
    #[must_use]
    pub fn excluded_muscles(self) -> &'static [MuscleID] {
        match self {
            Injury::LowerBack => &[MuscleID::ErectorSpinae],
            Injury::Knee => &[MuscleID::Quads],
            Injury::Shoulder => &[MuscleID::FrontDelts, MuscleID::SideDelts],
            Injury::Elbow | Injury::Wrist => &[MuscleID::Forearms],
            Injury::Neck => &[MuscleID::Neck, MuscleID::Traps],
            Injury::Hip => &[MuscleID::Adductors, MuscleID::Abductors],
            Injury::Ankle => &[MuscleID::Calves],
        }
    }

    /// Parses a single tag such as `lower_back`, `Lower back` or `knees`.
    pub fn parse(tag: &str) -> Result<Injury, ValidationError> {
        let normalized = tag.trim().to_lowercase().replace([' ', '-'], "_");
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        match singular {
            "lower_back" | "back" => Ok(Injury::LowerBack),
            "knee" => Ok(Injury::Knee),
            "shoulder" => Ok(Injury::Shoulder),
            "elbow" => Ok(Injury::Elbow),
            "wrist" => Ok(Injury::Wrist),
            "neck" => Ok(Injury::Neck),
            "hip" => Ok(Injury::Hip),
            "ankle" => Ok(Injury::Ankle),
            _ => Err(ValidationError::UnknownInjury(tag.trim().to_string())),
        }
    }

    /// Parses a comma separated list of tags, where `none` or an empty string means no injuries.
    pub fn parse_list(text: &str) -> Result<BTreeSet<Injury>, ValidationError> {
        text.split([',', ';', '/'])
            .map(str::trim)
            .filter(|tag| !tag.is_empty() && !tag.eq_ignore_ascii_case("none"))
            .map(Injury::parse)
            .collect()
    }
}

pub fn weekday_from_index(index: u8) -> Result<Weekday, ValidationError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(ValidationError::WeekdayOutOfRange(index)),
    }
}

#[must_use]
pub fn weekday_index(weekday: Weekday) -> u8 {
    #[allow(clippy::cast_possible_truncation)]
    let index = weekday.num_days_from_sunday() as u8;
    index
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn preferences(frequency: u8, workout_days: &[u8]) -> UserPreferences {
        UserPreferences {
            goal: Goal::Hypertrophy,
            experience: Experience::Intermediate,
            equipment: EquipmentAccess::FullGym,
            injuries: String::from("none"),
            frequency,
            workout_days: workout_days.to_vec(),
        }
    }

    #[rstest]
    #[case(3, &[5, 1, 3], Ok(vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]))]
    #[case(4, &[1, 2, 4, 5], Ok(vec![Weekday::Mon, Weekday::Tue, Weekday::Thu, Weekday::Fri]))]
    #[case(6, &[6, 0, 1, 2, 3, 4], Ok(vec![
        Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Sat
    ]))]
    #[case(2, &[1, 3], Err(ValidationError::FrequencyOutOfRange(2)))]
    #[case(7, &[0, 1, 2, 3, 4, 5, 6], Err(ValidationError::FrequencyOutOfRange(7)))]
    #[case(4, &[1, 2, 3], Err(ValidationError::DayCountMismatch { frequency: 4, days: 3 }))]
    #[case(3, &[1, 3, 7], Err(ValidationError::WeekdayOutOfRange(7)))]
    #[case(3, &[1, 3, 3], Err(ValidationError::DuplicateWeekday(3)))]
    fn test_training_days(
        #[case] frequency: u8,
        #[case] workout_days: &[u8],
        #[case] expected: Result<Vec<Weekday>, ValidationError>,
    ) {
        assert_eq!(preferences(frequency, workout_days).training_days(), expected);
    }

    #[rstest]
    #[case("none", Ok(BTreeSet::new()))]
    #[case("", Ok(BTreeSet::new()))]
    #[case("lower_back", Ok(BTreeSet::from([Injury::LowerBack])))]
    #[case("Lower back", Ok(BTreeSet::from([Injury::LowerBack])))]
    #[case("knees, shoulder", Ok(BTreeSet::from([Injury::Knee, Injury::Shoulder])))]
    #[case("wrist; ankle", Ok(BTreeSet::from([Injury::Wrist, Injury::Ankle])))]
    #[case("elbow, toe", Err(ValidationError::UnknownInjury(String::from("toe"))))]
    fn test_injury_parse_list(
        #[case] text: &str,
        #[case] expected: Result<BTreeSet<Injury>, ValidationError>,
    ) {
        assert_eq!(Injury::parse_list(text), expected);
    }

    #[test]
    fn test_excluded_muscles() {
        let mut prefs = preferences(3, &[1, 3, 5]);
        prefs.injuries = String::from("lower_back, knee");
        assert_eq!(
            prefs.excluded_muscles(),
            Ok(BTreeSet::from([MuscleID::ErectorSpinae, MuscleID::Quads]))
        );
    }

    #[test]
    fn test_validate_rejects_unknown_injury() {
        let mut prefs = preferences(3, &[1, 3, 5]);
        prefs.injuries = String::from("heart");
        assert_eq!(
            prefs.validate(),
            Err(ValidationError::UnknownInjury(String::from("heart")))
        );
    }

    #[rstest]
    #[case(EquipmentAccess::Bodyweight, Equipment::None, true)]
    #[case(EquipmentAccess::Bodyweight, Equipment::PullUpBar, false)]
    #[case(EquipmentAccess::HomeGym, Equipment::Dumbbell, true)]
    #[case(EquipmentAccess::HomeGym, Equipment::None, true)]
    #[case(EquipmentAccess::HomeGym, Equipment::Barbell, false)]
    #[case(EquipmentAccess::HomeGym, Equipment::Machine, false)]
    #[case(EquipmentAccess::FullGym, Equipment::Machine, true)]
    #[case(EquipmentAccess::FullGym, Equipment::None, true)]
    fn test_equipment_access_satisfies(
        #[case] access: EquipmentAccess,
        #[case] equipment: Equipment,
        #[case] expected: bool,
    ) {
        assert_eq!(access.satisfies(equipment), expected);
    }

    #[test]
    fn test_enum_strings() {
        assert_eq!(Goal::FatLoss.to_string(), "fat_loss");
        assert_eq!(Goal::from_str("fat_loss"), Ok(Goal::FatLoss));
        assert_eq!(EquipmentAccess::from_str("home_gym"), Ok(EquipmentAccess::HomeGym));
        assert_eq!(Experience::from_str("advanced"), Ok(Experience::Advanced));
        assert!(Goal::from_str("bulk").is_err());
    }

    #[rstest]
    #[case(0, Weekday::Sun)]
    #[case(1, Weekday::Mon)]
    #[case(6, Weekday::Sat)]
    fn test_weekday_index_round_trip(#[case] index: u8, #[case] weekday: Weekday) {
        assert_eq!(weekday_from_index(index), Ok(weekday));
        assert_eq!(weekday_index(weekday), index);
    }
}
