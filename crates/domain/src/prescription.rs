use std::{fmt, ops::RangeInclusive};

use derive_more::{Display, Into};

use crate::{Experience, Goal, Mechanic};

/// Sets, reps, rest and effort prescribed for every exercise of a goal.
#[derive(Debug, Clone, PartialEq)]
pub struct Prescription {
    pub sets: RangeInclusive<u32>,
    pub reps: RepRange,
    pub rest_seconds: RangeInclusive<u32>,
    pub rpe: RPE,
}

impl Prescription {
    #[must_use]
    pub fn for_goal(goal: Goal) -> Prescription {
        match goal {
            Goal::Hypertrophy => Prescription {
                sets: 3..=4,
                reps: RepRange(Reps(8), Reps(12)),
                rest_seconds: 60..=90,
                rpe: RPE::EIGHT,
            },
            Goal::Strength => Prescription {
                sets: 3..=5,
                reps: RepRange(Reps(3), Reps(6)),
                rest_seconds: 120..=180,
                rpe: RPE::EIGHT,
            },
            Goal::FatLoss => Prescription {
                sets: 3..=3,
                reps: RepRange(Reps(12), Reps(15)),
                rest_seconds: 45..=60,
                rpe: RPE::SEVEN,
            },
            Goal::General => Prescription {
                sets: 3..=3,
                reps: RepRange(Reps(10), Reps(10)),
                rest_seconds: 60..=90,
                rpe: RPE::SEVEN,
            },
        }
    }

    /// Compound movements get the upper bound, isolation movements the lower bound.
    /// Beginners drop one set, but never below the lower bound.
    #[must_use]
    pub fn target_sets(&self, mechanic: Mechanic, experience: Experience) -> u32 {
        let sets = match mechanic {
            Mechanic::Compound => *self.sets.end(),
            Mechanic::Isolation => *self.sets.start(),
        };
        match experience {
            Experience::Beginner => sets.saturating_sub(1).max(*self.sets.start()),
            Experience::Intermediate | Experience::Advanced => sets,
        }
    }

    #[must_use]
    pub fn rest_seconds(&self, mechanic: Mechanic) -> u32 {
        match mechanic {
            Mechanic::Compound => *self.rest_seconds.end(),
            Mechanic::Isolation => *self.rest_seconds.start(),
        }
    }
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..100).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 99")]
    OutOfRange,
    #[error("Reps must be an integer or a range like 8-12")]
    ParseError,
    #[error("Rep range must not decrease ({0} > {1})")]
    Decreasing(u32, u32),
}

/// Target repetitions, displayed as `8-12` or as a single number when both bounds match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepRange(Reps, Reps);

impl RepRange {
    pub fn new(min: Reps, max: Reps) -> Result<Self, RepsError> {
        if min > max {
            return Err(RepsError::Decreasing(min.0, max.0));
        }
        Ok(Self(min, max))
    }

    #[must_use]
    pub fn min(&self) -> Reps {
        self.0
    }

    #[must_use]
    pub fn max(&self) -> Reps {
        self.1
    }
}

impl TryFrom<&str> for RepRange {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| RepsError::ParseError)
                .and_then(Reps::new)
        };
        match value.split_once('-') {
            Some((min, max)) => RepRange::new(parse(min)?, parse(max)?),
            None => {
                let reps = parse(value)?;
                Ok(RepRange(reps, reps))
            }
        }
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == self.1 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{}-{}", self.0, self.1)
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RPE(u8);

impl RPE {
    pub const SIX: RPE = RPE(60);
    pub const SEVEN: RPE = RPE(70);
    pub const EIGHT: RPE = RPE(80);
    pub const NINE: RPE = RPE(90);
    pub const TEN: RPE = RPE(100);

    pub fn new(value: f32) -> Result<Self, RPEError> {
        if !(0.0..=10.0).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0).round() as u8;

        if v % 5 != 0 {
            return Err(RPEError::InvalidResolution);
        }

        Ok(Self(v))
    }
}

impl From<RPE> for f32 {
    fn from(value: RPE) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl fmt::Display for RPE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 0.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Goal::Hypertrophy, "8-12", 3..=4, 60..=90)]
    #[case(Goal::Strength, "3-6", 3..=5, 120..=180)]
    #[case(Goal::FatLoss, "12-15", 3..=3, 45..=60)]
    #[case(Goal::General, "10", 3..=3, 60..=90)]
    fn test_prescription_for_goal(
        #[case] goal: Goal,
        #[case] reps: &str,
        #[case] sets: RangeInclusive<u32>,
        #[case] rest_seconds: RangeInclusive<u32>,
    ) {
        let prescription = Prescription::for_goal(goal);
        assert_eq!(prescription.reps.to_string(), reps);
        assert_eq!(prescription.sets, sets);
        assert_eq!(prescription.rest_seconds, rest_seconds);
    }

    #[rstest]
    #[case(Goal::Hypertrophy, Mechanic::Compound, Experience::Intermediate, 4)]
    #[case(Goal::Hypertrophy, Mechanic::Isolation, Experience::Intermediate, 3)]
    #[case(Goal::Hypertrophy, Mechanic::Compound, Experience::Beginner, 3)]
    #[case(Goal::Hypertrophy, Mechanic::Isolation, Experience::Beginner, 3)]
    #[case(Goal::Strength, Mechanic::Compound, Experience::Advanced, 5)]
    #[case(Goal::Strength, Mechanic::Compound, Experience::Beginner, 4)]
    #[case(Goal::FatLoss, Mechanic::Compound, Experience::Beginner, 3)]
    fn test_prescription_target_sets(
        #[case] goal: Goal,
        #[case] mechanic: Mechanic,
        #[case] experience: Experience,
        #[case] expected: u32,
    ) {
        let prescription = Prescription::for_goal(goal);
        assert_eq!(prescription.target_sets(mechanic, experience), expected);
        assert!(prescription.sets.contains(&expected));
    }

    #[rstest]
    #[case(Goal::Strength, Mechanic::Compound, 180)]
    #[case(Goal::Strength, Mechanic::Isolation, 120)]
    #[case(Goal::FatLoss, Mechanic::Compound, 60)]
    fn test_prescription_rest_seconds(
        #[case] goal: Goal,
        #[case] mechanic: Mechanic,
        #[case] expected: u32,
    ) {
        assert_eq!(Prescription::for_goal(goal).rest_seconds(mechanic), expected);
    }

    #[rstest]
    #[case("8-12", Ok(RepRange(Reps(8), Reps(12))))]
    #[case(" 10 ", Ok(RepRange(Reps(10), Reps(10))))]
    #[case("12-8", Err(RepsError::Decreasing(12, 8)))]
    #[case("0", Err(RepsError::OutOfRange))]
    #[case("ten", Err(RepsError::ParseError))]
    fn test_rep_range_try_from(#[case] input: &str, #[case] expected: Result<RepRange, RepsError>) {
        assert_eq!(RepRange::try_from(input), expected);
    }

    #[rstest]
    #[case(8.0, Ok(RPE::EIGHT))]
    #[case(7.5, Ok(RPE(75)))]
    #[case(7.2, Err(RPEError::InvalidResolution))]
    #[case(10.5, Err(RPEError::OutOfRange))]
    fn test_rpe_new(#[case] input: f32, #[case] expected: Result<RPE, RPEError>) {
        assert_eq!(RPE::new(input), expected);
    }

    #[test]
    fn test_rpe_display() {
        assert_eq!(RPE::EIGHT.to_string(), "8");
        assert_eq!(RPE(75).to_string(), "7.5");
    }
}
