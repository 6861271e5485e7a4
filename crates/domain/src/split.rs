use std::collections::{BTreeMap, BTreeSet};

use chrono::Weekday;
use log::debug;

use crate::{MuscleID, UserPreferences, ValidationError, weekday_index};

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
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SplitCategory {
    FullBody,
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
    Accessory,
}

impl SplitCategory {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SplitCategory::FullBody => "Full Body",
            SplitCategory::Upper => "Upper Body",
            SplitCategory::Lower => "Lower Body",
            SplitCategory::Push => "Push",
            SplitCategory::Pull => "Pull",
            SplitCategory::Legs => "Legs",
            SplitCategory::Accessory => "Accessory",
        }
    }

    #[must_use]
    pub fn template(self) -> &'static Template {
        match self {
            SplitCategory::FullBody => &FULL_BODY,
            SplitCategory::Upper => &UPPER,
            SplitCategory::Lower => &LOWER,
            SplitCategory::Push => &PUSH,
            SplitCategory::Pull => &PULL,
            SplitCategory::Legs => &LEGS,
            SplitCategory::Accessory => &ACCESSORY,
        }
    }
}

/// Muscles a split category works.
///
/// Every primary muscle gets an exercise of its own, every secondary muscle is worked at least
/// once, and accessory muscles are used to fill the remaining slots of a day.
#[derive(Debug, PartialEq, Eq)]
pub struct Template {
    pub primary: &'static [MuscleID],
    pub secondary: &'static [MuscleID],
    pub accessory: &'static [MuscleID],
}

const FULL_BODY: Template = Template {
    primary: &[MuscleID::Quads, MuscleID::Pecs, MuscleID::Lats],
    secondary: &[MuscleID::Hamstrings],
    accessory: &[MuscleID::SideDelts, MuscleID::Abs],
};

const UPPER: Template = Template {
    primary: &[MuscleID::Pecs, MuscleID::Lats],
    secondary: &[MuscleID::SideDelts, MuscleID::Biceps],
    accessory: &[
        MuscleID::Triceps,
        MuscleID::RearDelts,
        MuscleID::FrontDelts,
        MuscleID::Traps,
    ],
};

const LOWER: Template = Template {
    primary: &[MuscleID::Quads, MuscleID::Hamstrings],
    secondary: &[MuscleID::Glutes, MuscleID::Calves],
    accessory: &[MuscleID::Abs, MuscleID::Adductors, MuscleID::Abductors],
};

const PUSH: Template = Template {
    primary: &[MuscleID::Pecs, MuscleID::FrontDelts],
    secondary: &[MuscleID::SideDelts, MuscleID::Triceps],
    accessory: &[],
};

const PULL: Template = Template {
    primary: &[MuscleID::Lats, MuscleID::Traps],
    secondary: &[MuscleID::RearDelts, MuscleID::Biceps],
    accessory: &[MuscleID::Forearms],
};

const LEGS: Template = Template {
    primary: &[MuscleID::Quads, MuscleID::Hamstrings, MuscleID::Glutes],
    secondary: &[MuscleID::Calves],
    accessory: &[MuscleID::Abs, MuscleID::Adductors, MuscleID::Abductors],
};

const ACCESSORY: Template = Template {
    primary: &[MuscleID::Biceps, MuscleID::Triceps],
    secondary: &[MuscleID::SideDelts, MuscleID::Abs],
    accessory: &[MuscleID::Forearms, MuscleID::RearDelts],
};

/// Candidate categories, in order of preference, for a day whose scheduled category has no
/// muscle left.
const SUBSTITUTES: [SplitCategory; 3] = [
    SplitCategory::Accessory,
    SplitCategory::Lower,
    SplitCategory::Upper,
];

/// Split assignment of a single training day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySpec {
    pub weekday: Weekday,
    pub category: SplitCategory,
    pub primary: Vec<MuscleID>,
    pub secondary: Vec<MuscleID>,
    pub accessory: Vec<MuscleID>,
    /// Number of earlier days in the week with the same category.
    pub rotation: usize,
}

impl DaySpec {
    fn new(
        weekday: Weekday,
        category: SplitCategory,
        excluded: &BTreeSet<MuscleID>,
    ) -> Option<DaySpec> {
        let template = category.template();
        let keep = |muscles: &[MuscleID]| {
            muscles
                .iter()
                .filter(|m| !excluded.contains(m))
                .copied()
                .collect::<Vec<_>>()
        };
        let mut primary = keep(template.primary);
        let mut secondary = keep(template.secondary);
        let accessory = keep(template.accessory);

        if primary.is_empty() {
            if secondary.is_empty() {
                return None;
            }
            primary.push(secondary.remove(0));
        }

        Some(DaySpec {
            weekday,
            category,
            primary,
            secondary,
            accessory,
            rotation: 0,
        })
    }

    /// Primary muscles followed by secondary muscles.
    pub fn target_muscles(&self) -> impl Iterator<Item = MuscleID> + '_ {
        self.primary.iter().chain(&self.secondary).copied()
    }

    pub fn muscles(&self) -> impl Iterator<Item = MuscleID> + '_ {
        self.target_muscles().chain(self.accessory.iter().copied())
    }
}

/// Split pattern for the given training days, keyed by frequency.
fn split_for(days: &[Weekday]) -> Vec<SplitCategory> {
    use SplitCategory::{FullBody, Legs, Lower, Pull, Push, Upper};

    match days.len() {
        3 if !has_adjacent_days(days) => vec![FullBody, FullBody, FullBody],
        3 => vec![Push, Pull, Legs],
        4 => vec![Upper, Lower, Upper, Lower],
        5 => vec![Push, Pull, Legs, Upper, Lower],
        _ => vec![Push, Pull, Legs, Push, Pull, Legs],
    }
}

/// Whether two calendar days follow each other, with Saturday followed by Sunday.
#[must_use]
pub fn adjacent(a: Weekday, b: Weekday) -> bool {
    a.succ() == b || b.succ() == a
}

fn has_adjacent_days(days: &[Weekday]) -> bool {
    days.iter()
        .enumerate()
        .any(|(i, a)| days[i + 1..].iter().any(|b| adjacent(*a, *b)))
}

/// Resolves the split of a week from the user's preferences.
pub fn resolve_split(prefs: &UserPreferences) -> Result<Vec<DaySpec>, ValidationError> {
    resolve_split_excluding(prefs, &BTreeSet::new())
}

/// Resolves the split of a week, additionally excluding the given muscles.
pub fn resolve_split_excluding(
    prefs: &UserPreferences,
    excluded: &BTreeSet<MuscleID>,
) -> Result<Vec<DaySpec>, ValidationError> {
    let days = prefs.training_days()?;
    let excluded = prefs
        .excluded_muscles()?
        .union(excluded)
        .copied()
        .collect::<BTreeSet<_>>();
    let categories = split_for(&days);

    let mut options = days
        .iter()
        .zip(&categories)
        .map(|(weekday, category)| match DaySpec::new(*weekday, *category, &excluded) {
            Some(spec) => Ok(vec![spec]),
            None => {
                let candidates = SUBSTITUTES
                    .iter()
                    .filter_map(|substitute| DaySpec::new(*weekday, *substitute, &excluded))
                    .collect::<Vec<_>>();
                if candidates.is_empty() {
                    return Err(ValidationError::ExcludedCategory {
                        category: *category,
                        muscle: category.template().primary[0],
                    });
                }
                Ok(candidates)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let choice = least_conflicting(&days, &options);
    let mut result = options
        .iter_mut()
        .zip(choice)
        .map(|(candidates, i)| candidates.swap_remove(i))
        .collect::<Vec<_>>();

    for (spec, category) in result.iter().zip(&categories) {
        if spec.category != *category {
            debug!(
                "substituting {} for {category} on {}",
                spec.category, spec.weekday
            );
        }
    }

    let mut occurrences: BTreeMap<SplitCategory, usize> = BTreeMap::new();
    for spec in &mut result {
        let count = occurrences.entry(spec.category).or_default();
        spec.rotation = *count;
        *count += 1;
    }

    Ok(result)
}

/// Picks one candidate per day, minimizing the number of calendar-adjacent days that share a
/// category or a primary muscle.
///
/// Combinations are tried with the last day varying fastest, the first one with the fewest
/// conflicts wins.
fn least_conflicting(days: &[Weekday], options: &[Vec<DaySpec>]) -> Vec<usize> {
    let mut choice = vec![0; options.len()];
    let mut best = choice.clone();
    let mut best_conflicts = usize::MAX;

    loop {
        let count = conflicts(days, options, &choice);
        if count < best_conflicts {
            best_conflicts = count;
            best.clone_from(&choice);
            if count == 0 {
                break;
            }
        }

        let Some(i) = (0..choice.len())
            .rev()
            .find(|i| choice[*i] + 1 < options[*i].len())
        else {
            break;
        };
        choice[i] += 1;
        for later in &mut choice[i + 1..] {
            *later = 0;
        }
    }

    best
}

fn conflicts(days: &[Weekday], options: &[Vec<DaySpec>], choice: &[usize]) -> usize {
    (0..days.len())
        .flat_map(|i| (i + 1..days.len()).map(move |j| (i, j)))
        .filter(|(i, j)| adjacent(days[*i], days[*j]))
        .filter(|(i, j)| {
            let (a, b) = (&options[*i][choice[*i]], &options[*j][choice[*j]]);
            a.category == b.category || a.primary.iter().any(|m| b.primary.contains(m))
        })
        .count()
}

/// Weekday as stored, 0 = Sunday.
#[must_use]
pub fn day_of_week(spec: &DaySpec) -> u8 {
    weekday_index(spec.weekday)
}
